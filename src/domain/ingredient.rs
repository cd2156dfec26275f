/// Ordered, duplicate-free list of ingredients entered during a session.
///
/// Entries are trimmed and never empty. Duplicates are detected by exact
/// string match, so "Egg" and "egg" are two different ingredients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    entries: Vec<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trimmed ingredient. Returns `false` when the input was blank or
    /// already present.
    pub fn add(&mut self, text: &str) -> bool {
        let ingredient = text.trim();
        if ingredient.is_empty() || self.contains(ingredient) {
            return false;
        }
        self.entries.push(ingredient.to_string());
        true
    }

    /// Remove the ingredient at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.entries.iter().any(|e| e == ingredient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The string sent to the search endpoint, e.g. `"egg, rice"`.
    pub fn to_query_payload(&self) -> String {
        self.entries.join(", ")
    }
}

impl<'a> FromIterator<&'a str> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = IngredientSet::new();
        for text in iter {
            set.add(text);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_input() {
        let mut set = IngredientSet::new();
        assert!(set.add("  egg  "));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["egg"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut set = IngredientSet::new();
        assert!(!set.add(""));
        assert!(!set.add("   \t"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_duplicate_is_idempotent() {
        let mut set = IngredientSet::new();
        set.add("egg");
        set.add("rice");
        let before = set.clone();

        assert!(!set.add("egg"));
        assert!(!set.add(" egg "));
        assert_eq!(set, before);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let mut set = IngredientSet::new();
        assert!(set.add("Egg"));
        assert!(set.add("egg"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut set: IngredientSet = ["tomato", "onion"].into_iter().collect();
        let before = set.clone();

        set.add("garlic");
        assert_eq!(set.remove(2), Some("garlic".to_string()));
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining() {
        let mut set: IngredientSet = ["a", "b", "c", "d"].into_iter().collect();
        set.remove(1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut set: IngredientSet = ["egg"].into_iter().collect();
        assert_eq!(set.remove(5), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_query_payload() {
        let set: IngredientSet = ["egg", "rice"].into_iter().collect();
        assert_eq!(set.to_query_payload(), "egg, rice");
        assert_eq!(IngredientSet::new().to_query_payload(), "");
    }
}
