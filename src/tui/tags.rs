use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::ColorConfig;
use crate::domain::IngredientSet;

/// One removable ingredient chip. `index` is the position to pass to
/// `IngredientSet::remove` when the tag is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub index: usize,
    pub label: String,
}

/// Project the ingredient set into tags, in display order.
pub fn project(ingredients: &IngredientSet) -> Vec<Tag> {
    ingredients
        .iter()
        .enumerate()
        .map(|(index, label)| Tag {
            index,
            label: label.to_string(),
        })
        .collect()
}

/// Render tags as a single line of chips. The selected one is highlighted
/// when the tag bar has focus.
pub fn tag_line(tags: &[Tag], selected: Option<usize>, colors: &ColorConfig) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);

    for tag in tags {
        let style = if selected == Some(tag.index) {
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(colors.tag_bg).fg(colors.tag_fg)
        };
        spans.push(Span::styled(format!(" {} × ", tag.label), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_keeps_order_and_indices() {
        let set: IngredientSet = ["egg", "rice", "scallion"].into_iter().collect();
        let tags = project(&set);

        assert_eq!(tags.len(), 3);
        assert_eq!(tags[2], Tag { index: 2, label: "scallion".into() });
    }

    #[test]
    fn test_project_is_idempotent() {
        let set: IngredientSet = ["egg", "rice"].into_iter().collect();
        assert_eq!(project(&set), project(&set));
    }

    #[test]
    fn test_removing_via_tag_index_reprojects() {
        let mut set: IngredientSet = ["egg", "rice", "leek"].into_iter().collect();
        let tag = project(&set)[1].clone();
        set.remove(tag.index);

        let labels: Vec<_> = project(&set).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["egg", "leek"]);
    }

    #[test]
    fn test_tag_line_has_a_chip_per_tag() {
        let set: IngredientSet = ["egg", "rice"].into_iter().collect();
        let line = tag_line(&project(&set), Some(0), &ColorConfig::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, " egg ×   rice ×  ");
    }
}
