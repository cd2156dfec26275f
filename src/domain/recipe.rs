use serde_json::Value;

pub const DEFAULT_IMAGE: &str = "default-recipe-image.jpg";
pub const DEFAULT_COOK_TIME: &str = "30";
pub const DEFAULT_SERVINGS: &str = "4";
pub const DEFAULT_RATING: &str = "4.5";
pub const UNTITLED: &str = "(Untitled)";

pub fn default_tags() -> Vec<String> {
    vec!["Quick".to_string(), "Easy".to_string()]
}

/// A recipe as listed in search results, with every optional field already
/// resolved to its display default.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: Option<String>,
    pub title: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub cook_time: String,
    pub servings: String,
    pub rating: String,
}

impl RecipeSummary {
    /// Summary for a legacy response entry that only carries a name.
    pub fn from_name(name: &str) -> Self {
        Self {
            id: None,
            title: name.to_string(),
            image_url: DEFAULT_IMAGE.to_string(),
            tags: default_tags(),
            cook_time: DEFAULT_COOK_TIME.to_string(),
            servings: DEFAULT_SERVINGS.to_string(),
            rating: DEFAULT_RATING.to_string(),
        }
    }

    /// Id lookup when the backend gave an id, name lookup otherwise.
    pub fn lookup_key(&self) -> RecipeKey {
        match &self.id {
            Some(id) => RecipeKey::Id(id.clone()),
            None => RecipeKey::Name(self.title.clone()),
        }
    }
}

/// How a recipe is addressed on the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeKey {
    Id(String),
    Name(String),
}

impl RecipeKey {
    pub fn label(&self) -> &str {
        match self {
            RecipeKey::Id(id) => id,
            RecipeKey::Name(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Structured {
        ingredients: Vec<String>,
        instructions: Vec<String>,
    },
    /// Legacy HTML/text body.
    Blob(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub title: String,
    pub image_url: Option<String>,
    pub content: DetailContent,
}

impl RecipeDetail {
    /// Plain text lines for display, without markup.
    pub fn body_lines(&self) -> Vec<String> {
        match &self.content {
            DetailContent::Structured {
                ingredients,
                instructions,
            } => {
                let mut lines = vec!["Ingredients".to_string()];
                lines.extend(ingredients.iter().map(|i| format!("  • {}", i)));
                lines.push(String::new());
                lines.push("Instructions".to_string());
                lines.extend(
                    instructions
                        .iter()
                        .enumerate()
                        .map(|(n, step)| format!("  {}. {}", n + 1, step)),
                );
                lines
            }
            DetailContent::Blob(body) => blob_paragraphs(body),
        }
    }
}

/// Display text for a loosely typed JSON field. Absent, null, `""`, `0` and
/// `false` all count as missing and yield `default`.
pub fn field_text(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => default.to_string(),
        Some(Value::String(s)) if s.is_empty() => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => default.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Recipe ids arrive as numbers or strings.
pub fn field_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Break an HTML/text blob into paragraphs of plain text.
///
/// Block-level closing tags and `<br>` end a paragraph, other tags are
/// dropped, entities are decoded and runs of whitespace collapse.
pub fn blob_paragraphs(html: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut tag = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or("")
                    .to_ascii_lowercase();
                if matches!(
                    name.as_str(),
                    "br" | "p" | "li" | "div" | "h1" | "h2" | "h3" | "h4" | "ul" | "ol"
                ) {
                    flush(&mut current, &mut paragraphs);
                }
            }
            _ if in_tag => tag.push(c),
            '\n' => flush(&mut current, &mut paragraphs),
            _ => current.push(c),
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(current: &mut String, paragraphs: &mut Vec<String>) {
    let text = collapse_whitespace(&html_escape::decode_html_entities(current.as_str()));
    if !text.is_empty() {
        paragraphs.push(text);
    }
    current.clear();
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
