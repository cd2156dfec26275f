//! Configuration management for Ladle.
//!
//! Configuration is read from `~/.config/ladle/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use crate::client::SearchContract;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub notifications: NotificationConfig,
    pub quick_ingredients: QuickIngredients,
    /// Light theme palette, used at startup.
    pub colors: ColorConfig,
    /// Palette for the dark theme. Fields missing from `[dark_colors]`
    /// fall back to the light defaults.
    pub dark_colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            notifications: NotificationConfig::default(),
            quick_ingredients: QuickIngredients::default(),
            colors: ColorConfig::default(),
            dark_colors: ColorConfig::dark(),
            keybindings: KeybindingConfig::default(),
        }
    }
}

/// Where the recipe backend lives and how to talk to it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub contract: SearchContract,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            contract: SearchContract::Json,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub display_secs: u64,
}

impl NotificationConfig {
    pub fn display(&self) -> Duration {
        Duration::from_secs(self.display_secs)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { display_secs: 3 }
    }
}

/// Ingredients reachable with the digit keys `1`..`9`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QuickIngredients(pub Vec<String>);

impl QuickIngredients {
    /// Ingredient for a 1-based shortcut digit.
    pub fn for_digit(&self, digit: u32) -> Option<&str> {
        if digit == 0 {
            return None;
        }
        self.0.get(digit as usize - 1).map(String::as_str)
    }
}

impl Default for QuickIngredients {
    fn default() -> Self {
        Self(
            ["tomato", "onion", "garlic", "chicken", "rice", "egg", "cheese", "potato"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl Config {
    /// Palette for the current theme.
    pub fn palette(&self, dark: bool) -> &ColorConfig {
        if dark {
            &self.dark_colors
        } else {
            &self.colors
        }
    }

    /// Load configuration from `path`, or from the default path when `None`.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/ladle/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("ladle").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# Ladle Configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

# Shortcuts for the digit keys 1-9
quick_ingredients = ["tomato", "onion", "garlic", "chicken", "rice", "egg", "cheese", "potato"]

[server]
base_url = "http://127.0.0.1:5000"

# "json":   POST /get_recipes with {"ingredients": "..."}
# "legacy": GET /get_recipes?ingredients=...
contract = "json"

# Request timeout in seconds
timeout_secs = 10

[notifications]
# How long a notification stays on screen
display_secs = 3

[colors]
active_border = "LightYellow"
inactive_border = "DarkGray"

selection_bg = "LightYellow"
selection_fg = "Black"

tag_fg = "Black"
tag_bg = "LightRed"

card_title = "White"
card_meta = "Gray"
card_tags = "LightRed"

info = "Blue"
success = "Green"
warning = "Yellow"
error = "Red"

status_fg = "White"
status_bg = "DarkGray"

# Palette used after toggling the dark theme (t)
[dark_colors]
active_border = "LightCyan"
inactive_border = "Gray"

selection_bg = "Cyan"
selection_fg = "Black"

tag_fg = "White"
tag_bg = "Magenta"

card_title = "LightCyan"
card_meta = "Gray"
card_tags = "LightMagenta"

info = "LightBlue"
success = "LightGreen"
warning = "LightYellow"
error = "LightRed"

status_fg = "Gray"
status_bg = "Black"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_pane = ["Tab"]
prev_pane = ["BackTab", "Shift+Tab"]
select = ["Enter"]
back = ["b", "Backspace", "Esc"]
search = ["s", "F5", "Ctrl+s"]
remove_tag = ["d", "Delete"]
focus_input = ["i", "/"]
open_image = ["o"]
help = ["?"]
toggle_theme = ["t"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.server.contract, SearchContract::Json);
        assert_eq!(config.notifications.display(), Duration::from_secs(3));
        assert_eq!(config.colors.active_border, ratatui::style::Color::LightYellow);
        assert_eq!(config.dark_colors.active_border, ColorConfig::dark().active_border);
        assert_eq!(config.keybindings.toggle_theme, vec!["t"]);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
        assert_eq!(config.quick_ingredients, QuickIngredients::default());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[server]
contract = "legacy"

[colors]
active_border = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.server.contract, SearchContract::Legacy);
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(
            config.colors.active_border,
            ratatui::style::Color::Rgb(255, 0, 0)
        );
        assert_eq!(
            config.colors.inactive_border,
            ratatui::style::Color::DarkGray
        );
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.keybindings.search, vec!["s", "F5", "Ctrl+s"]);
        assert_eq!(config.dark_colors.status_bg, ratatui::style::Color::Black);
    }

    #[test]
    fn test_palette_follows_theme() {
        let config = Config::default();
        assert_eq!(config.palette(false).active_border, config.colors.active_border);
        assert_eq!(config.palette(true).active_border, config.dark_colors.active_border);
    }

    #[test]
    fn test_unknown_contract_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[server]\ncontract = \"soap\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_quick_ingredient_digits() {
        let quick = QuickIngredients(vec!["egg".into(), "rice".into()]);
        assert_eq!(quick.for_digit(1), Some("egg"));
        assert_eq!(quick.for_digit(2), Some("rice"));
        assert_eq!(quick.for_digit(3), None);
        assert_eq!(quick.for_digit(0), None);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.contract, SearchContract::Json);

        // Reloading the written file gives the same values.
        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded.server.base_url, config.server.base_url);
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nbase_url = 1").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
