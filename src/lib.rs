//! # Ladle
//!
//! A terminal front end for an ingredient-based recipe suggestion server.
//!
//! ## Architecture
//!
//! ```text
//! IngredientSet → RecipeSearchClient → ViewController → UI
//!                 RecipeDetailClient ↗
//! ```
//!
//! - [`domain`]: ingredient set, recipe models and notifications
//! - [`client`]: HTTP clients for the `get_recipes` and `get_recipe_details` endpoints
//! - [`controller`]: the view state machine shared by every front end
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # One-off search
//! ladle search egg rice scallion
//!
//! # Full recipe
//! ladle show --id 12
//! ladle show --name "Egg Fried Rice"
//!
//! # Launch TUI
//! ladle tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the loaded config to a
/// [`RecipeBackend`](client::RecipeBackend).
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/ladle/config.toml`, supporting:
/// - Server address, search contract and timeout
/// - Quick-pick ingredients and notification duration
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Command-line interface using clap.
///
/// - `search <ingredients...>` - Print matching recipes
/// - `show --id <id> | --name <name>` - Print one full recipe
/// - `tui` - Launch the TUI
pub mod cli;

/// HTTP access to the recipe server.
///
/// - [`RecipeBackend`](client::RecipeBackend): Async trait the front ends call
/// - [`RecipeSearchClient`](client::RecipeSearchClient): ingredient search
/// - [`RecipeDetailClient`](client::RecipeDetailClient): full recipe by id or name
pub mod client;

/// Search and detail flow, independent of any terminal.
pub mod controller;

/// Core domain models.
///
/// - [`IngredientSet`](domain::IngredientSet): ordered, duplicate-free ingredients
/// - [`RecipeSummary`](domain::RecipeSummary): one search result with display defaults
/// - [`RecipeDetail`](domain::RecipeDetail): structured or free-text recipe body
pub mod domain;

/// Terminal user interface.
///
/// Input box, ingredient tags, and a main pane showing either recipe cards
/// or one recipe. Tab cycles panes, Enter adds a tag or opens a recipe,
/// F5 searches, b goes back, ? shows help, q quits.
pub mod tui;
