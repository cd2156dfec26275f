//! Session state and the search/detail view state machine.
//!
//! ```text
//! Idle ──search──▶ Searching ──non-empty──▶ ResultsShown ──select──▶ DetailShown
//!   ▲                  │                         ▲                       │
//!   └──empty / error───┘                         └─────────back──────────┘
//! ```
//!
//! The controller never performs I/O. Starting a request hands back a
//! ticket; the caller runs the request and feeds the outcome back together
//! with the ticket's generation. Outcomes from superseded requests are
//! dropped.

pub mod notifications;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::app::Result;
use crate::domain::{IngredientSet, RecipeDetail, RecipeKey, RecipeSummary, Severity};

pub use notifications::NotificationCenter;

pub const MSG_EMPTY_INPUT: &str = "Please enter some ingredients first!";
pub const MSG_NO_RECIPES: &str = "No recipes found for these ingredients.";
pub const MSG_SEARCH_FAILED: &str = "Error fetching recipes. Please try again.";
pub const MSG_DETAIL_FAILED: &str = "Failed to fetch recipe details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Searching,
    ResultsShown,
    DetailShown,
}

/// A search the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub ingredients: String,
}

/// A detail fetch the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub generation: u64,
    pub key: RecipeKey,
}

pub struct ViewController {
    state: ViewState,
    ingredients: IngredientSet,
    results: Vec<RecipeSummary>,
    detail: Option<RecipeDetail>,
    loading: bool,
    notifications: NotificationCenter,
    search_generation: u64,
    detail_generation: u64,
    dark_theme: bool,
}

impl ViewController {
    pub fn new(notification_display: Duration) -> Self {
        Self {
            state: ViewState::Idle,
            ingredients: IngredientSet::new(),
            results: Vec::new(),
            detail: None,
            loading: false,
            notifications: NotificationCenter::new(notification_display),
            search_generation: 0,
            detail_generation: 0,
            dark_theme: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn detail(&self) -> Option<&RecipeDetail> {
        self.detail.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// Flip between the light and dark theme. Returns the new setting.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        debug!(dark = self.dark_theme, "Theme toggled");
        self.dark_theme
    }

    /// The result list and the detail view are never visible together.
    pub fn results_visible(&self) -> bool {
        self.state == ViewState::ResultsShown
    }

    pub fn detail_visible(&self) -> bool {
        self.state == ViewState::DetailShown
    }

    pub fn add_ingredient(&mut self, text: &str) -> bool {
        self.ingredients.add(text)
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        self.ingredients.remove(index)
    }

    pub fn notify(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.notifications.push(text, severity, now);
    }

    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    /// Start a search over the current ingredient set.
    ///
    /// Accepted from every state; a newer search supersedes any request
    /// still in flight. Returns `None` and raises an error notification
    /// when there is nothing to search for.
    pub fn begin_search(&mut self, now: Instant) -> Option<SearchTicket> {
        let payload = self.ingredients.to_query_payload();
        if payload.trim().is_empty() {
            self.notify(MSG_EMPTY_INPUT, Severity::Error, now);
            return None;
        }

        self.search_generation += 1;
        // A pending detail fetch belongs to the old result list.
        self.detail_generation += 1;

        self.results.clear();
        self.detail = None;
        self.loading = true;
        self.state = ViewState::Searching;

        debug!(generation = self.search_generation, "Search started for '{}'", payload);

        Some(SearchTicket {
            generation: self.search_generation,
            ingredients: payload,
        })
    }

    /// Apply a search outcome. Returns `false` when it was stale and ignored.
    pub fn finish_search(
        &mut self,
        generation: u64,
        outcome: Result<Vec<RecipeSummary>>,
        now: Instant,
    ) -> bool {
        if generation != self.search_generation || self.state != ViewState::Searching {
            debug!(generation, "Discarding stale search response");
            return false;
        }

        self.loading = false;

        match outcome {
            Ok(recipes) if recipes.is_empty() => {
                self.state = ViewState::Idle;
                self.notify(MSG_NO_RECIPES, Severity::Warning, now);
            }
            Ok(recipes) => {
                info!("Found {} recipes", recipes.len());
                let message = match recipes.len() {
                    1 => "Found 1 recipe".to_string(),
                    n => format!("Found {} recipes", n),
                };
                self.results = recipes;
                self.state = ViewState::ResultsShown;
                self.notify(message, Severity::Success, now);
            }
            Err(e) => {
                warn!("Recipe search failed: {}", e);
                self.state = ViewState::Idle;
                self.notify(MSG_SEARCH_FAILED, Severity::Error, now);
            }
        }

        true
    }

    /// Request the detail of the result at `index`. Only valid while the
    /// result list is shown; anything else is a no-op.
    pub fn select_recipe(&mut self, index: usize) -> Option<DetailTicket> {
        if self.state != ViewState::ResultsShown {
            return None;
        }
        let key = self.results.get(index)?.lookup_key();

        self.detail_generation += 1;
        self.loading = true;

        debug!(generation = self.detail_generation, "Detail requested for {:?}", key);

        Some(DetailTicket {
            generation: self.detail_generation,
            key,
        })
    }

    /// Apply a detail outcome. Returns `false` when it was stale and ignored.
    pub fn finish_detail(
        &mut self,
        generation: u64,
        outcome: Result<RecipeDetail>,
        now: Instant,
    ) -> bool {
        if generation != self.detail_generation || self.state != ViewState::ResultsShown {
            debug!(generation, "Discarding stale detail response");
            return false;
        }

        self.loading = false;

        match outcome {
            Ok(detail) => {
                self.detail = Some(detail);
                self.state = ViewState::DetailShown;
            }
            Err(e) if e.is_transport() => {
                warn!("Recipe detail fetch failed: {}", e);
                self.notify(MSG_DETAIL_FAILED, Severity::Error, now);
            }
            Err(e) => {
                warn!("Backend reported: {}", e);
                self.notify(e.to_string(), Severity::Error, now);
            }
        }

        true
    }

    /// Leave the detail view for the result list.
    pub fn back(&mut self) -> bool {
        if self.state != ViewState::DetailShown {
            return false;
        }
        self.detail = None;
        self.state = ViewState::ResultsShown;
        true
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(notifications::DEFAULT_DISPLAY)
    }
}
