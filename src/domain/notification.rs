use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(text: impl Into<String>, severity: Severity, shown_at: Instant) -> Self {
        Self {
            text: text.into(),
            severity,
            shown_at,
        }
    }

    pub fn is_expired(&self, now: Instant, display: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= display
    }
}
