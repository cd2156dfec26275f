use std::time::{Duration, Instant};

use crate::domain::{Notification, Severity};

pub const DEFAULT_DISPLAY: Duration = Duration::from_secs(3);

/// Independent, self-expiring notifications. Several may be visible at once.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    display: Duration,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(display: Duration) -> Self {
        Self {
            display,
            active: Vec::new(),
        }
    }

    pub fn push(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.active.push(Notification::new(text, severity, now));
    }

    /// Drop every notification whose display window has passed.
    pub fn expire(&mut self, now: Instant) {
        let display = self.display;
        self.active.retain(|n| !n.is_expired(now, display));
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.active.last()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY)
    }
}
