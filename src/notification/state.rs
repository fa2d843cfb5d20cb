use std::time::{Duration, Instant};

use serde::Deserialize;

/// How long a notification stays visible after it is requested
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Notification severity, only affects presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
}

/// A single displayed notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Which scheduled dismissals are honoured when several requests overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DismissPolicy {
    /// Every request schedules a dismissal and every dismissal fires, so a
    /// superseded notification's deadline can clear its successor early.
    #[default]
    FireAll,
    /// A new request replaces the pending dismissal of the previous one.
    LatestOnly,
}

/// Notification slot plus its scheduled dismissals
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    pending_dismissals: Vec<Instant>,
    policy: DismissPolicy,
}

impl NotificationState {
    pub fn new(policy: DismissPolicy) -> Self {
        Self {
            current: None,
            pending_dismissals: Vec::new(),
            policy,
        }
    }

    /// Show a notification, dismissing it `DISMISS_AFTER` from now
    pub fn show(&mut self, severity: Severity, message: &str) {
        self.show_at(severity, message, Instant::now());
    }

    /// Show a notification requested at `now`
    pub fn show_at(&mut self, severity: Severity, message: &str, now: Instant) {
        self.current = Some(Notification {
            severity,
            message: message.to_string(),
        });

        if self.policy == DismissPolicy::LatestOnly {
            self.pending_dismissals.clear();
        }
        self.pending_dismissals.push(now + DISMISS_AFTER);

        log::debug!("Notification shown ({:?}): {}", severity, message);
    }

    /// Fire every dismissal whose deadline is at or before `now`
    ///
    /// Returns true if the visible notification was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.pending_dismissals.len();
        self.pending_dismissals.retain(|deadline| *deadline > now);
        let fired = before - self.pending_dismissals.len();

        if fired > 0 && self.current.is_some() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    #[cfg(test)]
    pub(crate) fn policy(&self) -> DismissPolicy {
        self.policy
    }

    /// Number of dismissals still waiting to fire
    #[cfg(test)]
    pub(crate) fn pending_dismissals(&self) -> usize {
        self.pending_dismissals.len()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
