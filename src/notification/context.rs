use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use super::state::{DismissPolicy, NotificationState, Severity};
use crate::error::RangeviewError;

/// Owner of the notification slot
///
/// Lives at the top of the UI tree. Everything below it reaches the slot
/// through the [`NotifierContext`] returned by [`NotificationCenter::context`].
#[derive(Debug)]
pub struct NotificationCenter {
    state: Rc<RefCell<NotificationState>>,
}

impl NotificationCenter {
    pub fn new(policy: DismissPolicy) -> Self {
        Self {
            state: Rc::new(RefCell::new(NotificationState::new(policy))),
        }
    }

    /// Context to hand down to child components
    pub fn context(&self) -> NotifierContext {
        NotifierContext {
            notifier: Some(Notifier {
                state: Rc::clone(&self.state),
            }),
        }
    }

    /// Fire due dismissals
    pub fn tick(&self, now: Instant) -> bool {
        self.state.borrow_mut().tick(now)
    }

    /// Borrow the slot for rendering or inspection
    pub fn state(&self) -> std::cell::Ref<'_, NotificationState> {
        self.state.borrow()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&self) -> std::cell::RefMut<'_, NotificationState> {
        self.state.borrow_mut()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DismissPolicy::default())
    }
}

/// Handle used by components to request a notification
#[derive(Debug, Clone)]
pub struct Notifier {
    state: Rc<RefCell<NotificationState>>,
}

impl Notifier {
    /// Replace the visible notification and schedule its dismissal
    pub fn notify(&self, severity: Severity, message: &str) {
        self.state.borrow_mut().show(severity, message);
    }
}

/// Context passed down the component tree
#[derive(Debug, Clone, Default)]
pub struct NotifierContext {
    notifier: Option<Notifier>,
}

impl NotifierContext {
    /// A context with no NotificationCenter above it
    pub fn detached() -> Self {
        Self::default()
    }

    /// Get the notifier, failing if no NotificationCenter is mounted
    pub fn notifier(&self) -> Result<Notifier, RangeviewError> {
        self.notifier
            .clone()
            .ok_or(RangeviewError::NotifierUnavailable)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
