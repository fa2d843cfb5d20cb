//! Notification module for rangeview
//!
//! Provides a single-slot toast that reports success or failure and dismisses
//! itself after a fixed delay. Components reach it through a
//! [`NotifierContext`] handed down from the [`NotificationCenter`].

mod context;
mod render;
mod state;

pub use context::{NotificationCenter, Notifier, NotifierContext};
pub use render::render_notification;
pub use state::{DISMISS_AFTER, DismissPolicy, Notification, NotificationState, Severity};
