//! Tests for the notifier context

use super::*;
use std::time::Duration;

#[test]
fn test_context_from_center_provides_notifier() {
    let center = NotificationCenter::default();
    let ctx = center.context();
    assert!(ctx.notifier().is_ok());
}

#[test]
fn test_detached_context_fails_fast() {
    let ctx = NotifierContext::detached();
    let err = ctx.notifier().unwrap_err();
    assert!(matches!(err, RangeviewError::NotifierUnavailable));
}

#[test]
fn test_notify_is_visible_through_center() {
    let center = NotificationCenter::default();
    let notifier = center.context().notifier().unwrap();

    notifier.notify(Severity::Failure, "Failed to load chart data");

    let state = center.state();
    let notification = state.current().unwrap();
    assert_eq!(notification.severity, Severity::Failure);
    assert_eq!(notification.message, "Failed to load chart data");
}

#[test]
fn test_cloned_notifiers_share_one_slot() {
    let center = NotificationCenter::default();
    let ctx = center.context();
    let first = ctx.notifier().unwrap();
    let second = ctx.clone().notifier().unwrap();

    first.notify(Severity::Success, "one");
    second.notify(Severity::Failure, "two");

    assert_eq!(center.state().current_message(), Some("two"));
}

#[test]
fn test_center_tick_dismisses() {
    let center = NotificationCenter::new(DismissPolicy::FireAll);
    let start = Instant::now();
    center
        .state_mut()
        .show_at(Severity::Success, "hello", start);

    assert!(!center.tick(start + Duration::from_millis(100)));
    assert!(center.tick(start + Duration::from_millis(3000)));
    assert!(center.state().current().is_none());
}

#[test]
fn test_center_keeps_policy() {
    let center = NotificationCenter::new(DismissPolicy::LatestOnly);
    assert_eq!(center.state().policy(), DismissPolicy::LatestOnly);
}
