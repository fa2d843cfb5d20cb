//! Notification rendering
//!
//! Draws the toast fixed in the top-right corner of the frame.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationState, Severity};
use crate::widgets::popup::{clear_area, popup_top_right};

const HORIZONTAL_PADDING: u16 = 4;
const TOAST_HEIGHT: u16 = 3;
const SCREEN_MARGIN: u16 = 1;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Failure => Color::Red,
    }
}

/// Render the current notification, if any
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let width = (notification.message.width() as u16).saturating_add(HORIZONTAL_PADDING);
    let area = popup_top_right(frame.area(), width, TOAST_HEIGHT, SCREEN_MARGIN);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = Style::default()
        .fg(Color::White)
        .bg(severity_color(notification.severity));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(style);

    let paragraph = Paragraph::new(notification.message.as_str())
        .block(block)
        .style(style.add_modifier(Modifier::BOLD));

    clear_area(frame, area);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
