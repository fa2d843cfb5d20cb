use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::panel::panel_render::render_panel;

const HELP_TEXT: &str =
    " Tab/Shift+Tab: Switch Field | Enter: Press Button | Ctrl+R: Reset Filters | Esc: Quit";
const LOADING_TEXT: &str = " Loading chart data...";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(6), Constraint::Length(1)]).split(frame.area());

        render_panel(&mut self.panel, frame, layout[0]);
        self.render_help_line(frame, layout[1]);

        // Toast goes last so it sits above everything else
        render_notification(frame, &self.notifications.state());
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let (text, color) = if self.panel.is_loading() {
            (LOADING_TEXT, Color::Yellow)
        } else {
            (HELP_TEXT, Color::DarkGray)
        };

        let help = Paragraph::new(text).style(Style::default().fg(color));
        frame.render_widget(help, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
