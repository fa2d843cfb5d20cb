use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::panel_state::{FilterablePanel, PanelFocus};

impl FilterablePanel {
    /// Handle a key press. Returns true if the panel consumed it.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return true;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
                return true;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::LowerBound => {
                if self.lower.handle_key(key) {
                    self.refilter();
                }
                true
            }
            PanelFocus::UpperBound => {
                if self.upper.handle_key(key) {
                    self.refilter();
                }
                true
            }
            PanelFocus::ResetButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.reset();
                    true
                }
                _ => false,
            },
        }
    }
}

#[cfg(test)]
#[path = "panel_events_tests.rs"]
mod panel_events_tests;
