use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input holding one bound
pub struct BoundInput {
    pub textarea: TextArea<'static>,
    title: &'static str,
    placeholder: &'static str,
}

impl BoundInput {
    pub fn new(title: &'static str, placeholder: &'static str) -> Self {
        Self {
            textarea: Self::build_textarea(title, placeholder, String::new()),
            title,
            placeholder,
        }
    }

    fn build_textarea(
        title: &'static str,
        placeholder: &'static str,
        text: String,
    ) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![text]);

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        textarea.move_cursor(CursorMove::End);

        textarea
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Current raw text, unparsed
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    pub fn set_text(&mut self, text: &str) {
        self.textarea = Self::build_textarea(self.title, self.placeholder, text.to_string());
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Feed a key to the input. Returns true if the text changed.
    ///
    /// Line breaks are swallowed so the input stays single-line.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let is_line_break = key.code == KeyCode::Enter
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
        if is_line_break {
            return false;
        }

        let before = self.text().to_string();
        self.textarea.input(key);
        self.text() != before
    }
}
