//! Path prompt standing in for a file-selection control.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{LocaleService, Text};
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// Text input collecting a single file path.
#[derive(Debug, Clone, Default)]
pub struct FilePrompt {
    /// Current text input buffer
    pub input: String,
}

impl FilePrompt {
    /// Creates an empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends pasted text, keeping only its first line.
    pub fn paste(&mut self, text: &str) {
        if let Some(line) = text.lines().next() {
            self.input.push_str(line);
        }
    }
}

impl Component for FilePrompt {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Enter => Some(ComponentEvent::PathSubmitted(std::mem::take(&mut self.input))),
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleService) {
        let popup_area = centered_rect(70, 20, area);
        f.render_widget(Clear, popup_area);

        let lines = vec![
            Line::styled(format!("{}█", self.input), Style::default().fg(theme.text)),
            Line::styled(
                locale.text(Text::FilePromptHelp),
                Style::default().fg(theme.text_muted),
            ),
        ];
        let prompt = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", locale.text(Text::OpenFile)))
                .style(Style::default().bg(theme.background).fg(theme.primary)),
        );
        f.render_widget(prompt, popup_area);
    }
}
