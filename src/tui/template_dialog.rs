//! Template picker popup used by both template dialogs.
//!
//! A fresh picker is built every time a dialog opens, so the cursor and the
//! search text never carry over between openings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::entry::DialogKind;
use crate::i18n::{LocaleService, Text};
use crate::models::Template;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// Cursor and search state of an open template dialog.
#[derive(Debug, Clone)]
pub struct TemplateDialog {
    /// Which dialog this picker serves
    pub kind: DialogKind,
    /// Templates offered, in catalog order
    pub templates: Vec<Template>,
    /// Search filter text
    pub search: String,
    /// Selected index in the filtered list
    pub selected: usize,
    /// Whether keystrokes go to the search field
    pub search_active: bool,
}

impl TemplateDialog {
    /// Creates a picker over `templates` with the first entry selected.
    pub fn new(kind: DialogKind, templates: Vec<Template>) -> Self {
        Self {
            kind,
            templates,
            search: String::new(),
            selected: 0,
            search_active: false,
        }
    }

    /// Templates matching the search text in name or description.
    pub fn filtered_templates(&self) -> Vec<&Template> {
        if self.search.is_empty() {
            return self.templates.iter().collect();
        }

        let search_lower = self.search.to_lowercase();
        self.templates
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&search_lower)
                    || t.description.to_lowercase().contains(&search_lower)
            })
            .collect()
    }

    /// The template under the cursor, if the filtered list is not empty.
    pub fn selected_template(&self) -> Option<&Template> {
        self.filtered_templates().get(self.selected).copied()
    }

    /// Moves selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves selection down.
    pub fn select_next(&mut self) {
        let count = self.filtered_templates().len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    fn title(&self) -> Text {
        match self.kind {
            DialogKind::CreateFromTemplate => Text::StartFromTemplate,
            DialogKind::AddAuthentication => Text::AddAuthentication,
        }
    }
}

impl Component for TemplateDialog {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        if self.search_active {
            match key.code {
                KeyCode::Esc => {
                    self.search_active = false;
                    self.search.clear();
                    self.selected = 0;
                }
                KeyCode::Backspace => {
                    self.search.pop();
                    self.selected = 0;
                }
                KeyCode::Enter => {
                    return self
                        .selected_template()
                        .cloned()
                        .map(ComponentEvent::TemplateSelected);
                }
                KeyCode::Up => self.select_previous(),
                KeyCode::Down => self.select_next(),
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.selected = 0;
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Enter => {
                return self
                    .selected_template()
                    .cloned()
                    .map(ComponentEvent::TemplateSelected);
            }
            KeyCode::Esc | KeyCode::Char('q') => return Some(ComponentEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleService) {
        let popup_area = centered_rect(60, 70, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", locale.text(self.title())))
            .style(Style::default().bg(theme.background).fg(theme.primary));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Search
                Constraint::Min(3),    // List
                Constraint::Length(3), // Description
                Constraint::Length(1), // Help line
            ])
            .split(inner);

        let search_label = locale.text(Text::Search);
        let search_text = if self.search_active {
            format!("{search_label}: {}█", self.search)
        } else if self.search.is_empty() {
            locale.text(Text::SearchHint).to_string()
        } else {
            format!("{search_label}: {}", self.search)
        };
        let search_style = if self.search_active {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        f.render_widget(Paragraph::new(search_text).style(search_style), chunks[0]);

        let filtered = self.filtered_templates();
        let items: Vec<ListItem> = filtered
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(template.name.clone(), style)))
            })
            .collect();
        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::TOP)),
            chunks[1],
        );

        let description = self
            .selected_template()
            .map_or(locale.text(Text::NoMatchingTemplates), |t| t.description.as_str());
        f.render_widget(
            Paragraph::new(description)
                .style(Style::default().fg(theme.text_secondary))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::TOP)),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new(locale.text(Text::TemplateDialogHelp))
                .style(Style::default().fg(theme.text_muted)),
            chunks[3],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateCatalog;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> TemplateDialog {
        TemplateDialog::new(
            DialogKind::CreateFromTemplate,
            TemplateCatalog::builtin().templates().to_vec(),
        )
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut dialog = dialog();
        dialog.select_previous();
        assert_eq!(dialog.selected, 0);

        for _ in 0..50 {
            dialog.select_next();
        }
        assert_eq!(dialog.selected, dialog.templates.len() - 1);
    }

    #[test]
    fn test_enter_selects_template_under_cursor() {
        let mut dialog = dialog();
        dialog.handle_input(key(KeyCode::Down));
        let event = dialog.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(ComponentEvent::TemplateSelected(dialog.templates[1].clone()))
        );
    }

    #[test]
    fn test_search_filters_and_selects() {
        let mut dialog = dialog();
        dialog.handle_input(key(KeyCode::Char('/')));
        for c in "audio".chars() {
            dialog.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(dialog.filtered_templates().len(), 1);

        match dialog.handle_input(key(KeyCode::Enter)) {
            Some(ComponentEvent::TemplateSelected(t)) => assert_eq!(t.name, "Audio Transcription"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_search_without_match_selects_nothing() {
        let mut dialog = dialog();
        dialog.handle_input(key(KeyCode::Char('/')));
        for c in "zzz".chars() {
            dialog.handle_input(key(KeyCode::Char(c)));
        }
        assert!(dialog.selected_template().is_none());
        assert_eq!(dialog.handle_input(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_escape_leaves_search_then_cancels() {
        let mut dialog = dialog();
        dialog.handle_input(key(KeyCode::Char('/')));
        dialog.handle_input(key(KeyCode::Char('x')));
        assert_eq!(dialog.handle_input(key(KeyCode::Esc)), None);
        assert!(dialog.search.is_empty());
        assert_eq!(dialog.handle_input(key(KeyCode::Esc)), Some(ComponentEvent::Cancelled));
    }
}
