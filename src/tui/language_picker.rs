//! Language selection popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::entry::LocaleSwitcher;
use crate::i18n::{LocaleService, Text};
use crate::models::LanguageOption;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// Cursor over the fixed language options.
#[derive(Debug, Clone)]
pub struct LanguagePicker {
    options: &'static [LanguageOption],
    /// Index under the cursor; `None` until the user moves when no option
    /// matched the active language
    pub selected: Option<usize>,
}

impl LanguagePicker {
    /// Opens the picker with the active language preselected, if it is offered.
    pub fn new(switcher: &LocaleSwitcher) -> Self {
        let options = switcher.options();
        let current = switcher.current_language();
        let selected = options.iter().position(|o| o.code == current);
        Self { options, selected }
    }

    fn move_by(&mut self, delta: isize) {
        let last = self.options.len().saturating_sub(1);
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) if delta < 0 => i.saturating_sub(delta.unsigned_abs()),
            Some(i) => (i + delta.unsigned_abs()).min(last),
        });
    }
}

impl Component for LanguagePicker {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Enter => {
                return self
                    .selected
                    .and_then(|i| self.options.get(i))
                    .map(|o| ComponentEvent::LanguageSelected(o.code));
            }
            KeyCode::Esc | KeyCode::Char('q') => return Some(ComponentEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleService) {
        let popup_area = centered_rect(30, 40, area);
        f.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if Some(i) == self.selected {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(format!("{} ({})", option.label, option.code)).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", locale.text(Text::Language)))
                .style(Style::default().bg(theme.background).fg(theme.primary)),
        );
        f.render_widget(list, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleService;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_preselects_active_language() {
        let switcher = LocaleSwitcher::new(LocaleService::shared("cn"));
        let picker = LanguagePicker::new(&switcher);
        assert_eq!(picker.selected, Some(2));
    }

    #[test]
    fn test_no_preselection_for_unknown_language() {
        let switcher = LocaleSwitcher::new(LocaleService::shared("de"));
        let mut picker = LanguagePicker::new(&switcher);
        assert_eq!(picker.selected, None);
        assert_eq!(picker.handle_input(key(KeyCode::Enter)), None);

        picker.handle_input(key(KeyCode::Down));
        assert_eq!(picker.selected, Some(0));
    }

    #[test]
    fn test_select_french() {
        let switcher = LocaleSwitcher::new(LocaleService::shared("en"));
        let mut picker = LanguagePicker::new(&switcher);
        picker.handle_input(key(KeyCode::Down));
        assert_eq!(
            picker.handle_input(key(KeyCode::Enter)),
            Some(ComponentEvent::LanguageSelected("fr"))
        );
    }

    #[test]
    fn test_cursor_clamped() {
        let switcher = LocaleSwitcher::new(LocaleService::shared("nl"));
        let mut picker = LanguagePicker::new(&switcher);
        picker.handle_input(key(KeyCode::Down));
        assert_eq!(picker.selected, Some(4));
        picker.selected = Some(0);
        picker.handle_input(key(KeyCode::Up));
        assert_eq!(picker.selected, Some(0));
    }
}
