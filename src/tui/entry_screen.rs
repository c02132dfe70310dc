//! The start screen: key and paste handling plus rendering.
//!
//! [`EntryScreen`] drives an [`EntryOrchestrator`] from terminal input. All
//! rows of the screen (start actions, recent files, help links) form one
//! flat list the cursor moves over; popups take the keyboard while open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::branding;
use crate::entry::{
    ActionOutcome, DialogKind, EntryOrchestrator, HelpLink, HostCollaborator, RecentView,
    StartAction,
};
use crate::i18n::Text;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::file_prompt::FilePrompt;
use crate::tui::language_picker::LanguagePicker;
use crate::tui::template_dialog::TemplateDialog;
use crate::tui::Theme;

/// One selectable row of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Row of the "Start" section
    Start(StartAction),
    /// Row of the "Recent" section, by index into the recent items
    Recent(usize),
    /// Row of the "Help" section
    Help(HelpLink),
}

/// Popup currently holding the keyboard.
#[derive(Debug, Clone)]
pub enum Popup {
    /// One of the two template dialogs
    Template(TemplateDialog),
    /// Language picker
    Language(LanguagePicker),
    /// File path prompt
    FilePrompt(FilePrompt),
}

/// Message shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Informational
    Info(String),
    /// A host call or navigation failed
    Error(String),
}

/// Start screen bound to a host.
#[derive(Debug)]
pub struct EntryScreen<H> {
    orchestrator: EntryOrchestrator<H>,
    /// Index of the focused row in [`Self::entries`]
    pub focus: usize,
    popup: Option<Popup>,
    status: Option<StatusMessage>,
    theme: Theme,
}

impl<H: HostCollaborator> EntryScreen<H> {
    /// Wraps an orchestrator with the cursor on the first row.
    pub const fn new(orchestrator: EntryOrchestrator<H>, theme: Theme) -> Self {
        Self {
            orchestrator,
            focus: 0,
            popup: None,
            status: None,
            theme,
        }
    }

    /// The wrapped orchestrator.
    pub const fn orchestrator(&self) -> &EntryOrchestrator<H> {
        &self.orchestrator
    }

    /// Consumes the screen, returning the orchestrator.
    pub fn into_orchestrator(self) -> EntryOrchestrator<H> {
        self.orchestrator
    }

    /// Popup currently open, if any.
    pub const fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Current status line message.
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Every selectable row, top to bottom.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .orchestrator
            .start_actions()
            .into_iter()
            .map(Entry::Start)
            .collect();
        entries.extend((0..self.orchestrator.recent_items().len()).map(Entry::Recent));
        entries.extend(self.orchestrator.help_links().into_iter().map(Entry::Help));
        entries
    }

    /// Row under the cursor.
    pub fn focused(&self) -> Option<Entry> {
        self.entries().get(self.focus).copied()
    }

    /// Handles a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let Some(popup) = self.popup.as_mut() {
            let event = match popup {
                Popup::Template(dialog) => dialog.handle_input(key),
                Popup::Language(picker) => picker.handle_input(key),
                Popup::FilePrompt(prompt) => prompt.handle_input(key),
            };
            if let Some(event) = event {
                self.handle_component_event(event);
            }
            return false;
        }

        let count = self.entries().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.focus = self.focus.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                if self.focus + 1 < count {
                    self.focus += 1;
                }
            }
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Char('l') => {
                self.popup = Some(Popup::Language(LanguagePicker::new(
                    self.orchestrator.locale(),
                )));
            }
            KeyCode::Char('o') => self.popup = Some(Popup::FilePrompt(FilePrompt::new())),
            KeyCode::Char('q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    /// Handles pasted text: paths dropped onto the terminal.
    ///
    /// While the path prompt is open the text goes into the prompt instead.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(Popup::FilePrompt(prompt)) = self.popup.as_mut() {
            prompt.paste(text);
            return;
        }
        let result = self.orchestrator.drop_text(text);
        self.report(result);
    }

    fn activate_focused(&mut self) {
        let Some(entry) = self.focused() else {
            return;
        };
        match entry {
            Entry::Start(action) => match self.orchestrator.activate(action) {
                Ok(ActionOutcome::Done) => self.sync_dialog(),
                Ok(ActionOutcome::OpenFilePicker) => {
                    self.popup = Some(Popup::FilePrompt(FilePrompt::new()));
                }
                Ok(ActionOutcome::Navigate(url)) => self.navigate(&url),
                Err(e) => self.report(Err(e)),
            },
            Entry::Recent(index) => {
                let result = self.orchestrator.open_recent_item(index);
                self.report(result);
            }
            Entry::Help(link) => self.navigate(&link.url()),
        }
    }

    /// Shows the picker matching the orchestrator's open dialog.
    fn sync_dialog(&mut self) {
        let catalog = self.orchestrator.catalog();
        self.popup = match self.orchestrator.active_dialog() {
            Some(kind @ DialogKind::CreateFromTemplate) => Some(Popup::Template(
                TemplateDialog::new(kind, catalog.templates().to_vec()),
            )),
            Some(kind @ DialogKind::AddAuthentication) => Some(Popup::Template(
                TemplateDialog::new(kind, catalog.auth_templates().to_vec()),
            )),
            None => None,
        };
    }

    fn handle_component_event(&mut self, event: ComponentEvent) {
        let popup = self.popup.take();
        match event {
            ComponentEvent::TemplateSelected(template) => {
                let result = match popup {
                    Some(Popup::Template(dialog))
                        if dialog.kind == DialogKind::AddAuthentication =>
                    {
                        self.orchestrator.select_auth_template(template)
                    }
                    _ => self.orchestrator.select_created_template(template),
                };
                self.report(result);
            }
            ComponentEvent::LanguageSelected(code) => {
                self.orchestrator.change_language(code);
                let label = self.orchestrator.text(Text::Language);
                self.set_status(format!("{label}: {code}"));
            }
            ComponentEvent::PathSubmitted(input) => {
                let result = self.orchestrator.submit_file_path(&input);
                self.report(result);
            }
            ComponentEvent::Cancelled => {
                if matches!(popup, Some(Popup::Template(_))) {
                    self.orchestrator.close_dialogs();
                }
            }
        }
    }

    /// Hands a link to the user through the clipboard.
    fn navigate(&mut self, url: &str) {
        tracing::info!("Navigating to {url}");
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
            Ok(()) => {
                let label = self.orchestrator.text(Text::LinkCopied);
                self.set_status(format!("{label}: {url}"));
            }
            Err(e) => {
                tracing::debug!("Clipboard unavailable: {e}");
                let label = self.orchestrator.text(Text::OpenInBrowser);
                self.set_status(format!("{label}: {url}"));
            }
        }
    }

    fn report(&mut self, result: anyhow::Result<()>) {
        if let Err(e) = result {
            tracing::warn!("Host rejected the request: {e:#}");
            self.status = Some(StatusMessage::Error(format!("{e:#}")));
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    /// Draws the screen and any open popup.
    pub fn render(&self, f: &mut Frame) {
        let area = f.area();
        let theme = &self.theme;
        let locale = self.orchestrator.locale().service();

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(6),    // Sections
                Constraint::Length(1), // Drop hint
                Constraint::Length(1), // Status
            ])
            .split(area);

        self.render_header(f, chunks[0]);

        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        let left = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(6)])
            .split(columns[0]);

        let entries = self.entries();
        self.render_section(f, left[0], self.section_block(Text::Start), &entries, |e| {
            matches!(e, Entry::Start(_))
        });
        self.render_recent(f, columns[1], &entries);
        self.render_section(f, left[1], self.section_block(Text::Help), &entries, |e| {
            matches!(e, Entry::Help(_))
        });

        f.render_widget(
            Paragraph::new(self.orchestrator.text(Text::ScreenHint))
                .style(Style::default().fg(theme.text_muted)),
            chunks[2],
        );

        if let Some(status) = &self.status {
            let (message, color) = match status {
                StatusMessage::Info(m) => (m.as_str(), theme.success),
                StatusMessage::Error(m) => (m.as_str(), theme.error),
            };
            f.render_widget(
                Paragraph::new(message).style(Style::default().fg(color)),
                chunks[3],
            );
        }

        match &self.popup {
            Some(Popup::Template(dialog)) => dialog.render(f, area, theme, locale),
            Some(Popup::Language(picker)) => picker.render(f, area, theme, locale),
            Some(Popup::FilePrompt(prompt)) => prompt.render(f, area, theme, locale),
            None => {}
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    branding::APP_DISPLAY_NAME,
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  v{}", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    format!("  [{}]", self.orchestrator.current_language()),
                    Style::default().fg(theme.accent),
                ),
            ]),
            Line::styled(
                self.orchestrator.text(Text::Description),
                Style::default().fg(theme.text_secondary),
            ),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    fn row_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.theme.accent)
                .bg(self.theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.text)
        }
    }

    fn entry_label(&self, entry: Entry) -> String {
        match entry {
            Entry::Start(action) => self.orchestrator.text(action.text()).to_string(),
            Entry::Help(link) => self.orchestrator.text(link.text()).to_string(),
            Entry::Recent(index) => match self.orchestrator.recent_items().entries() {
                RecentView::Items(names) => names.get(index).copied().unwrap_or_default().to_string(),
                RecentView::Placeholder => String::new(),
            },
        }
    }

    fn section_block(&self, title: Text) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.orchestrator.text(title)))
            .style(Style::default().fg(self.theme.primary))
    }

    fn render_section(
        &self,
        f: &mut Frame,
        area: Rect,
        block: Block,
        entries: &[Entry],
        belongs: impl Fn(&Entry) -> bool,
    ) {
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| belongs(e))
            .map(|(i, e)| ListItem::new(self.entry_label(*e)).style(self.row_style(i == self.focus)))
            .collect();
        f.render_widget(List::new(items).block(block), area);
    }

    fn render_recent(&self, f: &mut Frame, area: Rect, entries: &[Entry]) {
        let block = self.section_block(Text::Recent);
        if self.orchestrator.recent_items().entries() == RecentView::Placeholder {
            f.render_widget(
                Paragraph::new(self.orchestrator.text(Text::NoRecentFiles))
                    .style(Style::default().fg(self.theme.text_muted))
                    .block(block),
                area,
            );
            return;
        }
        self.render_section(f, area, block, entries, |e| matches!(e, Entry::Recent(_)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalyticsEmitter;
    use crate::entry::{ChosenFile, EntryProps, LocaleSwitcher};
    use crate::i18n::LocaleService;
    use crate::models::{RecentItem, Template, TemplateCatalog};
    use anyhow::Result;
    use ratatui::{backend::TestBackend, Terminal};

    #[derive(Debug, Default)]
    struct Host {
        opened: Vec<String>,
        reject: bool,
    }

    impl HostCollaborator for Host {
        fn on_file_drop(&mut self, file: ChosenFile) -> Result<()> {
            self.opened.push(format!("file:{}", file.display_name()));
            Ok(())
        }

        fn on_open_template(&mut self, template: Template) -> Result<()> {
            if self.reject {
                anyhow::bail!("cannot open {}", template.name);
            }
            self.opened.push(format!("template:{}", template.name));
            Ok(())
        }

        fn on_open_recent_item(&mut self, item: RecentItem) -> Result<()> {
            self.opened.push(format!("recent:{}", item.file_name));
            Ok(())
        }
    }

    fn screen_with(host: Host, recent: &[&str]) -> EntryScreen<Host> {
        let props = EntryProps {
            recent_items: recent.iter().map(|n| RecentItem::named(*n)).collect(),
            show_download_link: true,
        };
        let orchestrator = EntryOrchestrator::new(
            host,
            props,
            TemplateCatalog::builtin(),
            AnalyticsEmitter::disabled(),
            LocaleSwitcher::new(LocaleService::shared("en")),
        );
        EntryScreen::new(orchestrator, Theme::dark())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(screen: &EntryScreen<Host>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_entries_order() {
        let screen = screen_with(Host::default(), &["a.json"]);
        let entries = screen.entries();
        assert_eq!(entries[0], Entry::Start(StartAction::NewFile));
        assert_eq!(entries[5], Entry::Recent(0));
        assert_eq!(entries[6], Entry::Help(HelpLink::DownloadingAndInstalling));
        assert_eq!(entries.len(), 10);
    }

    #[test]
    fn test_enter_on_new_file_opens_empty() {
        let mut screen = screen_with(Host::default(), &[]);
        assert!(!screen.handle_key(key(KeyCode::Enter)));
        assert_eq!(screen.orchestrator().host().opened, vec!["template:Empty"]);
    }

    #[test]
    fn test_template_dialog_round_trip() {
        let mut screen = screen_with(Host::default(), &[]);
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Enter));
        assert!(matches!(screen.popup(), Some(Popup::Template(_))));
        assert_eq!(
            screen.orchestrator().active_dialog(),
            Some(DialogKind::CreateFromTemplate)
        );

        screen.handle_key(key(KeyCode::Esc));
        assert!(screen.popup().is_none());
        assert_eq!(screen.orchestrator().active_dialog(), None);

        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.popup().is_none());
        assert_eq!(screen.orchestrator().active_dialog(), None);
        let second = TemplateCatalog::builtin().templates()[1].name.clone();
        assert_eq!(
            screen.orchestrator().host().opened,
            vec![format!("template:{second}")]
        );
    }

    #[test]
    fn test_auth_dialog_routes_to_auth_selection() {
        let mut screen = screen_with(Host::default(), &[]);
        screen.focus = 3;
        assert_eq!(screen.focused(), Some(Entry::Start(StartAction::AddAuthentication)));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            screen.orchestrator().active_dialog(),
            Some(DialogKind::AddAuthentication)
        );
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.orchestrator().host().opened, vec!["template:AWS Cognito"]);
    }

    #[test]
    fn test_host_error_goes_to_status() {
        let host = Host {
            reject: true,
            ..Host::default()
        };
        let mut screen = screen_with(host, &[]);
        screen.handle_key(key(KeyCode::Enter));
        match screen.status() {
            Some(StatusMessage::Error(m)) => assert!(m.contains("cannot open Empty")),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_recent_item_activation() {
        let mut screen = screen_with(Host::default(), &["a.json", "b.json"]);
        screen.focus = 6;
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.orchestrator().host().opened, vec!["recent:b.json"]);
    }

    #[test]
    fn test_paste_drops_first_file() {
        let mut screen = screen_with(Host::default(), &[]);
        screen.handle_paste("/tmp/first.json /tmp/second.json");
        assert_eq!(screen.orchestrator().host().opened, vec!["file:first.json"]);
    }

    #[test]
    fn test_open_file_prompt_submits_path() {
        let mut screen = screen_with(Host::default(), &[]);
        screen.focus = 2;
        screen.handle_key(key(KeyCode::Enter));
        assert!(matches!(screen.popup(), Some(Popup::FilePrompt(_))));
        screen.handle_paste("/data/dogs.json");
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.popup().is_none());
        assert_eq!(screen.orchestrator().host().opened, vec!["file:dogs.json"]);
    }

    #[test]
    fn test_language_switch_relabels() {
        let mut screen = screen_with(Host::default(), &[]);
        screen.handle_key(key(KeyCode::Char('l')));
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.orchestrator().current_language(), "fr");
        assert!(screen.popup().is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut screen = screen_with(Host::default(), &[]);
        assert!(screen.handle_key(key(KeyCode::Char('q'))));
        assert!(screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_render_placeholder_and_labels() {
        let screen = screen_with(Host::default(), &[]);
        let text = screen_text(&screen);
        assert!(text.contains("No Recent Files"));
        assert!(text.contains("New File"));
        assert!(!text.contains("Open Collaborative Session"));
    }

    #[test]
    fn test_render_recent_names() {
        let screen = screen_with(Host::default(), &["a.json", "b.json"]);
        let text = screen_text(&screen);
        assert!(!text.contains("No Recent Files"));
        let a = text.find("a.json").unwrap();
        let b = text.find("b.json").unwrap();
        assert!(a < b);
    }
}
