//! Shared test doubles for start screen tests.
#![allow(dead_code)] // Not every test file uses every fixture

use anyhow::Result;
use ratatui::{backend::TestBackend, Terminal};
use std::cell::RefCell;
use std::rc::Rc;

use udt_start::analytics::{AnalyticsEmitter, AnalyticsEvent, AnalyticsSink};
use udt_start::entry::{ChosenFile, EntryOrchestrator, EntryProps, HostCollaborator, LocaleSwitcher};
use udt_start::i18n::{LocaleService, SharedLocale};
use udt_start::models::{RecentItem, Template, TemplateCatalog};
use udt_start::tui::{EntryScreen, Theme};

/// One observable effect, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// Analytics event with its template tag
    Analytics(String),
    /// Host received a file
    FileDrop(ChosenFile),
    /// Host received a template
    OpenTemplate(String),
    /// Host received a recent item
    OpenRecentItem(RecentItem),
    /// Host received a session request
    OpenSession,
}

/// Log shared between the host double and the analytics sink double.
pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Host double recording every call.
pub struct RecordingHost {
    pub log: CallLog,
    pub sessions: bool,
}

impl HostCollaborator for RecordingHost {
    fn on_file_drop(&mut self, file: ChosenFile) -> Result<()> {
        self.log.borrow_mut().push(Call::FileDrop(file));
        Ok(())
    }

    fn on_open_template(&mut self, template: Template) -> Result<()> {
        self.log.borrow_mut().push(Call::OpenTemplate(template.name));
        Ok(())
    }

    fn on_open_recent_item(&mut self, item: RecentItem) -> Result<()> {
        self.log.borrow_mut().push(Call::OpenRecentItem(item));
        Ok(())
    }

    fn supports_open_session(&self) -> bool {
        self.sessions
    }

    fn on_click_open_session(&mut self) -> Result<()> {
        self.log.borrow_mut().push(Call::OpenSession);
        Ok(())
    }
}

/// Analytics sink double writing into the shared log.
pub struct RecordingSink(pub CallLog);

impl AnalyticsSink for RecordingSink {
    fn capture(&self, event: &AnalyticsEvent) -> Result<()> {
        let tag = event.property("clicked_template").unwrap_or_default().to_string();
        self.0.borrow_mut().push(Call::Analytics(tag));
        Ok(())
    }
}

/// Analytics sink double that rejects every event.
pub struct FailingSink;

impl AnalyticsSink for FailingSink {
    fn capture(&self, _event: &AnalyticsEvent) -> Result<()> {
        anyhow::bail!("analytics backend unreachable")
    }
}

/// Everything a test needs to drive and observe a start screen.
pub struct Harness {
    pub orchestrator: EntryOrchestrator<RecordingHost>,
    pub log: CallLog,
    pub locale: SharedLocale,
}

/// Builds an orchestrator in English over the built-in catalog.
pub fn harness(recent: &[&str], sessions: bool) -> Harness {
    harness_with_analytics(recent, sessions, |log| {
        AnalyticsEmitter::disabled().with_sink(RecordingSink(Rc::clone(log)))
    })
}

/// Like [`harness`], with the analytics emitter built from the shared log.
pub fn harness_with_analytics(
    recent: &[&str],
    sessions: bool,
    analytics: impl FnOnce(&CallLog) -> AnalyticsEmitter,
) -> Harness {
    let log: CallLog = Rc::default();
    let locale = LocaleService::shared("en");
    let host = RecordingHost {
        log: Rc::clone(&log),
        sessions,
    };
    let props = EntryProps {
        recent_items: recent.iter().map(|name| RecentItem::named(*name)).collect(),
        show_download_link: true,
    };
    let orchestrator = EntryOrchestrator::new(
        host,
        props,
        TemplateCatalog::builtin(),
        analytics(&log),
        LocaleSwitcher::new(Rc::clone(&locale)),
    );
    Harness {
        orchestrator,
        log,
        locale,
    }
}

/// Renders `screen` into a test terminal and returns its text, one line per row.
pub fn render_to_string(screen: &EntryScreen<RecordingHost>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| screen.render(f)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a harness orchestrator in a dark-themed screen.
pub fn screen(harness: Harness) -> (EntryScreen<RecordingHost>, CallLog) {
    let log = Rc::clone(&harness.log);
    (EntryScreen::new(harness.orchestrator, Theme::dark()), log)
}
