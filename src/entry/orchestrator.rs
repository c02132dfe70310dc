//! Composition root of the start screen.
//!
//! The orchestrator owns the transient screen state (the two dialogs and the
//! language switch) and turns user choices into calls on the host. Every
//! durable effect belongs to the host; nothing here touches files, sessions
//! or editors.

use anyhow::{Context, Result};

use crate::analytics::AnalyticsEmitter;
use crate::branding;
use crate::entry::dialog::{DialogController, DialogState};
use crate::entry::file_intake::{ChosenFile, FileIntakeAdapter, IntakeSource};
use crate::entry::locale_switcher::LocaleSwitcher;
use crate::entry::recent_items::RecentItemsList;
use crate::i18n::Text;
use crate::models::{RecentItem, Template, TemplateCatalog};

/// The host application's side of the start screen.
///
/// Errors returned from these methods are not handled by the orchestrator;
/// they are passed back to whoever drove the gesture.
pub trait HostCollaborator {
    /// A file was dropped or picked.
    fn on_file_drop(&mut self, file: ChosenFile) -> Result<()>;

    /// A template was chosen (quick action or either dialog).
    fn on_open_template(&mut self, template: Template) -> Result<()>;

    /// A recent item was activated.
    fn on_open_recent_item(&mut self, item: RecentItem) -> Result<()>;

    /// Whether the host can join collaborative sessions.
    ///
    /// Hosts that return `false` never see the session action at all.
    fn supports_open_session(&self) -> bool {
        false
    }

    /// The "open collaborative session" action was activated.
    fn on_click_open_session(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Inputs the host configures the screen with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryProps {
    /// Recently opened documents, in display order
    pub recent_items: Vec<RecentItem>,
    /// Show the download/installation help link
    pub show_download_link: bool,
}

impl Default for EntryProps {
    fn default() -> Self {
        Self {
            recent_items: Vec::new(),
            show_download_link: true,
        }
    }
}

/// Entries of the "Start" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    /// Open the blank template
    NewFile,
    /// Open the create-from-template dialog
    StartFromTemplate,
    /// Pick a file from disk
    OpenFile,
    /// Join a collaborative session
    OpenSession,
    /// Open the add-authentication dialog
    AddAuthentication,
    /// Go to the training course page
    CreateTrainingCourse,
}

impl StartAction {
    /// Label of this action.
    pub const fn text(self) -> Text {
        match self {
            Self::NewFile => Text::NewFile,
            Self::StartFromTemplate => Text::StartFromTemplate,
            Self::OpenFile => Text::OpenFile,
            Self::OpenSession => Text::OpenCollaborativeSession,
            Self::AddAuthentication => Text::AddAuthentication,
            Self::CreateTrainingCourse => Text::CreateTrainingCourse,
        }
    }
}

/// Entries of the "Help" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpLink {
    /// Releases page
    DownloadingAndInstalling,
    /// Image labeling walkthrough
    LabelingImages,
    /// Source repository
    GithubRepository,
    /// Video channel
    YoutubeChannel,
}

impl HelpLink {
    /// Label of this link.
    pub const fn text(self) -> Text {
        match self {
            Self::DownloadingAndInstalling => Text::DownloadingAndInstalling,
            Self::LabelingImages => Text::LabelingImages,
            Self::GithubRepository => Text::GithubRepository,
            Self::YoutubeChannel => Text::YoutubeChannel,
        }
    }

    /// Navigation target.
    pub fn url(self) -> String {
        match self {
            Self::DownloadingAndInstalling => branding::github_releases_url(),
            Self::LabelingImages => branding::LABELING_IMAGES_URL.to_string(),
            Self::GithubRepository => branding::GITHUB_URL.to_string(),
            Self::YoutubeChannel => branding::YOUTUBE_URL.to_string(),
        }
    }
}

/// Which dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Create from template
    CreateFromTemplate,
    /// Add authentication from template
    AddAuthentication,
}

/// What the screen should do after a start action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Fully handled
    Done,
    /// Show the file path prompt
    OpenFilePicker,
    /// Navigate to an outside page
    Navigate(String),
}

/// Top-level state of the start screen.
#[derive(Debug)]
pub struct EntryOrchestrator<H> {
    host: H,
    props: EntryProps,
    catalog: TemplateCatalog,
    analytics: AnalyticsEmitter,
    locale: LocaleSwitcher,
    intake: FileIntakeAdapter,
    create_dialog: DialogController<Template>,
    auth_dialog: DialogController<Template>,
}

impl<H: HostCollaborator> EntryOrchestrator<H> {
    /// Mounts the screen. Both dialogs start closed.
    pub fn new(
        host: H,
        props: EntryProps,
        catalog: TemplateCatalog,
        analytics: AnalyticsEmitter,
        locale: LocaleSwitcher,
    ) -> Self {
        Self {
            host,
            props,
            catalog,
            analytics,
            locale,
            intake: FileIntakeAdapter::new(),
            create_dialog: DialogController::new(),
            auth_dialog: DialogController::new(),
        }
    }

    /// The host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the screen, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Configured inputs.
    pub const fn props(&self) -> &EntryProps {
        &self.props
    }

    /// Template catalog the dialogs list.
    pub const fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Language switch.
    pub const fn locale(&self) -> &LocaleSwitcher {
        &self.locale
    }

    /// Resolves `text` in the active language.
    pub fn text(&self, text: Text) -> &'static str {
        self.locale.text(text)
    }

    /// Actions of the "Start" section, in display order.
    ///
    /// The session action is only listed when the host supports sessions.
    pub fn start_actions(&self) -> Vec<StartAction> {
        let mut actions = vec![
            StartAction::NewFile,
            StartAction::StartFromTemplate,
            StartAction::OpenFile,
        ];
        if self.host.supports_open_session() {
            actions.push(StartAction::OpenSession);
        }
        actions.push(StartAction::AddAuthentication);
        actions.push(StartAction::CreateTrainingCourse);
        actions
    }

    /// Links of the "Help" section, in display order.
    pub fn help_links(&self) -> Vec<HelpLink> {
        let mut links = Vec::with_capacity(4);
        if self.props.show_download_link {
            links.push(HelpLink::DownloadingAndInstalling);
        }
        links.extend([
            HelpLink::LabelingImages,
            HelpLink::GithubRepository,
            HelpLink::YoutubeChannel,
        ]);
        links
    }

    /// The recent-items region.
    pub fn recent_items(&self) -> RecentItemsList<'_> {
        RecentItemsList::new(&self.props.recent_items)
    }

    /// Runs a "Start" action.
    pub fn activate(&mut self, action: StartAction) -> Result<ActionOutcome> {
        match action {
            StartAction::NewFile => self.new_file()?,
            StartAction::StartFromTemplate => self.open_create_dialog(),
            StartAction::OpenFile => return Ok(ActionOutcome::OpenFilePicker),
            StartAction::OpenSession => self.click_open_session()?,
            StartAction::AddAuthentication => self.open_auth_dialog(),
            StartAction::CreateTrainingCourse => {
                return Ok(ActionOutcome::Navigate(
                    branding::TRAINING_COURSE_URL.to_string(),
                ))
            }
        }
        Ok(ActionOutcome::Done)
    }

    /// Quick action: opens the blank template.
    ///
    /// The analytics event is recorded before the host is called.
    pub fn new_file(&mut self) -> Result<()> {
        self.analytics.template_clicked("empty");
        let empty = self
            .catalog
            .empty()
            .cloned()
            .context("Template catalog has no \"Empty\" template")?;
        tracing::info!("Opening new file from the Empty template");
        self.host.on_open_template(empty)
    }

    /// Which dialog is showing, if any.
    pub fn active_dialog(&self) -> Option<DialogKind> {
        if self.create_dialog.is_open() {
            Some(DialogKind::CreateFromTemplate)
        } else if self.auth_dialog.is_open() {
            Some(DialogKind::AddAuthentication)
        } else {
            None
        }
    }

    /// State of the create-from-template dialog.
    pub const fn create_dialog_state(&self) -> DialogState {
        self.create_dialog.state()
    }

    /// State of the add-authentication dialog.
    pub const fn auth_dialog_state(&self) -> DialogState {
        self.auth_dialog.state()
    }

    /// Shows the create-from-template dialog.
    pub fn open_create_dialog(&mut self) {
        self.create_dialog.open();
    }

    /// Hides the create-from-template dialog without choosing.
    pub fn close_create_dialog(&mut self) {
        self.create_dialog.close();
    }

    /// A template was chosen in the create-from-template dialog.
    ///
    /// Closes the dialog, records the template's name, then calls the host.
    pub fn select_created_template(&mut self, template: Template) -> Result<()> {
        let analytics = &self.analytics;
        let host = &mut self.host;
        self.create_dialog.select(template, |template| {
            analytics.template_clicked(&template.name);
            tracing::info!("Opening template {}", template.name);
            host.on_open_template(template)
        })
    }

    /// Shows the add-authentication dialog.
    pub fn open_auth_dialog(&mut self) {
        self.auth_dialog.open();
    }

    /// Hides the add-authentication dialog without choosing.
    pub fn close_auth_dialog(&mut self) {
        self.auth_dialog.close();
    }

    /// A template was chosen in the add-authentication dialog.
    ///
    /// Closes the dialog and calls the host. No analytics event is recorded
    /// on this path.
    pub fn select_auth_template(&mut self, template: Template) -> Result<()> {
        let host = &mut self.host;
        self.auth_dialog.select(template, |template| {
            tracing::info!("Opening authentication template {}", template.name);
            host.on_open_template(template)
        })
    }

    /// Closes whichever dialog is showing.
    pub fn close_dialogs(&mut self) {
        self.create_dialog.close();
        self.auth_dialog.close();
    }

    /// Files acquired by either mechanism. Only the first is forwarded.
    pub fn accept_files(&mut self, source: IntakeSource, files: Vec<ChosenFile>) -> Result<()> {
        let host = &mut self.host;
        self.intake
            .accept(source, files, |file| {
                tracing::info!("File chosen: {}", file.path.display());
                host.on_file_drop(file)
            })
            .unwrap_or(Ok(()))
    }

    /// Text dropped onto the screen.
    pub fn drop_text(&mut self, text: &str) -> Result<()> {
        let host = &mut self.host;
        self.intake
            .accept_drop(text, |file| {
                tracing::info!("File dropped: {}", file.path.display());
                host.on_file_drop(file)
            })
            .unwrap_or(Ok(()))
    }

    /// Path submitted from the file prompt.
    pub fn submit_file_path(&mut self, input: &str) -> Result<()> {
        let host = &mut self.host;
        self.intake
            .accept_picker(input, |file| {
                tracing::info!("File picked: {}", file.path.display());
                host.on_file_drop(file)
            })
            .unwrap_or(Ok(()))
    }

    /// Recent entry at `index` was activated. Out-of-range indices do nothing.
    pub fn open_recent_item(&mut self, index: usize) -> Result<()> {
        let host = &mut self.host;
        RecentItemsList::new(&self.props.recent_items)
            .click(index, |item| {
                tracing::info!("Opening recent item {}", item.file_name);
                host.on_open_recent_item(item)
            })
            .unwrap_or(Ok(()))
    }

    /// The session action was activated.
    ///
    /// Does nothing for hosts without session support, since the action is
    /// not shown to them.
    pub fn click_open_session(&mut self) -> Result<()> {
        if !self.host.supports_open_session() {
            tracing::debug!("Ignoring session request: host has no session support");
            return Ok(());
        }
        self.host.on_click_open_session()
    }

    /// Active language code.
    pub fn current_language(&self) -> String {
        self.locale.current_language()
    }

    /// Switches the display language.
    pub fn change_language(&self, code: &str) {
        self.locale.change_language(code);
    }
}
