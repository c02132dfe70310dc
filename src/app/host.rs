//! Host that ends the start screen with a decision for the caller.
//!
//! The terminal host does not edit documents itself. It records what the
//! user chose as an [`EntryOutcome`], which the launcher prints as JSON for
//! the editor process that invoked it.

use anyhow::{bail, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::entry::{ChosenFile, HostCollaborator};
use crate::models::{RecentItem, Template};

/// What the user decided on the start screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Open a file from disk
    OpenFile {
        /// Absolute or user-given path
        path: PathBuf,
    },
    /// Start a new document from a template
    OpenTemplate {
        /// Template chosen
        template: Template,
    },
    /// Reopen a recent document
    OpenRecentItem {
        /// The recent item, as given
        item: RecentItem,
    },
    /// Join a collaborative session
    OpenSession,
}

/// Host used by the `udt-start` binary.
#[derive(Debug, Default)]
pub struct TerminalHost {
    outcome: Option<EntryOutcome>,
    sessions: bool,
}

impl TerminalHost {
    /// Creates a host; `sessions` enables the collaborative session action.
    pub const fn new(sessions: bool) -> Self {
        Self {
            outcome: None,
            sessions,
        }
    }

    /// The recorded decision, once made.
    pub const fn outcome(&self) -> Option<&EntryOutcome> {
        self.outcome.as_ref()
    }

    /// Consumes the host, returning the decision.
    pub fn into_outcome(self) -> Option<EntryOutcome> {
        self.outcome
    }
}

impl HostCollaborator for TerminalHost {
    fn on_file_drop(&mut self, file: ChosenFile) -> Result<()> {
        let path = file.path().to_path_buf();
        if !path.is_file() {
            bail!("File not found: {}", path.display());
        }
        self.outcome = Some(EntryOutcome::OpenFile { path });
        Ok(())
    }

    fn on_open_template(&mut self, template: Template) -> Result<()> {
        self.outcome = Some(EntryOutcome::OpenTemplate { template });
        Ok(())
    }

    fn on_open_recent_item(&mut self, item: RecentItem) -> Result<()> {
        if let Some(path) = &item.path {
            if !path.exists() {
                bail!("Recent file no longer exists: {}", path.display());
            }
        }
        self.outcome = Some(EntryOutcome::OpenRecentItem { item });
        Ok(())
    }

    fn supports_open_session(&self) -> bool {
        self.sessions
    }

    fn on_click_open_session(&mut self) -> Result<()> {
        self.outcome = Some(EntryOutcome::OpenSession);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateCatalog;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_rejected() {
        let mut host = TerminalHost::new(false);
        let err = host
            .on_file_drop(ChosenFile::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
        assert!(host.outcome().is_none());
    }

    #[test]
    fn test_existing_file_is_recorded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cats.udt.json");
        std::fs::write(&path, "{}").unwrap();

        let mut host = TerminalHost::new(false);
        host.on_file_drop(ChosenFile::new(&path)).unwrap();
        assert_eq!(host.into_outcome(), Some(EntryOutcome::OpenFile { path }));
    }

    #[test]
    fn test_outcome_json_shape() {
        let mut host = TerminalHost::new(true);
        let empty = TemplateCatalog::builtin().empty().cloned().unwrap();
        host.on_open_template(empty).unwrap();

        let json = serde_json::to_value(host.outcome().unwrap()).unwrap();
        assert_eq!(json["action"], "open_template");
        assert_eq!(json["template"]["name"], "Empty");

        host.on_click_open_session().unwrap();
        let json = serde_json::to_value(host.outcome().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "open_session" }));
    }

    #[test]
    fn test_recent_item_without_path_is_accepted() {
        let mut host = TerminalHost::new(false);
        host.on_open_recent_item(RecentItem::named("a.json")).unwrap();
        assert!(matches!(
            host.outcome(),
            Some(EntryOutcome::OpenRecentItem { .. })
        ));
    }
}
