//! Universal Data Tool start screen
//!
//! This library provides the landing screen shown before a document is open:
//! starting a new file from a template, opening files by path or drop,
//! reopening recent files, switching languages and reaching help pages. The
//! host application receives the user's choice through
//! [`entry::HostCollaborator`].

// Module declarations
pub mod analytics;
pub mod app;
pub mod branding;
pub mod config;
pub mod entry;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod tui;
