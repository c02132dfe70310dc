//! Application orchestration layer
//!
//! Wires configuration, the terminal host and the TUI together without
//! containing screen logic of its own.

/// Host that records the user's decision
pub mod host;

/// Start screen assembly and the terminal event loop
pub mod launch;

pub use host::{EntryOutcome, TerminalHost};
pub use launch::{build_analytics, build_orchestrator, run_start_screen};
