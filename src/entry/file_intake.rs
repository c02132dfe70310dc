//! One "file chosen" event for both ways of picking a file.
//!
//! Files reach the start screen either by being dropped onto the terminal
//! (which arrives as a bracketed paste of one or more paths) or through the
//! path prompt. Both end up as an ordered list, and only the first entry is
//! handed on. Multi-file drops are not supported by this entry point.

use std::path::{Path, PathBuf};

/// A file the user picked. Its content is never read here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChosenFile {
    /// Location of the file
    pub path: PathBuf,
}

impl ChosenFile {
    /// Wraps a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, or the whole path when it has none.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// How a file set was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeSource {
    /// Dropped onto the screen
    Drop,
    /// Typed or pasted into the path prompt
    Picker,
}

/// Turns acquisition events into at most one file-chosen callback each.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileIntakeAdapter;

impl FileIntakeAdapter {
    /// Creates the adapter.
    pub const fn new() -> Self {
        Self
    }

    /// Forwards the first of `files` to `on_file_drop`.
    ///
    /// Returns `None` without calling the handler when `files` is empty.
    pub fn accept<R>(
        &self,
        source: IntakeSource,
        files: Vec<ChosenFile>,
        on_file_drop: impl FnOnce(ChosenFile) -> R,
    ) -> Option<R> {
        let total = files.len();
        let first = files.into_iter().next()?;
        if total > 1 {
            tracing::debug!("{source:?} carried {total} files, keeping {}", first.path.display());
        }
        Some(on_file_drop(first))
    }

    /// Handles text dropped onto the terminal.
    pub fn accept_drop<R>(
        &self,
        text: &str,
        on_file_drop: impl FnOnce(ChosenFile) -> R,
    ) -> Option<R> {
        let files = parse_dropped_paths(text).into_iter().map(ChosenFile::new).collect();
        self.accept(IntakeSource::Drop, files, on_file_drop)
    }

    /// Handles a path submitted from the prompt.
    pub fn accept_picker<R>(
        &self,
        input: &str,
        on_file_drop: impl FnOnce(ChosenFile) -> R,
    ) -> Option<R> {
        let files = parse_picker_input(input).into_iter().map(ChosenFile::new).collect();
        self.accept(IntakeSource::Picker, files, on_file_drop)
    }
}

/// Splits dropped text into paths, in the order the terminal delivered them.
///
/// Paths are separated by whitespace. Single and double quotes group a path
/// containing spaces, a backslash escapes a following space, quote or
/// backslash. Local `file://` URLs become paths and URLs naming another host
/// are skipped.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            '\'' | '"' => {
                quote = Some(c);
                in_token = true;
            }
            '\\' => {
                in_token = true;
                match chars.peek() {
                    Some(&next) if next.is_whitespace() || matches!(next, '\'' | '"' | '\\') => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    push_path(&mut paths, &current);
                    current.clear();
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        push_path(&mut paths, &current);
    }

    paths
}

/// Reads the path prompt: one path, optionally quoted. Blank input is no file.
pub fn parse_picker_input(input: &str) -> Vec<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed);

    let mut paths = Vec::new();
    push_path(&mut paths, unquoted);
    paths
}

fn push_path(paths: &mut Vec<PathBuf>, token: &str) {
    if token.is_empty() {
        return;
    }
    if !token.starts_with("file:") {
        paths.push(PathBuf::from(token));
        return;
    }
    // Only local file URLs map to a path; other hosts cannot be opened here
    match url::Url::parse(token).map(|url| url.to_file_path()) {
        Ok(Ok(path)) => paths.push(path),
        Ok(Err(())) => tracing::debug!("Ignoring non-local file URL {token}"),
        Err(e) => tracing::debug!("Ignoring malformed file URL {token}: {e}"),
    }
}
