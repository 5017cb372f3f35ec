use crate::search::{self, Span};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The in-memory state of the currently open document: its text buffer, the
/// save target (if any), and the last user-visible status line.
///
/// The session knows nothing about the presentation layer; the GUI holds a
/// session and drives it through the operations below.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: String,
    path: Option<PathBuf>,
    status: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{} is not valid UTF-8 text", path.display())]
    Utf8 { path: PathBuf },
    #[error("no file path set")]
    PathUnset,
}

impl Session {
    /// Creates an empty session with no save target.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            path: None,
            status: "Ready".to_string(),
        }
    }

    /// Creates a session by opening the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let mut session = Self::new();
        session.open(path)?;
        Ok(session)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Most recent action wins; the message is display-only.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// File name of the save target, or a placeholder for unsaved buffers.
    pub fn display_name(&self) -> &str {
        if let Some(path) = &self.path {
            path.file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("(untitled)")
        } else {
            "(untitled)"
        }
    }

    /// Replaces the buffer with edits coming back from the presentation
    /// layer. Does not touch the path or the status line.
    pub fn set_buffer(&mut self, contents: String) {
        self.buffer = contents;
    }

    /// Resets to an empty buffer with no save target.
    pub fn new_file(&mut self) {
        self.buffer.clear();
        self.path = None;
        self.status = "New file created".to_string();
    }

    /// Reads the whole file at `path` into the buffer and retargets the
    /// session. On any failure the session is left completely unchanged.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)?;
        let contents =
            String::from_utf8(bytes).map_err(|_| SessionError::Utf8 { path: path.clone() })?;

        self.buffer = contents;
        self.status = format!("Opened file: {}", path.display());
        self.path = Some(path);
        Ok(())
    }

    /// Writes the full buffer to the stored path, overwriting any existing
    /// content. The buffer is unchanged regardless of outcome. Callers must
    /// resolve a missing path (via a save dialog) before calling this.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let path = self.path.clone().ok_or(SessionError::PathUnset)?;
        self.write_buffer(&path)
    }

    /// Retargets the session to `path`, then saves. Subsequent [`save`]
    /// calls hit the new path. The session keeps its previous target when
    /// the write fails.
    ///
    /// [`save`]: Session::save
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        let path = path.into();
        self.write_buffer(&path)?;
        self.path = Some(path);
        Ok(())
    }

    fn write_buffer(&mut self, path: &Path) -> Result<(), SessionError> {
        fs::write(path, &self.buffer)?;
        self.status = format!("Saved file: {}", path.display());
        Ok(())
    }

    /// Scans the buffer for every non-overlapping occurrence of `query`,
    /// left to right. Empty queries match nothing.
    pub fn find(&mut self, query: &str) -> Vec<Span> {
        let spans = search::find_spans(&self.buffer, query);
        self.status = if query.is_empty() {
            "Nothing to find".to_string()
        } else {
            format!("Found {} occurrence(s) of: {}", spans.len(), query)
        };
        spans
    }

    /// Replaces every non-overlapping occurrence of `find` with `replace`,
    /// mutating the buffer in place. Returns the number of replacements.
    /// An empty `find` is a no-op.
    pub fn replace(&mut self, find: &str, replace: &str) -> usize {
        if find.is_empty() {
            self.status = "Nothing to replace".to_string();
            return 0;
        }

        let (updated, count) = search::replace_all(&self.buffer, find, replace);
        self.buffer = updated;
        self.status = format!("Replaced {} occurrence(s) of: {}", count, find);
        count
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
