use arboard::Clipboard;
use std::fmt;

/// System clipboard handle. Some environments (headless sessions, bare
/// Wayland compositors) have no clipboard; failures surface as status
/// errors instead of aborting the editor.
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: Clipboard::new().ok(),
        }
    }

    pub fn set_text(&mut self, text: String) -> Result<(), String> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|err| format!("Clipboard error: {}", err)),
            None => Err("Clipboard is unavailable".to_string()),
        }
    }

    pub fn text(&mut self) -> Result<String, String> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .get_text()
                .map_err(|err| format!("Clipboard error: {}", err)),
            None => Err("Clipboard is unavailable".to_string()),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.inner.is_some())
            .finish()
    }
}
