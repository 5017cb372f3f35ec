use crate::clipboard::SystemClipboard;
use crate::commands::{self, SaveLocationRequest};
use crate::fonts::FontChoice;
use iced::widget::text_editor::{Action as TextEditorAction, Content, Edit, Motion};
use nota_config::EditorSettings;
use nota_core::{Session, Span};
use std::path::PathBuf;
use std::sync::Arc;

/// GUI-side state: the document session plus everything the widgets need
/// (the text_editor content mirror, settings, dialog inputs).
#[derive(Debug)]
pub struct EditorState {
    session: Session,
    buffer_content: Content,
    settings: EditorSettings,
    clipboard: SystemClipboard,
    error: Option<String>,
    find_open: bool,
    find_input: String,
    replace_input: String,
    font_size_input: String,
    last_matches: Option<Vec<Span>>,
}

impl Default for EditorState {
    fn default() -> Self {
        let mut error = None;
        let settings = match commands::settings_dir() {
            Some(dir) => match EditorSettings::load_or_default(&dir) {
                Ok(settings) => settings,
                Err(err) => {
                    error = Some(format!("Failed to load settings: {}", err));
                    EditorSettings::default()
                }
            },
            None => EditorSettings::default(),
        };

        let mut state = Self {
            session: Session::new(),
            buffer_content: Content::new(),
            font_size_input: settings.font_size.to_string(),
            settings,
            clipboard: SystemClipboard::new(),
            error,
            find_open: false,
            find_input: String::new(),
            replace_input: String::new(),
            last_matches: None,
        };
        state.sync_buffer_from_session();
        state
    }
}

impl EditorState {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn buffer_content(&self) -> &Content {
        &self.buffer_content
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Clone handed to the async settings-save command.
    pub fn settings_snapshot(&self) -> EditorSettings {
        self.settings.clone()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn sync_buffer_from_session(&mut self) {
        self.buffer_content = Content::with_text(self.session.buffer());
    }

    pub fn apply_buffer_action(&mut self, action: TextEditorAction) {
        let is_edit = action.is_edit();
        self.buffer_content.perform(action);

        if is_edit {
            let updated = editor_contents_to_string(self.buffer_content.text());
            self.session.set_buffer(updated);
        }
    }

    // File operations

    pub fn new_file(&mut self) {
        self.session.new_file();
        self.last_matches = None;
        self.clear_error();
        self.sync_buffer_from_session();
    }

    /// Replaces the session with one loaded by the open-file command.
    pub fn install_session(&mut self, session: Session) {
        self.session = session;
        self.last_matches = None;
        self.sync_buffer_from_session();
    }

    /// Opens `path` directly (recent-files shortcut). Returns true when the
    /// recent list changed and settings should be persisted.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        match self.session.open(&path) {
            Ok(()) => {
                self.last_matches = None;
                self.clear_error();
                self.sync_buffer_from_session();
                self.record_recent_open()
            }
            Err(err) => {
                self.set_error(Some(format!("Failed to read file: {}", err)));
                false
            }
        }
    }

    /// Saves to the session's existing path. Returns true when the recent
    /// list changed and settings should be persisted.
    pub fn save_in_place(&mut self) -> bool {
        match self.session.save() {
            Ok(()) => {
                self.clear_error();
                self.record_recent_open()
            }
            Err(err) => {
                self.set_error(Some(format!("Failed to write file: {}", err)));
                false
            }
        }
    }

    /// Retargets the session to `path` and saves there.
    pub fn save_at(&mut self, path: PathBuf) -> bool {
        match self.session.save_as(path) {
            Ok(()) => {
                self.clear_error();
                self.record_recent_open()
            }
            Err(err) => {
                self.set_error(Some(format!("Failed to write file: {}", err)));
                false
            }
        }
    }

    pub fn save_location_request(&self) -> SaveLocationRequest {
        SaveLocationRequest {
            suggested_name: Some(self.session.display_name().to_string()),
        }
    }

    /// Promotes the session's current path in the recent list. Returns true
    /// when the list changed and settings should be persisted.
    pub fn record_recent_open(&mut self) -> bool {
        match self.session.path() {
            Some(path) => {
                let path = path.to_path_buf();
                self.settings.record_recent_file(path)
            }
            None => false,
        }
    }

    pub fn recent_files(&self) -> Vec<String> {
        self.settings
            .recent_files()
            .map(|entry| entry.to_string())
            .collect()
    }

    // Clipboard operations

    pub fn cut_selection(&mut self) {
        match self.buffer_content.selection() {
            Some(selection) => match self.clipboard.set_text(selection) {
                Ok(()) => {
                    self.apply_buffer_action(TextEditorAction::Edit(Edit::Backspace));
                    self.session.set_status("Cut");
                    self.clear_error();
                }
                Err(err) => self.set_error(Some(err)),
            },
            None => self.session.set_status("Nothing selected"),
        }
    }

    pub fn copy_selection(&mut self) {
        match self.buffer_content.selection() {
            Some(selection) => match self.clipboard.set_text(selection) {
                Ok(()) => {
                    self.session.set_status("Copy");
                    self.clear_error();
                }
                Err(err) => self.set_error(Some(err)),
            },
            None => self.session.set_status("Nothing selected"),
        }
    }

    pub fn paste_clipboard(&mut self) {
        match self.clipboard.text() {
            Ok(text) => {
                self.apply_buffer_action(TextEditorAction::Edit(Edit::Paste(Arc::new(text))));
                self.session.set_status("Paste");
                self.clear_error();
            }
            Err(err) => self.set_error(Some(err)),
        }
    }

    pub fn select_all(&mut self) {
        self.apply_buffer_action(TextEditorAction::Move(Motion::DocumentStart));
        self.apply_buffer_action(TextEditorAction::Select(Motion::DocumentEnd));
        self.session.set_status("Selected all");
    }

    // Find / replace

    pub fn find_open(&self) -> bool {
        self.find_open
    }

    pub fn toggle_find(&mut self) {
        self.find_open = !self.find_open;
    }

    pub fn find_input(&self) -> &str {
        &self.find_input
    }

    pub fn set_find_input(&mut self, value: String) {
        self.find_input = value;
    }

    pub fn replace_input(&self) -> &str {
        &self.replace_input
    }

    pub fn set_replace_input(&mut self, value: String) {
        self.replace_input = value;
    }

    pub fn run_find(&mut self) {
        let query = self.find_input.clone();
        self.last_matches = Some(self.session.find(&query));
    }

    pub fn run_replace(&mut self) {
        let find = self.find_input.clone();
        let replace = self.replace_input.clone();
        self.session.replace(&find, &replace);
        self.last_matches = None;
        self.sync_buffer_from_session();
    }

    pub fn match_summary(&self) -> String {
        match &self.last_matches {
            Some(matches) => format!("{} match(es)", matches.len()),
            None => String::new(),
        }
    }

    // Presentation settings

    pub fn font(&self) -> FontChoice {
        FontChoice::from_name(&self.settings.font_family).unwrap_or(FontChoice::Monospace)
    }

    pub fn set_font_choice(&mut self, choice: FontChoice) {
        self.settings.font_family = choice.name().to_string();
        self.session
            .set_status(format!("Changed font to: {}", choice.name()));
    }

    pub fn font_size(&self) -> u16 {
        self.settings.font_size
    }

    pub fn font_size_input(&self) -> &str {
        &self.font_size_input
    }

    pub fn set_font_size_input(&mut self, value: String) {
        self.font_size_input = value;
    }

    /// Parses and applies the font size input. Returns true when the size
    /// changed and settings should be persisted.
    pub fn apply_font_size(&mut self) -> bool {
        match self.font_size_input.trim().parse::<u16>() {
            Ok(size) => {
                self.settings.set_font_size(size);
                // Echo back the clamped value.
                self.font_size_input = self.settings.font_size.to_string();
                self.session
                    .set_status(format!("Changed font size to: {}", self.settings.font_size));
                self.clear_error();
                true
            }
            Err(_) => {
                self.set_error(Some(format!(
                    "Invalid font size: {}",
                    self.font_size_input
                )));
                false
            }
        }
    }

    pub fn toggle_status_bar(&mut self) {
        self.settings.show_status_bar = !self.settings.show_status_bar;
        self.session.set_status(if self.settings.show_status_bar {
            "Status Bar shown"
        } else {
            "Status Bar hidden"
        });
    }

    // Status bar segments

    pub fn status_line(&self) -> &str {
        self.session.status()
    }

    pub fn file_label(&self) -> String {
        match self.session.path() {
            Some(path) => path.display().to_string(),
            None => self.session.display_name().to_string(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.session.buffer().chars().count()
    }
}

/// The editor Content always reports a trailing newline, even for an empty
/// buffer; strip it so the session buffer round-trips files exactly.
fn editor_contents_to_string(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_is_stripped_once() {
        assert_eq!(editor_contents_to_string("hello\n".to_string()), "hello");
        assert_eq!(
            editor_contents_to_string("two\nlines\n".to_string()),
            "two\nlines"
        );
        assert_eq!(editor_contents_to_string("\n".to_string()), "");
    }

    #[test]
    fn text_without_trailing_newline_is_untouched() {
        assert_eq!(editor_contents_to_string("hello".to_string()), "hello");
        assert_eq!(editor_contents_to_string(String::new()), "");
    }
}
