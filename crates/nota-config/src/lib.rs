use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";
const MAX_RECENT_FILES: usize = 10;

pub const DEFAULT_FONT_SIZE: u16 = 12;
pub const MIN_FONT_SIZE: u16 = 6;
pub const MAX_FONT_SIZE: u16 = 72;

/// Persisted editor settings: font, status bar visibility, and the recent
/// file list. Stored as TOML in the application's config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    #[serde(default = "default_show_status_bar")]
    pub show_status_bar: bool,
    #[serde(default)]
    recent_files: VecDeque<String>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            show_status_bar: default_show_status_bar(),
            recent_files: VecDeque::new(),
        }
    }
}

impl EditorSettings {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = settings_path(dir);
        let contents = fs::read_to_string(&path)?;
        let mut settings: Self = toml::from_str(&contents)?;
        settings.normalize();
        Ok(settings)
    }

    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self, SettingsError> {
        match Self::load(dir) {
            Ok(settings) => Ok(settings),
            Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&self, dir: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = settings_path(&dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    pub fn recent_files(&self) -> impl Iterator<Item = &str> {
        self.recent_files.iter().map(|entry| entry.as_str())
    }

    /// Promotes `file` to the front of the recent list, capping its length.
    /// Returns false when the list did not change.
    pub fn record_recent_file(&mut self, file: impl AsRef<Path>) -> bool {
        let file = file.as_ref();
        if file.as_os_str().is_empty() {
            return false;
        }
        let display = file.to_string_lossy().to_string();
        if display.trim().is_empty() {
            return false;
        }

        if let Some(pos) = self.recent_files.iter().position(|entry| entry == &display) {
            if pos == 0 {
                return false;
            }
            self.recent_files.remove(pos);
        }

        self.recent_files.push_front(display);
        while self.recent_files.len() > MAX_RECENT_FILES {
            self.recent_files.pop_back();
        }
        true
    }

    /// Clamps the size into the supported range.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    fn normalize(&mut self) {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if self.font_family.trim().is_empty() {
            self.font_family = default_font_family();
        }

        let mut deduped = VecDeque::new();
        for entry in self.recent_files.drain(..) {
            if !entry.trim().is_empty() && !deduped.contains(&entry) {
                deduped.push_back(entry);
            }
        }
        while deduped.len() > MAX_RECENT_FILES {
            deduped.pop_back();
        }
        self.recent_files = deduped;
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse editor settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize editor settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn settings_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(SETTINGS_FILE)
}

fn default_font_family() -> String {
    "Monospace".to_string()
}

fn default_font_size() -> u16 {
    DEFAULT_FONT_SIZE
}

fn default_show_status_bar() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_a_fresh_install() {
        let settings = EditorSettings::default();
        assert_eq!(settings.font_family, "Monospace");
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
        assert!(settings.show_status_bar);
        assert_eq!(settings.recent_files().count(), 0);
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let settings = EditorSettings::load_or_default(dir.path()).unwrap();
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn load_and_save_round_trip() {
        let dir = tempdir().unwrap();

        let mut settings = EditorSettings::default();
        settings.font_family = "Serif".to_string();
        settings.set_font_size(18);
        settings.show_status_bar = false;
        settings.record_recent_file("/tmp/notes.txt");
        settings.save(dir.path()).unwrap();

        let loaded = EditorSettings::load(dir.path()).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.recent_files().next().unwrap(), "/tmp/notes.txt");
    }

    #[test]
    fn record_recent_file_promotes_and_limits() {
        let mut settings = EditorSettings::default();
        for idx in 0..12 {
            settings.record_recent_file(format!("file{}", idx));
        }

        assert!(settings.recent_files().count() <= MAX_RECENT_FILES);
        assert_eq!(settings.recent_files().next().unwrap(), "file11");

        assert!(settings.record_recent_file("file5"));
        assert_eq!(settings.recent_files().next().unwrap(), "file5");

        // Re-recording the front entry is a no-op.
        assert!(!settings.record_recent_file("file5"));
    }

    #[test]
    fn font_size_is_clamped() {
        let mut settings = EditorSettings::default();
        settings.set_font_size(1);
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
        settings.set_font_size(500);
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn partial_settings_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "font_size = 20\n").unwrap();

        let loaded = EditorSettings::load(dir.path()).unwrap();
        assert_eq!(loaded.font_size, 20);
        assert_eq!(loaded.font_family, "Monospace");
        assert!(loaded.show_status_bar);
    }

    #[test]
    fn out_of_range_persisted_size_is_normalized() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "font_size = 999\n").unwrap();

        let loaded = EditorSettings::load(dir.path()).unwrap();
        assert_eq!(loaded.font_size, MAX_FONT_SIZE);
    }
}
