use nota_config::EditorSettings;
use nota_core::Session;
use rfd::FileDialog;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SaveLocationRequest {
    pub suggested_name: Option<String>,
}

/// Directory holding the persisted editor settings.
pub fn settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nota"))
}

pub async fn pick_document() -> Result<Option<Session>, String> {
    if let Some(path) = FileDialog::new()
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"])
        .pick_file()
    {
        let session =
            Session::from_path(&path).map_err(|err| format!("Failed to read file: {}", err))?;
        Ok(Some(session))
    } else {
        Ok(None)
    }
}

pub async fn pick_save_location(
    request: SaveLocationRequest,
) -> Result<Option<PathBuf>, String> {
    let mut dialog = FileDialog::new()
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"]);

    if let Some(name) = request.suggested_name.as_deref() {
        if !name.trim().is_empty() && name != "(untitled)" {
            dialog = dialog.set_file_name(name);
        }
    }

    Ok(dialog.save_file())
}

pub async fn save_settings(settings: EditorSettings) -> Result<(), String> {
    let dir = settings_dir()
        .ok_or_else(|| "Could not resolve the settings directory".to_string())?;
    settings
        .save(&dir)
        .map_err(|err| format!("Failed to save settings: {}", err))
}
