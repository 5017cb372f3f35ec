use crate::fonts::FontChoice;
use iced::keyboard;
use iced::widget::text_editor::Action as TextEditorAction;
use nota_core::Session;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    NewFileRequested,
    OpenFileRequested,
    FileLoaded(Result<Option<Session>, String>),
    RecentFileSelected(String),
    SaveRequested,
    SaveAsRequested,
    SaveLocationSelected(Result<Option<PathBuf>, String>),
    SettingsSaved(Result<(), String>),
    BufferAction(TextEditorAction),
    Cut,
    Copy,
    Paste,
    SelectAll,
    FindToggled,
    FindInputChanged(String),
    FindSubmitted,
    ReplaceInputChanged(String),
    ReplaceSubmitted,
    FontFamilyPicked(FontChoice),
    FontSizeInputChanged(String),
    FontSizeSubmitted,
    StatusBarToggled,
    ExitRequested,
    Keyboard(keyboard::Event),
}
