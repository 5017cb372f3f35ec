use crate::commands;
use crate::keyboard::{self, Shortcut};
use crate::message::Message;
use crate::state::EditorState;
use crate::view;
use iced::event;
use iced::window;
use iced::{executor, theme, Application, Command, Element, Settings, Subscription};
use std::path::PathBuf;

pub fn run() -> iced::Result {
    EditorApp::run(Settings::default())
}

struct EditorApp {
    state: EditorState,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self {
            state: EditorState::default(),
        }
    }
}

impl Application for EditorApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = theme::Theme;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Self::Message>) {
        (Self::default(), Command::none())
    }

    fn title(&self) -> String {
        match self.state.session().path() {
            Some(path) => format!("nota - {}", path.display()),
            None => "nota".to_string(),
        }
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::NewFileRequested => {
                self.state.new_file();
            }
            Message::OpenFileRequested => {
                return Command::perform(commands::pick_document(), Message::FileLoaded);
            }
            Message::FileLoaded(result) => match result {
                Ok(Some(session)) => {
                    self.state.install_session(session);
                    self.state.clear_error();
                    if self.state.record_recent_open() {
                        return self.persist_settings();
                    }
                }
                Ok(None) => {
                    // user cancelled dialog
                }
                Err(err) => {
                    self.state.set_error(Some(err));
                }
            },
            Message::RecentFileSelected(path) => {
                if self.state.open_path(PathBuf::from(path)) {
                    return self.persist_settings();
                }
            }
            Message::SaveRequested => return self.save_document(),
            Message::SaveAsRequested => return self.prompt_save_location(),
            Message::SaveLocationSelected(result) => match result {
                Ok(Some(path)) => {
                    if self.state.save_at(path) {
                        return self.persist_settings();
                    }
                }
                Ok(None) => {
                    // user cancelled dialog, session untouched
                }
                Err(err) => {
                    self.state.set_error(Some(err));
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(err) = result {
                    self.state.set_error(Some(err));
                }
            }
            Message::BufferAction(action) => {
                self.state.apply_buffer_action(action);
            }
            Message::Cut => self.state.cut_selection(),
            Message::Copy => self.state.copy_selection(),
            Message::Paste => self.state.paste_clipboard(),
            Message::SelectAll => self.state.select_all(),
            Message::FindToggled => self.state.toggle_find(),
            Message::FindInputChanged(value) => self.state.set_find_input(value),
            Message::FindSubmitted => self.state.run_find(),
            Message::ReplaceInputChanged(value) => self.state.set_replace_input(value),
            Message::ReplaceSubmitted => self.state.run_replace(),
            Message::FontFamilyPicked(choice) => {
                self.state.set_font_choice(choice);
                return self.persist_settings();
            }
            Message::FontSizeInputChanged(value) => self.state.set_font_size_input(value),
            Message::FontSizeSubmitted => {
                if self.state.apply_font_size() {
                    return self.persist_settings();
                }
            }
            Message::StatusBarToggled => {
                self.state.toggle_status_bar();
                return self.persist_settings();
            }
            Message::ExitRequested => {
                return window::close(window::Id::MAIN);
            }
            Message::Keyboard(key_event) => {
                if let Some(shortcut) = keyboard::shortcut_from_event(&key_event) {
                    match shortcut {
                        Shortcut::NewFile => self.state.new_file(),
                        Shortcut::OpenFile => {
                            return Command::perform(
                                commands::pick_document(),
                                Message::FileLoaded,
                            );
                        }
                        Shortcut::Save => return self.save_document(),
                        Shortcut::SaveAs => return self.prompt_save_location(),
                        Shortcut::ToggleFind => self.state.toggle_find(),
                    }
                }
            }
        }

        Command::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.state)
    }

    fn theme(&self) -> Self::Theme {
        theme::Theme::Light
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        event::listen_with(|event, _status| match event {
            event::Event::Keyboard(key_event) => Some(Message::Keyboard(key_event)),
            _ => None,
        })
    }
}

impl EditorApp {
    /// Save goes straight to the stored path; with no path it falls through
    /// to the Save As prompt.
    fn save_document(&mut self) -> Command<Message> {
        if self.state.session().path().is_some() {
            if self.state.save_in_place() {
                return self.persist_settings();
            }
            Command::none()
        } else {
            self.prompt_save_location()
        }
    }

    fn prompt_save_location(&self) -> Command<Message> {
        Command::perform(
            commands::pick_save_location(self.state.save_location_request()),
            Message::SaveLocationSelected,
        )
    }

    fn persist_settings(&self) -> Command<Message> {
        Command::perform(
            commands::save_settings(self.state.settings_snapshot()),
            Message::SettingsSaved,
        )
    }
}
