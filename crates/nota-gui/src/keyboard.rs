use iced::keyboard::{Event, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    ToggleFind,
}

/// Maps raw keyboard events to editor shortcuts (Ctrl on Linux/Windows,
/// Cmd on macOS).
pub fn shortcut_from_event(event: &Event) -> Option<Shortcut> {
    let Event::KeyPressed {
        key: Key::Character(value),
        modifiers,
        ..
    } = event
    else {
        return None;
    };

    if !modifiers.command() {
        return None;
    }

    let value = value.as_str();
    if value.eq_ignore_ascii_case("n") {
        Some(Shortcut::NewFile)
    } else if value.eq_ignore_ascii_case("o") {
        Some(Shortcut::OpenFile)
    } else if value.eq_ignore_ascii_case("s") {
        if modifiers.shift() {
            Some(Shortcut::SaveAs)
        } else {
            Some(Shortcut::Save)
        }
    } else if value.eq_ignore_ascii_case("f") {
        Some(Shortcut::ToggleFind)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key::Key, Event, Location, Modifiers};

    fn key_press(value: &str, modifiers: Modifiers) -> Event {
        Event::KeyPressed {
            key: Key::Character(value.into()),
            location: Location::Standard,
            modifiers,
            text: None,
        }
    }

    #[test]
    fn command_shortcuts_map() {
        assert_eq!(
            shortcut_from_event(&key_press("n", Modifiers::COMMAND)),
            Some(Shortcut::NewFile)
        );
        assert_eq!(
            shortcut_from_event(&key_press("o", Modifiers::COMMAND)),
            Some(Shortcut::OpenFile)
        );
        assert_eq!(
            shortcut_from_event(&key_press("s", Modifiers::COMMAND)),
            Some(Shortcut::Save)
        );
        assert_eq!(
            shortcut_from_event(&key_press("f", Modifiers::COMMAND)),
            Some(Shortcut::ToggleFind)
        );
    }

    #[test]
    fn shift_modifier_turns_save_into_save_as() {
        assert_eq!(
            shortcut_from_event(&key_press("S", Modifiers::COMMAND | Modifiers::SHIFT)),
            Some(Shortcut::SaveAs)
        );
    }

    #[test]
    fn plain_typing_is_ignored() {
        assert_eq!(shortcut_from_event(&key_press("s", Modifiers::empty())), None);
        assert_eq!(shortcut_from_event(&key_press("x", Modifiers::COMMAND)), None);
    }
}
