use iced::font::Family;
use iced::Font;
use std::fmt;

/// Selectable font families. iced resolves fonts by `'static` family names,
/// so the editor offers the generic families rather than free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    Monospace,
    SansSerif,
    Serif,
}

impl FontChoice {
    pub const ALL: &'static [FontChoice] =
        &[FontChoice::Monospace, FontChoice::SansSerif, FontChoice::Serif];

    pub fn name(self) -> &'static str {
        match self {
            FontChoice::Monospace => "Monospace",
            FontChoice::SansSerif => "Sans Serif",
            FontChoice::Serif => "Serif",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FontChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn iced_font(self) -> Font {
        let family = match self {
            FontChoice::Monospace => Family::Monospace,
            FontChoice::SansSerif => Family::SansSerif,
            FontChoice::Serif => Family::Serif,
        };
        Font {
            family,
            ..Font::DEFAULT
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
