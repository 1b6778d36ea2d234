use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph for the toggle: shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use codee::{string::FromToStringCodec, Decoder, Encoder};

    use super::*;
    use crate::config::THEME_STORAGE_KEY;

    fn store(theme: Theme) -> String {
        <FromToStringCodec as Encoder<Theme>>::encode(&theme).unwrap()
    }

    fn load(raw: &str) -> Result<Theme, ThemeParseError> {
        <FromToStringCodec as Decoder<Theme>>::decode(raw)
    }

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn persisted_light_survives_reload() {
        let mut storage = HashMap::new();
        storage.insert(THEME_STORAGE_KEY, store(Theme::Light));
        assert_eq!(storage[THEME_STORAGE_KEY], "light");

        // fresh read, as after a reload
        assert_eq!(load(&storage[THEME_STORAGE_KEY]), Ok(Theme::Light));
    }

    #[test]
    fn unknown_stored_value_is_rejected() {
        // a failed decode leaves the storage hook on its default
        assert_eq!(
            load("sepia"),
            Err(ThemeParseError("sepia".to_string()))
        );
        assert_eq!(load(" dark\n"), Ok(Theme::Dark));
    }

    #[test]
    fn stored_form_matches_display() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(store(theme), theme.to_string());
        }
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Dark.toggle_icon(), Theme::Light.toggle_icon());
        assert_ne!(Theme::Dark.toggle_label(), Theme::Light.toggle_label());
    }
}
