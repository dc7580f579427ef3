//! Theme: the dark/light presentation preference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// Key under which the preference is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Presentation attribute set on the document root element.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Visual theme of the page.
///
/// [`Light`](Self::Light) is the implicit default shown when neither the
/// document nor the store says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Wire representation, as written to the attribute and the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Theme currently shown for a raw attribute value.
    ///
    /// Only an exact `"dark"` is dark; an absent attribute or any other
    /// value falls back to [`Light`](Self::Light).
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Theme to restore at startup for a raw stored value.
    ///
    /// Returns `Some` only for an exact `"dark"`. A stored `"light"`, an
    /// absent entry, and malformed values all mean "leave the page alone".
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value {
            Some("dark") => Some(Self::Dark),
            _ => None,
        }
    }

    /// Glyph shown on a toggle button for this theme.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}",
            Self::Dark => "\u{263E}",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn should_flip_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn should_report_dark_only_for_dark() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn should_read_dark_attribute_as_dark() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
    }

    #[test]
    fn should_read_missing_attribute_as_light() {
        assert_eq!(Theme::from_attribute(None), Theme::Light);
    }

    #[test]
    fn should_read_unexpected_attribute_as_light() {
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("auto")), Theme::Light);
    }

    #[test]
    fn should_restore_only_exact_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(Some("light")), None);
        assert_eq!(Theme::from_stored(Some("")), None);
        assert_eq!(Theme::from_stored(Some(" dark")), None);
        assert_eq!(Theme::from_stored(Some("DARK")), None);
        assert_eq!(Theme::from_stored(None), None);
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn should_parse_known_values_strictly() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ParseThemeError {
                value: "sepia".to_string()
            })
        );
    }

    #[test]
    fn should_pick_sun_and_moon_icons() {
        assert_eq!(Theme::Light.icon(), "\u{2600}");
        assert_eq!(Theme::Dark.icon(), "\u{263E}");
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
