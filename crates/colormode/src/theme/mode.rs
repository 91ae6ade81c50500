//! Color modes and stored theme preferences.

use std::fmt;

/// An effective color mode: what is applied, or what the OS reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the mode for a "dark mode active" flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// Returns the other mode.
    pub fn flipped(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// The string persisted for an explicit preference of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's persisted theme choice.
///
/// `Unset` means no explicit choice exists and the OS preference decides.
/// There is no transition back to `Unset` once a choice has been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Parses a stored value.
    ///
    /// Only the exact strings `"dark"` and `"light"` are recognized. Anything
    /// else, including a missing value, is `Unset`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colormode::ThemePreference;
    ///
    /// assert_eq!(ThemePreference::parse(Some("dark")), ThemePreference::Dark);
    /// assert_eq!(ThemePreference::parse(Some("Dark")), ThemePreference::Unset);
    /// assert_eq!(ThemePreference::parse(None), ThemePreference::Unset);
    /// ```
    pub fn parse(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => ThemePreference::Dark,
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Unset,
        }
    }

    /// The explicit mode, if one was chosen.
    pub fn mode(self) -> Option<ColorMode> {
        match self {
            ThemePreference::Dark => Some(ColorMode::Dark),
            ThemePreference::Light => Some(ColorMode::Light),
            ThemePreference::Unset => None,
        }
    }

    /// The value to persist, or `None` for `Unset`.
    pub fn as_stored(self) -> Option<&'static str> {
        self.mode().map(ColorMode::as_str)
    }

    pub fn is_unset(self) -> bool {
        self == ThemePreference::Unset
    }

    /// Resolves the effective mode against the OS preference.
    ///
    /// An explicit choice always wins; `Unset` falls back to `os`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colormode::{ColorMode, ThemePreference};
    ///
    /// assert_eq!(ThemePreference::Light.resolve(ColorMode::Dark), ColorMode::Light);
    /// assert_eq!(ThemePreference::Unset.resolve(ColorMode::Dark), ColorMode::Dark);
    /// ```
    pub fn resolve(self, os: ColorMode) -> ColorMode {
        self.mode().unwrap_or(os)
    }
}

impl From<ColorMode> for ThemePreference {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemePreference::Light,
            ColorMode::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_stored().unwrap_or("unset"))
    }
}
