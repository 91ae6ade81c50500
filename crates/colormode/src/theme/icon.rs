//! Toggle button icon state.

use super::mode::ColorMode;

/// Which icon the theme toggle button shows.
///
/// The button offers the mode you would switch *to*: while dark mode is
/// applied the light icon is visible, and the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Dark,
    Light,
}

impl ToggleIcon {
    /// The icon to show while `applied` is active.
    pub fn for_applied(applied: ColorMode) -> Self {
        match applied {
            ColorMode::Dark => ToggleIcon::Light,
            ColorMode::Light => ToggleIcon::Dark,
        }
    }

    /// Swaps the visible icon.
    pub fn toggled(self) -> Self {
        match self {
            ToggleIcon::Dark => ToggleIcon::Light,
            ToggleIcon::Light => ToggleIcon::Dark,
        }
    }

    /// Element id of the icon, as used by the toggle button markup.
    pub fn element_id(self) -> &'static str {
        match self {
            ToggleIcon::Dark => "theme-toggle-dark-icon",
            ToggleIcon::Light => "theme-toggle-light-icon",
        }
    }
}
