//! The document state a theme controller renders into.

use crate::theme::{ColorMode, ToggleIcon};

/// Class applied to the root element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// The presentation root: a "dark mode active" flag plus the toggle icon.
pub trait Presentation {
    /// Sets or clears the dark flag.
    fn set_dark(&mut self, dark: bool);

    /// Whether the dark flag is currently set.
    fn is_dark(&self) -> bool;

    /// Makes `icon` the visible toggle icon and hides the other one.
    fn show_icon(&mut self, icon: ToggleIcon);

    /// Applies `mode` to the flag and the icon together.
    fn apply(&mut self, mode: ColorMode) {
        self.set_dark(mode.is_dark());
        self.show_icon(ToggleIcon::for_applied(mode));
    }

    fn applied(&self) -> ColorMode {
        ColorMode::from_dark(self.is_dark())
    }
}

/// An in-process model of the page root and its toggle button.
///
/// Counts flag changes so hosts and tests can check that each toggle flips
/// the visual state exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    dark: bool,
    icon: Option<ToggleIcon>,
    flips: usize,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root that already carries the dark flag.
    pub fn with_dark(dark: bool) -> Self {
        Self {
            dark,
            ..Self::default()
        }
    }

    /// The visible toggle icon, `None` before the first apply.
    pub fn icon(&self) -> Option<ToggleIcon> {
        self.icon
    }

    /// Number of times the dark flag actually changed value.
    pub fn flips(&self) -> usize {
        self.flips
    }

    /// Class list of the root element.
    pub fn classes(&self) -> Vec<&'static str> {
        if self.dark {
            vec![DARK_CLASS]
        } else {
            Vec::new()
        }
    }
}

impl Presentation for RootElement {
    fn set_dark(&mut self, dark: bool) {
        if self.dark != dark {
            self.flips += 1;
        }
        self.dark = dark;
    }

    fn is_dark(&self) -> bool {
        self.dark
    }

    fn show_icon(&mut self, icon: ToggleIcon) {
        self.icon = Some(icon);
    }
}
