//! OS color-scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use super::{Listener, Listeners, OsPreference};
use crate::theme::ColorMode;

/// Function used to ask whether the OS prefers a light or dark theme.
pub type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Replaces the process-wide OS detector.
///
/// Every [`SystemPreference`] queries through it, so a host can pin the OS
/// mode (the CLI's `--os` flag does this) and tests can script it.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Runs the active detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        // Platforms that cannot tell report a default; treat it as light.
        _ => ColorMode::Light,
    }
}

/// The operating system's color-scheme preference.
///
/// Queries go straight to the detector. The OS offers no portable change
/// notification, so hosts call [`SystemPreference::poll`] periodically and
/// listeners fire when the detected value differs from the last one seen.
#[derive(Debug)]
pub struct SystemPreference {
    last: ColorMode,
    listeners: Listeners,
}

impl SystemPreference {
    /// Creates a signal seeded with the current detection.
    pub fn new() -> Self {
        Self {
            last: detect_color_mode(),
            listeners: Listeners::default(),
        }
    }

    /// Re-detects the OS mode and notifies listeners if it changed.
    ///
    /// Returns the new mode when a change was observed.
    pub fn poll(&mut self) -> Option<ColorMode> {
        let mode = detect_color_mode();
        if mode == self.last {
            return None;
        }
        tracing::debug!(from = %self.last, to = %mode, "os color scheme changed");
        self.last = mode;
        self.listeners.notify(mode);
        Some(mode)
    }
}

impl Default for SystemPreference {
    fn default() -> Self {
        Self::new()
    }
}

impl OsPreference for SystemPreference {
    fn current(&self) -> ColorMode {
        detect_color_mode()
    }

    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}
