//! Host-driven OS preference.

use super::{Listener, Listeners, OsPreference};
use crate::theme::ColorMode;

/// An OS preference whose value is pushed in by the host.
///
/// Use this when the platform delivers change events itself (a browser
/// `matchMedia` listener, a desktop settings portal) or in tests.
///
/// # Example
///
/// ```rust
/// use colormode::{ColorMode, ManualPreference, OsPreference};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(Cell::new(None));
/// let mut os = ManualPreference::new(ColorMode::Dark);
/// let sink = Rc::clone(&seen);
/// os.subscribe(Box::new(move |mode| sink.set(Some(mode))));
///
/// os.set(ColorMode::Light);
/// assert_eq!(seen.get(), Some(ColorMode::Light));
/// ```
#[derive(Debug)]
pub struct ManualPreference {
    mode: ColorMode,
    listeners: Listeners,
}

impl ManualPreference {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            listeners: Listeners::default(),
        }
    }

    /// Updates the reported mode, notifying listeners if it changed.
    ///
    /// Returns `true` when listeners were notified.
    pub fn set(&mut self, mode: ColorMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.listeners.notify(mode);
        true
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl OsPreference for ManualPreference {
    fn current(&self) -> ColorMode {
        self.mode
    }

    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}
