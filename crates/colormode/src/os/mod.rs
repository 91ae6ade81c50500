//! OS color-scheme preference signals.
//!
//! An [`OsPreference`] answers "does the OS prefer dark?" synchronously and
//! lets controllers subscribe to changes. Two sources are provided:
//!
//! - [`SystemPreference`]: asks the operating system through a swappable
//!   detector (see [`set_theme_detector`])
//! - [`ManualPreference`]: driven by the host, e.g. from a `matchMedia`
//!   change event or a test

mod manual;
mod system;

pub use manual::ManualPreference;
pub use system::{detect_color_mode, set_theme_detector, SystemPreference, ThemeDetector};

use crate::theme::ColorMode;

/// Callback invoked with the new OS mode after every change.
pub type Listener = Box<dyn FnMut(ColorMode)>;

/// A queryable, observable OS color-scheme preference.
pub trait OsPreference {
    /// The mode the OS currently reports.
    fn current(&self) -> ColorMode;

    /// Registers a listener for change notifications.
    ///
    /// Listeners live as long as the signal; there is no unsubscribe.
    fn subscribe(&mut self, listener: Listener);

    fn is_dark(&self) -> bool {
        self.current().is_dark()
    }
}

/// Subscribers of a signal, notified in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    inner: Vec<Listener>,
}

impl Listeners {
    pub(crate) fn push(&mut self, listener: Listener) {
        self.inner.push(listener);
    }

    pub(crate) fn notify(&mut self, mode: ColorMode) {
        for listener in &mut self.inner {
            listener(mode);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.inner.len())
            .finish()
    }
}
