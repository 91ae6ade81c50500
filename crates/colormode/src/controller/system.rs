//! Theme controller that mirrors the OS preference.

use std::cell::RefCell;
use std::rc::Rc;

use crate::os::OsPreference;
use crate::presentation::Presentation;
use crate::theme::ColorMode;

/// Applies the OS color scheme and follows it as it changes.
///
/// Nothing is read from or written to a preference store: the OS setting is
/// the only input.
///
/// # Example
///
/// ```rust
/// use colormode::{ColorMode, ManualPreference, Presentation, RootElement, SystemThemeController};
///
/// let mut os = ManualPreference::new(ColorMode::Dark);
/// let controller = SystemThemeController::attach(&mut os, RootElement::new());
/// assert!(controller.borrow().presentation().is_dark());
///
/// os.set(ColorMode::Light);
/// assert!(!controller.borrow().presentation().is_dark());
/// ```
#[derive(Debug)]
pub struct SystemThemeController<P> {
    presentation: P,
}

impl<P: Presentation> SystemThemeController<P> {
    pub fn new(presentation: P) -> Self {
        Self { presentation }
    }

    /// Applies the current OS preference.
    pub fn initialize(&mut self, os: &impl OsPreference) -> ColorMode {
        self.on_os_preference_change(os.current())
    }

    /// Reapplies the theme for a new OS preference.
    pub fn on_os_preference_change(&mut self, mode: ColorMode) -> ColorMode {
        self.presentation.set_dark(mode.is_dark());
        tracing::debug!(applied = %mode, "theme follows os");
        mode
    }

    pub fn applied(&self) -> ColorMode {
        self.presentation.applied()
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn into_presentation(self) -> P {
        self.presentation
    }
}

impl<P: Presentation + 'static> SystemThemeController<P> {
    /// Creates a shared controller, initializes it from `os`, and subscribes
    /// it to every later change of `os`.
    pub fn attach(os: &mut impl OsPreference, presentation: P) -> Rc<RefCell<Self>> {
        let controller = Rc::new(RefCell::new(Self::new(presentation)));
        controller.borrow_mut().initialize(&*os);

        let listener = Rc::clone(&controller);
        os.subscribe(Box::new(move |mode| {
            listener.borrow_mut().on_os_preference_change(mode);
        }));
        controller
    }
}
