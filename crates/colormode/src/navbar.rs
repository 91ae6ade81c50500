//! Navbar menu and dropdown visibility.

/// Element a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    MobileMenuButton,
    DesktopDropdownButton,
    MobileDropdownButton,
    /// Anywhere else in the document
    Outside,
}

/// Input the navbar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent<'a> {
    Click(NavTarget),
    /// A key press, named as in DOM `KeyboardEvent.key`
    KeyDown(&'a str),
}

/// Icon shown on the mobile menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, menu closed
    Open,
    /// Cross, menu expanded
    Close,
}

/// Visibility of the mobile menu and the two dropdowns.
///
/// Everything starts hidden. The desktop dropdown closes on any click that
/// is not on its own button; Escape closes both dropdowns but leaves the
/// mobile menu alone.
///
/// # Example
///
/// ```rust
/// use colormode::navbar::{NavEvent, NavTarget, NavbarController};
///
/// let mut nav = NavbarController::new();
/// nav.handle(NavEvent::Click(NavTarget::DesktopDropdownButton));
/// assert!(nav.desktop_dropdown_open());
///
/// nav.handle(NavEvent::Click(NavTarget::Outside));
/// assert!(!nav.desktop_dropdown_open());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarController {
    mobile_menu_open: bool,
    desktop_dropdown_open: bool,
    mobile_dropdown_open: bool,
}

impl NavbarController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: NavEvent<'_>) {
        match event {
            NavEvent::Click(target) => self.click(target),
            NavEvent::KeyDown("Escape") => {
                self.desktop_dropdown_open = false;
                self.mobile_dropdown_open = false;
            }
            NavEvent::KeyDown(_) => {}
        }
    }

    fn click(&mut self, target: NavTarget) {
        match target {
            NavTarget::MobileMenuButton => self.mobile_menu_open = !self.mobile_menu_open,
            // The button's own click does not reach the document handler.
            NavTarget::DesktopDropdownButton => {
                self.desktop_dropdown_open = !self.desktop_dropdown_open;
                return;
            }
            NavTarget::MobileDropdownButton => {
                self.mobile_dropdown_open = !self.mobile_dropdown_open
            }
            NavTarget::Outside => {}
        }
        self.desktop_dropdown_open = false;
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn desktop_dropdown_open(&self) -> bool {
        self.desktop_dropdown_open
    }

    pub fn mobile_dropdown_open(&self) -> bool {
        self.mobile_dropdown_open
    }

    /// Value of the mobile menu button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.mobile_menu_open {
            "true"
        } else {
            "false"
        }
    }

    pub fn menu_icon(&self) -> MenuIcon {
        if self.mobile_menu_open {
            MenuIcon::Close
        } else {
            MenuIcon::Open
        }
    }
}
