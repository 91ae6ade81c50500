//! Theme values shared by every controller.
//!
//! - [`ColorMode`]: an applied or OS-reported light/dark mode
//! - [`ThemePreference`]: the persisted user choice, including `Unset`
//! - [`ToggleIcon`]: the icon shown on the toggle button

mod icon;
mod mode;

pub use icon::ToggleIcon;
pub use mode::{ColorMode, ThemePreference};
