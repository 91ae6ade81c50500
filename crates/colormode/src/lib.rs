//! # Colormode - dark/light theme preference handling
//!
//! Colormode decides whether a page or application should render dark or
//! light, applies that decision, and remembers what the user picked.
//!
//! ## Resolution
//!
//! The effective mode is the user's stored preference when one exists, and
//! the OS color-scheme preference otherwise:
//!
//! | Stored  | OS    | Applied |
//! |---------|-------|---------|
//! | `dark`  | any   | dark    |
//! | `light` | any   | light   |
//! | unset   | dark  | dark    |
//! | unset   | light | light   |
//!
//! Anything other than the exact strings `dark` and `light` in the store
//! counts as unset.
//!
//! ## Collaborators
//!
//! Controllers never touch process-wide state directly. They are built from
//! three injected pieces:
//!
//! - a [`PreferenceStore`] ([`MemoryStore`], [`FileStore`])
//! - an [`OsPreference`] ([`SystemPreference`], [`ManualPreference`])
//! - a [`Presentation`] ([`RootElement`])
//!
//! ## Quick Start
//!
//! ```rust
//! use colormode::{
//!     ColorMode, ManualPreference, MemoryStore, RootElement, ThemePreferenceController,
//! };
//!
//! let mut controller = ThemePreferenceController::new(
//!     MemoryStore::new(),
//!     ManualPreference::new(ColorMode::Light),
//!     RootElement::new(),
//! );
//!
//! controller.initialize();
//! assert_eq!(controller.applied(), ColorMode::Light);
//!
//! controller.toggle()?;
//! assert_eq!(controller.store().value("color-theme"), Some("dark"));
//! # Ok::<(), colormode::StoreError>(())
//! ```
//!
//! Hosts that only want to mirror the OS setting use
//! [`SystemThemeController`] instead; it never persists anything.
//!
//! The [`modal`] and [`navbar`] modules hold the page's other interactive
//! pieces as plain state machines.

mod config;
mod controller;
pub mod modal;
pub mod navbar;
mod os;
mod presentation;
mod store;
mod theme;

pub use config::Config;
pub use controller::{SystemThemeController, ThemePreferenceController};
pub use os::{
    detect_color_mode, set_theme_detector, Listener, ManualPreference, OsPreference,
    SystemPreference, ThemeDetector,
};
pub use presentation::{Presentation, RootElement, DARK_CLASS};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, DEFAULT_STORAGE_KEY};
pub use theme::{ColorMode, ThemePreference, ToggleIcon};
