//! Theme controllers.
//!
//! - [`ThemePreferenceController`]: stored preference first, OS as fallback,
//!   user toggles persisted. This is the controller most hosts want.
//! - [`SystemThemeController`]: OS preference only, follows OS changes,
//!   never persists.

mod persistent;
mod system;

pub use persistent::ThemePreferenceController;
pub use system::SystemThemeController;
