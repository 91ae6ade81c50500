//! Theme controller with a persisted user preference.

use crate::config::Config;
use crate::os::OsPreference;
use crate::presentation::Presentation;
use crate::store::{PreferenceStore, StoreError};
use crate::theme::{ColorMode, ThemePreference};

/// Resolves, applies and persists the user's theme preference.
///
/// The effective mode is the stored preference when one exists, otherwise
/// the OS preference. Toggling always writes an explicit preference, so once
/// the user has toggled the OS preference no longer matters.
///
/// # Example
///
/// ```rust
/// use colormode::{
///     ColorMode, ManualPreference, MemoryStore, RootElement, ThemePreference,
///     ThemePreferenceController,
/// };
///
/// let mut controller = ThemePreferenceController::new(
///     MemoryStore::new(),
///     ManualPreference::new(ColorMode::Dark),
///     RootElement::new(),
/// );
///
/// assert_eq!(controller.initialize(), ColorMode::Dark);
/// assert_eq!(controller.toggle()?, ColorMode::Light);
/// assert_eq!(controller.preference(), ThemePreference::Light);
/// # Ok::<(), colormode::StoreError>(())
/// ```
#[derive(Debug)]
pub struct ThemePreferenceController<S, O, P> {
    store: S,
    os: O,
    presentation: P,
    config: Config,
    preference: ThemePreference,
    initialized: bool,
}

impl<S, O, P> ThemePreferenceController<S, O, P>
where
    S: PreferenceStore,
    O: OsPreference,
    P: Presentation,
{
    /// Creates a controller using the default storage key.
    pub fn new(store: S, os: O, presentation: P) -> Self {
        Self::with_config(store, os, presentation, Config::default())
    }

    pub fn with_config(store: S, os: O, presentation: P, config: Config) -> Self {
        Self {
            store,
            os,
            presentation,
            config,
            preference: ThemePreference::Unset,
            initialized: false,
        }
    }

    /// Resolves the effective mode and applies it to the presentation.
    ///
    /// Never writes to the store. Calling it again with unchanged inputs
    /// applies the same mode.
    pub fn initialize(&mut self) -> ColorMode {
        self.preference = self.read_preference();
        let mode = self.preference.resolve(self.os.current());
        self.presentation.apply(mode);
        self.initialized = true;
        tracing::debug!(preference = %self.preference, applied = %mode, "theme initialized");
        mode
    }

    /// Flips the applied theme and persists the new choice.
    ///
    /// The applied mode is flipped and written as an explicit preference, so
    /// a page following a dark OS setting becomes an explicit `light`. A
    /// controller that was never initialized is initialized first.
    ///
    /// The preference is written before the presentation changes. If the
    /// write fails the error is returned and nothing is applied.
    pub fn toggle(&mut self) -> Result<ColorMode, StoreError> {
        if !self.initialized {
            self.initialize();
        }
        let current = self.presentation.applied();
        let next = current.flipped();

        self.store.set(self.config.key(), next.as_str())?;
        self.preference = next.into();
        self.presentation.apply(next);
        tracing::debug!(from = %current, to = %next, "theme toggled");
        Ok(next)
    }

    /// The preference as last read or written.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The mode currently applied to the presentation.
    pub fn applied(&self) -> ColorMode {
        self.presentation.applied()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn os(&self) -> &O {
        &self.os
    }

    pub fn os_mut(&mut self) -> &mut O {
        &mut self.os
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Consumes the controller, returning its collaborators.
    pub fn into_parts(self) -> (S, O, P) {
        (self.store, self.os, self.presentation)
    }

    fn read_preference(&self) -> ThemePreference {
        match self.store.get(self.config.key()) {
            Ok(stored) => ThemePreference::parse(stored.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable theme preference");
                ThemePreference::Unset
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::ManualPreference;
    use crate::presentation::RootElement;
    use crate::store::{MemoryStore, DEFAULT_STORAGE_KEY};
    use crate::theme::ToggleIcon;

    type Controller = ThemePreferenceController<MemoryStore, ManualPreference, RootElement>;

    fn controller(stored: Option<&str>, os: ColorMode) -> Controller {
        let store = match stored {
            Some(value) => MemoryStore::with_entry(DEFAULT_STORAGE_KEY, value),
            None => MemoryStore::new(),
        };
        ThemePreferenceController::new(store, ManualPreference::new(os), RootElement::new())
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore(Option<String>);

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.0.clone())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "readonly".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.set(key, "")
        }
    }

    /// A store whose reads always fail.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Serialize(
                serde_json::from_str::<serde_json::Value>("").unwrap_err(),
            ))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_unset_follows_dark_os() {
        let mut c = controller(None, ColorMode::Dark);
        assert_eq!(c.initialize(), ColorMode::Dark);
        assert!(c.presentation().is_dark());
        assert_eq!(c.preference(), ThemePreference::Unset);
        assert_eq!(c.store().value(DEFAULT_STORAGE_KEY), None);
    }

    #[test]
    fn test_stored_light_overrides_dark_os() {
        let mut c = controller(Some("light"), ColorMode::Dark);
        assert_eq!(c.initialize(), ColorMode::Light);
        assert!(!c.presentation().is_dark());
        assert_eq!(c.presentation().icon(), Some(ToggleIcon::Dark));
    }

    #[test]
    fn test_malformed_stored_value_is_unset() {
        let mut c = controller(Some("purple"), ColorMode::Dark);
        assert_eq!(c.initialize(), ColorMode::Dark);
        assert_eq!(c.preference(), ThemePreference::Unset);
    }

    #[test]
    fn test_initialize_twice_is_idempotent() {
        let mut c = controller(None, ColorMode::Dark);
        let first = c.initialize();
        let root_after_first = c.presentation().clone();
        let second = c.initialize();

        assert_eq!(first, second);
        assert_eq!(c.presentation(), &root_after_first);
        assert_eq!(c.store().writes(), 0);
    }

    #[test]
    fn test_toggle_flips_stored_dark() {
        let mut c = controller(Some("dark"), ColorMode::Light);
        c.initialize();

        assert_eq!(c.toggle().unwrap(), ColorMode::Light);
        assert_eq!(c.store().value(DEFAULT_STORAGE_KEY), Some("light"));
        assert_eq!(c.preference(), ThemePreference::Light);
        assert!(!c.presentation().is_dark());
    }

    #[test]
    fn test_toggle_from_unset_flips_applied_state() {
        let mut c = controller(None, ColorMode::Dark);
        c.initialize();

        assert_eq!(c.toggle().unwrap(), ColorMode::Light);
        assert_eq!(c.store().value(DEFAULT_STORAGE_KEY), Some("light"));
        assert_eq!(c.applied(), ColorMode::Light);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut c = controller(Some("light"), ColorMode::Dark);
        c.initialize();
        let before = c.applied();

        c.toggle().unwrap();
        c.toggle().unwrap();

        assert_eq!(c.store().value(DEFAULT_STORAGE_KEY), Some("light"));
        assert_eq!(c.applied(), before);
    }

    #[test]
    fn test_each_toggle_writes_once_and_flips_once() {
        let mut c = controller(None, ColorMode::Light);
        c.initialize();
        let flips = c.presentation().flips();

        for n in 1..=4 {
            c.toggle().unwrap();
            assert_eq!(c.store().writes(), n);
            assert_eq!(c.presentation().flips(), flips + n);
        }
    }

    #[test]
    fn test_toggle_keeps_icon_in_step() {
        let mut c = controller(None, ColorMode::Light);
        c.initialize();
        assert_eq!(c.presentation().icon(), Some(ToggleIcon::Dark));

        c.toggle().unwrap();
        assert_eq!(c.presentation().icon(), Some(ToggleIcon::Light));
    }

    #[test]
    fn test_os_change_after_toggle_is_ignored() {
        let mut c = controller(None, ColorMode::Dark);
        c.initialize();
        c.toggle().unwrap();

        c.os_mut().set(ColorMode::Light);
        assert_eq!(c.initialize(), ColorMode::Light);
        c.os_mut().set(ColorMode::Dark);
        assert_eq!(c.initialize(), ColorMode::Light);
    }

    #[test]
    fn test_failed_write_leaves_presentation_unchanged() {
        let mut c = ThemePreferenceController::new(
            ReadOnlyStore(Some("dark".into())),
            ManualPreference::new(ColorMode::Light),
            RootElement::new(),
        );
        c.initialize();

        assert!(c.toggle().is_err());
        assert_eq!(c.applied(), ColorMode::Dark);
        assert_eq!(c.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_unreadable_store_is_unset() {
        let mut c = ThemePreferenceController::new(
            BrokenStore,
            ManualPreference::new(ColorMode::Dark),
            RootElement::new(),
        );
        assert_eq!(c.initialize(), ColorMode::Dark);
        assert_eq!(c.preference(), ThemePreference::Unset);
    }

    #[test]
    fn test_toggle_before_initialize_flips_once() {
        let mut c = ThemePreferenceController::new(
            MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "dark"),
            ManualPreference::new(ColorMode::Light),
            RootElement::with_dark(true),
        );

        assert_eq!(c.toggle().unwrap(), ColorMode::Light);
        assert_eq!(c.presentation().flips(), 1);
        assert_eq!(c.store().writes(), 1);
        assert_eq!(c.store().value(DEFAULT_STORAGE_KEY), Some("light"));
        assert_eq!(c.applied(), ColorMode::Light);
    }

    #[test]
    fn test_custom_storage_key() {
        let mut c = ThemePreferenceController::with_config(
            MemoryStore::with_entry("site-theme", "dark"),
            ManualPreference::new(ColorMode::Light),
            RootElement::new(),
            Config::new().storage_key("site-theme"),
        );
        assert_eq!(c.initialize(), ColorMode::Dark);

        c.toggle().unwrap();
        let (store, _, _) = c.into_parts();
        assert_eq!(store.value("site-theme"), Some("light"));
        assert_eq!(store.value(DEFAULT_STORAGE_KEY), None);
    }
}
