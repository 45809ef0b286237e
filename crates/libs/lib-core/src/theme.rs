//! # Theme Resolution
//!
//! Decides between the light and dark variants of the page and remembers the
//! choice across reloads.
//!
//! Resolution order:
//!
//! 1. A valid value persisted under the configured key
//! 2. The value applied earlier in this session, if storage is failing
//! 3. The environment's `prefers-color-scheme` signal
//! 4. [`ThemeMode::Light`]
//!
//! Storage and environment access sit behind [`ThemeStore`] and
//! [`ColorSchemeProbe`] so the resolver runs unchanged against `localStorage`
//! in the browser and against [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Display mode of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than `light`/`dark` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent string key-value storage (origin-scoped `localStorage` in the browser)
pub trait ThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Source of the environment's preferred color scheme.
///
/// `None` means no signal is available, e.g. a headless context.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Receiver of the applied mode (the document-level theme attribute in the browser)
pub trait ThemeTarget {
    fn reflect(&self, mode: ThemeMode) -> Result<()>;
}

/// In-memory [`ThemeStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// [`ColorSchemeProbe`] with no signal
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPreference;

impl ColorSchemeProbe for NoPreference {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// Resolves and persists the [`ThemeMode`].
pub struct ThemeResolver<S, P> {
    store: S,
    probe: P,
    key: String,
    /// Last applied mode, consulted when the store has nothing usable
    session: RefCell<Option<ThemeMode>>,
}

impl<S: ThemeStore, P: ColorSchemeProbe> ThemeResolver<S, P> {
    pub fn new(store: S, probe: P, key: impl Into<String>) -> Self {
        Self {
            store,
            probe,
            key: key.into(),
            session: RefCell::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Determine the mode to render with. Never fails.
    pub fn resolve_initial_theme(&self) -> ThemeMode {
        match self.store.load(&self.key) {
            Ok(Some(raw)) => match ThemeMode::parse(&raw) {
                Some(mode) => return mode,
                None => tracing::debug!("Ignoring invalid stored theme {:?}", raw),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("Theme storage unreadable, using defaults: {}", err),
        }

        if let Some(mode) = *self.session.borrow() {
            return mode;
        }

        match self.probe.prefers_dark() {
            Some(true) => ThemeMode::Dark,
            Some(false) => ThemeMode::Light,
            None => {
                tracing::debug!("No color-scheme signal, defaulting to light");
                ThemeMode::Light
            }
        }
    }

    /// Reflect `mode` on `target` and persist it. Failures are logged, not returned.
    pub fn apply_theme(&self, mode: ThemeMode, target: &impl ThemeTarget) {
        *self.session.borrow_mut() = Some(mode);

        if let Err(err) = target.reflect(mode) {
            tracing::warn!("Could not reflect theme {}: {}", mode, err);
        }

        if let Err(err) = self.store.save(&self.key, mode.as_str()) {
            tracing::warn!("Could not persist theme {}: {}", mode, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresentationConfig;
    use crate::error::PresentationError;
    use std::cell::Cell;

    const KEY: &str = "ne-theme";

    struct FixedPreference(Option<bool>);

    impl ColorSchemeProbe for FixedPreference {
        fn prefers_dark(&self) -> Option<bool> {
            self.0
        }
    }

    /// Storage that rejects every operation
    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(PresentationError::storage("load", "SecurityError"))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(PresentationError::storage("save", "QuotaExceededError"))
        }
    }

    #[derive(Default)]
    struct RecordingTarget {
        last: Cell<Option<ThemeMode>>,
    }

    impl ThemeTarget for RecordingTarget {
        fn reflect(&self, mode: ThemeMode) -> Result<()> {
            self.last.set(Some(mode));
            Ok(())
        }
    }

    #[test]
    fn test_environment_dark_without_stored_value() {
        let resolver = ThemeResolver::new(MemoryStore::default(), FixedPreference(Some(true)), KEY);
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_stored_value_wins_over_environment() {
        let store = MemoryStore::with_value(KEY, "light");
        let resolver = ThemeResolver::new(store, FixedPreference(Some(true)), KEY);
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_no_signal_defaults_to_light() {
        let resolver = ThemeResolver::new(MemoryStore::default(), NoPreference, KEY);
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_invalid_stored_value_falls_back_to_environment() {
        let store = MemoryStore::with_value(KEY, "sepia");
        let resolver = ThemeResolver::new(store, FixedPreference(Some(true)), KEY);
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = ThemeResolver::new(MemoryStore::default(), FixedPreference(Some(true)), KEY);
        let first = resolver.resolve_initial_theme();
        let second = resolver.resolve_initial_theme();
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_then_reload_round_trip() {
        let target = RecordingTarget::default();
        let resolver = ThemeResolver::new(MemoryStore::default(), FixedPreference(Some(false)), KEY);
        resolver.apply_theme(ThemeMode::Dark, &target);
        assert_eq!(target.last.get(), Some(ThemeMode::Dark));

        // Simulate a reload: a fresh resolver over the same storage contents
        let persisted = resolver.store.load(KEY).unwrap().unwrap();
        let reloaded = ThemeResolver::new(
            MemoryStore::with_value(KEY, &persisted),
            FixedPreference(Some(false)),
            KEY,
        );
        assert_eq!(reloaded.resolve_initial_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_broken_storage_is_not_fatal() {
        let target = RecordingTarget::default();
        let resolver = ThemeResolver::new(BrokenStore, NoPreference, KEY);
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Light);

        // The applied mode survives in memory for the rest of the session
        resolver.apply_theme(ThemeMode::Dark, &target);
        assert_eq!(target.last.get(), Some(ThemeMode::Dark));
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggled_mode_applies_and_persists() {
        let target = RecordingTarget::default();
        let resolver = ThemeResolver::new(MemoryStore::default(), NoPreference, KEY);
        let initial = resolver.resolve_initial_theme();

        let next = initial.toggled();
        resolver.apply_theme(next, &target);
        assert_eq!(next, ThemeMode::Dark);
        assert_eq!(resolver.store.load(KEY).unwrap().as_deref(), Some("dark"));

        resolver.apply_theme(next.toggled(), &target);
        assert_eq!(target.last.get(), Some(ThemeMode::Light));
        assert_eq!(resolver.resolve_initial_theme(), ThemeMode::Light);
    }

    /// Document element stand-in keyed by attribute name
    struct AttributeTarget {
        attribute: String,
        attributes: RefCell<HashMap<String, String>>,
    }

    impl ThemeTarget for AttributeTarget {
        fn reflect(&self, mode: ThemeMode) -> Result<()> {
            self.attributes
                .borrow_mut()
                .insert(self.attribute.clone(), mode.as_str().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_apply_uses_configured_attribute_only() {
        let config =
            PresentationConfig::from_json(r#"{ "theme_attribute": "data-color-mode" }"#).unwrap();
        let target = AttributeTarget {
            attribute: config.theme_attribute.clone(),
            attributes: RefCell::new(HashMap::new()),
        };
        let resolver = ThemeResolver::new(MemoryStore::default(), NoPreference, config.theme_storage_key);
        resolver.apply_theme(ThemeMode::Dark, &target);

        let attributes = target.attributes.borrow();
        assert_eq!(attributes.get("data-color-mode").map(String::as_str), Some("dark"));
        assert!(!attributes.contains_key("data-theme"));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }
}
