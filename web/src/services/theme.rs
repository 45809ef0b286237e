//! Theme persistence and environment access via `localStorage` and `matchMedia`

use lib_core::error::{PresentationError, Result};
use lib_core::theme::{ColorSchemeProbe, ThemeMode, ThemeResolver, ThemeStore, ThemeTarget};
use lib_core::PresentationConfig;
use web_sys::{window, Storage};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Resolver wired to the browser
pub type BrowserThemeResolver = ThemeResolver<LocalThemeStore, MediaQueryProbe>;

pub fn browser_theme_resolver(config: &PresentationConfig) -> BrowserThemeResolver {
    ThemeResolver::new(LocalThemeStore, MediaQueryProbe, config.theme_storage_key.clone())
}

/// Origin-scoped `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

fn local_storage() -> Result<Storage> {
    let window = window().ok_or_else(|| PresentationError::Environment("No window".to_string()))?;
    window
        .local_storage()
        .map_err(|err| PresentationError::storage("localStorage access denied", err))?
        .ok_or_else(|| PresentationError::Storage("localStorage unavailable".to_string()))
}

impl ThemeStore for LocalThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|err| PresentationError::storage("getItem failed", err))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| PresentationError::storage("setItem failed", err))
    }
}

/// `prefers-color-scheme` media query
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> Option<bool> {
        let query = window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        Some(query.matches())
    }
}

/// Theme attribute on `<html>`, consumed by the stylesheet
#[derive(Clone, Debug)]
pub struct DocumentThemeAttribute {
    attribute: String,
}

impl DocumentThemeAttribute {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl ThemeTarget for DocumentThemeAttribute {
    fn reflect(&self, mode: ThemeMode) -> Result<()> {
        let root = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or_else(|| PresentationError::Dom("No document element".to_string()))?;
        root.set_attribute(&self.attribute, mode.as_str())
            .map_err(|err| PresentationError::dom("setAttribute failed", err))
    }
}
