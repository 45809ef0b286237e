//! Presentation config read from the host page

use lib_core::PresentationConfig;
use web_sys::window;

use crate::utils::constants::CONFIG_ELEMENT_ID;

/// Read overrides from `<script id="presentation-config" type="application/json">`.
///
/// A missing element means defaults; an invalid one is logged and ignored.
pub fn load_presentation_config() -> PresentationConfig {
    let raw = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return PresentationConfig::default();
    };

    match PresentationConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("Loaded presentation config overrides");
            config
        }
        Err(err) => {
            log::warn!("Ignoring invalid presentation config: {}", err);
            PresentationConfig::default()
        }
    }
}
