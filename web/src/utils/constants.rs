//! Application constants

use shared::content::{CONTACT, DEFAULT_QUOTE_MESSAGE};
use shared::utils::whatsapp_link;

/// Element holding optional JSON presentation overrides
pub const CONFIG_ELEMENT_ID: &str = "presentation-config";

/// Anchor of the gallery section
pub const GALLERY_SECTION_ID: &str = "gallery";

// Benefit icon glyphs, indexed like BENEFITS / EXTRA_INFO
pub const MAIN_BENEFIT_ICONS: &[&str] = &["☀", "👥", "🛡", "💳"];
pub const EXTRA_BENEFIT_ICONS: &[&str] = &["⏱", "💧", "📈", "💳", "📍"];

/// WhatsApp link used by every quote button
pub fn quote_href() -> String {
    whatsapp_link(CONTACT.whatsapp_number, DEFAULT_QUOTE_MESSAGE)
}
