//! # Presentation Configuration
//!
//! Tunables for the theme resolver, marquee and reveal trigger. The web app
//! builds one [`PresentationConfig`] at startup and hands it to components
//! through context; nothing reads it from a global.
//!
//! Every field has a default, so a page may override any subset as JSON:
//!
//! ```rust
//! use lib_core::config::PresentationConfig;
//!
//! let config = PresentationConfig::from_json(r#"{ "marquee_speed_px_per_sec": 60.0 }"#).unwrap();
//! assert_eq!(config.marquee_speed_px_per_sec, 60.0);
//! assert_eq!(config.theme_storage_key, "ne-theme");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PresentationError, Result};

pub const DEFAULT_THEME_STORAGE_KEY: &str = "ne-theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_MARQUEE_SPEED_PX_PER_SEC: f64 = 42.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.16;
pub const DEFAULT_REVEAL_SELECTOR: &str = "[data-reveal]";
pub const DEFAULT_REVEAL_CLASS: &str = "is-revealed";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Local storage key holding `"light"` or `"dark"`
    pub theme_storage_key: String,

    /// Document-level attribute the stylesheet keys off
    pub theme_attribute: String,

    /// Constant marquee velocity
    pub marquee_speed_px_per_sec: f64,

    /// Visible fraction of a target that triggers its reveal
    ///
    /// Valid range: (0, 1]
    pub reveal_threshold: f64,

    /// CSS selector of elements that reveal on view
    pub reveal_selector: String,

    /// Class added to an element once revealed
    pub reveal_class: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_string(),
            marquee_speed_px_per_sec: DEFAULT_MARQUEE_SPEED_PX_PER_SEC,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_selector: DEFAULT_REVEAL_SELECTOR.to_string(),
            reveal_class: DEFAULT_REVEAL_CLASS.to_string(),
        }
    }
}

impl PresentationConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate values that would otherwise stall or break the page.
    pub fn validate(&self) -> Result<()> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(PresentationError::Config(
                "theme_storage_key cannot be empty".to_string(),
            ));
        }

        if self.theme_attribute.trim().is_empty() {
            return Err(PresentationError::Config(
                "theme_attribute cannot be empty".to_string(),
            ));
        }

        if !self.marquee_speed_px_per_sec.is_finite() || self.marquee_speed_px_per_sec <= 0.0 {
            return Err(PresentationError::Config(format!(
                "marquee_speed_px_per_sec must be positive, got {}",
                self.marquee_speed_px_per_sec
            )));
        }

        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(PresentationError::Config(format!(
                "reveal_threshold must be within (0, 1], got {}",
                self.reveal_threshold
            )));
        }

        if self.reveal_selector.trim().is_empty() || self.reveal_class.trim().is_empty() {
            return Err(PresentationError::Config(
                "reveal_selector and reveal_class cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PresentationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.marquee_speed_px_per_sec, 42.0);
        assert_eq!(config.reveal_threshold, 0.16);
        assert_eq!(config.theme_attribute, "data-theme");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PresentationConfig::from_json(r#"{ "reveal_class": "shown" }"#).unwrap();
        assert_eq!(config.reveal_class, "shown");
        assert_eq!(config.reveal_selector, DEFAULT_REVEAL_SELECTOR);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = PresentationConfig::from_json(r#"{ "marquee_speed_px_per_sec": 0 }"#).unwrap_err();
        assert!(matches!(err, PresentationError::Config(_)));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        assert!(PresentationConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).is_err());
        assert!(PresentationConfig::from_json(r#"{ "reveal_threshold": 0.0 }"#).is_err());
        assert!(PresentationConfig::from_json(r#"{ "reveal_threshold": 1.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PresentationConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PresentationError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_storage_key() {
        assert!(PresentationConfig::from_json(r#"{ "theme_storage_key": " " }"#).is_err());
    }
}
