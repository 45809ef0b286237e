//! # Presentation Core
//!
//! Browser-independent state machines behind the site: theme resolution,
//! the continuous marquee, one-shot viewport reveals, and gallery/modal state.
//!
//! Platform capabilities (storage, color-scheme preference, viewport
//! observation) are traits implemented by the web app and by in-memory fakes
//! in tests.

pub mod config;
pub mod error;
pub mod gallery;
pub mod marquee;
pub mod reveal;
pub mod theme;

// Re-export commonly used types
pub use config::PresentationConfig;
pub use error::{PresentationError, Result};
pub use gallery::{product_tab, GalleryState, ModalSlot};
pub use marquee::{Marquee, MarqueeState};
pub use reveal::{
    observer_thresholds, visible_share, RevealSession, RevealSet, RevealState, RevealSurface,
    ViewportWatch,
};
pub use theme::{ColorSchemeProbe, ThemeMode, ThemeResolver, ThemeStore, ThemeTarget};
