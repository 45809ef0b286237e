//! # Shared Site Content Library
//!
//! Static marketing content for the Nuevos Espacios site and the pure helpers
//! used to present it. Both the presentation core and the web app depend on it.
//!
//! ## Structure
//!
//! - **[`content`]**: Business, contact, benefit, product, client, gallery and review data
//! - **[`utils`]**: Presentation helpers
//!   - **[`utils::whatsapp_link`]**: Build the WhatsApp deep link
//!   - **[`utils::initials`]**: Two-letter badge for names
//!   - **[`utils::marquee_items`]**: Duplicate a list for a seamless marquee track
//!
//! ## Usage
//!
//! ```rust
//! use shared::content::{CONTACT, DEFAULT_QUOTE_MESSAGE};
//! use shared::utils::whatsapp_link;
//!
//! let href = whatsapp_link(CONTACT.whatsapp_number, DEFAULT_QUOTE_MESSAGE);
//! assert!(href.starts_with("https://wa.me/5491139359554?text="));
//! ```

pub mod content;
pub mod utils;

pub use content::*;
pub use utils::*;
