//! # Shared Utility Functions
//!
//! Pure presentation helpers used by the web app.
//!
//! ## Links
//!
//! - [`whatsapp_link`] - Deep link to a WhatsApp chat with a prefilled message
//!
//! ## Display
//!
//! - [`initials`] - Two-letter badge text for a name
//! - [`rating_stars`] - Star string for a review rating
//! - [`marquee_items`] - A list followed by a copy of itself
//! - [`benefit_cards`] - Benefits and extra-info briefs as one card list
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{initials, whatsapp_link};
//!
//! assert_eq!(initials("Estudios de arquitectura"), "ED");
//! assert_eq!(
//!     whatsapp_link("+54 9 11 3935-9554", "Hola"),
//!     "https://wa.me/5491139359554?text=Hola"
//! );
//! ```

use crate::content::{BENEFITS, EXTRA_INFO};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Build a `wa.me` deep link.
///
/// Non-digit characters are stripped from `number`; `message` is percent-encoded.
///
/// # Examples
///
/// ```rust
/// use shared::utils::whatsapp_link;
///
/// let href = whatsapp_link("5491139359554", "Quiero un presupuesto");
/// assert_eq!(href, "https://wa.me/5491139359554?text=Quiero%20un%20presupuesto");
/// ```
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{}{}?text={}", WHATSAPP_BASE, digits, urlencoding::encode(message))
}

/// First letter of the first two words, uppercased.
///
/// Empty or whitespace-only names produce an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Star string for a review rating (`*` per point)
pub fn rating_stars(rating: u8) -> String {
    "*".repeat(usize::from(rating))
}

/// Concatenate `items` with itself.
///
/// A marquee track renders this doubled list so that resetting the scroll
/// offset at half the track width is visually seamless.
pub fn marquee_items<T: Clone>(items: &[T]) -> Vec<T> {
    let mut doubled = Vec::with_capacity(items.len() * 2);
    doubled.extend_from_slice(items);
    doubled.extend_from_slice(items);
    doubled
}

/// Icon family a benefit card draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGroup {
    Main,
    Extra,
}

/// One card of the benefits grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenefitCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon_group: IconGroup,
    /// Position within its source list; for [`IconGroup::Extra`] this is the
    /// index into [`EXTRA_INFO`] used by the detail modal.
    pub index: usize,
}

/// Benefits followed by the extra-info briefs
pub fn benefit_cards() -> Vec<BenefitCard> {
    let main = BENEFITS.iter().enumerate().map(|(index, benefit)| BenefitCard {
        title: benefit.title,
        description: benefit.description,
        icon_group: IconGroup::Main,
        index,
    });
    let extra = EXTRA_INFO.iter().enumerate().map(|(index, info)| BenefitCard {
        title: info.title,
        description: info.brief,
        icon_group: IconGroup::Extra,
        index,
    });
    main.chain(extra).collect()
}
