//! UI Components

pub mod benefits;
pub mod contact;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod marquee;
pub mod products;
pub mod reviews;

pub use benefits::{BenefitsSection, InfoModal};
pub use contact::ContactSection;
pub use gallery::{GalleryModal, GallerySection};
pub use header::SiteHeader;
pub use hero::Hero;
pub use marquee::ClientsSection;
pub use products::ProductsSection;
pub use reviews::{ReviewModal, ReviewsSection};
