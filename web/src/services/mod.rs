//! Browser adapters for the presentation core

pub mod frames;
pub mod theme;
pub mod viewport;
