//! Utilities

pub mod config;
pub mod constants;
pub mod dom;
pub mod palette;
