//! Reactive page state

pub mod page;
pub mod theme;
