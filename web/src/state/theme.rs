//! Theme state management

use leptos::prelude::*;
use lib_core::{PresentationConfig, ThemeMode};

use crate::services::theme::{browser_theme_resolver, DocumentThemeAttribute};

/// Current theme, handed to components through context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    /// Set once the resolved theme has been applied; the page fades in on it
    pub ready: RwSignal<bool>,
}

impl ThemeContext {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(initial),
            ready: RwSignal::new(false),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }
}

/// Resolve the initial theme and keep the document and storage in sync with it.
pub fn provide_theme_context(config: &PresentationConfig) -> ThemeContext {
    let resolver = browser_theme_resolver(config);
    let target = DocumentThemeAttribute::new(config.theme_attribute.clone());

    let initial = resolver.resolve_initial_theme();
    log::debug!("Initial theme: {}", initial);

    let context = ThemeContext::new(initial);
    provide_context(context);

    // Runs once after mount and again on every toggle
    Effect::new(move |_| {
        let mode = context.mode.get();
        resolver.apply_theme(mode, &target);
        context.ready.set(true);
    });

    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
