//! Theme-dependent class sets

use lib_core::ThemeMode;

pub fn base_text(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "text-zinc-100",
        ThemeMode::Light => "text-zinc-900",
    }
}

pub fn muted_text(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "text-zinc-300",
        ThemeMode::Light => "text-zinc-700",
    }
}

pub fn glass_panel(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "border-white/15 bg-white/10 backdrop-blur-xl",
        ThemeMode::Light => "border-black/10 bg-white/60 backdrop-blur-xl",
    }
}

pub fn card(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "border-white/15 bg-black/35 backdrop-blur-md",
        ThemeMode::Light => "border-black/10 bg-white/80 backdrop-blur-md",
    }
}

/// Gallery tab button, highlighted when `active`
pub fn tab_button(mode: ThemeMode, active: bool) -> &'static str {
    match (active, mode) {
        (true, _) => "border-emerald-500 bg-emerald-500 text-white",
        (false, ThemeMode::Dark) => "border-white/20 bg-black/65 text-zinc-100 hover:bg-black/80",
        (false, ThemeMode::Light) => "border-black/15 bg-white/75 text-zinc-900 hover:bg-white",
    }
}

/// Label of the theme toggle: names the mode it switches to
pub fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "Modo dia",
        ThemeMode::Light => "Modo noche",
    }
}
