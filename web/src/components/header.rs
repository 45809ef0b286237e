//! Sticky header: brand, quote link and theme toggle

use leptos::prelude::*;
use shared::content::SITE;

use crate::state::theme::use_theme_context;
use crate::utils::{constants::quote_href, palette};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <header class="sticky top-4 z-30 mx-auto w-[min(1140px,92vw)] pt-4">
            <div class=move || format!("rounded-2xl border px-4 py-3 md:px-6 {}", palette::glass_panel(theme.mode()))>
                <div class="flex items-center justify-between gap-3">
                    <div>
                        <p class="text-md tracking-[0.22em]">"NUEVOS ESPACIOS"</p>
                        <p class="mt-1 text-md font-semibold">{SITE.city}</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <a
                            href=quote_href()
                            target="_blank"
                            rel="noreferrer"
                            class="rounded-full bg-emerald-500 px-4 py-2 text-sm font-semibold text-white transition hover:brightness-110"
                        >
                            "Presupuesto"
                        </a>
                        <button
                            type="button"
                            on:click=move |_| theme.toggle()
                            class=move || format!("rounded-full border px-3 py-2 text-sm {}", palette::card(theme.mode()))
                        >
                            {move || palette::toggle_label(theme.mode())}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
