//! Benefits grid and the extra-info detail modal

use leptos::prelude::*;
use shared::content::EXTRA_INFO;
use shared::utils::{benefit_cards, IconGroup};

use crate::state::page::use_page_context;
use crate::state::theme::use_theme_context;
use crate::utils::constants::{EXTRA_BENEFIT_ICONS, MAIN_BENEFIT_ICONS};
use crate::utils::palette;

fn icon_for(group: IconGroup, index: usize) -> &'static str {
    let icons = match group {
        IconGroup::Main => MAIN_BENEFIT_ICONS,
        IconGroup::Extra => EXTRA_BENEFIT_ICONS,
    };
    icons[index % icons.len()]
}

#[component]
pub fn BenefitsSection() -> impl IntoView {
    let theme = use_theme_context();
    let page = use_page_context();

    let cards = benefit_cards()
        .into_iter()
        .map(|card| {
            let icon = icon_for(card.icon_group, card.index);
            let opens_info = card.icon_group == IconGroup::Extra;
            view! {
                <article
                    data-reveal=""
                    on:click=move |_| {
                        if opens_info {
                            page.open_info(card.index);
                        }
                    }
                    class=move || {
                        let cursor = if opens_info { "cursor-pointer hover:-translate-y-1" } else { "" };
                        format!("rounded-2xl border p-5 transition {} {}", palette::glass_panel(theme.mode()), cursor)
                    }
                >
                    <span class="text-2xl" aria-hidden="true">{icon}</span>
                    <h3 class="mt-3 text-xl font-semibold">{card.title}</h3>
                    <p class=move || format!("mt-2 text-sm leading-relaxed {}", palette::muted_text(theme.mode()))>
                        {card.description}
                    </p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="py-[clamp(3.3rem,7vw,6.2rem)]">
            <div class="mx-auto w-[min(1140px,92vw)]">
                <div class="mb-6" data-reveal="">
                    <p class="text-xs tracking-[0.18em]">"BENEFICIOS"</p>
                    <h2 class="mt-2 text-3xl font-semibold">"Por que elegir Nuevos Espacios"</h2>
                </div>
                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">{cards}</div>
            </div>
        </section>
    }
}

/// Detail modal of the extra-info card selected in [`BenefitsSection`]
#[component]
pub fn InfoModal() -> impl IntoView {
    let theme = use_theme_context();
    let page = use_page_context();

    move || {
        page.info
            .get()
            .current()
            .and_then(|index| EXTRA_INFO.get(index))
            .map(|info| {
                view! {
                    <div
                        class="fixed inset-0 z-50 grid place-items-center bg-black/70 p-4"
                        on:click=move |_| page.close_info()
                    >
                        <div
                            class=move || format!("w-full max-w-lg rounded-3xl border p-6 {}", palette::glass_panel(theme.mode()))
                            on:click=|ev| ev.stop_propagation()
                        >
                            <h3 class="text-3xl font-semibold">{info.title}</h3>
                            <p class=move || format!("mt-4 leading-relaxed {}", palette::muted_text(theme.mode()))>
                                {info.body}
                            </p>
                            <button
                                type="button"
                                class="mt-6 rounded-full bg-emerald-500 px-5 py-2 text-sm font-semibold text-white"
                                on:click=move |_| page.close_info()
                            >
                                "Cerrar"
                            </button>
                        </div>
                    </div>
                }
            })
    }
}
