//! Hero banner

use leptos::prelude::*;

use crate::state::theme::use_theme_context;
use crate::utils::constants::{quote_href, GALLERY_SECTION_ID};
use crate::utils::{dom::scroll_to_section, palette};

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme_context();
    let gallery_href = format!("#{}", GALLERY_SECTION_ID);

    let on_view_gallery = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll_to_section(GALLERY_SECTION_ID);
    };

    view! {
        <section class="my-16" data-reveal="">
            <div class="mx-auto w-[90%] lg:w-[70%] max-w-[1400px]">
                <div class="relative overflow-hidden rounded-3xl border border-white/15 px-5 py-16 md:px-10 md:py-24 shadow-[0_24px_58px_-24px_rgba(255,255,255,0.38)]">
                    <div class="hero-gradient absolute inset-0 w-full"></div>
                    <div class="absolute inset-y-0 left-0 w-1/2 overflow-hidden">
                        <img src="/hero.png" alt="Hero Nuevos Espacios" class="hidden h-full w-full object-cover md:block"/>
                    </div>
                    <div class="relative z-10 grid w-full md:w-[102%] md:grid-cols-2">
                        <div></div>
                        <div class="space-y-7 p-6 text-center md:text-right">
                            <span class=move || format!("inline-flex rounded-full border px-3 py-1 text-sm {}", palette::card(theme.mode()))>
                                "Jardines verticales artificiales"
                            </span>
                            <h1 class="-mb-4 text-5xl font-semibold leading-tight text-white md:text-7xl">"Nuevos"</h1>
                            <h1 class="text-5xl font-semibold leading-tight text-white md:text-7xl">"Espacios"</h1>
                            <p class="text-base leading-relaxed text-white/85 md:ml-auto md:max-w-xl md:text-lg">
                                "Creamos paredes verdes modernas con instalacion profesional en CABA y GBA. \
                                Tambien trabajamos plantas artificiales y cesped sintetico para proyectos \
                                residenciales y comerciales."
                            </p>
                            <div class="h-[2px] w-full bg-gradient-to-r from-emerald-500 to-fuchsia-300 md:ml-auto"></div>
                            <div class="flex flex-wrap justify-center gap-3 md:justify-end">
                                <a
                                    href=quote_href()
                                    target="_blank"
                                    rel="noreferrer"
                                    class="rounded-full bg-emerald-500 px-6 py-3 text-sm font-semibold text-white transition hover:brightness-110"
                                >
                                    "Pedir presupuesto"
                                </a>
                                <a
                                    href=gallery_href
                                    on:click=on_view_gallery
                                    class=move || format!("rounded-full border px-6 py-3 text-sm font-semibold {}", palette::card(theme.mode()))
                                >
                                    "Ver galeria"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
