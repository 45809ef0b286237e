//! Product cards linking into the gallery

use leptos::prelude::*;
use shared::content::PRODUCTS;

use crate::state::page::use_page_context;
use crate::state::theme::use_theme_context;
use crate::utils::constants::{quote_href, GALLERY_SECTION_ID};
use crate::utils::{dom::scroll_to_section, palette};

#[component]
pub fn ProductsSection() -> impl IntoView {
    let theme = use_theme_context();
    let page = use_page_context();
    let gallery_href = format!("#{}", GALLERY_SECTION_ID);

    // Select the product's tab, then bring the gallery into view
    let open_gallery = move |ev: leptos::ev::MouseEvent, index: usize| {
        ev.prevent_default();
        page.select_product(index);
        scroll_to_section(GALLERY_SECTION_ID);
    };

    let cards = PRODUCTS
        .iter()
        .enumerate()
        .map(|(index, product)| {
            view! {
                <article
                    data-reveal=""
                    class=move || format!("rounded-2xl border p-5 {}", palette::glass_panel(theme.mode()))
                >
                    <a href=gallery_href.clone() on:click=move |ev| open_gallery(ev, index)>
                        <img src=product.image alt=product.title class="mb-4 h-64 w-full rounded-xl object-cover"/>
                    </a>
                    <span class=move || format!("inline-flex rounded-full border px-3 py-1 text-sm {}", palette::card(theme.mode()))>
                        {product.badge}
                    </span>
                    <h3 class="mt-3 text-2xl font-semibold">{product.title}</h3>
                    <p class=move || format!("mt-3 text-sm leading-relaxed {}", palette::muted_text(theme.mode()))>
                        {product.description}
                    </p>
                    <a
                        href=gallery_href.clone()
                        on:click=move |ev| open_gallery(ev, index)
                        class=move || format!("mt-4 inline-flex rounded-full border px-3 py-1 text-sm {}", palette::card(theme.mode()))
                    >
                        "Ver galeria de este producto"
                    </a>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="py-[clamp(3.3rem,7vw,6.2rem)]">
            <div class="mx-auto w-[min(1140px,92vw)]">
                <div class="mb-6 flex flex-wrap items-end justify-between gap-4" data-reveal="">
                    <div>
                        <p class="text-xs tracking-[0.18em]">"PRODUCTOS"</p>
                        <h2 class="mt-2 text-3xl font-semibold">"Lo que instalamos"</h2>
                        <p class="mt-2">"Te recomendamos una solucion real segun tu espacio, estilo y uso."</p>
                    </div>
                    <a
                        href=quote_href()
                        target="_blank"
                        rel="noreferrer"
                        class="rounded-full bg-pink-500 px-6 py-3 text-sm font-semibold text-white transition hover:brightness-110"
                    >
                        "Escribir por WhatsApp"
                    </a>
                </div>
                <div class="grid gap-4 md:grid-cols-3">{cards}</div>
            </div>
        </section>
    }
}
