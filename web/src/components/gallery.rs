//! Tabbed photo gallery and its full-screen viewer

use leptos::prelude::*;
use shared::content::GALLERY_TABS;

use crate::state::page::use_page_context;
use crate::state::theme::use_theme_context;
use crate::utils::constants::GALLERY_SECTION_ID;
use crate::utils::palette;

#[component]
pub fn GallerySection() -> impl IntoView {
    let theme = use_theme_context();
    let page = use_page_context();

    let tab_buttons = GALLERY_TABS
        .iter()
        .map(|tab| {
            let key = tab.key;
            view! {
                <button
                    type="button"
                    on:click=move |_| page.select_tab(key)
                    class=move || format!(
                        "rounded-full border px-4 py-2 text-sm transition {}",
                        palette::tab_button(theme.mode(), page.active_tab() == key),
                    )
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    // Re-rendered whenever the active tab changes
    let images = move || {
        page.active_tab()
            .tab()
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                view! {
                    <button
                        type="button"
                        on:click=move |_| page.show_image(index)
                        class=format!(
                            "group relative mb-5 block w-full overflow-hidden rounded-2xl text-left {}",
                            image.size.height_class(),
                        )
                    >
                        <img src=image.src alt=image.name class="absolute inset-0 h-full w-full object-cover"/>
                        <div class="absolute inset-0 bg-black/25 transition group-hover:bg-black/35"></div>
                        <div class="absolute right-3 bottom-3 left-3 text-white">
                            <p class="text-lg font-semibold">{image.name}</p>
                        </div>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <section id=GALLERY_SECTION_ID class="py-[clamp(3.3rem,7vw,6.2rem)]">
            <div class="mx-auto w-[min(1140px,92vw)]">
                <div class="mb-6" data-reveal="">
                    <p class="text-xs tracking-[0.18em]">"GALERIA"</p>
                    <h2 class="mt-2 text-3xl font-semibold">"Galeria de trabajos"</h2>
                </div>
                <div class="mb-6 flex flex-wrap gap-2" data-reveal="">{tab_buttons}</div>
                <div class="columns-1 gap-4 sm:columns-2 lg:columns-3">{images}</div>
            </div>
        </section>
    }
}

/// Full-screen view of the open image of the active tab
#[component]
pub fn GalleryModal() -> impl IntoView {
    let page = use_page_context();

    move || {
        page.open_image()
            .and_then(|index| page.active_tab().tab().images.get(index))
            .map(|image| {
                view! {
                    <div class="fixed inset-0 z-40 bg-black/90 px-4 py-6">
                        <button
                            type="button"
                            on:click=move |_| page.close_image()
                            class="absolute top-4 right-4 z-10 grid h-10 w-10 place-items-center rounded-full bg-black/55 text-lg text-white transition hover:bg-black/75"
                            aria-label="Cerrar imagen"
                        >
                            "x"
                        </button>
                        <div class="grid h-full w-full place-items-center">
                            <img src=image.src alt=image.name class="max-h-full w-full object-contain"/>
                        </div>
                    </div>
                }
            })
    }
}
