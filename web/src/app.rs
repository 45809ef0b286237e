//! Nuevos Espacios landing page - Leptos frontend

use leptos::prelude::*;
use lib_core::PresentationConfig;

use crate::components::{
    BenefitsSection, ClientsSection, ContactSection, GalleryModal, GallerySection, Hero,
    InfoModal, ProductsSection, ReviewModal, ReviewsSection, SiteHeader,
};
use crate::services::viewport::{observe_reveal_targets, RevealHandle};
use crate::state::page::provide_page_context;
use crate::state::theme::provide_theme_context;
use crate::utils::palette;

#[component]
pub fn App(config: PresentationConfig) -> impl IntoView {
    let theme = provide_theme_context(&config);
    provide_page_context();
    provide_context(config.clone());

    // Reveal-on-view starts once the sections are in the DOM
    let reveal = StoredValue::new_local(None::<RevealHandle>);
    Effect::new(move |_| {
        if reveal.with_value(Option::is_some) {
            return;
        }
        let handle = observe_reveal_targets(&config);
        log::debug!("Reveal observer active: {}", handle.is_observing());
        reveal.set_value(Some(handle));
    });
    on_cleanup(move || {
        reveal.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.teardown();
            }
        });
    });

    view! {
        <div
            class=move || {
                let fade = if theme.is_ready() { "blur-0 opacity-100" } else { "blur-md opacity-70" };
                format!(
                    "relative min-h-screen overflow-x-clip transition-all duration-1000 {} {}",
                    palette::base_text(theme.mode()),
                    fade,
                )
            }
        >
            <div class="site-backdrop fixed inset-0 -z-30"></div>
            <div class="fixed inset-0 -z-20 bg-black/55"></div>

            <SiteHeader/>

            <main class="mt-8">
                <Hero/>
                <BenefitsSection/>
                <ProductsSection/>
                <ClientsSection/>
                <GallerySection/>
                <ReviewsSection/>
                <ContactSection/>
            </main>

            <GalleryModal/>
            <InfoModal/>
            <ReviewModal/>
        </div>
    }
}
