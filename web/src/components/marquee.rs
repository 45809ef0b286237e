//! Client segments on an endlessly scrolling track

use leptos::html;
use leptos::prelude::*;
use lib_core::marquee::{half_width, Marquee};
use lib_core::PresentationConfig;
use shared::content::CLIENTS;
use shared::utils::{initials, marquee_items};

use crate::services::frames::FrameLoop;
use crate::state::theme::use_theme_context;
use crate::utils::palette;

#[component]
pub fn ClientsSection() -> impl IntoView {
    view! {
        <section class="border-y border-white/15 bg-black/25 py-[clamp(3.3rem,7vw,6.2rem)] backdrop-blur-sm" data-reveal="">
            <div class="mx-auto w-[min(1140px,92vw)]">
                <div class="mb-6">
                    <p class="text-xs tracking-[0.18em]">"CLIENTES"</p>
                    <h2 class="mt-2 text-3xl font-semibold">"Marcas y espacios que confian"</h2>
                </div>
                <ClientMarquee/>
            </div>
        </section>
    }
}

/// Doubled list of client badges translated left every frame
#[component]
fn ClientMarquee() -> impl IntoView {
    let theme = use_theme_context();
    let speed = use_context::<PresentationConfig>()
        .unwrap_or_default()
        .marquee_speed_px_per_sec;
    let track = NodeRef::<html::Div>::new();

    let mut marquee = Marquee::new(speed);
    let frames = FrameLoop::start(move |timestamp| {
        // Frames before mount (or after unmount) leave the clock untouched
        let Some(track) = track.get_untracked() else {
            marquee.on_frame(timestamp, None);
            return;
        };
        let half = half_width(f64::from(track.scroll_width()));
        let state = marquee.on_frame(timestamp, Some(half));
        if let Err(err) = web_sys::HtmlElement::style(&track).set_property("transform", &state.transform()) {
            log::warn!("Failed to move client marquee: {:?}", err);
        }
    });

    // Dropping the loop with the component cancels it as well
    let frames = StoredValue::new_local(frames);
    on_cleanup(move || {
        frames.try_with_value(FrameLoop::stop);
    });

    let badges = marquee_items(CLIENTS)
        .into_iter()
        .map(|client| {
            view! {
                <span class=move || format!(
                    "grid justify-items-center gap-1 rounded-2xl border px-4 py-3 text-center text-sm {}",
                    palette::glass_panel(theme.mode()),
                )>
                    <span class="grid h-9 w-9 place-items-center rounded-full bg-emerald-500/80 text-xs font-semibold text-white">
                        {initials(client)}
                    </span>
                    <span class="whitespace-nowrap">{client}</span>
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-hidden">
            <div node_ref=track class="flex w-max gap-3 will-change-transform">
                {badges}
            </div>
        </div>
    }
}
