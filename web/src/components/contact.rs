//! Contact details and the WhatsApp hand-off form

use leptos::prelude::*;
use shared::content::CONTACT;

use crate::state::theme::use_theme_context;
use crate::utils::{constants::quote_href, palette};

const FIELD_CLASS: &str =
    "rounded-xl border border-white/20 bg-black/30 px-3 py-2 text-white placeholder:text-white/65";

#[component]
pub fn ContactSection() -> impl IntoView {
    let theme = use_theme_context();
    let email = CONTACT.email.unwrap_or("Consultanos por WhatsApp");

    view! {
        <section class="py-[clamp(3.3rem,7vw,6.2rem)]" data-reveal="">
            <div class="mx-auto w-[min(1140px,92vw)]">
                <div class="mb-6">
                    <p class="text-xs tracking-[0.18em]">"CONTACTO"</p>
                    <h2 class="mt-2 text-3xl font-semibold">"Hablemos de tu proyecto"</h2>
                </div>
                <div class="grid gap-5">
                    <div class="grid gap-4 text-center md:grid-cols-3 md:text-left">
                        <div>
                            <p class="text-sm">"Telefono"</p>
                            <p class="text-lg font-semibold">{CONTACT.phone_display}</p>
                        </div>
                        <div>
                            <p class="text-sm">"Email"</p>
                            <p class="text-lg font-semibold">{email}</p>
                        </div>
                        <div>
                            <p class="text-sm">"Ubicacion"</p>
                            <p class="text-lg font-semibold">{CONTACT.location}</p>
                        </div>
                    </div>
                    // Nothing is submitted; the form only hands off to WhatsApp
                    <form
                        on:submit=|ev| ev.prevent_default()
                        class=move || format!("grid gap-3 rounded-3xl border p-6 md:p-8 {}", palette::glass_panel(theme.mode()))
                    >
                        <h3 class="text-center text-2xl font-semibold">"Recibi asesoramiento personalizado"</h3>
                        <p class="text-center text-sm opacity-80">"Completalo y te respondemos por WhatsApp."</p>
                        <input placeholder="Nombre" class=FIELD_CLASS/>
                        <input placeholder="Telefono" class=FIELD_CLASS/>
                        <textarea placeholder="Contanos que espacio queres transformar" class=format!("min-h-28 {}", FIELD_CLASS)></textarea>
                        <a
                            href=quote_href()
                            target="_blank"
                            rel="noreferrer"
                            class="rounded-full bg-emerald-500 px-4 py-3 text-center text-sm font-semibold text-white transition hover:brightness-110"
                        >
                            "Enviar por WhatsApp"
                        </a>
                    </form>
                </div>
            </div>
        </section>
    }
}
