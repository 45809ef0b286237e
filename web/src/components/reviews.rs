//! Customer reviews and the review detail modal

use leptos::prelude::*;
use shared::content::{Review, REVIEWS};
use shared::utils::{initials, rating_stars};

use crate::state::page::use_page_context;

/// Avatar initials plus author and stars
fn review_author(review: &'static Review) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <span class="grid h-12 w-12 place-items-center rounded-full border border-[#9aa0a6] text-[13px] font-semibold text-[#5f6368]">
                {initials(review.author)}
            </span>
            <div>
                <p class="text-base font-medium text-[#202124]">{review.author}</p>
                <p class="text-[23px] leading-none tracking-[0.12em] text-[#f9ab00]">
                    {rating_stars(review.rating)}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn ReviewsSection() -> impl IntoView {
    let page = use_page_context();

    let cards = REVIEWS
        .iter()
        .enumerate()
        .map(|(index, review)| {
            view! {
                <article
                    data-reveal=""
                    class="rounded-2xl bg-[#f1f3f4] p-5 text-[#202124] shadow-[0_20px_50px_-20px_rgba(0,0,0,0.5)] md:p-6"
                >
                    {review_author(review)}
                    <p class="mt-4 text-sm font-semibold">{review.summary}</p>
                    <p class="mt-2 line-clamp-3 text-sm leading-relaxed">{review.body}</p>
                    <div class="mt-4 flex items-center justify-between text-sm text-[#5f6368]">
                        <span>{review.source}</span>
                        <button
                            type="button"
                            on:click=move |_| page.open_review(index)
                            class="rounded-full border border-[#dadce0] bg-white px-4 py-2 font-medium text-[#1a73e8] transition hover:bg-[#f8f9fa]"
                        >
                            "Leer resena"
                        </button>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="border-y border-white/15 bg-black/25 py-[clamp(3.3rem,7vw,6.2rem)] backdrop-blur-sm">
            <div class="mx-auto w-[min(1140px,92vw)]">
                <div class="mb-6" data-reveal="">
                    <p class="text-xs tracking-[0.18em]">"RESENAS"</p>
                    <h2 class="mt-2 text-3xl font-semibold">"Resenas de Google"</h2>
                </div>
                <div class="grid gap-4 md:grid-cols-2">{cards}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ReviewModal() -> impl IntoView {
    let page = use_page_context();

    move || {
        page.review
            .get()
            .current()
            .and_then(|index| REVIEWS.get(index))
            .map(|review| {
                view! {
                    <div class="fixed inset-0 z-40 grid place-items-center bg-black/65 p-4 backdrop-blur-sm">
                        <div class="w-full max-w-[560px] rounded-2xl bg-[#f1f3f4] p-5 text-[#202124] md:p-6">
                            <div class="mb-3 flex items-center justify-between">
                                <p class="text-xl text-[#5f6368]">{review.source}</p>
                                <button
                                    type="button"
                                    on:click=move |_| page.close_review()
                                    class="grid h-8 w-8 place-items-center rounded-full text-lg text-[#5f6368] transition hover:bg-black/5"
                                    aria-label="Cerrar resena"
                                >
                                    "x"
                                </button>
                            </div>
                            {review_author(review)}
                            <div class="mt-4 rounded-t-md bg-[#e8eaed] px-4 pt-3 pb-6">
                                <p class="text-sm font-semibold">{review.summary}</p>
                                <p class="mt-2 text-sm leading-relaxed">{review.body}</p>
                            </div>
                            <div class="h-[2px] w-full bg-[#1a73e8]"></div>
                            <div class="mt-4 flex justify-end">
                                <button
                                    type="button"
                                    on:click=move |_| page.close_review()
                                    class="rounded-full border border-[#dadce0] bg-white px-4 py-2 text-sm font-medium text-[#1a73e8] transition hover:bg-[#f8f9fa]"
                                >
                                    "Cerrar"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
    }
}
