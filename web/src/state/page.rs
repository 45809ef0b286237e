//! Gallery tab and modal state

use leptos::prelude::*;
use lib_core::gallery::{product_tab, GalleryState, ModalSlot};
use shared::content::{GalleryTabKey, EXTRA_INFO, REVIEWS};

/// Client-side switches of the page: gallery tab/viewer, review and info modals
#[derive(Clone, Copy)]
pub struct PageContext {
    pub gallery: RwSignal<GalleryState>,
    pub review: RwSignal<ModalSlot>,
    pub info: RwSignal<ModalSlot>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            gallery: RwSignal::new(GalleryState::default()),
            review: RwSignal::new(ModalSlot::new(REVIEWS.len())),
            info: RwSignal::new(ModalSlot::new(EXTRA_INFO.len())),
        }
    }

    pub fn active_tab(&self) -> GalleryTabKey {
        self.gallery.with(|gallery| gallery.active_tab())
    }

    pub fn select_tab(&self, key: GalleryTabKey) {
        self.gallery.update(|gallery| gallery.select_tab(key));
    }

    /// Product card click: jump to that product's gallery tab
    pub fn select_product(&self, product_index: usize) {
        self.select_tab(product_tab(product_index));
    }

    pub fn open_image(&self) -> Option<usize> {
        self.gallery.with(|gallery| gallery.open_image())
    }

    pub fn show_image(&self, index: usize) {
        self.gallery.update(|gallery| gallery.show_image(index));
    }

    pub fn close_image(&self) {
        self.gallery.update(|gallery| gallery.close_image());
    }

    pub fn open_review(&self, index: usize) {
        self.review.update(|slot| slot.open(index));
    }

    pub fn close_review(&self) {
        self.review.update(|slot| slot.close());
    }

    pub fn open_info(&self, index: usize) {
        self.info.update(|slot| slot.open(index));
    }

    pub fn close_info(&self) {
        self.info.update(|slot| slot.close());
    }
}

pub fn provide_page_context() -> PageContext {
    let context = PageContext::new();
    provide_context(context);
    context
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
