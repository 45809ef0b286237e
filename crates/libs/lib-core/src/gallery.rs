//! Gallery tab and modal state

use shared::content::GalleryTabKey;

/// Active gallery tab plus the image open in the full-screen viewer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    active_tab: GalleryTabKey,
    open_image: Option<usize>,
}

impl GalleryState {
    pub fn active_tab(&self) -> GalleryTabKey {
        self.active_tab
    }

    pub fn open_image(&self) -> Option<usize> {
        self.open_image
    }

    /// Switch tabs. An open image belongs to the old tab, so it is closed.
    pub fn select_tab(&mut self, key: GalleryTabKey) {
        if self.active_tab != key {
            self.open_image = None;
        }
        self.active_tab = key;
    }

    /// Open image `index` of the active tab; out-of-range indices are ignored.
    pub fn show_image(&mut self, index: usize) {
        if index < self.active_tab.tab().images.len() {
            self.open_image = Some(index);
        }
    }

    pub fn close_image(&mut self) {
        self.open_image = None;
    }
}

/// Gallery tab a product card links to
pub fn product_tab(product_index: usize) -> GalleryTabKey {
    match product_index {
        1 => GalleryTabKey::Plantas,
        2 => GalleryTabKey::Cesped,
        _ => GalleryTabKey::Jardines,
    }
}

/// Optional index into a list of `len` items, used by the review and info modals
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalSlot {
    len: usize,
    current: Option<usize>,
}

impl ModalSlot {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Open item `index`; out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.current = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::REVIEWS;

    #[test]
    fn test_defaults_to_first_tab_closed() {
        let gallery = GalleryState::default();
        assert_eq!(gallery.active_tab(), GalleryTabKey::Jardines);
        assert_eq!(gallery.open_image(), None);
    }

    #[test]
    fn test_switching_tab_closes_viewer() {
        let mut gallery = GalleryState::default();
        gallery.show_image(8);
        assert_eq!(gallery.open_image(), Some(8));

        gallery.select_tab(GalleryTabKey::Plantas);
        assert_eq!(gallery.open_image(), None);
        // Plantas only has four images
        gallery.show_image(8);
        assert_eq!(gallery.open_image(), None);
        gallery.show_image(3);
        assert_eq!(gallery.open_image(), Some(3));
    }

    #[test]
    fn test_reselecting_same_tab_keeps_viewer() {
        let mut gallery = GalleryState::default();
        gallery.show_image(1);
        gallery.select_tab(GalleryTabKey::Jardines);
        assert_eq!(gallery.open_image(), Some(1));
        gallery.close_image();
        assert_eq!(gallery.open_image(), None);
    }

    #[test]
    fn test_product_tabs() {
        assert_eq!(product_tab(0), GalleryTabKey::Jardines);
        assert_eq!(product_tab(1), GalleryTabKey::Plantas);
        assert_eq!(product_tab(2), GalleryTabKey::Cesped);
        assert_eq!(product_tab(7), GalleryTabKey::Jardines);
    }

    #[test]
    fn test_modal_slot_bounds() {
        let mut reviews = ModalSlot::new(REVIEWS.len());
        assert!(!reviews.is_open());
        reviews.open(REVIEWS.len());
        assert_eq!(reviews.current(), None);
        reviews.open(2);
        assert_eq!(reviews.current(), Some(2));
        reviews.close();
        assert!(!reviews.is_open());
    }
}
