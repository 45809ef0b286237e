//! Small DOM helpers

use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scroll the element with `id` to the top of the viewport.
///
/// Returns `false` when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(section) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("No section with id '{}' to scroll to", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
