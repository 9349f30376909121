//! Scroll-container geometry and programmatic scrolling.

use std::cmp::Ordering;

use carousel_core::{CarouselError, ScrollExtents, SlideRect};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

use crate::dom_error;

/// Read the scroll offset, scrollable width and visible width of `list`.
pub fn read_extents(list: &Element) -> ScrollExtents {
    ScrollExtents::new(
        list.scroll_left(),
        list.scroll_width() as f64,
        list.client_width() as f64,
    )
}

/// Bounding box of a slide in viewport coordinates.
pub fn slide_rect(slide: &Element) -> SlideRect {
    let rect = slide.get_bounding_client_rect();
    SlideRect::new(rect.x(), rect.width())
}

/// Animate `list` to horizontal offset `left`.
///
/// Fire-and-forget: the browser runs the animation and there is no
/// completion signal.
pub fn smooth_scroll_to(list: &Element, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    list.scroll_to_with_scroll_to_options(&options);
}

/// Jump `list` to horizontal offset `left` without animation.
pub fn set_scroll_left(list: &Element, left: f64) {
    list.set_scroll_left(left);
}

/// Turn off scroll snapping on `list` while the pointer drives it.
///
/// A snapping container re-snaps after every programmatic scroll, which
/// would pin a drag to the nearest slide edge.
pub fn suspend_scroll_snap(list: &Element) -> Result<(), CarouselError> {
    let Some(list) = list.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    list.style()
        .set_property("scroll-snap-type", "none")
        .map_err(dom_error)
}

/// Undo [`suspend_scroll_snap`]; the stylesheet's snapping applies again.
pub fn resume_scroll_snap(list: &Element) -> Result<(), CarouselError> {
    let Some(list) = list.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    list.style()
        .remove_property("scroll-snap-type")
        .map(|_| ())
        .map_err(dom_error)
}

/// Order two elements by document position.
pub fn document_order(a: &Element, b: &Element) -> Ordering {
    let position = a.compare_document_position(b);
    if position & Node::DOCUMENT_POSITION_FOLLOWING != 0 {
        Ordering::Less
    } else if position & Node::DOCUMENT_POSITION_PRECEDING != 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Run `f` on the next animation frame, after layout has settled.
pub fn on_next_frame(f: impl FnOnce() + 'static) {
    use wasm_bindgen::prelude::*;

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        tracing::warn!("requestAnimationFrame failed: {:?}", e);
    }
}
