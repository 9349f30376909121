//! Pointer capture for drag gestures.
//!
//! While a drag is in progress the pressed element captures the pointer and
//! text selection is switched off, so dragging across slide text doesn't
//! select it.

use carousel_core::CarouselError;
use web_sys::HtmlElement;

use crate::dom_error;

/// Capture `pointer_id` on `target` and suppress text selection.
pub fn begin_pointer_gesture(target: &HtmlElement, pointer_id: i32) -> Result<(), CarouselError> {
    target
        .style()
        .set_property("user-select", "none")
        .map_err(dom_error)?;
    target.set_pointer_capture(pointer_id).map_err(dom_error)
}

/// Undo [`begin_pointer_gesture`].
///
/// Selection is restored even if releasing the capture fails.
pub fn end_pointer_gesture(target: &HtmlElement, pointer_id: i32) -> Result<(), CarouselError> {
    let restored = target
        .style()
        .remove_property("user-select")
        .map(|_| ())
        .map_err(dom_error);
    if target.has_pointer_capture(pointer_id) {
        target.release_pointer_capture(pointer_id).map_err(dom_error)?;
    }
    restored
}
