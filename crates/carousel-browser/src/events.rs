//! Dioxus event helpers.
//!
//! Bridges Dioxus event payloads to the `web_sys` types the rest of this
//! crate works with.

use dioxus_core::Event;
use dioxus_html::{MountedData, PointerData};
use dioxus_web::WebEventExt;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// The element behind an `onmounted` event.
pub fn mounted_element(evt: &Event<MountedData>) -> Option<Element> {
    evt.try_as_web_event()
}

/// The element a pointer event was dispatched to, with its pointer id.
pub fn pointer_target(evt: &Event<PointerData>) -> Option<(HtmlElement, i32)> {
    let pointer = evt.try_as_web_event()?;
    let target = pointer.target()?.dyn_into::<HtmlElement>().ok()?;
    Some((target, pointer.pointer_id()))
}
