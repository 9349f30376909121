//! Browser DOM layer for the carousel.
//!
//! This crate reads geometry from and drives the scroll container, observes
//! slide visibility and wires pointer gestures. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `scroll`: scroll extents, smooth scrolling, slide bounding boxes,
//!   document order, scroll-snap suspension during drags
//! - `observer`: per-slide `IntersectionObserver` that disconnects on drop
//! - `pointer`: pointer capture and text-selection suppression for drags
//! - `listeners`: document drag listeners and the scroll/resize watch
//! - `debounce`: leading + trailing debounced callback on browser timers
//!
//! Everything that holds a browser resource releases it on drop, so a
//! component only has to keep the handle alive for as long as it's mounted.
//!
//! # Re-exports
//!
//! This crate re-exports `carousel-core` for convenience, so consumers only
//! need to depend on `carousel-browser`.

// Re-export core crate
pub use carousel_core;
pub use carousel_core::*;

pub mod debounce;
#[cfg(feature = "dioxus")]
pub mod events;
pub mod listeners;
pub mod observer;
pub mod pointer;
pub mod scroll;

pub use debounce::DebouncedCallback;
pub use listeners::{DragListeners, ScrollWatch};
pub use observer::SlideObserver;
pub use pointer::{begin_pointer_gesture, end_pointer_gesture};
pub use scroll::{
    document_order, on_next_frame, read_extents, resume_scroll_snap, set_scroll_left, slide_rect,
    smooth_scroll_to, suspend_scroll_snap,
};

/// Stringify a `JsValue` error into a [`CarouselError::Dom`].
pub(crate) fn dom_error(err: wasm_bindgen::JsValue) -> CarouselError {
    CarouselError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
