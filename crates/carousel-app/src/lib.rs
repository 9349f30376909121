//! Dioxus carousel components.
//!
//! A [`Carousel`] wraps a horizontally scrolling [`CarouselSlideList`] of
//! [`CarouselSlide`]s plus [`CarouselNext`] / [`CarouselPrevious`] buttons.
//! Geometry and gesture logic live in `carousel-core`; browser plumbing in
//! `carousel-browser`. This crate wires them to Dioxus signals and events.

pub mod components;
pub mod refs;

pub use carousel_browser::{CarouselConfig, CarouselError, Direction, NavState};
pub use components::{
    Carousel, CarouselContext, CarouselNext, CarouselPrevious, CarouselSlide, CarouselSlideList,
    use_carousel_context,
};
pub use refs::{ComposedRef, NodeRef, NodeSlot, use_node_ref};
