//! Scroll-snapping carousel built from composable parts.
//!
//! ```rust,ignore
//! rsx! {
//!     Carousel {
//!         CarouselSlideList {
//!             CarouselSlide { "1" }
//!             CarouselSlide { "2" }
//!         }
//!         CarouselPrevious { "PREV" }
//!         CarouselNext { "NEXT" }
//!     }
//! }
//! ```
//!
//! `Carousel` owns the state; every other part must be rendered inside it.

mod component;
mod context;

pub use component::{
    Carousel, CarouselControlProps, CarouselNext, CarouselPrevious, CarouselProps, CarouselSlide,
    CarouselSlideList, CarouselSlideListProps, CarouselSlideProps,
};
pub use context::{CarouselContext, use_carousel_context};
