//! Shared UI components.

pub mod carousel;
pub use carousel::{
    Carousel, CarouselContext, CarouselNext, CarouselPrevious, CarouselSlide, CarouselSlideList,
    use_carousel_context,
};
