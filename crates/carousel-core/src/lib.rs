//! carousel-core: carousel logic without framework or DOM dependencies.
//!
//! This crate provides:
//! - `CarouselController<H>` - position, nav state and slides,
//!   generic over the platform's element handle
//! - `NavigationPlan` - next/previous scroll targets from slide geometry
//! - `DragTracker` / `DragSession` - press-drag-release gesture resolution,
//!   turned into a `ReleaseAction` by the controller
//! - `Debouncer` - leading + trailing debounce policy driven by the caller's clock
//! - `VisibilityRegistry` - slides and their intersection ratios
//! - `CarouselConfig` / `CarouselError`

pub mod config;
pub mod controller;
pub mod debounce;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod visibility;

pub use config::CarouselConfig;
pub use controller::{CarouselController, ReleaseAction};
pub use debounce::{CallAction, Debouncer, TimerAction};
pub use drag::{DragOutcome, DragRelease, DragSession, DragTracker};
pub use error::CarouselError;
pub use geometry::{NavState, ScrollExtents, SlideRect};
pub use navigation::{Direction, NavigationPlan};
pub use smol_str::SmolStr;
pub use visibility::{SlideId, VisibilityRegistry, normalize_ratio};
