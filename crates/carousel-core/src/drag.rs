//! Press-drag-release scrolling.
//!
//! A [`DragSession`] lives from primary-button press to release. While it is
//! active the viewport follows the pointer; on release the total distance
//! decides between navigating and snapping back to where the drag started.

use crate::navigation::Direction;

/// Ephemeral state of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Viewport scroll offset when the button went down.
    pub scroll_origin: f64,
    /// Pointer X when the button went down.
    pub pointer_origin_x: f64,
    /// Largest distance the pointer has been from its origin.
    pub max_travel: f64,
}

impl DragSession {
    pub fn begin(scroll_left: f64, pointer_x: f64) -> Self {
        Self {
            scroll_origin: scroll_left,
            pointer_origin_x: pointer_x,
            max_travel: 0.0,
        }
    }

    /// Signed distance from the press point. Negative means leftward.
    pub fn distance(&self, pointer_x: f64) -> f64 {
        pointer_x - self.pointer_origin_x
    }

    /// Scroll offset that keeps the content under the pointer.
    pub fn scroll_for(&mut self, pointer_x: f64) -> f64 {
        let distance = self.distance(pointer_x);
        self.max_travel = self.max_travel.max(distance.abs());
        self.scroll_origin - distance
    }

    /// Resolve the gesture at `pointer_x`.
    pub fn release(mut self, pointer_x: f64, threshold: f64) -> DragRelease {
        let distance = self.distance(pointer_x);
        self.max_travel = self.max_travel.max(distance.abs());

        let outcome = if distance <= -threshold {
            DragOutcome::Navigate(Direction::Next)
        } else if distance >= threshold {
            DragOutcome::Navigate(Direction::Prev)
        } else {
            DragOutcome::SnapBack {
                scroll_left: self.scroll_origin,
            }
        };

        DragRelease {
            outcome,
            distance,
            max_travel: self.max_travel,
            scroll_origin: self.scroll_origin,
        }
    }
}

/// What a released drag should do to the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Dragged far enough to move one slide.
    Navigate(Direction),
    /// Too short; smoothly scroll back to the pre-drag offset.
    SnapBack { scroll_left: f64 },
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub outcome: DragOutcome,
    pub distance: f64,
    pub max_travel: f64,
    /// Scroll offset the gesture started from.
    pub scroll_origin: f64,
}

/// Tracks the active drag and whether the click that ends it should be
/// swallowed.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
    suppress_click: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture. Clears any click suppression left from an earlier
    /// drag whose click never arrived.
    pub fn press(&mut self, scroll_left: f64, pointer_x: f64) {
        self.session = Some(DragSession::begin(scroll_left, pointer_x));
        self.suppress_click = false;
    }

    /// New scroll offset for a pointer move, or `None` without a gesture.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        self.session
            .as_mut()
            .map(|session| session.scroll_for(pointer_x))
    }

    /// Finish the gesture.
    ///
    /// The following click is suppressed only when the pointer travelled
    /// further than `click_slop`.
    pub fn release(
        &mut self,
        pointer_x: f64,
        threshold: f64,
        click_slop: f64,
    ) -> Option<DragRelease> {
        let session = self.session.take()?;
        let release = session.release(pointer_x, threshold);
        self.suppress_click = release.max_travel > click_slop;
        Some(release)
    }

    /// Abandon the gesture without resolving it, e.g. on `pointercancel`.
    /// The ending click, if one still arrives, is not suppressed.
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.suppress_click = false;
        self.session.take()
    }

    /// Consume the suppression flag. Returns `true` if the click should be
    /// swallowed.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}
