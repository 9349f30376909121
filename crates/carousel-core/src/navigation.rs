//! Next/previous navigation planning.
//!
//! A plan is computed from the bounding boxes of the slide at the current
//! position and its neighbour. The distance between them is the slide pitch
//! (slide width plus gap), and the scroll target is that pitch multiplied by
//! the destination index.

use crate::geometry::SlideRect;

/// Direction of travel through the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Index of the neighbour of `position` in this direction, if any.
    ///
    /// `len` is the number of slides.
    pub fn neighbor(self, position: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Prev => position.checked_sub(1).filter(|&i| i < len),
            Direction::Next => position.checked_add(1).filter(|&i| i < len),
        }
    }
}

/// A computed navigation step, ready to be applied to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationPlan {
    pub direction: Direction,
    /// Position before the step.
    pub from: usize,
    /// Position after the step.
    pub to: usize,
    /// Distance between the two slides' left edges.
    pub offset: f64,
    /// Scroll offset the viewport should smoothly scroll to.
    pub scroll_left: f64,
}

impl NavigationPlan {
    /// Plan a step from `from` to its neighbour.
    ///
    /// `current` and `neighbor` are the measured boxes of the slides at
    /// `from` and `to`.
    pub fn new(
        direction: Direction,
        from: usize,
        to: usize,
        current: SlideRect,
        neighbor: SlideRect,
    ) -> Self {
        let offset = match direction {
            Direction::Next => neighbor.x - current.x,
            Direction::Prev => current.x - neighbor.x,
        };
        Self {
            direction,
            from,
            to,
            offset,
            scroll_left: offset * to as f64,
        }
    }
}
