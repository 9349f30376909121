//! Measurements read from the scroll container and slide elements.

/// Horizontal bounding box of a slide, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideRect {
    pub x: f64,
    pub width: f64,
}

impl SlideRect {
    pub fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }
}

/// Scroll geometry of the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollExtents {
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Total scrollable content width.
    pub scroll_width: f64,
    /// Visible width of the viewport.
    pub client_width: f64,
}

impl ScrollExtents {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Distance left to scroll before reaching the end.
    pub fn remaining(&self) -> f64 {
        self.scroll_width - self.scroll_left - self.client_width
    }

    /// Navigation state implied by these extents.
    pub fn nav_state(&self) -> NavState {
        NavState {
            prev_disabled: self.scroll_left <= 0.0,
            next_disabled: self.remaining() <= 0.0,
        }
    }
}

/// Enabled/disabled state of the previous and next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Default for NavState {
    /// Before the first measurement the list is assumed to sit at its start
    /// with content overflowing.
    fn default() -> Self {
        Self {
            prev_disabled: true,
            next_disabled: false,
        }
    }
}
