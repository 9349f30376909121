//! Carousel state shared between the root component and its parts.

use std::cmp::Ordering;

use crate::config::CarouselConfig;
use crate::drag::{DragOutcome, DragRelease};
use crate::geometry::{NavState, ScrollExtents, SlideRect};
use crate::navigation::{Direction, NavigationPlan};
use crate::visibility::{SlideId, VisibilityRegistry};

/// What to do with the viewport once a drag is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseAction {
    /// Scroll to `plan.scroll_left` and commit the plan.
    Navigate(NavigationPlan),
    /// Smoothly scroll to this offset; position is unchanged.
    ScrollTo(f64),
}

/// Position, navigation state and slides of one carousel.
///
/// `H` is the platform's element handle; the controller never touches it
/// except through the `measure` callbacks passed to navigation.
#[derive(Debug, Clone)]
pub struct CarouselController<H> {
    position: usize,
    nav: NavState,
    slides: VisibilityRegistry<H>,
    config: CarouselConfig,
}

impl<H> Default for CarouselController<H> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl<H> CarouselController<H> {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            position: 0,
            nav: NavState::default(),
            slides: VisibilityRegistry::new(),
            config,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slides(&self) -> &VisibilityRegistry<H> {
        &self.slides
    }

    pub fn register_slide(&mut self) -> SlideId {
        self.slides.register()
    }

    pub fn attach_slide(&mut self, id: SlideId, handle: H) -> bool {
        self.slides.attach(id, handle)
    }

    /// Remove a slide, keeping `position` inside the remaining slides.
    pub fn unregister_slide(&mut self, id: SlideId) -> Option<H> {
        let handle = self.slides.unregister(id);
        self.position = self.position.min(self.slides.len().saturating_sub(1));
        handle
    }

    pub fn set_slide_ratio(&mut self, id: SlideId, ratio: f64) -> bool {
        self.slides.set_ratio(id, ratio)
    }

    /// Indices of the slides currently (partly) in view.
    pub fn visible_slides(&self) -> Vec<usize> {
        self.slides.visible().collect()
    }

    /// First visible slide scanning from the start (`Prev`) or the end
    /// (`Next`) of the list.
    pub fn first_visible(&self, direction: Direction) -> Option<usize> {
        self.slides.first_visible(direction)
    }

    /// Whether slide order already matches `cmp` over the handles.
    pub fn slides_ordered_by(&self, cmp: impl FnMut(&H, &H) -> Ordering) -> bool {
        self.slides.is_ordered_by(cmp)
    }

    /// Re-order slides to match their handles' order, e.g. document order.
    pub fn order_slides(&mut self, cmp: impl FnMut(&H, &H) -> Ordering) -> bool {
        let moved = self.slides.order_by(cmp);
        if moved {
            tracing::debug!(slides = self.slides.len(), "carousel slides re-ordered");
        }
        moved
    }

    /// Work out a step in `direction` without applying it.
    ///
    /// Returns `None` when there is no neighbour, or when either slide can't
    /// be measured (not mounted yet).
    pub fn plan(
        &self,
        direction: Direction,
        mut measure: impl FnMut(&H) -> Option<SlideRect>,
    ) -> Option<NavigationPlan> {
        let to = direction.neighbor(self.position, self.slides.len())?;
        let current = measure(self.slides.handle(self.position)?)?;
        let neighbor = measure(self.slides.handle(to)?)?;
        Some(NavigationPlan::new(
            direction,
            self.position,
            to,
            current,
            neighbor,
        ))
    }

    pub fn commit(&mut self, plan: &NavigationPlan) {
        tracing::debug!(
            from = plan.from,
            to = plan.to,
            offset = plan.offset,
            scroll_left = plan.scroll_left,
            "carousel navigate"
        );
        self.position = plan.to;
    }

    /// Plan and apply a step. The caller scrolls the viewport to
    /// `plan.scroll_left`.
    pub fn navigate(
        &mut self,
        direction: Direction,
        measure: impl FnMut(&H) -> Option<SlideRect>,
    ) -> Option<NavigationPlan> {
        let plan = self.plan(direction, measure)?;
        self.commit(&plan);
        Some(plan)
    }

    /// Decide what a released drag does.
    ///
    /// A drag past the threshold navigates one slide; if there's no slide
    /// that way the viewport returns to where the drag started, as does a
    /// drag short of the threshold.
    pub fn plan_release(
        &self,
        release: &DragRelease,
        measure: impl FnMut(&H) -> Option<SlideRect>,
    ) -> ReleaseAction {
        match release.outcome {
            DragOutcome::Navigate(direction) => match self.plan(direction, measure) {
                Some(plan) => ReleaseAction::Navigate(plan),
                None => ReleaseAction::ScrollTo(release.scroll_origin),
            },
            DragOutcome::SnapBack { scroll_left } => ReleaseAction::ScrollTo(scroll_left),
        }
    }

    /// Recompute disabled flags from the viewport. Returns `true` on change.
    pub fn update_extents(&mut self, extents: ScrollExtents) -> bool {
        let nav = extents.nav_state();
        if nav == self.nav {
            return false;
        }
        tracing::debug!(
            prev_disabled = nav.prev_disabled,
            next_disabled = nav.next_disabled,
            "carousel nav state changed"
        );
        self.nav = nav;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragTracker;

    const PITCH: f64 = 220.0;
    const SLIDE_WIDTH: f64 = 200.0;
    const VIEWPORT: f64 = 440.0;

    /// A fake viewport: slides laid out at `index * PITCH`, scrolled by
    /// `scroll_left`. Handles are slide indices.
    struct Viewport {
        scroll_left: f64,
        slides: usize,
    }

    impl Viewport {
        fn measure(&self, index: &usize) -> Option<SlideRect> {
            Some(SlideRect::new(
                *index as f64 * PITCH - self.scroll_left,
                SLIDE_WIDTH,
            ))
        }

        fn extents(&self) -> ScrollExtents {
            let content = self.slides as f64 * PITCH - (PITCH - SLIDE_WIDTH);
            ScrollExtents::new(self.scroll_left, content, VIEWPORT)
        }

        /// Smooth scrolling settles clamped to the scrollable range.
        fn scroll_to(&mut self, left: f64) {
            let max = (self.extents().scroll_width - VIEWPORT).max(0.0);
            self.scroll_left = left.clamp(0.0, max);
        }
    }

    fn carousel(n: usize) -> (CarouselController<usize>, Viewport) {
        let mut controller = CarouselController::default();
        for i in 0..n {
            let id = controller.register_slide();
            controller.attach_slide(id, i);
        }
        (
            controller,
            Viewport {
                scroll_left: 0.0,
                slides: n,
            },
        )
    }

    fn step(
        controller: &mut CarouselController<usize>,
        viewport: &mut Viewport,
        direction: Direction,
    ) -> Option<f64> {
        let plan = controller.navigate(direction, |h| viewport.measure(h))?;
        viewport.scroll_to(plan.scroll_left);
        controller.update_extents(viewport.extents());
        Some(plan.offset)
    }

    #[test]
    fn test_next_then_prev_returns_to_start() {
        for n in 1..=5 {
            let (mut controller, mut viewport) = carousel(6);
            for _ in 0..n {
                assert_eq!(
                    step(&mut controller, &mut viewport, Direction::Next),
                    Some(PITCH)
                );
            }
            assert_eq!(controller.position(), n);
            for _ in 0..n {
                assert_eq!(
                    step(&mut controller, &mut viewport, Direction::Prev),
                    Some(PITCH)
                );
            }
            assert_eq!(controller.position(), 0);
        }
    }

    #[test]
    fn test_six_slides_disabled_flags() {
        let (mut controller, mut viewport) = carousel(6);
        assert_eq!(controller.nav(), NavState::default());
        controller.update_extents(viewport.extents());
        assert!(controller.nav().prev_disabled);
        assert!(!controller.nav().next_disabled);

        while step(&mut controller, &mut viewport, Direction::Next).is_some() {}

        assert_eq!(controller.position(), 5);
        assert!(controller.nav().next_disabled);
        assert!(!controller.nav().prev_disabled);
    }

    #[test]
    fn test_no_neighbor_is_noop() {
        let (mut controller, mut viewport) = carousel(2);
        assert_eq!(step(&mut controller, &mut viewport, Direction::Prev), None);
        assert_eq!(controller.position(), 0);

        step(&mut controller, &mut viewport, Direction::Next);
        assert_eq!(step(&mut controller, &mut viewport, Direction::Next), None);
        assert_eq!(controller.position(), 1);
    }

    #[test]
    fn test_no_slides_is_noop() {
        let mut controller: CarouselController<usize> = CarouselController::default();
        assert!(controller.navigate(Direction::Next, |_| None).is_none());
        assert_eq!(controller.position(), 0);
    }

    #[test]
    fn test_unmounted_slide_is_noop() {
        let mut controller: CarouselController<usize> = CarouselController::default();
        let a = controller.register_slide();
        controller.register_slide();
        controller.attach_slide(a, 0);
        let plan = controller.navigate(Direction::Next, |_| Some(SlideRect::default()));
        assert!(plan.is_none());
        assert_eq!(controller.position(), 0);
    }

    #[test]
    fn test_unregister_clamps_position() {
        let (mut controller, mut viewport) = carousel(3);
        step(&mut controller, &mut viewport, Direction::Next);
        step(&mut controller, &mut viewport, Direction::Next);
        assert_eq!(controller.position(), 2);

        let last = controller.register_slide();
        controller.unregister_slide(last);
        assert_eq!(controller.position(), 2);

        // Drop the slide at the current position.
        let mut controller: CarouselController<usize> = CarouselController::default();
        let first = controller.register_slide();
        let second = controller.register_slide();
        controller.attach_slide(first, 0);
        controller.attach_slide(second, 1);
        controller.navigate(Direction::Next, |h| viewport.measure(h));
        assert_eq!(controller.position(), 1);
        assert_eq!(controller.unregister_slide(second), Some(1));
        assert_eq!(controller.position(), 0);
    }

    #[test]
    fn test_update_extents_reports_change() {
        let mut controller: CarouselController<usize> = CarouselController::default();
        assert!(!controller.update_extents(ScrollExtents::new(0.0, 1000.0, 400.0)));
        assert!(controller.update_extents(ScrollExtents::new(100.0, 1000.0, 400.0)));
        assert!(!controller.update_extents(ScrollExtents::new(120.0, 1000.0, 400.0)));
    }

    /// Press at `from`, release at `to`, and apply the result to the viewport.
    fn drag(
        controller: &mut CarouselController<usize>,
        viewport: &mut Viewport,
        from: f64,
        to: f64,
    ) -> ReleaseAction {
        let mut tracker = DragTracker::new();
        tracker.press(viewport.scroll_left, from);
        if let Some(left) = tracker.drag_to(to) {
            viewport.scroll_to(left);
        }
        let release = tracker
            .release(to, controller.config().drag_threshold_px, 5.0)
            .expect("drag in progress");
        let action = controller.plan_release(&release, |h| viewport.measure(h));
        match action {
            ReleaseAction::Navigate(plan) => {
                viewport.scroll_to(plan.scroll_left);
                controller.commit(&plan);
            }
            ReleaseAction::ScrollTo(left) => viewport.scroll_to(left),
        }
        action
    }

    #[test]
    fn test_long_drag_navigates_once() {
        let (mut controller, mut viewport) = carousel(6);
        let action = drag(&mut controller, &mut viewport, 500.0, 380.0);
        let ReleaseAction::Navigate(plan) = action else {
            panic!("expected navigation, got {action:?}");
        };
        assert_eq!(plan.direction, Direction::Next);
        assert_eq!((plan.from, plan.to), (0, 1));
        assert_eq!(controller.position(), 1);
        assert_eq!(viewport.scroll_left, PITCH);

        let action = drag(&mut controller, &mut viewport, 300.0, 450.0);
        assert!(matches!(action, ReleaseAction::Navigate(p) if p.direction == Direction::Prev));
        assert_eq!(controller.position(), 0);
        assert_eq!(viewport.scroll_left, 0.0);
    }

    #[test]
    fn test_short_drag_returns_to_origin() {
        let (mut controller, mut viewport) = carousel(6);
        step(&mut controller, &mut viewport, Direction::Next);

        let action = drag(&mut controller, &mut viewport, 500.0, 440.0);
        assert_eq!(action, ReleaseAction::ScrollTo(PITCH));
        assert_eq!(controller.position(), 1);
        assert_eq!(viewport.scroll_left, PITCH);
    }

    #[test]
    fn test_threshold_drag_without_neighbor_snaps_back() {
        let (mut controller, mut viewport) = carousel(3);
        // Rightward past the threshold at the first slide.
        let action = drag(&mut controller, &mut viewport, 100.0, 300.0);
        assert_eq!(action, ReleaseAction::ScrollTo(0.0));
        assert_eq!(controller.position(), 0);

        step(&mut controller, &mut viewport, Direction::Next);
        step(&mut controller, &mut viewport, Direction::Next);
        let origin = viewport.scroll_left;
        let action = drag(&mut controller, &mut viewport, 400.0, 150.0);
        assert_eq!(action, ReleaseAction::ScrollTo(origin));
        assert_eq!(controller.position(), 2);
    }

    #[test]
    fn test_slide_mounted_out_of_order() {
        // Four slides; the one at document position 1 mounts last.
        let mut controller: CarouselController<usize> = CarouselController::default();
        for pos in [0, 2, 3, 1] {
            let id = controller.register_slide();
            controller.attach_slide(id, pos);
        }
        let mut viewport = Viewport {
            scroll_left: 0.0,
            slides: 4,
        };
        assert!(!controller.slides_ordered_by(Ord::cmp));
        assert!(controller.order_slides(Ord::cmp));

        let plan = controller
            .navigate(Direction::Next, |h| viewport.measure(h))
            .expect("neighbor exists");
        assert_eq!(plan.offset, PITCH);
        assert_eq!(plan.scroll_left, PITCH);
        viewport.scroll_to(plan.scroll_left);
        assert_eq!(controller.slides().handle(controller.position()), Some(&1));
    }

    #[test]
    fn test_first_visible() {
        let mut controller: CarouselController<usize> = CarouselController::default();
        let ids: Vec<_> = (0..4).map(|_| controller.register_slide()).collect();
        controller.set_slide_ratio(ids[1], 0.5);
        controller.set_slide_ratio(ids[2], 1.0);
        assert_eq!(controller.first_visible(Direction::Prev), Some(1));
        assert_eq!(controller.first_visible(Direction::Next), Some(2));
    }

    #[test]
    fn test_visible_slides() {
        let mut controller: CarouselController<usize> = CarouselController::default();
        let ids: Vec<_> = (0..4).map(|_| controller.register_slide()).collect();
        controller.set_slide_ratio(ids[0], 1.0);
        controller.set_slide_ratio(ids[1], 0.5);
        assert_eq!(controller.visible_slides(), vec![0, 1]);
    }
}
