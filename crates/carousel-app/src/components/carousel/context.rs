//! Carousel context shared from `Carousel` down to its parts.

use carousel_browser::{
    CarouselConfig, CarouselController, CarouselError, Direction, DragTracker, NavState,
    NavigationPlan, ReleaseAction, SlideId, document_order, normalize_ratio, read_extents,
    slide_rect, smooth_scroll_to,
};
use dioxus::prelude::*;
use web_sys::Element;

use crate::refs::NodeRef;

/// State and handlers provided by `Carousel`.
///
/// Copyable: every field is a handle into the owning `Carousel`'s scope, so
/// it dies with that component.
#[derive(Clone, Copy)]
pub struct CarouselContext {
    controller: Signal<CarouselController<Element>>,
    /// Not reactive: pointer moves shouldn't re-render anything.
    drag: CopyValue<DragTracker>,
    pub slide_list: NodeRef,
}

impl CarouselContext {
    pub(crate) fn new(controller: Signal<CarouselController<Element>>, slide_list: NodeRef) -> Self {
        Self {
            controller,
            drag: CopyValue::new(DragTracker::new()),
            slide_list,
        }
    }

    pub fn nav(&self) -> NavState {
        self.controller.read().nav()
    }

    pub fn next_disabled(&self) -> bool {
        self.nav().next_disabled
    }

    pub fn prev_disabled(&self) -> bool {
        self.nav().prev_disabled
    }

    pub fn slide_count(&self) -> usize {
        self.controller.read().slides().len()
    }

    /// Indices of slides at least partly in view.
    pub fn visible_slides(&self) -> Vec<usize> {
        self.controller.read().visible_slides()
    }

    /// First slide in view scanning from the start (`Prev`) or the end
    /// (`Next`).
    pub fn first_visible(&self, direction: Direction) -> Option<usize> {
        self.controller.read().first_visible(direction)
    }

    /// Config snapshot. Doesn't subscribe the caller.
    pub fn config(&self) -> CarouselConfig {
        self.controller.peek().config().clone()
    }

    /// Scroll one slide forward. Returns the slide pitch, or `None` if there
    /// is nowhere to go.
    pub fn on_next_click(&self) -> Option<f64> {
        self.navigate(Direction::Next)
    }

    /// Scroll one slide back. Returns the slide pitch, or `None` if there is
    /// nowhere to go.
    pub fn on_prev_click(&self) -> Option<f64> {
        self.navigate(Direction::Prev)
    }

    pub fn navigate(&self, direction: Direction) -> Option<f64> {
        let list = self.slide_list.get()?;
        self.order_slides();
        let plan = self
            .controller
            .peek()
            .plan(direction, |slide| Some(slide_rect(slide)))?;
        self.apply(&list, &plan);
        Some(plan.offset)
    }

    fn apply(&self, list: &Element, plan: &NavigationPlan) {
        smooth_scroll_to(list, plan.scroll_left);
        let mut controller = self.controller;
        controller.write().commit(plan);
    }

    /// Keep slides in document order, so a slide inserted mid-list is
    /// measured in the right place.
    fn order_slides(&self) {
        if self.controller.peek().slides_ordered_by(document_order) {
            return;
        }
        let mut controller = self.controller;
        controller.write().order_slides(document_order);
    }

    /// Re-read the viewport's scroll extents and update the disabled flags.
    pub fn refresh_nav(&self) {
        let Some(list) = self.slide_list.get() else {
            return;
        };
        let extents = read_extents(&list);
        if self.controller.peek().nav() != extents.nav_state() {
            let mut controller = self.controller;
            controller.write().update_extents(extents);
        }
    }

    pub(crate) fn register_slide(&self) -> SlideId {
        let mut controller = self.controller;
        controller.write().register_slide()
    }

    pub(crate) fn attach_slide(&self, id: SlideId, element: Element) {
        let mut controller = self.controller;
        controller.write().attach_slide(id, element);
        self.order_slides();
    }

    pub(crate) fn unregister_slide(&self, id: SlideId) {
        // The carousel may already be gone when its slides are torn down.
        let mut controller = self.controller;
        if let Ok(mut controller) = controller.try_write() {
            controller.unregister_slide(id);
        }
    }

    pub(crate) fn set_slide_ratio(&self, id: SlideId, ratio: f64) {
        if self.controller.peek().slides().ratio(id) == Some(normalize_ratio(ratio)) {
            return;
        }
        let mut controller = self.controller;
        controller.write().set_slide_ratio(id, ratio);
    }

    pub(crate) fn begin_drag(&self, scroll_left: f64, pointer_x: f64) {
        let mut drag = self.drag;
        drag.write().press(scroll_left, pointer_x);
    }

    /// Scroll offset for a pointer move during a drag.
    pub(crate) fn drag_to(&self, pointer_x: f64) -> Option<f64> {
        let mut drag = self.drag;
        drag.write().drag_to(pointer_x)
    }

    /// Resolve a drag: navigate past the threshold, otherwise scroll back
    /// to where it started.
    pub(crate) fn end_drag(&self, pointer_x: f64) {
        let config = self.config();
        let release = {
            let mut drag = self.drag;
            drag.write().release(pointer_x, config.drag_threshold_px, config.click_slop_px)
        };
        let Some(release) = release else {
            return;
        };
        tracing::debug!(
            distance = release.distance,
            outcome = ?release.outcome,
            "carousel drag released"
        );
        let Some(list) = self.slide_list.get() else {
            return;
        };

        self.order_slides();
        let action = self
            .controller
            .peek()
            .plan_release(&release, |slide| Some(slide_rect(slide)));
        match action {
            ReleaseAction::Navigate(plan) => self.apply(&list, &plan),
            ReleaseAction::ScrollTo(left) => smooth_scroll_to(&list, left),
        }
    }

    /// Abandon a drag (pointer cancelled, slide list unmounted) and return
    /// the list to where it started.
    pub(crate) fn cancel_drag(&self) {
        let session = {
            let mut drag = self.drag;
            match drag.try_write() {
                Ok(mut drag) => drag.cancel(),
                Err(_) => return,
            }
        };
        let Some(session) = session else {
            return;
        };
        tracing::debug!("carousel drag cancelled");
        if let Some(list) = self.slide_list.get() {
            smooth_scroll_to(&list, session.scroll_origin);
        }
    }

    /// Consume the "a drag just ended" flag for the click that follows it.
    pub(crate) fn take_click_suppression(&self) -> bool {
        let mut drag = self.drag;
        drag.write().take_click_suppression()
    }
}

/// Look up the enclosing carousel's context.
///
/// # Panics
///
/// If `component` isn't rendered inside a `Carousel`. Falling back to a
/// detached default would silently break every handler below it.
pub fn use_carousel_context(component: &'static str) -> CarouselContext {
    match try_use_context::<CarouselContext>() {
        Some(ctx) => ctx,
        None => panic!("{}", CarouselError::missing_provider(component)),
    }
}
