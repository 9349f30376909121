use carousel_browser::events::{mounted_element, pointer_target};
use carousel_browser::{
    CarouselConfig, CarouselController, DragListeners, ScrollWatch, SlideId, SlideObserver,
    begin_pointer_gesture, end_pointer_gesture, on_next_frame, resume_scroll_snap,
    set_scroll_left, suspend_scroll_snap,
};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use super::context::{CarouselContext, use_carousel_context};
use crate::refs::{ComposedRef, NodeRef, NodeSlot, use_node_ref};

const CAROUSEL_CSS: Asset = asset!("./carousel.css");

#[derive(Props, Clone, PartialEq)]
pub struct CarouselProps {
    /// Falls back to the default config if missing or invalid.
    #[props(default)]
    pub config: Option<CarouselConfig>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Root of a carousel. Provides [`CarouselContext`] to its parts.
///
/// Keeps the next/previous disabled flags in sync with the slide list's
/// scroll position: once after mount, then on every (debounced) scroll and
/// window resize.
#[component]
pub fn Carousel(props: CarouselProps) -> Element {
    let config = use_hook(|| {
        props
            .config
            .clone()
            .unwrap_or_default()
            .or_default_if_invalid()
    });
    let controller = use_signal(|| CarouselController::<web_sys::Element>::new(config.clone()));
    let slide_list: NodeRef = use_node_ref();
    let ctx = use_context_provider(|| CarouselContext::new(controller, slide_list));

    // Held in signals so they drop (and detach) when the carousel unmounts.
    let mut scroll_watch: Signal<Option<ScrollWatch>> = use_signal(|| None);
    let mut first_check: Signal<Option<Timeout>> = use_signal(|| None);

    use_effect(move || {
        let Some(list) = slide_list.current() else {
            scroll_watch.set(None);
            first_check.set(None);
            return;
        };
        tracing::debug!("carousel slide list mounted, watching scroll");

        scroll_watch.set(Some(ScrollWatch::attach(
            &list,
            config.scroll_debounce(),
            move || ctx.refresh_nav(),
        )));
        first_check.set(Some(Timeout::new(
            config.navigation_update_delay_ms,
            move || on_next_frame(move || ctx.refresh_nav()),
        )));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }
        div {
            class: "carousel",
            ..props.attributes,
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CarouselSlideListProps {
    /// Extra handle that receives the slide list element.
    #[props(default)]
    pub node_ref: Option<NodeRef>,
    #[props(default)]
    pub onmousedown: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onpointerdown: Option<EventHandler<PointerEvent>>,
    #[props(default)]
    pub onpointerup: Option<EventHandler<PointerEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// The scrollable viewport holding the slides.
///
/// Pressing the primary button and dragging scrolls the list with the
/// pointer. Releasing past the drag threshold moves one slide; a shorter
/// drag scrolls back to where it started.
#[component]
pub fn CarouselSlideList(props: CarouselSlideListProps) -> Element {
    let ctx = use_carousel_context("CarouselSlideList");
    let own: NodeRef = use_node_ref();
    let host_ref = props.node_ref;
    let mut drag_listeners: Signal<Option<DragListeners>> = use_signal(|| None);

    use_drop(move || {
        ctx.cancel_drag();
        list_ref(own, ctx, host_ref).assign(None);
    });

    let onmousedown = props.onmousedown;
    let onpointerdown = props.onpointerdown;
    let onpointerup = props.onpointerup;

    rsx! {
        div {
            class: "carousel-slide-list",
            onmounted: move |evt| {
                list_ref(own, ctx, host_ref).assign(mounted_element(&evt));
            },
            onmousedown: move |evt: MouseEvent| {
                if let Some(handler) = &onmousedown {
                    handler.call(evt.clone());
                }
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let Some(list) = own.get() else {
                    return;
                };

                ctx.begin_drag(list.scroll_left(), evt.client_coordinates().x);
                if let Err(e) = suspend_scroll_snap(&list) {
                    tracing::warn!("failed to suspend scroll snapping: {e}");
                }
                let released = list.clone();
                drag_listeners.set(DragListeners::attach(
                    move |e| {
                        if let Some(left) = ctx.drag_to(e.client_x() as f64) {
                            set_scroll_left(&list, left);
                        }
                    },
                    move |e| {
                        if let Err(e) = resume_scroll_snap(&released) {
                            tracing::warn!("failed to resume scroll snapping: {e}");
                        }
                        ctx.end_drag(e.client_x() as f64);
                        drag_listeners.set(None);
                    },
                ));
            },
            onpointerdown: move |evt: PointerEvent| {
                if let Some(handler) = &onpointerdown {
                    handler.call(evt.clone());
                }
                if let Some((target, pointer_id)) = pointer_target(&evt) {
                    if let Err(e) = begin_pointer_gesture(&target, pointer_id) {
                        tracing::warn!("pointer capture failed: {e}");
                    }
                }
            },
            onpointerup: move |evt: PointerEvent| {
                if let Some(handler) = &onpointerup {
                    handler.call(evt.clone());
                }
                if let Some((target, pointer_id)) = pointer_target(&evt) {
                    if let Err(e) = end_pointer_gesture(&target, pointer_id) {
                        tracing::warn!("pointer release failed: {e}");
                    }
                }
            },
            // No mouseup follows a cancelled pointer, so end the drag here.
            onpointercancel: move |evt: PointerEvent| {
                drag_listeners.set(None);
                if let Some(list) = own.get() {
                    if let Err(e) = resume_scroll_snap(&list) {
                        tracing::warn!("failed to resume scroll snapping: {e}");
                    }
                }
                ctx.cancel_drag();
                if let Some((target, pointer_id)) = pointer_target(&evt) {
                    if let Err(e) = end_pointer_gesture(&target, pointer_id) {
                        tracing::warn!("pointer release failed: {e}");
                    }
                }
            },
            ..props.attributes,
            {props.children}
        }
    }
}

/// Every handle that tracks the slide list element.
fn list_ref(
    own: NodeRef,
    ctx: CarouselContext,
    host: Option<NodeRef>,
) -> ComposedRef<web_sys::Element> {
    ComposedRef::new()
        .with(own)
        .with(ctx.slide_list)
        .with_opt(host)
}

#[derive(Props, Clone, PartialEq)]
pub struct CarouselSlideProps {
    /// Not called for the click that ends a drag.
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// One slide. Reports how much of it is visible in the slide list.
#[component]
pub fn CarouselSlide(props: CarouselSlideProps) -> Element {
    let ctx = use_carousel_context("CarouselSlide");
    // Registered on mount rather than during render.
    let mut slide_id = use_hook(|| CopyValue::new(None::<SlideId>));
    use_drop(move || {
        if let Some(id) = slide_id.try_peek().ok().and_then(|id| *id) {
            ctx.unregister_slide(id);
        }
    });

    let mut element: Signal<Option<web_sys::Element>> = use_signal(|| None);
    let mut ratio = use_signal(|| 0.0_f64);
    let mut observer: Signal<Option<SlideObserver>> = use_signal(|| None);

    // Observe against the slide list, so wait for both to be mounted.
    use_effect(move || {
        let Some(slide) = element.read().clone() else {
            return;
        };
        let Some(root) = ctx.slide_list.current() else {
            return;
        };
        let Some(id) = *slide_id.peek() else {
            return;
        };
        let thresholds = ctx.config().visibility_thresholds;
        match SlideObserver::observe(&slide, Some(&root), &thresholds, move |r| {
            ratio.set(r);
            ctx.set_slide_ratio(id, r);
        }) {
            Ok(obs) => observer.set(Some(obs)),
            Err(e) => tracing::warn!("failed to observe slide: {e}"),
        }
    });

    let onclick = props.onclick;

    rsx! {
        div {
            class: "carousel-slide",
            "data-slide-intersection-ratio": "{ratio}",
            onmounted: move |evt| {
                let Some(el) = mounted_element(&evt) else {
                    return;
                };
                let existing = *slide_id.peek();
                let id = match existing {
                    Some(id) => id,
                    None => {
                        let id = ctx.register_slide();
                        slide_id.set(Some(id));
                        id
                    }
                };
                ctx.attach_slide(id, el.clone());
                element.set(Some(el));
            },
            ondragstart: move |evt| evt.prevent_default(),
            onclick: move |evt: MouseEvent| {
                if ctx.take_click_suppression() {
                    evt.prevent_default();
                    evt.stop_propagation();
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..props.attributes,
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CarouselControlProps {
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Scrolls one slide forward. Disabled at the end of the list.
#[component]
pub fn CarouselNext(props: CarouselControlProps) -> Element {
    let ctx = use_carousel_context("CarouselNext");
    control(ctx, Control::Next, props)
}

/// Scrolls one slide back. Disabled at the start of the list.
#[component]
pub fn CarouselPrevious(props: CarouselControlProps) -> Element {
    let ctx = use_carousel_context("CarouselPrevious");
    control(ctx, Control::Prev, props)
}

#[derive(Clone, Copy)]
enum Control {
    Prev,
    Next,
}

fn control(ctx: CarouselContext, which: Control, props: CarouselControlProps) -> Element {
    let disabled = match which {
        Control::Prev => ctx.prev_disabled(),
        Control::Next => ctx.next_disabled(),
    };
    rsx! {
        button {
            r#type: "button",
            disabled,
            onclick: move |_| {
                match which {
                    Control::Prev => ctx.on_prev_click(),
                    Control::Next => ctx.on_next_click(),
                };
            },
            ..props.attributes,
            {props.children}
        }
    }
}
