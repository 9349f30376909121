//! WASM browser tests for carousel-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use std::cmp::Ordering;

use carousel_browser::{
    DebouncedCallback, DragListeners, ScrollWatch, SlideObserver, VisibilityRegistry,
    begin_pointer_gesture, document_order, end_pointer_gesture, read_extents, resume_scroll_snap,
    set_scroll_left, slide_rect, smooth_scroll_to, suspend_scroll_snap,
};
use web_sys::{Element, HtmlElement, MouseEvent};

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A 100px viewport over three 100px slides, attached to the body.
fn make_list() -> (Element, Vec<Element>) {
    let doc = document();
    let list = doc.create_element("div").unwrap();
    list.set_attribute(
        "style",
        "width: 100px; height: 50px; overflow-x: auto; display: flex; scrollbar-width: none;",
    )
    .unwrap();
    let slides: Vec<Element> = (0..3)
        .map(|_| {
            let slide = doc.create_element("div").unwrap();
            slide
                .set_attribute("style", "flex: 0 0 100px; height: 50px;")
                .unwrap();
            list.append_child(&slide).unwrap();
            slide
        })
        .collect();
    doc.body().unwrap().append_child(&list).unwrap();
    (list, slides)
}

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

// === Geometry ===

#[wasm_bindgen_test]
fn test_extents_at_start_and_end() {
    let (list, _) = make_list();

    let extents = read_extents(&list);
    assert_eq!(extents.scroll_left, 0.0);
    assert_eq!(extents.scroll_width, 300.0);
    assert_eq!(extents.client_width, 100.0);
    let nav = extents.nav_state();
    assert!(nav.prev_disabled);
    assert!(!nav.next_disabled);

    set_scroll_left(&list, 200.0);
    let nav = read_extents(&list).nav_state();
    assert!(!nav.prev_disabled);
    assert!(nav.next_disabled);

    list.remove();
}

#[wasm_bindgen_test]
fn test_slide_pitch() {
    let (list, slides) = make_list();
    let first = slide_rect(&slides[0]);
    let second = slide_rect(&slides[1]);
    assert_eq!(first.width, 100.0);
    assert_eq!(second.x - first.x, 100.0);
    list.remove();
}

#[wasm_bindgen_test]
async fn test_smooth_scroll_settles_on_target() {
    let (list, _) = make_list();
    smooth_scroll_to(&list, 200.0);
    TimeoutFuture::new(1000).await;
    assert_eq!(read_extents(&list).scroll_left, 200.0);
    list.remove();
}

#[wasm_bindgen_test]
fn test_document_order() {
    let (list, slides) = make_list();
    let inserted = document().create_element("div").unwrap();
    list.insert_before(&inserted, Some(&slides[1])).unwrap();

    assert_eq!(document_order(&slides[0], &inserted), Ordering::Less);
    assert_eq!(document_order(&slides[2], &inserted), Ordering::Greater);
    assert_eq!(document_order(&inserted, &inserted), Ordering::Equal);

    // Registered last, sorted into second place.
    let mut registry = VisibilityRegistry::new();
    for slide in slides.iter().chain([&inserted]) {
        let id = registry.register();
        registry.attach(id, slide.clone());
    }
    assert!(registry.order_by(document_order));
    assert_eq!(registry.handle(1), Some(&inserted));
    assert_eq!(registry.handle(3), Some(&slides[2]));

    list.remove();
}

#[wasm_bindgen_test]
fn test_scroll_snap_suspended_while_dragging() {
    let doc = document();
    let style = doc.create_element("style").unwrap();
    style.set_text_content(Some(
        ".snap-list { scroll-snap-type: x mandatory; } .snap-list > div { scroll-snap-align: start; }",
    ));
    doc.body().unwrap().append_child(&style).unwrap();

    let (list, _) = make_list();
    list.set_class_name("snap-list");
    let el: HtmlElement = list.clone().dyn_into().unwrap();

    suspend_scroll_snap(&list).unwrap();
    assert_eq!(el.style().get_property_value("scroll-snap-type").unwrap(), "none");
    set_scroll_left(&list, 30.0);
    assert_eq!(list.scroll_left(), 30.0);

    resume_scroll_snap(&list).unwrap();
    assert_eq!(el.style().get_property_value("scroll-snap-type").unwrap(), "");

    list.remove();
    style.remove();
}

// === Pointer gestures ===

#[wasm_bindgen_test]
fn test_capture_unknown_pointer_fails() {
    let (list, _) = make_list();
    let el: HtmlElement = list.clone().dyn_into().unwrap();
    assert!(begin_pointer_gesture(&el, 9999).is_err());
    assert!(end_pointer_gesture(&el, 9999).is_ok());
    assert_eq!(
        el.style().get_property_value("user-select").unwrap(),
        ""
    );
    list.remove();
}

// === Debounce ===

#[wasm_bindgen_test]
async fn test_debounce_leading_and_trailing() {
    let (count, callback) = counter();
    let debounced = DebouncedCallback::new(Duration::from_millis(30), callback);

    for _ in 0..5 {
        debounced.call();
    }
    assert_eq!(count.get(), 1);
    assert!(debounced.is_pending());

    TimeoutFuture::new(120).await;
    assert_eq!(count.get(), 2);
    assert!(!debounced.is_pending());
}

#[wasm_bindgen_test]
async fn test_debounce_single_call_has_no_trailing() {
    let (count, callback) = counter();
    let debounced = DebouncedCallback::new(Duration::from_millis(20), callback);
    debounced.call();
    TimeoutFuture::new(80).await;
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn test_debounce_dropped_cancels_trailing() {
    let (count, callback) = counter();
    let debounced = DebouncedCallback::new(Duration::from_millis(20), callback);
    debounced.call();
    debounced.call();
    drop(debounced);
    TimeoutFuture::new(80).await;
    assert_eq!(count.get(), 1);
}

// === Observers and listeners ===

#[wasm_bindgen_test]
async fn test_slide_observer_reports_ratio() {
    let (list, slides) = make_list();
    let ratios = Rc::new(RefCell::new(Vec::new()));
    let sink = ratios.clone();
    let observer = SlideObserver::observe(&slides[0], Some(&list), &[0.0, 0.5, 1.0], move |r| {
        sink.borrow_mut().push(r)
    })
    .unwrap();

    TimeoutFuture::new(100).await;
    assert_eq!(ratios.borrow().last().copied(), Some(1.0));

    drop(observer);
    list.remove();
}

#[wasm_bindgen_test]
async fn test_slide_observer_silent_after_drop() {
    let (list, slides) = make_list();
    let (count, callback) = counter();
    let observer = SlideObserver::observe(&slides[0], Some(&list), &[0.0, 1.0], move |_| callback())
        .unwrap();
    drop(observer);

    set_scroll_left(&list, 100.0);
    TimeoutFuture::new(100).await;
    assert_eq!(count.get(), 0);

    list.remove();
}

#[wasm_bindgen_test]
fn test_drag_listeners_detach_on_drop() {
    let doc = document();
    let (moves, on_move) = counter();
    let (ups, on_up) = counter();
    let listeners =
        DragListeners::attach(move |_: &MouseEvent| on_move(), move |_: &MouseEvent| on_up())
            .unwrap();

    let fire = |kind: &str| {
        let event = MouseEvent::new(kind).unwrap();
        doc.dispatch_event(event.unchecked_ref()).unwrap();
    };
    fire("mousemove");
    fire("mouseup");
    assert_eq!((moves.get(), ups.get()), (1, 1));

    drop(listeners);
    fire("mousemove");
    fire("mouseup");
    assert_eq!((moves.get(), ups.get()), (1, 1));
}

#[wasm_bindgen_test]
async fn test_repeated_mount_and_unmount_leaves_nothing_attached() {
    let (list, slides) = make_list();
    let (count, callback) = counter();
    let callback = Rc::new(callback);

    for _ in 0..5 {
        let on_scroll = callback.clone();
        let on_ratio = callback.clone();
        let watch = ScrollWatch::attach(&list, Duration::from_millis(10), move || on_scroll());
        let observer =
            SlideObserver::observe(&slides[1], Some(&list), &[0.0, 1.0], move |_| on_ratio())
                .unwrap();
        drop(observer);
        drop(watch);
    }

    set_scroll_left(&list, 100.0);
    TimeoutFuture::new(100).await;
    assert_eq!(count.get(), 0);

    list.remove();
}

#[wasm_bindgen_test]
async fn test_scroll_watch_detaches_on_drop() {
    let (list, _) = make_list();
    let (count, callback) = counter();
    let watch = ScrollWatch::attach(&list, Duration::from_millis(20), callback);

    set_scroll_left(&list, 50.0);
    TimeoutFuture::new(80).await;
    let seen = count.get();
    assert!(seen >= 1);

    drop(watch);
    set_scroll_left(&list, 100.0);
    TimeoutFuture::new(80).await;
    assert_eq!(count.get(), seen);

    list.remove();
}
