//! Event listener groups that detach on drop.

use std::time::Duration;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::debounce::DebouncedCallback;

/// Document-level `mousemove` / `mouseup` listeners for one drag.
///
/// Listening on the document keeps the drag alive when the pointer leaves
/// the slide list. Dropping the value stops listening.
pub struct DragListeners {
    _move: EventListener,
    _up: EventListener,
}

impl DragListeners {
    /// Returns `None` outside a browser document.
    pub fn attach(
        mut on_move: impl FnMut(&MouseEvent) + 'static,
        mut on_up: impl FnMut(&MouseEvent) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let on_move = EventListener::new(&document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_move(event);
            }
        });
        let on_up = EventListener::new(&document, "mouseup", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_up(event);
            }
        });
        Some(Self {
            _move: on_move,
            _up: on_up,
        })
    }
}

impl std::fmt::Debug for DragListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragListeners").finish_non_exhaustive()
    }
}

/// Subscription to the slide list's `scroll` and the window's `resize`.
///
/// Both events feed one [`DebouncedCallback`], so a burst of scrolling runs
/// the callback once at the start and once after it settles.
pub struct ScrollWatch {
    debounced: DebouncedCallback,
    _scroll: EventListener,
    _resize: Option<EventListener>,
}

impl ScrollWatch {
    pub fn attach(list: &Element, wait: Duration, on_change: impl Fn() + 'static) -> Self {
        let debounced = DebouncedCallback::new(wait, on_change);

        let on_scroll = debounced.clone();
        let scroll = EventListener::new(list, "scroll", move |_| on_scroll.call());

        let resize = web_sys::window().map(|window| {
            let on_resize = debounced.clone();
            EventListener::new(&window, "resize", move |_| on_resize.call())
        });

        Self {
            debounced,
            _scroll: scroll,
            _resize: resize,
        }
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        tracing::trace!("detaching carousel scroll watch");
        self.debounced.cancel();
    }
}

impl std::fmt::Debug for ScrollWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollWatch")
            .field("debounced", &self.debounced)
            .finish_non_exhaustive()
    }
}
