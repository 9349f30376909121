//! Per-slide visibility observation.

use carousel_core::CarouselError;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom_error;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching one slide.
///
/// Reports the slide's intersection ratio with `root` each time it crosses
/// one of the thresholds. Disconnects when dropped.
pub struct SlideObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl SlideObserver {
    /// Observe `target` relative to `root` (the viewport when `None`).
    pub fn observe(
        target: &Element,
        root: Option<&Element>,
        thresholds: &[f64],
        mut on_ratio: impl FnMut(f64) + 'static,
    ) -> Result<Self, CarouselError> {
        let callback: ObserverCallback =
            Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
                // Only the latest entry matters when several are batched.
                let latest = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = latest {
                    on_ratio(entry.intersection_ratio());
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = observer_init(root, thresholds)?;
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(dom_error)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SlideObserver {
    fn drop(&mut self) {
        tracing::trace!("disconnecting slide observer");
        self.observer.disconnect();
    }
}

impl std::fmt::Debug for SlideObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideObserver").finish_non_exhaustive()
    }
}

fn observer_init(
    root: Option<&Element>,
    thresholds: &[f64],
) -> Result<IntersectionObserverInit, CarouselError> {
    let init = Object::new();
    if let Some(root) = root {
        Reflect::set(&init, &JsValue::from_str("root"), root).map_err(dom_error)?;
    }
    let threshold: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    Reflect::set(&init, &JsValue::from_str("threshold"), &threshold).map_err(dom_error)?;
    Ok(init.unchecked_into())
}
