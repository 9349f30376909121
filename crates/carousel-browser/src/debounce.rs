//! Debounced callbacks on browser timers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use carousel_core::{CallAction, Debouncer, TimerAction};
use gloo_timers::callback::Timeout;
use web_time::Instant;

struct Inner {
    debouncer: Debouncer,
    timer: Option<Timeout>,
    callback: Rc<dyn Fn()>,
}

/// A callback rate-limited by the leading + trailing [`Debouncer`] policy.
///
/// Clones share the same timer and state. Dropping the last clone cancels
/// any pending trailing run.
#[derive(Clone)]
pub struct DebouncedCallback {
    inner: Rc<RefCell<Inner>>,
}

impl DebouncedCallback {
    pub fn new(wait: Duration, callback: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                debouncer: Debouncer::new(wait),
                timer: None,
                callback: Rc::new(callback),
            })),
        }
    }

    /// Request a run.
    pub fn call(&self) {
        let leading = {
            let mut inner = self.inner.borrow_mut();
            match inner.debouncer.call(Instant::now()) {
                CallAction::InvokeLeading(wait) => {
                    inner.timer = Some(arm(Rc::downgrade(&self.inner), wait));
                    Some(inner.callback.clone())
                }
                CallAction::Coalesced => None,
            }
        };
        // Run outside the borrow so the callback may call back in.
        if let Some(callback) = leading {
            callback();
        }
    }

    /// Drop any pending trailing run.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.debouncer.cancel();
        inner.timer = None;
    }

    pub fn is_pending(&self) -> bool {
        self.inner.borrow().debouncer.is_armed()
    }
}

impl std::fmt::Debug for DebouncedCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedCallback")
            .field("wait", &self.inner.borrow().debouncer.wait())
            .finish_non_exhaustive()
    }
}

fn arm(inner: Weak<RefCell<Inner>>, wait: Duration) -> Timeout {
    let millis = wait.as_millis().min(u32::MAX as u128) as u32;
    Timeout::new(millis, move || {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let trailing = {
            let mut state = inner.borrow_mut();
            match state.debouncer.timer_fired(Instant::now()) {
                TimerAction::Rearm(remaining) => {
                    state.timer = Some(arm(Rc::downgrade(&inner), remaining));
                    None
                }
                TimerAction::InvokeTrailing => {
                    state.timer = None;
                    Some(state.callback.clone())
                }
                TimerAction::Idle => {
                    state.timer = None;
                    None
                }
            }
        };
        if let Some(callback) = trailing {
            callback();
        }
    })
}
