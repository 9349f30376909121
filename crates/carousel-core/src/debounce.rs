//! Leading + trailing debounce policy.
//!
//! The policy is a small state machine driven by the caller's clock and
//! timer, so it can be tested without a browser. The first call of a burst
//! runs immediately; further calls inside the window push the deadline back
//! and collapse into a single trailing run once the burst goes quiet.
//!
//! ```text
//! calls:   x  x x  x                x
//! runs:    L                T       L
//!          |<- wait ->|  |<-wait->|
//! ```

use std::time::Duration;

use web_time::Instant;

/// What to do with a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallAction {
    /// Run the callback now and arm a timer for the window.
    InvokeLeading(Duration),
    /// A timer is already armed; the call is folded into the trailing run.
    Coalesced,
}

/// What to do when the armed timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Calls arrived during the window; run the callback once.
    InvokeTrailing,
    /// The last call was recent; arm the timer again for the remainder.
    Rearm(Duration),
    /// Nothing happened since the leading run.
    Idle,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    last_call: Option<Instant>,
    armed: bool,
    pending: bool,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_call: None,
            armed: false,
            pending: false,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Whether a timer is expected to be armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Register a call at `now`.
    pub fn call(&mut self, now: Instant) -> CallAction {
        self.last_call = Some(now);
        if self.armed {
            self.pending = true;
            CallAction::Coalesced
        } else {
            self.armed = true;
            CallAction::InvokeLeading(self.wait)
        }
    }

    /// Handle the armed timer firing at `now`.
    pub fn timer_fired(&mut self, now: Instant) -> TimerAction {
        if !self.armed {
            return TimerAction::Idle;
        }
        if let Some(last) = self.last_call {
            let since = now.saturating_duration_since(last);
            if since < self.wait {
                return TimerAction::Rearm(self.wait - since);
            }
        }
        self.armed = false;
        if std::mem::take(&mut self.pending) {
            TimerAction::InvokeTrailing
        } else {
            TimerAction::Idle
        }
    }

    /// Forget any pending trailing run.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.pending = false;
        self.last_call = None;
    }
}
