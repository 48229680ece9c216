//! Single-shot timer capability consumed by the rate limiters.
//!
//! [`BrowserScheduler`] drives real `setTimeout` timers; [`ManualScheduler`]
//! runs a virtual clock that only moves when told to.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use tracing::trace;

/// Callback run once when a timer expires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Handle identifying a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A single-shot timer service.
///
/// Implementations must never run `callback` from inside `schedule`, and
/// must treat cancelling an unknown or already-fired timer as a no-op.
pub trait Scheduler {
    /// Run `callback` once, `delay` from now.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId;

    /// Prevent a scheduled callback from running.
    fn cancel(&self, id: TimerId);
}

// =============================================================================
// Browser Scheduler
// =============================================================================

/// Scheduler backed by the browser's `setTimeout`/`clearTimeout`.
///
/// Delays longer than `u32::MAX` milliseconds saturate.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    timers: Rc<RefCell<HashMap<TimerId, Timeout>>>,
    next_id: Rc<Cell<u64>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timers = Rc::downgrade(&self.timers);
        let timeout = Timeout::new(millis, move || {
            callback();
            // The Timeout owning this closure is still on the stack here, so
            // release it on the next microtask instead of dropping it inline.
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(timers) = timers.upgrade() {
                    timers.borrow_mut().remove(&id);
                }
            });
        });

        trace!(timer = id.0, millis, "browser timer scheduled");
        self.timers.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        // Dropping the Timeout clears it.
        let removed = self.timers.borrow_mut().remove(&id);
        if removed.is_some() {
            trace!(timer = id.0, "browser timer cancelled");
        }
    }
}

impl std::fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

// =============================================================================
// Manual Scheduler
// =============================================================================

/// Deterministic scheduler on a virtual clock.
///
/// Time starts at zero and only moves through [`advance`](Self::advance) or
/// [`advance_to`](Self::advance_to). Due timers fire in due-time order; timers
/// due at the same instant fire in the order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), TimerCallback>,
    due_at: HashMap<TimerId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Move the clock forward by `by`, firing everything that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Move the clock to `target`, firing everything that falls due.
    ///
    /// Callbacks scheduled while advancing fire too, provided they fall due
    /// by `target`. A target in the past leaves the clock where it is.
    pub fn advance_to(&self, target: Duration) {
        while let Some(callback) = self.pop_due(target) {
            callback();
        }

        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
    }

    fn pop_due(&self, target: Duration) -> Option<TimerCallback> {
        let mut state = self.state.borrow_mut();
        let (&(due, id), _) = state.queue.first_key_value()?;
        if due > target {
            return None;
        }

        let callback = state.queue.remove(&(due, id))?;
        state.due_at.remove(&id);
        if due > state.now {
            state.now = due;
        }
        trace!(timer = id.0, due_ms = due.as_millis() as u64, "manual timer fired");
        Some(callback)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;

        let due = state.now + delay;
        state.queue.insert((due, id), callback);
        state.due_at.insert(id, due);
        trace!(timer = id.0, due_ms = due.as_millis() as u64, "manual timer scheduled");
        id
    }

    fn cancel(&self, id: TimerId) {
        let mut state = self.state.borrow_mut();
        if let Some(due) = state.due_at.remove(&id) {
            state.queue.remove(&(due, id));
            trace!(timer = id.0, "manual timer cancelled");
        }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}
