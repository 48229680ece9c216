//! Leading-edge throttle with a trailing refresh.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::scheduler::Scheduler;
use super::target::Target;

/// Fires its target at most once per interval.
///
/// The first call fires synchronously and opens a cooling window. Calls made
/// while cooling only replace the pending arguments. When a window closes
/// with arguments pending, the target fires with them and a fresh window
/// opens; a window that closes with nothing pending returns the throttle to
/// idle.
///
/// Cloning yields another handle to the same throttle.
pub struct Throttle<A: 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    interval: Duration,
    target: Target<A>,
    state: RefCell<State<A>>,
}

enum State<A> {
    Idle,
    Cooling { pending: Option<A> },
}

impl<A: 'static> Throttle<A> {
    pub fn new<F>(scheduler: Rc<dyn Scheduler>, interval: Duration, target: F) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                interval,
                target: Target::new(target),
                state: RefCell::new(State::Idle),
            }),
        }
    }

    pub fn call(&self, args: A) {
        {
            let mut state = self.inner.state.borrow_mut();
            if let State::Cooling { pending } = &mut *state {
                *pending = Some(args);
                return;
            }
            *state = State::Cooling { pending: None };
        }

        // Open the window before firing so a re-entrant call is held back.
        Inner::open_window(&self.inner);
        self.inner.fire(args);
    }

    /// Whether a cooling window is currently open.
    pub fn is_cooling(&self) -> bool {
        matches!(*self.inner.state.borrow(), State::Cooling { .. })
    }

    /// Whether a suppressed call is waiting for the window to close.
    pub fn has_pending(&self) -> bool {
        matches!(
            *self.inner.state.borrow(),
            State::Cooling { pending: Some(_) }
        )
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Convert into a plain callable.
    pub fn into_fn(self) -> impl Fn(A) {
        move |args| self.call(args)
    }
}

impl<A: 'static> Inner<A> {
    fn open_window(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        this.scheduler.schedule(
            this.interval,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::close_window(&inner);
                }
            }),
        );
    }

    fn close_window(this: &Rc<Self>) {
        let next = {
            let mut state = this.state.borrow_mut();
            let next = match &mut *state {
                State::Cooling { pending } => pending.take(),
                State::Idle => None,
            };
            if next.is_none() {
                *state = State::Idle;
            }
            next
        };

        if let Some(args) = next {
            Inner::open_window(this);
            this.fire(args);
        }
    }

    fn fire(&self, args: A) {
        self.target.fire(args);
    }
}

impl<A: 'static> Clone for Throttle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> std::fmt::Debug for Throttle<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.inner.interval)
            .field("cooling", &self.is_cooling())
            .field("pending", &self.has_pending())
            .finish()
    }
}

/// Wrap `target` in a [`Throttle`] firing at most once per `interval`.
pub fn throttle<A, F>(scheduler: Rc<dyn Scheduler>, interval: Duration, target: F) -> Throttle<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Throttle::new(scheduler, interval, target)
}
