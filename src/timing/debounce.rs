//! Quiet-period debounce, firing on either edge of a burst.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::scheduler::{Scheduler, TimerId};
use super::target::Target;

/// Which end of a burst fires the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Fire synchronously on the first call of a burst.
    Leading,
    /// Fire once the burst has been quiet for the wait period.
    #[default]
    Trailing,
}

/// Fires its target once per burst of calls.
///
/// Every call restarts the quiet period. With [`Edge::Trailing`] the target
/// fires `wait` after the last call of a burst, with that call's arguments.
/// With [`Edge::Leading`] it fires immediately on the first call and stays
/// silent until a call arrives after `wait` of quiet.
///
/// Cloning yields another handle to the same debounce.
pub struct Debounce<A: 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    edge: Edge,
    target: Target<A>,
    state: RefCell<State<A>>,
}

struct State<A> {
    timer: Option<TimerId>,
    // Bumped on every reschedule; a fire carrying an older value is stale.
    generation: u64,
    pending: Option<A>,
}

impl<A: 'static> Debounce<A> {
    pub fn new<F>(scheduler: Rc<dyn Scheduler>, wait: Duration, edge: Edge, target: F) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                wait,
                edge,
                target: Target::new(target),
                state: RefCell::new(State {
                    timer: None,
                    generation: 0,
                    pending: None,
                }),
            }),
        }
    }

    pub fn call(&self, args: A) {
        let inner = &self.inner;

        let (previous, generation) = {
            let mut state = inner.state.borrow_mut();
            state.generation += 1;
            (state.timer.take(), state.generation)
        };
        let burst_start = previous.is_none();
        if let Some(id) = previous {
            inner.scheduler.cancel(id);
        }

        let weak: Weak<Inner<A>> = Rc::downgrade(inner);
        let id = inner.scheduler.schedule(
            inner.wait,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.expire(generation);
                }
            }),
        );

        let fire_now = {
            let mut state = inner.state.borrow_mut();
            state.timer = Some(id);
            match inner.edge {
                Edge::Trailing => {
                    state.pending = Some(args);
                    None
                }
                Edge::Leading => burst_start.then_some(args),
            }
        };

        if let Some(args) = fire_now {
            inner.fire(args);
        }
    }

    /// Abort the scheduled fire and drop any pending arguments.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.reset() {
            self.inner.scheduler.cancel(id);
        }
    }

    /// Fire a scheduled trailing call now instead of waiting.
    ///
    /// For [`Edge::Leading`] this only ends the current burst.
    pub fn flush(&self) {
        let pending = {
            let mut state = self.inner.state.borrow_mut();
            let Some(id) = state.timer.take() else {
                return;
            };
            state.generation += 1;
            self.inner.scheduler.cancel(id);
            state.pending.take()
        };

        if let Some(args) = pending {
            self.inner.fire(args);
        }
    }

    /// Whether a fire is scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.state.borrow().timer.is_some()
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    pub fn edge(&self) -> Edge {
        self.inner.edge
    }

    /// Convert into a plain callable.
    pub fn into_fn(self) -> impl Fn(A) {
        move |args| self.call(args)
    }
}

impl<A: 'static> Inner<A> {
    fn expire(&self, generation: u64) {
        let pending = {
            let mut state = self.state.borrow_mut();
            if state.generation != generation {
                return;
            }
            state.timer = None;
            state.pending.take()
        };

        if self.edge == Edge::Trailing
            && let Some(args) = pending
        {
            self.fire(args);
        }
    }

    fn reset(&self) -> Option<TimerId> {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.pending = None;
        state.timer.take()
    }

    fn fire(&self, args: A) {
        self.target.fire(args);
    }
}

impl<A: 'static> Clone for Debounce<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> std::fmt::Debug for Debounce<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.inner.wait)
            .field("edge", &self.inner.edge)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Wrap `target` in a [`Debounce`] with the given quiet period and edge.
pub fn debounce<A, F>(
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    edge: Edge,
    target: F,
) -> Debounce<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounce::new(scheduler, wait, edge, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualScheduler;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn setup(
        wait: u64,
        edge: Edge,
    ) -> (Rc<ManualScheduler>, Debounce<u32>, Rc<RefCell<Vec<(u64, u32)>>>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let calls = Rc::new(RefCell::new(Vec::new()));

        let (clock, sink) = (scheduler.clone(), calls.clone());
        let debounced = Debounce::new(scheduler.clone(), ms(wait), edge, move |n: u32| {
            sink.borrow_mut().push((clock.now().as_millis() as u64, n));
        });
        (scheduler, debounced, calls)
    }

    #[test]
    fn test_default_edge_is_trailing() {
        assert_eq!(Edge::default(), Edge::Trailing);
    }

    #[test]
    fn test_trailing_fires_after_quiet_period() {
        let (scheduler, debounced, calls) = setup(50, Edge::Trailing);

        debounced.call(1);
        assert!(calls.borrow().is_empty());
        assert!(debounced.is_pending());

        scheduler.advance(ms(49));
        assert!(calls.borrow().is_empty());
        scheduler.advance(ms(1));
        assert_eq!(*calls.borrow(), vec![(50, 1)]);
        assert!(!debounced.is_pending());
    }

    #[test]
    fn test_each_call_restarts_quiet_period() {
        let (scheduler, debounced, calls) = setup(50, Edge::Trailing);

        for n in 0..10 {
            debounced.call(n);
            scheduler.advance(ms(40));
        }
        assert!(calls.borrow().is_empty());
        // Only the latest timer is outstanding
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(ms(10));
        assert_eq!(*calls.borrow(), vec![(410, 9)]);
    }

    #[test]
    fn test_leading_fires_once_per_burst() {
        let (scheduler, debounced, calls) = setup(50, Edge::Leading);

        debounced.call(1);
        assert_eq!(*calls.borrow(), vec![(0, 1)]);
        scheduler.advance(ms(20));
        debounced.call(2);
        scheduler.advance(ms(49));
        debounced.call(3);

        scheduler.advance(ms(50));
        assert_eq!(*calls.borrow(), vec![(0, 1)]);

        // Quiet for the full wait, so this opens a new burst
        debounced.call(4);
        assert_eq!(*calls.borrow(), vec![(0, 1), (119, 4)]);
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let (scheduler, debounced, calls) = setup(50, Edge::Trailing);

        debounced.call(1);
        debounced.cancel();
        assert!(!debounced.is_pending());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(100));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_cancel_starts_new_leading_burst() {
        let (_scheduler, debounced, calls) = setup(50, Edge::Leading);

        debounced.call(1);
        debounced.cancel();
        debounced.call(2);

        assert_eq!(*calls.borrow(), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_flush_fires_trailing_now() {
        let (scheduler, debounced, calls) = setup(50, Edge::Trailing);

        debounced.call(1);
        scheduler.advance(ms(10));
        debounced.call(2);
        debounced.flush();
        assert_eq!(*calls.borrow(), vec![(10, 2)]);

        scheduler.advance(ms(100));
        assert_eq!(calls.borrow().len(), 1);

        // Nothing scheduled, nothing to flush
        debounced.flush();
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_flush_leading_ends_burst() {
        let (_scheduler, debounced, calls) = setup(50, Edge::Leading);

        debounced.call(1);
        debounced.flush();
        assert!(!debounced.is_pending());
        debounced.call(2);

        assert_eq!(*calls.borrow(), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_stale_fire_is_ignored() {
        // Cancel that never removes anything, like a best-effort timer service
        struct LeakyScheduler(ManualScheduler);

        impl Scheduler for LeakyScheduler {
            fn schedule(&self, delay: Duration, callback: crate::timing::TimerCallback) -> TimerId {
                self.0.schedule(delay, callback)
            }

            fn cancel(&self, _id: TimerId) {}
        }

        let scheduler = Rc::new(LeakyScheduler(ManualScheduler::new()));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let debounced = Debounce::new(scheduler.clone(), ms(50), Edge::Trailing, move |n: u32| {
            sink.borrow_mut().push(n);
        });

        debounced.call(1);
        scheduler.0.advance(ms(20));
        debounced.call(2);
        scheduler.0.advance(ms(30));
        // The first timer expired at 50 but was superseded
        assert!(calls.borrow().is_empty());
        assert!(debounced.is_pending());

        scheduler.0.advance(ms(20));
        assert_eq!(*calls.borrow(), vec![2]);
    }

    fn reentrant(
        edge: Edge,
        inside: impl Fn(&Debounce<u32>) + 'static,
    ) -> (Rc<ManualScheduler>, Debounce<u32>, Rc<RefCell<Vec<(u64, u32)>>>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<RefCell<Option<Debounce<u32>>>> = Rc::new(RefCell::new(None));

        let (clock, sink, handle) = (scheduler.clone(), calls.clone(), slot.clone());
        let debounced = Debounce::new(scheduler.clone(), ms(50), edge, move |n: u32| {
            sink.borrow_mut().push((clock.now().as_millis() as u64, n));
            if n == 1 {
                // Take the handle out so the slot is not borrowed across the call
                let again = handle.borrow_mut().take();
                if let Some(again) = again {
                    inside(&again);
                }
            }
        });
        *slot.borrow_mut() = Some(debounced.clone());
        (scheduler, debounced, calls)
    }

    #[test]
    fn test_trailing_target_can_call_and_flush() {
        let (scheduler, debounced, calls) = reentrant(Edge::Trailing, |again| {
            again.call(2);
            again.flush();
        });

        debounced.call(1);
        scheduler.advance(ms(50));
        // The flushed fire runs once the outer invocation returns
        assert_eq!(*calls.borrow(), vec![(50, 1), (50, 2)]);
        assert!(!debounced.is_pending());

        scheduler.advance(ms(100));
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_leading_target_can_cancel_and_call() {
        let (scheduler, debounced, calls) = reentrant(Edge::Leading, |again| {
            again.cancel();
            again.call(2);
        });

        debounced.call(1);
        assert_eq!(*calls.borrow(), vec![(0, 1), (0, 2)]);
        assert!(debounced.is_pending());

        scheduler.advance(ms(50));
        assert!(!debounced.is_pending());
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_dropped_handle_abandons_fire() {
        let (scheduler, debounced, calls) = setup(50, Edge::Trailing);

        debounced.call(1);
        drop(debounced);
        scheduler.advance(ms(50));

        assert!(calls.borrow().is_empty());
    }
}
