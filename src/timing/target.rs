//! The rate-limited callable, safe to re-enter from inside itself.

use std::cell::RefCell;
use std::collections::VecDeque;

type BoxedTarget<A> = Box<dyn FnMut(A)>;

/// Owns a limiter's target.
///
/// The target is moved out of its slot while it runs. A fire requested from
/// inside the running target is queued and runs, in order, as soon as the
/// running invocation returns.
pub(super) struct Target<A> {
    slot: RefCell<Option<BoxedTarget<A>>>,
    deferred: RefCell<VecDeque<A>>,
}

impl<A> Target<A> {
    pub(super) fn new<F>(target: F) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            slot: RefCell::new(Some(Box::new(target))),
            deferred: RefCell::new(VecDeque::new()),
        }
    }

    pub(super) fn fire(&self, args: A) {
        let Some(target) = self.slot.borrow_mut().take() else {
            self.deferred.borrow_mut().push_back(args);
            return;
        };

        // Puts the target back even if it panics.
        let mut running = Running {
            slot: &self.slot,
            target: Some(target),
        };
        let mut next = Some(args);
        while let Some(args) = next {
            if let Some(target) = running.target.as_mut() {
                target(args);
            }
            next = self.deferred.borrow_mut().pop_front();
        }
    }
}

struct Running<'a, A> {
    slot: &'a RefCell<Option<BoxedTarget<A>>>,
    target: Option<BoxedTarget<A>>,
}

impl<A> Drop for Running<'_, A> {
    fn drop(&mut self) {
        *self.slot.borrow_mut() = self.target.take();
    }
}
