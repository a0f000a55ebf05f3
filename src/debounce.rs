use crate::platform::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;

/// Trailing-edge debounce: every call cancels the one still waiting, so a
/// burst of calls runs only the last task, `wait_ms` after the burst ends.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        // cancelling a timer that already fired is a no-op
        if let Some(prev) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(prev);
        }
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(task));
        *self.pending.borrow_mut() = handle;
    }
}

/// A task shared between a timer callback and its handle.
///
/// The callback runs it at most once. Cancelling drops the task and whatever it
/// captured right away, so the callback can still fire later and find nothing.
#[derive(Clone)]
pub struct TaskSlot(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl TaskSlot {
    pub fn new(task: Box<dyn FnOnce()>) -> Self {
        Self(Rc::new(RefCell::new(Some(task))))
    }

    pub fn run(&self) {
        // released before running so the task may schedule again
        let task = self.0.borrow_mut().take();
        if let Some(task) = task {
            task();
        }
    }

    pub fn cancel(&self) {
        let task = self.0.borrow_mut().take();
        drop(task);
    }
}
