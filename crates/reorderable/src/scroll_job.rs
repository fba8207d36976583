//! Cancellable handle for an in-flight scroll task.
//!
//! Auto-scroll during a drag is an asynchronous, possibly multi-frame
//! operation owned by the host. The controller only needs two things from it:
//! "is one still running" (to avoid launching a second) and "stop it"
//! (on drag interruption). [`ScrollJob`] is that handle, independent of any
//! particular runtime.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct ScrollJobState {
    active: Cell<bool>,
    cancelled: Cell<bool>,
}

/// Handle to one asynchronous scroll task.
///
/// Clones share the same underlying state, so the host keeps one clone to
/// drive the scroll and the controller keeps another to observe/cancel it.
/// `cancel` and `complete` are idempotent.
#[derive(Clone, Debug)]
pub struct ScrollJob {
    state: Rc<ScrollJobState>,
}

impl ScrollJob {
    /// Creates a handle for a task that is now running.
    pub fn new() -> Self {
        Self {
            state: Rc::new(ScrollJobState {
                active: Cell::new(true),
                cancelled: Cell::new(false),
            }),
        }
    }

    /// Creates an already-finished handle, for hosts that apply the scroll
    /// synchronously.
    pub fn completed() -> Self {
        let job = Self::new();
        job.complete();
        job
    }

    /// Whether the task is still running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }

    /// Whether the task was cancelled before completing.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }

    /// Requests cooperative cancellation. The host checks `is_cancelled`
    /// before issuing further scroll deltas; no partial-scroll rollback.
    pub fn cancel(&self) {
        if self.state.active.get() {
            self.state.cancelled.set(true);
            self.state.active.set(false);
        }
    }

    /// Marks the task as finished. Called by the host when the scroll has
    /// fully applied.
    pub fn complete(&self) {
        self.state.active.set(false);
    }
}

impl Default for ScrollJob {
    fn default() -> Self {
        Self::new()
    }
}
