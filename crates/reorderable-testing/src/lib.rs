//! Deterministic fake lazy-list host for testing the reorder controller.
//!
//! [`TestLazyList`] stands in for a real virtualized list: it lays out a
//! backing key list top-to-bottom, exposes only the items intersecting the
//! viewport as [`LazyListLayoutInfo`], applies `(from, to)` moves, and models
//! the two asynchronous host behaviors the controller depends on:
//!
//! - `scroll_by` jobs can be held open (`hold_scrolls`) so tests can assert
//!   the at-most-one-outstanding-job policy, then finished with
//!   `complete_scrolls`;
//! - `post`ed tasks queue until the test drains them with `run_deferred`,
//!   modeling the "after the current gesture event" scheduling used for
//!   first-visible-item moves.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use reorderable::{LazyListItemInfo, LazyListLayoutInfo, ReorderableListHost, ScrollJob};

struct TestLazyListInner {
    keys: Vec<u64>,
    sizes: Vec<f32>,
    viewport_size: f32,
    scroll_offset: f32,
    deferred: VecDeque<Box<dyn FnOnce()>>,
    pending_scrolls: Vec<(ScrollJob, f32)>,
    hold_scrolls: bool,
    scroll_by_log: Vec<f32>,
}

impl TestLazyListInner {
    fn content_offset_of(&self, index: usize) -> f32 {
        self.sizes[..index.min(self.sizes.len())].iter().sum()
    }

    fn total_size(&self) -> f32 {
        self.sizes.iter().sum()
    }

    fn clamp_scroll(&self, offset: f32) -> f32 {
        let max = (self.total_size() - self.viewport_size).max(0.0);
        offset.clamp(0.0, max)
    }
}

/// Fake host list. Clones share the same backing state.
#[derive(Clone)]
pub struct TestLazyList {
    inner: Rc<RefCell<TestLazyListInner>>,
}

impl TestLazyList {
    /// Creates a list of `item_count` uniform items (keys `0..item_count`).
    pub fn new(item_count: usize, item_size: f32, viewport_size: f32) -> Self {
        Self::with_sizes(vec![item_size; item_count], viewport_size)
    }

    /// Creates a list with one entry per size (keys `0..sizes.len()`).
    pub fn with_sizes(sizes: Vec<f32>, viewport_size: f32) -> Self {
        let keys = (0..sizes.len() as u64).collect();
        Self {
            inner: Rc::new(RefCell::new(TestLazyListInner {
                keys,
                sizes,
                viewport_size,
                scroll_offset: 0.0,
                deferred: VecDeque::new(),
                pending_scrolls: Vec::new(),
                hold_scrolls: false,
                scroll_by_log: Vec::new(),
            })),
        }
    }

    /// Applies a stable remove-then-insert move, the contract the controller
    /// expects from the host's move callback.
    pub fn move_item(&self, from: usize, to: usize) {
        let mut inner = self.inner.borrow_mut();
        if from >= inner.keys.len() || to >= inner.keys.len() {
            return;
        }
        log::debug!("test list move {from} -> {to}");
        let key = inner.keys.remove(from);
        inner.keys.insert(to, key);
        let size = inner.sizes.remove(from);
        inner.sizes.insert(to, size);
    }

    /// Current key order of the backing list.
    pub fn keys(&self) -> Vec<u64> {
        self.inner.borrow().keys.clone()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_offset
    }

    pub fn set_scroll_offset(&self, offset: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_offset = inner.clamp_scroll(offset);
    }

    /// Makes subsequent `scroll_by` calls return jobs that stay active until
    /// [`complete_scrolls`](Self::complete_scrolls). By default scrolls apply
    /// synchronously and come back already completed.
    pub fn hold_scrolls(&self) {
        self.inner.borrow_mut().hold_scrolls = true;
    }

    /// Applies every held scroll that was not cancelled and completes the
    /// jobs. Returns how many jobs were finished.
    pub fn complete_scrolls(&self) -> usize {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            std::mem::take(&mut inner.pending_scrolls)
        };
        let count = pending.len();
        for (job, delta) in pending {
            if !job.is_cancelled() {
                let mut inner = self.inner.borrow_mut();
                inner.scroll_offset = inner.clamp_scroll(inner.scroll_offset + delta);
            }
            job.complete();
        }
        count
    }

    /// Number of held scroll jobs still active.
    pub fn active_scroll_count(&self) -> usize {
        self.inner
            .borrow()
            .pending_scrolls
            .iter()
            .filter(|(job, _)| job.is_active())
            .count()
    }

    /// Every delta `scroll_by` has been asked for, in call order.
    pub fn scroll_by_log(&self) -> Vec<f32> {
        self.inner.borrow().scroll_by_log.clone()
    }

    /// Number of tasks waiting in the deferred queue.
    pub fn deferred_count(&self) -> usize {
        self.inner.borrow().deferred.len()
    }

    /// Runs queued deferred tasks in FIFO order. Returns how many ran.
    pub fn run_deferred(&self) -> usize {
        let mut ran = 0;
        loop {
            // Pop outside the call: the task re-enters this host.
            let task = self.inner.borrow_mut().deferred.pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }
}

impl ReorderableListHost for TestLazyList {
    fn layout_info(&self) -> LazyListLayoutInfo {
        let inner = self.inner.borrow();
        let viewport_end = inner.viewport_size;
        let mut info = LazyListLayoutInfo {
            visible_items_info: Default::default(),
            total_items_count: inner.keys.len(),
            viewport_start_offset: 0.0,
            viewport_end_offset: viewport_end,
        };
        let mut content_offset = 0.0;
        for (index, (&key, &size)) in inner.keys.iter().zip(&inner.sizes).enumerate() {
            let offset = content_offset - inner.scroll_offset;
            if offset >= viewport_end {
                break;
            }
            if offset + size > 0.0 {
                info.visible_items_info.push(LazyListItemInfo {
                    index,
                    key,
                    offset,
                    size,
                });
            }
            content_offset += size;
        }
        info
    }

    fn first_visible_item_index(&self) -> usize {
        self.layout_info()
            .visible_items_info
            .first()
            .map_or(0, |item| item.index)
    }

    fn first_visible_item_scroll_offset(&self) -> f32 {
        self.layout_info()
            .visible_items_info
            .first()
            .map_or(0.0, |item| -item.offset)
    }

    fn scroll_to_item(&self, index: usize, scroll_offset: f32) {
        let mut inner = self.inner.borrow_mut();
        let target = inner.content_offset_of(index) + scroll_offset;
        inner.scroll_offset = inner.clamp_scroll(target);
    }

    fn scroll_by(&self, delta: f32) -> ScrollJob {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_by_log.push(delta);
        if inner.hold_scrolls {
            let job = ScrollJob::new();
            inner.pending_scrolls.push((job.clone(), delta));
            job
        } else {
            inner.scroll_offset = inner.clamp_scroll(inner.scroll_offset + delta);
            ScrollJob::completed()
        }
    }

    fn post(&self, task: Box<dyn FnOnce()>) {
        self.inner.borrow_mut().deferred.push_back(task);
    }
}
