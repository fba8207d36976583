//! Drag-to-reorder controller for lazy lists.
//!
//! [`ReorderableLazyListState`] consumes a gesture stream (drag start, drag
//! deltas, end/cancel) plus per-frame layout snapshots from the host, and
//! emits `(from, to)` move requests to an injected callback. It never mutates
//! the list itself.
//!
//! State machine: `Idle` -> `Dragging` on a drag-start hit, `Dragging` ->
//! `Dragging` on each delta (possibly emitting a move), `Dragging` -> `Idle`
//! on end/cancel. All events arrive on one sequential execution context; the
//! only asynchronous side effect is the auto-scroll job near viewport edges.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::ReorderableListHost;
use crate::layout_info::LazyListItemInfo;
use crate::scroll_job::ScrollJob;

/// Per-gesture session state.
///
/// The enum makes the session fields all-present or all-absent: there is no
/// half-initialized drag.
enum DragState {
    Idle,
    Dragging {
        /// The item under the finger at drag start, frozen at its pre-drag
        /// geometry.
        initial_item: LazyListItemInfo,
        /// Logical index currently treated as the dragged item; follows the
        /// item across swaps.
        current_index: usize,
        /// Sum of all drag deltas since drag start, along the scroll axis.
        dragged_distance: f32,
    },
}

struct ReorderableInner {
    drag: DragState,
    /// At most one outstanding auto-scroll task.
    overscroll_job: Option<ScrollJob>,
}

/// How a decided move is delivered to the host.
enum MoveDispatch {
    /// Applied synchronously within the current drag event.
    Immediate,
    /// Scheduled via [`ReorderableListHost::post`] together with a scroll
    /// anchor restore.
    AnchorRestoring,
}

/// State object driving drag-to-reorder over a lazy list.
///
/// Clonable handle sharing one inner state, following the framework's
/// state-object pattern. Construct once per list and feed it the host's
/// gesture callbacks:
///
/// ```rust,ignore
/// let state = ReorderableLazyListState::new(host, move |from, to| {
///     let item = items.remove(from);
///     items.insert(to, item);
/// });
///
/// // from the gesture detector:
/// state.on_drag_start(position.y);
/// state.on_drag(drag_amount.y);
/// state.on_drag_interrupted(); // both end and cancel
/// ```
#[derive(Clone)]
pub struct ReorderableLazyListState {
    host: Rc<dyn ReorderableListHost>,
    on_move: Rc<dyn Fn(usize, usize)>,
    inner: Rc<RefCell<ReorderableInner>>,
}

impl ReorderableLazyListState {
    /// Creates a controller bound to `host`, delivering move requests to
    /// `on_move`.
    ///
    /// `on_move(from, to)` must remove the element at `from` and reinsert it
    /// at `to` (a stable move, not a swap-in-place) and then let the host
    /// produce a fresh layout snapshot.
    pub fn new(host: Rc<dyn ReorderableListHost>, on_move: impl Fn(usize, usize) + 'static) -> Self {
        Self {
            host,
            on_move: Rc::new(on_move),
            inner: Rc::new(RefCell::new(ReorderableInner {
                drag: DragState::Idle,
                overscroll_job: None,
            })),
        }
    }

    /// Starts a drag session from the pointer position along the scroll axis.
    ///
    /// Hit-tests the visible items; if the position lands in padding between
    /// or outside items, no session is created and subsequent drag events are
    /// no-ops until the next drag start.
    pub fn on_drag_start(&self, position: f32) {
        let layout = self.host.layout_info();
        let Some(item) = layout.item_at(position).cloned() else {
            log::trace!("drag start at {position}: no item hit");
            return;
        };
        log::debug!(
            "drag start: index {} key {} extent [{}, {}]",
            item.index,
            item.key,
            item.offset,
            item.offset_end()
        );
        let mut inner = self.inner.borrow_mut();
        inner.drag = DragState::Dragging {
            current_index: item.index,
            initial_item: item,
            dragged_distance: 0.0,
        };
    }

    /// Accumulates a drag delta, emitting a move request when the dragged
    /// item has fully passed a neighbor, then updates auto-scroll.
    ///
    /// No-op when no session is active.
    pub fn on_drag(&self, delta: f32) {
        let layout = self.host.layout_info();

        // Decide under the borrow, dispatch with the borrow released: the
        // move callback re-enters the host and may read this state back.
        let decision = {
            let mut inner = self.inner.borrow_mut();
            let DragState::Dragging {
                ref initial_item,
                ref mut current_index,
                ref mut dragged_distance,
            } = inner.drag
            else {
                return;
            };

            *dragged_distance += delta;
            let start_offset = initial_item.offset + *dragged_distance;
            let end_offset = initial_item.offset_end() + *dragged_distance;

            let target = layout.visible_item(*current_index).and_then(|current_item| {
                layout
                    .visible_items_info
                    .iter()
                    // Keep only items overlapping the dragged item's virtual
                    // extent, excluding the dragged item itself.
                    .filter(|item| {
                        !(item.offset_end() < start_offset
                            || item.offset > end_offset
                            || item.index == *current_index)
                    })
                    // Fully-passed threshold: the dragged item must overtake
                    // the whole neighbor, not just its midpoint. Keeps
                    // near-equal-size items from oscillating at the boundary.
                    .find(|item| {
                        if start_offset - current_item.offset > 0.0 {
                            end_offset > item.offset_end()
                        } else {
                            start_offset < item.offset
                        }
                    })
            });

            target.map(|item| {
                let from = *current_index;
                let to = item.index;
                let first_visible = self.host.first_visible_item_index();
                let dispatch = if to == first_visible || from == first_visible {
                    // Moving the anchor item shifts what the viewport anchors
                    // to; move + re-anchor must run as one ordered unit.
                    MoveDispatch::AnchorRestoring
                } else {
                    MoveDispatch::Immediate
                };
                *current_index = to;
                (from, to, dispatch)
            })
        };

        if let Some((from, to, dispatch)) = decision {
            log::debug!("move {from} -> {to}");
            match dispatch {
                MoveDispatch::Immediate => (self.on_move)(from, to),
                MoveDispatch::AnchorRestoring => {
                    let host = Rc::clone(&self.host);
                    let on_move = Rc::clone(&self.on_move);
                    self.host.post(Box::new(move || {
                        let anchor_index = host.first_visible_item_index();
                        let anchor_offset = host.first_visible_item_scroll_offset();
                        on_move(from, to);
                        host.scroll_to_item(anchor_index, anchor_offset);
                    }));
                }
            }
        }

        self.update_overscroll();
    }

    /// Ends the drag session, from either drag end or drag cancel.
    ///
    /// Clears the session and cancels any in-flight auto-scroll. No move is
    /// emitted here; all moves were emitted incrementally during the drag.
    pub fn on_drag_interrupted(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.drag = DragState::Idle;
        if let Some(job) = inner.overscroll_job.take() {
            job.cancel();
        }
    }

    /// Returns the scroll delta needed to keep the dragged item inside the
    /// viewport, or `0.0` when no edge is crossed or no drag is active.
    ///
    /// Positive when the virtual trailing edge overshoots the viewport end
    /// during a net-downward drag; negative when the virtual leading edge
    /// undershoots the viewport start during a net-upward drag.
    pub fn check_for_overscroll(&self) -> f32 {
        let inner = self.inner.borrow();
        let DragState::Dragging {
            ref initial_item,
            dragged_distance,
            ..
        } = inner.drag
        else {
            return 0.0;
        };

        let layout = self.host.layout_info();
        let start_offset = initial_item.offset + dragged_distance;
        let end_offset = initial_item.offset_end() + dragged_distance;

        if dragged_distance > 0.0 {
            let diff = end_offset - layout.viewport_end_offset;
            if diff > 0.0 {
                return diff;
            }
        } else if dragged_distance < 0.0 {
            let diff = start_offset - layout.viewport_start_offset;
            if diff < 0.0 {
                return diff;
            }
        }
        0.0
    }

    /// Pixel offset the renderer applies to the dragged item so it tracks the
    /// finger despite its layout slot having moved across swaps.
    ///
    /// `None` when no drag is active or the dragged index is currently
    /// outside the visible window.
    pub fn item_displacement(&self) -> Option<f32> {
        let inner = self.inner.borrow();
        let DragState::Dragging {
            ref initial_item,
            current_index,
            dragged_distance,
        } = inner.drag
        else {
            return None;
        };

        let layout = self.host.layout_info();
        let item = layout.visible_item(current_index)?;
        Some(initial_item.offset + dragged_distance - item.offset)
    }

    /// Logical index of the item currently being dragged.
    pub fn current_dragged_index(&self) -> Option<usize> {
        match self.inner.borrow().drag {
            DragState::Dragging { current_index, .. } => Some(current_index),
            DragState::Idle => None,
        }
    }

    /// Stable key of the dragged item. Renderers should key their
    /// "is dragging" check off this rather than the index, which changes as
    /// swaps occur.
    pub fn dragged_item_key(&self) -> Option<u64> {
        match self.inner.borrow().drag {
            DragState::Dragging {
                ref initial_item, ..
            } => Some(initial_item.key),
            DragState::Idle => None,
        }
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.inner.borrow().drag, DragState::Dragging { .. })
    }

    /// Launches or retires the auto-scroll job after a drag delta.
    ///
    /// At most one job is outstanding: while the previous one is active,
    /// fresh overscroll is suppressed. Once the drag no longer overscrolls,
    /// the stored job is cancelled.
    fn update_overscroll(&self) {
        {
            let inner = self.inner.borrow();
            if inner
                .overscroll_job
                .as_ref()
                .is_some_and(|job| job.is_active())
            {
                return;
            }
        }

        let overscroll = self.check_for_overscroll();
        if overscroll != 0.0 {
            log::trace!("overscroll by {overscroll}");
            let job = self.host.scroll_by(overscroll);
            self.inner.borrow_mut().overscroll_job = Some(job);
        } else if let Some(job) = self.inner.borrow_mut().overscroll_job.take() {
            job.cancel();
        }
    }
}
