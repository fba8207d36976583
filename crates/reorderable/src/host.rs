//! Host-side contract for the reorder controller.
//!
//! The controller never owns the list or the viewport. Everything it needs
//! from the surrounding UI toolkit goes through [`ReorderableListHost`],
//! mirroring how `ScrollableState` decouples gesture handling from scroll
//! consumers.

use crate::layout_info::LazyListLayoutInfo;
use crate::scroll_job::ScrollJob;

/// Collaborator interface implemented by the hosting lazy list.
///
/// All methods must be callable synchronously at any point during a drag
/// event. Implementations are expected to be cheap: `layout_info` returns the
/// snapshot of the last layout pass, not a fresh measurement.
pub trait ReorderableListHost {
    /// Latest layout snapshot (visible items, viewport bounds).
    fn layout_info(&self) -> LazyListLayoutInfo;

    /// Index of the first visible item (the scroll anchor).
    fn first_visible_item_index(&self) -> usize;

    /// Scroll offset within the first visible item.
    fn first_visible_item_scroll_offset(&self) -> f32;

    /// Re-anchors the viewport to `(index, scroll_offset)`.
    ///
    /// Used after a move involving the first visible item, where the viewport
    /// anchor would otherwise jump to whichever item landed at the anchor
    /// index.
    fn scroll_to_item(&self, index: usize, scroll_offset: f32);

    /// Starts an asynchronous scroll by `delta` pixels and returns its handle.
    ///
    /// The controller guarantees it will not call this again while a
    /// previously returned job reports `is_active()`.
    fn scroll_by(&self, delta: f32) -> ScrollJob;

    /// Schedules `task` to run after the current gesture event.
    ///
    /// Used to sequence the first-visible-item move together with the anchor
    /// restore as one ordered unit, outside the current swap decision.
    fn post(&self, task: Box<dyn FnOnce()>);
}
