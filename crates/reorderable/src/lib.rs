//! Drag-to-reorder for virtualized (lazy) lists.
//!
//! This crate provides the state object behind a press-and-drag reorder
//! interaction over a lazily laid out scrolling list: hit-testing the dragged
//! item, deciding when it has overtaken a neighbor so the backing list should
//! move it, auto-scrolling near the viewport edges, and computing the visual
//! displacement that keeps the item under the finger.
//!
//! # Architecture
//!
//! Based on Jetpack Compose's reorderable lazy-list pattern:
//! - [`LazyListItemInfo`] / [`LazyListLayoutInfo`] - per-frame layout
//!   snapshot supplied by the host (JC: `LazyListItemInfo`,
//!   `LazyListLayoutInfo`)
//! - [`ReorderableListHost`] - the contract with the hosting list (layout
//!   snapshots, scroll anchor, asynchronous scroll-by)
//! - [`ReorderableLazyListState`] - the controller consuming the gesture
//!   stream and emitting `(from, to)` move requests
//! - [`ScrollJob`] - cancellable handle for the at-most-one in-flight
//!   auto-scroll task
//! - [`FreeDragState`] - standalone bounded 2D drag, for non-list draggable
//!   elements
//!
//! Rendering, gesture recognition (long-press detection, pointer delivery)
//! and list storage stay with the host toolkit; the controller is pure
//! geometry and bookkeeping.
//!
//! # Example
//!
//! ```rust,ignore
//! use reorderable::ReorderableLazyListState;
//!
//! let state = ReorderableLazyListState::new(host.clone(), move |from, to| {
//!     let item = items.borrow_mut().remove(from);
//!     items.borrow_mut().insert(to, item);
//! });
//!
//! // Wire the host's drag gesture detector:
//! //   on_drag_start -> state.on_drag_start(position)
//! //   on_drag       -> state.on_drag(delta)
//! //   on_drag_end / on_drag_cancel -> state.on_drag_interrupted()
//! //
//! // And render the dragged row offset by state.item_displacement().
//! ```

pub mod free_drag;
pub mod host;
pub mod layout_info;
pub mod reorderable_state;
pub mod scroll_job;

pub use free_drag::FreeDragState;
pub use host::ReorderableListHost;
pub use layout_info::{LazyListItemInfo, LazyListLayoutInfo, VisibleItemsVec};
pub use reorderable_state::ReorderableLazyListState;
pub use scroll_job::ScrollJob;
