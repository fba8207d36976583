//! Layout snapshot types for virtualized lists.
//!
//! The host list supplies one [`LazyListLayoutInfo`] per layout pass; the
//! reorder controller only ever reads the latest snapshot, never a history.
//!
//! Design follows Jetpack Compose's `LazyListLayoutInfo`/`LazyListItemInfo`
//! pair: items are described by their main-axis extent only, ordered by index
//! and contiguous within the visible window.

use smallvec::SmallVec;

/// Inline capacity for the visible-items snapshot.
/// A viewport typically shows well under 16 items, so the per-frame snapshot
/// avoids heap allocation in the common case.
pub type VisibleItemsVec = SmallVec<[LazyListItemInfo; 16]>;

/// Information about a single visible item in a lazy list.
///
/// Immutable snapshot produced by the host's layout pass. `offset` is the
/// leading edge along the scroll axis in pixels, relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct LazyListItemInfo {
    /// Index of the item in the data source.
    pub index: usize,

    /// Stable key of the item. Survives reorders, unlike the index.
    pub key: u64,

    /// Offset of the item's leading edge along the scroll axis.
    pub offset: f32,

    /// Size of the item in the main axis.
    pub size: f32,
}

impl LazyListItemInfo {
    /// The item's trailing edge: `offset + size`.
    #[inline]
    pub fn offset_end(&self) -> f32 {
        self.offset + self.size
    }

    /// Whether `position` falls inside the item's main-axis interval.
    #[inline]
    pub fn contains(&self, position: f32) -> bool {
        position >= self.offset && position <= self.offset_end()
    }
}

/// Information about the currently visible items in a lazy list.
///
/// `visible_items_info` is ordered by index and contiguous; the first entry is
/// the first visible item.
#[derive(Clone, Debug, Default)]
pub struct LazyListLayoutInfo {
    /// Information about each visible item.
    pub visible_items_info: VisibleItemsVec,

    /// Total number of items in the list.
    pub total_items_count: usize,

    /// Start offset of the visible scrollable region.
    pub viewport_start_offset: f32,

    /// End offset of the visible scrollable region.
    pub viewport_end_offset: f32,
}

impl LazyListLayoutInfo {
    /// Resolves an absolute item index against the contiguous visible window.
    ///
    /// Returns `None` when the index is outside the window, e.g. after the
    /// dragged item scrolled off screen. Callers treat that as "skip this
    /// event" rather than an error.
    pub fn visible_item(&self, index: usize) -> Option<&LazyListItemInfo> {
        let first = self.visible_items_info.first()?;
        if index < first.index {
            return None;
        }
        self.visible_items_info.get(index - first.index)
    }

    /// Hit-tests `position` against the visible items in order.
    pub fn item_at(&self, position: f32) -> Option<&LazyListItemInfo> {
        self.visible_items_info
            .iter()
            .find(|item| item.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, offset: f32, size: f32) -> LazyListItemInfo {
        LazyListItemInfo {
            index,
            key: index as u64,
            offset,
            size,
        }
    }

    fn layout(items: &[LazyListItemInfo]) -> LazyListLayoutInfo {
        LazyListLayoutInfo {
            visible_items_info: items.iter().cloned().collect(),
            total_items_count: items.len(),
            viewport_start_offset: 0.0,
            viewport_end_offset: 1000.0,
        }
    }

    #[test]
    fn offset_end_and_contains() {
        let it = item(0, 50.0, 50.0);
        assert_eq!(it.offset_end(), 100.0);
        assert!(it.contains(50.0));
        assert!(it.contains(100.0));
        assert!(!it.contains(100.1));
        assert!(!it.contains(49.9));
    }

    #[test]
    fn visible_item_resolves_against_window_start() {
        // Window starts at index 3.
        let items = [item(3, 0.0, 50.0), item(4, 50.0, 50.0), item(5, 100.0, 50.0)];
        let info = layout(&items);
        assert_eq!(info.visible_item(4).unwrap().offset, 50.0);
        assert!(info.visible_item(2).is_none());
        assert!(info.visible_item(6).is_none());
    }

    #[test]
    fn visible_item_on_empty_window() {
        let info = LazyListLayoutInfo::default();
        assert!(info.visible_item(0).is_none());
    }

    #[test]
    fn item_at_picks_first_match() {
        let items = [item(0, 0.0, 50.0), item(1, 50.0, 50.0)];
        let info = layout(&items);
        assert_eq!(info.item_at(30.0).unwrap().index, 0);
        // Shared edge belongs to the earlier item.
        assert_eq!(info.item_at(50.0).unwrap().index, 0);
        assert!(info.item_at(200.0).is_none());
    }
}
