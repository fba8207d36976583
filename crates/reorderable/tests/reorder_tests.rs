//! End-to-end reorder scenarios driving [`ReorderableLazyListState`] against
//! the dynamic fake host from `reorderable-testing`: moves actually mutate the
//! backing list, so every subsequent drag delta sees the post-swap layout.

use std::cell::RefCell;
use std::rc::Rc;

use reorderable::ReorderableLazyListState;
use reorderable_testing::TestLazyList;

/// Wires a controller whose move callback applies the move to `list` and
/// records the emitted `(from, to)` pairs.
fn reorderable(list: &TestLazyList) -> (ReorderableLazyListState, Rc<RefCell<Vec<(usize, usize)>>>) {
    let moves = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&moves);
    let applier = list.clone();
    let state = ReorderableLazyListState::new(
        Rc::new(list.clone()),
        move |from, to| {
            recorded.borrow_mut().push((from, to));
            applier.move_item(from, to);
        },
    );
    (state, moves)
}

#[test]
fn drag_down_emits_each_intermediate_move() {
    // 10 items of height 50, all visible. Drag item 2 down past item 5 with
    // small per-frame deltas; every intermediate index must be visited.
    let list = TestLazyList::new(10, 50.0, 600.0);
    let (state, moves) = reorderable(&list);

    state.on_drag_start(125.0);
    assert_eq!(state.current_dragged_index(), Some(2));

    for _ in 0..31 {
        state.on_drag(5.0); // 155 px total
    }

    assert_eq!(moves.borrow().as_slice(), &[(2, 3), (3, 4), (4, 5)]);
    assert_eq!(state.current_dragged_index(), Some(5));
    assert_eq!(list.keys(), vec![0, 1, 3, 4, 5, 2, 6, 7, 8, 9]);
}

#[test]
fn drag_up_swaps_on_leading_edge_pass() {
    let list = TestLazyList::new(5, 50.0, 600.0);
    let (state, moves) = reorderable(&list);

    state.on_drag_start(125.0); // item 2, extent [100, 150]
    state.on_drag(-55.0); // leading edge at 45, past item 1's leading edge 50

    assert_eq!(moves.borrow().as_slice(), &[(2, 1)]);
    assert_eq!(list.keys(), vec![0, 2, 1, 3, 4]);
    assert_eq!(state.current_dragged_index(), Some(1));
}

#[test]
fn first_item_dragged_down_defers_move() {
    // 5 items of height 50 at offsets 0,50,100,150,200; drag-start at 30
    // selects index 0; a 60 px drag fully passes item 1.
    let list = TestLazyList::new(5, 50.0, 1000.0);
    let (state, moves) = reorderable(&list);

    state.on_drag_start(30.0);
    assert_eq!(state.current_dragged_index(), Some(0));

    state.on_drag(60.0);

    // Index 0 is the first visible item, so the move and the anchor restore
    // run as one deferred unit, not inside the drag event.
    assert!(moves.borrow().is_empty());
    assert_eq!(list.deferred_count(), 1);
    assert_eq!(state.current_dragged_index(), Some(1));

    list.run_deferred();
    assert_eq!(moves.borrow().as_slice(), &[(0, 1)]);
    assert_eq!(list.keys(), vec![1, 0, 2, 3, 4]);
    assert_eq!(list.scroll_offset(), 0.0);
}

#[test]
fn first_visible_move_restores_scroll_anchor() {
    let list = TestLazyList::new(10, 50.0, 200.0);
    list.set_scroll_offset(25.0);
    let (state, moves) = reorderable(&list);

    // First visible item is index 0, drawn at offset -25.
    state.on_drag_start(10.0);
    assert_eq!(state.current_dragged_index(), Some(0));

    state.on_drag(60.0); // trailing edge 85 passes item 1's trailing edge 75

    assert!(moves.borrow().is_empty());
    list.run_deferred();
    assert_eq!(moves.borrow().as_slice(), &[(0, 1)]);
    // The viewport did not jump: same anchor before and after the move.
    assert_eq!(list.scroll_offset(), 25.0);
}

#[test]
fn displacement_stays_continuous_across_swap() {
    let list = TestLazyList::new(5, 50.0, 600.0);
    let (state, _) = reorderable(&list);

    state.on_drag_start(75.0); // item 1
    let mut previous = state.item_displacement().unwrap();
    for _ in 0..13 {
        state.on_drag(5.0);
        let current = state.item_displacement().unwrap();
        // A swap shifts the dragged item's slot by at most one neighbor's
        // size; the rendered position never jumps further than that.
        assert!(
            (current - previous).abs() <= 50.0 + f32::EPSILON,
            "displacement jumped from {previous} to {current}"
        );
        previous = current;
    }
    assert_eq!(state.current_dragged_index(), Some(2));
}

#[test]
fn single_scroll_job_while_held() {
    let list = TestLazyList::new(20, 50.0, 200.0);
    list.hold_scrolls();
    let (state, _moves) = reorderable(&list);

    state.on_drag_start(175.0); // item 3, extent [150, 200]
    state.on_drag(30.0); // trailing edge 230 overshoots viewport end by 30

    assert_eq!(list.scroll_by_log(), vec![30.0]);
    assert_eq!(list.active_scroll_count(), 1);

    // Further overscrolling deltas must not stack a second job.
    state.on_drag(10.0);
    state.on_drag(5.0);
    assert_eq!(list.scroll_by_log().len(), 1);

    // After the job finishes the next delta may launch a fresh one.
    list.complete_scrolls();
    state.on_drag(5.0);
    assert_eq!(list.scroll_by_log().len(), 2);
}

#[test]
fn interruption_cancels_held_scroll() {
    let list = TestLazyList::new(20, 50.0, 200.0);
    list.hold_scrolls();
    let (state, _) = reorderable(&list);

    state.on_drag_start(175.0);
    state.on_drag(30.0);
    assert_eq!(list.active_scroll_count(), 1);

    state.on_drag_interrupted();
    assert_eq!(list.active_scroll_count(), 0);
    list.complete_scrolls();
    // The cancelled job never moved the viewport.
    assert_eq!(list.scroll_offset(), 0.0);

    // Controller is back to its initial state.
    assert!(!state.is_dragging());
    state.on_drag_start(25.0);
    assert_eq!(state.current_dragged_index(), Some(0));
}

#[test]
fn dragged_item_scrolled_out_of_window() {
    let list = TestLazyList::new(20, 50.0, 200.0);
    let (state, moves) = reorderable(&list);

    state.on_drag_start(25.0); // item 0
    list.set_scroll_offset(300.0); // item 0 leaves the visible window

    // The live layout for the dragged index is gone: swap and displacement
    // are skipped for this event rather than faulting.
    state.on_drag(10.0);
    assert!(moves.borrow().is_empty());
    assert!(state.item_displacement().is_none());
    assert!(state.is_dragging());

    // Scrolling back self-heals on the next event.
    list.set_scroll_offset(0.0);
    assert!(state.item_displacement().is_some());
}

#[test]
fn variable_height_items_swap_on_full_pass() {
    // Drag item 1 (80 tall, extent [30, 110]) downward over the shorter
    // item 2 (extent [110, 150]).
    let list = TestLazyList::with_sizes(vec![30.0, 80.0, 40.0, 50.0], 600.0);
    let (state, moves) = reorderable(&list);

    state.on_drag_start(50.0);
    assert_eq!(state.current_dragged_index(), Some(1));

    // Trailing edge must pass 150: needs more than 40 px of travel.
    state.on_drag(35.0);
    assert!(moves.borrow().is_empty());
    state.on_drag(10.0);
    assert_eq!(moves.borrow().as_slice(), &[(1, 2)]);
    assert_eq!(list.keys(), vec![0, 2, 1, 3]);
}
