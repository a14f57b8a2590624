use spindle::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use spindle::mvi::Reducer;

/// 7 cards at a 1200 px viewport: cards_per_view = 3, max_index = 4.
fn make_state() -> CarouselState {
    CarouselState::new(7, 1200, 80)
}

#[test]
fn one_indicator_per_reachable_position() {
    let state = make_state();
    assert_eq!(state.pagination.count, state.max_index() + 1);
}

#[test]
fn active_indicator_follows_navigation() {
    let state = CarouselReducer::reduce(make_state(), CarouselIntent::GoTo(3));
    assert_eq!(state.pagination.active, 3);
    assert!(state.pagination.is_active(3));
    assert!(!state.pagination.is_active(0));
}

#[test]
fn indicator_set_survives_moves_within_a_breakpoint() {
    let state = make_state();
    let count_before = state.pagination.count;
    let state = CarouselReducer::reduce(state, CarouselIntent::Next);
    let state = CarouselReducer::reduce(state, CarouselIntent::Prev);
    assert_eq!(state.pagination.count, count_before);
}

#[test]
fn indicator_set_rebuilds_on_breakpoint_change() {
    let state = make_state();
    assert_eq!(state.pagination.count, 5);
    let state = CarouselReducer::reduce(state, CarouselIntent::Resize { width_px: 800 });
    assert_eq!(state.pagination.count, 6);
    let state = CarouselReducer::reduce(state, CarouselIntent::Resize { width_px: 600 });
    assert_eq!(state.pagination.count, 7);
}

#[test]
fn count_and_active_hold_after_every_operation() {
    let steps = [
        CarouselIntent::Next,
        CarouselIntent::Next,
        CarouselIntent::GoTo(4),
        CarouselIntent::AutoTick,
        CarouselIntent::DragStart { x: 500 },
        CarouselIntent::DragMove { x: 380 },
        CarouselIntent::DragEnd,
        CarouselIntent::Resize { width_px: 800 },
        CarouselIntent::Prev,
        CarouselIntent::Resize { width_px: 1400 },
        CarouselIntent::GoTo(0),
    ];
    let mut state = make_state();
    for intent in steps {
        state = CarouselReducer::reduce(state, intent);
        assert_eq!(
            state.pagination.count,
            state.max_index() + 1,
            "count drifted after {:?}",
            intent
        );
        assert_eq!(
            state.pagination.active, state.current_index,
            "active indicator drifted after {:?}",
            intent
        );
    }
}
