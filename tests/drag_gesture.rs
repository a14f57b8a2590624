use spindle::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use spindle::mvi::Reducer;

/// 7 cards at a 1200 px viewport: cards_per_view = 3, max_index = 4.
fn make_state() -> CarouselState {
    CarouselState::new(7, 1200, 80)
}

fn apply(state: CarouselState, intents: &[CarouselIntent]) -> CarouselState {
    intents
        .iter()
        .fold(state, |s, &intent| CarouselReducer::reduce(s, intent))
}

#[test]
fn drag_left_past_threshold_commits_next() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(2),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 400 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 3);
    assert!(!state.is_dragging());
    assert_eq!(state.drag_offset_px(), 0);
}

#[test]
fn drag_right_past_threshold_commits_prev() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(2),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 620 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 1);
}

#[test]
fn drag_below_threshold_snaps_back() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(2),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 530 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 2);
    assert!(state.auto_advance_armed);
}

#[test]
fn drag_of_exactly_threshold_snaps_back() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(2),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 420 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 2);
}

#[test]
fn drag_one_past_threshold_commits() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(2),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 419 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 3);
}

#[test]
fn drag_commit_wraps_at_the_ends() {
    // Swiping further left at the last position wraps to the first.
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(4),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 300 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 0);

    // Swiping right at the first position wraps to the last.
    let state = apply(
        make_state(),
        &[
            CarouselIntent::DragStart { x: 300 },
            CarouselIntent::DragMove { x: 500 },
            CarouselIntent::DragEnd,
        ],
    );
    assert_eq!(state.current_index, 4);
}

#[test]
fn moves_accumulate_against_the_start_coordinate() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 480 },
            CarouselIntent::DragMove { x: 450 },
            CarouselIntent::DragMove { x: 410 },
        ],
    );
    assert_eq!(state.drag_offset_px(), -90);
}

#[test]
fn drag_move_without_start_is_ignored() {
    let state = apply(make_state(), &[CarouselIntent::DragMove { x: 100 }]);
    assert_eq!(state, make_state());
}

#[test]
fn second_drag_start_keeps_the_original_anchor() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::DragStart { x: 100 },
            CarouselIntent::DragStart { x: 999 },
            CarouselIntent::DragMove { x: 50 },
        ],
    );
    assert_eq!(state.drag_offset_px(), -50);
}

#[test]
fn drag_start_disarms_auto_advance() {
    let state = apply(make_state(), &[CarouselIntent::DragStart { x: 500 }]);
    assert!(!state.auto_advance_armed);
}

#[test]
fn drag_end_rearms_auto_advance() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragEnd,
        ],
    );
    assert!(state.auto_advance_armed);
}

#[test]
fn drag_end_without_drag_is_ignored() {
    let state = apply(make_state(), &[CarouselIntent::HoverEnter]);
    let state = CarouselReducer::reduce(state, CarouselIntent::DragEnd);
    // A stray release must not re-arm a timer that hover paused.
    assert!(!state.auto_advance_armed);
    assert_eq!(state.current_index, 0);
}

#[test]
fn resize_mid_drag_cancels_without_committing() {
    let state = apply(
        make_state(),
        &[
            CarouselIntent::GoTo(2),
            CarouselIntent::DragStart { x: 500 },
            CarouselIntent::DragMove { x: 300 },
            CarouselIntent::Resize { width_px: 800 },
        ],
    );
    // The 200 px swipe is discarded, not committed.
    assert_eq!(state.current_index, 2);
    assert!(!state.is_dragging());
    assert!(state.auto_advance_armed);
    assert_eq!(state.cards_per_view, 2);
}
