use crate::carousel::intent::CarouselIntent;
use crate::carousel::layout;
use crate::carousel::pagination::PaginationState;
use crate::carousel::state::{CarouselState, DragState};
use crate::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if !state.is_active() {
            return state;
        }
        match intent {
            CarouselIntent::Next => rearm(advance(state)),
            CarouselIntent::Prev => rearm(retreat(state)),
            CarouselIntent::GoTo(index) => go_to(state, index),
            CarouselIntent::DragStart { x } => drag_start(state, x),
            CarouselIntent::DragMove { x } => drag_move(state, x),
            CarouselIntent::DragEnd => drag_end(state),
            CarouselIntent::AutoTick => auto_tick(state),
            CarouselIntent::HoverEnter => hover_enter(state),
            CarouselIntent::HoverLeave => hover_leave(state),
            CarouselIntent::Resize { width_px } => resize(state, width_px),
        }
    }
}

/// Clamp into `[0, max_index]`, store, and sync the active indicator.
/// Calling with the current index is a no-op state-wise; the frame is
/// redrawn from state either way, which is what undoes a snapped-back drag.
fn go_to(mut state: CarouselState, index: usize) -> CarouselState {
    let max = state.max_index();
    state.current_index = index.min(max);
    state.pagination.set_active(state.current_index);
    state
}

fn advance(state: CarouselState) -> CarouselState {
    let next = if state.current_index >= state.max_index() {
        0
    } else {
        state.current_index + 1
    };
    go_to(state, next)
}

fn retreat(state: CarouselState) -> CarouselState {
    let prev = if state.current_index == 0 {
        state.max_index()
    } else {
        state.current_index - 1
    };
    go_to(state, prev)
}

/// Manual navigation completes by re-arming auto-advance; the event loop
/// restarts the period from the dispatch instant.
fn rearm(mut state: CarouselState) -> CarouselState {
    state.auto_advance_armed = true;
    state
}

fn drag_start(mut state: CarouselState, x: i32) -> CarouselState {
    if state.drag.is_some() {
        return state;
    }
    state.drag = Some(DragState {
        start_x: x,
        offset_px: 0,
    });
    state.auto_advance_armed = false;
    state
}

fn drag_move(mut state: CarouselState, x: i32) -> CarouselState {
    if let Some(drag) = &mut state.drag {
        drag.offset_px = x - drag.start_x;
    }
    state
}

fn drag_end(mut state: CarouselState) -> CarouselState {
    let Some(drag) = state.drag.take() else {
        return state;
    };
    let threshold = state.drag_threshold_px;
    let state = if drag.offset_px < -threshold {
        advance(state)
    } else if drag.offset_px > threshold {
        retreat(state)
    } else {
        // Below threshold: snap back to the current position.
        let index = state.current_index;
        go_to(state, index)
    };
    rearm(state)
}

fn auto_tick(state: CarouselState) -> CarouselState {
    // The loop only schedules ticks while armed, but a tick already in the
    // channel can land after a drag started; drop it.
    if state.auto_advance_armed && !state.is_dragging() {
        advance(state)
    } else {
        state
    }
}

fn hover_enter(mut state: CarouselState) -> CarouselState {
    state.auto_advance_armed = false;
    state
}

fn hover_leave(mut state: CarouselState) -> CarouselState {
    // While a drag is in progress the drag owns movement; re-arm happens at
    // drag end, not when the pointer strays outside the region.
    if !state.is_dragging() {
        state.auto_advance_armed = true;
    }
    state
}

fn resize(mut state: CarouselState, width_px: u32) -> CarouselState {
    // A resize landing mid-drag cancels the drag: the pending offset is
    // discarded (snap-back) so the relayout never runs on a stale basis.
    if state.drag.take().is_some() {
        state.auto_advance_armed = true;
    }
    state.viewport_width = width_px;
    let cards_per_view = layout::cards_per_view(width_px);
    if cards_per_view != state.cards_per_view {
        state.cards_per_view = cards_per_view;
        let max = state.max_index();
        if state.current_index > max {
            state.current_index = max;
        }
        state.pagination = PaginationState::rebuild(max, state.current_index);
    } else {
        state.pagination.set_active(state.current_index);
    }
    state
}
