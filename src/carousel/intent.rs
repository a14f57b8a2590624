use crate::mvi::Intent;

/// Commands consumed by the carousel reducer.
///
/// Every input source — arrows and keys, pointer drag, the auto-advance
/// timer, debounced resize — is expressed as one of these and dispatched
/// from a single loop, so no two sources can race.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Manual advance; wraps past the last position.
    Next,
    /// Manual retreat; wraps past the first position.
    Prev,
    /// Jump straight to a position; out-of-range values are clamped.
    GoTo(usize),
    /// Pointer pressed on the track at the given X, in pixels.
    DragStart { x: i32 },
    /// Pointer moved while a drag is active.
    DragMove { x: i32 },
    /// Pointer released: commit past the threshold, snap back otherwise.
    DragEnd,
    /// Auto-advance timer fired.
    AutoTick,
    /// Pointer entered the carousel region; pauses auto-advance.
    HoverEnter,
    /// Pointer left the carousel region.
    HoverLeave,
    /// Debounced viewport change.
    Resize { width_px: u32 },
}

impl Intent for CarouselIntent {}
