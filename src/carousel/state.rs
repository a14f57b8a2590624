use crate::carousel::layout;
use crate::carousel::pagination::PaginationState;
use crate::mvi::UiState;

/// Default minimum pointer displacement, in pixels, for a released drag to
/// commit a slide change instead of snapping back.
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 80;

/// Live pointer drag, present only between press and release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    /// X coordinate where the pointer went down, in pixels.
    pub start_x: i32,
    /// Signed displacement accumulated so far; cleared on release.
    pub offset_px: i32,
}

/// Complete carousel snapshot. See `CarouselReducer` for the transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    /// Number of cards, fixed at construction.
    pub total_cards: usize,
    /// Cards visible at once; re-derived from viewport width on resize.
    pub cards_per_view: usize,
    /// Invariant: `current_index <= max_index()` after every transition.
    pub current_index: usize,
    pub drag: Option<DragState>,
    /// True whenever the auto-advance timer should be running. The deadline
    /// itself lives with the event loop; this flag is the single source of
    /// truth for whether one may exist.
    pub auto_advance_armed: bool,
    pub pagination: PaginationState,
    /// Last applied viewport width, in pixels.
    pub viewport_width: u32,
    pub drag_threshold_px: i32,
}

impl Default for CarouselState {
    /// Inert state: no cards, nothing armed. The reducer ignores every
    /// intent until a populated state replaces this.
    fn default() -> Self {
        Self {
            total_cards: 0,
            cards_per_view: 1,
            current_index: 0,
            drag: None,
            auto_advance_armed: false,
            pagination: PaginationState::default(),
            viewport_width: 0,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(total_cards: usize, viewport_width: u32, drag_threshold_px: i32) -> Self {
        let cards_per_view = layout::cards_per_view(viewport_width);
        let max_index = layout::max_index(total_cards, cards_per_view);
        Self {
            total_cards,
            cards_per_view,
            current_index: 0,
            drag: None,
            auto_advance_armed: total_cards > 0,
            pagination: PaginationState::rebuild(max_index, 0),
            viewport_width,
            drag_threshold_px,
        }
    }

    /// False when no cards are configured; the component then never
    /// activates and every intent is a no-op.
    pub fn is_active(&self) -> bool {
        self.total_cards > 0
    }

    pub fn max_index(&self) -> usize {
        layout::max_index(self.total_cards, self.cards_per_view)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Live drag displacement, 0 outside a drag.
    pub fn drag_offset_px(&self) -> i32 {
        self.drag.map(|d| d.offset_px).unwrap_or(0)
    }
}
