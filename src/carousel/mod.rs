//! The review carousel engine.
//!
//! A headless slide-index state machine. Four concerns cooperate here:
//! the layout resolver (breakpoints and slide translation), the slide state
//! and its reducer (all transitions), the pagination model, and the intent
//! vocabulary that every input source is funnelled through. Rendering,
//! timers, and raw input live in `crate::ui`; this module never touches the
//! terminal, which is what keeps it testable on its own.

pub mod intent;
pub mod layout;
pub mod pagination;
pub mod reducer;
pub mod state;

pub use intent::CarouselIntent;
pub use pagination::PaginationState;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, DragState};
