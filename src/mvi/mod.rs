//! State/intent/reducer primitives.
//!
//! Every stateful component in the crate follows the same unidirectional
//! flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Input sources (keys, mouse, timers) emit intents; a pure reducer turns
//! the current state plus one intent into the next state; the view is drawn
//! from state alone. Because intents are dispatched one at a time from a
//! single loop, no two transitions can interleave.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
