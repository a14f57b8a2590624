//! Interactive review carousel for the terminal.
//!
//! The crate splits into a headless engine and a frontend. `carousel` is the
//! engine: a pure state machine over slide indices, drag gestures,
//! breakpoints, and pagination, driven entirely by `CarouselIntent` commands
//! and testable without a terminal. `ui` mounts that engine in a ratatui
//! interface with mouse-drag swiping, arrow keys, pagination dots, an
//! auto-advance timer, and debounced resize handling. `config` supplies the
//! review cards and the timing knobs from a TOML file.

pub mod carousel;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod ui;
