//! TOML configuration: timing knobs, terminal geometry, and the review set.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CarouselConfig, Config, Review, TerminalConfig};
