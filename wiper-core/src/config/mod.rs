//! Configuration types
//!
//! Board-agnostic configuration, parsed from `wiper.toml` at build time.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
