//! Configuration for stylesheet builds
//!
//! Provides types and parsing for `animate.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
