//! Configuration for the huescale CLI
//!
//! Provides types, discovery and loading for `huescale.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
