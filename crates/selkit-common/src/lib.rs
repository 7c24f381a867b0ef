//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the selector builder
//! and the CLI:
//! - **Warning System** - colored, deduplicated terminal diagnostics
//! - **Geometry** - the `Rectangle` value type
//! - **JSON** - typed serialization and deserialization helpers

pub mod geometry;
pub mod json;
pub mod warning;

pub use geometry::Rectangle;
pub use json::{JsonError, from_json, to_json};
