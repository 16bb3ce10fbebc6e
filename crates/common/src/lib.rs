//! Shared spatial types used across the promenade crates.

pub mod types;

pub use types::{Aabb, Placement};
