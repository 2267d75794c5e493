//! Shared vocabulary used across the cityscape crates.
//!
//! Nothing in here knows about windows, key codes or GPUs.

mod types;

pub use types::{MoveDirection, Vertex};
