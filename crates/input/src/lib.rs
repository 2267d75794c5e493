//! Input mapping: physical key names to demo actions.
//!
//! # Invariants
//! - No windowing-library types cross this boundary. Keys are identified by
//!   the debug name of their physical key code (`"KeyW"`, `"Escape"`).
//! - Movement keys act while held; toggle and quit keys act once per press.

pub mod action;
mod bindings;
mod state;

pub use action::Action;
pub use bindings::{InputError, KeyBindings};
pub use state::{FrameActions, InputState};

pub fn crate_info() -> &'static str {
    "cityscape-input v0.1.0"
}
