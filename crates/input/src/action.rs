use cityscape_common::MoveDirection;
use serde::{Deserialize, Serialize};

/// A high-level action produced by a bound key.
///
/// The frame loop consumes actions, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Translate the camera while the key is held.
    Move(MoveDirection),
    /// Flip the texture-times-color lighting multiply.
    ToggleLight,
    /// Leave the frame loop.
    Quit,
}
