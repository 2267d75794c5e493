use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A discrete camera movement impulse.
///
/// Closed set: forward/backward travel along the view direction, left/right
/// strafe along the camera's right vector, up/down along the camera's up vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// Every direction, in the order the frame loop applies them.
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];

    /// The direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            MoveDirection::Forward => MoveDirection::Backward,
            MoveDirection::Backward => MoveDirection::Forward,
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Left,
            MoveDirection::Up => MoveDirection::Down,
            MoveDirection::Down => MoveDirection::Up,
        }
    }
}

/// Interleaved mesh vertex: position, RGB color, texture coordinate.
///
/// 32-byte stride, matching the vertex layout the GPU pipeline declares.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            color,
            uv,
        }
    }
}
