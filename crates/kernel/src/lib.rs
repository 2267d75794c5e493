//! Frame kernel: the camera and the loop that turns input into frame submissions.
//!
//! # Invariants
//! - The camera basis is always derived from yaw, pitch and world-up.
//! - Each running step yields exactly one submission; a terminating loop yields none.
//! - Everything here is a pure function of its inputs and the clock value passed in.

pub mod camera;
pub mod frame;

pub use camera::Camera;
pub use frame::{FrameLoop, LoopState, MODEL_SPIN_DEGREES_PER_SECOND, model_matrix};
