//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - A frame is fully described by one [`FrameSubmission`]. Backends hold no
//!   hidden per-frame state that the submission does not carry.
//! - The projection is fixed at startup.
//!
//! A debug text renderer implements the same trait as a stand-in for the GPU
//! backend, so the camera → matrices → submission path is testable headless.

mod renderer;

pub use renderer::{DebugTextRenderer, FrameSubmission, Projection, Renderer};

pub fn crate_info() -> &'static str {
    "cityscape-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
