//! wgpu render backend for the cityscape demo.
//!
//! Draws one indexed mesh with one texture and one uniform block. Each frame
//! is driven entirely by a [`cityscape_render::FrameSubmission`].
//!
//! # Invariants
//! - Setup either yields a complete context and renderer or a [`SetupError`].
//! - Per-frame rendering never fails; surface loss is handled by the caller.
//! - The projection in the submission is used as-is; resizing only rebuilds
//!   the depth buffer.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, SetupError};
pub use gpu::WgpuRenderer;
