//! Static scene data: one hard-coded mesh and one texture image.
//!
//! The renderer consumes these as plain CPU-side values. There is no
//! registry, caching or streaming; each is built or loaded once at startup.

mod mesh;
mod texture;

pub use mesh::{StaticMesh, city_block};
pub use texture::{DEFAULT_TEXTURE_PATH, TextureImage};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

pub fn crate_info() -> &'static str {
    "cityscape-assets v0.1.0"
}
