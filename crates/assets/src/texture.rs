use crate::AssetError;
use std::path::Path;

/// Wall texture shipped next to the executable.
pub const DEFAULT_TEXTURE_PATH: &str = "res_wall_01_color.jpg";

/// Decoded 8-bit RGBA image, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Read and decode an image file. Any format the enabled decoders
    /// understand is accepted; the pixels are expanded to RGBA.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path.as_ref())?;
        let image = Self::from_bytes(&bytes)?;
        tracing::debug!(
            "loaded texture {} ({}x{})",
            path.as_ref().display(),
            image.width,
            image.height
        );
        Ok(image)
    }

    /// Decode an in-memory encoded image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    /// Load `path`, or fall back to a 1x1 white image if it cannot be read.
    ///
    /// A missing texture is reported and drawing continues.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!("failed to load texture {}: {e}", path.as_ref().display());
                Self::fallback()
            }
        }
    }

    /// The 1x1 white texture drawn when the wall image is unusable. White
    /// leaves the vertex colors unchanged under the light multiply.
    pub fn fallback() -> Self {
        Self::solid([255, 255, 255, 255])
    }

    /// Whether both sides are non-zero and no larger than `max_dimension`.
    pub fn fits_within(&self, max_dimension: u32) -> bool {
        (1..=max_dimension).contains(&self.width) && (1..=max_dimension).contains(&self.height)
    }

    /// A single texel.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    /// Bytes per row of the RGBA pixel data.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn load_png_expands_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        let mut img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        img.put_pixel(2, 1, Rgb([200, 100, 50]));
        img.save(&path).unwrap();

        let tex = TextureImage::load(&path).unwrap();
        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(tex.rgba.len(), 3 * 2 * 4);
        assert_eq!(tex.bytes_per_row(), 12);
        assert_eq!(&tex.rgba[..4], &[10, 20, 30, 255]);
        assert_eq!(&tex.rgba[20..24], &[200, 100, 50, 255]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextureImage::load(dir.path().join("missing.jpg")).unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = TextureImage::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }

    #[test]
    fn fallback_is_white_texel() {
        let dir = tempfile::tempdir().unwrap();
        let tex = TextureImage::load_or_fallback(dir.path().join("missing.jpg"));
        assert_eq!(tex, TextureImage::fallback());
        assert_eq!(tex.rgba, vec![255, 255, 255, 255]);
        assert_eq!(tex.bytes_per_row(), 4);
    }

    #[test]
    fn wide_png_decodes_but_exceeds_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::from_pixel(9000, 1, Rgb([1, 2, 3])).save(&path).unwrap();

        let tex = TextureImage::load_or_fallback(&path);
        assert_eq!((tex.width, tex.height), (9000, 1));
        assert!(!tex.fits_within(8192));
        assert!(tex.fits_within(9000));
    }

    #[test]
    fn fits_within_edges() {
        let tall = TextureImage {
            width: 1,
            height: 8193,
            rgba: vec![0; 8193 * 4],
        };
        assert!(!tall.fits_within(8192));
        assert!(TextureImage::fallback().fits_within(1));
        let empty = TextureImage {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        };
        assert!(!empty.fits_within(8192));
    }
}
