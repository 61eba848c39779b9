use crate::config::ResampleFilter;
use crate::error::{CodecError, EditorError};
use crate::host::Vault;
use crate::surface::Surface;

/// Decode `bytes` and stretch the result to exactly `width`×`height`.
///
/// The source is resampled, never cropped, so the aspect ratio follows the
/// surface rather than the image.
pub fn load_surface(
    bytes: &[u8],
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<Surface, CodecError> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions { width, height });
    }

    let decoded = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
    log::debug!(
        "Decoded source image: {}x{} ({} bytes)",
        decoded.width(),
        decoded.height(),
        bytes.len()
    );

    let rgba = decoded.to_rgba8();
    let pixels = if rgba.dimensions() == (width, height) {
        rgba
    } else {
        image::imageops::resize(&rgba, width, height, filter.into())
    };
    Surface::from_rgba(pixels)
}

/// Fetches an image through the host and decodes it onto a new surface.
pub struct SurfaceLoader {
    width: u32,
    height: u32,
    filter: ResampleFilter,
}

impl SurfaceLoader {
    pub fn new(width: u32, height: u32, filter: ResampleFilter) -> Self {
        Self { width, height, filter }
    }

    /// One decode attempt with exactly one outcome. Fetch and decode failures
    /// both surface as [`EditorError::ImageDecodeFailure`].
    pub async fn load<V: Vault + ?Sized>(&self, vault: &V, url: &str) -> Result<Surface, EditorError> {
        let bytes = vault.fetch(url).await.map_err(|err| {
            log::error!("Image failed to load from {}: {}", url, err);
            EditorError::ImageDecodeFailure(err.to_string())
        })?;

        let surface = load_surface(&bytes, self.width, self.height, self.filter).map_err(|err| {
            log::error!("Image failed to load from {}: {}", url, err);
            EditorError::ImageDecodeFailure(err.to_string())
        })?;

        log::info!("Image loaded successfully onto {}x{} surface", self.width, self.height);
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn stretches_small_image_to_surface() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let surface = load_surface(&png_bytes(&source), 80, 60, ResampleFilter::Triangle).unwrap();
        assert_eq!((surface.width(), surface.height()), (80, 60));
        assert_eq!(surface.pixel(40, 30), Some(Rgba([255, 255, 255, 255])));
        assert_eq!(surface.pixel(79, 59), Some(Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn stretches_rather_than_crops() {
        // Left half black, right half white: both halves must survive the stretch.
        let mut source = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
        source.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let surface = load_surface(&png_bytes(&source), 20, 10, ResampleFilter::Nearest).unwrap();
        assert_eq!(surface.pixel(0, 5), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(surface.pixel(19, 5), Some(Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = load_surface(b"not an image", 10, 10, ResampleFilter::Triangle).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn jpeg_sources_are_accepted() {
        let source = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 200, 30]));
        let mut out = Cursor::new(Vec::new());
        source.write_to(&mut out, ImageFormat::Jpeg).unwrap();
        let surface = load_surface(out.get_ref(), 8, 8, ResampleFilter::Triangle).unwrap();
        assert_eq!(surface.pixel(4, 4).map(|p| p.0[3]), Some(255));
    }
}
