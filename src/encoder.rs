use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::CodecError;
use crate::surface::Surface;

/// Encode the surface as a PNG, alpha included.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, CodecError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            surface.as_raw(),
            surface.width(),
            surface.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(CodecError::Encode)?;

    log::debug!(
        "Encoded {}x{} surface to {} PNG bytes",
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Decode PNG bytes back into a surface of the encoded size
pub fn decode_png(bytes: &[u8]) -> Result<Surface, CodecError> {
    let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(CodecError::Decode)?;
    Surface::from_rgba(image.to_rgba8())
}
