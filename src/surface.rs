use egui::{Color32, ColorImage};
use image::{Rgba, RgbaImage};

use crate::error::CodecError;

/// Fully transparent pixel left behind by the eraser
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Fixed-size RGBA pixel grid being edited.
///
/// The dimensions never change after construction. All mutation goes through
/// [`Surface::fill_square`] and [`Surface::clear_square`], which clip against
/// the grid so callers can pass any coordinates.
#[derive(Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

// RgbaImage's Debug would dump every pixel
impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Create a transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self, CodecError> {
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, TRANSPARENT),
        })
    }

    /// Wrap an already-sized pixel buffer
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, CodecError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    /// Pixel at (x, y), or None outside the grid
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Overwrite a single pixel; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, value: Rgba<u8>) {
        if let Some(pixel) = self.pixels.get_pixel_mut_checked(x, y) {
            *pixel = value;
        }
    }

    /// Replace every pixel of the `size`-wide square whose top-left corner is
    /// `(left, top)` with `value`. Returns how many pixels were written.
    pub fn fill_square(&mut self, left: i64, top: i64, size: u32, value: Rgba<u8>) -> usize {
        let Some((x0, y0, x1, y1)) = self.clip_square(left, top, size) else {
            return 0;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels.put_pixel(x, y, value);
            }
        }
        ((x1 - x0) * (y1 - y0)) as usize
    }

    /// Make the square fully transparent
    pub fn clear_square(&mut self, left: i64, top: i64, size: u32) -> usize {
        self.fill_square(left, top, size, TRANSPARENT)
    }

    fn clip_square(&self, left: i64, top: i64, size: u32) -> Option<(u32, u32, u32, u32)> {
        let size = i64::from(size);
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = left.saturating_add(size).min(i64::from(self.width()));
        let y1 = top.saturating_add(size).min(i64::from(self.height()));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        // All four bounds now lie within [0, dimension]
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        self.pixels
    }

    /// Snapshot for display in an egui texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

/// Opaque pixel of the given color
pub fn opaque(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}
