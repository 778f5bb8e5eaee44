mod import;
mod render;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// A row-major grid of RGBA pixels
///
/// This is the boundary type between the codec and whatever decodes or encodes image files.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bitmap {
    /// The width of the image
    width: u32,
    /// The height of the image
    height: u32,
    /// Image pixels
    pixels: Vec<Rgba<u8>>,
}

impl Bitmap {
    /// Creates a new [`Bitmap`]
    ///
    /// # Errors
    /// This function errors if `pixels` does not hold exactly `width * height` pixels
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba<u8>>) -> Result<Self> {
        if u64::from(width) * u64::from(height) != pixels.len() as u64 {
            return Err(Error::MismatchDimensions {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a [`Bitmap`] with every pixel set to `fill`
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Returns the width of the image
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixels of the image in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[Rgba<u8>] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Sets the value of a specific pixel; out of bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, value: Rgba<u8>) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// Returns an entire row of the bitmap
    #[must_use]
    pub fn get_row(&self, y: u32) -> Option<&[Rgba<u8>]> {
        if y < self.height {
            let start_index = y as usize * self.width as usize;
            let end_index = start_index + self.width as usize;
            Some(&self.pixels[start_index..end_index])
        } else {
            None
        }
    }

    /// Iterates the rows of the bitmap from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba<u8>]> + '_ {
        (0..self.height).filter_map(|y| self.get_row(y))
    }

    /// Returns the pixels as interleaved RGBA bytes
    #[must_use]
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.0).collect()
    }

    /// Converts into an [`RgbaImage`] for encoding
    #[must_use]
    pub fn into_rgba_image(self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * self.width as usize + x as usize]
        })
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(value: RgbaImage) -> Self {
        Self {
            width: value.width(),
            height: value.height(),
            pixels: value.pixels().copied().collect(),
        }
    }
}

/// Normalizes any decoded image to 8-bit RGBA
impl From<DynamicImage> for Bitmap {
    fn from(value: DynamicImage) -> Self {
        value.into_rgba8().into()
    }
}
