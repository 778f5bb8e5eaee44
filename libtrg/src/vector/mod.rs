mod svg;

use bon::Builder;
use image::Rgba;
use tracing::debug;

use crate::{
    document::Document,
    error::{Error, Result},
    palette::PalettePolicy,
};

/// One filled rectangle of a [`VectorImage`]
#[derive(Builder, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Horizontal size
    pub width: u32,
    /// Vertical size
    pub height: u32,
    /// Fill color
    pub color: Rgba<u8>,
}

/// A canvas covered by filled rectangles, one per raster cell
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VectorImage {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Number of raster rows the rectangles cover
    pub rows: u32,
    /// Rectangles in row-major cell order
    pub rects: Vec<Rect>,
}

impl Document {
    /// Renders the raster as one rectangle per cell
    ///
    /// A cell is `svg-pixel-width` wide and `svg-pixel-height * linescale` tall. Cells are
    /// resolved exactly as in [`Document::to_bitmap`], including background padding, and
    /// adjacent cells of the same color are not merged.
    ///
    /// # Errors
    ///
    /// Errors if a size property is invalid, if the canvas is too large, or (with
    /// [`PalettePolicy::Strict`]) if a raster character has no palette entry
    pub fn to_vector(&self, policy: PalettePolicy) -> Result<VectorImage> {
        let width = self.width()?;
        let height = self.height()?;
        let linescale = self.linescale()?;
        let (pixel_width, pixel_height) = self.svg_pixel_size()?;

        let too_large = || Error::CanvasTooLarge {
            width: u64::from(width) * u64::from(pixel_width),
            height: u64::from(height) * u64::from(pixel_height) * u64::from(linescale),
        };
        let cell_height = pixel_height.checked_mul(linescale).ok_or_else(too_large)?;
        let canvas_width = width.checked_mul(pixel_width).ok_or_else(too_large)?;
        let canvas_height = height.checked_mul(cell_height).ok_or_else(too_large)?;
        debug!("Rendering {canvas_width}x{canvas_height} vector canvas");

        let cells = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| too_large())?;
        let mut rects = Vec::new();
        rects.try_reserve_exact(cells).map_err(|_| too_large())?;
        for y in 0..height {
            let row = self.row_colors(y, width, policy)?;
            for (x, color) in (0..width).zip(row) {
                rects.push(
                    Rect::builder()
                        .x(x * pixel_width)
                        .y(y * cell_height)
                        .width(pixel_width)
                        .height(cell_height)
                        .color(color)
                        .build(),
                );
            }
        }
        Ok(VectorImage {
            width: canvas_width,
            height: canvas_height,
            rows: height,
            rects,
        })
    }
}
