use tracing::debug;

use crate::{
    document::Document,
    error::{Error, Result},
    palette::PalettePolicy,
};

use super::Bitmap;

impl Document {
    /// Renders the raster into a bitmap of `width x (height * linescale)` pixels
    ///
    /// Each raster row is repeated `linescale` times. Columns past the end of a short line, and
    /// rows past the last raster line, are filled with [`Document::background`].
    ///
    /// # Errors
    ///
    /// Errors if a size property is invalid, if the output is too large, or (with
    /// [`PalettePolicy::Strict`]) if a raster character has no palette entry
    pub fn to_bitmap(&self, policy: PalettePolicy) -> Result<Bitmap> {
        let width = self.width()?;
        let height = self.height()?;
        let linescale = self.linescale()?;

        let too_large = || Error::CanvasTooLarge {
            width: u64::from(width),
            height: u64::from(height) * u64::from(linescale),
        };
        let out_height = height.checked_mul(linescale).ok_or_else(too_large)?;
        let len = usize::try_from(u64::from(width) * u64::from(out_height))
            .map_err(|_| too_large())?;
        debug!("Rendering {width}x{out_height} bitmap (linescale {linescale})");

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        for y in 0..height {
            let row = self.row_colors(y, width, policy)?;
            for _ in 0..linescale {
                pixels.extend_from_slice(&row);
            }
        }
        Bitmap::new(width, out_height, pixels)
    }
}
