use std::collections::HashMap;

use image::Rgba;
use tracing::{debug, warn};

use crate::{
    color::ColorFormat,
    document::{
        properties::{COLOR_FORMAT, HEIGHT, INDENTED1S, WIDTH},
        Document,
    },
    error::{Error, Result},
    palette::{Palette, PaletteKey, PalettePolicy},
};

use super::Bitmap;

impl Document {
    /// Builds a document from a bitmap, giving every distinct color a palette key
    ///
    /// Keys are handed out in ascending order from `!`, one per new color in row-major pixel
    /// order. The document gets `width`, `height` and `color-format` properties, plus
    /// `indented1s: yes` when the backtick became a palette key.
    ///
    /// # Errors
    ///
    /// With [`PalettePolicy::Strict`], errors with [`Error::PaletteOverflow`] if the bitmap has more
    /// than [`crate::PALETTE_CAPACITY`] colors. With [`PalettePolicy::Sloppy`] every color past
    /// the capacity is drawn with [`PaletteKey::LAST`] instead.
    pub fn from_bitmap(
        bitmap: &Bitmap,
        title: impl Into<String>,
        policy: PalettePolicy,
    ) -> Result<Self> {
        let title = title.into();
        let mut palette = Palette::new();
        let mut keys: HashMap<Rgba<u8>, PaletteKey> = HashMap::new();
        let mut collapsed = 0usize;

        let mut raster = Vec::with_capacity(bitmap.height() as usize);
        for row in bitmap.rows() {
            let mut line = String::with_capacity(row.len());
            for &pixel in row {
                let key = match keys.get(&pixel) {
                    Some(&key) => key,
                    None => match (palette.assign(pixel), policy) {
                        (Some(key), _) => {
                            keys.insert(pixel, key);
                            key
                        }
                        (None, PalettePolicy::Sloppy) => {
                            if collapsed == 0 {
                                warn!(
                                    "Palette of {title} is full, collapsing further colors onto '{}'",
                                    PaletteKey::LAST
                                );
                            }
                            collapsed += 1;
                            PaletteKey::LAST
                        }
                        (None, PalettePolicy::Strict) => {
                            return Err(Error::PaletteOverflow { context: title });
                        }
                    },
                };
                line.push(key.into());
            }
            raster.push(line);
        }
        debug!(
            "Assigned {} palette entries, collapsed {collapsed} overflow pixels",
            palette.len()
        );

        let mut doc = Self::new();
        doc.title = title;
        doc.properties.insert(WIDTH, bitmap.width().to_string());
        doc.properties.insert(HEIGHT, bitmap.height().to_string());
        doc.properties
            .insert(COLOR_FORMAT, ColorFormat::HexRgba.as_str());
        if palette.lookup('`').is_some() {
            doc.properties.insert(INDENTED1S, "yes");
        }
        doc.palette = palette;
        doc.raster = raster;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Rgba<u8> {
        Rgba([v, v, v, 255])
    }

    #[test]
    fn assigns_keys_in_pixel_order() {
        let bitmap = Bitmap::new(3, 2, [9, 8, 9, 7, 7, 8].map(gray).to_vec()).unwrap();
        let doc = Document::from_bitmap(&bitmap, "six", PalettePolicy::Strict).unwrap();
        assert_eq!(doc.title, "six");
        assert_eq!(doc.raster, ["!\"!", "##\""]);
        assert_eq!(doc.palette.lookup('#'), Some(gray(7)));
        assert_eq!(doc.properties.get("width"), Some("3"));
        assert_eq!(doc.properties.get("height"), Some("2"));
        assert_eq!(doc.properties.get("color-format"), Some("hex-rgba"));
        assert_eq!(doc.properties.get("indented1s"), None);
    }

    #[test]
    fn overflow_counts_distinct_colors_not_pixels() {
        let pixels: Vec<_> = (0..200u32).map(|i| gray((i % 95) as u8)).collect();
        let bitmap = Bitmap::new(200, 1, pixels).unwrap();
        let doc = Document::from_bitmap(&bitmap, "95", PalettePolicy::Strict).unwrap();
        assert_eq!(doc.palette.len(), 95);
    }

    #[test]
    fn sloppy_overflow_collapses_onto_last_slot() {
        let pixels: Vec<_> = (0..=100u8).map(gray).collect();
        let bitmap = Bitmap::new(101, 1, pixels).unwrap();
        assert_eq!(
            Document::from_bitmap(&bitmap, "big.png", PalettePolicy::Strict),
            Err(Error::PaletteOverflow {
                context: "big.png".to_owned()
            })
        );
        let doc = Document::from_bitmap(&bitmap, "big.png", PalettePolicy::Sloppy).unwrap();
        let line = &doc.raster[0];
        assert_eq!(line.chars().count(), 101);
        assert!(line[95..].chars().all(|c| c == '~'));
        // '~' keeps the color it was first assigned
        assert_eq!(doc.palette.lookup('~'), Some(gray(93)));
    }
}
