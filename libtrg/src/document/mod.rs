/// Property keys and the ordered property list
pub mod properties;

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use anyhow::Context;
use image::Rgba;
use tracing::{debug, info};

use crate::{
    color::{format_hex_rgba, ColorFormat, TRANSPARENT},
    error::{Error, Result},
    palette::{Palette, PalettePolicy},
    serde,
};
use properties::{
    Properties, BACKGROUND_COLOR, COLOR_FORMAT, HEIGHT, INDENTED1S, LINESCALE, SVG_PIXEL_HEIGHT,
    SVG_PIXEL_WIDTH, WIDTH,
};

/// Title given to documents that were not named by their source
pub const DEFAULT_TITLE: &str = "UntitledTextualRasterImage";

/// A typed representation of one TRG document
///
/// ## Note
///
/// The fields are public so documents can be assembled by hand. Property values are only
/// interpreted when a conversion needs them, so an invalid value (e.g. a non-numeric `width`)
/// surfaces as [`Error::InvalidPropertyValue`] from the conversion. Parsed documents are checked
/// up front.
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub struct Document {
    /// Display title, written as the top level heading
    pub title: String,
    /// The properties section
    pub properties: Properties,
    /// Palette keys and their colors
    pub palette: Palette,
    /// One string of palette keys per image row
    pub raster: Vec<String>,
    /// Fill for short lines, missing rows, and (in sloppy mode) unresolved characters
    pub background: Rgba<u8>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document with the default title and a `hex-rgba` color format
    #[must_use]
    pub fn new() -> Self {
        let mut properties = Properties::new();
        properties.insert(COLOR_FORMAT, ColorFormat::HexRgba.as_str());
        Self {
            title: DEFAULT_TITLE.to_owned(),
            properties,
            palette: Palette::new(),
            raster: Vec::new(),
            background: TRANSPARENT,
        }
    }

    /// Creates a document without any properties, to be filled by the parser
    pub(crate) fn empty() -> Self {
        Self {
            properties: Properties::new(),
            ..Self::new()
        }
    }

    fn int_property(&self, key: &str) -> Result<Option<u32>> {
        self.properties
            .get(key)
            .map(|value| {
                value
                    .parse::<u32>()
                    .map_err(|_| Error::invalid_property(key, value))
            })
            .transpose()
    }

    fn positive_property(&self, key: &str) -> Result<u32> {
        match self.int_property(key)? {
            None => Ok(1),
            Some(0) => Err(Error::invalid_property(key, "0")),
            Some(n) => Ok(n),
        }
    }

    /// Returns the image width
    ///
    /// This is the `width` property if present, otherwise the length of the longest raster line.
    ///
    /// # Errors
    ///
    /// Errors if `width` is not a non-negative integer
    pub fn width(&self) -> Result<u32> {
        if let Some(width) = self.int_property(WIDTH)? {
            return Ok(width);
        }
        let longest = self
            .raster
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        u32::try_from(longest).map_err(|_| Error::CanvasTooLarge {
            width: longest as u64,
            height: self.raster.len() as u64,
        })
    }

    /// Returns the image height
    ///
    /// This is the `height` property if present, otherwise the number of raster lines.
    ///
    /// # Errors
    ///
    /// Errors if `height` is not a non-negative integer
    pub fn height(&self) -> Result<u32> {
        if let Some(height) = self.int_property(HEIGHT)? {
            return Ok(height);
        }
        u32::try_from(self.raster.len()).map_err(|_| Error::CanvasTooLarge {
            width: 0,
            height: self.raster.len() as u64,
        })
    }

    /// Returns the vertical pixel multiplier (`linescale`, default 1)
    ///
    /// # Errors
    ///
    /// Errors if `linescale` is not a positive integer
    pub fn linescale(&self) -> Result<u32> {
        self.positive_property(LINESCALE)
    }

    /// Returns the vector pixel size as `(svg-pixel-width, svg-pixel-height)`, default `(1, 1)`
    ///
    /// # Errors
    ///
    /// Errors if either property is not a positive integer
    pub fn svg_pixel_size(&self) -> Result<(u32, u32)> {
        Ok((
            self.positive_property(SVG_PIXEL_WIDTH)?,
            self.positive_property(SVG_PIXEL_HEIGHT)?,
        ))
    }

    /// Returns whether raster lines are written with a one character left pad (`indented1s`)
    ///
    /// # Errors
    ///
    /// Errors if `indented1s` is neither `yes` nor `no`
    pub fn indented(&self) -> Result<bool> {
        match self.properties.get(INDENTED1S) {
            None | Some("no") => Ok(false),
            Some("yes") => Ok(true),
            Some(other) => Err(Error::invalid_property(INDENTED1S, other)),
        }
    }

    /// Returns the declared color format
    ///
    /// # Errors
    ///
    /// Errors if `color-format` is missing or names an unknown format
    pub fn color_format(&self) -> Result<ColorFormat> {
        let name = self
            .properties
            .get(COLOR_FORMAT)
            .ok_or_else(|| Error::MissingProperty {
                key: COLOR_FORMAT.to_owned(),
            })?;
        ColorFormat::from_str(name).map_err(|_| Error::UnsupportedColorFormat {
            name: name.to_owned(),
        })
    }

    /// Sets the background color and records it in the `background-color` property
    pub fn set_background(&mut self, color: Rgba<u8>) {
        self.background = color;
        self.properties
            .insert(BACKGROUND_COLOR, format_hex_rgba(color));
    }

    /// Checks every interpreted property
    ///
    /// # Errors
    ///
    /// Returns the first property error found
    pub fn validate(&self) -> Result<()> {
        self.color_format()?;
        self.width()?;
        self.height()?;
        self.linescale()?;
        self.svg_pixel_size()?;
        self.indented()?;
        Ok(())
    }

    /// Resolves one raster character to its color
    pub(crate) fn resolve(&self, key: char, policy: PalettePolicy) -> Result<Rgba<u8>> {
        match (self.palette.lookup(key), policy) {
            (Some(color), _) => Ok(color),
            (None, PalettePolicy::Sloppy) => {
                debug!("no palette entry for {key:?}, using background");
                Ok(self.background)
            }
            (None, PalettePolicy::Strict) => Err(Error::UnresolvedPaletteKey { key }),
        }
    }

    /// Returns exactly `width` colors for raster row `y`, padding with the background color
    pub(crate) fn row_colors(
        &self,
        y: u32,
        width: u32,
        policy: PalettePolicy,
    ) -> Result<Vec<Rgba<u8>>> {
        let width = width as usize;
        let line = self.raster.get(y as usize).map_or("", String::as_str);
        let mut row = line
            .chars()
            .take(width)
            .map(|key| self.resolve(key, policy))
            .collect::<Result<Vec<_>>>()?;
        row.resize(width, self.background);
        Ok(row)
    }

    /// Tries to read a [`Self`] from a reader holding TRG text
    ///
    /// # Errors
    ///
    /// This function will error if the reader fails, is not UTF-8, or holds an invalid document
    pub fn from_reader(mut r: impl Read) -> anyhow::Result<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text).context("read TRG text")?;
        Ok(text.parse()?)
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or if the file contains invalid data.
    /// See [`Self::from_reader`] for potential errors
    pub fn from_file<P: AsRef<Path>>(filename: P) -> anyhow::Result<Self> {
        let filename = filename.as_ref();
        let file =
            File::open(filename).with_context(|| format!("open {}", filename.display()))?;
        let doc = Self::from_reader(file)?;
        info!("Read TRG document '{}' from {}", doc.title, filename.display());
        Ok(doc)
    }

    /// Serializes [`Self`] and saves it as a file at the provided path
    ///
    /// # Errors
    ///
    /// This will error if unable to open and/or write to the provided filename
    pub fn to_file(&self, filename: impl AsRef<Path>) -> anyhow::Result<()> {
        let f = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(filename)?;
        let mut f = BufWriter::new(f);
        f.write_all(self.to_string().as_bytes())
            .context("Write TRG text to file")?;
        f.flush()?;
        info!("Finished writing to file");
        Ok(())
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde::parse_document(s)
    }
}

/// Formats the document as TRG text
impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        serde::write_document(self, f)
    }
}
