use thiserror::Error;

/// Result alias used by every fallible `libtrg` operation
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
/// Possible `libtrg` errors
pub enum Error {
    /// Error returned if the text document does not follow the TRG grammar
    #[error("parse error at line {line}: {detail}")]
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// what was expected or found
        detail: String,
    },
    /// Error returned if the `color-format` property names an unknown encoding
    #[error("unsupported color-format '{name}'")]
    UnsupportedColorFormat {
        /// the value of the `color-format` property
        name: String,
    },
    /// Error returned if a required property is absent
    #[error("required property '{key}' is missing")]
    MissingProperty {
        /// the missing property key
        key: String,
    },
    /// Error returned in strict mode if an image has more colors than palette slots
    #[error("cannot express palette of {context}: there are more than {} colors", crate::PALETTE_CAPACITY)]
    PaletteOverflow {
        /// the image being converted
        context: String,
    },
    /// Error returned in strict mode if a raster character has no palette entry
    #[error("raster character {key:?} does not correspond to a palette entry")]
    UnresolvedPaletteKey {
        /// the raster character
        key: char,
    },
    /// Error returned if a property value cannot be interpreted
    #[error("invalid value '{value}' for property '{key}'")]
    InvalidPropertyValue {
        /// the property key
        key: String,
        /// the rejected value
        value: String,
    },
    /// Error returned if a character outside `0x20..=0x7e` is used as a palette key
    #[error("palette character {key:?} is out of range")]
    InvalidPaletteKey {
        /// the rejected character
        key: char,
    },
    /// Error returned if the pixel buffer does not match the bitmap width/height
    #[error("width/height does not match pixel count. width: {width}, height: {height}, pixels: {pixels}")]
    MismatchDimensions {
        /// bitmap width
        width: u32,
        /// bitmap height
        height: u32,
        /// number of pixels provided
        pixels: usize,
    },
    /// Error returned if scaled output dimensions do not fit in `u32`
    #[error("output canvas of {width}x{height} is too large")]
    CanvasTooLarge {
        /// requested width
        width: u64,
        /// requested height
        height: u64,
    },
}

impl Error {
    pub(crate) fn parse(line: usize, detail: impl Into<String>) -> Self {
        Self::Parse {
            line,
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_property(key: &str, value: &str) -> Self {
        Self::InvalidPropertyValue {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}
