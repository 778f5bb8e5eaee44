//! # libtrg
//!
//!
//! This library provides datatypes and conversions for Textual Raster Graphics (TRG) documents,
//! a small markdown-flavoured text encoding of raster images that can be read and edited by hand.
//!
//! A TRG document consists of a title heading, a list of properties, a palette mapping single
//! printable characters to RGBA colors, and a fenced raster block where every character is one
//! pixel:
//!
//! ~~~text
//! # smiley
//!
//! ## properties
//!
//! - width: 3
//! - height: 2
//! - color-format: hex-rgba
//!
//! ## palette
//!
//! - !: ffff00ff
//! - ": 000000ff
//!
//! ## raster
//!
//! ```
//! "!"
//! !!!
//! ```
//! ~~~
//!
//! ### Usage
//!
//! The [`Document`] is the in-memory model every conversion goes through. It can be parsed from
//! text, built from an RGBA [`Bitmap`], and rendered back to a bitmap, to text, or to a list of
//! filled rectangles ([`VectorImage`]) that serializes to SVG.
//!
//! #### Converting a bitmap to a TRG document
//!
//! ```rust
//! use image::Rgba;
//! use libtrg::{Bitmap, Document, PalettePolicy};
//!
//! fn main() -> anyhow::Result<()> {
//!     let red = Rgba([255, 0, 0, 255]);
//!     let blue = Rgba([0, 0, 255, 255]);
//!     let bitmap = Bitmap::new(2, 1, vec![red, blue])?;
//!
//!     let doc = Document::from_bitmap(&bitmap, "two pixels", PalettePolicy::Strict)?;
//!     assert_eq!(doc.raster, vec!["!\"".to_owned()]);
//!     println!("{doc}");
//!     Ok(())
//! }
//! ```
//!
//! #### Rendering a TRG document
//!
//! ```rust
//! use libtrg::{Document, PalettePolicy};
//!
//! fn main() -> anyhow::Result<()> {
//!     let text = "# dot\n\n## properties\n\n- color-format: hex-rgba\n\n\
//!                 ## palette\n\n- x: 102030ff\n\n## raster\n\n```\nx\n```\n";
//!     let doc: Document = text.parse()?;
//!
//!     let bitmap = doc.to_bitmap(PalettePolicy::Strict)?;
//!     assert_eq!(bitmap.pixels(), &[image::Rgba([0x10, 0x20, 0x30, 0xff])]);
//!
//!     let svg = doc.to_vector(PalettePolicy::Strict)?.to_svg();
//!     assert!(svg.contains("<rect"));
//!     Ok(())
//! }
//! ```
//!
//! ### Palette policy
//!
//! A palette holds at most [`PALETTE_CAPACITY`] colors. Conversions take a [`PalettePolicy`]:
//! [`PalettePolicy::Strict`] turns palette overflow and unresolved raster characters into errors,
//! while [`PalettePolicy::Sloppy`] collapses overflow colors onto the last palette slot and
//! renders unresolved characters with the document background color.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Module containing the RGBA pixel grid and the bitmap adapter
pub mod bitmap;
mod color;
/// Module containing the document model
pub mod document;
mod error;
mod palette;
mod serde;
/// Module containing the rectangle-based vector representation
pub mod vector;

pub use bitmap::Bitmap;
pub use color::{format_hex_rgba, parse_hex_rgba, ColorFormat, TRANSPARENT};
pub use document::{properties::Properties, Document};
pub use error::{Error, Result};
pub use palette::{Palette, PaletteKey, PalettePolicy};
pub use vector::{Rect, VectorImage};

/// Re-export of the color type used for every pixel and palette entry
pub use image::Rgba;

/// First character code usable as a palette key (space)
pub const PALETTE_OFFSET: u8 = 0x20;
/// Number of palette slots, one per printable ASCII character
pub const PALETTE_CAPACITY: usize = 95;

// Delimits the raster block
const FENCE: &str = "```";
