/// Demonstrates how to create a TRG [`Document`] from a png file
/// using the [`image`] crate
///
/// Usage: `cargo run --example png_to_trg -- <image.png>`
use anyhow::Context;
use libtrg::{Bitmap, Document, PalettePolicy};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("expected the path of an image")?;
    let img = image::open(&path).with_context(|| format!("Failed to open {path}"))?;

    let bitmap = Bitmap::from(img);
    let doc = Document::from_bitmap(&bitmap, &path, PalettePolicy::Strict)
        .context("too many colors for a TRG palette, try PalettePolicy::Sloppy")?;
    println!("{} colors in a {}x{} raster", doc.palette.len(), bitmap.width(), bitmap.height());

    doc.to_file("png_to_trg_example.md")?;
    Ok(())
}
