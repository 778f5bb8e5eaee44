/// Demonstrates how to render a TRG [`Document`] as SVG, and as png using the [`image`] crate
///
use libtrg::{Document, PalettePolicy};

fn main() -> anyhow::Result<()> {
    let mut doc = Document::from_file("../test_assets/sprite.md")?;
    doc.properties.insert("svg-pixel-width", "10");
    doc.properties.insert("svg-pixel-height", "5");

    let vector = doc.to_vector(PalettePolicy::Strict)?;
    std::fs::write("trg_to_svg_example.svg", vector.to_svg())?;

    doc.to_bitmap(PalettePolicy::Strict)?
        .into_rgba_image()
        .save("trg_to_svg_example.png")?;
    Ok(())
}
