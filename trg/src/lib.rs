use std::{fs, path::Path};

use anyhow::{Context, Result};
use libtrg::{Bitmap, Document, PalettePolicy};
use tracing::{debug, info, instrument};

/// Title given to a document imported from `image_file` when none is provided
pub fn default_title(image_file: &Path) -> String {
    image_file
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| libtrg::document::DEFAULT_TITLE.to_owned(), str::to_owned)
}

#[instrument]
pub fn read_text(txt_file: &Path) -> Result<Document> {
    let doc = Document::from_file(txt_file)?;
    debug!("Document has {} raster lines", doc.raster.len());
    Ok(doc)
}

#[instrument]
pub fn read_image(
    image_file: &Path,
    title: Option<&str>,
    policy: PalettePolicy,
) -> Result<Document> {
    let img = image::open(image_file)
        .with_context(|| format!("Failed to open image {}", image_file.display()))?;
    let bitmap = Bitmap::from(img);
    debug!("Decoded {}x{} image", bitmap.width(), bitmap.height());

    let title = title.map_or_else(|| default_title(image_file), str::to_owned);
    let doc = Document::from_bitmap(&bitmap, title, policy)
        .with_context(|| format!("Failed to import image {}", image_file.display()))?;
    info!("Imported {} palette entries", doc.palette.len());
    Ok(doc)
}

#[instrument(skip(doc))]
pub fn write_text(doc: &Document, output_name: &Path) -> Result<()> {
    doc.to_file(output_name)
        .with_context(|| format!("Failed to write {}", output_name.display()))?;
    info!("Wrote TRG document to {}", output_name.display());
    Ok(())
}

#[instrument(skip(doc))]
pub fn write_image(doc: &Document, output_name: &Path, policy: PalettePolicy) -> Result<()> {
    let bitmap = doc.to_bitmap(policy)?;
    info!(
        "Writing {}x{} image to {}",
        bitmap.width(),
        bitmap.height(),
        output_name.display()
    );
    image::save_buffer(
        output_name,
        &bitmap.to_rgba8_bytes(),
        bitmap.width(),
        bitmap.height(),
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write image {}", output_name.display()))?;
    Ok(())
}

#[instrument(skip(doc))]
pub fn write_svg(doc: &Document, output_name: &Path, policy: PalettePolicy) -> Result<()> {
    let vector = doc.to_vector(policy)?;
    debug!("Vector image has {} rects", vector.rects.len());
    fs::write(output_name, vector.to_svg())
        .with_context(|| format!("Failed to write SVG {}", output_name.display()))?;
    info!("Wrote SVG to {}", output_name.display());
    Ok(())
}
