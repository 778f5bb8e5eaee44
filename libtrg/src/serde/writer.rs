use std::fmt::{Formatter, Result};

use crate::{
    color::format_hex_rgba,
    document::{properties::INDENTED1S, Document},
    FENCE,
};

use super::section::Section;

/// Writes `doc` as TRG text
///
/// Properties come out in [`crate::document::properties::PREFERRED_ORDER`] followed by the
/// remaining keys sorted, and palette entries in ascending character order, so equal documents
/// always produce identical text.
pub(crate) fn write_document(doc: &Document, f: &mut Formatter<'_>) -> Result {
    writeln!(f, "# {}", doc.title)?;
    writeln!(f)?;

    writeln!(f, "{}", Section::Properties.heading())?;
    writeln!(f)?;
    for (key, value) in doc.properties.iter() {
        writeln!(f, "- {key}: {value}")?;
    }
    writeln!(f)?;

    writeln!(f, "{}", Section::Palette.heading())?;
    writeln!(f)?;
    for (key, color) in doc.palette.iter() {
        writeln!(f, "- {key}: {}", format_hex_rgba(color))?;
    }
    writeln!(f)?;

    writeln!(f, "{}", Section::Raster.heading())?;
    writeln!(f)?;
    writeln!(f, "{FENCE}")?;
    // indented1s: one leading space per raster line
    let pad = if doc.properties.get(INDENTED1S) == Some("yes") {
        " "
    } else {
        ""
    };
    for line in &doc.raster {
        writeln!(f, "{pad}{line}")?;
    }
    writeln!(f, "{FENCE}")
}
