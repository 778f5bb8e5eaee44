use tracing::{debug, trace, warn};

use crate::{
    color::parse_hex_rgba,
    document::{properties::BACKGROUND_COLOR, Document},
    error::{Error, Result},
    palette::PaletteKey,
};

use super::{
    section::Section,
    utils::{
        is_blank, is_fence, parse_heading, parse_line, parse_palette_entry,
        parse_property_entry, parse_title,
    },
};

/// Walks the lines of a document, tracking 1-based line numbers for errors
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
        }
    }

    const fn line_number(&self) -> usize {
        self.pos + 1
    }

    fn error(&self, detail: impl Into<String>) -> Error {
        Error::parse(self.line_number(), detail)
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_blank(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.advance();
        }
    }

    /// Skips blank lines and returns the next line, which must exist
    fn expect_line(&mut self, expected: &str) -> Result<&'a str> {
        self.skip_blank();
        self.peek()
            .ok_or_else(|| self.error(format!("unexpected end of file, expected {expected}")))
    }

    /// Skips blank lines and returns the next entry line of the current section, stopping at
    /// the next `#` line or the end of the input
    fn next_entry(&mut self) -> Option<&'a str> {
        self.skip_blank();
        self.peek().filter(|line| !line.starts_with('#'))
    }

    fn expect_heading(&mut self, section: Section) -> Result<()> {
        let heading = section.heading();
        let line = self.expect_line(&format!("'{heading}'"))?;
        if parse_line(parse_heading, line) != Some(section) {
            return Err(self.error(format!("cannot find '{heading}' in: {line}")));
        }
        trace!("{heading} at line {}", self.line_number());
        self.advance();
        Ok(())
    }
}

/// Parses TRG text into a [`Document`]
pub(crate) fn parse_document(input: &str) -> Result<Document> {
    let mut lines = LineCursor::new(input);
    let mut doc = Document::empty();

    let line = lines.expect_line("title")?;
    let title = parse_line(parse_title, line)
        .ok_or_else(|| lines.error(format!("cannot match title in: {line}")))?;
    doc.title = title.to_owned();
    lines.advance();

    lines.expect_heading(Section::Properties)?;
    while let Some(line) = lines.next_entry() {
        let (key, value) = parse_line(parse_property_entry, line)
            .ok_or_else(|| lines.error(format!("unexpected property format: {line}")))?;
        if doc.properties.insert(key, value).is_some() {
            return Err(lines.error(format!("duplicate property '{key}'")));
        }
        lines.advance();
    }
    debug!("Read {} properties", doc.properties.len());

    lines.expect_heading(Section::Palette)?;
    while let Some(line) = lines.next_entry() {
        let (key, color) = parse_line(parse_palette_entry, line)
            .ok_or_else(|| lines.error(format!("unexpected palette entry format: {line}")))?;
        let key = PaletteKey::try_from(key).map_err(|e| lines.error(e.to_string()))?;
        if doc.palette.set(key, color).is_some() {
            return Err(lines.error(format!("duplicate palette entry '{key}'")));
        }
        lines.advance();
    }
    debug!("Read {} palette entries", doc.palette.len());

    doc.color_format()?;
    if let Some(value) = doc.properties.get(BACKGROUND_COLOR) {
        doc.background =
            parse_hex_rgba(value).ok_or_else(|| Error::invalid_property(BACKGROUND_COLOR, value))?;
    }
    let indented = doc.indented()?;

    lines.expect_heading(Section::Raster)?;
    let line = lines.expect_line("raster fence")?;
    if !is_fence(line) {
        return Err(lines.error(format!("cannot find raster fence in: {line}")));
    }
    lines.advance();
    loop {
        match lines.peek() {
            None => {
                warn!("Raster block is not closed, reading to end of file");
                break;
            }
            Some(line) if is_fence(line) => {
                lines.advance();
                break;
            }
            Some(line) => {
                let line = if indented {
                    line.chars().skip(1).collect()
                } else {
                    line.to_owned()
                };
                doc.raster.push(line);
                lines.advance();
            }
        }
    }
    debug!("Read {} raster lines", doc.raster.len());

    doc.validate()?;
    Ok(doc)
}
