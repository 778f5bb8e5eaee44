mod reader;
mod section;
mod utils;
mod writer;

pub(crate) use reader::parse_document;
pub(crate) use writer::write_document;
