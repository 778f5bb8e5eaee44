use strum::{Display, EnumString, IntoStaticStr};

/// The `## <name>` sections of a document, in the order they must appear
#[derive(EnumString, IntoStaticStr, Display, PartialEq, Eq, Debug, Copy, Clone)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Properties,
    Palette,
    Raster,
}

impl Section {
    pub fn heading(self) -> String {
        format!("## {self}")
    }
}
