use std::collections::{BTreeMap, BTreeSet};

/// Property key: image width in pixels
pub const WIDTH: &str = "width";
/// Property key: image height in raster lines
pub const HEIGHT: &str = "height";
/// Property key: encoding of color literals
pub const COLOR_FORMAT: &str = "color-format";
/// Property key: fill color for padding and unresolved characters
pub const BACKGROUND_COLOR: &str = "background-color";
/// Property key: whether raster lines carry a one character left pad
pub const INDENTED1S: &str = "indented1s";
/// Property key: vertical pixel multiplier
pub const LINESCALE: &str = "linescale";
/// Property key: horizontal size of one pixel in vector output
pub const SVG_PIXEL_WIDTH: &str = "svg-pixel-width";
/// Property key: vertical size of one pixel in vector output
pub const SVG_PIXEL_HEIGHT: &str = "svg-pixel-height";

/// Keys written first, in this order, when a document is serialized
pub const PREFERRED_ORDER: [&str; 3] = [WIDTH, HEIGHT, COLOR_FORMAT];

/// The `key: value` pairs of a document's properties section
///
/// Keys are unique. Unknown keys are kept verbatim.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    /// Creates an empty property list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns the value of `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets `key` to `value`, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Checks whether `key` is set
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether there are no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the properties in serialization order
    ///
    /// The keys of [`PREFERRED_ORDER`] come first, in that order, followed by every other key in
    /// lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let mut remaining: BTreeSet<&str> = self.values.keys().map(String::as_str).collect();
        let preferred: Vec<&str> = PREFERRED_ORDER
            .iter()
            .copied()
            .filter(|key| remaining.remove(*key))
            .collect();
        preferred
            .into_iter()
            .chain(remaining)
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Self::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_keys_come_first() {
        let properties: Properties = [
            ("height", "2"),
            ("custom", "x"),
            ("width", "3"),
            ("color-format", "hex-rgba"),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = properties.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["width", "height", "color-format", "custom"]);
    }

    #[test]
    fn remainder_is_sorted_and_missing_preferred_skipped() {
        let properties: Properties = [("zeta", "1"), ("height", "4"), ("alpha", "2")]
            .into_iter()
            .collect();
        let pairs: Vec<_> = properties.iter().collect();
        assert_eq!(pairs, [("height", "4"), ("alpha", "2"), ("zeta", "1")]);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut properties = Properties::new();
        assert_eq!(properties.insert(WIDTH, "1"), None);
        assert_eq!(properties.insert(WIDTH, "2"), Some("1".to_owned()));
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get(WIDTH), Some("2"));
    }
}
