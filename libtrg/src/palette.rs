use std::fmt::Display;

use image::Rgba;

use crate::{error::Error, PALETTE_CAPACITY, PALETTE_OFFSET};

/// How conversions react to palette problems
#[derive(Default, Debug, Eq, PartialEq, Copy, Clone)]
pub enum PalettePolicy {
    /// Palette overflow and unresolved raster characters are errors
    #[default]
    Strict,
    /// Overflow colors collapse onto [`PaletteKey::LAST`] and unresolved raster characters
    /// render with the document background color
    Sloppy,
}

/// A printable ASCII character (`0x20..=0x7e`) naming one palette slot
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct PaletteKey(u8);

impl PaletteKey {
    /// The highest palette slot (`~`), which absorbs overflow colors in sloppy mode
    pub const LAST: Self = Self(PALETTE_OFFSET + (PALETTE_CAPACITY as u8) - 1);
    /// The space character, conventionally left unassigned
    pub const SPACE: Self = Self(PALETTE_OFFSET);

    /// Index of this key into the palette table
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - PALETTE_OFFSET) as usize
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn from_index(index: usize) -> Self {
        debug_assert!(index < PALETTE_CAPACITY);
        Self(index as u8 + PALETTE_OFFSET)
    }
}

impl TryFrom<char> for PaletteKey {
    type Error = Error;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        u8::try_from(key)
            .ok()
            .filter(|code| (PALETTE_OFFSET..PALETTE_OFFSET + PALETTE_CAPACITY as u8).contains(code))
            .map(Self)
            .ok_or(Error::InvalidPaletteKey { key })
    }
}

impl From<PaletteKey> for char {
    fn from(value: PaletteKey) -> Self {
        Self::from(value.0)
    }
}

impl Display for PaletteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// A fixed-capacity table from palette keys to RGBA colors
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Palette {
    slots: [Option<Rgba<u8>>; PALETTE_CAPACITY],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Creates a palette with every slot unassigned
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; PALETTE_CAPACITY],
        }
    }

    /// Order in which [`Self::assign`] hands out slots: `!` through `~`, then space
    fn allocation_order() -> impl Iterator<Item = usize> {
        (1..PALETTE_CAPACITY).chain(std::iter::once(0))
    }

    /// Returns the key of `color`, allocating the next free slot if the color is new
    ///
    /// Colors are compared by exact RGBA equality. Returns [`None`] if the color is new and every
    /// slot is taken.
    pub fn assign(&mut self, color: Rgba<u8>) -> Option<PaletteKey> {
        if let Some(key) = self.search_color(color) {
            return Some(key);
        }
        let index = Self::allocation_order().find(|&i| self.slots[i].is_none())?;
        self.slots[index] = Some(color);
        Some(PaletteKey::from_index(index))
    }

    /// Returns the color assigned to `key`
    #[must_use]
    pub const fn get(&self, key: PaletteKey) -> Option<Rgba<u8>> {
        self.slots[key.index()]
    }

    /// Returns the color assigned to `key`, or [`None`] if `key` is unassigned or not a
    /// palette character
    #[must_use]
    pub fn lookup(&self, key: char) -> Option<Rgba<u8>> {
        PaletteKey::try_from(key).ok().and_then(|key| self.get(key))
    }

    /// Assigns `color` to `key`, returning the previous color
    pub fn set(&mut self, key: PaletteKey, color: Rgba<u8>) -> Option<Rgba<u8>> {
        self.slots[key.index()].replace(color)
    }

    /// Unassigns `key`, returning its color
    pub fn remove(&mut self, key: PaletteKey) -> Option<Rgba<u8>> {
        self.slots[key.index()].take()
    }

    /// Returns the lowest key holding `color`
    #[must_use]
    pub fn search_color(&self, color: Rgba<u8>) -> Option<PaletteKey> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(color))
            .map(PaletteKey::from_index)
    }

    /// Checks whether `key` has a color
    #[must_use]
    pub const fn contains_key(&self, key: PaletteKey) -> bool {
        self.slots[key.index()].is_some()
    }

    /// Iterates the assigned slots in ascending character order
    pub fn iter(&self) -> impl Iterator<Item = (PaletteKey, Rgba<u8>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|color| (PaletteKey::from_index(i), color)))
    }

    /// Returns the number of assigned slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Checks whether no slot is assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Rgba<u8> {
        Rgba([v, v, v, 255])
    }

    #[test]
    fn key_range_is_checked() {
        assert_eq!(PaletteKey::try_from(' ').map(char::from), Ok(' '));
        assert_eq!(PaletteKey::try_from('~').map(char::from), Ok('~'));
        assert_eq!(PaletteKey::LAST, PaletteKey::try_from('~').unwrap());
        assert_eq!(
            PaletteKey::try_from('\x7f'),
            Err(Error::InvalidPaletteKey { key: '\x7f' })
        );
        assert!(PaletteKey::try_from('\t').is_err());
        assert!(PaletteKey::try_from('é').is_err());
    }

    #[test]
    fn assign_starts_after_space_and_dedups() {
        let mut palette = Palette::new();
        assert_eq!(palette.assign(gray(1)).map(char::from), Some('!'));
        assert_eq!(palette.assign(gray(2)).map(char::from), Some('"'));
        assert_eq!(palette.assign(gray(1)).map(char::from), Some('!'));
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.lookup('"'), Some(gray(2)));
        assert_eq!(palette.lookup(' '), None);
    }

    #[test]
    fn assign_fills_holes_left_by_parsed_palettes() {
        let mut palette = Palette::new();
        palette.set(PaletteKey::try_from('"').unwrap(), gray(9));
        assert_eq!(palette.assign(gray(1)).map(char::from), Some('!'));
        assert_eq!(palette.assign(gray(2)).map(char::from), Some('#'));
    }

    #[test]
    fn capacity_is_95_with_space_last() {
        let mut palette = Palette::new();
        for v in 0..94 {
            assert_ne!(palette.assign(gray(v)), Some(PaletteKey::SPACE));
        }
        assert_eq!(palette.assign(gray(94)), Some(PaletteKey::SPACE));
        assert_eq!(palette.len(), PALETTE_CAPACITY);
        assert_eq!(palette.assign(gray(95)), None);
        // known colors still resolve once full
        assert_eq!(palette.assign(gray(93)), Some(PaletteKey::LAST));
    }

    #[test]
    fn iter_is_ascending() {
        let mut palette = Palette::new();
        palette.set(PaletteKey::try_from('z').unwrap(), gray(1));
        palette.set(PaletteKey::SPACE, gray(2));
        palette.set(PaletteKey::try_from('A').unwrap(), gray(3));
        let keys: String = palette.iter().map(|(k, _)| char::from(k)).collect();
        assert_eq!(keys, " Az");
        assert_eq!(palette.remove(PaletteKey::SPACE), Some(gray(2)));
        assert!(!palette.contains_key(PaletteKey::SPACE));
    }
}
