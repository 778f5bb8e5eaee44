#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use mktemp::Temp;

/// Hand written document using every optional property
pub const SPRITE_TRG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../test_assets/sprite.md");

/// An image with `n` distinct opaque colors, one per pixel
pub fn distinct_colors(n: u32) -> RgbaImage {
    RgbaImage::from_fn(n, 1, |x, _| {
        let [_, g, b, _] = x.to_be_bytes();
        Rgba([0x40, g, b, 0xff])
    })
}

/// Path of `name` inside a scratch directory
pub fn path_in(dir: &Temp, name: &str) -> PathBuf {
    let dir: &Path = dir.as_ref();
    dir.join(name)
}
