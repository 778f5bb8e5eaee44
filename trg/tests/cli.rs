use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use image::{Rgba, RgbaImage};
use mktemp::Temp;

const TRG: &str = env!("CARGO_BIN_EXE_trg");

fn path_in(dir: &Temp, name: &str) -> PathBuf {
    let dir: &Path = dir.as_ref();
    dir.join(name)
}

fn trg(args: &[&Path]) -> Command {
    let mut cmd = Command::new(TRG);
    cmd.args(args);
    cmd
}

fn checkerboard() -> RgbaImage {
    RgbaImage::from_fn(4, 3, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 128])
        }
    })
}

#[test]
fn image_to_text_and_back() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let png = path_in(&dir, "board.png");
    let txt = path_in(&dir, "board.md");
    let svg = path_in(&dir, "board.svg");
    let back = path_in(&dir, "back.png");
    checkerboard().save(&png)?;

    let status = Command::new(TRG)
        .arg("--img-in")
        .arg(&png)
        .arg("--txt-out")
        .arg(&txt)
        .arg("--svg-out")
        .arg(&svg)
        .status()?;
    assert!(status.success());

    let text = fs::read_to_string(&txt)?;
    assert!(text.starts_with("# board.png\n"));
    assert!(text.contains("\n!\"!\"\n\"!\"!\n!\"!\"\n"));
    let svg_text = fs::read_to_string(&svg)?;
    assert_eq!(svg_text.matches("<rect").count(), 12);
    assert!(svg_text.contains("fill:rgba(0,0,0,"));

    let status = Command::new(TRG)
        .arg("--txt-in")
        .arg(&txt)
        .arg("--img-out")
        .arg(&back)
        .status()?;
    assert!(status.success());
    assert_eq!(image::open(&back)?.into_rgba8(), checkerboard());
    Ok(())
}

#[test]
fn title_overrides_file_name() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let png = path_in(&dir, "board.png");
    let txt = path_in(&dir, "board.md");
    checkerboard().save(&png)?;

    let status = Command::new(TRG)
        .args(["--title", "Checkers"])
        .arg("--img-in")
        .arg(&png)
        .arg("--txt-out")
        .arg(&txt)
        .status()?;
    assert!(status.success());
    assert!(fs::read_to_string(&txt)?.starts_with("# Checkers\n"));
    Ok(())
}

#[test]
fn overflow_error_names_the_source_file() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let png = path_in(&dir, "many.png");
    let txt = path_in(&dir, "many.md");
    RgbaImage::from_fn(96, 1, |x, _| Rgba([x as u8, 0, 0, 255])).save(&png)?;

    let output = Command::new(TRG)
        .args(["--title", "Palette test"])
        .arg("--img-in")
        .arg(&png)
        .arg("--txt-out")
        .arg(&txt)
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("many.png"), "{stderr}");
    assert!(stderr.contains("Palette test"), "{stderr}");
    assert!(!txt.exists());
    Ok(())
}

#[test]
fn requires_an_output() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let png = path_in(&dir, "board.png");
    checkerboard().save(&png)?;
    let output = trg(&[Path::new("--img-in"), png.as_path()]).output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn rejects_two_inputs() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let png = path_in(&dir, "board.png");
    let txt = path_in(&dir, "board.md");
    let svg = path_in(&dir, "board.svg");
    let output = trg(&[
        Path::new("--img-in"),
        png.as_path(),
        Path::new("--txt-in"),
        txt.as_path(),
        Path::new("--svg-out"),
        svg.as_path(),
    ])
    .output()?;
    assert!(!output.status.success());
    assert!(!svg.exists());
    Ok(())
}

#[test]
fn strict_palette_rejects_unknown_keys() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let txt = path_in(&dir, "bad.md");
    let svg = path_in(&dir, "bad.svg");
    fs::write(
        &txt,
        "# Bad\n\n## properties\n\n- color-format: hex-rgba\n\n## palette\n\n- !: ff0000ff\n\n## raster\n\n```\n!?\n```\n",
    )?;

    let strict = trg(&[
        Path::new("--txt-in"),
        txt.as_path(),
        Path::new("--svg-out"),
        svg.as_path(),
    ]).output()?;
    assert!(!strict.status.success());

    let status = Command::new(TRG)
        .arg("--sloppy-palette")
        .arg("--txt-in")
        .arg(&txt)
        .arg("--svg-out")
        .arg(&svg)
        .status()?;
    assert!(status.success());
    assert_eq!(fs::read_to_string(&svg)?.matches("<rect").count(), 2);
    Ok(())
}
