use libtrg::PalettePolicy;
use std::path::PathBuf;
use tracing::{info, Level};
use trg::{read_image, read_text, write_image, write_svg, write_text};

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

/// Converts between Textual Raster Graphics documents, images and SVG
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["txt_in", "img_in"])))]
#[command(group(
    ArgGroup::new("output")
        .required(true)
        .multiple(true)
        .args(["txt_out", "img_out", "svg_out"])
))]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Read a TRG text document
    #[arg(long)]
    txt_in: Option<PathBuf>,

    /// Read an image (any format the image crate decodes)
    #[arg(long)]
    img_in: Option<PathBuf>,

    /// Write the document as TRG text
    #[arg(long)]
    txt_out: Option<PathBuf>,

    /// Write the document as an image, format chosen by extension
    #[arg(long)]
    img_out: Option<PathBuf>,

    /// Write the document as SVG
    #[arg(long)]
    svg_out: Option<PathBuf>,

    /// Collapse palette overflow onto '~' and draw unknown keys as background
    #[arg(long)]
    sloppy_palette: bool,

    /// Title for a document read from an image (defaults to the file name)
    #[arg(long, requires = "img_in")]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    let policy = if cli.sloppy_palette {
        PalettePolicy::Sloppy
    } else {
        PalettePolicy::Strict
    };

    let doc = match (&cli.txt_in, &cli.img_in) {
        (Some(txt_file), _) => read_text(txt_file)?,
        (None, Some(img_file)) => read_image(img_file, cli.title.as_deref(), policy)?,
        (None, None) => bail!("No input given"),
    };
    info!("Loaded '{}'", doc.title);

    if let Some(output) = &cli.txt_out {
        write_text(&doc, output)?;
    }
    if let Some(output) = &cli.img_out {
        write_image(&doc, output, policy)?;
    }
    if let Some(output) = &cli.svg_out {
        write_svg(&doc, output, policy)?;
    }
    Ok(())
}
