//! labelnode - lay out a scene-graph text label and print the result
//!
//! Loads a label style from TOML, applies command line overrides, builds the
//! label and prints its layout as JSON.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use labelnode_label::{LabelConfig, LabelNode, TextAlign};
use labelnode_text::{find_system_font, FontLoader};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out a text label and print its geometry", long_about = None)]
struct Args {
    /// Label style (TOML); defaults are used when omitted
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Label text, overrides the style
    #[arg(short, long)]
    text: Option<String>,

    /// Font file, overrides the style
    #[arg(long)]
    font: Option<String>,

    /// Use the first system font found when no font is configured
    #[arg(long)]
    system_font: bool,

    /// Character size, overrides the style
    #[arg(long)]
    font_size: Option<f32>,

    /// Alignment around the anchor, overrides the style
    #[arg(long, value_enum)]
    align: Option<AlignArg>,

    /// Anchor x, overrides the style
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f32>,

    /// Anchor y, overrides the style
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f32>,

    /// Include per-vertex geometry in the output
    #[arg(long)]
    vertices: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlignArg {
    Left,
    Center,
    Right,
}

impl From<AlignArg> for TextAlign {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => TextAlign::Left,
            AlignArg::Center => TextAlign::Center,
            AlignArg::Right => TextAlign::Right,
        }
    }
}

fn main() -> Result<()> {
    // WARN by default, override with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = config_from_args(&args);

    let mut loader = FontLoader::default();
    let label = LabelNode::with_loader(config, &mut loader);
    info!(
        "Laid out {:?} with font '{}'",
        label.text(),
        label.face_name()
    );

    let report = report::LabelReport::new(&label, args.vertices);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialize label report")?;
    println!("{json}");
    Ok(())
}

fn config_from_args(args: &Args) -> LabelConfig {
    let mut config = match &args.style {
        Some(path) => LabelConfig::load_from_path(path),
        None => LabelConfig::default(),
    };

    if let Some(text) = &args.text {
        config.text = text.clone();
    }
    if let Some(font) = &args.font {
        config.font_path = font.clone();
    }
    if args.system_font && config.font_path.is_empty() {
        match find_system_font() {
            Ok(path) => config.font_path = path,
            Err(err) => warn!("{err}"),
        }
    }
    if let Some(size) = args.font_size {
        config.font_size = size;
    }
    if let Some(align) = args.align {
        config.align = align.into();
    }
    if let Some(x) = args.x {
        config.position.0 = x;
    }
    if let Some(y) = args.y {
        config.position.1 = y;
    }
    config
}
