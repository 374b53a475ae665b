use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use color_histogram::{
    ColorCount, ColorProcessor, CountedColor, HistogramFilter, InterpolationQuality,
    PrecisionLevel, SortOrder, hex_string, nearest_color, parse_hex_color,
};

/// Print the dominant colors of images, query single pixels, or find the
/// perceptually closest color in a palette.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image paths
    inputs: Vec<PathBuf>,

    /// Quantization precision: absolute, high, mid or low
    #[arg(short, long)]
    precision: Option<PrecisionLevel>,

    /// Maximum number of colors; zero or negative means all
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Frequency order: ascending, descending or none
    #[arg(short, long)]
    order: Option<SortOrder>,

    /// Resampling quality for large images: none, low, medium, high or default
    #[arg(short, long)]
    quality: Option<InterpolationQuality>,

    /// JSON file holding a full histogram filter; other flags override it
    #[arg(long)]
    filter: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Print the color at X,Y instead of the histogram
    #[arg(long, value_name = "X,Y")]
    pixel: Option<String>,

    /// Find the closest of --candidates to this hex color
    #[arg(long, value_name = "HEX", requires = "candidates", conflicts_with_all = ["inputs", "pixel"])]
    nearest: Option<String>,

    /// Comma-separated hex colors searched by --nearest
    #[arg(long, value_name = "HEX,HEX,...")]
    candidates: Option<String>,
}

#[derive(Serialize)]
struct ColorEntry {
    hex: String,
    count: u32,
}

impl From<CountedColor> for ColorEntry {
    fn from(counted: CountedColor) -> Self {
        Self {
            hex: counted.hex(),
            count: counted.count,
        }
    }
}

#[derive(Serialize)]
struct ImageReport<'a> {
    image: &'a Path,
    colors: Vec<ColorEntry>,
}

#[derive(Serialize)]
struct PixelReport<'a> {
    image: &'a Path,
    x: f64,
    y: f64,
    /// `None` when the point lies outside the image.
    hex: Option<String>,
}

fn build_filter(args: &Args) -> Result<HistogramFilter> {
    let mut filter = match &args.filter {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read filter {}", path.display()))?;
            serde_json::from_str(&text).context("invalid filter JSON")?
        }
        None => HistogramFilter::default(),
    };
    if let Some(level) = args.precision {
        filter = filter.precision_level(level);
    }
    if let Some(n) = args.count {
        filter = filter.color_count(ColorCount::from_requested(n));
    }
    if let Some(ordering) = args.order {
        filter = filter.ordering(ordering);
    }
    if let Some(quality) = args.quality {
        filter = filter.interpolation_quality(quality);
    }
    Ok(filter)
}

fn parse_point(text: &str) -> Result<(f64, f64)> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("expected X,Y but got {text:?}"))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn run_nearest(target: &str, candidates: &str, json: bool) -> Result<()> {
    let target = parse_hex_color(target)?;
    let palette = candidates
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse_hex_color)
        .collect::<color_histogram::Result<Vec<_>>>()?;

    match nearest_color(target, palette) {
        Some(found) if json => {
            let value = serde_json::json!({ "hex": found.hex(), "delta_e": found.delta_e });
            println!("{value}");
        }
        Some(found) => println!("{} (ΔE {:.2})", found.hex(), found.delta_e),
        None if json => println!("null"),
        None => println!("no candidates"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(target) = &args.nearest {
        let candidates = args.candidates.as_deref().unwrap_or_default();
        return run_nearest(target, candidates, args.json);
    }
    if args.inputs.is_empty() {
        bail!("no input images given");
    }

    let filter = build_filter(&args)?;
    let point = args.pixel.as_deref().map(parse_point).transpose()?;
    log::debug!("using filter {filter:?}");

    let mut reports = Vec::new();
    let mut pixels = Vec::new();
    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
        let processor = ColorProcessor::from_encoded(&bytes)
            .with_context(|| format!("failed to decode {}", input.display()))?;

        if let Some((x, y)) = point {
            let report = PixelReport {
                image: input,
                x,
                y,
                hex: processor.query_color_at_pixel(x, y).map(hex_string),
            };
            if args.json {
                pixels.push(report);
            } else {
                match &report.hex {
                    Some(hex) => println!("{}: {hex}", input.display()),
                    None => println!("{}: ({x}, {y}) is out of bounds", input.display()),
                }
            }
            continue;
        }

        let colors = processor.extract_histogram(&filter);
        if args.json {
            reports.push(ImageReport {
                image: input,
                colors: colors.into_iter().map(ColorEntry::from).collect(),
            });
        } else {
            println!("{}", input.display());
            for counted in colors {
                println!("  {} {}", counted.hex(), counted.count);
            }
        }
    }

    if args.json && point.is_some() {
        println!("{}", serde_json::to_string_pretty(&pixels)?);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
