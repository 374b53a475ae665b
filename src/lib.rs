//! Color histograms and perceptual nearest-color search.
//!
//! An image is drawn into an RGBA8 buffer (scaled down to at most 300×300
//! worth of pixels), every pixel is binned per channel according to a
//! [`PrecisionLevel`], identical binned colors are counted, and the counts are
//! ranked by frequency with whole tie-groups kept together where the limit
//! allows. Independently, [`nearest_color`] finds the closest color from a
//! candidate list using CIE94 ΔE, and [`ColorProcessor::query_color_at_pixel`]
//! reads one unmodified pixel.
//!
//! ```no_run
//! use color_histogram::{ColorCount, ColorProcessor, HistogramFilter, SortOrder};
//!
//! let bytes = std::fs::read("logo.png")?;
//! let processor = ColorProcessor::from_encoded(&bytes)?;
//! let filter = HistogramFilter::for_small_color_distributions(
//!     ColorCount::from_requested(5),
//!     SortOrder::Descending,
//! );
//! for counted in processor.extract_histogram(&filter) {
//!     println!("{} {}", counted.hex(), counted.count);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod delta_e;
pub mod error;
pub mod filter;
pub mod histogram;
pub mod processor;
pub mod quantize;
pub mod raster;
pub mod select;

pub use delta_e::{NearestColor, delta_e, delta_e_lab, nearest_color, to_lab};
pub use error::{ExtractError, Result};
pub use filter::{ColorCount, HistogramFilter, InterpolationQuality, PrecisionLevel, SortOrder};
pub use histogram::{ColorHistogram, CountedColor, analysis_dimensions};
pub use processor::ColorProcessor;
pub use quantize::{Color, ColorBinPalette, color_from_rgba, hex_string, parse_hex_color};
pub use raster::{Rasterizer, RgbaRaster};
pub use select::select_colors;

// ------------------------------------------------------------
// JavaScript entry points
// ------------------------------------------------------------

fn js_error(err: ExtractError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Extract a color histogram from an encoded image.
///
/// `color_count <= 0` means no limit. Returns an array of
/// `{ hex, count }` objects.
#[wasm_bindgen(js_name = extractHistogram)]
pub fn extract_histogram_js(
    input: Vec<u8>,
    precision: String,
    color_count: i32,
    ordering: String,
) -> std::result::Result<Array, JsValue> {
    let precision: PrecisionLevel = precision.parse().map_err(js_error)?;
    let ordering: SortOrder = ordering.parse().map_err(js_error)?;
    let filter = HistogramFilter::default()
        .precision_level(precision)
        .color_count(ColorCount::from_requested(color_count.into()))
        .ordering(ordering);

    let processor = ColorProcessor::from_encoded(&input).map_err(js_error)?;

    let result = Array::new();
    for counted in processor.extract_histogram(&filter) {
        let entry = Object::new();
        Reflect::set(&entry, &JsValue::from_str("hex"), &JsValue::from_str(&counted.hex()))?;
        Reflect::set(&entry, &JsValue::from_str("count"), &JsValue::from(counted.count))?;
        result.push(&entry);
    }
    Ok(result)
}

/// Hex color of one pixel of an encoded image, or `undefined` out of bounds.
#[wasm_bindgen(js_name = queryPixel)]
pub fn query_pixel_js(input: Vec<u8>, x: f64, y: f64) -> std::result::Result<Option<String>, JsValue> {
    let processor = ColorProcessor::from_encoded(&input).map_err(js_error)?;
    Ok(processor.query_color_at_pixel(x, y).map(hex_string))
}

/// Closest of `candidates` (hex strings) to `target`, as `{ hex, deltaE }`,
/// or `null` when there are no candidates.
#[wasm_bindgen(js_name = nearestColor)]
pub fn nearest_color_js(target: String, candidates: Array) -> std::result::Result<JsValue, JsValue> {
    let target = parse_hex_color(&target).map_err(js_error)?;

    let mut colors = Vec::with_capacity(candidates.length() as usize);
    for value in candidates.iter() {
        let hex = value
            .as_string()
            .ok_or_else(|| JsValue::from_str("Candidate values must be strings"))?;
        colors.push(parse_hex_color(&hex).map_err(js_error)?);
    }

    let Some(found) = nearest_color(target, colors) else {
        return Ok(JsValue::NULL);
    };

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("hex"), &JsValue::from_str(&found.hex()))?;
    Reflect::set(&result, &JsValue::from_str("deltaE"), &JsValue::from(found.delta_e))?;
    Ok(result.into())
}
