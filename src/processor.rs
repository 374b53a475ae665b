//! The extraction pipeline: rescale, quantize and count, then select.

use image::DynamicImage;

use crate::error::Result;
use crate::filter::HistogramFilter;
use crate::histogram::{ColorHistogram, CountedColor, analysis_dimensions};
use crate::quantize::{Color, ColorBinPalette, color_from_rgba};
use crate::raster::Rasterizer;
use crate::select::select_colors;

/// Answers color queries about one image.
///
/// Every call is independent: the filter and bin table are rebuilt per call
/// and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ColorProcessor<R> {
    image: R,
}

impl ColorProcessor<DynamicImage> {
    /// Decode an encoded image (PNG, JPEG, ...) with the `image` crate.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(image::load_from_memory(bytes)?))
    }
}

impl<R: Rasterizer> ColorProcessor<R> {
    pub fn new(image: R) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &R {
        &self.image
    }

    /// Replace the image processed by later calls.
    pub fn set_image(&mut self, image: R) {
        self.image = image;
    }

    pub fn into_image(self) -> R {
        self.image
    }

    /// Size the image is rasterized at for histogram extraction.
    pub fn analysis_dimensions(&self) -> (u32, u32) {
        let (width, height) = self.image.dimensions();
        analysis_dimensions(width, height)
    }

    /// Count every quantized color of the (possibly rescaled) image.
    ///
    /// A rasterizer that cannot draw the image, or draws a buffer of the wrong
    /// size, yields an empty histogram.
    pub fn color_histogram(&self, filter: &HistogramFilter) -> ColorHistogram {
        let (width, height) = self.analysis_dimensions();
        let palette = ColorBinPalette::new(filter.precision_level);

        let Some(raw) = self.image.rasterize(width, height, filter.interpolation_quality) else {
            log::warn!("rasterizer produced no pixels for {width}x{height}");
            return ColorHistogram::default();
        };

        let histogram = match ColorHistogram::from_rgba(&raw, width, height, &palette) {
            Ok(histogram) => histogram,
            Err(err) => {
                log::warn!("discarding rasterized buffer: {err}");
                return ColorHistogram::default();
            }
        };
        log::debug!(
            "{} distinct colors over {} pixels at {:?} precision",
            histogram.len(),
            histogram.total_pixels(),
            filter.precision_level
        );
        histogram
    }

    /// Colors of the image and how often each occurs, filtered by `filter`.
    pub fn extract_histogram(&self, filter: &HistogramFilter) -> Vec<CountedColor> {
        let histogram = self.color_histogram(filter);
        select_colors(histogram.iter(), filter.ordering, filter.color_count)
    }

    /// Exact color of one pixel of the original image.
    ///
    /// Coordinates are floored; anything outside the original bounds, or not
    /// a number, gives `None`. No rescale or quantization is applied.
    pub fn query_color_at_pixel(&self, x: f64, y: f64) -> Option<Color> {
        let (width, height) = self.image.dimensions();
        let (x, y) = (x.floor(), y.floor());
        let in_bounds = x >= 0.0 && y >= 0.0 && x < f64::from(width) && y < f64::from(height);
        if !in_bounds {
            return None;
        }
        self.image.pixel(x as u32, y as u32).map(color_from_rgba)
    }
}
