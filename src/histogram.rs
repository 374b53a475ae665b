//! Frequency counting over a raster, and the size policy for that raster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{BYTES_PER_PIXEL, PIXEL_BOUNDARY};
use crate::error::{ExtractError, Result};
use crate::quantize::{Color, ColorBinPalette, color_from_rgba, hex_string};
use crate::raster::buffer_len;

/// A quantized color and how many pixels of the processed raster matched it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountedColor {
    pub color: Color,
    pub count: u32,
}

impl CountedColor {
    /// `#RRGGBB`, alpha dropped.
    pub fn hex(&self) -> String {
        hex_string(self.color)
    }
}

/// Occurrence counts per distinct quantized color.
///
/// Colors are keyed on their packed quantized RGBA bytes, never on floats.
/// Iteration yields colors in the order they were first met while scanning.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    index: HashMap<u32, usize>,
    entries: Vec<([u8; 4], u32)>,
}

impl ColorHistogram {
    /// Count every pixel of a `width` x `height` row-major RGBA8 buffer after
    /// quantizing it.
    ///
    /// Fails with [`ExtractError::DimensionMismatch`] unless `raw` holds exactly
    /// `width * height` pixels.
    pub fn from_rgba(raw: &[u8], width: u32, height: u32, palette: &ColorBinPalette) -> Result<Self> {
        if buffer_len(width, height) != Some(raw.len()) {
            return Err(ExtractError::DimensionMismatch {
                len: raw.len(),
                width,
                height,
            });
        }

        let mut histogram = Self::default();
        for chunk in raw.chunks_exact(BYTES_PER_PIXEL) {
            let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
            histogram.add(palette.quantize_rgba(pixel));
        }
        Ok(histogram)
    }

    fn add(&mut self, rgba: [u8; 4]) {
        let key = u32::from_be_bytes(rgba);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((rgba, 1));
            }
        }
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of pixels scanned.
    pub fn total_pixels(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| u64::from(count)).sum()
    }

    /// Count recorded for an already quantized RGBA value.
    pub fn count_of(&self, rgba: [u8; 4]) -> Option<u32> {
        self.index
            .get(&u32::from_be_bytes(rgba))
            .map(|&slot| self.entries[slot].1)
    }

    /// Counted colors in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = CountedColor> + '_ {
        self.entries.iter().map(|&(rgba, count)| CountedColor {
            color: color_from_rgba(rgba),
            count,
        })
    }
}

/// Dimensions a raster is processed at for histogram extraction.
///
/// Images above `PIXEL_BOUNDARY²` pixels are scaled so their larger side is
/// `PIXEL_BOUNDARY`, keeping the aspect ratio and truncating the other side.
/// Neither side drops below 1.
pub fn analysis_dimensions(width: u32, height: u32) -> (u32, u32) {
    let boundary = u64::from(PIXEL_BOUNDARY);
    if u64::from(width) * u64::from(height) <= boundary * boundary {
        return (width, height);
    }

    let longest = u64::from(width.max(height));
    let scale = |side: u32| ((u64::from(side) * boundary / longest) as u32).max(1);
    let scaled = (scale(width), scale(height));
    log::debug!("rescaling {width}x{height} to {}x{} for analysis", scaled.0, scaled.1);
    scaled
}
