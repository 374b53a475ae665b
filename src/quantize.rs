//! Per-channel color binning.
//!
//! Each of the red, green and blue channels is mapped independently onto a
//! small set of representative values. The same bin table serves all three
//! channels; alpha is never binned.

use palette::Srgba;

use crate::constants::CHANNEL_MAX;
use crate::error::{ExtractError, Result};
use crate::filter::PrecisionLevel;

/// A color with normalized `f32` channels in [0, 1].
pub type Color = Srgba;

/// Bin lookup table for one precision level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBinPalette {
    bin_range: u32,
    bins: Vec<u8>,
}

impl ColorBinPalette {
    /// Build the bin table for `level`.
    ///
    /// The first bin always maps to 0 and the last to 255, so pure black and
    /// pure white survive every precision level. Inner bins map to the
    /// midpoint of their `[start, start + bin_range)` span.
    pub fn new(level: PrecisionLevel) -> Self {
        Self::with_bin_range(level.bin_range())
    }

    fn with_bin_range(bin_range: u32) -> Self {
        let bin_count = (256 / bin_range) as usize;
        let last = bin_count - 1;
        let bins = (0..bin_count)
            .map(|index| match index {
                0 => 0,
                i if i == last => 255,
                i => {
                    let start = i as u32 * bin_range;
                    (start + bin_range / 2) as u8
                }
            })
            .collect();

        Self { bin_range, bins }
    }

    pub fn bin_range(&self) -> u32 {
        self.bin_range
    }

    /// Representative values indexed by bin.
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    #[inline]
    fn quantize_channel(&self, value: u8) -> u8 {
        self.bins[(value as u32 / self.bin_range) as usize]
    }

    /// Quantize one raw RGBA pixel. Alpha is returned untouched.
    #[inline]
    pub fn quantize_rgba(&self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
        [
            self.quantize_channel(r),
            self.quantize_channel(g),
            self.quantize_channel(b),
            a,
        ]
    }

    /// Quantize a normalized color.
    ///
    /// Channels are rounded to the nearest 8-bit value before binning so that
    /// colors decoded as `byte / 255` land in the bin of that byte.
    pub fn quantize(&self, color: Color) -> Color {
        let bin = |v: f32| self.quantize_channel(to_channel_byte(v)) as f32 / CHANNEL_MAX;
        Srgba::new(bin(color.red), bin(color.green), bin(color.blue), color.alpha)
    }
}

/// Convert a normalized channel to its nearest 8-bit value.
pub(crate) fn to_channel_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * CHANNEL_MAX).round() as u8
}

/// Decode 4 raw bytes into a normalized color.
pub fn color_from_rgba([r, g, b, a]: [u8; 4]) -> Color {
    let norm = |v: u8| v as f32 / CHANNEL_MAX;
    Srgba::new(norm(r), norm(g), norm(b), norm(a))
}

/// Parse `#RRGGBB` or `RRGGBB` into an opaque color.
pub fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || ExtractError::InvalidHex(hex.to_string());
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok(color_from_rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}

/// `#RRGGBB`, alpha dropped.
pub fn hex_string(color: Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        to_channel_byte(color.red),
        to_channel_byte(color.green),
        to_channel_byte(color.blue)
    )
}
