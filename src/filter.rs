//! Histogram filter: the immutable configuration of one extraction call.
//!
//! A filter picks the quantization precision, how many colors to return and
//! in which frequency order, plus the interpolation quality handed to the
//! rasterizer when the image has to be scaled down first.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// How coarsely channel values are binned before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionLevel {
    /// Lossless: every 8-bit value keeps its own bin.
    Absolute,
    /// 16 values per bin.
    High,
    /// 32 values per bin.
    Mid,
    /// 64 values per bin, fewest distinct colors.
    Low,
}

impl PrecisionLevel {
    /// Width of one bin in 8-bit channel units.
    pub const fn bin_range(self) -> u32 {
        match self {
            PrecisionLevel::Absolute => 1,
            PrecisionLevel::High => 16,
            PrecisionLevel::Mid => 32,
            PrecisionLevel::Low => 64,
        }
    }
}

impl FromStr for PrecisionLevel {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(PrecisionLevel::Absolute),
            "high" => Ok(PrecisionLevel::High),
            "mid" | "medium" => Ok(PrecisionLevel::Mid),
            "low" => Ok(PrecisionLevel::Low),
            _ => Err(ExtractError::InvalidOption {
                option: "precision level",
                value: s.to_string(),
            }),
        }
    }
}

/// Upper bound on the number of colors returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCount {
    #[default]
    Unlimited,
    Limit(NonZeroUsize),
}

impl ColorCount {
    /// Map a raw requested count, where zero or a negative value means no limit.
    pub fn from_requested(n: i64) -> Self {
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map_or(ColorCount::Unlimited, ColorCount::Limit)
    }

    /// Number of colors to return out of `distinct` candidates.
    pub fn resolve(self, distinct: usize) -> usize {
        match self {
            ColorCount::Unlimited => distinct,
            ColorCount::Limit(n) => n.get().min(distinct),
        }
    }
}

impl From<Option<u32>> for ColorCount {
    fn from(value: Option<u32>) -> Self {
        value.map_or(ColorCount::Unlimited, |n| Self::from_requested(n.into()))
    }
}

impl fmt::Display for ColorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCount::Unlimited => f.write_str("unlimited"),
            ColorCount::Limit(n) => write!(f, "{n}"),
        }
    }
}

/// Frequency order of the returned colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Least frequent first.
    Ascending,
    /// Most frequent first.
    Descending,
    /// No sort; tie-groups follow first-seen scan order.
    #[default]
    #[serde(alias = "none")]
    Unordered,
}

impl FromStr for SortOrder {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            "none" | "unordered" | "" => Ok(SortOrder::Unordered),
            _ => Err(ExtractError::InvalidOption {
                option: "ordering",
                value: s.to_string(),
            }),
        }
    }
}

/// Resampling quality the rasterizer uses when it scales an image down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationQuality {
    #[serde(alias = "none")]
    Nearest,
    Low,
    Medium,
    High,
    #[default]
    Default,
}

impl InterpolationQuality {
    /// Resampling filter used by the `image` based rasterizers.
    pub fn filter_type(self) -> FilterType {
        match self {
            InterpolationQuality::Nearest => FilterType::Nearest,
            InterpolationQuality::Low => FilterType::Triangle,
            InterpolationQuality::Medium | InterpolationQuality::Default => FilterType::CatmullRom,
            InterpolationQuality::High => FilterType::Lanczos3,
        }
    }
}

impl FromStr for InterpolationQuality {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "nearest" => Ok(InterpolationQuality::Nearest),
            "low" => Ok(InterpolationQuality::Low),
            "medium" => Ok(InterpolationQuality::Medium),
            "high" => Ok(InterpolationQuality::High),
            "default" => Ok(InterpolationQuality::Default),
            _ => Err(ExtractError::InvalidOption {
                option: "interpolation quality",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for one histogram extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramFilter {
    pub precision_level: PrecisionLevel,
    #[serde(default)]
    pub color_count: ColorCount,
    #[serde(default)]
    pub ordering: SortOrder,
    #[serde(default)]
    pub interpolation_quality: InterpolationQuality,
}

impl Default for HistogramFilter {
    fn default() -> Self {
        Self::for_large_color_distributions(ColorCount::Unlimited, SortOrder::Unordered)
    }
}

impl HistogramFilter {
    pub fn new(
        precision_level: PrecisionLevel,
        interpolation_quality: InterpolationQuality,
        color_count: ColorCount,
        ordering: SortOrder,
    ) -> Self {
        Self {
            precision_level,
            color_count,
            ordering,
            interpolation_quality,
        }
    }

    /// Images with few distinct colors, such as logos and flat artwork.
    pub fn for_small_color_distributions(color_count: ColorCount, ordering: SortOrder) -> Self {
        Self::new(PrecisionLevel::Absolute, InterpolationQuality::Medium, color_count, ordering)
    }

    pub fn for_medium_color_distributions(color_count: ColorCount, ordering: SortOrder) -> Self {
        Self::new(PrecisionLevel::High, InterpolationQuality::High, color_count, ordering)
    }

    /// Photographs and other images with wide color variance.
    pub fn for_large_color_distributions(color_count: ColorCount, ordering: SortOrder) -> Self {
        Self::new(PrecisionLevel::Mid, InterpolationQuality::High, color_count, ordering)
    }

    pub fn precision_level(mut self, level: PrecisionLevel) -> Self {
        self.precision_level = level;
        self
    }

    pub fn color_count(mut self, count: ColorCount) -> Self {
        self.color_count = count;
        self
    }

    pub fn ordering(mut self, ordering: SortOrder) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn interpolation_quality(mut self, quality: InterpolationQuality) -> Self {
        self.interpolation_quality = quality;
        self
    }
}
