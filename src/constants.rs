//! Fixed values shared by the extraction pipeline and the color distance code.

/// Images with more pixels than `PIXEL_BOUNDARY²` are scaled down before counting.
pub const PIXEL_BOUNDARY: u32 = 300;

/// Bytes per pixel in every raster buffer (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest 8-bit channel value, used to normalize channels to [0, 1].
pub const CHANNEL_MAX: f32 = 255.0;

/// CIE standard illuminant D65 reference white in XYZ.
pub const D65_WHITE_POINT_XYZ: [f32; 3] = [0.95047, 1.0, 1.08883];

/// CIE L*a*b* linear segment threshold, 216/24389.
pub const LAB_EPSILON: f32 = 0.008_856_452;
/// CIE L*a*b* linear segment slope, 24389/27.
pub const LAB_KAPPA: f32 = 903.296_3;

/// CIE94 weights, graphic arts application.
pub mod cie94 {
    pub const KL: f32 = 1.0;
    pub const K1: f32 = 0.045;
    pub const K2: f32 = 0.015;
    pub const KC: f32 = 1.0;
    pub const KH: f32 = 1.0;
    pub const SL: f32 = 1.0;
}
