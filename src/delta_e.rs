//! Perceptual color difference.
//!
//! Colors are converted analytically from sRGB through CIE XYZ to CIE L*a*b*
//! (D65 white, 2° observer) and compared with the CIE94 formula using the
//! graphic arts weights.

use palette::Lab;
use serde::{Deserialize, Serialize};

use crate::constants::{D65_WHITE_POINT_XYZ, LAB_EPSILON, LAB_KAPPA, cie94};
use crate::quantize::{Color, hex_string};

/// Closest candidate found by [`nearest_color`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestColor {
    pub color: Color,
    pub delta_e: f32,
}

impl NearestColor {
    pub fn hex(&self) -> String {
        hex_string(self.color)
    }
}

fn srgb_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

/// sRGB → XYZ, sRGB primaries with D65 white.
fn srgb_to_xyz(color: Color) -> [f32; 3] {
    let r = srgb_to_linear(color.red);
    let g = srgb_to_linear(color.green);
    let b = srgb_to_linear(color.blue);

    [
        0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b,
        0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b,
        0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b,
    ]
}

/// Convert a color to CIE L*a*b*. Alpha is ignored.
pub fn to_lab(color: Color) -> Lab {
    let [x, y, z] = srgb_to_xyz(color);
    let fx = lab_f(x / D65_WHITE_POINT_XYZ[0]);
    let fy = lab_f(y / D65_WHITE_POINT_XYZ[1]);
    let fz = lab_f(z / D65_WHITE_POINT_XYZ[2]);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE94 difference between two L*a*b* colors.
///
/// Not symmetric: chroma weighting uses the first color as reference.
pub fn delta_e_lab(reference: Lab, sample: Lab) -> f32 {
    let delta_l = reference.l - sample.l;
    let delta_a = reference.a - sample.a;
    let delta_b = reference.b - sample.b;

    let c1 = (reference.a * reference.a + reference.b * reference.b).sqrt();
    let c2 = (sample.a * sample.a + sample.b * sample.b).sqrt();
    let delta_c = c1 - c2;

    let delta_h = (delta_a * delta_a + delta_b * delta_b - delta_c * delta_c)
        .max(0.0)
        .sqrt();

    let sc = 1.0 + cie94::K1 * c1;
    let sh = 1.0 + cie94::K2 * c1;

    let term_l = delta_l / (cie94::KL * cie94::SL);
    let term_c = delta_c / (cie94::KC * sc);
    let term_h = delta_h / (cie94::KH * sh);

    (term_l * term_l + term_c * term_c + term_h * term_h)
        .max(0.0)
        .sqrt()
}

/// CIE94 difference between two colors.
pub fn delta_e(reference: Color, sample: Color) -> f32 {
    delta_e_lab(to_lab(reference), to_lab(sample))
}

/// The candidate perceptually closest to `target`.
///
/// Returns `None` only when `candidates` is empty. Equal distances keep the
/// earliest candidate.
pub fn nearest_color<I>(target: Color, candidates: I) -> Option<NearestColor>
where
    I: IntoIterator<Item = Color>,
{
    let target_lab = to_lab(target);
    let mut best: Option<NearestColor> = None;

    for candidate in candidates {
        let delta = delta_e_lab(target_lab, to_lab(candidate));
        let closer = best.as_ref().is_none_or(|b| delta < b.delta_e);
        if closer {
            best = Some(NearestColor {
                color: candidate,
                delta_e: delta,
            });
        }
    }

    best
}
