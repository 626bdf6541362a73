//! The hue, chroma, luma (HCY) model.
//!
//! HCY is GLHS with direct RGB weights: luma is the weighted sum of the
//! channels, chroma is GLHS saturation measured against that luma.

use crate::color::{Component, Components};
use crate::glhs::{glhs_to_rgb, rgb_to_glhs};
use crate::weights::RgbWeights;

/// Convert a color from RGB to HCY. Returns `(hue, chroma, luma)`.
pub fn rgb_to_hcy(
    red: Component,
    green: Component,
    blue: Component,
    weights: RgbWeights,
) -> Components {
    let Components(luma, hue, chroma) = rgb_to_glhs(red, green, blue, weights);
    Components(hue, chroma, luma)
}

/// Convert a color from HCY to RGB. Results are not clamped.
pub fn hcy_to_rgb(
    hue: Component,
    chroma: Component,
    luma: Component,
    weights: RgbWeights,
) -> Components {
    glhs_to_rgb(luma, hue, chroma, weights)
}
