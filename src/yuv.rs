//! The luma, chrominance (YUV) model.
//!
//! Luma is the weighted sum of the channels. U and V are the blue and red
//! differences from luma, scaled so that pure blue has `U = U_MAX` and pure
//! red has `V = V_MAX`. Both directions are a single matrix multiplication.

use tracing::trace;

use crate::color::{Component, Components};
use crate::math::{transform, transform_3x3, Transform};
use crate::weights::RgbWeights;

/// The largest magnitude of U for colors inside the RGB cube.
pub const U_MAX: Component = 0.436;

/// The largest magnitude of V for colors inside the RGB cube.
pub const V_MAX: Component = 0.615;

/// What to do with RGB results that fall outside of [0..1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClampMode {
    /// Clamp each channel into [0..1].
    #[default]
    Clamp,
    /// Return the channels as computed.
    Unclamped,
}

#[rustfmt::skip]
fn rgb_to_yuv_transform(weights: &RgbWeights) -> Transform {
    let Components(wr, wg, wb) = weights.to_components();
    let u = U_MAX / (1.0 - wb);
    let v = V_MAX / (1.0 - wr);

    transform_3x3(
        wr, -u * wr,         v * (1.0 - wr),
        wg, -u * wg,         -v * wg,
        wb, u * (1.0 - wb),  -v * wb,
    )
}

#[rustfmt::skip]
fn yuv_to_rgb_transform(weights: &RgbWeights) -> Transform {
    let Components(wr, wg, wb) = weights.to_components();
    let u = (1.0 - wb) / U_MAX;
    let v = (1.0 - wr) / V_MAX;

    transform_3x3(
        1.0, 1.0,           1.0,
        0.0, -u * wb / wg,  u,
        v,   -v * wr / wg,  0.0,
    )
}

/// Convert a color from RGB to YUV. Returns `(luma, u, v)`.
pub fn rgb_to_yuv(
    red: Component,
    green: Component,
    blue: Component,
    weights: RgbWeights,
) -> Components {
    transform(&rgb_to_yuv_transform(&weights), Components(red, green, blue))
}

/// Convert a color from YUV to RGB.
///
/// Changing the luma of a color can push it out of the RGB cube, e.g. there
/// is no blue brighter than pure blue with the same chrominance. `clamp`
/// decides whether such results are clamped into [0..1] or returned as is.
pub fn yuv_to_rgb(
    luma: Component,
    u: Component,
    v: Component,
    weights: RgbWeights,
    clamp: ClampMode,
) -> Components {
    let rgb = transform(&yuv_to_rgb_transform(&weights), Components(luma, u, v));

    match clamp {
        ClampMode::Unclamped => rgb,
        ClampMode::Clamp => {
            let clipped = rgb.out_of_unit_range();
            if !clipped.is_empty() {
                trace!(?rgb, ?clipped, "clamping yuv conversion into rgb gamut");
            }
            rgb.clamp_unit()
        }
    }
}
