//! The generalized lightness, hue, saturation (GLHS) model.
//!
//! GLHS is a hexcone model where lightness is a weighted sum of the channels
//! of a color. The weights decide which classic model comes out:
//!
//! | Weighting                     | Model                      |
//! |-------------------------------|----------------------------|
//! | [`SortedWeights::HSV`]        | HSV (single hexcone)       |
//! | [`SortedWeights::HLS`]        | HLS (double hexcone)       |
//! | [`SortedWeights::HSI`]        | HSI                        |
//! | any [`RgbWeights`]            | HCY, see [`crate::rgb_to_hcy`] |
//!
//! Saturation is the distance from the grey of the same lightness, relative
//! to the most saturated color of the same hue and lightness that still fits
//! in the RGB cube.
//!
//! [`SortedWeights::HSV`]: crate::SortedWeights::HSV
//! [`SortedWeights::HLS`]: crate::SortedWeights::HLS
//! [`SortedWeights::HSI`]: crate::SortedWeights::HSI
//! [`RgbWeights`]: crate::RgbWeights

use crate::color::{Component, Components};
use crate::hexcone::{Sector, Sorted};
use crate::weights::Weighting;

/// Convert a color from RGB to GLHS. Returns `(lightness, hue, saturation)`.
///
/// Greys have a hue and saturation of 0. Values outside of [0..1] are not
/// clamped. A color outside of the RGB cube whose lightness is exactly 0, or
/// exactly 1 while brighter than its pure hue, has no finite saturation.
///
/// ```rust
/// use hexcone::{rgb_to_glhs, Components, SortedWeights};
/// let Components(l, h, s) = rgb_to_glhs(1.0, 0.5, 0.0, SortedWeights::HSV);
/// assert_eq!((l, h, s), (1.0, 0.5 / 6.0, 1.0));
/// ```
pub fn rgb_to_glhs(
    red: Component,
    green: Component,
    blue: Component,
    weighting: impl Into<Weighting>,
) -> Components {
    let weighting = weighting.into();
    let rgb = Components(red, green, blue);
    let sorted = Sorted::new(&rgb);

    let lightness = weighting.lightness(&rgb, &sorted);

    if sorted.range() == 0.0 {
        return Components(lightness, 0.0, 0.0);
    }

    let hue = sorted.hue(&rgb);

    let pure = weighting.pure_lightness(sorted.roles, sorted.mid_fraction());
    let saturation = if lightness <= pure || pure >= 1.0 {
        (lightness - sorted.min) / lightness
    } else {
        (sorted.max - lightness) / (1.0 - lightness)
    };

    Components(lightness, hue, saturation)
}

/// Convert a color from GLHS to RGB. The weighting must be the one the color
/// was created with.
///
/// No clamping is done, so GLHS values describing a color outside of the RGB
/// cube produce RGB values outside of [0..1].
pub fn glhs_to_rgb(
    lightness: Component,
    hue: Component,
    saturation: Component,
    weighting: impl Into<Weighting>,
) -> Components {
    let weighting = weighting.into();

    if saturation == 0.0 {
        return Components(lightness, lightness, lightness);
    }

    let sector = Sector::from_hue(hue);
    let pure = weighting.pure_lightness(sector.roles, sector.mid_fraction);

    // Lightness is max * pure + min * (1 - pure) for every color of this hue.
    let (max, min) = if lightness <= pure || pure >= 1.0 {
        let min = lightness * (1.0 - saturation);
        ((lightness - min * (1.0 - pure)) / pure, min)
    } else {
        let max = lightness + saturation * (1.0 - lightness);
        (max, (lightness - max * pure) / (1.0 - pure))
    };
    let mid = min + sector.mid_fraction * (max - min);

    sector.roles.place(max, mid, min)
}
