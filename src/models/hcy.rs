//! Model a color with the hue, chroma, luma notation.

use crate::color::Component;
use crate::hcy;
use crate::weights::RgbWeights;

use super::Rgb;

hexcone_macros::gen_model! {
    /// A color specified with HCY components.
    pub struct Hcy {
        /// The hue component of the color in turns, [0..1).
        hue: Component,
        /// The chroma component of the color, [0..1].
        chroma: Component,
        /// The luma component of the color, [0..1].
        luma: Component,
    }
}

impl Hcy {
    /// Convert this color to RGB with the given luma weights.
    pub fn to_rgb(&self, weights: RgbWeights) -> Rgb {
        hcy::hcy_to_rgb(self.hue, self.chroma, self.luma, weights).into()
    }
}
