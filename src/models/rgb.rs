//! Model a color with red, green and blue components.

use crate::color::Component;
use crate::weights::{RgbWeights, Weighting};
use crate::{glhs, hcy, yuv};

use super::{Glhs, Hcy, Yuv};

hexcone_macros::gen_model! {
    /// A color specified with red, green and blue components, nominally in
    /// [0..1].
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Convert this color to GLHS with the given weight scheme.
    pub fn to_glhs(&self, weighting: impl Into<Weighting>) -> Glhs {
        glhs::rgb_to_glhs(self.red, self.green, self.blue, weighting).into()
    }

    /// Convert this color to HCY with the given luma weights.
    pub fn to_hcy(&self, weights: RgbWeights) -> Hcy {
        hcy::rgb_to_hcy(self.red, self.green, self.blue, weights).into()
    }

    /// Convert this color to YUV with the given luma weights.
    pub fn to_yuv(&self, weights: RgbWeights) -> Yuv {
        yuv::rgb_to_yuv(self.red, self.green, self.blue, weights).into()
    }
}
