//! Model a color with luma and two chrominance components.

use crate::color::Component;
use crate::weights::RgbWeights;
use crate::yuv::{self, ClampMode};

use super::Rgb;

hexcone_macros::gen_model! {
    /// A color specified with YUV components.
    pub struct Yuv {
        /// The luma component of the color, [0..1].
        luma: Component,
        /// The blue difference component of the color.
        u: Component,
        /// The red difference component of the color.
        v: Component,
    }
}

impl Yuv {
    /// Convert this color to RGB with the given luma weights.
    pub fn to_rgb(&self, weights: RgbWeights, clamp: ClampMode) -> Rgb {
        yuv::yuv_to_rgb(self.luma, self.u, self.v, weights, clamp).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_mode_is_respected() {
        let weights = RgbWeights::REC601;
        let mut yuv = Rgb::new(0.0, 0.0, 1.0).to_yuv(weights);
        yuv.luma += 0.2;

        assert!(yuv.to_rgb(weights, ClampMode::Clamp).in_gamut());
        assert!(!yuv.to_rgb(weights, ClampMode::Unclamped).in_gamut());
    }
}
