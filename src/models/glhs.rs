//! Model a color with the generalized lightness, hue, saturation notation.

use crate::color::Component;
use crate::glhs;
use crate::weights::Weighting;

use super::Rgb;

hexcone_macros::gen_model! {
    /// A color specified with GLHS components. The weight scheme is not part
    /// of the color; converting back needs the same scheme that produced it.
    pub struct Glhs {
        /// The lightness component of the color, [0..1].
        lightness: Component,
        /// The hue component of the color in turns, [0..1).
        hue: Component,
        /// The saturation component of the color, [0..1].
        saturation: Component,
    }
}

impl Glhs {
    /// Convert this color to RGB with the given weight scheme.
    pub fn to_rgb(&self, weighting: impl Into<Weighting>) -> Rgb {
        glhs::glhs_to_rgb(self.lightness, self.hue, self.saturation, weighting).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;
    use crate::weights::SortedWeights;

    #[test]
    fn components() {
        let glhs = Glhs::new(0.5, 0.25, 0.75);
        assert_eq!(glhs.to_components(), Components(0.5, 0.25, 0.75));
    }

    #[test]
    fn round_trip() {
        let rgb = Rgb::new(0.25, 0.75, 0.5);
        for (_, weights) in SortedWeights::PRESETS {
            let back = rgb.to_glhs(weights).to_rgb(weights);
            assert!((back.red - rgb.red).abs() < 1.0e-6);
            assert!((back.green - rgb.green).abs() < 1.0e-6);
            assert!((back.blue - rgb.blue).abs() < 1.0e-6);
        }
    }
}
