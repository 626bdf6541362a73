use crate::color::Component;
use crate::math::{lerp, lerp_hue};
use crate::models::{Glhs, Hcy};

/// Pick the hues to interpolate between. An achromatic endpoint has no
/// meaningful hue, so it borrows the hue of the other endpoint.
fn hue_endpoints(
    (hue, chroma): (Component, Component),
    (other_hue, other_chroma): (Component, Component),
) -> (Component, Component) {
    match (chroma == 0.0, other_chroma == 0.0) {
        (true, false) => (other_hue, other_hue),
        (false, true) => (hue, hue),
        _ => (hue, other_hue),
    }
}

impl Glhs {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them. Hue moves along the shorter arc. Both colors
    /// must use the same weight scheme.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        let (from, to) =
            hue_endpoints((self.hue, self.saturation), (other.hue, other.saturation));

        Glhs::new(
            lerp(self.lightness, other.lightness, t),
            lerp_hue(from, to, t),
            lerp(self.saturation, other.saturation, t),
        )
    }
}

impl Hcy {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them. Hue moves along the shorter arc.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        let (from, to) = hue_endpoints((self.hue, self.chroma), (other.hue, other.chroma));

        Hcy::new(
            lerp_hue(from, to, t),
            lerp(self.chroma, other.chroma, t),
            lerp(self.luma, other.luma, t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use crate::test::assert_component_eq;
    use crate::weights::{RgbWeights, SortedWeights};

    #[test]
    fn basic() {
        let left = Glhs::new(0.2, 0.1, 0.4);
        let right = Glhs::new(0.6, 0.3, 0.8);
        let mixed = left.interpolate(&right, 0.5);
        assert_component_eq!(mixed.lightness, 0.4);
        assert_component_eq!(mixed.hue, 0.2);
        assert_component_eq!(mixed.saturation, 0.6);
    }

    #[test]
    fn hue_crosses_red() {
        let magenta_red = Rgb::new(1.0, 0.0, 0.5).to_glhs(SortedWeights::HSV);
        let orange = Rgb::new(1.0, 0.5, 0.0).to_glhs(SortedWeights::HSV);

        let mixed = magenta_red.interpolate(&orange, 0.25);
        assert_component_eq!(mixed.hue, 23.0 / 24.0);
        let rgb = mixed.to_rgb(SortedWeights::HSV);
        assert_component_eq!(rgb.red, 1.0);
        assert_component_eq!(rgb.green, 0.0);
        assert_component_eq!(rgb.blue, 0.25);

        let mixed = magenta_red.interpolate(&orange, 0.75);
        assert_component_eq!(mixed.hue, 1.0 / 24.0);
        let rgb = mixed.to_rgb(SortedWeights::HSV);
        assert_component_eq!(rgb.red, 1.0);
        assert_component_eq!(rgb.green, 0.25);
        assert_component_eq!(rgb.blue, 0.0);
    }

    #[test]
    fn grey_takes_hue_of_other_endpoint() {
        let weights = RgbWeights::REC709;
        let grey = Rgb::new(0.5, 0.5, 0.5).to_hcy(weights);
        let green = Rgb::new(0.0, 1.0, 0.0).to_hcy(weights);

        let mixed = grey.interpolate(&green, 0.25);
        assert_component_eq!(mixed.hue, green.hue);
        assert_component_eq!(mixed.chroma, 0.25);

        let mixed = green.interpolate(&grey, 0.75);
        assert_component_eq!(mixed.hue, green.hue);
    }

    #[test]
    fn endpoints() {
        let a = Hcy::new(0.9, 0.5, 0.2);
        let b = Hcy::new(0.3, 0.1, 0.7);
        let start = a.interpolate(&b, 0.0);
        assert_component_eq!(start.hue, a.hue);
        assert_component_eq!(start.chroma, a.chroma);
        assert_component_eq!(start.luma, a.luma);
        let end = a.interpolate(&b, 1.0);
        assert_component_eq!(end.hue, b.hue);
        assert_component_eq!(end.chroma, b.chroma);
        assert_component_eq!(end.luma, b.luma);
    }
}
