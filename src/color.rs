//! The scalar and triple types every conversion in the crate operates on.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
///
/// The meaning of each component depends on the model that produced it, e.g.
/// `(lightness, hue, saturation)` for GLHS or `(luma, u, v)` for YUV.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the components with each one clamped to [0..1].
    pub fn clamp_unit(&self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    /// Return the set of channels, read as (red, green, blue), that lie
    /// outside of [0..1].
    pub fn out_of_unit_range(&self) -> Channels {
        let mut channels = Channels::empty();
        channels.set(Channels::RED, !in_zero_to_one(self.0));
        channels.set(Channels::GREEN, !in_zero_to_one(self.1));
        channels.set(Channels::BLUE, !in_zero_to_one(self.2));
        channels
    }
}

impl From<(Component, Component, Component)> for Components {
    fn from((c0, c1, c2): (Component, Component, Component)) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for (Component, Component, Component) {
    fn from(value: Components) -> Self {
        (value.0, value.1, value.2)
    }
}

bitflags! {
    /// A set of RGB channels, used to report which channels of a color are
    /// outside of the RGB gamut.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The red channel.
        const RED = 1 << 0;
        /// The green channel.
        const GREEN = 1 << 1;
        /// The blue channel.
        const BLUE = 1 << 2;
    }
}

#[allow(clippy::manual_range_contains)]
pub(crate) fn in_zero_to_one(value: Component) -> bool {
    value >= 0.0 && value <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 2.0);
        assert_eq!(c, Components(0.2, 0.4, 0.6));
    }

    #[test]
    fn clamp_unit() {
        let c = Components(-0.5, 0.5, 1.5).clamp_unit();
        assert_eq!(c, Components(0.0, 0.5, 1.0));
    }

    #[test]
    fn out_of_unit_range() {
        assert_eq!(
            Components(0.0, 0.5, 1.0).out_of_unit_range(),
            Channels::empty()
        );
        assert_eq!(
            Components(-0.1, 0.5, 1.1).out_of_unit_range(),
            Channels::RED | Channels::BLUE
        );
        assert_eq!(
            Components(0.2, Component::NAN, 0.2).out_of_unit_range(),
            Channels::GREEN
        );
    }

    #[test]
    fn tuple_conversions() {
        let c = Components::from((0.1, 0.2, 0.3));
        assert_eq!(c, Components(0.1, 0.2, 0.3));
        let (a, b, d): (Component, Component, Component) = c.into();
        assert_eq!((a, b, d), (0.1, 0.2, 0.3));
    }
}
