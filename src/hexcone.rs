//! Geometry of the RGB hexcone: ranking the channels of a color and the six
//! hue sectors the ranking divides the hue circle into.

use crate::color::{Component, Components};
use crate::math::normalize_hue;

/// One of the three RGB channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn of(self, rgb: &Components) -> Component {
        match self {
            Channel::Red => rgb.0,
            Channel::Green => rgb.1,
            Channel::Blue => rgb.2,
        }
    }
}

/// Which channel holds the largest, the middle and the smallest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    pub max: Channel,
    pub mid: Channel,
    pub min: Channel,
}

impl Roles {
    const fn new(max: Channel, mid: Channel, min: Channel) -> Self {
        Self { max, mid, min }
    }

    /// Rank the channels of a color. Ties for the largest value go to red,
    /// then green.
    fn rank(rgb: &Components) -> Self {
        use Channel::*;

        let Components(red, green, blue) = *rgb;

        if red >= green && red >= blue {
            if green >= blue {
                Self::new(Red, Green, Blue)
            } else {
                Self::new(Red, Blue, Green)
            }
        } else if green >= blue {
            if red >= blue {
                Self::new(Green, Red, Blue)
            } else {
                Self::new(Green, Blue, Red)
            }
        } else if red >= green {
            Self::new(Blue, Red, Green)
        } else {
            Self::new(Blue, Green, Red)
        }
    }

    /// Place the ranked values into their channels.
    pub fn place(&self, max: Component, mid: Component, min: Component) -> Components {
        let mut rgb = Components::default();
        for (channel, value) in [(self.max, max), (self.mid, mid), (self.min, min)] {
            match channel {
                Channel::Red => rgb.0 = value,
                Channel::Green => rgb.1 = value,
                Channel::Blue => rgb.2 = value,
            }
        }
        rgb
    }
}

/// Channel roles of the six sectors of the hue circle, starting at red. In
/// even sectors the middle channel rises with the hue, in odd sectors it
/// falls.
#[rustfmt::skip]
const SECTORS: [Roles; 6] = {
    use Channel::*;
    [
        Roles::new(Red, Green, Blue),
        Roles::new(Green, Red, Blue),
        Roles::new(Green, Blue, Red),
        Roles::new(Blue, Green, Red),
        Roles::new(Blue, Red, Green),
        Roles::new(Red, Blue, Green),
    ]
};

/// The channels of a color ordered by their value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sorted {
    pub max: Component,
    pub mid: Component,
    pub min: Component,
    pub roles: Roles,
}

impl Sorted {
    pub fn new(rgb: &Components) -> Self {
        let roles = Roles::rank(rgb);
        Self {
            max: roles.max.of(rgb),
            mid: roles.mid.of(rgb),
            min: roles.min.of(rgb),
            roles,
        }
    }

    /// Distance between the largest and smallest channel.
    pub fn range(&self) -> Component {
        self.max - self.min
    }

    /// Where the middle channel sits between the smallest (0) and the largest
    /// (1) channel. Must not be called for achromatic colors.
    pub fn mid_fraction(&self) -> Component {
        (self.mid - self.min) / self.range()
    }

    /// The hexcone hue in turns, [0..1). Must not be called for achromatic
    /// colors.
    pub fn hue(&self, rgb: &Components) -> Component {
        let Components(red, green, blue) = *rgb;
        let range = self.range();

        let sixths = match self.roles.max {
            Channel::Red => (green - blue) / range,
            Channel::Green => (blue - red) / range + 2.0,
            Channel::Blue => (red - green) / range + 4.0,
        };

        normalize_hue(sixths / 6.0)
    }
}

/// The sector of the hue circle a hue falls into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub roles: Roles,
    /// See [`Sorted::mid_fraction`].
    pub mid_fraction: Component,
}

impl Sector {
    pub fn from_hue(hue: Component) -> Self {
        let sixths = (hue * 6.0).rem_euclid(6.0);
        let index = (sixths.floor() as usize).min(5);
        let offset = sixths - index as Component;

        Self {
            roles: SECTORS[index],
            mid_fraction: if index % 2 == 0 { offset } else { 1.0 - offset },
        }
    }
}
