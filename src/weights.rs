//! Weight schemes deciding how much each channel contributes to lightness.
//!
//! There are two families:
//! - [`RgbWeights`] weigh the red, green and blue channels directly, like the
//!   luma coefficients of the REC.601, REC.709 and REC.2020 standards.
//! - [`SortedWeights`] weigh the largest, middle and smallest channel of a
//!   color, which is how HSV, HLS and HSI define their lightness.
//!
//! Both keep their three weights private. The presets are vetted constants
//! and custom weights have to go through a validating constructor, so any
//! value of these types sums to one.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::color::{Component, Components};
use crate::error::{ConfigurationError, Result};
use crate::hexcone::{Channel, Roles, Sorted};

/// Maximum distance from one that the sum of custom weights may have.
const SUM_TOLERANCE: Component = 1.0e-6;

fn validate(weights: [Component; 3]) -> Result<()> {
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(ConfigurationError::NonFiniteWeight { index, value });
        }
        if value < 0.0 {
            return Err(ConfigurationError::NegativeWeight { index, value });
        }
    }

    let sum: Component = weights.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(ConfigurationError::WeightsNotNormalized { sum });
    }

    Ok(())
}

fn find_preset<T: Copy>(presets: &[(&str, T)], name: &str) -> Result<T> {
    presets
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name.trim()))
        .map(|(_, weights)| *weights)
        .ok_or_else(|| {
            debug!(name, "unknown weight preset");
            ConfigurationError::UnknownPreset(name.to_string())
        })
}

/// Weights applied directly to the red, green and blue channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbWeights {
    red: Component,
    green: Component,
    blue: Component,
}

impl RgbWeights {
    /// Luma coefficients of ITU-R BT.601.
    pub const REC601: Self = Self::new_unchecked(0.299, 0.587, 0.114);

    /// Luma coefficients of ITU-R BT.709, also used by sRGB.
    pub const REC709: Self = Self::new_unchecked(0.2126, 0.7152, 0.0722);

    /// Luma coefficients of ITU-R BT.2020.
    pub const REC2020: Self = Self::new_unchecked(0.2627, 0.6780, 0.0593);

    /// All presets with the names they can be parsed from.
    pub const PRESETS: [(&'static str, Self); 3] = [
        ("rec601", Self::REC601),
        ("rec709", Self::REC709),
        ("rec2020", Self::REC2020),
    ];

    const fn new_unchecked(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }

    /// Create custom weights. Every weight must be positive and the weights
    /// must sum to one.
    pub fn new(red: Component, green: Component, blue: Component) -> Result<Self> {
        let weights = [red, green, blue];
        validate(weights)
            .and_then(|_| match weights.iter().position(|&w| w == 0.0) {
                // A primary without any luma has no defined chroma.
                Some(index) => Err(ConfigurationError::ZeroWeight { index }),
                None => Ok(Self::new_unchecked(red, green, blue)),
            })
            .inspect_err(|err| debug!(red, green, blue, %err, "rejected rgb weights"))
    }

    /// The weight of the red channel.
    pub fn red(&self) -> Component {
        self.red
    }

    /// The weight of the green channel.
    pub fn green(&self) -> Component {
        self.green
    }

    /// The weight of the blue channel.
    pub fn blue(&self) -> Component {
        self.blue
    }

    /// The weights as `(red, green, blue)` components.
    pub fn to_components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    pub(crate) fn of(&self, channel: Channel) -> Component {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// The weighted sum of the channels.
    pub(crate) fn luma(&self, rgb: &Components) -> Component {
        self.red * rgb.0 + self.green * rgb.1 + self.blue * rgb.2
    }
}

impl Default for RgbWeights {
    fn default() -> Self {
        Self::REC709
    }
}

impl FromStr for RgbWeights {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        find_preset(&Self::PRESETS, s)
    }
}

impl fmt::Display for RgbWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Weights applied to the largest, middle and smallest channel of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortedWeights {
    max: Component,
    mid: Component,
    min: Component,
}

impl SortedWeights {
    /// Intensity, the mean of the channels.
    pub const HSI: Self = Self::new_unchecked(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);

    /// Value, the largest channel.
    pub const HSV: Self = Self::new_unchecked(1.0, 0.0, 0.0);

    /// Lightness, the midpoint of the largest and smallest channel.
    pub const HLS: Self = Self::new_unchecked(0.5, 0.0, 0.5);

    /// All presets with the names they can be parsed from.
    pub const PRESETS: [(&'static str, Self); 3] = [
        ("hsi", Self::HSI),
        ("hsv", Self::HSV),
        ("hls", Self::HLS),
    ];

    const fn new_unchecked(max: Component, mid: Component, min: Component) -> Self {
        Self { max, mid, min }
    }

    /// Create custom weights. Weights must not be negative, must sum to one
    /// and the weight of the largest channel must be positive.
    pub fn new(max: Component, mid: Component, min: Component) -> Result<Self> {
        validate([max, mid, min])
            .and_then(|_| {
                if max == 0.0 {
                    Err(ConfigurationError::ZeroWeight { index: 0 })
                } else {
                    Ok(Self::new_unchecked(max, mid, min))
                }
            })
            .inspect_err(|err| debug!(max, mid, min, %err, "rejected sorted weights"))
    }

    /// The weight of the largest channel.
    pub fn max(&self) -> Component {
        self.max
    }

    /// The weight of the middle channel.
    pub fn mid(&self) -> Component {
        self.mid
    }

    /// The weight of the smallest channel.
    pub fn min(&self) -> Component {
        self.min
    }

    /// The weights as `(max, mid, min)` components.
    pub fn to_components(&self) -> Components {
        Components(self.max, self.mid, self.min)
    }
}

impl FromStr for SortedWeights {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        find_preset(&Self::PRESETS, s)
    }
}

impl fmt::Display for SortedWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sorted({}, {}, {})", self.max, self.mid, self.min)
    }
}

/// Selects the weight scheme of a generalized hexcone conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Weighting {
    /// Weigh the channels by their rank within the color.
    Sorted(SortedWeights),
    /// Weigh the red, green and blue channels directly.
    Direct(RgbWeights),
}

impl From<SortedWeights> for Weighting {
    fn from(value: SortedWeights) -> Self {
        Weighting::Sorted(value)
    }
}

impl From<RgbWeights> for Weighting {
    fn from(value: RgbWeights) -> Self {
        Weighting::Direct(value)
    }
}

impl Weighting {
    /// The lightness of a color.
    pub(crate) fn lightness(&self, rgb: &Components, sorted: &Sorted) -> Component {
        match self {
            Weighting::Sorted(w) => w.max * sorted.max + w.mid * sorted.mid + w.min * sorted.min,
            Weighting::Direct(w) => w.luma(rgb),
        }
    }

    /// The lightness of the fully saturated color whose middle channel sits
    /// at `mid_fraction` between its smallest (0) and largest (1) channel.
    pub(crate) fn pure_lightness(&self, roles: Roles, mid_fraction: Component) -> Component {
        let (max, mid) = match self {
            Weighting::Sorted(w) => (w.max, w.mid),
            Weighting::Direct(w) => (w.of(roles.max), w.of(roles.mid)),
        };
        max + mid * mid_fraction
    }
}
