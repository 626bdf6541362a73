//! Gamut checks for RGB colors.
//!
//! Conversions into RGB never clamp on their own (apart from YUV with
//! [`ClampMode::Clamp`](crate::ClampMode::Clamp)), so these are the tools to
//! find and fix colors that left the RGB cube.

use crate::color::{in_zero_to_one, Channels};
use crate::models::Rgb;

impl Rgb {
    /// Returns true if every channel is inside [0..1].
    pub fn in_gamut(&self) -> bool {
        in_zero_to_one(self.red) && in_zero_to_one(self.green) && in_zero_to_one(self.blue)
    }

    /// Return the channels that are outside of [0..1].
    pub fn out_of_gamut(&self) -> Channels {
        self.to_components().out_of_unit_range()
    }

    /// Return a color with each of the components clipped (clamped to [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Rgb {
        self.to_components().clamp_unit().into()
    }
}
