//! Models are structs that name the three components of a color in one of the
//! supported color models. Converting between them goes through the free
//! conversion functions, with the weight scheme passed explicitly.
//!
//! ```rust
//! use hexcone::models::Rgb;
//! use hexcone::{ClampMode, RgbWeights, SortedWeights};
//!
//! let orange = Rgb::new(1.0, 0.5, 0.0);
//! let hls = orange.to_glhs(SortedWeights::HLS);
//! assert_eq!(hls.lightness, 0.5);
//!
//! let yuv = orange.to_yuv(RgbWeights::REC709);
//! let back = yuv.to_rgb(RgbWeights::REC709, ClampMode::Clamp);
//! assert!(back.in_gamut());
//! ```

mod glhs;
mod hcy;
mod rgb;
mod yuv;

pub use glhs::Glhs;
pub use hcy::Hcy;
pub use rgb::Rgb;
pub use yuv::Yuv;
