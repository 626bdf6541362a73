//! hexcone converts colors between RGB and perceptual color models that are
//! derived from weighted combinations of the red, green and blue channels.
//!
//! - **GLHS**, generalized lightness, hue, saturation. One hexcone algorithm
//!   that becomes HSV, HLS or HSI depending on its [`Weighting`].
//! - **HCY**, hue, chroma, luma. GLHS with direct luma weights.
//! - **YUV**, luma and two chrominance differences.
//!
//! ```rust
//! use hexcone::{rgb_to_glhs, glhs_to_rgb, Components, SortedWeights};
//!
//! let Components(l, h, s) = rgb_to_glhs(0.8, 0.4, 0.2, SortedWeights::HLS);
//! let Components(r, g, b) = glhs_to_rgb(l, h, s, SortedWeights::HLS);
//! assert!((r - 0.8).abs() < 1.0e-6);
//! assert!((g - 0.4).abs() < 1.0e-6);
//! assert!((b - 0.2).abs() < 1.0e-6);
//! ```
//!
//! All conversions work on single colors and never fail. Only building custom
//! weight schemes can return a [`ConfigurationError`].

#![deny(missing_docs)]

mod color;
mod error;
mod gamut;
mod glhs;
mod hcy;
mod hexcone;
mod interpolate;
mod math;
pub mod models;
mod weights;
mod yuv;


pub use color::{Channels, Component, Components};
pub use error::{ConfigurationError, Result};
pub use glhs::{glhs_to_rgb, rgb_to_glhs};
pub use hcy::{hcy_to_rgb, rgb_to_hcy};
pub use weights::{RgbWeights, SortedWeights, Weighting};
pub use yuv::{rgb_to_yuv, yuv_to_rgb, ClampMode, U_MAX, V_MAX};
