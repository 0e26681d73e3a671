//! Cartesian-to-polar resampling of an image around its center.
//!
//! The rotation center is `(cx, cy) = (width / 2, height / 2)` and the usable
//! radius is the largest one for which every angular sample stays inside the
//! image. The output has one row per integer radius `0..radius` and one
//! column per angle bin, with bins uniformly spanning `[0, 2*pi)`.
//!
//! Two samplers are available:
//! - [`Interpolation::Nearest`] rounds each Cartesian offset and copies the
//!   source pixel. Output values are exact source intensities.
//! - [`Interpolation::Linear`] evaluates a bilinear interpolant built over the
//!   square window `[c - radius + 1, c + radius - 1]` on both axes.
//!
//! Images too small to have a non-zero radius produce an empty polar image
//! unless [`PolarConfig::reject_degenerate`] is set.

mod config;
mod polar_image;
mod resample;

pub use config::{DEFAULT_ANGLE_BINS, Interpolation, PolarConfig};
pub use polar_image::PolarImage;
pub use resample::{PolarGeometry, angle_grid, resample, resample_with};
