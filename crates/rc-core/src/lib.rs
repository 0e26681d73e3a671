//! Foundational primitives for rotational-correlation analysis.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! Square sub-windows around a rotation center are therefore zero-copy.
//!
//! ## Coordinates
//! `x` runs along columns and `y` along rows. Polar angles are measured from
//! the `+x` axis towards `+y`, so `theta = atan2(y, x)` lies in `(-pi, pi]`.
//!
//! ## Sampling
//! Integer coordinates refer to pixel centers. Nearest-neighbor rounds
//! halfway coordinates to the even index; bilinear uses the standard
//! floor-based 2x2 interpolation neighborhood. Both samplers read the edge
//! pixel for coordinates past the border of the view.

mod error;
mod geom;
mod image;
mod sample;

pub use error::Error;
pub use geom::{Point2, Polar2, cartesian_to_polar, polar_grid_to_cartesian, polar_to_cartesian};
pub use image::{Image, ImageView, ImageViewMut, to_f64};
pub use sample::{clamp_index, sample_bilinear, sample_nearest};
