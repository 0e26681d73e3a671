use core::f64::consts::TAU;

use rc_core::{
    Error, ImageView, Point2, polar_grid_to_cartesian, sample_bilinear, sample_nearest, to_f64,
};
use tracing::debug;

use crate::config::{Interpolation, PolarConfig};
use crate::polar_image::PolarImage;

/// Rotation center and usable radius of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarGeometry {
    pub cx: usize,
    pub cy: usize,
    /// `min(height - cy, width - cx, cx, cy)`: every radius in `0..radius`
    /// keeps all angular samples inside the image.
    pub radius: usize,
}

impl PolarGeometry {
    pub fn for_size(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidInput("image must have at least one row and column"));
        }

        let cx = width / 2;
        let cy = height / 2;
        let radius = (height - cy).min(width - cx).min(cx).min(cy);
        Ok(Self { cx, cy, radius })
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.cx as f64, self.cy as f64)
    }

    /// Number of radius bins, `0..radius` with step 1.
    pub fn radius_bins(&self) -> usize {
        self.radius
    }
}

/// Angles of `bins` uniform bins over `[0, 2*pi)`.
pub fn angle_grid(bins: usize) -> Vec<f64> {
    let step = TAU / bins as f64;
    (0..bins).map(|a| a as f64 * step).collect()
}

/// Resamples `img` onto a `(radius, 360)` polar grid with the given sampler.
pub fn resample<T: Copy + Into<f64>>(
    img: &ImageView<'_, T>,
    interpolation: Interpolation,
) -> Result<PolarImage, Error> {
    resample_with(img, &PolarConfig::with_interpolation(interpolation))
}

pub fn resample_with<T: Copy + Into<f64>>(
    img: &ImageView<'_, T>,
    cfg: &PolarConfig,
) -> Result<PolarImage, Error> {
    if cfg.angle_bins == 0 {
        return Err(Error::InvalidInput("angle_bins must be non-zero"));
    }

    let geom = PolarGeometry::for_size(img.width(), img.height())?;
    debug!(
        width = img.width(),
        height = img.height(),
        cx = geom.cx,
        cy = geom.cy,
        radius = geom.radius,
        angle_bins = cfg.angle_bins,
        interpolation = %cfg.interpolation,
        "polar resample"
    );

    if geom.radius == 0 {
        if cfg.reject_degenerate {
            return Err(Error::NumericDegeneracy { radius: 0 });
        }
        return Ok(PolarImage::zeros(0, cfg.angle_bins));
    }

    let rhos: Vec<f64> = (0..geom.radius_bins()).map(|r| r as f64).collect();
    let offsets = polar_grid_to_cartesian(&angle_grid(cfg.angle_bins), &rhos);

    let mut out = PolarImage::zeros(geom.radius_bins(), cfg.angle_bins);
    match cfg.interpolation {
        Interpolation::Nearest => fill_nearest(img, &geom, &offsets, &mut out)?,
        Interpolation::Linear => fill_linear(img, &geom, &offsets, &mut out)?,
    }
    Ok(out)
}

fn fill_nearest<T: Copy + Into<f64>>(
    img: &ImageView<'_, T>,
    geom: &PolarGeometry,
    offsets: &[Point2],
    out: &mut PolarImage,
) -> Result<(), Error> {
    let center = geom.center();
    let angle_bins = out.angle_bins();
    let mut dst = out.image_mut().as_view_mut();

    for (r, row_offsets) in offsets.chunks_exact(angle_bins).enumerate() {
        let dst_row = dst.row_mut(r);
        for (d, off) in dst_row.iter_mut().zip(row_offsets) {
            // Offsets are rounded before recentering so the pixel index is
            // `c + round(offset)`, independent of the parity of `c`.
            let rounded = Point2::new(off.x.round_ties_even(), off.y.round_ties_even());
            let src = center + rounded;
            *d = sample_nearest(img, src.x, src.y)
                .ok_or(Error::OutOfBounds)?
                .into();
        }
    }
    Ok(())
}

fn fill_linear<T: Copy + Into<f64>>(
    img: &ImageView<'_, T>,
    geom: &PolarGeometry,
    offsets: &[Point2],
    out: &mut PolarImage,
) -> Result<(), Error> {
    // Window spans offsets [-(radius - 1), radius - 1] on both axes.
    let half = geom.radius - 1;
    let side = 2 * half + 1;
    let window = img.subview(geom.cx - half, geom.cy - half, side, side)?;
    let samples = to_f64(&window);
    let interpolant = samples.as_view();
    let origin = Point2::new(half as f64, half as f64);

    let angle_bins = out.angle_bins();
    let mut dst = out.image_mut().as_view_mut();

    for (r, row_offsets) in offsets.chunks_exact(angle_bins).enumerate() {
        let dst_row = dst.row_mut(r);
        for (d, &off) in dst_row.iter_mut().zip(row_offsets) {
            let p = origin + off;
            *d = sample_bilinear(&interpolant, p.x, p.y).ok_or(Error::OutOfBounds)?;
        }
    }
    Ok(())
}
