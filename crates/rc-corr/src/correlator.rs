use std::fmt;
use std::sync::Arc;

use rc_core::{Error, Image};
use rc_polar::PolarImage;
use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use tracing::debug;

use crate::correlation_image::CorrelationImage;
use crate::shift::{fft_shift, ifft_shift};

/// Reusable angular autocorrelator for rows of a fixed length.
///
/// Forward and inverse plans and the scratch buffers are created once, so a
/// single correlator can process many polar images with the same number of
/// angle bins.
pub struct AngularCorrelator {
    angle_bins: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    spectrum: Vec<Complex64>,
    scratch: Vec<Complex64>,
}

impl fmt::Debug for AngularCorrelator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AngularCorrelator")
            .field("angle_bins", &self.angle_bins)
            .finish()
    }
}

impl AngularCorrelator {
    pub fn new(angle_bins: usize) -> Result<Self, Error> {
        if angle_bins == 0 {
            return Err(Error::InvalidInput("angular rows must not be empty"));
        }

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(angle_bins);
        let inverse = planner.plan_fft_inverse(angle_bins);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());

        Ok(Self {
            angle_bins,
            forward,
            inverse,
            spectrum: vec![Complex64::new(0.0, 0.0); angle_bins],
            scratch: vec![Complex64::new(0.0, 0.0); scratch_len],
        })
    }

    pub fn angle_bins(&self) -> usize {
        self.angle_bins
    }

    /// Correlates every radius row of `polar` independently.
    pub fn correlate(&mut self, polar: &PolarImage) -> Result<CorrelationImage, Error> {
        if polar.angle_bins() != self.angle_bins {
            return Err(Error::SizeMismatch {
                expected: self.angle_bins,
                actual: polar.angle_bins(),
            });
        }
        debug!(
            radius_bins = polar.radius_bins(),
            angle_bins = self.angle_bins,
            "angular autocorrelation"
        );

        let mut out = Image::new_fill(self.angle_bins, polar.radius_bins(), 0.0);
        let mut dst = out.as_view_mut();
        for r in 0..polar.radius_bins() {
            self.correlate_row(polar.row(r), dst.row_mut(r))?;
        }
        Ok(CorrelationImage::new(out))
    }

    /// Writes the circular autocorrelation of `row` into `out`.
    ///
    /// `out[lag]` is `sum_i row[i] * row[(i + lag) % n]`.
    pub fn correlate_row(&mut self, row: &[f64], out: &mut [f64]) -> Result<(), Error> {
        if row.len() != self.angle_bins {
            return Err(Error::SizeMismatch {
                expected: self.angle_bins,
                actual: row.len(),
            });
        }
        if out.len() != self.angle_bins {
            return Err(Error::SizeMismatch {
                expected: self.angle_bins,
                actual: out.len(),
            });
        }

        for (c, &v) in self.spectrum.iter_mut().zip(row) {
            *c = Complex64::new(v, 0.0);
        }
        self.forward
            .process_with_scratch(&mut self.spectrum, &mut self.scratch);

        fft_shift(&mut self.spectrum);
        for c in self.spectrum.iter_mut() {
            *c = *c * c.conj();
        }
        ifft_shift(&mut self.spectrum);

        self.inverse
            .process_with_scratch(&mut self.spectrum, &mut self.scratch);

        // Imaginary parts are rounding noise for a real input row.
        let scale = 1.0 / self.angle_bins as f64;
        for (o, c) in out.iter_mut().zip(&self.spectrum) {
            *o = c.re * scale;
        }
        Ok(())
    }
}

/// One-shot correlation sized to `polar`.
pub fn correlate(polar: &PolarImage) -> Result<CorrelationImage, Error> {
    AngularCorrelator::new(polar.angle_bins())?.correlate(polar)
}
