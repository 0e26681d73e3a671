//! Rotational (angular) autocorrelation of polar images.
//!
//! Every radius row of a [`rc_polar::PolarImage`] is correlated with
//! circularly shifted copies of itself using the power-spectrum identity
//! `ifft(F * conj(F))`, where `F` is the zero-centered spectrum of the row.
//! Rows are independent. The inverse transform is normalized by `1/N`, so a
//! constant row of value `k` correlates to `N * k^2` at every lag.
//!
//! An image with n-fold rotational symmetry produces, at every radius that
//! crosses the pattern, peaks at lags that are multiples of `N / n`.
//! [`lag_peaks`] and [`estimate_fold`] read that structure back out.

mod correlation_image;
mod correlator;
mod shift;
mod symmetry;

pub use correlation_image::CorrelationImage;
pub use correlator::{AngularCorrelator, correlate};
pub use shift::{fft_shift, ifft_shift};
pub use symmetry::{estimate_fold, lag_peaks};
