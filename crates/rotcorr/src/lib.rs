//! Umbrella crate for the `rotcorr` workspace.
//!
//! Re-exports the image primitives, the polar resampler and the angular
//! correlator, and wires them into a single call.

pub use rc_core::*;
pub use rc_corr::*;
pub use rc_polar::*;

/// Resamples `img` to polar coordinates and correlates every radius row.
pub fn rotational_correlation<T: Copy + Into<f64>>(
    img: &ImageView<'_, T>,
    cfg: &PolarConfig,
) -> Result<(PolarImage, CorrelationImage), Error> {
    let polar = resample_with(img, cfg)?;
    let corr = correlate(&polar)?;
    Ok((polar, corr))
}
