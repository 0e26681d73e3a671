use core::f64::consts::TAU;

use rc_core::{Error, Image, ImageView};

/// Image indexed by `(radius bin, angle bin)`.
///
/// Rows are radius bins with step 1 starting at 0; columns are angle bins
/// with step `2*pi / angle_bins` starting at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarImage {
    data: Image<f64>,
}

impl PolarImage {
    /// Wraps an existing `(radius_bins x angle_bins)` buffer.
    ///
    /// Fails if there are no angle bins, since no angular profile exists.
    pub fn from_image(data: Image<f64>) -> Result<Self, Error> {
        if data.width() == 0 {
            return Err(Error::InvalidInput("polar image needs at least one angle bin"));
        }
        Ok(Self { data })
    }

    pub(crate) fn zeros(radius_bins: usize, angle_bins: usize) -> Self {
        Self {
            data: Image::new_fill(angle_bins, radius_bins, 0.0),
        }
    }

    pub fn radius_bins(&self) -> usize {
        self.data.height()
    }

    pub fn angle_bins(&self) -> usize {
        self.data.width()
    }

    pub fn angle_step(&self) -> f64 {
        TAU / self.angle_bins() as f64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Angular profile at radius bin `r`.
    pub fn row(&self, r: usize) -> &[f64] {
        self.data.as_view().row(r)
    }

    pub fn get(&self, r: usize, a: usize) -> Option<f64> {
        self.data.as_view().get(a, r).copied()
    }

    pub fn as_view(&self) -> ImageView<'_, f64> {
        self.data.as_view()
    }

    pub(crate) fn image_mut(&mut self) -> &mut Image<f64> {
        &mut self.data
    }

    pub fn into_image(self) -> Image<f64> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use rc_core::Image;

    use super::PolarImage;

    #[test]
    fn shape_accessors() {
        let img = Image::from_fn(8, 3, |a, r| (10 * r + a) as f64);
        let polar = PolarImage::from_image(img).expect("valid polar image");

        assert_eq!(polar.radius_bins(), 3);
        assert_eq!(polar.angle_bins(), 8);
        assert!((polar.angle_step() - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert_eq!(polar.row(2)[5], 25.0);
        assert_eq!(polar.get(1, 7), Some(17.0));
        assert_eq!(polar.get(3, 0), None);
    }

    #[test]
    fn zero_angle_bins_rejected() {
        let img = Image::new_fill(0, 4, 0.0);
        assert!(PolarImage::from_image(img).is_err());
    }

    #[test]
    fn zero_radius_bins_is_empty() {
        let polar = PolarImage::zeros(0, 360);
        assert!(polar.is_empty());
        assert_eq!(polar.angle_bins(), 360);
        assert_eq!(polar.radius_bins(), 0);
    }
}
