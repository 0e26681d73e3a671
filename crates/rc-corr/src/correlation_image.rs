use rc_core::{Image, ImageView};

/// Angular autocorrelation per radius bin.
///
/// Same shape as the polar image it was computed from: row `r` holds the
/// correlation of radius bin `r` as a function of angular lag, column `0`
/// being the zero lag.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationImage {
    data: Image<f64>,
}

impl CorrelationImage {
    pub(crate) fn new(data: Image<f64>) -> Self {
        Self { data }
    }

    pub fn radius_bins(&self) -> usize {
        self.data.height()
    }

    /// Number of angular lags, equal to the number of angle bins.
    pub fn lag_bins(&self) -> usize {
        self.data.width()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, r: usize) -> &[f64] {
        self.data.as_view().row(r)
    }

    pub fn get(&self, r: usize, lag: usize) -> Option<f64> {
        self.data.as_view().get(lag, r).copied()
    }

    pub fn as_view(&self) -> ImageView<'_, f64> {
        self.data.as_view()
    }

    pub fn into_image(self) -> Image<f64> {
        self.data
    }

    /// Scales every row so its zero-lag value is 1.
    ///
    /// Rows with a zero-lag value of 0 (all-zero input) are left at 0.
    pub fn normalized(&self) -> Self {
        let mut data = self.data.clone();
        let mut view = data.as_view_mut();
        for r in 0..view.height() {
            let row = view.row_mut(r);
            let Some(&zero_lag) = row.first() else {
                continue;
            };
            if zero_lag == 0.0 {
                row.fill(0.0);
                continue;
            }
            for v in row.iter_mut() {
                *v /= zero_lag;
            }
        }
        Self { data }
    }
}
