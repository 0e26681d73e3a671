use crate::image::ImageView;

/// Index `i` clamped into `[0, len)`, or `None` for an empty axis.
pub fn clamp_index(i: isize, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    Some(i.clamp(0, last as isize) as usize)
}

fn pixel<T: Copy>(img: &ImageView<'_, T>, x: isize, y: isize) -> Option<T> {
    let xi = clamp_index(x, img.width())?;
    let yi = clamp_index(y, img.height())?;
    img.get(xi, yi).copied()
}

/// Nearest-neighbor lookup. Halfway coordinates round to the even index and
/// coordinates past the edge read the edge pixel.
///
/// Returns `None` only for an empty view.
pub fn sample_nearest<T: Copy>(img: &ImageView<'_, T>, x: f64, y: f64) -> Option<T> {
    pixel(img, x.round_ties_even() as isize, y.round_ties_even() as isize)
}

/// Bilinear interpolation over the floor-based 2x2 neighborhood of `(x, y)`.
///
/// Neighbours past the edge read the edge pixel. At the last row or column
/// their weight is zero, so a sample taken exactly on the window border
/// returns that border pixel.
pub fn sample_bilinear<T: Copy + Into<f64>>(
    img: &ImageView<'_, T>,
    x: f64,
    y: f64,
) -> Option<f64> {
    let (x0, y0) = (x.floor(), y.floor());
    let (fx, fy) = (x - x0, y - y0);
    let (xi, yi) = (x0 as isize, y0 as isize);
    let at = |dx: isize, dy: isize| -> Option<f64> {
        pixel(img, xi + dx, yi + dy).map(Into::into)
    };

    let top = at(0, 0)? * (1.0 - fx) + at(1, 0)? * fx;
    let bottom = at(0, 1)? * (1.0 - fx) + at(1, 1)? * fx;
    Some(top * (1.0 - fy) + bottom * fy)
}

#[cfg(test)]
mod tests {
    use crate::image::Image;
    use crate::sample::{clamp_index, sample_bilinear, sample_nearest};

    #[test]
    fn clamp_index_handles_negative_overflow_and_empty() {
        assert_eq!(clamp_index(-3, 5), Some(0));
        assert_eq!(clamp_index(4, 5), Some(4));
        assert_eq!(clamp_index(99, 5), Some(4));
        assert_eq!(clamp_index(0, 1), Some(0));
        assert_eq!(clamp_index(0, 0), None);
    }

    #[test]
    fn nearest_clamps_to_edge_pixels() {
        let img = Image::from_fn(3, 3, |x, y| (10 * y + x) as u8);
        let view = img.as_view();

        assert_eq!(sample_nearest(&view, 1.2, 1.6), Some(21));
        assert_eq!(sample_nearest(&view, -2.0, 1.0), Some(10));
        assert_eq!(sample_nearest(&view, 9.0, 9.0), Some(22));
    }

    #[test]
    fn nearest_halfway_rounds_to_even() {
        let img = Image::from_fn(4, 1, |x, _| x as f64);
        let view = img.as_view();

        assert_eq!(sample_nearest(&view, 0.5, 0.0), Some(0.0));
        assert_eq!(sample_nearest(&view, 1.5, 0.0), Some(2.0));
        assert_eq!(sample_nearest(&view, 2.5, 0.0), Some(2.0));
    }

    #[test]
    fn empty_view_has_no_samples() {
        let img = Image::<f64>::from_vec(0, 2, Vec::new()).expect("valid buffer");
        assert_eq!(sample_nearest(&img.as_view(), 0.0, 0.0), None);
        assert_eq!(sample_bilinear(&img.as_view(), 0.0, 0.0), None);
    }

    #[test]
    fn single_pixel_window_is_constant() {
        let img = Image::from_vec(1, 1, vec![4.5f64]).expect("valid image");
        let view = img.as_view();

        assert_eq!(sample_bilinear(&view, 0.0, 0.0), Some(4.5));
        assert_eq!(sample_nearest(&view, 0.0, 0.0), Some(4.5));
    }

    #[test]
    fn bilinear_center_of_2x2() {
        let img = Image::from_vec(2, 2, vec![0u8, 10, 20, 30]).expect("valid image");
        let center = sample_bilinear(&img.as_view(), 0.5, 0.5).expect("non-empty");
        assert!((center - 15.0).abs() < 1e-12);
    }

    #[test]
    fn bilinear_on_window_border_returns_border_pixel() {
        let img = Image::from_fn(3, 3, |x, y| (x + 3 * y) as f64);
        let view = img.as_view();

        assert_eq!(sample_bilinear(&view, 2.0, 2.0), Some(8.0));
        assert_eq!(sample_bilinear(&view, 2.0, 0.0), Some(2.0));
        let edge = sample_bilinear(&view, 2.0, 1.5).expect("non-empty");
        assert!((edge - 6.5).abs() < 1e-12);
    }

    #[test]
    fn bilinear_reproduces_planar_intensity() {
        let img = Image::from_fn(8, 8, |x, y| 2.0 * x as f64 - 0.5 * y as f64 + 3.0);
        let view = img.as_view();

        for &(x, y) in &[(1.25, 3.5), (4.9, 0.1), (6.0, 6.75)] {
            let v = sample_bilinear(&view, x, y).expect("non-empty");
            assert!((v - (2.0 * x - 0.5 * y + 3.0)).abs() < 1e-9);
        }
    }
}
