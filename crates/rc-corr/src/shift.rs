/// Moves the zero-frequency bin to the center, in place.
///
/// For odd lengths the extra element ends up on the negative side, matching
/// the usual `fftshift` convention.
pub fn fft_shift<T>(spectrum: &mut [T]) {
    let mid = spectrum.len() / 2;
    spectrum.rotate_right(mid);
}

/// Inverse of [`fft_shift`], in place.
pub fn ifft_shift<T>(spectrum: &mut [T]) {
    let mid = spectrum.len() / 2;
    spectrum.rotate_left(mid);
}

#[cfg(test)]
mod tests {
    use super::{fft_shift, ifft_shift};

    #[test]
    fn even_and_odd_lengths() {
        let mut even = [0, 1, 2, 3, 4, 5];
        fft_shift(&mut even);
        assert_eq!(even, [3, 4, 5, 0, 1, 2]);

        let mut odd = [0, 1, 2, 3, 4];
        fft_shift(&mut odd);
        assert_eq!(odd, [3, 4, 0, 1, 2]);
        ifft_shift(&mut odd);
        assert_eq!(odd, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn shift_then_inverse_is_identity() {
        for len in 0..12 {
            let original: Vec<usize> = (0..len).collect();
            let mut v = original.clone();
            fft_shift(&mut v);
            ifft_shift(&mut v);
            assert_eq!(v, original);
        }
    }
}
