/// Lags of the circular local maxima of a correlation row, zero lag excluded.
///
/// A lag is a peak when it is strictly above its left neighbour and not below
/// its right neighbour, so a flat-topped peak reports its first lag.
pub fn lag_peaks(row: &[f64]) -> Vec<usize> {
    let n = row.len();
    if n < 3 {
        return Vec::new();
    }

    (1..n)
        .filter(|&lag| {
            let prev = row[lag - 1];
            let next = row[(lag + 1) % n];
            row[lag] > prev && row[lag] >= next
        })
        .collect()
}

/// Largest rotational fold `n` whose lags `k * len / n` (for `k` in `1..n`)
/// all carry a peak within one bin.
///
/// Only peaks whose height above the row minimum is at least
/// `min_contrast * (max - min)` count. Folds are searched up to `len / 4` so
/// that neighbouring peaks stay resolvable. Returns `None` for flat rows or
/// rows without any rotational structure.
pub fn estimate_fold(row: &[f64], min_contrast: f64) -> Option<usize> {
    let n = row.len();
    let (min, max) = row
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    if range.is_nan() || range <= 0.0 {
        return None;
    }

    let peaks: Vec<usize> = lag_peaks(row)
        .into_iter()
        .filter(|&lag| row[lag] - min >= min_contrast * range)
        .collect();
    if peaks.is_empty() {
        return None;
    }

    (2..=n / 4).rev().find(|&fold| {
        (1..fold).all(|k| {
            let target = (k * n) as f64 / fold as f64;
            peaks.iter().any(|&p| (p as f64 - target).abs() <= 1.0)
        })
    })
}
