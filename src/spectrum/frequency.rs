// Frequency module - bin index to signed frequency mapping
//
// Bins 0..⌈N/2⌉ hold the non-negative frequencies in ascending order, the
// remaining high bins hold the negative frequencies, also ascending. For even
// N the last bin is -1/(2T); the Nyquist bin is reported as negative.

/// Number of bins carrying non-negative frequencies, `⌈N/2⌉`.
pub fn non_negative_bins(n: usize) -> usize {
    n.div_ceil(2)
}

/// Signed frequency of bin `k` in a length-`n` transform sampled every `period`.
pub fn bin_frequency(k: usize, n: usize, period: f64) -> f64 {
    let span = n as f64 * period;
    if k < non_negative_bins(n) {
        k as f64 / span
    } else {
        (k as f64 - n as f64) / span
    }
}

/// Frequency axis in native transform order.
pub fn frequency_axis(n: usize, period: f64) -> Vec<f64> {
    (0..n).map(|k| bin_frequency(k, n, period)).collect()
}

/// Spacing between adjacent bins, `1 / (N·T)`.
pub fn bin_width(n: usize, period: f64) -> f64 {
    1.0 / (n as f64 * period)
}
