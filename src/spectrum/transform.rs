// Transform module - discrete Fourier transform of real sequences
//
// Computes the unscaled forward DFT X[k] = Σ x[n]·exp(-2πi·k·n/N) at the exact
// input length. rustfft plans mixed-radix, Rader or Bluestein algorithms for
// lengths that are not powers of two, so no padding is ever applied.

use rustfft::{num_complex::Complex, FftPlanner};

/// Owns an FFT planner so repeated transforms of one length reuse the plan.
pub struct FourierTransform {
    planner: FftPlanner<f64>,
}

impl FourierTransform {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute the length-N complex spectrum of a real signal
    ///
    /// # Arguments
    /// * `signal` - Real samples, length N
    ///
    /// # Returns
    /// N complex coefficients, bin 0 first
    pub fn forward(&mut self, signal: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        if buffer.is_empty() {
            return buffer;
        }

        let fft = self.planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        buffer
    }
}

impl Default for FourierTransform {
    fn default() -> Self {
        Self::new()
    }
}
