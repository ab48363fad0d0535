// SpectrumEngine - discrete Fourier analysis of uniformly sampled series
//
// This module turns an amplitude sequence and its sampling period into a
// frequency axis plus magnitude and phase spectra.
//
// Module organization:
// - transform: unscaled forward DFT at the exact input length
// - frequency: bin index to signed frequency mapping
// - types: SpectralResult and SpectralPeak
// - mod.rs: Coordinator (SpectrumEngine)

mod frequency;
mod transform;
mod types;

pub use frequency::{bin_frequency, bin_width, frequency_axis, non_negative_bins};
pub use transform::FourierTransform;
pub use types::{SpectralPeak, SpectralResult};

use rustfft::num_complex::Complex;
use std::f64::consts::PI;

use crate::sampling::SamplingPeriod;

/// SpectrumEngine coordinates transform, magnitude/phase derivation and
/// frequency mapping
pub struct SpectrumEngine {
    transform: FourierTransform,
}

impl SpectrumEngine {
    pub fn new() -> Self {
        Self {
            transform: FourierTransform::new(),
        }
    }

    /// Analyze an amplitude sequence
    ///
    /// # Arguments
    /// * `amplitudes` - N real samples
    /// * `period` - Sampling period T
    ///
    /// # Returns
    /// SpectralResult with N bins in native transform order
    pub fn analyze(&mut self, amplitudes: &[f64], period: SamplingPeriod) -> SpectralResult {
        let spectrum = self.transform.forward(amplitudes);
        let n = spectrum.len();

        let magnitude = spectrum.iter().map(|c| c.norm()).collect();
        let phase = spectrum.iter().map(phase_of).collect();
        let frequencies = frequency_axis(n, period.seconds());

        tracing::debug!(
            "[SpectrumEngine] Transformed {} samples, bin width {}",
            n,
            bin_width(n.max(1), period.seconds())
        );

        SpectralResult::new(frequencies, magnitude, phase)
    }

    /// Raw complex coefficients, bin 0 (DC) first.
    pub fn complex_spectrum(&mut self, amplitudes: &[f64]) -> Vec<Complex<f64>> {
        self.transform.forward(amplitudes)
    }
}

impl Default for SpectrumEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Four-quadrant angle folded into (-π, π].
fn phase_of(c: &Complex<f64>) -> f64 {
    let angle = c.im.atan2(c.re);
    if angle <= -PI {
        PI
    } else {
        angle
    }
}
