// Types module - spectral analysis result

use serde::Serialize;

/// Frequency axis with magnitude and phase spectra, all in native bin order.
///
/// The three sequences always have the same length N. Values are read-only
/// once produced; normalization yields a new result.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralResult {
    frequencies: Vec<f64>,
    magnitude: Vec<f64>,
    phase: Vec<f64>,
}

/// Largest magnitude among the non-negative frequency bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralPeak {
    pub bin: usize,
    pub frequency: f64,
    pub magnitude: f64,
}

impl SpectralResult {
    pub(crate) fn new(frequencies: Vec<f64>, magnitude: Vec<f64>, phase: Vec<f64>) -> Self {
        debug_assert_eq!(frequencies.len(), magnitude.len());
        debug_assert_eq!(frequencies.len(), phase.len());
        Self {
            frequencies,
            magnitude,
            phase,
        }
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    pub fn phase(&self) -> &[f64] {
        &self.phase
    }

    /// Number of bins (equal to the input sample count).
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Same frequency axis and phase with a replacement magnitude spectrum.
    pub(crate) fn with_magnitude(&self, magnitude: Vec<f64>) -> Self {
        Self::new(self.frequencies.clone(), magnitude, self.phase.clone())
    }

    /// Dominant non-negative frequency bin, first one wins on ties.
    pub fn peak(&self) -> Option<SpectralPeak> {
        let mut best: Option<SpectralPeak> = None;
        for (bin, (&frequency, &magnitude)) in
            self.frequencies.iter().zip(&self.magnitude).enumerate()
        {
            if frequency < 0.0 {
                continue;
            }
            if best.map_or(true, |b| magnitude > b.magnitude) {
                best = Some(SpectralPeak {
                    bin,
                    frequency,
                    magnitude,
                });
            }
        }
        best
    }
}
