//! Peak normalization of magnitude spectra.

use crate::error::SpectrumError;
use crate::spectrum::SpectralResult;

/// Rescale magnitudes so the largest becomes exactly 1.0.
///
/// Fails with `DegenerateSpectrum` when every magnitude is zero, rather than
/// producing NaN.
pub fn normalize_magnitude(magnitude: &[f64]) -> Result<Vec<f64>, SpectrumError> {
    let peak = magnitude.iter().copied().fold(0.0_f64, f64::max);
    if peak <= 0.0 || !peak.is_finite() {
        return Err(SpectrumError::DegenerateSpectrum);
    }
    Ok(magnitude.iter().map(|&m| m / peak).collect())
}

/// Peak-normalized copy of a result. Frequency axis and phase are untouched.
pub fn normalize(result: &SpectralResult) -> Result<SpectralResult, SpectrumError> {
    let magnitude = normalize_magnitude(result.magnitude())?;
    Ok(result.with_magnitude(magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::SamplingPeriod;
    use crate::spectrum::SpectrumEngine;

    #[test]
    fn test_peak_becomes_one() {
        let normalized = normalize_magnitude(&[0.5, 4.0, 2.0]).unwrap();
        assert_eq!(normalized, vec![0.125, 1.0, 0.5]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_magnitude(&[3.0, 7.5, 0.1, 7.5]).unwrap();
        let twice = normalize_magnitude(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.iter().copied().fold(0.0, f64::max), 1.0);
    }

    #[test]
    fn test_all_zero_is_degenerate() {
        assert_eq!(
            normalize_magnitude(&[0.0, 0.0, 0.0]),
            Err(SpectrumError::DegenerateSpectrum)
        );
    }

    #[test]
    fn test_zero_signal_spectrum_is_degenerate() {
        let mut engine = SpectrumEngine::new();
        let result = engine.analyze(&[0.0; 8], SamplingPeriod::new(1.0).unwrap());
        assert_eq!(normalize(&result), Err(SpectrumError::DegenerateSpectrum));
    }

    #[test]
    fn test_normalize_leaves_axis_and_phase() {
        let mut engine = SpectrumEngine::new();
        let period = SamplingPeriod::new(0.1).unwrap();
        let result = engine.analyze(&[1.0, 2.0, 0.5, -1.0, 3.0], period);
        let normalized = normalize(&result).unwrap();

        assert_eq!(normalized.frequencies(), result.frequencies());
        assert_eq!(normalized.phase(), result.phase());
        assert_eq!(normalized.len(), result.len());
        let peak = normalized.magnitude().iter().copied().fold(0.0, f64::max);
        assert_eq!(peak, 1.0);
        // input untouched
        assert!(result.magnitude()[0] > 1.0);
    }
}
