//! Integration tests for the public analysis API
//!
//! These tests drive the library the way an embedding caller would:
//! - Parsing tables with SeriesLoader
//! - Running the in-memory pipeline for even and odd lengths
//! - Normalization and its failure mode
//! - Error kinds distinguishable by variant and code

use std::f64::consts::PI;

use fft_spectrum::error::SpectrumErrorCodes;
use fft_spectrum::normalize::normalize;
use fft_spectrum::spectrum::bin_width;
use fft_spectrum::synth::{SyntheticPattern, SyntheticSpec};
use fft_spectrum::{
    AppConfig, Delimiter, ErrorCode, PipelineConfig, Series, SeriesLoader, SpectrumError,
    SpectrumPipeline,
};

fn pipeline(config: PipelineConfig) -> SpectrumPipeline {
    SpectrumPipeline::new(config, AppConfig::default())
}

fn uniform_series(amplitudes: Vec<f64>, period: f64) -> Series {
    let times = (0..amplitudes.len()).map(|i| i as f64 * period).collect();
    Series::new(times, amplitudes).unwrap()
}

/// Test the worked four-sample example end to end from text
#[test]
fn test_four_sample_table() {
    let series = SeriesLoader::new(Delimiter::Whitespace)
        .parse("0 1\n1 0\n2 -1\n3 0\n")
        .unwrap();
    let (period, result) = pipeline(PipelineConfig::default())
        .analyze_series(&series)
        .unwrap();

    assert_eq!(period.seconds(), 1.0);
    assert_eq!(result.frequencies(), &[0.0, 0.25, -0.5, -0.25]);
    for (m, e) in result.magnitude().iter().zip([0.0, 2.0, 0.0, 2.0]) {
        assert!((m - e).abs() < 1e-12);
    }
}

/// Test that a constant signal only populates the DC bin with N·|c|
#[test]
fn test_constant_signal_dc_only() {
    for n in [2, 5, 8, 13] {
        let c = 3.0;
        let series = uniform_series(vec![c; n], 0.2);
        let (_, result) = pipeline(PipelineConfig::default())
            .analyze_series(&series)
            .unwrap();

        assert!((result.magnitude()[0] - n as f64 * c).abs() < 1e-9);
        assert!(result.magnitude()[1..].iter().all(|m| m.abs() < 1e-9));
    }
}

/// Test row count, symmetry and frequency layout for many lengths
#[test]
fn test_spectrum_shape_for_even_and_odd_lengths() {
    for n in 2..=40 {
        let amplitudes: Vec<f64> = (0..n)
            .map(|i| ((i * 7 + 3) % 11) as f64 - 5.0)
            .collect();
        let period = 0.125;
        let (_, result) = pipeline(PipelineConfig::default())
            .analyze_series(&uniform_series(amplitudes, period))
            .unwrap();

        assert_eq!(result.len(), n);
        let freqs = result.frequencies();
        let positives = n.div_ceil(2);
        assert!(freqs[..positives].iter().all(|&f| f >= 0.0));
        assert!(freqs[positives..].iter().all(|&f| f < 0.0));
        assert!(freqs[..positives].windows(2).all(|w| w[0] < w[1]));
        assert!(freqs[positives..].windows(2).all(|w| w[0] < w[1]));

        let mag = result.magnitude();
        for k in 1..n {
            assert!((mag[k] - mag[n - k]).abs() < 1e-9);
        }
    }
}

/// Test dominant bin of a sinusoid generated by the synth module
#[test]
fn test_sinusoid_peak_location() {
    for (samples, period, f0) in [(200, 0.005, 12.0), (99, 0.1, 1.3), (1000, 0.001, 60.0)] {
        let spec = SyntheticSpec {
            frequency_hz: f0,
            samples,
            period,
            ..SyntheticSpec::new(SyntheticPattern::Sine)
        };
        let series = spec.generate().unwrap();
        let (_, result) = pipeline(PipelineConfig::default())
            .analyze_series(&series)
            .unwrap();
        let peak = result.peak().unwrap();
        assert!(
            (peak.frequency - f0).abs() <= bin_width(samples, period),
            "N={samples}: peak {} vs {f0}",
            peak.frequency
        );
    }
}

/// Test that normalization reaches exactly 1.0 and is idempotent
#[test]
fn test_normalization_idempotence() {
    let amplitudes: Vec<f64> = (0..50).map(|i| (i as f64 * 0.4).cos() + 0.3).collect();
    let config = PipelineConfig {
        normalize: true,
        ..PipelineConfig::default()
    };
    let (_, once) = pipeline(config)
        .analyze_series(&uniform_series(amplitudes, 0.02))
        .unwrap();
    let twice = normalize(&once).unwrap();

    let max = once.magnitude().iter().copied().fold(0.0, f64::max);
    assert_eq!(max, 1.0);
    assert_eq!(once, twice);
}

/// Test phase antisymmetry of a shifted cosine
#[test]
fn test_phase_negation_between_mirror_bins() {
    let n = 16;
    let amplitudes: Vec<f64> = (0..n)
        .map(|i| (2.0 * PI * 3.0 * i as f64 / n as f64 + 0.7).cos())
        .collect();
    let (_, result) = pipeline(PipelineConfig::default())
        .analyze_series(&uniform_series(amplitudes, 1.0))
        .unwrap();

    let phase = result.phase();
    assert!((phase[3] - 0.7).abs() < 1e-9);
    assert!((phase[13] + 0.7).abs() < 1e-9);
}

/// Test error kinds surface with their codes
#[test]
fn test_error_kinds_are_distinguishable() {
    let err = SeriesLoader::new(Delimiter::Comma)
        .parse("0 1\n1 2\n")
        .unwrap_err();
    assert_eq!(err.code(), SpectrumErrorCodes::MALFORMED_INPUT);

    let series = Series::new(vec![1.0, 0.5], vec![1.0, 2.0]).unwrap();
    let err = pipeline(PipelineConfig::default())
        .analyze_series(&series)
        .unwrap_err();
    assert_eq!(err, SpectrumError::InvalidSampling { period: -0.5 });

    let config = PipelineConfig {
        normalize: true,
        ..PipelineConfig::default()
    };
    let err = pipeline(config)
        .analyze_series(&uniform_series(vec![0.0; 6], 1.0))
        .unwrap_err();
    assert_eq!(err.code(), SpectrumErrorCodes::DEGENERATE_SPECTRUM);
}
