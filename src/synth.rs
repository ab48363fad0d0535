//! Deterministic synthetic series for exercising the analyzer.
//!
//! Generates uniformly sampled `(time, amplitude)` tables from simple
//! waveform patterns, so spectra with a known answer can be produced without
//! recorded data. White noise uses a fixed seed and is reproducible.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::SpectrumError;
use crate::sampling::SamplingPeriod;
use crate::series::Series;

const DEFAULT_SEED: u64 = 0x5A5A_FFF0;

/// Supported deterministic waveform patterns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyntheticPattern {
    Sine,
    Square,
    WhiteNoise,
    ImpulseTrain,
}

/// Declarative description of a synthetic series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyntheticSpec {
    pub pattern: SyntheticPattern,
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_period")]
    pub period: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_frequency_hz() -> f64 {
    5.0
}

fn default_amplitude() -> f64 {
    1.0
}

fn default_samples() -> usize {
    256
}

fn default_period() -> f64 {
    0.01
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl SyntheticSpec {
    pub fn new(pattern: SyntheticPattern) -> Self {
        Self {
            pattern,
            frequency_hz: default_frequency_hz(),
            amplitude: default_amplitude(),
            samples: default_samples(),
            period: default_period(),
            seed: default_seed(),
        }
    }

    /// Produce the series; `time[i] = i · period`.
    pub fn generate(&self) -> Result<Series, SpectrumError> {
        let period = SamplingPeriod::new(self.period)?.seconds();
        let times: Vec<f64> = (0..self.samples).map(|i| i as f64 * period).collect();

        let amplitudes = match self.pattern {
            SyntheticPattern::Sine => times
                .iter()
                .map(|&t| self.amplitude * (2.0 * PI * self.frequency_hz * t).sin())
                .collect(),
            SyntheticPattern::Square => times
                .iter()
                .map(|&t| {
                    let phase = (self.frequency_hz * t).rem_euclid(1.0);
                    if phase < 0.5 {
                        self.amplitude
                    } else {
                        -self.amplitude
                    }
                })
                .collect(),
            SyntheticPattern::WhiteNoise => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                let amplitude = self.amplitude.abs();
                (0..self.samples)
                    .map(|_| {
                        if amplitude > 0.0 {
                            rng.gen_range(-amplitude..amplitude)
                        } else {
                            0.0
                        }
                    })
                    .collect()
            }
            SyntheticPattern::ImpulseTrain => {
                let interval = impulse_interval(self.frequency_hz, period);
                (0..self.samples)
                    .map(|i| {
                        if i % interval == 0 {
                            self.amplitude
                        } else {
                            0.0
                        }
                    })
                    .collect()
            }
        };

        Series::new(times, amplitudes)
    }
}

fn impulse_interval(frequency_hz: f64, period: f64) -> usize {
    if frequency_hz <= 0.0 {
        return usize::MAX;
    }
    (1.0 / (frequency_hz * period)).round().max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_series_is_uniform() {
        let series = SyntheticSpec::new(SyntheticPattern::Sine).generate().unwrap();
        assert_eq!(series.len(), 256);
        assert_eq!(series.times()[0], 0.0);
        assert!((series.times()[1] - 0.01).abs() < 1e-15);
        assert!(series.amplitudes().iter().all(|a| a.abs() <= 1.0));
    }

    #[test]
    fn test_square_alternates_sign() {
        let spec = SyntheticSpec {
            frequency_hz: 1.0,
            samples: 4,
            period: 0.25,
            ..SyntheticSpec::new(SyntheticPattern::Square)
        };
        let series = spec.generate().unwrap();
        assert_eq!(series.amplitudes(), &[1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_white_noise_is_reproducible() {
        let spec = SyntheticSpec::new(SyntheticPattern::WhiteNoise);
        let a = spec.generate().unwrap();
        let b = spec.generate().unwrap();
        assert_eq!(a, b);
        assert!(a.amplitudes().iter().any(|&x| x != 0.0));
        assert!(a.amplitudes().iter().all(|x| x.abs() <= 1.0));
    }

    #[test]
    fn test_impulse_train_spacing() {
        let spec = SyntheticSpec {
            frequency_hz: 25.0,
            samples: 10,
            period: 0.01,
            amplitude: 2.0,
            ..SyntheticSpec::new(SyntheticPattern::ImpulseTrain)
        };
        let series = spec.generate().unwrap();
        assert_eq!(
            series.amplitudes(),
            &[2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut spec = SyntheticSpec::new(SyntheticPattern::Sine);
        spec.period = 0.0;
        assert!(matches!(
            spec.generate(),
            Err(SpectrumError::InvalidSampling { .. })
        ));

        let mut spec = SyntheticSpec::new(SyntheticPattern::Sine);
        spec.samples = 1;
        assert!(matches!(
            spec.generate(),
            Err(SpectrumError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_spec_json_defaults() {
        let spec: SyntheticSpec = serde_json::from_str(r#"{"pattern": "white_noise"}"#).unwrap();
        assert_eq!(spec, SyntheticSpec::new(SyntheticPattern::WhiteNoise));
    }
}
