//! Sampling period derivation and uniformity checks.
//!
//! The period is taken from the first two timestamps only. Nothing downstream
//! can detect a non-uniform series, so its frequency axis is silently wrong;
//! [`SamplingMode::Strict`] scans every delta to catch that case.

use serde::Serialize;

use crate::error::SpectrumError;
use crate::series::Series;

/// Positive spacing between consecutive timestamps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SamplingPeriod(f64);

impl SamplingPeriod {
    /// Wrap a period, rejecting values that are not strictly positive.
    pub fn new(period: f64) -> Result<Self, SpectrumError> {
        if period > 0.0 && period.is_finite() {
            Ok(Self(period))
        } else {
            Err(SpectrumError::InvalidSampling { period })
        }
    }

    pub fn seconds(self) -> f64 {
        self.0
    }

    /// Sampling frequency `1 / T`.
    pub fn frequency(self) -> f64 {
        1.0 / self.0
    }

    /// Nyquist frequency `1 / (2T)`.
    pub fn nyquist(self) -> f64 {
        0.5 / self.0
    }
}

/// How much of the time column is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SamplingMode {
    /// Derive `T` from the first two samples and trust the rest
    #[default]
    FirstDelta,
    /// Additionally require every delta to match `T` within a relative tolerance
    Strict { relative_tolerance: f64 },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SamplingValidator {
    mode: SamplingMode,
}

impl SamplingValidator {
    pub fn new(mode: SamplingMode) -> Self {
        Self { mode }
    }

    pub fn strict(relative_tolerance: f64) -> Self {
        Self::new(SamplingMode::Strict { relative_tolerance })
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn validate(&self, series: &Series) -> Result<SamplingPeriod, SpectrumError> {
        let times = series.times();
        let period = SamplingPeriod::new(times[1] - times[0])?;

        if let SamplingMode::Strict { relative_tolerance } = self.mode {
            check_uniform(times, period, relative_tolerance)?;
        }

        tracing::debug!(
            "[SamplingValidator] period={} nyquist={} mode={:?}",
            period.seconds(),
            period.nyquist(),
            self.mode
        );
        Ok(period)
    }
}

fn check_uniform(
    times: &[f64],
    period: SamplingPeriod,
    relative_tolerance: f64,
) -> Result<(), SpectrumError> {
    let expected = period.seconds();
    let allowed = relative_tolerance.abs() * expected;

    for (idx, pair) in times.windows(2).enumerate().skip(1) {
        let delta = pair[1] - pair[0];
        if (delta - expected).abs() > allowed {
            return Err(SpectrumError::NonUniformSampling {
                index: idx + 1,
                delta,
                expected,
            });
        }
    }
    Ok(())
}
