//! Two-column time series loading.
//!
//! Input tables hold `(time, amplitude)` rows separated by whitespace or
//! commas. Text following `#` is a comment, so a line whose first
//! non-whitespace character is `#` is skipped entirely. Only the first two
//! fields of a row are read.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SpectrumError;

/// Minimum number of rows needed to derive a sampling period.
pub const MIN_SAMPLES: usize = 2;

/// Column separator of a text table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Any run of spaces or tabs
    #[default]
    Whitespace,
    Comma,
}

impl Delimiter {
    /// Separator written between output columns.
    pub fn as_output_separator(self) -> &'static str {
        match self {
            Delimiter::Whitespace => " ",
            Delimiter::Comma => ",",
        }
    }

    fn split<'a>(self, line: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            Delimiter::Whitespace => Box::new(line.split_whitespace()),
            Delimiter::Comma => Box::new(line.split(',').map(str::trim)),
        }
    }
}

/// One `(time, amplitude)` row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub amplitude: f64,
}

/// Ordered samples as parallel time and amplitude columns.
///
/// Row order is preserved as read; the loader never sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl Series {
    /// Build a series from parallel columns.
    ///
    /// Fails with `MalformedInput` when the columns differ in length or hold
    /// fewer than [`MIN_SAMPLES`] rows.
    pub fn new(times: Vec<f64>, amplitudes: Vec<f64>) -> Result<Self, SpectrumError> {
        if times.len() != amplitudes.len() {
            return Err(SpectrumError::MalformedInput {
                line: None,
                reason: format!(
                    "time and amplitude columns differ in length ({} vs {})",
                    times.len(),
                    amplitudes.len()
                ),
            });
        }
        if times.len() < MIN_SAMPLES {
            return Err(SpectrumError::MalformedInput {
                line: None,
                reason: format!(
                    "need at least {} data rows, found {}",
                    MIN_SAMPLES,
                    times.len()
                ),
            });
        }
        Ok(Self { times, amplitudes })
    }

    pub fn from_samples(samples: &[Sample]) -> Result<Self, SpectrumError> {
        let times = samples.iter().map(|s| s.time).collect();
        let amplitudes = samples.iter().map(|s| s.amplitude).collect();
        Self::new(times, amplitudes)
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false: a series holds at least [`MIN_SAMPLES`] rows.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(&self.amplitudes)
            .map(|(&time, &amplitude)| Sample { time, amplitude })
    }
}

/// Parses textual tables into a [`Series`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesLoader {
    delimiter: Delimiter,
}

impl SeriesLoader {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Read and parse a table from disk.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Series, SpectrumError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| SpectrumError::InputRead {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;
        let series = self.parse(&text)?;
        tracing::debug!(
            "[SeriesLoader] Loaded {} samples from {}",
            series.len(),
            path.display()
        );
        Ok(series)
    }

    /// Parse a table held in memory.
    pub fn parse(&self, text: &str) -> Result<Series, SpectrumError> {
        if text.trim().is_empty() {
            return Err(SpectrumError::MalformedInput {
                line: None,
                reason: "input is empty".to_string(),
            });
        }

        let mut times = Vec::new();
        let mut amplitudes = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let content = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            if content.trim().is_empty() {
                continue;
            }

            let mut fields = self.delimiter.split(content);
            let time = parse_field(fields.next(), line_no, "time")?;
            let amplitude = parse_field(fields.next(), line_no, "amplitude")?;
            times.push(time);
            amplitudes.push(amplitude);
        }

        Series::new(times, amplitudes)
    }
}

fn parse_field(field: Option<&str>, line_no: usize, column: &str) -> Result<f64, SpectrumError> {
    let field = match field {
        Some(f) if !f.is_empty() => f,
        _ => {
            return Err(SpectrumError::malformed_at(
                line_no,
                format!("missing {} column (expected at least 2 fields)", column),
            ))
        }
    };

    let value: f64 = field.parse().map_err(|_| {
        SpectrumError::malformed_at(line_no, format!("{} value '{}' is not a number", column, field))
    })?;

    if !value.is_finite() {
        return Err(SpectrumError::malformed_at(
            line_no,
            format!("{} value '{}' is not finite", column, field),
        ));
    }
    Ok(value)
}
