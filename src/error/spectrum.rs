// Spectrum pipeline error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;
use std::path::PathBuf;

/// Spectrum error code constants
///
/// Error code range: 3001-3006
pub struct SpectrumErrorCodes {}

impl SpectrumErrorCodes {
    /// Input table could not be parsed or has too few rows
    pub const MALFORMED_INPUT: i32 = 3001;

    /// Derived sampling period is zero or negative
    pub const INVALID_SAMPLING: i32 = 3002;

    /// Strict mode found a time delta that differs from the period
    pub const NON_UNIFORM_SAMPLING: i32 = 3003;

    /// Normalization requested on an all-zero magnitude spectrum
    pub const DEGENERATE_SPECTRUM: i32 = 3004;

    /// Result table could not be written
    pub const OUTPUT_WRITE: i32 = 3005;

    /// Input file could not be read
    pub const INPUT_READ: i32 = 3006;
}

/// Log a spectrum error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_spectrum_error(err: &SpectrumError, context: &str) {
    error!(
        "Spectrum error in {}: code={}, component=SpectrumPipeline, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Spectrum analysis errors
///
/// Every variant is fatal to a single pipeline invocation. Variants are kept
/// distinct so a caller can react to a specific failure class, e.g. retry
/// with another delimiter on `MalformedInput`.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// A data line did not parse, or the table holds fewer than 2 rows
    MalformedInput { line: Option<usize>, reason: String },

    /// `time[1] - time[0]` is not strictly positive
    InvalidSampling { period: f64 },

    /// A consecutive time delta deviates from the sampling period
    NonUniformSampling {
        index: usize,
        delta: f64,
        expected: f64,
    },

    /// Peak magnitude is zero, normalization is undefined
    DegenerateSpectrum,

    /// Writing a result table failed
    OutputWrite { path: PathBuf, details: String },

    /// Reading the input table failed
    InputRead { path: PathBuf, details: String },
}

impl SpectrumError {
    /// Process exit status used by the CLI for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            SpectrumError::MalformedInput { .. } => 3,
            SpectrumError::InvalidSampling { .. } => 4,
            SpectrumError::NonUniformSampling { .. } => 5,
            SpectrumError::DegenerateSpectrum => 6,
            SpectrumError::OutputWrite { .. } => 7,
            SpectrumError::InputRead { .. } => 8,
        }
    }

    pub(crate) fn malformed_at(line: usize, reason: impl Into<String>) -> Self {
        SpectrumError::MalformedInput {
            line: Some(line),
            reason: reason.into(),
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        SpectrumError::OutputWrite {
            path: path.into(),
            details: err.to_string(),
        }
    }
}

impl ErrorCode for SpectrumError {
    fn code(&self) -> i32 {
        match self {
            SpectrumError::MalformedInput { .. } => SpectrumErrorCodes::MALFORMED_INPUT,
            SpectrumError::InvalidSampling { .. } => SpectrumErrorCodes::INVALID_SAMPLING,
            SpectrumError::NonUniformSampling { .. } => SpectrumErrorCodes::NON_UNIFORM_SAMPLING,
            SpectrumError::DegenerateSpectrum => SpectrumErrorCodes::DEGENERATE_SPECTRUM,
            SpectrumError::OutputWrite { .. } => SpectrumErrorCodes::OUTPUT_WRITE,
            SpectrumError::InputRead { .. } => SpectrumErrorCodes::INPUT_READ,
        }
    }

    fn message(&self) -> String {
        match self {
            SpectrumError::MalformedInput {
                line: Some(line),
                reason,
            } => {
                format!("Malformed input at line {}: {}", line, reason)
            }
            SpectrumError::MalformedInput { line: None, reason } => {
                format!("Malformed input: {}", reason)
            }
            SpectrumError::InvalidSampling { period } => {
                format!("Sampling period must be greater than 0 (got {})", period)
            }
            SpectrumError::NonUniformSampling {
                index,
                delta,
                expected,
            } => {
                format!(
                    "Non-uniform sampling at sample {}: delta {} differs from period {}",
                    index, delta, expected
                )
            }
            SpectrumError::DegenerateSpectrum => {
                "Cannot normalize an all-zero magnitude spectrum".to_string()
            }
            SpectrumError::OutputWrite { path, details } => {
                format!("Failed to write {}: {}", path.display(), details)
            }
            SpectrumError::InputRead { path, details } => {
                format!("Failed to read {}: {}", path.display(), details)
            }
        }
    }
}

impl fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpectrumError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for SpectrumError {}
