// Error types for the spectrum analyzer
//
// This module defines custom error types for the analysis pipeline and the
// plotting collaborator, providing structured error handling with error codes
// that callers can script around.

mod plot;
mod spectrum;

pub use plot::{log_plot_error, PlotError, PlotErrorCodes};
pub use spectrum::{log_spectrum_error, SpectrumError, SpectrumErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the library and CLI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
