// Plotting collaborator error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;
use std::path::PathBuf;

/// Plot error code constants
///
/// Error code range: 4001-4003
pub struct PlotErrorCodes {}

impl PlotErrorCodes {
    /// Plot script could not be written next to the data files
    pub const SCRIPT_WRITE: i32 = 4001;

    /// Plotting program could not be started
    pub const SPAWN: i32 = 4002;

    /// Plotting program exited unsuccessfully
    pub const TOOL_FAILED: i32 = 4003;
}

/// Log a plot error with structured context
pub fn log_plot_error(err: &PlotError, context: &str) {
    error!(
        "Plot error in {}: code={}, component=PlotDriver, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised by the external plotting collaborator
///
/// A plot error never invalidates spectral data files that were already
/// written.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// Writing the plot script failed
    ScriptWrite { path: PathBuf, details: String },

    /// The plotting program could not be launched
    Spawn { program: String, details: String },

    /// The plotting program ran but reported failure
    ToolFailed { program: String, status: Option<i32> },
}

impl ErrorCode for PlotError {
    fn code(&self) -> i32 {
        match self {
            PlotError::ScriptWrite { .. } => PlotErrorCodes::SCRIPT_WRITE,
            PlotError::Spawn { .. } => PlotErrorCodes::SPAWN,
            PlotError::ToolFailed { .. } => PlotErrorCodes::TOOL_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            PlotError::ScriptWrite { path, details } => {
                format!("Failed to write plot script {}: {}", path.display(), details)
            }
            PlotError::Spawn { program, details } => {
                format!("Failed to launch {}: {}", program, details)
            }
            PlotError::ToolFailed {
                program,
                status: Some(status),
            } => {
                format!("{} exited with status {}", program, status)
            }
            PlotError::ToolFailed {
                program,
                status: None,
            } => {
                format!("{} was terminated by a signal", program)
            }
        }
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlotError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for PlotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_error_codes() {
        assert_eq!(
            PlotError::ScriptWrite {
                path: PathBuf::from("a.gp"),
                details: "test".to_string()
            }
            .code(),
            4001
        );
        assert_eq!(
            PlotError::Spawn {
                program: "gnuplot".to_string(),
                details: "test".to_string()
            }
            .code(),
            4002
        );
        assert_eq!(
            PlotError::ToolFailed {
                program: "gnuplot".to_string(),
                status: Some(1)
            }
            .code(),
            4003
        );
    }

    #[test]
    fn test_tool_failed_message() {
        let err = PlotError::ToolFailed {
            program: "gnuplot".to_string(),
            status: Some(2),
        };
        assert_eq!(err.message(), "gnuplot exited with status 2");

        let err = PlotError::ToolFailed {
            program: "gnuplot".to_string(),
            status: None,
        };
        assert!(err.message().contains("signal"));
    }
}
