// ResultWriter - serialization of spectral results
//
// Writes (frequency, magnitude) and (frequency, phase) tables in native
// transform bin order. Rows are never re-sorted by frequency.

mod format;
mod paths;

pub use format::format_scientific;
pub use paths::OutputPaths;

use std::fs;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::SpectrumError;
use crate::series::Delimiter;
use crate::spectrum::SpectralResult;

/// Writes spectral results as two-column text tables
#[derive(Debug, Clone, Copy)]
pub struct ResultWriter {
    delimiter: Delimiter,
    precision: usize,
}

impl ResultWriter {
    pub fn new(delimiter: Delimiter, precision: usize) -> Self {
        Self {
            delimiter,
            precision,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.delimiter, config.precision)
    }

    /// Render one table, one `<frequency><sep><value>` row per bin.
    pub fn render_table(&self, frequencies: &[f64], values: &[f64]) -> String {
        let separator = self.delimiter.as_output_separator();
        let mut out = String::with_capacity(frequencies.len() * (2 * self.precision + 16));
        for (&f, &v) in frequencies.iter().zip(values) {
            out.push_str(&format_scientific(f, self.precision));
            out.push_str(separator);
            out.push_str(&format_scientific(v, self.precision));
            out.push('\n');
        }
        out
    }

    /// Write the magnitude and phase tables
    ///
    /// Both tables are rendered before anything touches the filesystem. If
    /// the phase table cannot be written, the magnitude table is removed so
    /// a failed run leaves no partial output.
    pub fn write(
        &self,
        result: &SpectralResult,
        magnitude_path: &Path,
        phase_path: &Path,
    ) -> Result<(), SpectrumError> {
        let magnitude = self.render_table(result.frequencies(), result.magnitude());
        let phase = self.render_table(result.frequencies(), result.phase());

        fs::write(magnitude_path, magnitude)
            .map_err(|err| SpectrumError::output_write(magnitude_path, &err))?;

        if let Err(err) = fs::write(phase_path, phase) {
            let _ = fs::remove_file(magnitude_path);
            return Err(SpectrumError::output_write(phase_path, &err));
        }

        tracing::info!(
            "[ResultWriter] Wrote {} rows to {} and {}",
            result.len(),
            magnitude_path.display(),
            phase_path.display()
        );
        Ok(())
    }
}

impl Default for ResultWriter {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}
