//! External plotting collaborator.
//!
//! Rendering is delegated to an outside program behind the [`PlotRenderer`]
//! trait. The pipeline only hands over an already-written magnitude table;
//! a failed render never invalidates that table.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::PlotConfig;
use crate::error::PlotError;

/// Where a renderer writes its script and image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotTarget {
    pub script: PathBuf,
    pub image: PathBuf,
}

/// Turns a magnitude table into an image.
pub trait PlotRenderer {
    /// Render `data_file`, returning the image path on success.
    fn render(&self, data_file: &Path, target: &PlotTarget) -> Result<PathBuf, PlotError>;
}

/// Renders frequency vs magnitude to EPS through gnuplot.
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    config: PlotConfig,
    silent: bool,
}

impl GnuplotRenderer {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            silent: false,
        }
    }

    /// Skip opening the image in a viewer after rendering.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Gnuplot script plotting the non-negative frequency range of `data_file`.
    pub fn script(&self, data_file: &Path, image: &Path) -> String {
        format!(
            "set term postscript eps color enhanced font ',{}'\n\
             set output '{}'\n\
             set xrange [0:]\n\
             set xlabel '{}'\n\
             plot '{}' w l\n",
            self.config.font_size,
            quoted(&image.display().to_string()),
            quoted(&self.config.xlabel),
            quoted(&data_file.display().to_string())
        )
    }

    fn open_viewer(&self, image: &Path) {
        match Command::new(&self.config.viewer).arg(image).status() {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!(
                "[PlotDriver] Viewer {} exited with {}",
                self.config.viewer,
                status
            ),
            Err(err) => tracing::warn!(
                "[PlotDriver] Could not launch viewer {}: {}",
                self.config.viewer,
                err
            ),
        }
    }
}

/// Escape text for a single-quoted gnuplot string, where `''` is a literal quote.
fn quoted(text: &str) -> String {
    text.replace('\'', "''")
}

impl PlotRenderer for GnuplotRenderer {
    fn render(&self, data_file: &Path, target: &PlotTarget) -> Result<PathBuf, PlotError> {
        fs::write(&target.script, self.script(data_file, &target.image)).map_err(|err| {
            PlotError::ScriptWrite {
                path: target.script.clone(),
                details: err.to_string(),
            }
        })?;

        tracing::debug!(
            "[PlotDriver] Running {} {}",
            self.config.program,
            target.script.display()
        );
        let status = Command::new(&self.config.program)
            .arg(&target.script)
            .status()
            .map_err(|err| PlotError::Spawn {
                program: self.config.program.clone(),
                details: err.to_string(),
            })?;

        if !status.success() {
            return Err(PlotError::ToolFailed {
                program: self.config.program.clone(),
                status: status.code(),
            });
        }

        if !self.silent {
            self.open_viewer(&target.image);
        }
        Ok(target.image.clone())
    }
}
