// Output artifact naming derived from the input file

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Files produced for one input table.
///
/// Every path is the input path with its extension removed plus a suffix,
/// e.g. `run1.dat` gives `run1_fft.dat`, `run1_phase.dat`, `run1_fft.gp`
/// and `run1_fft.eps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub magnitude: PathBuf,
    pub phase: PathBuf,
    pub plot_script: PathBuf,
    pub plot_image: PathBuf,
}

impl OutputPaths {
    pub fn from_input(input: &Path, config: &AppConfig) -> Self {
        let base = input.with_extension("");
        Self {
            magnitude: with_suffix(&base, &config.output.magnitude_suffix),
            phase: with_suffix(&base, &config.output.phase_suffix),
            plot_script: with_suffix(&base, &config.plot.script_suffix),
            plot_image: with_suffix(&base, &config.plot.image_suffix),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
