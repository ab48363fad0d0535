//! Sequential analysis pipeline.
//!
//! load → validate → transform → (normalize) → write → (plot)
//!
//! Every run builds its own loader, engine and writer; nothing is shared
//! between invocations, so independent inputs may be processed in parallel
//! by separate pipelines. All fallible stages run before the first write.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{log_plot_error, log_spectrum_error, ErrorCode, SpectrumError};
use crate::normalize;
use crate::output::{OutputPaths, ResultWriter};
use crate::plot::{GnuplotRenderer, PlotRenderer, PlotTarget};
use crate::sampling::{SamplingMode, SamplingPeriod, SamplingValidator};
use crate::series::{Delimiter, Series, SeriesLoader};
use crate::spectrum::{SpectralPeak, SpectralResult, SpectrumEngine};

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineConfig {
    /// Input column separator
    pub delimiter: Delimiter,
    /// Rescale magnitudes by their peak
    pub normalize: bool,
    /// Render the magnitude table through the plotting tool
    pub derive_plot: bool,
    /// Render without opening a viewer
    pub silent_plot: bool,
    /// Require every time delta to match the sampling period
    pub strict_sampling: bool,
}

/// Outcome of the optional plotting step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlotOutcome {
    Rendered { image: PathBuf },
    Failed { code: i32, message: String },
}

/// Summary of one successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub input: PathBuf,
    pub sample_count: usize,
    pub sampling_period: f64,
    pub nyquist_frequency: f64,
    pub normalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<SpectralPeak>,
    pub magnitude_file: PathBuf,
    pub phase_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotOutcome>,
}

pub struct SpectrumPipeline {
    config: PipelineConfig,
    app_config: AppConfig,
    renderer: Box<dyn PlotRenderer>,
}

impl SpectrumPipeline {
    pub fn new(config: PipelineConfig, app_config: AppConfig) -> Self {
        let renderer = GnuplotRenderer::new(app_config.plot.clone()).silent(config.silent_plot);
        Self {
            config,
            app_config,
            renderer: Box::new(renderer),
        }
    }

    /// Replace the plotting collaborator.
    pub fn with_renderer(mut self, renderer: Box<dyn PlotRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    fn sampling_validator(&self) -> SamplingValidator {
        if self.config.strict_sampling {
            SamplingValidator::new(SamplingMode::Strict {
                relative_tolerance: self.app_config.sampling.relative_tolerance,
            })
        } else {
            SamplingValidator::default()
        }
    }

    /// Validate and transform an in-memory series, normalizing if configured.
    pub fn analyze_series(
        &self,
        series: &Series,
    ) -> Result<(SamplingPeriod, SpectralResult), SpectrumError> {
        let period = self.sampling_validator().validate(series)?;
        let mut engine = SpectrumEngine::new();
        let result = engine.analyze(series.amplitudes(), period);
        let result = if self.config.normalize {
            normalize::normalize(&result)?
        } else {
            result
        };
        Ok((period, result))
    }

    /// Run the full pipeline for one input file
    ///
    /// # Returns
    /// * `Ok(PipelineReport)` - Both tables written; plot outcome recorded
    /// * `Err(SpectrumError)` - A fatal stage failed; no result files remain
    pub fn run(&self, input: &Path) -> Result<PipelineReport, SpectrumError> {
        self.execute(input).map_err(|err| {
            log_spectrum_error(&err, "SpectrumPipeline::run");
            err
        })
    }

    fn execute(&self, input: &Path) -> Result<PipelineReport, SpectrumError> {
        tracing::info!(
            "[SpectrumPipeline] Analyzing {} ({:?})",
            input.display(),
            self.config
        );

        let series = SeriesLoader::new(self.config.delimiter).load_file(input)?;
        let (period, result) = self.analyze_series(&series)?;

        let paths = OutputPaths::from_input(input, &self.app_config);
        ResultWriter::from_config(&self.app_config.output).write(
            &result,
            &paths.magnitude,
            &paths.phase,
        )?;

        let plot = self.config.derive_plot.then(|| self.render_plot(&paths));

        Ok(PipelineReport {
            input: input.to_path_buf(),
            sample_count: series.len(),
            sampling_period: period.seconds(),
            nyquist_frequency: period.nyquist(),
            normalized: self.config.normalize,
            peak: result.peak(),
            magnitude_file: paths.magnitude,
            phase_file: paths.phase,
            plot,
        })
    }

    fn render_plot(&self, paths: &OutputPaths) -> PlotOutcome {
        let target = PlotTarget {
            script: paths.plot_script.clone(),
            image: paths.plot_image.clone(),
        };
        match self.renderer.render(&paths.magnitude, &target) {
            Ok(image) => {
                tracing::info!("[SpectrumPipeline] Rendered {}", image.display());
                PlotOutcome::Rendered { image }
            }
            Err(err) => {
                log_plot_error(&err, "SpectrumPipeline::render_plot");
                PlotOutcome::Failed {
                    code: err.code(),
                    message: err.message(),
                }
            }
        }
    }
}
