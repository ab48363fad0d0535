// FFT Spectrum Core - discrete Fourier analysis of sampled time series
// Two-column table in, magnitude and phase tables out, optional gnuplot render

// Module declarations
pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod plot;
pub mod sampling;
pub mod series;
pub mod spectrum;
pub mod synth;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::{ErrorCode, PlotError, SpectrumError};
pub use pipeline::{PipelineConfig, PipelineReport, PlotOutcome, SpectrumPipeline};
pub use sampling::{SamplingMode, SamplingPeriod, SamplingValidator};
pub use series::{Delimiter, Sample, Series, SeriesLoader};
pub use spectrum::{SpectralPeak, SpectralResult, SpectrumEngine};
