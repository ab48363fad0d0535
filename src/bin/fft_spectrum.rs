use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use fft_spectrum::output::ResultWriter;
use fft_spectrum::synth::{SyntheticPattern, SyntheticSpec};
use fft_spectrum::{
    AppConfig, Delimiter, PipelineConfig, PipelineReport, PlotOutcome, SpectrumError,
    SpectrumPipeline,
};

#[derive(Parser, Debug)]
#[command(
    name = "fft_spectrum",
    about = "Power and phase spectra of two-column (time, amplitude) data files"
)]
struct Cli {
    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Transform a data file and write its magnitude and phase spectra
    Analyze(AnalyzeArgs),
    /// Write a synthetic two-column series usable as input
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Data file with time and amplitude columns; text after # is ignored
    data_file: PathBuf,
    /// Input columns are comma separated (default: whitespace)
    #[arg(short, long)]
    csv: bool,
    /// Divide the magnitude spectrum by its maximum
    #[arg(short, long)]
    norm: bool,
    /// Render the magnitude spectrum with gnuplot
    #[arg(short, long)]
    gnuplot: bool,
    /// With --gnuplot, save the image without opening it
    #[arg(short, long)]
    silent: bool,
    /// Reject series whose time steps are not uniform
    #[arg(long)]
    strict: bool,
    /// JSON configuration file; must exist and parse (defaults to ./fft_spectrum.json when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, value_enum)]
    pattern: PatternArg,
    /// Signal frequency in Hz
    #[arg(long, default_value_t = 5.0)]
    frequency: f64,
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,
    /// Number of rows
    #[arg(long, default_value_t = 256)]
    samples: usize,
    /// Sampling period in seconds
    #[arg(long, default_value_t = 0.01)]
    period: f64,
    /// Seed for white noise
    #[arg(long)]
    seed: Option<u64>,
    /// Write comma separated columns
    #[arg(long)]
    csv: bool,
    #[arg(long)]
    output: PathBuf,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum PatternArg {
    Sine,
    Square,
    WhiteNoise,
    ImpulseTrain,
}

impl From<PatternArg> for SyntheticPattern {
    fn from(pattern: PatternArg) -> Self {
        match pattern {
            PatternArg::Sine => SyntheticPattern::Sine,
            PatternArg::Square => SyntheticPattern::Square,
            PatternArg::WhiteNoise => SyntheticPattern::WhiteNoise,
            PatternArg::ImpulseTrain => SyntheticPattern::ImpulseTrain,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            if let Some(spectrum_err) = err.downcast_ref::<SpectrumError>() {
                eprintln!("Error: {spectrum_err}");
                return ExitCode::from(spectrum_err.exit_code());
            }
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Generate(args) => run_generate(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path),
        None => Ok(AppConfig::load()),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<ExitCode> {
    let app_config = load_config(args.config.as_ref())?;
    let config = PipelineConfig {
        delimiter: if args.csv {
            Delimiter::Comma
        } else {
            Delimiter::Whitespace
        },
        normalize: args.norm,
        derive_plot: args.gnuplot,
        silent_plot: args.silent,
        strict_sampling: args.strict,
    };

    let report = SpectrumPipeline::new(config, app_config).run(&args.data_file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    match report.plot {
        Some(PlotOutcome::Failed { .. }) => Ok(ExitCode::from(2)),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn print_summary(report: &PipelineReport) {
    println!();
    println!(
        "Saved power spectrum ({} bins) to {}",
        report.sample_count,
        report.magnitude_file.display()
    );
    println!("Saved phase spectrum to {}", report.phase_file.display());
    if let Some(peak) = report.peak {
        println!(
            "Peak at {} (magnitude {}), Nyquist frequency {}",
            peak.frequency, peak.magnitude, report.nyquist_frequency
        );
    }

    match &report.plot {
        Some(PlotOutcome::Rendered { image }) => {
            println!("Saved power spectrum plot to {}", image.display());
        }
        Some(PlotOutcome::Failed { message, .. }) => {
            eprintln!("Plot failed: {message}");
            eprintln!("The spectrum data files above are complete.");
        }
        None => {
            println!("To plot the data with gnuplot:");
            println!("--------------------------------------------------------");
            println!("> gnuplot");
            println!(
                "> plot '{}' w l   power spectrum",
                report.magnitude_file.display()
            );
            println!("> plot '{}' w l   phase", report.phase_file.display());
            println!("--------------------------------------------------------");
            println!("or rerun with -g (--gnuplot) to render the graph.");
        }
    }
    println!();
}

fn run_generate(args: GenerateArgs) -> Result<ExitCode> {
    let mut spec = SyntheticSpec::new(args.pattern.into());
    spec.frequency_hz = args.frequency;
    spec.amplitude = args.amplitude;
    spec.samples = args.samples;
    spec.period = args.period;
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }

    let series = spec.generate()?;
    let delimiter = if args.csv {
        Delimiter::Comma
    } else {
        Delimiter::Whitespace
    };
    let precision = AppConfig::load().output.precision;
    let table =
        ResultWriter::new(delimiter, precision).render_table(series.times(), series.amplitudes());

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("creating output directory")?;
    }
    fs::write(&args.output, table)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("Wrote {} samples to {}", series.len(), args.output.display());
    Ok(ExitCode::SUCCESS)
}
