use clap::Parser;
use intpdf::{DensityAreaEstimator, EstimatorConfig, Precision};
use log::info;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Estimate the standard normal mass on [-5, 5] by hit-or-miss sampling.
#[derive(Debug, Parser)]
#[command(name = "intpdf", version, about)]
struct Cli {
    /// Number of trials per estimate
    #[arg(default_value_t = 5000)]
    samples: usize,
    /// Fixed generator seed; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,
    /// Reproduce single-precision arithmetic and pi = 3.14159
    #[arg(long)]
    legacy: bool,
    /// Repeat the estimate and report its spread instead
    #[arg(long)]
    replications: Option<usize>,
}

impl Cli {
    fn config(&self) -> EstimatorConfig {
        EstimatorConfig {
            samples: self.samples,
            seed: self.seed,
            precision: if self.legacy {
                Precision::Legacy
            } else {
                Precision::Double
            },
        }
    }
}

fn run(cli: &Cli) -> intpdf::Result<()> {
    let mut estimator = DensityAreaEstimator::new(cli.config())?;

    match cli.replications {
        Some(replications) => {
            let summary = estimator.replicate(cli.samples, replications)?;
            info!(
                "{} replications of {} samples",
                summary.replications, summary.samples
            );
            println!("mean:    {:.6}", summary.mean);
            println!("std dev: {:.6}", summary.std_dev);
            println!("min:     {:.6}", summary.min);
            println!("max:     {:.6}", summary.max);
        }
        None => {
            let outcome = estimator.estimate_detailed(cli.samples)?;
            info!(
                "{} hits, standard error {:.6}",
                outcome.hits,
                outcome.standard_error()
            );
            println!("{:.6}", outcome.area());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("intpdf: {e}");
            ExitCode::FAILURE
        }
    }
}
