mod chart;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use paper_fold_core::targets::PAPER_THICKNESS_M;
use paper_fold_core::{run_scenarios, standard_targets, MaterialProperties, Meters};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Paper folding report: folds needed to reach Mount Fuji, the Moon and Proxima Centauri
#[derive(Parser, Debug)]
#[command(name = "fold-report")]
#[command(about = "How many times must paper be folded to reach the stars?", long_about = None)]
struct Args {
    /// Sheet thickness in metres
    #[arg(short, long, default_value_t = PAPER_THICKNESS_M)]
    thickness: f64,

    /// Output path for the growth chart
    #[arg(short, long, default_value = "paper_fold_growth.png")]
    chart: PathBuf,

    /// Skip rendering the chart
    #[arg(long)]
    no_chart: bool,

    /// Largest fold count plotted on the growth curves
    #[arg(long, default_value_t = 30)]
    chart_folds: u32,

    /// Print scenario results as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fold_report=info,paper_fold_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let material = MaterialProperties::new(Meters::new(args.thickness))?;
    let outcomes = run_scenarios(&standard_targets(), &material)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &outcomes)?;
        writeln!(out)?;
    } else {
        report::write_report(&mut out, &outcomes, &material)?;
    }
    out.flush()?;

    // Chart failures are not fatal: the report is already printed
    if !args.no_chart {
        match chart::render_chart(&outcomes, &material, args.chart_folds, &args.chart) {
            Ok(()) => info!("Chart saved as '{}'", args.chart.display()),
            Err(e) => warn!("Chart not rendered: {e}"),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fold report failed: {e}");
            ExitCode::FAILURE
        }
    }
}
