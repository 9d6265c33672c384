//! u-fleet command line.
//!
//! `plan` reads a request document, plans it and writes the result. Any
//! failure is reported on the console and written to the output file as a
//! fallback document carrying an `error` message; the process then exits
//! with status 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use u_fleet::io::{load_config, load_request, save_result, write_json};
use u_fleet::models::PlanResult;
use u_fleet::synthetic::SyntheticGenerator;
use u_fleet::{FleetPlanner, PlannerConfig};

#[derive(Parser)]
#[command(name = "u-fleet")]
#[command(about = "Coverage planner for fleets of field machines")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan routes for a request file
    Plan {
        /// Request JSON file
        input: PathBuf,

        /// Result JSON file
        output: PathBuf,

        /// Planner configuration JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate a synthetic request
    Generate {
        /// Number of fields
        #[arg(short, long, default_value = "20")]
        fields: usize,

        /// Number of machines
        #[arg(short, long, default_value = "3")]
        machines: usize,

        /// Random seed for reproducibility
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Plan {
            input,
            output,
            config,
        } => match run_plan(&input, &output, config.as_deref()) {
            Ok(result) => {
                println!(
                    "Plan saved to {}: {} machine(s), total time {:.4} h, efficiency {:.3}",
                    output.display(),
                    result.machines.len(),
                    result.total_time,
                    result.efficiency
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("planning failed: {err:#}");
                let fallback = PlanResult::failure(format!("{err:#}"));
                if let Err(write_err) = save_result(&output, &fallback) {
                    log::error!("could not write fallback result: {write_err}");
                }
                ExitCode::FAILURE
            }
        },

        Commands::Generate {
            fields,
            machines,
            seed,
            output,
        } => match run_generate(fields, machines, seed, output.as_deref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("generation failed: {err:#}");
                ExitCode::FAILURE
            }
        },
    };

    log::logger().flush();
    code
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = fast_log::init(fast_log::config::Config::new().console().level(level)) {
        eprintln!("failed to initialise logging: {e}");
    }
}

fn run_plan(input: &Path, output: &Path, config: Option<&Path>) -> anyhow::Result<PlanResult> {
    let config = match config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    let request =
        load_request(input).with_context(|| format!("loading request {}", input.display()))?;

    let result = FleetPlanner::new().with_config(config).plan(&request)?;

    save_result(output, &result)?;
    Ok(result)
}

fn run_generate(
    fields: usize,
    machines: usize,
    seed: u64,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let request = SyntheticGenerator::with_seed(seed).request(fields, machines);
    match output {
        Some(path) => {
            write_json(path, &request)?;
            println!("Request saved to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&request)?),
    }
    Ok(())
}
