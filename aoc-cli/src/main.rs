//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins unless `-v` raises the level explicitly
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    debug!(?config, "resolved configuration");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front; those parts fail, the rest still run
    let missing_inputs = executor.missing_inputs(&work_items);
    if !missing_inputs.is_empty() {
        warn!(
            count = missing_inputs.len(),
            dir = %config.input_dir.display(),
            "missing input files"
        );
        if !config.quiet {
            println!("Missing {} input file(s):", missing_inputs.len());
            for (year, day) in &missing_inputs {
                println!("  - {}/day{:02}", year, day);
            }
        }
    }

    run_executor(executor, work_items, config.quiet)
}

/// Run the executor and collect results
fn run_executor(
    executor: Executor,
    work_items: Vec<executor::WorkItem>,
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    let registry = builder.build();
    debug!(solvers = registry.storage().len(), "registry built");
    Ok(registry)
}
