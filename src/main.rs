//! Command-line front end: load an instance, run the search, report routes.

use clap::Parser;
use log::info;
use mdvrp_ga::config::Config;
use mdvrp_ga::problem::Problem;
use mdvrp_ga::utils::{save_result_json, save_solution, write_solution, SearchStatistics};
use mdvrp_ga::GaAlgorithm;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Solve a multi-depot routing instance with a genetic algorithm.
#[derive(Debug, Parser)]
#[command(name = "mdvrp-ga", version, about)]
struct Args {
    /// JSON instance with `customers` and `depots`
    instance: PathBuf,

    #[arg(long, default_value_t = 50)]
    population_size: usize,

    #[arg(long, default_value_t = 100)]
    generations: usize,

    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Keep odd population sizes at full size every generation
    #[arg(long)]
    refill: bool,

    /// Stop after this many seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Write the run result (best permutation, cost, history) as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a plain-text route report
    #[arg(long)]
    report: Option<PathBuf>,
}

fn run(args: Args) -> mdvrp_ga::error::Result<()> {
    info!("loading problem from {}", args.instance.display());
    let problem = Problem::from_json_file(&args.instance)?;

    let mut config = Config::new()
        .with_population_size(args.population_size)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate)
        .with_refill_population(args.refill);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(secs) = args.time_limit {
        config = config.with_time_limit(Duration::from_secs(secs));
    }

    let mut algorithm = GaAlgorithm::new(problem, config)?;
    let result = algorithm.run()?;
    let routes = result.decode_routes(&algorithm.problem, &algorithm.assignment)?;

    let stats = SearchStatistics::from_run(&result, &routes, algorithm.run_time);
    println!("{}", stats.format());
    println!();
    write_solution(&mut std::io::stdout().lock(), &result, &routes, &algorithm.problem)?;

    if let Some(path) = &args.output {
        save_result_json(&result, path)?;
        info!("run result written to {}", path.display());
    }
    if let Some(path) = &args.report {
        save_solution(&result, &routes, &algorithm.problem, path)?;
        info!("route report written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
