//! knapsack-ga: benchmark the knapsack genetic algorithm on the catalog
//! datasets.
//!
//! Each dataset is solved `--runs` times; the mean, best and worst of the
//! best fitness per run are printed next to the known optimum.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use knapsack_ga::benchmark::{run_many, Summary};
use knapsack_ga::ga::GaConfig;
use knapsack_ga::instances;
use knapsack_ga::knapsack::Knapsack;
use knapsack_ga::Error;
use tracing::{error, Level};

#[derive(Parser, Debug)]
#[command(name = "knapsack-ga", version, about = "Genetic algorithm for the 0/1 knapsack problem")]
struct Args {
    /// Dataset to solve (1-15, 0 for the 4-item default). All datasets when omitted.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(0..=15))]
    dataset: Option<u64>,

    /// Independent runs per dataset.
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Individuals per generation.
    #[arg(short, long, default_value_t = 20)]
    population: usize,

    /// Generations per run.
    #[arg(short, long, default_value_t = 1000)]
    generations: usize,

    #[arg(long, default_value_t = 0.85)]
    crossover_rate: f64,

    #[arg(long, default_value_t = 0.03)]
    mutation_rate: f64,

    #[arg(long, default_value_t = 0.05)]
    elitism_rate: f64,

    /// Base seed; run `i` uses `seed + i`.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run independent runs in parallel (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population,
            generations: self.generations,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            elitism_rate: self.elitism_rate,
            seed: self.seed,
            parallel: self.parallel,
        }
    }

    /// The requested dataset, or the whole catalog.
    fn datasets(&self) -> Vec<(usize, Knapsack)> {
        match self.dataset {
            Some(id) => vec![(id as usize, instances::get(id as usize))],
            None => instances::all().collect(),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = args.config();
    config.validate()?;

    let datasets = args.datasets();

    let start = Instant::now();
    for (id, knapsack) in datasets {
        let results = run_many(&knapsack, &config, args.runs)?;
        match Summary::from_results(&results) {
            Some(s) => println!(
                "Dataset: {} Optimum: {} Mean: {} Best: {} Worst: {}",
                id, knapsack.optimum, s.mean, s.best, s.worst
            ),
            None => println!("Dataset: {} Optimum: {} (no runs)", id, knapsack.optimum),
        }
    }
    println!("This took {:.2?}", start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["knapsack-ga", "--dataset", "42"]).is_err());
        assert!(Args::try_parse_from(["knapsack-ga", "-d", "16"]).is_err());
    }

    #[test]
    fn test_dataset_in_range() {
        let args = Args::try_parse_from(["knapsack-ga", "-d", "0"]).unwrap();
        let datasets = args.datasets();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0], (0, instances::default_instance()));

        let args = Args::try_parse_from(["knapsack-ga", "-d", "15"]).unwrap();
        assert_eq!(args.datasets()[0].1.item_count(), 50);
    }

    #[test]
    fn test_all_datasets_by_default() {
        let args = Args::try_parse_from(["knapsack-ga"]).unwrap();
        let ids: Vec<usize> = args.datasets().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, (1..=instances::DATASET_COUNT).collect::<Vec<_>>());
        assert!(args.config().validate().is_ok());
    }
}
