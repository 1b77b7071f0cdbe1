//! GA generational loop.
//!
//! [`GaRunner`] drives one run: initialization, then per generation
//! breeding → mutation → evaluation → elitism → evaluation. The run always
//! completes the configured number of generations.

use super::config::GaConfig;
use super::elitism::apply_elitism;
use super::operators::{maybe_crossover, mutate_population};
use super::selection::roulette_pair;
use super::types::{evaluate_population, generate_population, Individual};
use crate::error::Error;
use crate::knapsack::Knapsack;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, info, trace};

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best individual of the final population.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population, then after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner};
/// use knapsack_ga::knapsack::Knapsack;
///
/// let items = vec![1.0, 2.0, 3.0, 4.0];
/// let knapsack = Knapsack::new(5.0, items.clone(), items, 5.0).unwrap();
/// let config = GaConfig::default().with_generations(200).with_seed(42);
/// let result = GaRunner::run(&knapsack, &config).unwrap();
/// assert!(result.best_fitness <= 5.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(knapsack: &Knapsack, config: &GaConfig) -> Result<GaResult, Error> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(knapsack, config, &mut rng)
    }

    /// Runs the GA drawing every random number from `rng`.
    ///
    /// Two runs fed identical random streams return identical results.
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        knapsack: &Knapsack,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, Error> {
        config.validate()?;
        knapsack.validate()?;

        let elite_count = config.elite_count();
        info!(
            items = knapsack.item_count(),
            population = config.population_size,
            generations = config.generations,
            elite_count,
            "starting GA run"
        );

        // 1. Initialize population (evaluated and sorted)
        let mut population = generate_population(config.population_size, knapsack, rng);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(population[0].fitness);

        // 2. Generational loop
        for generation in 0..config.generations {
            let mut bred = breed(&population, config.crossover_rate, rng);

            let flipped = mutate_population(&mut bred, config.mutation_rate, rng);
            evaluate_population(&mut bred, knapsack, config.parallel);

            trace!(
                generation = generation + 1,
                flipped,
                bred_best = bred[0].fitness,
                "merging elites"
            );
            population = apply_elitism(&population, &bred, elite_count);
            evaluate_population(&mut population, knapsack, config.parallel);

            fitness_history.push(population[0].fitness);
            debug!(
                generation = generation + 1,
                best = population[0].fitness,
                "generation complete"
            );
        }

        let best = population.swap_remove(0);
        info!(
            best = best.fitness,
            selected = best.selected_count(),
            optimum = knapsack.optimum,
            "GA run complete"
        );

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Breeds a same-size generation from a sorted `population`.
///
/// Pairs are selected by roulette and crossed with probability
/// `crossover_rate`. With an odd population size the last pair contributes
/// only its first child.
fn breed<R: Rng>(population: &[Individual], crossover_rate: f64, rng: &mut R) -> Vec<Individual> {
    let n = population.len();
    let mut bred = Vec::with_capacity(n);
    for i in (0..n).step_by(2) {
        let (mut a, mut b) = roulette_pair(population, rng);
        maybe_crossover(&mut a, &mut b, crossover_rate, rng);
        bred.push(a);
        if i + 1 < n {
            bred.push(b);
        }
    }
    bred
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances;
    use crate::random::create_rng;

    fn small() -> Knapsack {
        instances::default_instance()
    }

    fn paper_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_generations(1000)
            .with_crossover_rate(0.85)
            .with_mutation_rate(0.03)
            .with_elitism_rate(0.05)
    }

    #[test]
    fn test_small_instance_reaches_optimum() {
        let knapsack = small();
        for seed in 0..10 {
            let config = paper_config().with_seed(seed);
            let result = GaRunner::run(&knapsack, &config).unwrap();
            assert_eq!(
                result.best_fitness, 5.0,
                "seed {seed} ended at {}",
                result.best
            );
        }
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let knapsack = instances::get(2);
        let config = paper_config().with_generations(100).with_seed(7);
        let a = GaRunner::run(&knapsack, &config).unwrap();
        let b = GaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.best_fitness.to_bits(), b.best_fitness.to_bits());
    }

    #[test]
    fn test_run_with_rng_replays_stream() {
        let knapsack = instances::get(1);
        let config = paper_config().with_generations(50);
        let a = GaRunner::run_with_rng(&knapsack, &config, &mut create_rng(99)).unwrap();
        let b = GaRunner::run_with_rng(&knapsack, &config, &mut create_rng(99)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_zero_generations_returns_best_initial() {
        let knapsack = instances::get(1);
        let config = paper_config().with_generations(0);

        let result = GaRunner::run_with_rng(&knapsack, &config, &mut create_rng(3)).unwrap();
        let initial = generate_population(config.population_size, &knapsack, &mut create_rng(3));

        assert_eq!(result.best, initial[0]);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history, vec![initial[0].fitness]);
    }

    #[test]
    fn test_elitism_is_monotonic() {
        let knapsack = instances::get(11);
        let config = paper_config().with_generations(300).with_seed(42);
        let result = GaRunner::run(&knapsack, &config).unwrap();

        assert_eq!(result.fitness_history.len(), 301);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness regressed: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_best_matches_its_genes() {
        let knapsack = instances::get(5);
        let config = paper_config().with_generations(100).with_seed(1);
        let result = GaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(result.best.genes.len(), knapsack.item_count());
        assert_eq!(result.best_fitness, knapsack.objective(&result.best.genes));
        assert_eq!(result.best_fitness, result.best.fitness);
    }

    #[test]
    fn test_breed_keeps_size_for_odd_and_even() {
        let knapsack = instances::get(3);
        let mut rng = create_rng(5);
        for n in [2, 3, 7, 20, 21] {
            let population = generate_population(n, &knapsack, &mut rng);
            let bred = breed(&population, 0.85, &mut rng);
            assert_eq!(bred.len(), n);
            assert!(bred.iter().all(|i| i.genes.len() == knapsack.item_count()));
        }
    }

    #[test]
    fn test_odd_population_runs() {
        let knapsack = small();
        let config = paper_config()
            .with_population_size(7)
            .with_generations(50)
            .with_seed(8);
        let result = GaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(result.fitness_history.len(), 51);
    }

    #[test]
    fn test_single_item_instance() {
        let knapsack = Knapsack::new(1.0, vec![1.0], vec![3.0], 3.0).unwrap();
        let config = paper_config().with_generations(20).with_seed(4);
        let result = GaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(result.best_fitness, 3.0);
    }

    #[test]
    fn test_all_overweight_items() {
        // Every non-empty selection is infeasible; the empty one scores 0.
        let knapsack = Knapsack::new(1.0, vec![5.0, 6.0, 7.0], vec![2.0, 3.0, 4.0], 0.0).unwrap();
        let config = paper_config().with_generations(200).with_seed(12);
        let result = GaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(result.best_fitness, 0.0);
        assert_eq!(result.best.selected_count(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let knapsack = small();
        let config = paper_config().with_population_size(1);
        assert!(matches!(
            GaRunner::run(&knapsack, &config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_instance_is_rejected() {
        let knapsack = Knapsack {
            capacity: 1.0,
            weights: vec![1.0, 2.0],
            values: vec![1.0],
            optimum: 0.0,
        };
        assert!(matches!(
            GaRunner::run(&knapsack, &paper_config()),
            Err(Error::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_without_elitism_completes() {
        let knapsack = instances::get(4);
        let config = paper_config()
            .with_elitism_rate(0.0)
            .with_generations(100)
            .with_seed(2);
        let result = GaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(result.fitness_history.len(), 101);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let knapsack = instances::get(12);
        let config = paper_config().with_generations(100).with_seed(21);
        let seq = GaRunner::run(&knapsack, &config).unwrap();
        let par = GaRunner::run(&knapsack, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(seq, par);
    }
}
