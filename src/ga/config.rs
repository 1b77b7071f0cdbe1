//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. It is read-only once the
//! run starts.

use crate::error::Error;

/// Configuration for the knapsack genetic algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_elitism_rate(0.1)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to breed. Zero returns the best initial
    /// individual.
    pub generations: usize,

    /// Probability of crossing a selected pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-gene flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the previous generation carried over unchanged (0.0–1.0).
    ///
    /// The elite count is `ceil(elitism_rate * population_size)`.
    pub elitism_rate: f64,

    /// Random seed for reproducibility. `None` draws fresh entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness on rayon's pool.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 1000,
            crossover_rate: 0.85,
            mutation_rate: 0.03,
            elitism_rate: 0.05,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of individuals preserved by elitism each generation.
    pub fn elite_count(&self) -> usize {
        let count = (self.elitism_rate * self.population_size as f64).ceil() as usize;
        count.min(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elitism_rate", self.elitism_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }
}
