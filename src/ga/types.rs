//! Individuals and population-level helpers.
//!
//! An [`Individual`] is a fixed-length boolean gene vector plus a cached
//! fitness. The fitness is only authoritative right after
//! [`evaluate_population`] has run; operators that touch genes leave it stale.

use crate::knapsack::Knapsack;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// A candidate solution: one inclusion flag per item, plus its fitness.
///
/// Individuals are plain values. Cloning yields an independent copy, which
/// is what selection hands to the in-place variation operators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Inclusion flag for each item of the instance.
    pub genes: Vec<bool>,

    /// Cached objective value. Higher is better.
    pub fitness: f64,
}

impl Individual {
    /// Creates an individual from genes and evaluates it against `knapsack`.
    pub fn evaluated(genes: Vec<bool>, knapsack: &Knapsack) -> Self {
        let fitness = knapsack.objective(&genes);
        Self { genes, fitness }
    }

    /// Creates an individual with uniformly random genes and evaluates it.
    pub fn random<R: Rng>(knapsack: &Knapsack, rng: &mut R) -> Self {
        let genes = (0..knapsack.item_count())
            .map(|_| rng.random_bool(0.5))
            .collect();
        Self::evaluated(genes, knapsack)
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }
}

/// Renders genes as a bit string followed by the fitness, e.g. `1001 F: 5`.
impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        write!(f, " F: {}", self.fitness)
    }
}

/// Builds `n` random individuals, evaluated and sorted best first.
pub fn generate_population<R: Rng>(n: usize, knapsack: &Knapsack, rng: &mut R) -> Vec<Individual> {
    let mut population: Vec<Individual> =
        (0..n).map(|_| Individual::random(knapsack, rng)).collect();
    sort_descending(&mut population);
    population
}

/// Recomputes every fitness and sorts the population best first.
///
/// With the `parallel` feature and `parallel = true`, fitness is computed on
/// rayon's pool. The objective is pure, so the result is identical either way.
pub fn evaluate_population(population: &mut [Individual], knapsack: &Knapsack, parallel: bool) {
    refresh_fitness(population, knapsack, parallel);
    sort_descending(population);
}

#[cfg(feature = "parallel")]
fn refresh_fitness(population: &mut [Individual], knapsack: &Knapsack, parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            ind.fitness = knapsack.objective(&ind.genes);
        });
    } else {
        for ind in population.iter_mut() {
            ind.fitness = knapsack.objective(&ind.genes);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn refresh_fitness(population: &mut [Individual], knapsack: &Knapsack, _parallel: bool) {
    for ind in population.iter_mut() {
        ind.fitness = knapsack.objective(&ind.genes);
    }
}

/// Stable sort by fitness, highest first. Incomparable values count as equal.
pub fn sort_descending(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
}
