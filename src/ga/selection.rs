//! Roulette wheel parent selection.
//!
//! Parents are drawn in pairs, fitness-proportionately and without
//! replacement. Fitness may be negative (overweight selections), so every
//! spin works on fitness shifted by the worst member of the population.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::types::Individual;
use rand::Rng;

/// Selects two parents and returns owned copies of them.
///
/// The copies are independent of `population`, so they can be crossed and
/// mutated in place without touching the source generation.
///
/// `population` must be sorted best first; its last member defines the
/// shift that makes every weight non-negative.
///
/// # Panics
/// Panics if `population` has fewer than two individuals.
pub fn roulette_pair<R: Rng>(population: &[Individual], rng: &mut R) -> (Individual, Individual) {
    let [a, b] = roulette_indices(population, rng);
    (population[a].clone(), population[b].clone())
}

/// Selects two distinct indices into `population`.
///
/// The first spin covers all `n` individuals. The second spin excludes the
/// first winner from both the weight total and the walk. When every
/// remaining weight is zero the spin falls back to uniform odds.
///
/// # Panics
/// Panics if `population` has fewer than two individuals.
pub fn roulette_indices<R: Rng>(population: &[Individual], rng: &mut R) -> [usize; 2] {
    assert!(
        population.len() >= 2,
        "roulette selection needs at least two individuals"
    );

    let shift = population[population.len() - 1].fitness;
    let first = spin(population, shift, None, rng);
    let second = spin(population, shift, Some(first), rng);
    [first, second]
}

/// One spin of the wheel, skipping `skip` if set.
fn spin<R: Rng>(population: &[Individual], shift: f64, skip: Option<usize>, rng: &mut R) -> usize {
    let remaining = population.len() - usize::from(skip.is_some());
    let weight = |j: usize| population[j].fitness - shift;

    let total: f64 = (0..population.len())
        .filter(|&j| Some(j) != skip)
        .map(weight)
        .sum();
    let uniform = total <= 0.0;

    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    let mut fallback = None;
    for j in (0..population.len()).filter(|&j| Some(j) != skip) {
        let w = weight(j);
        if uniform {
            cumulative += 1.0 / remaining as f64;
        } else {
            cumulative += w / total;
        }
        if uniform || w > 0.0 || fallback.is_none() {
            fallback = Some(j);
        }
        if r < cumulative {
            return j;
        }
    }

    // Rounding left the cumulative sum just short of `r`.
    fallback.unwrap_or_default()
}
