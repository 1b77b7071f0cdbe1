//! Variation operators for boolean gene vectors.
//!
//! Both operators work in place and leave the cached fitness stale; the
//! caller re-evaluates afterwards.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: swap the prefix `[0, point)` between two
//!   individuals
//! - [`crossover_point`]: draw a genuine split point
//! - [`maybe_crossover`]: apply the above with a given probability
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-gene bit flips on one individual
//! - [`mutate_population`]: the same over a whole generation

use super::types::Individual;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Swaps `genes[0..point]` between `a` and `b`.
///
/// Genes from `point` onwards stay where they are. With `point = p`,
/// afterwards `a.genes[..p]` holds the old `b.genes[..p]` and vice versa.
///
/// # Panics
/// Panics if `point` exceeds the length of either gene vector.
pub fn single_point_crossover(a: &mut Individual, b: &mut Individual, point: usize) {
    a.genes[..point].swap_with_slice(&mut b.genes[..point]);
}

/// Draws a crossover point uniformly from `[1, gene_count - 1]`.
///
/// Returns `None` when `gene_count < 2`, since no split leaves genes on
/// both sides.
pub fn crossover_point<R: Rng>(gene_count: usize, rng: &mut R) -> Option<usize> {
    if gene_count < 2 {
        return None;
    }
    Some(rng.random_range(1..gene_count))
}

/// Crosses `a` and `b` with probability `rate`.
///
/// Returns `true` if the genes were exchanged.
pub fn maybe_crossover<R: Rng>(
    a: &mut Individual,
    b: &mut Individual,
    rate: f64,
    rng: &mut R,
) -> bool {
    let r: f64 = rng.random();
    if r >= rate {
        return false;
    }
    match crossover_point(a.genes.len(), rng) {
        Some(point) => {
            single_point_crossover(a, b, point);
            true
        }
        None => false,
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each gene of `individual` independently with probability `rate`.
///
/// Returns the number of flipped genes. A rate of 1.0 flips every gene; a
/// rate of 0.0 flips none. One random draw is consumed per gene either way.
pub fn mutate<R: Rng>(individual: &mut Individual, rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in individual.genes.iter_mut() {
        let r: f64 = rng.random();
        if r < rate {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

/// Applies [`mutate`] to every individual of `population`.
///
/// Returns the total number of flipped genes.
pub fn mutate_population<R: Rng>(population: &mut [Individual], rate: f64, rng: &mut R) -> usize {
    population
        .iter_mut()
        .map(|ind| mutate(ind, rate, &mut *rng))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn ind(genes: &[bool]) -> Individual {
        Individual {
            genes: genes.to_vec(),
            fitness: 0.0,
        }
    }

    #[test]
    fn test_crossover_swaps_prefix() {
        let mut a = ind(&[true, true, true, true, true]);
        let mut b = ind(&[false, false, false, false, false]);
        single_point_crossover(&mut a, &mut b, 2);
        assert_eq!(a.genes, vec![false, false, true, true, true]);
        assert_eq!(b.genes, vec![true, true, false, false, false]);
    }

    #[test]
    fn test_crossover_point_range() {
        let mut rng = create_rng(42);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let p = crossover_point(6, &mut rng).unwrap();
            assert!((1..6).contains(&p), "point {p} out of [1, 5]");
            seen[p] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s), "every split should occur: {seen:?}");
    }

    #[test]
    fn test_crossover_point_single_gene() {
        let mut rng = create_rng(42);
        assert_eq!(crossover_point(1, &mut rng), None);
        assert_eq!(crossover_point(2, &mut rng), Some(1));
    }

    #[test]
    fn test_maybe_crossover_rate_zero_leaves_pair() {
        let mut rng = create_rng(42);
        let mut a = ind(&[true; 8]);
        let mut b = ind(&[false; 8]);
        for _ in 0..100 {
            assert!(!maybe_crossover(&mut a, &mut b, 0.0, &mut rng));
        }
        assert_eq!(a.genes, vec![true; 8]);
        assert_eq!(b.genes, vec![false; 8]);
    }

    #[test]
    fn test_maybe_crossover_rate_one_always_splits() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut a = ind(&[true; 8]);
            let mut b = ind(&[false; 8]);
            assert!(maybe_crossover(&mut a, &mut b, 1.0, &mut rng));
            assert!(!a.genes[0] && a.genes[7]);
            assert!(b.genes[0] && !b.genes[7]);
        }
    }

    #[test]
    fn test_mutation_rate_one_flips_everything() {
        let mut rng = create_rng(42);
        let mut pop = vec![ind(&[true, false, true]), ind(&[false, false, true])];
        let flipped = mutate_population(&mut pop, 1.0, &mut rng);
        assert_eq!(flipped, 6);
        assert_eq!(pop[0].genes, vec![false, true, false]);
        assert_eq!(pop[1].genes, vec![true, true, false]);
    }

    #[test]
    fn test_mutation_rate_zero_flips_nothing() {
        let mut rng = create_rng(42);
        let mut pop = vec![ind(&[true, false, true]); 10];
        let before = pop.clone();
        assert_eq!(mutate_population(&mut pop, 0.0, &mut rng), 0);
        assert_eq!(pop, before);
    }

    #[test]
    fn test_mutation_frequency_converges_to_rate() {
        let mut rng = create_rng(2024);
        let genes = 200_000;
        let mut individual = ind(&vec![false; genes]);
        let flipped = mutate(&mut individual, 0.03, &mut rng);
        let observed = flipped as f64 / genes as f64;
        assert!(
            (observed - 0.03).abs() < 0.002,
            "observed flip frequency {observed}"
        );
        assert_eq!(individual.selected_count(), flipped);
    }

    proptest! {
        #[test]
        fn prop_crossover_segments(
            pair in (2usize..64).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
                1..n,
            )),
        ) {
            let (ga, gb, p) = pair;
            let mut a = ind(&ga);
            let mut b = ind(&gb);
            single_point_crossover(&mut a, &mut b, p);

            prop_assert_eq!(&a.genes[..p], &gb[..p]);
            prop_assert_eq!(&a.genes[p..], &ga[p..]);
            prop_assert_eq!(&b.genes[..p], &ga[..p]);
            prop_assert_eq!(&b.genes[p..], &gb[p..]);
        }
    }
}
