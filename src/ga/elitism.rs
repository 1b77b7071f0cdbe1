//! Elitist replacement between generations.

use super::types::Individual;

/// Merges the elite of `old` with the best of `bred`.
///
/// Slots `[0, elite_count)` keep `old`'s leading individuals untouched;
/// slots `[elite_count, n)` take `bred[0..n - elite_count]`. Both inputs
/// must be sorted best first. The result is not globally sorted and has to
/// be re-evaluated before it is treated as ranked.
///
/// `elite_count` is clamped to `old.len()`.
///
/// # Panics
/// Panics if `bred` is shorter than `old.len() - elite_count`.
pub fn apply_elitism(
    old: &[Individual],
    bred: &[Individual],
    elite_count: usize,
) -> Vec<Individual> {
    let n = old.len();
    let elite_count = elite_count.min(n);
    let mut merged = Vec::with_capacity(n);
    merged.extend_from_slice(&old[..elite_count]);
    merged.extend_from_slice(&bred[..n - elite_count]);
    merged
}
