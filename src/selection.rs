//! Elitist truncation selection.
//!
//! Each generation, the fittest half of the population is copied
//! unchanged into the next generation as parents. Because the survivors
//! are never mutated, the best fitness seen so far can never regress —
//! this is what makes the engine's best-fitness curve monotone.
//!
//! Ties on fitness always resolve toward the lowest population index;
//! the same rule is used when the final solution is extracted, so equal
//! runs reproduce bit-for-bit.

use crate::fitness::Chromosome;

/// Sentinel written over already-picked slots. Below any real fitness.
const TAKEN: f64 = f64::NEG_INFINITY;

/// Selects the `k` fittest chromosomes by repeated truncation.
///
/// Repeatedly takes the lowest-index individual with the maximum
/// remaining fitness, copies it into the output, and excludes it from
/// further consideration. The returned parents keep that rank order, and
/// the minimum fitness among them is `>=` the fitness of every excluded
/// individual.
///
/// # Panics
///
/// Panics if `fitness` and `population` disagree in length, or if
/// `k > population.len()`.
pub fn select_parents(fitness: &[f64], population: &[Chromosome], k: usize) -> Vec<Chromosome> {
    assert_eq!(
        fitness.len(),
        population.len(),
        "one fitness score per chromosome"
    );
    assert!(
        k <= population.len(),
        "cannot select more parents than individuals"
    );

    let mut remaining = fitness.to_vec();
    let mut parents = Vec::with_capacity(k);
    for _ in 0..k {
        let best = argmax_first(&remaining);
        parents.push(population[best].clone());
        remaining[best] = TAKEN;
    }
    parents
}

/// Index of the maximum value; first occurrence on ties.
pub(crate) fn argmax_first(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}
