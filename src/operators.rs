//! Recombination and mutation operators for bit-vector chromosomes.
//!
//! Crossover splices a prefix of one parent with the suffix of another at
//! a single point; the point is either fixed at the chromosome midpoint
//! or drawn fresh for every offspring, chosen by [`CrossoverType`].
//! Mutation flips at most one bit per offspring per generation — coarse
//! on purpose, tuned for catalogs of a few dozen items where a single
//! flip is already a meaningful move.

use crate::fitness::Chromosome;
use rand::Rng;
use std::str::FromStr;

/// Where the splice point falls for each recombination.
///
/// # Examples
///
/// ```
/// use agro_optim::CrossoverType;
///
/// let kind: CrossoverType = "random_point".parse().unwrap();
/// assert_eq!(kind, CrossoverType::RandomPoint);
/// assert!("two_point".parse::<CrossoverType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverType {
    /// Splice point fixed at `n / 2` for every recombination.
    SinglePoint,
    /// Splice point drawn uniformly from `1..n` for each offspring.
    RandomPoint,
}

impl Default for CrossoverType {
    fn default() -> Self {
        CrossoverType::SinglePoint
    }
}

impl FromStr for CrossoverType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_point" => Ok(CrossoverType::SinglePoint),
            "random_point" => Ok(CrossoverType::RandomPoint),
            other => Err(format!(
                "crossover_type must be \"single_point\" or \"random_point\", got {other:?}"
            )),
        }
    }
}

/// Produces exactly `num_offsprings` chromosomes by recombining `parents`.
///
/// Offspring `j` draws from `parents[j % k]` and `parents[(j + 1) % k]`,
/// pairing the parent pool cyclically. Each slot splices the pair at the
/// crossover point with probability `rate` (parent1's prefix, parent2's
/// suffix) and clones parent1 otherwise, so no slot is ever left
/// unfilled. Chromosomes too short to splice (`n < 2`) are always cloned.
///
/// # Panics
///
/// Panics if `parents` is empty.
pub fn crossover<R: Rng>(
    parents: &[Chromosome],
    num_offsprings: usize,
    rate: f64,
    kind: CrossoverType,
    rng: &mut R,
) -> Vec<Chromosome> {
    assert!(!parents.is_empty(), "crossover requires at least one parent");
    let k = parents.len();
    let n = parents[0].len();

    let mut offsprings = Vec::with_capacity(num_offsprings);
    for j in 0..num_offsprings {
        let parent1 = &parents[j % k];
        let parent2 = &parents[(j + 1) % k];

        if n >= 2 && rng.random_range(0.0..1.0) <= rate {
            let point = match kind {
                CrossoverType::SinglePoint => n / 2,
                CrossoverType::RandomPoint => rng.random_range(1..n),
            };
            let mut child = parent1.clone();
            child[point..].copy_from_slice(&parent2[point..]);
            offsprings.push(child);
        } else {
            offsprings.push(parent1.clone());
        }
    }
    offsprings
}

/// Applies at most one bit flip per offspring.
///
/// Each individual independently mutates with probability `rate`; a
/// mutating individual has exactly one uniformly chosen gene inverted.
pub fn mutate<R: Rng>(offsprings: &mut [Chromosome], rate: f64, rng: &mut R) {
    for child in offsprings.iter_mut() {
        if child.is_empty() {
            continue;
        }
        if rng.random_range(0.0..1.0) <= rate {
            let gene = rng.random_range(0..child.len());
            child[gene] = !child[gene];
        }
    }
}
