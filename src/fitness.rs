//! Death-penalty fitness evaluation.
//!
//! A chromosome's fitness is the sum of the values of its selected items,
//! forced to zero when the selected costs exceed the budget. Infeasible
//! solutions get no partial credit, so no repair or penalty-scaling
//! operator is needed; tight budgets are compensated for with population
//! size and generation count rather than smarter constraint handling.

use crate::catalog::ItemCatalog;

/// A candidate selection: bit `i` set means catalog item `i` is selected.
///
/// Every chromosome in a population has length `catalog.len()`.
pub type Chromosome = Vec<bool>;

/// Total cost of the items selected by `chromosome`.
pub fn selection_cost(chromosome: &[bool], catalog: &ItemCatalog) -> f64 {
    chromosome
        .iter()
        .zip(catalog.items())
        .filter(|(&selected, _)| selected)
        .map(|(_, item)| item.cost)
        .sum()
}

/// Total value of the items selected by `chromosome`.
pub fn selection_value(chromosome: &[bool], catalog: &ItemCatalog) -> f64 {
    chromosome
        .iter()
        .zip(catalog.items())
        .filter(|(&selected, _)| selected)
        .map(|(_, item)| item.value)
        .sum()
}

/// Fitness of a single chromosome under the death penalty.
///
/// Returns the value sum of the selected items, or exactly `0.0` when
/// their cost sum exceeds `budget`. Pure function of its inputs.
pub fn evaluate(chromosome: &[bool], catalog: &ItemCatalog, budget: f64) -> f64 {
    if selection_cost(chromosome, catalog) <= budget {
        selection_value(chromosome, catalog)
    } else {
        0.0
    }
}

/// Fitness of every chromosome in a population, in population order.
///
/// Computed fresh on every call; nothing is cached or mutated in place.
pub fn evaluate_population(
    population: &[Chromosome],
    catalog: &ItemCatalog,
    budget: f64,
) -> Vec<f64> {
    population
        .iter()
        .map(|chromosome| evaluate(chromosome, catalog, budget))
        .collect()
}
