//! Generational loop execution.
//!
//! [`Optimizer`] owns a run's state: the current population, the
//! accumulated per-generation history, and the best fitness seen so far.
//! One instance serves one in-flight optimization at a time; the
//! `&mut self` receivers make concurrent runs on a shared instance
//! impossible to express.
//!
//! The loop runs a fixed number of generations — there is no
//! convergence-based early stopping, so `convergence_generation` is
//! always defined relative to the full run. The only permitted
//! truncation is the cooperative cancellation flag, checked once per
//! generation.

use crate::catalog::ItemCatalog;
use crate::config::OptimizerConfig;
use crate::fitness::{self, Chromosome};
use crate::operators;
use crate::selection;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mean and maximum fitness of one generation.
///
/// One record is appended per generation, in generation order, before
/// that generation's survivors are chosen. Records are never rewritten.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Mean fitness across the population.
    pub mean_fitness: f64,
    /// Maximum fitness in the population.
    pub max_fitness: f64,
}

/// Outcome of a completed optimization run. Immutable once materialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// Names of the selected items, in catalog order.
    pub selected_items: Vec<String>,
    /// Sum of the selected items' values.
    pub total_value: f64,
    /// Sum of the selected items' costs. Never exceeds the budget.
    pub total_cost: f64,
    /// Best fitness reached during the run.
    pub best_fitness: f64,
    /// Earliest generation at which the run's final best fitness was
    /// first attained. Stays 0 when no feasible non-empty selection was
    /// ever found.
    pub convergence_generation: usize,
    /// Whether the run was cancelled before completing every generation.
    pub cancelled: bool,
    /// The winning chromosome; bit `i` selects catalog item `i`.
    pub best_selection: Vec<bool>,
    /// Per-generation fitness statistics, in generation order.
    pub history: Vec<GenerationRecord>,
}

/// Executes the knapsack GA over a catalog.
///
/// # Usage
///
/// ```
/// use agro_optim::{Item, ItemCatalog, Optimizer, OptimizerConfig};
///
/// let catalog = ItemCatalog::new(vec![
///     Item::new("Soybean", 50.0, 80.0),
///     Item::new("Corn", 30.0, 50.0),
///     Item::new("Wheat", 20.0, 35.0),
/// ])?;
/// let config = OptimizerConfig::default()
///     .with_budget(100.0)
///     .with_population_size(10)
///     .with_num_generations(100)
///     .with_seed(42);
///
/// let mut optimizer = Optimizer::new(catalog, config)?;
/// let result = optimizer.optimize();
/// assert!(result.total_cost <= 100.0);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    catalog: ItemCatalog,
    config: OptimizerConfig,
    last_result: Option<OptimizationResult>,
}

impl Optimizer {
    /// Creates an engine over `catalog` with a validated `config`.
    ///
    /// Fails fast: an invalid configuration never produces a partially
    /// constructed engine.
    pub fn new(catalog: ItemCatalog, config: OptimizerConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            last_result: None,
        })
    }

    /// The catalog this engine optimizes over.
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// The engine's configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The result of the most recent completed run, if any.
    pub fn last_result(&self) -> Option<&OptimizationResult> {
        self.last_result.as_ref()
    }

    /// Overrides the budget for a sensitivity-sweep run.
    pub(crate) fn set_budget(&mut self, budget: f64) {
        self.config.budget = budget;
    }

    /// Runs the full optimization.
    pub fn optimize(&mut self) -> OptimizationResult {
        self.optimize_with_cancel(None)
    }

    /// Runs the optimization with an optional cancellation flag.
    ///
    /// The flag is checked once per generation. When it is set, the loop
    /// stops before evaluating the pending generation and the result is
    /// reported from the population as it stands, with `cancelled` set.
    pub fn optimize_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> OptimizationResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = self.catalog.len();
        let num_parents = self.config.population_size / 2;
        let num_offsprings = self.config.population_size - num_parents;

        // Generation 0: independent uniform bit draws per gene.
        let mut population: Vec<Chromosome> = (0..self.config.population_size)
            .map(|_| (0..n).map(|_| rng.random_bool(0.5)).collect())
            .collect();

        let mut history = Vec::with_capacity(self.config.num_generations);
        let mut best_fitness = 0.0_f64;
        let mut convergence_generation = 0_usize;
        let mut cancelled = false;

        for generation in 0..self.config.num_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let scores =
                fitness::evaluate_population(&population, &self.catalog, self.config.budget);
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            history.push(GenerationRecord {
                generation,
                mean_fitness: mean,
                max_fitness: max,
            });

            // Overwritten on every strict improvement, so the final value
            // is the earliest generation attaining the final best.
            if max > best_fitness {
                best_fitness = max;
                convergence_generation = generation;
            }

            let parents = selection::select_parents(&scores, &population, num_parents);
            let mut offsprings = operators::crossover(
                &parents,
                num_offsprings,
                self.config.crossover_rate,
                self.config.crossover_type,
                &mut rng,
            );
            operators::mutate(&mut offsprings, self.config.mutation_rate, &mut rng);

            // Survivors pass into the next population unchanged; this is
            // what keeps the best fitness monotone across generations.
            population = parents;
            population.append(&mut offsprings);
        }

        let result = self.report(
            &population,
            history,
            best_fitness,
            convergence_generation,
            cancelled,
        );
        self.last_result = Some(result.clone());
        result
    }

    /// Materializes the result from the final population.
    fn report(
        &self,
        population: &[Chromosome],
        history: Vec<GenerationRecord>,
        best_fitness: f64,
        convergence_generation: usize,
        cancelled: bool,
    ) -> OptimizationResult {
        let scores = fitness::evaluate_population(population, &self.catalog, self.config.budget);
        // Same tie-break as parent selection: lowest index wins.
        let winner = selection::argmax_first(&scores);

        // A zero-fitness winner is either infeasible or empty; the empty
        // selection is the canonical feasible zero-fitness solution, and
        // it keeps total_cost within any budget.
        let best_selection: Vec<bool> = if scores[winner] > 0.0 {
            population[winner].clone()
        } else {
            vec![false; self.catalog.len()]
        };

        let mut selected_items = Vec::new();
        let mut total_value = 0.0;
        let mut total_cost = 0.0;
        for (item, &selected) in self.catalog.items().iter().zip(&best_selection) {
            if selected {
                selected_items.push(item.name.clone());
                total_value += item.value;
                total_cost += item.cost;
            }
        }

        OptimizationResult {
            selected_items,
            total_value,
            total_cost,
            // A last-generation offspring can beat the tracked best; the
            // final population's maximum wins in that case.
            best_fitness: best_fitness.max(scores[winner]),
            convergence_generation,
            cancelled,
            best_selection,
            history,
        }
    }
}
