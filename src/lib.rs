//! Budget-constrained resource allocation via a binary-knapsack
//! genetic algorithm.
//!
//! Given a catalog of items — crops, inputs, equipment — each with an
//! acquisition cost and an expected value, and a fixed budget, the
//! optimizer searches for the subset of items maximizing total value
//! without exceeding the budget.
//!
//! # Algorithm
//!
//! - **Representation**: fixed-length bit vector, one gene per catalog
//!   item ([`Chromosome`]).
//! - **Fitness**: sum of selected values, zeroed for over-budget
//!   solutions — the death penalty ([`fitness`]).
//! - **Selection**: elitist truncation; the top half of each generation
//!   survives unchanged, which makes the best fitness monotone over a
//!   run ([`selection`]).
//! - **Crossover**: one-point splice, midpoint-fixed or drawn per
//!   offspring ([`operators`]).
//! - **Mutation**: at most one bit flip per offspring per generation.
//!
//! # Example
//!
//! ```
//! use agro_optim::{Item, ItemCatalog, Optimizer, OptimizerConfig};
//!
//! let catalog = ItemCatalog::new(vec![
//!     Item::new("Soybean", 50.0, 80.0),
//!     Item::new("Corn", 30.0, 50.0),
//!     Item::new("Wheat", 20.0, 35.0),
//! ])?;
//! let config = OptimizerConfig::default()
//!     .with_budget(100.0)
//!     .with_population_size(10)
//!     .with_num_generations(100)
//!     .with_seed(42);
//!
//! let mut optimizer = Optimizer::new(catalog, config)?;
//! let result = optimizer.optimize();
//! assert!(result.total_cost <= 100.0);
//!
//! let summary = optimizer.summary()?;
//! assert_eq!(summary.total_value, result.total_value);
//! # Ok::<(), String>(())
//! ```
//!
//! # Reproducibility
//!
//! All randomness flows from an explicit, seedable generator owned by
//! the engine: identical seed and configuration produce bit-identical
//! populations at every generation. Two engines never share random
//! state, so unrelated optimizations cannot disturb each other's runs.
//!
//! # Output
//!
//! Results are plain data — [`OptimizationResult`] with its
//! per-generation [`GenerationRecord`] history, the [`RunSummary`] and
//! [`ItemReport`] views, and the [`SensitivityRecord`] budget-sweep
//! table. Rendering, persistence, and alerting belong to external
//! consumers.

mod catalog;
mod config;
pub mod fitness;
pub mod operators;
mod report;
mod runner;
pub mod selection;
mod sensitivity;

pub use catalog::{Item, ItemCatalog};
pub use config::OptimizerConfig;
pub use fitness::Chromosome;
pub use operators::CrossoverType;
pub use report::{ItemReport, RunSummary, SelectedItem};
pub use runner::{GenerationRecord, OptimizationResult, Optimizer};
pub use sensitivity::SensitivityRecord;
