//! Budget sensitivity analysis.
//!
//! Re-runs the full optimization across a sweep of budgets to show how
//! the attainable value responds to loosening or tightening the
//! constraint — "with another 10,000 of budget, how much more return is
//! there?".

use crate::runner::Optimizer;

/// One row of the sensitivity table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityRecord {
    /// The budget this row was optimized under.
    pub budget: f64,
    /// Best total value found at this budget.
    pub total_value: f64,
    /// Number of items in the winning selection.
    pub item_count: usize,
    /// Cost of the winning selection.
    pub total_cost: f64,
    /// `total_cost / budget`, as a percentage. Zero for a zero budget.
    pub budget_utilization_pct: f64,
}

impl Optimizer {
    /// Re-optimizes once per budget and tabulates the outcomes.
    ///
    /// With `budgets = None`, sweeps ten evenly spaced budgets from 50%
    /// to 150% of the configured budget. The configured budget is
    /// overridden for each run and restored once the sweep finishes; the
    /// sweep holds the engine's only mutable borrow, so no other use can
    /// interleave with it.
    ///
    /// Each run draws from the configured seed, so a seeded engine
    /// produces a fully reproducible table.
    pub fn analyze_budget_sensitivity(&mut self, budgets: Option<&[f64]>) -> Vec<SensitivityRecord> {
        let sweep: Vec<f64> = match budgets {
            Some(range) => range.to_vec(),
            None => default_sweep(self.config().budget),
        };

        let original_budget = self.config().budget;
        let mut records = Vec::with_capacity(sweep.len());
        for &budget in &sweep {
            self.set_budget(budget);
            let result = self.optimize();
            records.push(SensitivityRecord {
                budget,
                total_value: result.total_value,
                item_count: result.selected_items.len(),
                total_cost: result.total_cost,
                budget_utilization_pct: if budget > 0.0 {
                    result.total_cost / budget * 100.0
                } else {
                    0.0
                },
            });
        }
        self.set_budget(original_budget);
        records
    }
}

/// Ten evenly spaced budgets from 50% to 150% of `budget`.
fn default_sweep(budget: f64) -> Vec<f64> {
    let lo = budget * 0.5;
    let hi = budget * 1.5;
    (0..10).map(|i| lo + (hi - lo) * i as f64 / 9.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Item, ItemCatalog};
    use crate::config::OptimizerConfig;

    fn three_crop_catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            Item::new("A", 50.0, 80.0),
            Item::new("B", 30.0, 50.0),
            Item::new("C", 20.0, 35.0),
        ])
        .unwrap()
    }

    fn engine(budget: f64) -> Optimizer {
        let config = OptimizerConfig::default()
            .with_budget(budget)
            .with_population_size(10)
            .with_num_generations(150)
            .with_seed(42);
        Optimizer::new(three_crop_catalog(), config).unwrap()
    }

    #[test]
    fn test_sweep_has_one_row_per_budget() {
        let mut optimizer = engine(100.0);
        let table = optimizer.analyze_budget_sensitivity(Some(&[50.0, 100.0, 150.0]));

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].budget, 50.0);
        assert_eq!(table[1].budget, 100.0);
        assert_eq!(table[2].budget, 150.0);
    }

    #[test]
    fn test_value_non_decreasing_over_growing_budgets() {
        // More budget can never reduce the attainable optimum; with a
        // 3-item catalog and 150 generations every run finds it.
        let mut optimizer = engine(100.0);
        let table = optimizer.analyze_budget_sensitivity(Some(&[20.0, 50.0, 80.0, 100.0, 120.0]));

        for pair in table.windows(2) {
            assert!(
                pair[1].total_value >= pair[0].total_value,
                "value regressed from {} to {} between budgets {} and {}",
                pair[0].total_value,
                pair[1].total_value,
                pair[0].budget,
                pair[1].budget
            );
        }
    }

    #[test]
    fn test_rows_respect_their_budget() {
        let mut optimizer = engine(100.0);
        let table = optimizer.analyze_budget_sensitivity(Some(&[19.0, 35.0, 60.0, 100.0]));

        for row in &table {
            assert!(
                row.total_cost <= row.budget,
                "budget {}: cost {} exceeds it",
                row.budget,
                row.total_cost
            );
        }
        // 19 is below the cheapest item: nothing fits.
        assert_eq!(table[0].total_value, 0.0);
        assert_eq!(table[0].item_count, 0);
    }

    #[test]
    fn test_budget_restored_after_sweep() {
        let mut optimizer = engine(100.0);
        optimizer.analyze_budget_sensitivity(Some(&[10.0, 200.0]));
        assert_eq!(optimizer.config().budget, 100.0);
    }

    #[test]
    fn test_default_sweep_spans_half_to_one_and_a_half() {
        let sweep = default_sweep(100.0);
        assert_eq!(sweep.len(), 10);
        assert!((sweep[0] - 50.0).abs() < 1e-9);
        assert!((sweep[9] - 150.0).abs() < 1e-9);
        for pair in sweep.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_default_sweep_used_when_unspecified() {
        let mut optimizer = engine(100.0);
        let table = optimizer.analyze_budget_sensitivity(None);
        assert_eq!(table.len(), 10);
        assert!((table[0].budget - 50.0).abs() < 1e-9);
        assert!((table[9].budget - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_utilization_guards_zero_budget() {
        let mut optimizer = engine(100.0);
        let table = optimizer.analyze_budget_sensitivity(Some(&[0.0]));
        assert_eq!(table[0].budget_utilization_pct, 0.0);
        assert_eq!(table[0].total_cost, 0.0);
    }

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let mut a = engine(100.0);
        let mut b = engine(100.0);
        assert_eq!(
            a.analyze_budget_sensitivity(None),
            b.analyze_budget_sensitivity(None)
        );
    }
}
