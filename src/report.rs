//! Result reporting views.
//!
//! Derives the run summary and the per-item breakdown table from a
//! completed optimization. Both views are plain data; rendering them as
//! tables, charts, or alerts is the job of external display layers.

use crate::runner::Optimizer;
use std::cmp::Ordering;

/// One selected item echoed with its catalog cost and value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedItem {
    pub name: String,
    pub cost: f64,
    pub value: f64,
}

/// Aggregate view of a completed run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// The selected items with their catalog details, in catalog order.
    pub selected_items: Vec<SelectedItem>,
    /// Number of selected items.
    pub item_count: usize,
    /// Sum of the selected items' values.
    pub total_value: f64,
    /// Sum of the selected items' costs.
    pub total_cost: f64,
    /// The budget the run was constrained by.
    pub budget: f64,
    /// `total_cost / budget`, as a percentage. Zero for a zero budget.
    pub budget_utilization_pct: f64,
    /// Best fitness reached during the run.
    pub best_fitness: f64,
    /// Earliest generation at which the final best fitness was attained.
    pub convergence_generation: usize,
}

/// One row of the detailed per-item table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemReport {
    pub name: String,
    pub cost: f64,
    pub value: f64,
    /// Whether the winning selection includes this item.
    pub selected: bool,
    /// `(value - cost) / cost * 100`, rounded to 2 decimals.
    pub roi: f64,
    /// `value / cost`, rounded to 2 decimals.
    pub efficiency: f64,
}

impl Optimizer {
    /// Summarizes the most recent run.
    ///
    /// Returns `Err` if no run has completed on this engine.
    pub fn summary(&self) -> Result<RunSummary, String> {
        let result = self
            .last_result()
            .ok_or_else(|| String::from("no completed optimization run; call optimize() first"))?;

        let selected_items: Vec<SelectedItem> = self
            .catalog()
            .items()
            .iter()
            .zip(&result.best_selection)
            .filter(|(_, &selected)| selected)
            .map(|(item, _)| SelectedItem {
                name: item.name.clone(),
                cost: item.cost,
                value: item.value,
            })
            .collect();

        let budget = self.config().budget;
        let budget_utilization_pct = if budget > 0.0 {
            result.total_cost / budget * 100.0
        } else {
            0.0
        };

        Ok(RunSummary {
            item_count: selected_items.len(),
            selected_items,
            total_value: result.total_value,
            total_cost: result.total_cost,
            budget,
            budget_utilization_pct,
            best_fitness: result.best_fitness,
            convergence_generation: result.convergence_generation,
        })
    }

    /// Per-item breakdown of the most recent run.
    ///
    /// One row per catalog item, selected items first, highest ROI first
    /// within each group. The sort is stable, so equal-ROI items keep
    /// their catalog order.
    ///
    /// Returns `Err` if no run has completed on this engine.
    pub fn detailed_results(&self) -> Result<Vec<ItemReport>, String> {
        let result = self
            .last_result()
            .ok_or_else(|| String::from("no completed optimization run; call optimize() first"))?;

        let mut rows: Vec<ItemReport> = self
            .catalog()
            .items()
            .iter()
            .zip(&result.best_selection)
            .map(|(item, &selected)| ItemReport {
                name: item.name.clone(),
                cost: item.cost,
                value: item.value,
                selected,
                roi: round2((item.value - item.cost) / item.cost * 100.0),
                efficiency: round2(item.value / item.cost),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.selected.cmp(&a.selected).then(
                b.roi
                    .partial_cmp(&a.roi)
                    .unwrap_or(Ordering::Equal),
            )
        });
        Ok(rows)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
