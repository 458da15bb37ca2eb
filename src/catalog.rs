//! Catalog input types.
//!
//! [`Item`] and [`ItemCatalog`] describe the investment options the
//! optimizer selects among: crops, inputs, equipment — anything with an
//! up-front cost and an expected return. Catalogs are validated eagerly
//! at construction so the engine never sees malformed input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single investment option.
///
/// Names need not be unique; the optimizer identifies items by their
/// position in the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name of the item.
    pub name: String,
    /// Up-front cost of selecting the item. Must be positive and finite.
    pub cost: f64,
    /// Expected value of selecting the item. Must be positive and finite.
    pub value: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, cost: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
        }
    }
}

/// A validated, ordered collection of items.
///
/// # Examples
///
/// ```
/// use agro_optim::{Item, ItemCatalog};
///
/// let catalog = ItemCatalog::new(vec![
///     Item::new("Soybean", 50.0, 80.0),
///     Item::new("Corn", 30.0, 50.0),
/// ])
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Validates and wraps a list of items.
    ///
    /// Returns `Err` if the list is empty or any item carries a
    /// non-positive or non-finite cost or value.
    pub fn new(items: Vec<Item>) -> Result<Self, String> {
        if items.is_empty() {
            return Err("catalog must contain at least one item".into());
        }
        for (i, item) in items.iter().enumerate() {
            if !item.cost.is_finite() || item.cost <= 0.0 {
                return Err(format!(
                    "item {} ({:?}): cost must be positive and finite, got {}",
                    i, item.name, item.cost
                ));
            }
            if !item.value.is_finite() || item.value <= 0.0 {
                return Err(format!(
                    "item {} ({:?}): value must be positive and finite, got {}",
                    i, item.name, item.value
                ));
            }
        }
        Ok(Self { items })
    }

    /// Number of items in the catalog. Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a catalog cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Generates a reproducible sample catalog of named crops.
    ///
    /// Costs are drawn from `5..50` and values from `10..150` using the
    /// given seed, so the same arguments always produce the same catalog.
    /// Handy for demos and benchmarks. `num_items` is clamped to at
    /// least 1.
    pub fn sample(num_items: usize, seed: u64) -> Self {
        const CROPS: &[&str] = &[
            "Corn", "Soybean", "Wheat", "Rice", "Beans", "Coffee", "Sugarcane", "Cotton",
            "Cassava", "Potato", "Tomato", "Onion", "Garlic", "Carrot", "Pumpkin", "Watermelon",
            "Melon", "Banana", "Orange", "Mango", "Grape", "Apple", "Pear", "Peach", "Strawberry",
            "Lettuce", "Kale", "Broccoli", "Cauliflower", "Spinach",
        ];

        let n = num_items.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let items = (0..n)
            .map(|i| {
                let name = if i < CROPS.len() {
                    CROPS[i].to_string()
                } else {
                    format!("{} {}", CROPS[i % CROPS.len()], i / CROPS.len() + 1)
                };
                Item {
                    name,
                    cost: rng.random_range(5..50) as f64,
                    value: rng.random_range(10..150) as f64,
                }
            })
            .collect();
        Self { items }
    }
}
