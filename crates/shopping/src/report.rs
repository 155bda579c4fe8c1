use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One ingredient requirement of a single recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub unit: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedEntry {
    pub name: String,
    pub unit: String,
    pub quantity: u64,
}

impl fmt::Display for AggregatedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.unit, self.quantity)
    }
}

/// Decides which line items end up on the same shopping list row.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MergePolicy {
    /// Same name and same unit. Different units stay on separate rows.
    #[default]
    NameAndUnit,
    /// Same name only. The first unit seen is kept and quantities are summed as is.
    Name,
}

/// Anything that can hand its ingredient requirements to the aggregator.
pub trait LineItems {
    fn line_items(&self) -> &[LineItem];
}

impl LineItems for Vec<LineItem> {
    fn line_items(&self) -> &[LineItem] {
        self
    }
}

/// A recipe sitting in a user's shopping cart, with its ingredient amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedRecipe {
    pub id: String,
    pub title: String,
    pub line_items: Vec<LineItem>,
}

impl LineItems for QueuedRecipe {
    fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingReport {
    pub entries: Vec<AggregatedEntry>,
}

impl ShoppingReport {
    /// Merges the line items of every recipe, in order, keeping the first-seen
    /// order of ingredients.
    pub fn build<R: LineItems>(recipes: &[R], policy: MergePolicy) -> Self {
        let mut merged: IndexMap<(&str, Option<&str>), AggregatedEntry> = IndexMap::new();

        for item in recipes.iter().flat_map(|recipe| recipe.line_items()) {
            let key = match policy {
                MergePolicy::NameAndUnit => (item.name.as_str(), Some(item.unit.as_str())),
                MergePolicy::Name => (item.name.as_str(), None),
            };

            let entry = merged.entry(key).or_insert_with(|| AggregatedEntry {
                name: item.name.to_owned(),
                unit: item.unit.to_owned(),
                quantity: 0,
            });

            entry.quantity += u64::from(item.quantity);
        }

        Self {
            entries: merged.into_values().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }

    /// Plain text body of `shopping_list.txt`, one newline-terminated row per entry.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShoppingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

pub fn build_shopping_report<R: LineItems>(recipes: &[R]) -> ShoppingReport {
    ShoppingReport::build(recipes, MergePolicy::default())
}
