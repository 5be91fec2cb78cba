use serde_json::Value;

use crate::models::category::{CategoryEntry, UNNAMED_CATEGORY};
use crate::models::chart::{ChartSlice, HistogramRow, PieDataset};
use crate::models::currency::{Currency, RateTable};
use crate::normalize::{keys, pick_f64, pick_str};

use super::currency_service::CurrencyService;

/// Normalizes raw category buckets and derives the chart datasets.
pub struct CategoryService {
    currency_service: CurrencyService,
}

impl CategoryService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Normalize one side's raw bucket list into canonical entries.
    ///
    /// Tolerates a missing or non-array payload (empty result), variant field
    /// casing per entry, and missing fields (name defaults to "Other", value
    /// to 0). Duplicate names within the list resolve last-write-wins: the
    /// later value replaces the earlier one at its original position. That
    /// policy is deliberate and covered by tests, not incidental.
    pub fn normalize_buckets(&self, raw: &Value) -> Vec<CategoryEntry> {
        let Some(items) = raw.as_array() else {
            return Vec::new();
        };

        let mut entries: Vec<CategoryEntry> = Vec::with_capacity(items.len());
        for item in items {
            let category = pick_str(item, keys::CATEGORY_NAME, UNNAMED_CATEGORY);
            let value = pick_f64(item, keys::CATEGORY_TOTAL, 0.0);

            match entries.iter_mut().find(|e| e.category == category) {
                Some(existing) => existing.value = value,
                None => entries.push(CategoryEntry::new(category, value)),
            }
        }
        entries
    }

    /// The entry with the maximum value, or `None` for an empty list.
    /// Strict greater-than fold: the first entry wins ties.
    pub fn top_category<'a>(&self, entries: &'a [CategoryEntry]) -> Option<&'a CategoryEntry> {
        let mut best: Option<&CategoryEntry> = None;
        for entry in entries {
            match best {
                Some(b) if entry.value > b.value => best = Some(entry),
                None => best = Some(entry),
                _ => {}
            }
        }
        best
    }

    /// Merge both sides into comparative histogram rows in the display currency.
    ///
    /// Row order is the first-appearance order of category names, income list
    /// before expense list, so the chart is deterministic across renders.
    /// Rows where both converted sides are zero are dropped.
    pub fn build_histogram(
        &self,
        income: &[CategoryEntry],
        expense: &[CategoryEntry],
        target: Currency,
        rates: &RateTable,
    ) -> Vec<HistogramRow> {
        let mut names: Vec<&str> = Vec::new();
        for entry in income.iter().chain(expense.iter()) {
            if !names.contains(&entry.category.as_str()) {
                names.push(&entry.category);
            }
        }

        let side_value = |entries: &[CategoryEntry], name: &str| {
            entries
                .iter()
                .find(|e| e.category == name)
                .map_or(0.0, |e| e.value)
        };

        names
            .into_iter()
            .filter_map(|name| {
                let row = HistogramRow {
                    category: name.to_string(),
                    income: self
                        .currency_service
                        .convert(side_value(income, name), target, rates),
                    expense: self
                        .currency_service
                        .convert(side_value(expense, name), target, rates),
                };
                (row.income != 0.0 || row.expense != 0.0).then_some(row)
            })
            .collect()
    }

    /// One side's pie dataset in the display currency, zero slices dropped.
    pub fn pie_dataset(
        &self,
        entries: &[CategoryEntry],
        target: Currency,
        rates: &RateTable,
    ) -> PieDataset {
        let slices = entries
            .iter()
            .filter_map(|entry| {
                let value = self.currency_service.convert(entry.value, target, rates);
                (value != 0.0).then(|| ChartSlice {
                    label: entry.category.clone(),
                    value,
                })
            })
            .collect();
        PieDataset { slices }
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
