use serde::{Deserialize, Serialize};

/// One pie-chart slice: a category label and its converted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

/// A per-side pie dataset in the display currency.
///
/// The core generates these — the frontend just renders them. An empty
/// dataset is the explicit "no data" state for that chart; zero-valued
/// slices are dropped during derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieDataset {
    pub slices: Vec<ChartSlice>,
}

impl PieDataset {
    /// True when the chart should render its "no data" placeholder.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// One comparative bar-chart row: a category's converted income and expense
/// totals side by side. Rows where both sides are zero are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramRow {
    pub category: String,
    pub income: f64,
    pub expense: f64,
}
