use serde::{Deserialize, Serialize};

use super::category::CategoryEntry;
use super::chart::{HistogramRow, PieDataset};
use super::currency::Currency;
use super::summary::SummaryFigures;

/// Everything the dashboard renders, derived in one pass.
///
/// Produced only by `DashboardService::derive` and replaced wholesale, so the
/// UI can never observe headline figures, pie datasets, and histogram rows
/// computed from different combinations of currency and raw data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// The display currency every figure below is expressed in.
    pub currency: Currency,

    /// The three headline figures plus the healthy/deficit state.
    pub summary: SummaryFigures,

    /// Income-by-category pie data; empty means "no data".
    pub income_pie: PieDataset,

    /// Expense-by-category pie data; empty means "no data".
    pub expense_pie: PieDataset,

    /// Comparative income/expense bars, one row per category name.
    pub histogram: Vec<HistogramRow>,

    /// Highest-valued income category (converted), if any.
    pub top_income: Option<CategoryEntry>,

    /// Highest-valued expense category (converted), if any.
    pub top_expense: Option<CategoryEntry>,
}

impl Default for DashboardView {
    fn default() -> Self {
        DashboardView {
            currency: Currency::BASE,
            summary: SummaryFigures::default(),
            income_pie: PieDataset::default(),
            expense_pie: PieDataset::default(),
            histogram: Vec::new(),
            top_income: None,
            top_expense: None,
        }
    }
}
