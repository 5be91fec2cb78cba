use crate::models::category::CategoryEntry;
use crate::models::currency::{Currency, RateTable};
use crate::models::dashboard::DashboardView;
use crate::models::summary::SummaryTotals;

use super::category_service::CategoryService;
use super::currency_service::CurrencyService;
use super::summary_service::SummaryService;

/// The single derivation pass behind the dashboard.
///
/// `derive` is a pure function of the latest raw inputs and the selected
/// display currency — no intermediate state survives between calls, so the
/// resulting view can never mix data from different fetch generations.
pub struct DashboardService {
    category_service: CategoryService,
    currency_service: CurrencyService,
    summary_service: SummaryService,
}

impl DashboardService {
    pub fn new() -> Self {
        Self {
            category_service: CategoryService::new(),
            currency_service: CurrencyService::new(),
            summary_service: SummaryService::new(),
        }
    }

    /// Recompute every derived figure: headline summary, both pie datasets,
    /// the histogram, and the top category per side.
    pub fn derive(
        &self,
        totals: &SummaryTotals,
        income: &[CategoryEntry],
        expense: &[CategoryEntry],
        rates: &RateTable,
        currency: Currency,
    ) -> DashboardView {
        let convert_top = |entry: &CategoryEntry| CategoryEntry {
            category: entry.category.clone(),
            value: self.currency_service.convert(entry.value, currency, rates),
        };

        DashboardView {
            currency,
            summary: self.summary_service.build(totals, currency, rates),
            income_pie: self.category_service.pie_dataset(income, currency, rates),
            expense_pie: self.category_service.pie_dataset(expense, currency, rates),
            histogram: self
                .category_service
                .build_histogram(income, expense, currency, rates),
            top_income: self
                .category_service
                .top_category(income)
                .map(convert_top),
            top_expense: self
                .category_service
                .top_category(expense)
                .map(convert_top),
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
