use crate::models::currency::{Currency, RateTable};
use crate::models::summary::{BalanceState, SummaryFigures, SummaryTotals};

use super::currency_service::CurrencyService;

/// Builds the three headline figures in the display currency.
pub struct SummaryService {
    currency_service: CurrencyService,
}

impl SummaryService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Convert the canonical totals and classify the balance.
    ///
    /// Conversion divides by a positive rate, so it can never flip the
    /// balance's sign; the healthy/deficit state is computed here, exactly
    /// once, from the converted balance.
    pub fn build(
        &self,
        totals: &SummaryTotals,
        target: Currency,
        rates: &RateTable,
    ) -> SummaryFigures {
        let balance = self.currency_service.convert(totals.balance, target, rates);
        let state = if balance < 0.0 {
            BalanceState::Deficit
        } else {
            BalanceState::Healthy
        };

        SummaryFigures {
            currency: target,
            income: self.currency_service.convert(totals.income, target, rates),
            expense: self.currency_service.convert(totals.expense, target, rates),
            balance,
            state,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
