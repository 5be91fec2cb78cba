use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{keys, pick, pick_f64};

use super::currency::Currency;

/// Canonical base-currency totals from `GET /dashboard/summary`, normalized
/// exactly once at fetch-commit time and immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl SummaryTotals {
    /// Normalize a raw summary payload.
    ///
    /// Field casing varies across backend revisions; missing totals default
    /// to 0. When the balance field is absent it is derived as
    /// income − expense, so the headline figures always agree.
    pub fn from_json(raw: &Value) -> SummaryTotals {
        let income = pick_f64(raw, keys::TOTAL_INCOME, 0.0);
        let expense = pick_f64(raw, keys::TOTAL_EXPENSE, 0.0);
        let balance = match pick(raw, keys::BALANCE) {
            Some(_) => pick_f64(raw, keys::BALANCE, income - expense),
            None => income - expense,
        };
        SummaryTotals {
            income,
            expense,
            balance,
        }
    }
}

/// Whether the converted balance is non-negative. Computed once per
/// derivation pass and carried in [`SummaryFigures`] so presentation never
/// re-derives it inconsistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceState {
    Healthy,
    Deficit,
}

/// The three headline figures in the selected display currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryFigures {
    pub currency: Currency,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub state: BalanceState,
}

impl Default for SummaryFigures {
    fn default() -> Self {
        SummaryFigures {
            currency: Currency::BASE,
            income: 0.0,
            expense: 0.0,
            balance: 0.0,
            state: BalanceState::Healthy,
        }
    }
}
