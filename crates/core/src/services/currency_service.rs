use crate::models::currency::{Currency, RateTable, WidgetConversion};

/// Converts base-currency amounts to a display currency and back.
///
/// Rates are stored as base-units per foreign unit, so base → foreign
/// divides and foreign → base multiplies.
///
/// Every conversion is fail-soft: a missing, zero, negative, or non-finite
/// rate degrades to returning the amount unchanged, and a non-finite amount
/// is treated as 0. Rendered output therefore never contains NaN or ∞, even
/// when the rate fetch failed and the table is all zeros.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Convert an amount expressed in the base currency to `target`.
    pub fn convert(&self, amount_in_base: f64, target: Currency, rates: &RateTable) -> f64 {
        let amount = if amount_in_base.is_finite() {
            amount_in_base
        } else {
            0.0
        };

        match rates.rate(target) {
            // Identity on the base currency.
            None => amount,
            Some(rate) if rate.is_finite() && rate > 0.0 => amount / rate,
            // Unknown rate: show the base figure rather than garbage.
            Some(_) => amount,
        }
    }

    /// Convert an amount expressed in `source` back to the base currency.
    /// Inverse of [`convert`](Self::convert) up to floating-point tolerance.
    pub fn convert_to_base(&self, amount: f64, source: Currency, rates: &RateTable) -> f64 {
        let amount = if amount.is_finite() { amount } else { 0.0 };

        match rates.rate(source) {
            None => amount,
            Some(rate) if rate.is_finite() && rate > 0.0 => amount * rate,
            Some(_) => amount,
        }
    }

    /// Arbitrary-pair conversion for the ad-hoc widget: route through the
    /// base currency. Fail-soft on either leg.
    pub fn convert_between(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
        rates: &RateTable,
    ) -> WidgetConversion {
        let in_base = self.convert_to_base(amount, from, rates);
        let result = self.convert(in_base, to, rates);
        WidgetConversion {
            amount,
            from,
            to,
            result,
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-fraction-digit display formatting.
///
/// Applied only at the rendering edge — aggregation always runs on
/// full-precision values so rounding error cannot compound across categories.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
