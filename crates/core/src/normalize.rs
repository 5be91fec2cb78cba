use serde_json::Value;

/// Accepted key spellings per canonical field, ordered by preference.
///
/// The backend has shipped several revisions of the dashboard endpoints with
/// inconsistent field casing (camelCase, PascalCase, the odd snake_case).
/// Every raw-payload read goes through one of these tables instead of an
/// ad-hoc conditional chain at the call site.
pub mod keys {
    pub const TOTAL_INCOME: &[&str] = &["totalIncome", "TotalIncome", "total_income"];
    pub const TOTAL_EXPENSE: &[&str] = &["totalExpense", "TotalExpense", "total_expense"];
    pub const BALANCE: &[&str] = &["balance", "Balance"];
    pub const CURRENCY: &[&str] = &["currency", "Currency"];

    pub const INCOME_LIST: &[&str] = &["income", "Income"];
    pub const EXPENSE_LIST: &[&str] = &["expense", "Expense"];
    pub const CATEGORY_NAME: &[&str] = &["categoryName", "CategoryName", "category_name", "name"];
    pub const CATEGORY_TOTAL: &[&str] = &["total", "Total", "amount", "Amount"];

    pub const RATE_USD: &[&str] = &["usd", "USD"];
    pub const RATE_EUR: &[&str] = &["eur", "EUR"];
    pub const RATE_GBP: &[&str] = &["gbp", "GBP"];

    pub const CLAIM_NAME: &[&str] = &["name", "unique_name"];
    pub const CLAIM_ROLE: &[&str] = &[
        "role",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
    ];
}

/// Return the first alias present and non-null in `raw`.
///
/// Only absent keys and JSON `null` count as missing; `0`, `false`, and `""`
/// are defined values and are returned as-is. Non-object input (including
/// `null`) yields `None` rather than panicking.
pub fn pick<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let obj = raw.as_object()?;
    aliases
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| !v.is_null())
}

/// Resolve a numeric field, falling back to `default` when absent or non-numeric.
/// Accepts both JSON numbers and numeric strings (the backend has sent both).
pub fn pick_f64(raw: &Value, aliases: &[&str], default: f64) -> f64 {
    match pick(raw, aliases) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Resolve a string field, falling back to `default` when absent or non-string.
pub fn pick_str(raw: &Value, aliases: &[&str], default: &str) -> String {
    match pick(raw, aliases) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}
