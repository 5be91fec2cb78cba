use async_trait::async_trait;
use serde_json::Value;

use crate::errors::CoreError;

/// Trait abstraction over the three dashboard endpoints.
///
/// The orchestrator only depends on this seam, so tests swap in a mock and
/// the REST client can be replaced without touching the derivation code.
/// Payloads come back as raw JSON on purpose: their field casing drifts
/// between backend revisions and is resolved by the field normalizer, not by
/// typed deserialization.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardApi: Send + Sync {
    /// `GET /dashboard/summary` — totals and balance in base currency.
    async fn fetch_summary(&self) -> Result<Value, CoreError>;

    /// `GET /dashboard/category-summary` — per-category income/expense lists.
    async fn fetch_category_breakdown(&self) -> Result<Value, CoreError>;

    /// `GET /currency/latest` — foreign exchange rates against the base.
    async fn fetch_exchange_rates(&self) -> Result<Value, CoreError>;
}
