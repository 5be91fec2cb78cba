pub mod cancel;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod services;

use std::future::Future;

use serde_json::Value;
use tracing::{debug, warn};

use cancel::CancelToken;
use errors::CoreError;
use models::category::CategoryEntry;
use models::currency::{Currency, RateTable, WidgetConversion};
use models::dashboard::DashboardView;
use models::session::SessionContext;
use models::summary::SummaryTotals;
use normalize::{keys, pick};
use providers::traits::DashboardApi;
use services::category_service::CategoryService;
use services::currency_service::CurrencyService;
use services::dashboard_service::DashboardService;

/// Attempts per fetch for the endpoints every displayed figure depends on
/// (summary and exchange rates). The category breakdown is fetched once.
const FETCH_ATTEMPTS: u32 = 2;

/// Main entry point for the finance-tracker core library.
///
/// Owns the raw dashboard inputs (summary totals, canonical category lists,
/// exchange rates), the selected display currency, and the derived
/// [`DashboardView`]. It is the only writer of all of this state: fetch
/// completions land in disjoint slices, and every change is followed by one
/// atomic derivation pass, so the view is always a pure function of the
/// latest inputs regardless of fetch completion order.
#[must_use]
pub struct FinanceDashboard {
    session: Option<SessionContext>,
    display_currency: Currency,

    // Raw inputs, each at a safe default until its fetch succeeds.
    totals: SummaryTotals,
    income: Vec<CategoryEntry>,
    expense: Vec<CategoryEntry>,
    rates: RateTable,

    category_service: CategoryService,
    currency_service: CurrencyService,
    dashboard_service: DashboardService,

    view: DashboardView,
}

impl std::fmt::Debug for FinanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceDashboard")
            .field("display_currency", &self.display_currency)
            .field("totals", &self.totals)
            .field("income_categories", &self.income.len())
            .field("expense_categories", &self.expense.len())
            .field("rates", &self.rates)
            .finish()
    }
}

impl FinanceDashboard {
    /// Create a dashboard with zeroed data, rendered in the base currency.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a dashboard for an authenticated user.
    pub fn with_session(session: SessionContext) -> Self {
        Self::build(Some(session))
    }

    fn build(session: Option<SessionContext>) -> Self {
        let mut dashboard = Self {
            session,
            display_currency: Currency::BASE,
            totals: SummaryTotals::default(),
            income: Vec::new(),
            expense: Vec::new(),
            rates: RateTable::default(),
            category_service: CategoryService::new(),
            currency_service: CurrencyService::new(),
            dashboard_service: DashboardService::new(),
            view: DashboardView::default(),
        };
        dashboard.recompute();
        dashboard
    }

    // ── Data loading ────────────────────────────────────────────────

    /// Fetch summary, category breakdown, and exchange rates, then rebuild
    /// the derived view in one pass.
    ///
    /// The three fetches run concurrently and fail independently: a failed
    /// slice is logged and reset to its safe default while the others still
    /// commit, so the dashboard renders best-available data. Summary and
    /// rates retry once before giving up. If `cancel` was triggered while
    /// requests were in flight, nothing is committed.
    pub async fn refresh(&mut self, api: &dyn DashboardApi, cancel: &CancelToken) {
        let (summary, breakdown, rates) = futures::join!(
            with_retry("/dashboard/summary", || api.fetch_summary()),
            api.fetch_category_breakdown(),
            with_retry("/currency/latest", || api.fetch_exchange_rates()),
        );

        if cancel.is_cancelled() {
            debug!("dashboard torn down mid-fetch, discarding results");
            return;
        }

        match summary {
            Ok(raw) => self.totals = SummaryTotals::from_json(&raw),
            Err(e) => {
                warn!(endpoint = "/dashboard/summary", error = %e, "fetch failed, using zeroed totals");
                self.totals = SummaryTotals::default();
            }
        }

        match breakdown {
            Ok(raw) => {
                let absent = Value::Null;
                let income_raw = pick(&raw, keys::INCOME_LIST).unwrap_or(&absent);
                let expense_raw = pick(&raw, keys::EXPENSE_LIST).unwrap_or(&absent);
                self.income = self.category_service.normalize_buckets(income_raw);
                self.expense = self.category_service.normalize_buckets(expense_raw);
            }
            Err(e) => {
                warn!(endpoint = "/dashboard/category-summary", error = %e, "fetch failed, using empty category lists");
                self.income = Vec::new();
                self.expense = Vec::new();
            }
        }

        match rates {
            Ok(raw) => self.rates = RateTable::from_json(&raw),
            Err(e) => {
                warn!(endpoint = "/currency/latest", error = %e, "fetch failed, conversions fall back to identity");
                self.rates = RateTable::default();
            }
        }

        self.recompute();
    }

    /// Switch the display currency and re-derive every figure from the
    /// already-fetched raw data. No network traffic.
    pub fn set_display_currency(&mut self, currency: Currency) {
        if self.display_currency != currency {
            self.display_currency = currency;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.view = self.dashboard_service.derive(
            &self.totals,
            &self.income,
            &self.expense,
            &self.rates,
            self.display_currency,
        );
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The derived view, consistent with the latest inputs and currency.
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn display_currency(&self) -> Currency {
        self.display_currency
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    /// Coarse admin-vs-user branching for the shell; false when anonymous.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(SessionContext::is_admin)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_name.as_str())
    }

    // ── Ad-hoc converter widget ─────────────────────────────────────

    /// One-off conversion between any two supported currencies using the
    /// current rate table. Computed on explicit request, never stored.
    pub fn convert_widget(&self, amount: f64, from: Currency, to: Currency) -> WidgetConversion {
        self.currency_service
            .convert_between(amount, from, to, &self.rates)
    }
}

impl Default for FinanceDashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Retry a fetch a fixed number of times, returning the last error.
async fn with_retry<T, F, Fut>(endpoint: &str, mut op: F) -> Result<T, CoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoreError>>,
{
    let mut last_error = None;
    for attempt in 1..=FETCH_ATTEMPTS {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(endpoint, attempt, error = %e, "fetch attempt failed");
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| CoreError::Network("no fetch attempts made".to_string())))
}
