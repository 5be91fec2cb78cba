use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::records::{Category, CategoryInput, Transaction, TransactionInput, User};

use super::traits::DashboardApi;

/// REST client for the finance-tracker backend.
///
/// Holds the base URL and an optional bearer credential, both passed in
/// explicitly — there is no ambient token storage. The credential is attached
/// to every request; the backend rejects requests it cannot validate, and the
/// caller handles the resulting `Api` error by dropping to the
/// unauthenticated state.
pub struct RestClient {
    client: Client,
    base_url: String,
    bearer: Option<String>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, bearer: Option<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.bearer {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn check(path: &str, resp: Response) -> Result<Response, CoreError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(CoreError::Api {
                endpoint: path.to_string(),
                message: format!("HTTP {status}"),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let resp = self.authorize(self.client.get(self.url(path))).send().await?;
        Self::check(path, resp)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: path.to_string(),
                message: format!("Failed to parse response: {e}"),
            })
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CoreError> {
        let resp = self
            .authorize(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(path, resp)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: path.to_string(),
                message: format!("Failed to parse response: {e}"),
            })
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), CoreError> {
        let resp = self
            .authorize(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(path, resp).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), CoreError> {
        let resp = self
            .authorize(self.client.delete(self.url(path)))
            .send()
            .await?;
        Self::check(path, resp).await.map(|_| ())
    }

    // ── Categories ──────────────────────────────────────────────────

    pub async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.get_json("/categories").await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, CoreError> {
        self.post_json("/categories", input).await
    }

    pub async fn update_category(&self, id: i64, input: &CategoryInput) -> Result<(), CoreError> {
        self.put_json(&format!("/categories/{id}"), input).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), CoreError> {
        self.delete(&format!("/categories/{id}")).await
    }

    // ── Transactions ────────────────────────────────────────────────

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.get_json("/transactions").await
    }

    pub async fn create_transaction(
        &self,
        input: &TransactionInput,
    ) -> Result<Transaction, CoreError> {
        self.post_json("/transactions", input).await
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        input: &TransactionInput,
    ) -> Result<(), CoreError> {
        self.put_json(&format!("/transactions/{id}"), input).await
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), CoreError> {
        self.delete(&format!("/transactions/{id}")).await
    }

    // ── Admin ───────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        self.get_json("/admin/users").await
    }

    pub async fn update_user_role(&self, id: i64, role: &str) -> Result<(), CoreError> {
        self.put_json(
            &format!("/admin/users/{id}/role"),
            &serde_json::json!({ "role": role }),
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), CoreError> {
        self.delete(&format!("/admin/users/{id}")).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardApi for RestClient {
    async fn fetch_summary(&self) -> Result<Value, CoreError> {
        self.get_json("/dashboard/summary").await
    }

    async fn fetch_category_breakdown(&self) -> Result<Value, CoreError> {
        self.get_json("/dashboard/category-summary").await
    }

    async fn fetch_exchange_rates(&self) -> Result<Value, CoreError> {
        self.get_json("/currency/latest").await
    }
}
