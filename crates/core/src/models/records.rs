use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A spending category as returned by `GET /categories`.
///
/// The CRUD pages only need a stable identifier and a display name; like the
/// dashboard payloads, field casing has drifted between backend revisions,
/// so PascalCase spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
}

/// An income or expense transaction as returned by `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Amount")]
    pub amount: f64,
    #[serde(alias = "IsIncome")]
    pub is_income: bool,
    #[serde(default, alias = "Note")]
    pub note: Option<String>,
    #[serde(alias = "Date")]
    pub date: DateTime<Utc>,
    #[serde(alias = "CategoryId")]
    pub category_id: i64,
    #[serde(default, alias = "CategoryName")]
    pub category_name: Option<String>,
}

/// Payload for creating or updating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub amount: f64,
    pub is_income: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: DateTime<Utc>,
    pub category_id: i64,
}

/// Payload for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
}

/// A user row from the admin panel's `GET /admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "UserName", alias = "username")]
    pub user_name: String,
    #[serde(alias = "Role")]
    pub role: String,
}
