// ═══════════════════════════════════════════════════════════════════
// Model Tests — Currency, RateTable, SummaryTotals, records, session
// ═══════════════════════════════════════════════════════════════════

use base64::Engine as _;
use serde_json::json;

use finance_tracker_core::errors::CoreError;
use finance_tracker_core::models::currency::{Currency, RateTable};
use finance_tracker_core::models::records::{Category, Transaction, User};
use finance_tracker_core::models::session::{Role, SessionContext};
use finance_tracker_core::models::summary::SummaryTotals;

// ═══════════════════════════════════════════════════════════════════
//  Currency
// ═══════════════════════════════════════════════════════════════════

mod currency {
    use super::*;

    #[test]
    fn base_is_try() {
        assert_eq!(Currency::BASE, Currency::Try);
        assert!(Currency::Try.is_base());
        assert!(!Currency::Usd.is_base());
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code(" eur "), Some(Currency::Eur));
        assert_eq!(Currency::from_code("gBp"), Some(Currency::Gbp));
        assert_eq!(Currency::from_code("try"), Some(Currency::Try));
    }

    #[test]
    fn from_code_rejects_unsupported() {
        assert_eq!(Currency::from_code("PLN"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn display_renders_iso_code() {
        assert_eq!(Currency::Try.to_string(), "TRY");
        assert_eq!(Currency::Usd.to_string(), "USD");
    }

    #[test]
    fn selector_enumeration_covers_all_four() {
        assert_eq!(Currency::ALL.len(), 4);
        assert_eq!(Currency::ALL[0], Currency::BASE);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RateTable
// ═══════════════════════════════════════════════════════════════════

mod rate_table {
    use super::*;

    #[test]
    fn from_json_lowercase_fields() {
        let t = RateTable::from_json(&json!({ "usd": 30.0, "eur": 33.0, "gbp": 38.5 }));
        assert_eq!(t, RateTable { usd: 30.0, eur: 33.0, gbp: 38.5 });
    }

    #[test]
    fn from_json_uppercase_fields() {
        let t = RateTable::from_json(&json!({ "USD": 30.0, "EUR": 33.0, "GBP": 38.5 }));
        assert_eq!(t.usd, 30.0);
        assert_eq!(t.gbp, 38.5);
    }

    #[test]
    fn missing_rates_stay_zero() {
        let t = RateTable::from_json(&json!({ "usd": 30.0 }));
        assert_eq!(t.eur, 0.0);
        assert_eq!(t.gbp, 0.0);
    }

    #[test]
    fn base_currency_has_no_stored_rate() {
        let t = RateTable { usd: 30.0, eur: 33.0, gbp: 38.5 };
        assert_eq!(t.rate(Currency::Try), None);
        assert_eq!(t.rate(Currency::Usd), Some(30.0));
    }

    #[test]
    fn default_is_the_all_zero_table() {
        let t = RateTable::default();
        assert_eq!(t, RateTable { usd: 0.0, eur: 0.0, gbp: 0.0 });
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SummaryTotals
// ═══════════════════════════════════════════════════════════════════

mod summary_totals {
    use super::*;

    #[test]
    fn derives_balance_when_absent() {
        let t = SummaryTotals::from_json(&json!({ "totalIncome": 1000.0, "totalExpense": 400.0 }));
        assert_eq!(t.income, 1000.0);
        assert_eq!(t.expense, 400.0);
        assert_eq!(t.balance, 600.0);
    }

    #[test]
    fn keeps_explicit_balance() {
        let t = SummaryTotals::from_json(
            &json!({ "totalIncome": 1000.0, "totalExpense": 400.0, "balance": 550.0 }),
        );
        assert_eq!(t.balance, 550.0);
    }

    #[test]
    fn pascal_case_payload() {
        let t = SummaryTotals::from_json(
            &json!({ "TotalIncome": 10.0, "TotalExpense": 4.0, "Balance": 6.0 }),
        );
        assert_eq!(t, SummaryTotals { income: 10.0, expense: 4.0, balance: 6.0 });
    }

    #[test]
    fn empty_payload_is_all_zero() {
        assert_eq!(SummaryTotals::from_json(&json!({})), SummaryTotals::default());
    }

    #[test]
    fn null_balance_is_derived() {
        let t = SummaryTotals::from_json(
            &json!({ "totalIncome": 5.0, "totalExpense": 8.0, "balance": null }),
        );
        assert_eq!(t.balance, -3.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CRUD record shapes
// ═══════════════════════════════════════════════════════════════════

mod records {
    use super::*;

    #[test]
    fn category_accepts_camel_and_pascal() {
        let a: Category = serde_json::from_value(json!({ "id": 1, "name": "Food" })).unwrap();
        let b: Category = serde_json::from_value(json!({ "Id": 1, "Name": "Food" })).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn transaction_camel_case() {
        let tr: Transaction = serde_json::from_value(json!({
            "id": 7,
            "amount": 120.5,
            "isIncome": false,
            "note": "market",
            "date": "2024-05-01T10:30:00Z",
            "categoryId": 3,
            "categoryName": "Food"
        }))
        .unwrap();
        assert_eq!(tr.id, 7);
        assert!(!tr.is_income);
        assert_eq!(tr.category_name.as_deref(), Some("Food"));
    }

    #[test]
    fn transaction_pascal_case_with_missing_optionals() {
        let tr: Transaction = serde_json::from_value(json!({
            "Id": 8,
            "Amount": 50.0,
            "IsIncome": true,
            "Date": "2024-05-02T00:00:00Z",
            "CategoryId": 2
        }))
        .unwrap();
        assert_eq!(tr.note, None);
        assert_eq!(tr.category_name, None);
    }

    #[test]
    fn user_row() {
        let u: User =
            serde_json::from_value(json!({ "Id": 1, "UserName": "ayse", "Role": "Admin" }))
                .unwrap();
        assert_eq!(u.user_name, "ayse");
        assert_eq!(u.role, "Admin");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SessionContext
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    fn make_token(claims: &serde_json::Value) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = engine.encode(serde_json::to_vec(claims).unwrap());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_name_and_role() {
        let token = make_token(&json!({ "name": "ayse", "role": "Admin" }));
        let ctx = SessionContext::decode(&token).unwrap();
        assert_eq!(ctx.user_name, "ayse");
        assert_eq!(ctx.role, Role::Admin);
        assert!(ctx.is_admin());
    }

    #[test]
    fn falls_back_to_unique_name_claim() {
        let token = make_token(&json!({ "unique_name": "mehmet" }));
        let ctx = SessionContext::decode(&token).unwrap();
        assert_eq!(ctx.user_name, "mehmet");
        assert_eq!(ctx.role, Role::User);
    }

    #[test]
    fn reads_microsoft_schema_role_claim() {
        let token = make_token(&json!({
            "name": "ayse",
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Admin"
        }));
        assert!(SessionContext::decode(&token).unwrap().is_admin());
    }

    #[test]
    fn non_admin_roles_map_to_user() {
        for role in ["User", "admin", "ADMIN", "moderator"] {
            let token = make_token(&json!({ "name": "x", "role": role }));
            assert_eq!(SessionContext::decode(&token).unwrap().role, Role::User);
        }
    }

    #[test]
    fn rejects_non_jwt_credential() {
        assert!(matches!(
            SessionContext::decode("not-a-token"),
            Err(CoreError::Session(_))
        ));
    }

    #[test]
    fn rejects_garbage_payload() {
        assert!(SessionContext::decode("aaa.!!!.ccc").is_err());

        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let not_json = engine.encode(b"hello");
        assert!(SessionContext::decode(&format!("h.{not_json}.s")).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CoreError display
// ═══════════════════════════════════════════════════════════════════

mod errors {
    use super::*;

    #[test]
    fn api_error_names_the_endpoint() {
        let err = CoreError::Api {
            endpoint: "/dashboard/summary".into(),
            message: "HTTP 500".into(),
        };
        assert_eq!(err.to_string(), "API error (/dashboard/summary): HTTP 500");
    }

    #[test]
    fn serde_error_converts() {
        let bad: Result<Category, _> = serde_json::from_str("{");
        let err: CoreError = bad.unwrap_err().into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn unknown_currency_display() {
        assert_eq!(
            CoreError::UnknownCurrency("PLN".into()).to_string(),
            "Unknown currency code: PLN"
        );
    }
}
