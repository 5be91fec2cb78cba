// ═══════════════════════════════════════════════════════════════════
// Field Normalizer Tests — alias resolution, defaults, null handling
// ═══════════════════════════════════════════════════════════════════

use serde_json::json;

use finance_tracker_core::normalize::{keys, pick, pick_f64, pick_str};

// ── pick ────────────────────────────────────────────────────────────

mod pick_value {
    use super::*;

    #[test]
    fn resolves_every_casing_variant_to_the_same_value() {
        let variants = [
            json!({ "totalIncome": 1000.0 }),
            json!({ "TotalIncome": 1000.0 }),
            json!({ "total_income": 1000.0 }),
        ];
        for raw in &variants {
            assert_eq!(pick_f64(raw, keys::TOTAL_INCOME, 0.0), 1000.0);
        }
    }

    #[test]
    fn prefers_earlier_alias_when_both_present() {
        let raw = json!({ "totalIncome": 1.0, "TotalIncome": 2.0 });
        assert_eq!(pick_f64(&raw, keys::TOTAL_INCOME, 0.0), 1.0);
    }

    #[test]
    fn skips_null_valued_alias() {
        let raw = json!({ "balance": null, "Balance": 50.0 });
        assert_eq!(pick_f64(&raw, keys::BALANCE, 0.0), 50.0);
    }

    #[test]
    fn absent_everywhere_is_none() {
        let raw = json!({ "unrelated": 1 });
        assert!(pick(&raw, keys::BALANCE).is_none());
    }

    #[test]
    fn zero_and_false_are_defined_values() {
        let raw = json!({ "balance": 0 });
        assert_eq!(pick(&raw, keys::BALANCE), Some(&json!(0)));

        let raw = json!({ "name": false });
        assert_eq!(pick(&raw, &["name"]), Some(&json!(false)));
    }

    #[test]
    fn non_object_input_does_not_panic() {
        for raw in [json!(null), json!(42), json!("x"), json!([1, 2])] {
            assert!(pick(&raw, keys::BALANCE).is_none());
        }
    }
}

// ── pick_f64 ────────────────────────────────────────────────────────

mod pick_number {
    use super::*;

    #[test]
    fn falls_back_to_default_when_absent() {
        assert_eq!(pick_f64(&json!({}), keys::TOTAL_EXPENSE, 7.5), 7.5);
    }

    #[test]
    fn zero_is_returned_not_defaulted() {
        let raw = json!({ "totalExpense": 0 });
        assert_eq!(pick_f64(&raw, keys::TOTAL_EXPENSE, 99.0), 0.0);
    }

    #[test]
    fn accepts_numeric_strings() {
        let raw = json!({ "total": "123.45" });
        assert_eq!(pick_f64(&raw, keys::CATEGORY_TOTAL, 0.0), 123.45);
    }

    #[test]
    fn non_numeric_string_falls_back() {
        let raw = json!({ "total": "lots" });
        assert_eq!(pick_f64(&raw, keys::CATEGORY_TOTAL, 3.0), 3.0);
    }
}

// ── pick_str ────────────────────────────────────────────────────────

mod pick_string {
    use super::*;

    #[test]
    fn resolves_category_name_spellings() {
        for key in ["categoryName", "CategoryName", "category_name", "name"] {
            let raw = json!({ key: "Food" });
            assert_eq!(pick_str(&raw, keys::CATEGORY_NAME, "Other"), "Food");
        }
    }

    #[test]
    fn empty_string_is_a_defined_value() {
        let raw = json!({ "name": "" });
        assert_eq!(pick_str(&raw, keys::CATEGORY_NAME, "Other"), "");
    }

    #[test]
    fn defaults_when_value_is_not_a_string() {
        let raw = json!({ "categoryName": 5 });
        assert_eq!(pick_str(&raw, keys::CATEGORY_NAME, "Other"), "Other");
    }
}
