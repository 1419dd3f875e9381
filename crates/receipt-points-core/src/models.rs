//! Core data models used throughout Receipt Points.
//!
//! [`Receipt`] and [`Item`] mirror the JSON document clients submit.
//! Field names on the wire are camelCase; every field is optional on
//! decode and falls back to an empty value, so only malformed JSON is
//! rejected.

use serde::{Deserialize, Serialize};

/// A submitted purchase receipt. Immutable once stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// 24-hour clock, `HH:MM`.
    pub purchase_time: String,
    /// Decimal amount as a string, e.g. `"35.35"`.
    pub total: String,
    pub items: Vec<Item>,
}

/// A single line item on a [`Receipt`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    /// Decimal amount as a string, e.g. `"6.49"`.
    pub price: String,
}

/// Points awarded to a receipt, computed once at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub points: u64,
}

/// A store entry: the receipt exactly as submitted plus its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub receipt: Receipt,
    pub score: ScoreRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "35.35",
            "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }]
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, "6.49");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Walgreens"}"#).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
        assert!(receipt.total.is_empty());
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let receipt: Receipt =
            serde_json::from_str(r#"{"retailer": "A", "loyaltyCard": "123"}"#).unwrap();
        assert_eq!(receipt.retailer, "A");
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(serde_json::from_str::<Receipt>(r#"{"total": 35.35}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"items": "none"}"#).is_err());
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "1.25".to_string(),
            items: vec![Item {
                short_description: "Pepsi".to_string(),
                price: "1.25".to_string(),
            }],
        };
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "2022-01-01");
        assert_eq!(value["purchaseTime"], "13:01");
        assert_eq!(value["items"][0]["shortDescription"], "Pepsi");
    }
}
