use crate::enums::commerce::{StockPolicy, VariantStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product variant information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: i32,
    pub product_id: i32,
    pub sku: String,
    #[serde(with = "pressmill_codec::wire_field")]
    pub status: VariantStatus,
    #[serde(with = "pressmill_codec::wire_field")]
    pub stock_policy: StockPolicy,
    pub stock_quantity: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for updating a variant; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariant {
    #[validate(length(min = 1, max = 64))]
    pub sku: Option<String>,
    #[serde(default, with = "pressmill_codec::wire_field_opt")]
    pub status: Option<VariantStatus>,
    #[serde(default, with = "pressmill_codec::wire_field_opt")]
    pub stock_policy: Option<StockPolicy>,
    pub stock_quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compound_names_lower_only_the_first_character() {
        let variant = ProductVariant {
            id: 3,
            product_id: 1,
            sku: "TS-RED-L".into(),
            status: VariantStatus::OutOfStock,
            stock_policy: StockPolicy::Backorder,
            stock_quantity: Some(0),
            updated_at: None,
        };
        let value = serde_json::to_value(variant).unwrap();
        assert_eq!(value["status"], json!("outOfStock"));
        assert_eq!(value["stockPolicy"], json!("backorder"));
    }

    #[test]
    fn update_payload_distinguishes_null_from_value() {
        let update: UpdateVariant = serde_json::from_value(json!({
            "status": null,
            "stockPolicy": "track",
        }))
        .unwrap();
        assert_eq!(update.status, None);
        assert_eq!(update.stock_policy, Some(StockPolicy::Track));
    }
}
