//! Product domain types.

use serde::{Deserialize, Serialize};
use utoipa::openapi::{RefOr, Schema};
use utoipa::ToSchema;
use validator::Validate;

use super::record::{double_option, non_null, record_schema, Record};

/// Fields every product carries. Doubles as the creation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductFields {
    #[schema(example = "Notebook")]
    pub name: String,
    /// Optional free text, `null` when absent
    #[serde(default)]
    #[schema(example = "A5, dotted")]
    pub description: Option<String>,
    #[schema(example = 4.5)]
    pub price: f64,
}

/// Partial product update.
///
/// `description` distinguishes an omitted key (keep) from an explicit
/// `null` (clear). `name` and `price` reject `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ProductPatch {
    #[serde(default, deserialize_with = "non_null")]
    #[schema(example = "Notebook XL")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, nullable, example = "A4, lined")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    #[schema(example = 9.99)]
    pub price: Option<f64>,
}

impl ProductPatch {
    /// True when the payload carried no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// A stored product
pub type Product = Record<ProductFields>;

impl<'s> ToSchema<'s> for Record<ProductFields> {
    fn schema() -> (&'s str, RefOr<Schema>) {
        ("Product", record_schema("ProductFields"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> ProductFields {
        ProductFields {
            name: "Notebook".to_string(),
            description: Some("A5".to_string()),
            price: 4.5,
        }
    }

    #[test]
    fn description_defaults_to_none() {
        let fields: ProductFields =
            serde_json::from_str(r#"{"name":"Pen","price":1.25}"#).unwrap();
        assert_eq!(fields.description, None);
    }

    #[test]
    fn price_is_required() {
        let result: Result<ProductFields, _> = serde_json::from_str(r#"{"name":"Pen"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn price_only_patch_carries_nothing_else() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price":9.99}"#).unwrap();
        assert_eq!(
            patch,
            ProductPatch {
                price: Some(9.99),
                ..ProductPatch::default()
            }
        );
    }

    #[test]
    fn omitted_description_is_kept() {
        let patch: ProductPatch = serde_json::from_str(r#"{"name":"Pad"}"#).unwrap();
        assert_eq!(patch.description, None);
    }

    #[test]
    fn null_description_clears() {
        let patch: ProductPatch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(patch.description, Some(None));
        assert!(!patch.is_empty());
    }

    #[test]
    fn null_price_is_rejected() {
        let result: Result<ProductPatch, _> = serde_json::from_str(r#"{"price":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn zero_price_is_a_real_value() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price":0}"#).unwrap();
        assert_eq!(patch.price, Some(0.0));
    }

    #[test]
    fn product_serializes_null_description() {
        let product = Product::new(
            2,
            ProductFields {
                description: None,
                ..notebook()
            },
        );
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 2);
        assert!(value["description"].is_null());
    }
}
