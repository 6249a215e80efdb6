//! # Validation Module
//!
//! Structural shape checks for analysis input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Raw JSON (SalesData::from_json_value)                        │
//! │  ├── Each collection present?          → Required                      │
//! │  ├── Each collection an array?         → NotASequence                  │
//! │  ├── Each collection non-empty?        → Empty                         │
//! │  └── Each element the right shape?     → AnalysisError::Malformed      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Typed input (validate_sales_data)                            │
//! │  └── Each collection non-empty?        → Empty                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Accumulation (analyzer)                                      │
//! │  └── Unknown seller / SKU              → skipped, never an error       │
//! │                                                                         │
//! │  Business semantics (price signs, discount range) are NOT checked.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salesboard_core::validation::validate_sales_data;
//! use salesboard_core::SalesData;
//!
//! let empty = SalesData::default();
//! assert!(validate_sales_data(&empty).is_err());
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AnalysisError, AnalysisResult, ValidationError};
use crate::types::{Product, PurchaseRecord, SalesData, Seller};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input field holding the sellers.
pub const SELLERS_FIELD: &str = "sellers";

/// Input field holding the product catalog.
pub const PRODUCTS_FIELD: &str = "products";

/// Input field holding the purchase records.
pub const PURCHASE_RECORDS_FIELD: &str = "purchase_records";

// =============================================================================
// Typed Validators
// =============================================================================

/// Validates that a required collection has at least one entry.
///
/// ## Example
/// ```rust
/// use salesboard_core::validation::validate_collection;
///
/// assert!(validate_collection("sellers", &[1, 2]).is_ok());
/// assert!(validate_collection::<i32>("sellers", &[]).is_err());
/// ```
pub fn validate_collection<T>(field: &str, items: &[T]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the three input collections, in declaration order.
///
/// The first failing collection is reported.
pub fn validate_sales_data(data: &SalesData) -> ValidationResult<()> {
    validate_collection(SELLERS_FIELD, &data.sellers)?;
    validate_collection(PRODUCTS_FIELD, &data.products)?;
    validate_collection(PURCHASE_RECORDS_FIELD, &data.purchase_records)?;
    Ok(())
}

// =============================================================================
// Raw JSON Validators
// =============================================================================

/// Looks up `field` on a raw JSON document and checks it is a non-empty array.
///
/// A document that is not an object has no fields, so every lookup on it
/// reports [`ValidationError::Required`].
pub fn require_sequence<'a>(root: &'a Value, field: &str) -> ValidationResult<&'a [Value]> {
    let value = match root.get(field) {
        Some(Value::Null) | None => {
            return Err(ValidationError::Required {
                field: field.to_string(),
            })
        }
        Some(value) => value,
    };

    let items = value.as_array().ok_or_else(|| ValidationError::NotASequence {
        field: field.to_string(),
    })?;

    validate_collection(field, items)?;

    Ok(items)
}

/// Deserializes every element of a checked sequence.
///
/// The first element that does not fit `T` is reported with its index.
fn parse_elements<'a, T>(field: &str, items: &'a [Value]) -> AnalysisResult<Vec<T>>
where
    T: Deserialize<'a>,
{
    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            T::deserialize(item).map_err(|e| AnalysisError::Malformed {
                field: format!("{field}[{position}]"),
                reason: e.to_string(),
            })
        })
        .collect()
}

impl SalesData {
    /// Builds input from an untyped JSON document.
    ///
    /// All three collections are shape-checked before any element is
    /// deserialized, so a missing `purchase_records` is reported as
    /// [`AnalysisError::InvalidInput`] even when `sellers` is malformed.
    ///
    /// ## Example
    /// ```rust
    /// use salesboard_core::SalesData;
    /// use serde_json::json;
    ///
    /// let err = SalesData::from_json_value(&json!({
    ///     "sellers": [{"id": "s1", "first_name": "A", "last_name": "B"}],
    ///     "products": [],
    ///     "purchase_records": []
    /// }))
    /// .unwrap_err();
    /// assert!(err.is_invalid_input());
    /// ```
    pub fn from_json_value(root: &Value) -> AnalysisResult<Self> {
        let sellers = require_sequence(root, SELLERS_FIELD)?;
        let products = require_sequence(root, PRODUCTS_FIELD)?;
        let purchase_records = require_sequence(root, PURCHASE_RECORDS_FIELD)?;

        Ok(SalesData {
            sellers: parse_elements::<Seller>(SELLERS_FIELD, sellers)?,
            products: parse_elements::<Product>(PRODUCTS_FIELD, products)?,
            purchase_records: parse_elements::<PurchaseRecord>(
                PURCHASE_RECORDS_FIELD,
                purchase_records,
            )?,
        })
    }

    /// Parses JSON text, then applies [`SalesData::from_json_value`].
    pub fn from_json_str(text: &str) -> AnalysisResult<Self> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_json_value(&root)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_document() -> Value {
        json!({
            "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Sidorov"}],
            "products": [{"sku": "SKU_001", "purchase_price": 10.0}],
            "purchase_records": [{
                "seller_id": "seller_1",
                "receipt_id": "receipt_1",
                "items": [{"sku": "SKU_001", "quantity": 1, "sale_price": 20.0, "discount": 5}]
            }]
        })
    }

    #[test]
    fn test_validate_collection() {
        assert!(validate_collection("products", &["a"]).is_ok());
        assert_eq!(
            validate_collection::<&str>("products", &[]),
            Err(ValidationError::Empty {
                field: "products".to_string()
            })
        );
    }

    #[test]
    fn test_validate_sales_data_reports_first_empty_collection() {
        let mut data = SalesData::from_json_value(&valid_document()).unwrap();
        assert!(validate_sales_data(&data).is_ok());

        data.products.clear();
        data.purchase_records.clear();
        let err = validate_sales_data(&data).unwrap_err();
        assert_eq!(err.field(), "products");
    }

    #[test]
    fn test_from_json_value_accepts_valid_document() {
        let data = SalesData::from_json_value(&valid_document()).unwrap();
        assert_eq!(data.sellers.len(), 1);
        assert_eq!(data.products[0].sku, "SKU_001");
        assert_eq!(
            data.purchase_records[0].receipt_id.as_deref(),
            Some("receipt_1")
        );
    }

    #[test]
    fn test_missing_collection_is_required() {
        let mut doc = valid_document();
        doc.as_object_mut().unwrap().remove("products");

        let err = SalesData::from_json_value(&doc).unwrap_err();
        match err {
            AnalysisError::InvalidInput(ValidationError::Required { field }) => {
                assert_eq!(field, "products")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_collection_is_required() {
        let mut doc = valid_document();
        doc["sellers"] = Value::Null;

        let err = SalesData::from_json_value(&doc).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidInput(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_non_array_collection_is_rejected() {
        let mut doc = valid_document();
        doc["purchase_records"] = json!({"seller_id": "seller_1"});

        let err = SalesData::from_json_value(&doc).unwrap_err();
        match err {
            AnalysisError::InvalidInput(ValidationError::NotASequence { field }) => {
                assert_eq!(field, "purchase_records")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let err = SalesData::from_json_value(&json!([1, 2, 3])).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_shape_checked_before_elements() {
        let doc = json!({
            "sellers": [{"id": 42}],
            "products": [{"sku": "SKU_001", "purchase_price": 1.0}],
        });

        let err = SalesData::from_json_value(&doc).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_malformed_element_reports_index() {
        let mut doc = valid_document();
        doc["products"] = json!([
            {"sku": "SKU_001", "purchase_price": 1.0},
            {"purchase_price": 2.0}
        ]);

        let err = SalesData::from_json_value(&doc).unwrap_err();
        match err {
            AnalysisError::Malformed { field, reason } => {
                assert_eq!(field, "products[1]");
                assert!(reason.contains("sku"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_str_rejects_invalid_text() {
        let err = SalesData::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }
}
