//! # Domain Types
//!
//! Core domain types used throughout Salesboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (immutable, caller supplied)                                    │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Seller       │   │    Product      │   │ PurchaseRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (join key)  │   │  sku (join key) │   │  seller_id (FK) │       │
//! │  │  first_name     │   │  purchase_price │   │  items ──────────┼──┐   │
//! │  │  last_name      │   └─────────────────┘   └─────────────────┘  │   │
//! │  └─────────────────┘                          ┌─────────────────┐  │   │
//! │                                               │    LineItem     │◄─┘   │
//! │                                               │  sku, quantity  │      │
//! │                                               │  sale_price     │      │
//! │                                               │  discount (%)   │      │
//! │                                               └─────────────────┘      │
//! │                                                                         │
//! │  PASS-LOCAL (mutable during accumulation only)                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  SellerStats    │──►│  ProductTally   │  sku → quantity, ordered    │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  OUTPUT                                                                 │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  SellerReport   │──►│   TopProduct    │   │ ReportSummary   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Seller
// =============================================================================

/// A seller whose performance is reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    /// Unique identifier, joined against `PurchaseRecord::seller_id`.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Name shown on the report: first and last name joined by a space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit, joined against `LineItem::sku`.
    pub sku: String,

    /// What the seller paid for one unit (cost basis for profit).
    pub purchase_price: f64,

    /// Display name. Not used by the default strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,

    /// Catalog category. Not used by the default strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
}

impl Product {
    /// Cost of `quantity` units at the purchase price.
    #[inline]
    pub fn cost_of(&self, quantity: i64) -> f64 {
        self.purchase_price * quantity as f64
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One line of a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub sku: String,
    #[ts(type = "number")]
    pub quantity: i64,
    /// Unit price charged to the customer before discount.
    pub sale_price: f64,
    /// Discount percentage, 0-100.
    pub discount: f64,
}

impl LineItem {
    /// Sale price times quantity, before discount.
    #[inline]
    pub fn full_price(&self) -> f64 {
        self.sale_price * self.quantity as f64
    }
}

/// A purchase attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRecord {
    pub seller_id: String,

    /// Receipt reference, carried for logging only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub receipt_id: Option<String>,

    pub items: Vec<LineItem>,
}

// =============================================================================
// Sales Data
// =============================================================================

/// The complete input of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Product Tally
// =============================================================================

/// Cumulative quantity sold per SKU, in first-sold order.
///
/// Iteration order is the order in which each SKU was first tallied, which
/// is what breaks ties between equal quantities in [`ProductTally::top`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    entries: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the tally for `sku`.
    pub fn add(&mut self, sku: &str, quantity: i64) {
        match self.index.get(sku) {
            Some(&position) => self.entries[position].1 += quantity,
            None => {
                self.index.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
            }
        }
    }

    /// The `limit` best-selling SKUs, quantity descending.
    ///
    /// The sort is stable, so equal quantities keep first-sold order.
    ///
    /// ## Example
    /// ```rust
    /// use salesboard_core::types::ProductTally;
    ///
    /// let mut tally = ProductTally::new();
    /// tally.add("SKU_A", 1);
    /// tally.add("SKU_B", 5);
    /// tally.add("SKU_C", 1);
    ///
    /// let top = tally.top(2);
    /// assert_eq!(top[0].sku, "SKU_B");
    /// assert_eq!(top[1].sku, "SKU_A");
    /// ```
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<&(String, i64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect()
    }
}

// =============================================================================
// Seller Stats
// =============================================================================

/// Running totals for one seller during an analysis pass.
///
/// Mutated only by the analyzer while records are accumulated. Bonus
/// strategies receive it read-only after ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    seller_id: String,
    name: String,
    revenue: Money,
    profit: Money,
    sales_count: usize,
    products_sold: ProductTally,
}

impl SellerStats {
    /// Starts an empty accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        SellerStats {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Money::zero(),
            profit: Money::zero(),
            sales_count: 0,
            products_sold: ProductTally::new(),
        }
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Running revenue, rounded to 2 decimals.
    pub fn revenue(&self) -> f64 {
        self.revenue.amount()
    }

    /// Running profit, rounded to 2 decimals.
    pub fn profit(&self) -> f64 {
        self.profit.amount()
    }

    /// Number of purchase records attributed to the seller.
    pub fn sales_count(&self) -> usize {
        self.sales_count
    }

    pub fn products_sold(&self) -> &ProductTally {
        &self.products_sold
    }

    pub(crate) fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    pub(crate) fn add_profit(&mut self, profit: f64) {
        self.profit.accumulate(profit);
    }

    pub(crate) fn add_revenue(&mut self, revenue: Money) {
        self.revenue.accumulate(revenue.amount());
    }

    pub(crate) fn add_quantity(&mut self, sku: &str, quantity: i64) {
        self.products_sold.add(sku, quantity);
    }
}

// =============================================================================
// Report Types
// =============================================================================

/// One of a seller's best-selling products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    #[ts(type = "number")]
    pub quantity: i64,
}

/// One row of the performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    #[ts(type = "number")]
    pub sales_count: usize,
    /// At most [`crate::TOP_PRODUCTS_LIMIT`] entries, quantity descending.
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

/// Totals over a whole report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSummary {
    #[ts(type = "number")]
    pub seller_count: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_bonus: f64,
    /// Sum of `sales_count` over all rows.
    #[ts(type = "number")]
    pub total_sales: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller {
            id: "seller_1".to_string(),
            first_name: "Alexey".to_string(),
            last_name: "Petrov".to_string(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(seller().display_name(), "Alexey Petrov");
    }

    #[test]
    fn test_line_item_full_price_and_cost() {
        let item = LineItem {
            sku: "SKU_001".to_string(),
            quantity: 3,
            sale_price: 25.5,
            discount: 0.0,
        };
        let product = Product {
            sku: "SKU_001".to_string(),
            purchase_price: 10.0,
            name: None,
            category: None,
        };
        assert_eq!(item.full_price(), 76.5);
        assert_eq!(product.cost_of(item.quantity), 30.0);
    }

    #[test]
    fn test_tally_accumulates_per_sku() {
        let mut tally = ProductTally::new();
        tally.add("SKU_A", 2);
        tally.add("SKU_B", 1);
        tally.add("SKU_A", 3);

        let all = tally.top(usize::MAX);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].sku, "SKU_A");
        assert_eq!(all[0].quantity, 5);
        assert_eq!(all[1].sku, "SKU_B");
        assert_eq!(all[1].quantity, 1);
    }

    #[test]
    fn test_tally_top_is_bounded_and_ordered() {
        let mut tally = ProductTally::new();
        for n in 0..15 {
            tally.add(&format!("SKU_{n:03}"), n % 4);
        }

        let top = tally.top(10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        // quantity 3 first, ties in first-sold order
        assert_eq!(top[0].sku, "SKU_003");
        assert_eq!(top[1].sku, "SKU_007");
        assert_eq!(top[2].sku, "SKU_011");
    }

    #[test]
    fn test_seller_stats_accumulate() {
        let mut stats = SellerStats::new(&seller());
        stats.record_sale();
        stats.add_profit(10.25);
        stats.add_profit(0.333);
        stats.add_revenue(Money::from_amount(99.999));
        stats.add_quantity("SKU_A", 4);

        assert_eq!(stats.seller_id(), "seller_1");
        assert_eq!(stats.name(), "Alexey Petrov");
        assert_eq!(stats.sales_count(), 1);
        assert_eq!(stats.revenue(), 100.0);
        assert_eq!(
            stats.products_sold().top(10),
            vec![TopProduct {
                sku: "SKU_A".to_string(),
                quantity: 4,
            }]
        );
        assert_eq!(stats.profit(), 10.58);
    }

    #[test]
    fn test_sales_data_deserializes_optional_fields() {
        let data: SalesData = serde_json::from_value(serde_json::json!({
            "sellers": [{"id": "s1", "first_name": "A", "last_name": "B"}],
            "products": [{"sku": "P1", "purchase_price": 1.5, "name": "Pen"}],
            "purchase_records": [{
                "seller_id": "s1",
                "items": [{"sku": "P1", "quantity": 2, "sale_price": 3.0, "discount": 0}]
            }]
        }))
        .unwrap();

        assert_eq!(data.products[0].name.as_deref(), Some("Pen"));
        assert_eq!(data.products[0].category, None);
        assert_eq!(data.purchase_records[0].receipt_id, None);
        assert_eq!(data.purchase_records[0].items[0].discount, 0.0);
    }

    #[test]
    fn test_typescript_bindings_match_json_shape() {
        // i64/usize render as bigint unless overridden; JSON carries plain numbers
        assert!(LineItem::decl().contains("quantity: number"));
        assert!(TopProduct::decl().contains("quantity: number"));
        assert!(SellerReport::decl().contains("sales_count: number"));
        assert!(ReportSummary::decl().contains("seller_count: number"));
        assert!(ReportSummary::decl().contains("total_sales: number"));

        // skipped-when-None fields are optional keys, not nullable ones
        let product = Product::decl();
        assert!(product.contains("name?: string"));
        assert!(product.contains("category?: string"));
        assert!(!product.contains("null"));
        assert!(PurchaseRecord::decl().contains("receipt_id?: string"));
    }
}
