//! # Sales Analyzer
//!
//! Turns sellers, products and purchase records into a ranked performance
//! report.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      analyze_sales_data                                 │
//! │                                                                         │
//! │  SalesData + Strategies                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Validate collections, then strategies   (fatal, nothing computed)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Index sellers by id, products by SKU                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. One pass over purchase records, in input order                     │
//! │     ├── unknown seller  → skip whole record                            │
//! │     ├── sales_count += 1                                               │
//! │     ├── per item: unknown SKU → skip item                              │
//! │     │   profit   += revenue - cost        (rounded)                    │
//! │     │   subtotal += revenue               (rounded)                    │
//! │     │   tally[sku] += quantity                                         │
//! │     └── revenue  += subtotal              (rounded)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Stable sort by profit, descending                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. Per rank: bonus (rounded), top 10 products                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<SellerReport>                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are order-dependent because of cumulative rounding, so records are
//! always processed sequentially.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::AnalysisResult;
use crate::money::{round_currency, Money};
use crate::strategy::{BonusStrategy, Strategies};
use crate::types::{Product, ReportSummary, SalesData, SellerReport, SellerStats};
use crate::validation::validate_sales_data;
use crate::TOP_PRODUCTS_LIMIT;

/// Builds the seller performance report.
///
/// ## Errors
/// - [`AnalysisError::InvalidInput`](crate::AnalysisError::InvalidInput) when
///   any collection of `data` is empty
/// - [`AnalysisError::InvalidStrategy`](crate::AnalysisError::InvalidStrategy)
///   when `strategies` lacks a revenue or bonus strategy
///
/// Unknown seller ids and SKUs are skipped, never reported as errors.
///
/// ## Example
/// ```rust
/// use salesboard_core::{analyze_sales_data, SalesData, Strategies};
/// use serde_json::json;
///
/// let data = SalesData::from_json_value(&json!({
///     "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Petrov"}],
///     "products": [{"sku": "SKU_001", "purchase_price": 50.0}],
///     "purchase_records": [{
///         "seller_id": "seller_1",
///         "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10}]
///     }]
/// }))
/// .unwrap();
///
/// let report = analyze_sales_data(&data, &Strategies::default()).unwrap();
/// assert_eq!(report[0].name, "Ivan Petrov");
/// assert_eq!(report[0].revenue, 180.0);
/// assert_eq!(report[0].profit, 80.0);
/// assert_eq!(report[0].bonus, 12.0);
/// ```
pub fn analyze_sales_data(
    data: &SalesData,
    strategies: &Strategies,
) -> AnalysisResult<Vec<SellerReport>> {
    if let Err(e) = validate_sales_data(data) {
        warn!(field = e.field(), error = %e, "Rejected sales data");
        return Err(e.into());
    }

    let (revenue_strategy, bonus_strategy) = match strategies.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!(error = %e, "Rejected strategies");
            return Err(e);
        }
    };

    // Accumulators in seller input order; the first seller with an id owns it.
    let mut sellers: Vec<SellerStats> = Vec::with_capacity(data.sellers.len());
    let mut seller_index: HashMap<&str, usize> = HashMap::with_capacity(data.sellers.len());
    for seller in &data.sellers {
        if seller_index.contains_key(seller.id.as_str()) {
            debug!(seller_id = %seller.id, "Ignoring duplicate seller id");
            continue;
        }
        seller_index.insert(seller.id.as_str(), sellers.len());
        sellers.push(SellerStats::new(seller));
    }

    let product_index: HashMap<&str, &Product> = data
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    let mut skipped_records = 0usize;
    let mut skipped_items = 0usize;

    for record in &data.purchase_records {
        let Some(&position) = seller_index.get(record.seller_id.as_str()) else {
            debug!(
                seller_id = %record.seller_id,
                receipt_id = ?record.receipt_id,
                "Skipping purchase record for unknown seller"
            );
            skipped_records += 1;
            continue;
        };

        let seller = &mut sellers[position];
        seller.record_sale();

        let mut record_revenue = Money::zero();
        for item in &record.items {
            let Some(product) = product_index.get(item.sku.as_str()) else {
                debug!(
                    sku = %item.sku,
                    seller_id = %record.seller_id,
                    receipt_id = ?record.receipt_id,
                    "Skipping line item for unknown product"
                );
                skipped_items += 1;
                continue;
            };

            let cost = product.cost_of(item.quantity);
            let revenue = revenue_strategy.calculate_revenue(item, product);

            seller.add_profit(revenue - cost);
            record_revenue.accumulate(revenue);
            seller.add_quantity(&item.sku, item.quantity);
        }

        seller.add_revenue(record_revenue);
    }

    // sort_by is stable: equal profits keep seller input order
    sellers.sort_by(|a, b| b.profit().total_cmp(&a.profit()));

    let total_sellers = sellers.len();
    let reports: Vec<SellerReport> = sellers
        .iter()
        .enumerate()
        .map(|(rank, stats)| build_report(rank, total_sellers, stats, bonus_strategy))
        .collect();

    info!(
        sellers = total_sellers,
        purchase_records = data.purchase_records.len(),
        skipped_records,
        skipped_items,
        "Sales analysis complete"
    );

    Ok(reports)
}

/// Assembles one report row from a ranked accumulator.
fn build_report(
    rank: usize,
    total_sellers: usize,
    stats: &SellerStats,
    bonus_strategy: &dyn BonusStrategy,
) -> SellerReport {
    let bonus = bonus_strategy.calculate_bonus(rank, total_sellers, stats);

    SellerReport {
        seller_id: stats.seller_id().to_string(),
        name: stats.name().to_string(),
        revenue: round_currency(stats.revenue()),
        profit: round_currency(stats.profit()),
        sales_count: stats.sales_count(),
        top_products: stats.products_sold().top(TOP_PRODUCTS_LIMIT),
        bonus: round_currency(bonus),
    }
}

/// Totals a report, rounding after each add like the analyzer does.
///
/// ## Example
/// ```rust
/// use salesboard_core::analyzer::summarize_report;
///
/// let summary = summarize_report(&[]);
/// assert_eq!(summary.seller_count, 0);
/// assert_eq!(summary.total_revenue, 0.0);
/// ```
pub fn summarize_report(reports: &[SellerReport]) -> ReportSummary {
    let mut revenue = Money::zero();
    let mut profit = Money::zero();
    let mut bonus = Money::zero();
    let mut total_sales = 0;

    for report in reports {
        revenue.accumulate(report.revenue);
        profit.accumulate(report.profit);
        bonus.accumulate(report.bonus);
        total_sales += report.sales_count;
    }

    ReportSummary {
        seller_count: reports.len(),
        total_revenue: revenue.amount(),
        total_profit: profit.amount(),
        total_bonus: bonus.amount(),
        total_sales,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
