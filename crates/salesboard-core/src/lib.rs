//! # salesboard-core: Seller Performance Analytics
//!
//! This crate is the **heart** of Salesboard. It turns raw sales data into a
//! ranked per-seller performance report as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Salesboard Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/report-cli (thin runner)                  │   │
//! │  │      config ──► load JSON ──► analyze ──► print JSON report     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ salesboard-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ strategy  │  │ analyzer  │  │   │
//! │  │   │  Seller   │  │   Money   │  │  Revenue  │  │  analyze  │  │   │
//! │  │   │  Product  │  │  round    │  │  Bonus    │  │ summarize │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input records, per-seller accumulators, report rows
//! - [`money`] - Currency rounding applied after every partial sum
//! - [`strategy`] - Pluggable revenue and bonus rules
//! - [`analyzer`] - The aggregation and ranking pass
//! - [`validation`] - Structural input checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input and strategies = bit-identical report
//! 2. **No I/O**: loading files and printing reports belong to the caller
//! 3. **Cumulative Rounding**: running totals are rounded to cents after every add
//! 4. **Explicit Errors**: structural failures are typed and fatal; dangling
//!    ids are skipped, never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use salesboard_core::{analyze_sales_data, SalesData, Strategies};
//!
//! let data = SalesData::from_json_str(r#"{
//!     "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Petrov"}],
//!     "products": [{"sku": "SKU_001", "purchase_price": 60.0}],
//!     "purchase_records": [{
//!         "seller_id": "seller_1",
//!         "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10}]
//!     }]
//! }"#)
//! .unwrap();
//!
//! let report = analyze_sales_data(&data, &Strategies::default()).unwrap();
//!
//! // 100 × 2 × 0.9 = 180.00 revenue, minus 120.00 cost
//! assert_eq!(report[0].revenue, 180.0);
//! assert_eq!(report[0].profit, 60.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analyzer;
pub mod error;
pub mod money;
pub mod strategy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analyzer::{analyze_sales_data, summarize_report};
pub use error::{AnalysisError, AnalysisResult, ValidationError};
pub use money::Money;
pub use strategy::{
    calculate_bonus_by_profit, calculate_simple_revenue, BonusStrategy, RevenueStrategy,
    Strategies,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of best-selling products listed per seller.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Decimal places kept on every currency value.
pub const CURRENCY_DECIMALS: usize = 2;
