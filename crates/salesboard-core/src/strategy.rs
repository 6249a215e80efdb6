//! # Strategy Module
//!
//! Pluggable business rules for the analyzer.
//!
//! ## Extension Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Analyzer Strategies                               │
//! │                                                                         │
//! │  RevenueStrategy  (per line item)                                      │
//! │  ├── input:  LineItem, Product                                         │
//! │  ├── output: revenue of the line (unrounded)                           │
//! │  └── default: calculate_simple_revenue                                 │
//! │                                                                         │
//! │  BonusStrategy    (per seller, after ranking)                          │
//! │  ├── input:  rank (0 = most profit), total sellers, SellerStats        │
//! │  ├── output: bonus amount (unrounded)                                  │
//! │  └── default: calculate_bonus_by_profit                                │
//! │                                                                         │
//! │  Any Fn with the matching signature is a strategy.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salesboard_core::strategy::{calculate_bonus_by_profit, Strategies};
//! use salesboard_core::{LineItem, Product};
//!
//! // Revenue ignoring discounts, default bonus tiers
//! let strategies = Strategies::new(
//!     |item: &LineItem, _product: &Product| item.full_price(),
//!     calculate_bonus_by_profit,
//! );
//! assert!(strategies.has_revenue() && strategies.has_bonus());
//! ```

use std::fmt;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{LineItem, Product, SellerStats};

/// Strategy name reported when no revenue strategy is supplied.
pub const REVENUE_STRATEGY: &str = "calculate_revenue";

/// Strategy name reported when no bonus strategy is supplied.
pub const BONUS_STRATEGY: &str = "calculate_bonus";

// =============================================================================
// Strategy Traits
// =============================================================================

/// Computes the revenue of one purchased line item.
pub trait RevenueStrategy: Send + Sync {
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64 + Send + Sync,
{
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Computes a seller's bonus from their profit rank.
pub trait BonusStrategy: Send + Sync {
    /// `rank` is zero-based in profit-descending order.
    fn calculate_bonus(&self, rank: usize, total_sellers: usize, seller: &SellerStats) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> f64 + Send + Sync,
{
    fn calculate_bonus(&self, rank: usize, total_sellers: usize, seller: &SellerStats) -> f64 {
        self(rank, total_sellers, seller)
    }
}

// =============================================================================
// Default Strategies
// =============================================================================

/// Revenue after the percentage discount.
///
/// `product` is part of the contract for other strategies and is not read.
///
/// ## Example
/// ```rust
/// use salesboard_core::strategy::calculate_simple_revenue;
/// use salesboard_core::{LineItem, Product};
///
/// let item = LineItem {
///     sku: "SKU_001".to_string(),
///     quantity: 2,
///     sale_price: 100.0,
///     discount: 10.0,
/// };
/// let product = Product {
///     sku: "SKU_001".to_string(),
///     purchase_price: 60.0,
///     name: None,
///     category: None,
/// };
///
/// // 100 × 2 × (1 - 0.10)
/// assert_eq!(calculate_simple_revenue(&item, &product), 180.0);
/// ```
pub fn calculate_simple_revenue(item: &LineItem, _product: &Product) -> f64 {
    let discount = 1.0 - item.discount / 100.0;
    item.full_price() * discount
}

/// Tiered bonus by profit rank.
///
/// ## Tiers
/// ```text
/// ┌──────────────────────────────┬──────────────────┐
/// │ Rank                         │ Bonus            │
/// ├──────────────────────────────┼──────────────────┤
/// │ 0 (most profit)              │ 15% of profit    │
/// │ 1 or 2                       │ 10% of profit    │
/// │ total_sellers - 1 (last)     │ 0                │
/// │ any other                    │ 5% of profit     │
/// └──────────────────────────────┴──────────────────┘
/// ```
///
/// Tiers are checked top to bottom and the first match wins. A lone seller
/// is both first and last and gets the 15% tier.
pub fn calculate_bonus_by_profit(rank: usize, total_sellers: usize, seller: &SellerStats) -> f64 {
    let profit = seller.profit();

    if rank == 0 {
        profit * 0.15
    } else if rank <= 2 {
        profit * 0.10
    } else if rank + 1 == total_sellers {
        0.0
    } else {
        profit * 0.05
    }
}

// =============================================================================
// Strategy Set
// =============================================================================

/// The strategies an analysis run is configured with.
///
/// Both strategies are required; a set missing either is rejected by the
/// analyzer with [`AnalysisError::InvalidStrategy`].
pub struct Strategies {
    revenue: Option<Box<dyn RevenueStrategy>>,
    bonus: Option<Box<dyn BonusStrategy>>,
}

impl Strategies {
    /// A complete strategy set.
    pub fn new<R, B>(revenue: R, bonus: B) -> Self
    where
        R: RevenueStrategy + 'static,
        B: BonusStrategy + 'static,
    {
        Strategies::empty().with_revenue(revenue).with_bonus(bonus)
    }

    /// A set with no strategies.
    pub fn empty() -> Self {
        Strategies {
            revenue: None,
            bonus: None,
        }
    }

    pub fn with_revenue<R: RevenueStrategy + 'static>(mut self, revenue: R) -> Self {
        self.revenue = Some(Box::new(revenue));
        self
    }

    pub fn with_bonus<B: BonusStrategy + 'static>(mut self, bonus: B) -> Self {
        self.bonus = Some(Box::new(bonus));
        self
    }

    pub fn has_revenue(&self) -> bool {
        self.revenue.is_some()
    }

    pub fn has_bonus(&self) -> bool {
        self.bonus.is_some()
    }

    /// Both strategies, or the name of the first missing one.
    pub(crate) fn resolve(&self) -> AnalysisResult<(&dyn RevenueStrategy, &dyn BonusStrategy)> {
        let revenue = self
            .revenue
            .as_deref()
            .ok_or_else(|| AnalysisError::InvalidStrategy {
                strategy: REVENUE_STRATEGY.to_string(),
            })?;
        let bonus = self
            .bonus
            .as_deref()
            .ok_or_else(|| AnalysisError::InvalidStrategy {
                strategy: BONUS_STRATEGY.to_string(),
            })?;
        Ok((revenue, bonus))
    }
}

/// Simple revenue and profit-tiered bonus.
impl Default for Strategies {
    fn default() -> Self {
        Strategies::new(calculate_simple_revenue, calculate_bonus_by_profit)
    }
}

impl fmt::Debug for Strategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategies")
            .field("revenue", &self.has_revenue())
            .field("bonus", &self.has_bonus())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
