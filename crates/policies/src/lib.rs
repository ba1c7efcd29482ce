//! # Sales Report Policies
//!
//! The pluggable pricing and reward rules used by the aggregator. Each rule is a
//! capability trait with a single method, and the caller decides which
//! implementation the aggregator receives.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure functions over `core-types`. No I/O and no state.
//! - **Policy Agnostic Engine:** The `analytics` engine only sees `dyn RevenuePolicy`
//!   and `dyn BonusPolicy`, so alternative pricing or reward schemes plug in
//!   without touching the aggregation code.
//! - **Closures Welcome:** Any `Fn` with the right signature implements the
//!   matching trait, which keeps ad hoc policies in tests short.

pub mod bonus;
pub mod error;
pub mod factory;
pub mod revenue;

// Re-export the key components to create a clean, public-facing API.
pub use bonus::BonusByProfit;
pub use error::PolicyError;
pub use factory::{create_bonus_policy, create_revenue_policy};
pub use revenue::SimpleRevenue;

use core_types::{LineItem, Product, SellerStat};
use rust_decimal::Decimal;

/// Computes the revenue of one line item.
pub trait RevenuePolicy: Send + Sync {
    /// Returns the revenue earned by `item`, or `None` if the arithmetic overflows.
    /// `product` is the catalog entry the item's SKU resolved to.
    fn calculate(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

/// Computes a seller's bonus from their place in the profit ranking.
pub trait BonusPolicy: Send + Sync {
    /// # Arguments
    ///
    /// * `rank` - Zero-based position after sorting sellers by profit, descending.
    /// * `total` - Number of ranked sellers.
    /// * `stat` - The seller's accumulated statistics.
    ///
    /// Returns `None` if the arithmetic overflows.
    fn calculate(&self, rank: usize, total: usize, stat: &SellerStat) -> Option<Decimal>;
}

impl<F> RevenuePolicy for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal> + Send + Sync,
{
    fn calculate(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerStat) -> Option<Decimal> + Send + Sync,
{
    fn calculate(&self, rank: usize, total: usize, stat: &SellerStat) -> Option<Decimal> {
        self(rank, total, stat)
    }
}
