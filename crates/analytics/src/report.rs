use core_types::{ProductSale, SellerStat};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One row of the final report.
///
/// This struct is the output of the analytics crate and what the CLI prints.
/// Money fields are serialized as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: usize,
    pub top_products: Vec<ProductSale>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

impl SellerReport {
    /// Projects a finalized stat into a row, rounding money to `decimal_places`.
    pub fn from_stat(stat: &SellerStat, decimal_places: u32) -> Self {
        Self {
            seller_id: stat.seller_id.clone(),
            name: stat.name.clone(),
            revenue: round_money(stat.revenue, decimal_places),
            profit: round_money(stat.profit, decimal_places),
            sales_count: stat.sales_count,
            top_products: stat.top_products.clone(),
            bonus: round_money(stat.bonus, decimal_places),
        }
    }
}

/// Builds the report rows in ranking order.
pub fn assemble(stats: &[SellerStat], decimal_places: u32) -> Vec<SellerReport> {
    stats
        .iter()
        .map(|stat| SellerReport::from_stat(stat, decimal_places))
        .collect()
}

/// Half away from zero, so 0.125 becomes 0.13 and -0.125 becomes -0.13.
pub fn round_money(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}
