use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A `(sku, quantity)` pair in a seller's top products list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSale {
    pub sku: String,
    pub quantity: u64,
}

/// The per-seller accumulator built while scanning purchase records.
///
/// `products_sold` keeps SKUs in first-sale order so that ties in the top
/// products list resolve the same way on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: usize,
    products_sold: Vec<ProductSale>,
    sku_positions: HashMap<String, usize>,
    pub bonus: Decimal,
    pub top_products: Vec<ProductSale>,
}

impl SellerStat {
    pub fn new(seller_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
            name: name.into(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_positions: HashMap::new(),
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
        }
    }

    /// Adds `quantity` units of `sku` to the sold tally.
    pub fn record_units(&mut self, sku: &str, quantity: u64) {
        match self.sku_positions.get(sku) {
            Some(&pos) => self.products_sold[pos].quantity += quantity,
            None => {
                self.sku_positions.insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(ProductSale {
                    sku: sku.to_string(),
                    quantity,
                });
            }
        }
    }

    /// Units sold per SKU, in first-sale order.
    pub fn products_sold(&self) -> &[ProductSale] {
        &self.products_sold
    }

    pub fn units_sold(&self, sku: &str) -> u64 {
        self.sku_positions
            .get(sku)
            .map(|&pos| self.products_sold[pos].quantity)
            .unwrap_or(0)
    }

    /// The `limit` best-selling SKUs by quantity, descending. Ties keep first-sale order.
    pub fn rank_products(&self, limit: usize) -> Vec<ProductSale> {
        let mut ranked = self.products_sold.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_units_accumulates_per_sku() {
        let mut stat = SellerStat::new("seller_1", "Alexey Petrov");
        stat.record_units("SKU_001", 2);
        stat.record_units("SKU_002", 1);
        stat.record_units("SKU_001", 3);

        assert_eq!(stat.units_sold("SKU_001"), 5);
        assert_eq!(stat.units_sold("SKU_002"), 1);
        assert_eq!(stat.units_sold("SKU_404"), 0);
        assert_eq!(stat.products_sold().len(), 2);
        assert_eq!(stat.products_sold()[0].sku, "SKU_001");
    }

    #[test]
    fn rank_products_sorts_descending_and_keeps_first_sale_order_on_ties() {
        let mut stat = SellerStat::new("seller_1", "Alexey Petrov");
        stat.record_units("SKU_A", 1);
        stat.record_units("SKU_B", 4);
        stat.record_units("SKU_C", 1);
        stat.record_units("SKU_D", 4);

        let skus: Vec<_> = stat
            .rank_products(3)
            .into_iter()
            .map(|p| p.sku)
            .collect();
        assert_eq!(skus, vec!["SKU_B", "SKU_D", "SKU_A"]);
    }
}
