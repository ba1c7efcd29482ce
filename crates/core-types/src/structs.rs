use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A seller from the reference data. This is the subject of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// The name shown in the report, e.g. "Ivan Petrov".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry, keyed by SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Unit cost paid to the supplier.
    pub purchase_price: Decimal,
    /// Stored quantity-per-unit-of-sale multiplier. Only feeds the reported
    /// pack cost, so catalogs without it default to 0.
    #[serde(default)]
    pub quantity: u32,
}

/// One SKU sold within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    /// Units sold. Whole and non-negative: returns and fractional units are rejected when parsing.
    pub quantity: u32,
    pub sale_price: Decimal,
    /// Discount in percent. Not bounds-checked: values outside 0..=100 are used as-is.
    #[serde(default)]
    pub discount: Decimal,
}

/// A single transaction attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The full input of one report computation.
///
/// Missing collections deserialize as empty vectors; the analytics layer
/// rejects empty collections as invalid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}
