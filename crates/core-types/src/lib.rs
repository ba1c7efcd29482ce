pub mod structs;
pub mod stats;

// Re-export the core types to provide a clean public API.
pub use stats::{ProductSale, SellerStat};
pub use structs::{LineItem, Product, PurchaseRecord, SalesDataset, Seller};
