//! # Sales Analytics Engine
//!
//! This crate turns raw sales data into the per-seller performance report:
//! revenue, profit, number of sales, best-selling products and a rank-based bonus.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   formats or the CLI. It depends only on `core-types`, `policies` and `configuration`.
//! - **Stateless Calculation:** Every call builds its own indices and accumulators
//!   and returns fresh rows. Caller-supplied data is never mutated.
//! - **All or Nothing:** Validation runs before aggregation and any error aborts the
//!   whole report. No partial result is ever returned.
//!
//! ## Public API
//!
//! - `analyze_sales_data`: The entry point that validates, aggregates and projects.
//! - `SalesAggregator`: The engine that builds ranked `SellerStat`s.
//! - `ReportOptions`: The injected revenue and bonus policies plus settings.
//! - `SellerReport`: One output row.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesAggregator;
pub use error::AnalyticsError;
pub use options::ReportOptions;
pub use report::SellerReport;

use core_types::SalesDataset;

/// Computes the seller performance report.
///
/// # Arguments
///
/// * `data` - The dataset. `None` is treated as missing input.
/// * `options` - The revenue and bonus policies and the aggregation settings.
///
/// # Returns
///
/// One row per distinct seller, ordered by profit descending, or the first
/// validation or reference error encountered.
pub fn analyze_sales_data(
    data: Option<&SalesDataset>,
    options: &ReportOptions,
) -> Result<Vec<SellerReport>, AnalyticsError> {
    let data = data.ok_or_else(|| AnalyticsError::InvalidInput("dataset is missing".to_string()))?;
    engine::validate_dataset(data)?;

    let aggregator = SalesAggregator::new(options)?;
    let stats = aggregator.aggregate_validated(data)?;
    let rows = report::assemble(&stats, options.settings.decimal_places);

    tracing::info!(
        sellers = rows.len(),
        purchase_records = data.purchase_records.len(),
        "Sales report computed."
    );
    Ok(rows)
}
