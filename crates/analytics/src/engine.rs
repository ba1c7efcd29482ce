use crate::error::AnalyticsError;
use crate::options::ReportOptions;
use configuration::{ReportSettings, UnknownReferencePolicy};
use core_types::{Product, PurchaseRecord, SalesDataset, SellerStat};
use policies::{BonusPolicy, RevenuePolicy};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Turns a dataset into ranked, finalized `SellerStat`s.
///
/// The aggregator borrows its policies from `ReportOptions` and keeps no state
/// between calls: every `aggregate` builds its own indices and accumulators.
pub struct SalesAggregator<'a> {
    revenue: &'a dyn RevenuePolicy,
    bonus: &'a dyn BonusPolicy,
    settings: &'a ReportSettings,
}

impl<'a> SalesAggregator<'a> {
    /// Fails with `MissingDependency` if either policy is absent.
    pub fn new(options: &'a ReportOptions) -> Result<Self, AnalyticsError> {
        let revenue = options.calculate_revenue.as_deref().ok_or_else(|| {
            AnalyticsError::MissingDependency("calculate_revenue".to_string())
        })?;
        let bonus = options.calculate_bonus.as_deref().ok_or_else(|| {
            AnalyticsError::MissingDependency("calculate_bonus".to_string())
        })?;

        Ok(Self {
            revenue,
            bonus,
            settings: &options.settings,
        })
    }

    /// The main entry point for aggregation.
    ///
    /// # Returns
    ///
    /// One `SellerStat` per distinct seller, sorted by profit descending, with
    /// `bonus` and `top_products` filled in. Sellers with equal profit keep
    /// their input order.
    ///
    /// Runs `validate_dataset` itself so the aggregator can be used without
    /// going through `analyze_sales_data`.
    pub fn aggregate(&self, dataset: &SalesDataset) -> Result<Vec<SellerStat>, AnalyticsError> {
        validate_dataset(dataset)?;
        self.aggregate_validated(dataset)
    }

    /// `aggregate` without the dataset checks, for callers that already ran `validate_dataset`.
    pub(crate) fn aggregate_validated(
        &self,
        dataset: &SalesDataset,
    ) -> Result<Vec<SellerStat>, AnalyticsError> {
        let (mut stats, seller_index) = self.seed_stats(dataset);
        let product_index = index_products(&dataset.products);

        for record in &dataset.purchase_records {
            let Some(&slot) = seller_index.get(record.seller_id.as_str()) else {
                match self.settings.unknown_references {
                    UnknownReferencePolicy::Fail => {
                        return Err(AnalyticsError::UnknownSeller(record.seller_id.clone()));
                    }
                    UnknownReferencePolicy::Skip => {
                        tracing::warn!(seller_id = %record.seller_id, "Skipping purchase record of unknown seller.");
                        continue;
                    }
                }
            };
            self.apply_record(&mut stats[slot], record, &product_index)?;
        }

        self.rank(&mut stats)?;
        Ok(stats)
    }

    /// Creates one accumulator per distinct seller id, in first-appearance order.
    /// A repeated id replaces the earlier seller's name.
    fn seed_stats<'d>(&self, dataset: &'d SalesDataset) -> (Vec<SellerStat>, HashMap<&'d str, usize>) {
        let mut stats: Vec<SellerStat> = Vec::with_capacity(dataset.sellers.len());
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(dataset.sellers.len());

        for seller in &dataset.sellers {
            match index.get(seller.id.as_str()) {
                Some(&slot) => {
                    tracing::warn!(seller_id = %seller.id, "Duplicate seller id, the later entry wins.");
                    stats[slot].name = seller.display_name();
                }
                None => {
                    index.insert(seller.id.as_str(), stats.len());
                    stats.push(SellerStat::new(seller.id.clone(), seller.display_name()));
                }
            }
        }

        (stats, index)
    }

    /// Adds one purchase record to its seller's accumulator.
    fn apply_record(
        &self,
        stat: &mut SellerStat,
        record: &PurchaseRecord,
        products: &HashMap<&str, &Product>,
    ) -> Result<(), AnalyticsError> {
        // Revenue is the receipt's stated total, not the sum of line item revenue.
        stat.sales_count += 1;
        stat.revenue = stat
            .revenue
            .checked_add(record.total_amount)
            .ok_or_else(|| overflow(&stat.seller_id))?;

        tracing::debug!(
            seller_id = %stat.seller_id,
            total_amount = %record.total_amount,
            items = record.items.len(),
            "Applying purchase record."
        );

        for item in &record.items {
            let Some(product) = products.get(item.sku.as_str()) else {
                match self.settings.unknown_references {
                    UnknownReferencePolicy::Fail => {
                        return Err(AnalyticsError::UnknownProduct {
                            sku: item.sku.clone(),
                            seller_id: stat.seller_id.clone(),
                        });
                    }
                    UnknownReferencePolicy::Skip => {
                        tracing::warn!(sku = %item.sku, seller_id = %stat.seller_id, "Skipping line item of unknown product.");
                        continue;
                    }
                }
            };

            // Cost of the product's stored pack size. Reported only; profit is
            // charged per sold unit below.
            let cost = product.purchase_price.checked_mul(Decimal::from(product.quantity));
            let revenue = self
                .revenue
                .calculate(item, product)
                .ok_or_else(|| overflow(&stat.seller_id))?;
            let profit = product
                .purchase_price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|spent| revenue.checked_sub(spent))
                .ok_or_else(|| overflow(&stat.seller_id))?;

            tracing::trace!(sku = %item.sku, ?cost, %revenue, %profit, "Line item priced.");

            stat.profit = stat
                .profit
                .checked_add(profit)
                .ok_or_else(|| overflow(&stat.seller_id))?;
            stat.record_units(&item.sku, u64::from(item.quantity));
        }

        Ok(())
    }

    /// Sorts by profit and assigns bonus and top products for each rank.
    fn rank(&self, stats: &mut [SellerStat]) -> Result<(), AnalyticsError> {
        // `sort_by` is stable, so equal profits keep input order.
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        for (rank, stat) in stats.iter_mut().enumerate() {
            stat.bonus = self
                .bonus
                .calculate(rank, total, stat)
                .ok_or_else(|| overflow(&stat.seller_id))?;
            stat.top_products = stat.rank_products(self.settings.top_products_limit);
            tracing::debug!(rank, seller_id = %stat.seller_id, profit = %stat.profit, bonus = %stat.bonus, "Seller ranked.");
        }
        Ok(())
    }
}

/// Rejects datasets with an empty seller, product or purchase record collection.
pub fn validate_dataset(dataset: &SalesDataset) -> Result<(), AnalyticsError> {
    if dataset.sellers.is_empty() {
        return Err(AnalyticsError::InvalidInput("sellers must not be empty".to_string()));
    }
    if dataset.products.is_empty() {
        return Err(AnalyticsError::InvalidInput("products must not be empty".to_string()));
    }
    if dataset.purchase_records.is_empty() {
        return Err(AnalyticsError::InvalidInput(
            "purchase_records must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn overflow(seller_id: &str) -> AnalyticsError {
    AnalyticsError::Overflow {
        seller_id: seller_id.to_string(),
    }
}

/// Product-by-SKU lookup. A repeated SKU overwrites the earlier entry.
fn index_products(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        if index.insert(product.sku.as_str(), product).is_some() {
            tracing::warn!(sku = %product.sku, "Duplicate product SKU, the later entry wins.");
        }
    }
    index
}
