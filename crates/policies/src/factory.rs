use crate::bonus::BonusByProfit;
use crate::error::PolicyError;
use crate::revenue::SimpleRevenue;
use crate::{BonusPolicy, RevenuePolicy};
use configuration::ReportConfig;

/// Creates the revenue policy used by the standard report.
pub fn create_revenue_policy(_config: &ReportConfig) -> Box<dyn RevenuePolicy> {
    Box::new(SimpleRevenue)
}

/// Creates the bonus policy described by the `[bonus]` section of the config.
pub fn create_bonus_policy(config: &ReportConfig) -> Result<Box<dyn BonusPolicy>, PolicyError> {
    let policy = BonusByProfit::new(config.bonus.clone())?;
    tracing::debug!(tiers = ?config.bonus, "Bonus policy created.");
    Ok(Box::new(policy))
}
