use configuration::{ReportConfig, ReportSettings};
use policies::{BonusPolicy, PolicyError, RevenuePolicy};
use std::fmt;

/// Everything the aggregator needs besides the dataset itself.
///
/// Both policies start out empty; the aggregator refuses to run until the
/// caller has supplied them.
#[derive(Default)]
pub struct ReportOptions {
    pub calculate_revenue: Option<Box<dyn RevenuePolicy>>,
    pub calculate_bonus: Option<Box<dyn BonusPolicy>>,
    pub settings: ReportSettings,
}

impl ReportOptions {
    /// Options without any policies and with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard report: `SimpleRevenue`, the default `BonusByProfit` tiers and default settings.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue_policy(policies::SimpleRevenue)
            .with_bonus_policy(policies::BonusByProfit::default())
    }

    /// Builds both policies and the settings from a loaded configuration.
    pub fn from_config(config: &ReportConfig) -> Result<Self, PolicyError> {
        Ok(Self {
            calculate_revenue: Some(policies::create_revenue_policy(config)),
            calculate_bonus: Some(policies::create_bonus_policy(config)?),
            settings: config.report.clone(),
        })
    }

    pub fn with_revenue_policy(mut self, policy: impl RevenuePolicy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(policy));
        self
    }

    pub fn with_bonus_policy(mut self, policy: impl BonusPolicy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(policy));
        self
    }

    pub fn with_settings(mut self, settings: ReportSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}
