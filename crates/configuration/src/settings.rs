use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub bonus: BonusTiers,
}

/// Settings for aggregation and for the final projection of rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// How many best-selling SKUs each report row lists.
    pub top_products_limit: usize,
    /// Decimal places kept for revenue, profit and bonus in the output.
    pub decimal_places: u32,
    /// What to do with a record or line item pointing at an unknown seller or SKU.
    pub unknown_references: UnknownReferencePolicy,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            decimal_places: 2,
            unknown_references: UnknownReferencePolicy::Fail,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum UnknownReferencePolicy {
    /// Abort the whole report with a typed error.
    #[default]
    Fail,
    /// Drop the offending record or line item and log a warning.
    Skip,
}

/// Bonus shares of profit by rank. Rates are fractions, so 0.15 means 15%.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BonusTiers {
    /// Rank 0.
    pub top_rate: Decimal,
    /// Ranks 1 and 2.
    pub runner_up_rate: Decimal,
    /// Everybody between the runners-up and the last place.
    pub standard_rate: Decimal,
    /// The last rank, unless one of the rules above already matched.
    pub last_place_rate: Decimal,
}

impl Default for BonusTiers {
    fn default() -> Self {
        Self {
            top_rate: dec!(0.15),
            runner_up_rate: dec!(0.10),
            standard_rate: dec!(0.05),
            last_place_rate: Decimal::ZERO,
        }
    }
}
