use crate::error::PolicyError;
use crate::BonusPolicy;
use configuration::BonusTiers;
use core_types::SellerStat;
use rust_decimal::Decimal;

/// Rank-tiered share of profit.
///
/// Rules are checked in order and the first match wins:
/// rank 0, then ranks 1 and 2, then the last rank, then everybody else.
/// A single seller is therefore paid the top rate, and with two or three
/// sellers the last one is still a runner-up.
#[derive(Debug, Clone, Default)]
pub struct BonusByProfit {
    tiers: BonusTiers,
}

impl BonusByProfit {
    /// Creates a new `BonusByProfit` with the given tier rates.
    pub fn new(tiers: BonusTiers) -> Result<Self, PolicyError> {
        for rate in [
            tiers.top_rate,
            tiers.runner_up_rate,
            tiers.standard_rate,
            tiers.last_place_rate,
        ] {
            if rate.is_sign_negative() {
                return Err(PolicyError::InvalidParameters(format!(
                    "bonus rates cannot be negative, got {rate}"
                )));
            }
        }
        Ok(Self { tiers })
    }

    fn rate_for(&self, rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            return self.tiers.top_rate;
        }
        if rank == 1 || rank == 2 {
            return self.tiers.runner_up_rate;
        }
        if rank + 1 == total {
            return self.tiers.last_place_rate;
        }
        self.tiers.standard_rate
    }
}

impl BonusPolicy for BonusByProfit {
    fn calculate(&self, rank: usize, total: usize, stat: &SellerStat) -> Option<Decimal> {
        self.rate_for(rank, total).checked_mul(stat.profit)
    }
}
