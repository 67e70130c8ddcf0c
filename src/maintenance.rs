use getset::CopyGetters;
use rust_decimal::Decimal;

use crate::types::{ConfigError, Leverage};

/// One bracket of the maintenance-margin schedule. The tier applies to every
/// leverage up to and including its `cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct MaintenanceTier {
    /// The highest leverage this tier applies to.
    #[getset(get_copy = "pub")]
    cap: Leverage,

    /// The fraction of notional reserved as maintenance margin.
    #[getset(get_copy = "pub")]
    rate: Decimal,
}

impl MaintenanceTier {
    /// Create a new tier. Cross-tier rules are enforced by
    /// [`MaintenanceSchedule::new`].
    pub fn new(cap: Leverage, rate: Decimal) -> Self {
        Self { cap, rate }
    }
}

/// A monotonically non-decreasing step function mapping leverage to its
/// maintenance rate, mirroring exchange risk tiering: higher leverage
/// brackets reserve a larger fraction of notional. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    /// Sorted ascending by cap.
    tiers: Vec<MaintenanceTier>,
}

impl MaintenanceSchedule {
    /// Create a new schedule from tiers sorted ascending by leverage cap.
    ///
    /// # Returns:
    /// Either a structurally valid schedule or a `ConfigError`. Whether the
    /// schedule covers a concrete maximum leverage and keeps every rate below
    /// `1 / leverage` is checked by [`RiskConfig::new`](crate::prelude::RiskConfig::new),
    /// which knows the ceiling.
    pub fn new(tiers: Vec<MaintenanceTier>) -> Result<Self, ConfigError> {
        if tiers.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        if !tiers.windows(2).all(|w| w[0].cap < w[1].cap) {
            return Err(ConfigError::UnsortedSchedule);
        }
        if tiers[0].rate < Decimal::ZERO || !tiers.windows(2).all(|w| w[0].rate <= w[1].rate) {
            return Err(ConfigError::NonMonotonicRate);
        }

        Ok(Self { tiers })
    }

    /// The maintenance rate applying to the given leverage.
    /// Leverages beyond the last cap fall into the last tier; configurations
    /// built through `RiskConfig::new` never ask for those.
    pub fn rate_for(&self, leverage: Leverage) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| leverage <= tier.cap)
            .unwrap_or_else(|| self.tiers.last().expect("a schedule has at least one tier"))
            .rate
    }

    /// The highest leverage the schedule covers.
    pub fn last_cap(&self) -> Leverage {
        self.tiers
            .last()
            .expect("a schedule has at least one tier")
            .cap
    }
}
