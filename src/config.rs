use rust_decimal::Decimal;

use crate::{
    leverage,
    maintenance::{MaintenanceSchedule, MaintenanceTier},
    types::{ConfigError, Leverage},
};

/// Define the engine configuration. Loaded once at startup, validated on
/// construction and immutable afterwards, so concurrent readers need no
/// synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskConfig {
    /// The highest leverage a position may request.
    max_leverage: Leverage,
    /// The maintenance-rate step function over `[1, max_leverage]`.
    schedule: MaintenanceSchedule,
    /// Step size liquidation prices are quantized to.
    price_tick: Decimal,
}

impl RiskConfig {
    /// Create a new config.
    ///
    /// # Arguments:
    /// `max_leverage`: The leverage ceiling positions are validated against.
    /// `schedule`: The maintenance-rate tier table. It must cover
    /// `max_leverage` and satisfy `rate(L) < 1 / L` for every supported `L`,
    /// the structural guarantee that the maintenance margin always stays
    /// below the initial margin.
    /// `price_tick`: The price step liquidation prices are reported in.
    ///
    /// # Returns:
    /// Either a valid config or a `ConfigError`.
    pub fn new(
        max_leverage: Leverage,
        schedule: MaintenanceSchedule,
        price_tick: Decimal,
    ) -> Result<Self, ConfigError> {
        if price_tick <= Decimal::ZERO {
            return Err(ConfigError::InvalidPriceTick);
        }
        if schedule.last_cap() < max_leverage {
            return Err(ConfigError::ScheduleGap);
        }
        for val in 1..=max_leverage.get() {
            let leverage = Leverage::new(val)?;
            if schedule.rate_for(leverage) >= leverage.init_margin_req() {
                return Err(ConfigError::MaintenanceRateTooHigh);
            }
        }

        Ok(Self {
            max_leverage,
            schedule,
            price_tick,
        })
    }

    /// Return the configured leverage ceiling.
    #[inline(always)]
    pub fn max_leverage(&self) -> Leverage {
        self.max_leverage
    }

    /// The maintenance rate applying to the given leverage.
    #[inline(always)]
    pub fn maintenance_rate(&self, leverage: Leverage) -> Decimal {
        self.schedule.rate_for(leverage)
    }

    /// Return the configured price tick.
    #[inline(always)]
    pub fn price_tick(&self) -> Decimal {
        self.price_tick
    }
}

impl Default for RiskConfig {
    /// A 125x ceiling with exchange-shaped risk tiers and a 0.01 price tick.
    fn default() -> Self {
        let schedule = MaintenanceSchedule::new(vec![
            MaintenanceTier::new(leverage!(10), Decimal::new(4, 3)), // 0.004
            MaintenanceTier::new(leverage!(25), Decimal::new(5, 3)), // 0.005
            MaintenanceTier::new(leverage!(50), Decimal::new(65, 4)), // 0.0065
            MaintenanceTier::new(leverage!(125), Decimal::new(78, 4)), // 0.0078
        ])
        .expect("the default schedule is valid");

        Self::new(leverage!(125), schedule, Decimal::new(1, 2))
            .expect("the default configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn risk_config_default_is_valid() {
        let config = RiskConfig::default();
        assert_eq!(config.max_leverage(), leverage!(125));
        assert_eq!(config.maintenance_rate(leverage!(10)), dec!(0.004));
        assert_eq!(config.maintenance_rate(leverage!(125)), dec!(0.0078));
        assert_eq!(config.price_tick(), dec!(0.01));
    }

    #[test]
    fn risk_config_rejects_non_positive_tick() {
        let schedule =
            MaintenanceSchedule::new(vec![MaintenanceTier::new(leverage!(10), dec!(0.004))])
                .expect("is valid");
        assert_eq!(
            RiskConfig::new(leverage!(10), schedule.clone(), Decimal::ZERO),
            Err(ConfigError::InvalidPriceTick)
        );
        assert_eq!(
            RiskConfig::new(leverage!(10), schedule, dec!(-0.01)),
            Err(ConfigError::InvalidPriceTick)
        );
    }

    #[test]
    fn risk_config_rejects_schedule_gap() {
        let schedule =
            MaintenanceSchedule::new(vec![MaintenanceTier::new(leverage!(10), dec!(0.004))])
                .expect("is valid");
        assert_eq!(
            RiskConfig::new(leverage!(20), schedule, dec!(0.01)),
            Err(ConfigError::ScheduleGap)
        );
    }

    #[test]
    fn risk_config_rejects_rate_at_or_above_init_margin_req() {
        // rate(100) = 0.01 = 1 / 100: a fully margined position would already
        // be liquidatable.
        let schedule =
            MaintenanceSchedule::new(vec![MaintenanceTier::new(leverage!(100), dec!(0.01))])
                .expect("is valid");
        assert_eq!(
            RiskConfig::new(leverage!(100), schedule, dec!(0.01)),
            Err(ConfigError::MaintenanceRateTooHigh)
        );

        // The same table is fine under a 50x ceiling.
        let schedule =
            MaintenanceSchedule::new(vec![MaintenanceTier::new(leverage!(100), dec!(0.01))])
                .expect("is valid");
        assert!(RiskConfig::new(leverage!(50), schedule, dec!(0.01)).is_ok());
    }

    #[test]
    fn risk_config_zero_rate_is_allowed() {
        let schedule =
            MaintenanceSchedule::new(vec![MaintenanceTier::new(leverage!(10), Decimal::ZERO)])
                .expect("is valid");
        assert!(RiskConfig::new(leverage!(10), schedule, dec!(0.01)).is_ok());
    }
}
