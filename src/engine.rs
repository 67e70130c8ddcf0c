use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    config::RiskConfig,
    liquidation::liquidation_price,
    margin::MarginRequirement,
    types::{Error, MarginResult, PositionRequest, Result},
    utils::rescale_quote,
    validator::validate,
};

/// The risk engine: a pure pipeline of validation, margin computation,
/// liquidation solving and result assembly over an immutable configuration.
/// Holds no state across calls, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    /// Create a new engine from a validated configuration.
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Return a reference to the configuration.
    #[inline(always)]
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Simulate opening the proposed position under isolated-margin rules.
    ///
    /// The maximum loss equals the required margin: liquidation fires once
    /// equity falls to the maintenance margin, so no capital beyond the
    /// posted margin is ever at risk. Should the computed figures contradict
    /// that guarantee, the request is aborted with
    /// [`Error::InvariantViolation`] instead of returning a number. That also
    /// covers dust positions whose margins collapse to zero at the quote
    /// precision.
    ///
    /// # Returns:
    /// The assembled [`MarginResult`] with all fields at eight fractional
    /// digits, or the first error encountered.
    pub fn simulate(&self, request: &PositionRequest) -> Result<MarginResult> {
        let validated = validate(&self.config, request)?;
        let requirement = MarginRequirement::compute(&self.config, &validated);
        let liq_price = liquidation_price(
            &self.config,
            validated.side(),
            validated.entry_price(),
            validated.leverage(),
        );

        if requirement.maintenance() >= requirement.initial() {
            return Err(Error::InvariantViolation(
                "the maintenance margin must stay below the required margin",
            ));
        }
        if liq_price < Decimal::ZERO {
            return Err(Error::InvariantViolation(
                "the liquidation price must not be negative",
            ));
        }

        let result = MarginResult::builder()
            .required_margin(rescale_quote(requirement.initial()))
            .maintenance_margin(rescale_quote(requirement.maintenance()))
            .liquidation_price(rescale_quote(liq_price))
            .max_loss(rescale_quote(requirement.initial()))
            .build();
        debug!("simulate: instrument {}, {result}", request.instrument());

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        leverage,
        maintenance::{MaintenanceSchedule, MaintenanceTier},
        types::{Side, ValidationError},
    };

    fn engine(rate: Decimal) -> RiskEngine {
        let schedule = MaintenanceSchedule::new(vec![MaintenanceTier::new(leverage!(125), rate)])
            .expect("is valid");
        RiskEngine::new(RiskConfig::new(leverage!(125), schedule, dec!(0.01)).expect("is valid"))
    }

    fn btc_long() -> PositionRequest {
        PositionRequest::builder()
            .instrument("BTC-PERP")
            .side(Side::Long)
            .size(dec!(1))
            .entry_price(dec!(50000))
            .leverage(10)
            .build()
    }

    #[traced_test]
    #[test]
    fn simulate_assembles_the_result() {
        let result = engine(dec!(0.005)).simulate(&btc_long()).expect("is valid");
        assert_eq!(result.required_margin(), dec!(5000.00000000));
        assert_eq!(result.maintenance_margin(), dec!(250.00000000));
        assert_eq!(result.liquidation_price(), dec!(45250.00000000));
        assert_eq!(result.max_loss(), result.required_margin());
        assert!(logs_contain("simulate: instrument BTC-PERP"));
    }

    #[test]
    fn simulate_rejects_before_computing() {
        let engine = engine(dec!(0.005));
        let request = PositionRequest::builder()
            .instrument("BTC-PERP")
            .side(Side::Long)
            .size(dec!(-1))
            .entry_price(dec!(50000))
            .leverage(10)
            .build();
        assert_eq!(
            engine.simulate(&request),
            Err(Error::Validation(ValidationError::InvalidSize))
        );
    }

    #[test]
    fn simulate_refuses_dust_positions() {
        // Both margins round to zero at the quote precision; the engine
        // refuses rather than reporting a position with no capital at risk.
        let engine = engine(dec!(0.005));
        let request = PositionRequest::builder()
            .instrument("SHIB-PERP")
            .side(Side::Long)
            .size(dec!(0.00000001))
            .entry_price(dec!(0.00000001))
            .leverage(10)
            .build();
        assert!(matches!(
            engine.simulate(&request),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn simulate_is_deterministic() {
        let engine = engine(dec!(0.005));
        let first = engine.simulate(&btc_long()).expect("is valid");
        let second = engine.simulate(&btc_long()).expect("is valid");
        assert_eq!(
            serde_json::to_string(&first).expect("can serialize"),
            serde_json::to_string(&second).expect("can serialize"),
        );
    }
}
