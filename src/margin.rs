use getset::CopyGetters;
use rust_decimal::Decimal;
use tracing::trace;

use crate::{config::RiskConfig, types::ValidatedRequest, utils::round_quote};

/// The margin figures derived from a validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct MarginRequirement {
    /// The total market value controlled: `size * entry_price`.
    #[getset(get_copy = "pub")]
    notional: Decimal,

    /// The initial margin: `notional / leverage`, the capital the position
    /// consumes when opened.
    #[getset(get_copy = "pub")]
    initial: Decimal,

    /// The minimum equity to keep the position open:
    /// `notional * maintenance_rate(leverage)`.
    #[getset(get_copy = "pub")]
    maintenance: Decimal,
}

impl MarginRequirement {
    /// Derive the margin requirement of a position. Pure arithmetic over the
    /// immutable config; margins are rounded to the quote precision.
    pub fn compute(config: &RiskConfig, request: &ValidatedRequest) -> Self {
        let notional = request.size() * request.entry_price();
        let initial = round_quote(notional / Decimal::from(request.leverage().get()));
        let maintenance = round_quote(notional * config.maintenance_rate(request.leverage()));
        trace!("compute margin: notional {notional}, initial {initial}, maintenance {maintenance}");

        assert2::debug_assert!(notional > Decimal::ZERO);
        assert2::debug_assert!(maintenance >= Decimal::ZERO);

        Self {
            notional,
            initial,
            maintenance,
        }
    }
}
