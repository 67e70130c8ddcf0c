use rust_decimal::Decimal;
use tracing::trace;

use crate::{
    config::RiskConfig,
    types::{Leverage, Side},
};

/// Solve for the mark price at which the position's equity equals its
/// maintenance margin. Setting
/// `initial_margin + size * (P - entry)` (long) respectively
/// `initial_margin + size * (entry - P)` (short) equal to the maintenance
/// margin and solving for `P` gives:
///
/// - Long: `entry * (1 - 1/leverage + rate(leverage))`
/// - Short: `entry * (1 + 1/leverage - rate(leverage))`
///
/// A long result below zero is clamped to zero, price cannot go negative.
/// The exact solution is quantized to the configured price tick last, toward
/// the side that is conservative for the trader, so the reported threshold
/// never overstates the distance to liquidation.
pub fn liquidation_price(
    config: &RiskConfig,
    side: Side,
    entry_price: Decimal,
    leverage: Leverage,
) -> Decimal {
    let init_margin_req = leverage.init_margin_req();
    let maint_rate = config.maintenance_rate(leverage);
    assert2::debug_assert!(maint_rate < init_margin_req);

    let exact = match side {
        Side::Long => entry_price * (Decimal::ONE - init_margin_req + maint_rate),
        Side::Short => entry_price * (Decimal::ONE + init_margin_req - maint_rate),
    };
    let clamped = exact.max(Decimal::ZERO);
    let quantized = quantize_to_tick(clamped, config.price_tick(), side);
    trace!("liquidation_price: side {side}, exact {exact}, quantized {quantized}");

    quantized.max(Decimal::ZERO)
}

/// Round a price to a multiple of `tick`: down for a long liquidation price,
/// up for a short one.
fn quantize_to_tick(price: Decimal, tick: Decimal, side: Side) -> Decimal {
    let steps = price / tick;
    let steps = match side {
        Side::Long => steps.floor(),
        Side::Short => steps.ceil(),
    };
    steps * tick
}
