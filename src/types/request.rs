use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{Leverage, Side};

/// A proposed position as received from the transport layer, before validation.
/// Decimal fields travel as base-10 strings on the wire so that no binary
/// float is involved at any boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder, Getters, CopyGetters)]
pub struct PositionRequest {
    /// Identifying ticker symbol, e.g. "BTC-PERP". Opaque to the engine.
    #[getset(get = "pub")]
    #[builder(setter(into))]
    instrument: String,

    /// Which way the position is taken.
    #[getset(get_copy = "pub")]
    side: Side,

    /// Quantity of the underlying.
    #[getset(get_copy = "pub")]
    size: Decimal,

    /// Price of the underlying denoted in the quote currency.
    #[getset(get_copy = "pub")]
    entry_price: Decimal,

    /// Requested leverage as a plain multiplier.
    #[getset(get_copy = "pub")]
    leverage: u8,
}

/// A request that has passed every check of the
/// [`validate`](crate::prelude::validate) step. Only this type reaches the
/// margin calculator, so the downstream math never sees a non-positive size
/// or price, nor an out-of-range leverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct ValidatedRequest {
    /// Which way the position is taken.
    #[getset(get_copy = "pub")]
    side: Side,

    /// Quantity of the underlying, proven positive.
    #[getset(get_copy = "pub")]
    size: Decimal,

    /// Entry price, proven positive.
    #[getset(get_copy = "pub")]
    entry_price: Decimal,

    /// Leverage proven to lie within `[1, max_leverage]`.
    #[getset(get_copy = "pub")]
    leverage: Leverage,
}

impl ValidatedRequest {
    pub(crate) fn new(side: Side, size: Decimal, entry_price: Decimal, leverage: Leverage) -> Self {
        assert2::debug_assert!(size > Decimal::ZERO);
        assert2::debug_assert!(entry_price > Decimal::ZERO);

        Self {
            side,
            size,
            entry_price,
            leverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn position_request_wire_form() {
        let request = PositionRequest::builder()
            .instrument("BTC-PERP")
            .side(Side::Long)
            .size(dec!(0.5))
            .entry_price(dec!(50000))
            .leverage(10)
            .build();
        let json = serde_json::to_string(&request).expect("can serialize");
        assert_eq!(
            json,
            "{\"instrument\":\"BTC-PERP\",\"side\":\"long\",\"size\":\"0.5\",\"entry_price\":\"50000\",\"leverage\":10}"
        );
        let roundtrip: PositionRequest = serde_json::from_str(&json).expect("can deserialize");
        assert_eq!(roundtrip, request);
    }

    #[test]
    fn position_request_rejects_float_wire_form() {
        // Decimal fields must be strings; a bare JSON number is a framing error.
        assert!(
            serde_json::from_str::<PositionRequest>(
                "{\"instrument\":\"BTC-PERP\",\"side\":\"long\",\"size\":0.5,\"entry_price\":\"50000\",\"leverage\":10}"
            )
            .is_err()
        );
    }

    #[test]
    #[should_panic]
    fn validated_request_debug_assert_size() {
        let _ = ValidatedRequest::new(
            Side::Long,
            dec!(-1),
            dec!(100),
            Leverage::new(2).expect("is valid"),
        );
    }
}
