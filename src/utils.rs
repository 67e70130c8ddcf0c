use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by quote-denominated outputs.
pub(crate) const QUOTE_DECIMALS: u32 = 8;

/// Round a quote-denominated value to the carried precision.
#[inline]
pub(crate) fn round_quote(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(QUOTE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Bring a value to exactly [`QUOTE_DECIMALS`] fractional digits for output.
#[inline]
pub(crate) fn rescale_quote(mut val: Decimal) -> Decimal {
    val.rescale(QUOTE_DECIMALS);
    val
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_quote_midpoint_away_from_zero() {
        assert_eq!(round_quote(dec!(0.000000005)), dec!(0.00000001));
        assert_eq!(round_quote(dec!(0.000000004)), dec!(0.00000000));
        assert_eq!(round_quote(dec!(1.23)), dec!(1.23));
    }

    #[test]
    fn rescale_quote_pads_trailing_zeros() {
        assert_eq!(&rescale_quote(dec!(5000)).to_string(), "5000.00000000");
        assert_eq!(&rescale_quote(Decimal::ZERO).to_string(), "0.00000000");
        assert_eq!(&rescale_quote(dec!(45250.5)).to_string(), "45250.50000000");
    }
}
