use getset::CopyGetters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// The assembled risk figures for a single position, returned to the caller.
/// All fields carry exactly eight fractional digits and serialize as base-10
/// strings, so repeated simulations of the same input yield byte-identical
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TypedBuilder, CopyGetters)]
pub struct MarginResult {
    /// Capital that must be posted to open the position (initial margin).
    #[getset(get_copy = "pub")]
    required_margin: Decimal,

    /// Minimum equity below which the position is force-closed.
    #[getset(get_copy = "pub")]
    maintenance_margin: Decimal,

    /// Mark price at which equity equals the maintenance margin, >= 0.
    #[getset(get_copy = "pub")]
    liquidation_price: Decimal,

    /// The most that can be lost under isolated margin, equal to
    /// `required_margin` by construction.
    #[getset(get_copy = "pub")]
    max_loss: Decimal,
}

impl std::fmt::Display for MarginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "required_margin: {}, maintenance_margin: {}, liquidation_price: {}, max_loss: {}",
            self.required_margin, self.maintenance_margin, self.liquidation_price, self.max_loss
        )
    }
}
