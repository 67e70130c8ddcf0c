use rust_decimal::Decimal;
use tracing::trace;

use crate::{
    config::RiskConfig,
    types::{Leverage, PositionRequest, ValidatedRequest, ValidationError},
};

/// Check a proposed position against the configured limits.
/// Checks run in a fixed order and the first failure wins; nothing downstream
/// is computed for a rejected request. The direction needs no check here: the
/// closed [`Side`](crate::prelude::Side) enum makes an unrecognized direction
/// unrepresentable, deserialization and `FromStr` reject it with
/// [`ValidationError::InvalidDirection`].
///
/// # Returns:
/// The typed request if every check passes, a [`ValidationError`] otherwise.
pub fn validate(
    config: &RiskConfig,
    request: &PositionRequest,
) -> Result<ValidatedRequest, ValidationError> {
    trace!("validate: {request:?}");

    if request.size() <= Decimal::ZERO {
        return Err(ValidationError::InvalidSize);
    }
    if request.entry_price() <= Decimal::ZERO {
        return Err(ValidationError::InvalidPrice);
    }
    let leverage =
        Leverage::new(request.leverage()).map_err(|_| ValidationError::InvalidLeverage)?;
    if leverage > config.max_leverage() {
        return Err(ValidationError::InvalidLeverage);
    }

    Ok(ValidatedRequest::new(
        request.side(),
        request.size(),
        request.entry_price(),
        leverage,
    ))
}
