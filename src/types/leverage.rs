use derive_more::Display;
use rust_decimal::Decimal;

use super::ConfigError;

/// Allows the quick construction of `Leverage`
///
/// # Panics:
/// if a value < 1 is provided.
#[macro_export]
macro_rules! leverage {
    ( $a:literal ) => {{
        $crate::prelude::Leverage::new($a)
            .expect("I have read the panic comment and know the leverage must be > 0.")
    }};
}

/// Leverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(transparent)]
pub struct Leverage(u8);

impl Leverage {
    /// Create a new instance from a plain multiplier.
    pub fn new(val: u8) -> Result<Self, ConfigError> {
        if val < 1 {
            Err(ConfigError::InvalidLeverage)?
        }
        Ok(Self(val))
    }

    /// Compute the initial margin requirement from leverage.
    #[inline]
    pub fn init_margin_req(&self) -> Decimal {
        Decimal::ONE / Decimal::from(self.0)
    }

    /// The raw multiplier.
    #[inline(always)]
    pub fn get(&self) -> u8 {
        self.0
    }
}
