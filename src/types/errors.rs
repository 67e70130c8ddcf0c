use serde::{Deserialize, Serialize};

/// Defines the ways a proposed position can be rejected before any margin math runs.
/// Always caller-correctable and surfaced synchronously, never retried internally.
#[derive(thiserror::Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    /// The position size was zero or negative.
    #[error("The position size must be > 0")]
    InvalidSize,

    /// The entry price was zero or negative.
    #[error("The entry price must be > 0")]
    InvalidPrice,

    /// The direction was not a member of the closed `Side` enum.
    #[error("The direction must be either \"long\" or \"short\"")]
    InvalidDirection,

    /// The leverage was zero or exceeded the configured ceiling.
    #[error("The leverage must lie within [1, max_leverage]")]
    InvalidLeverage,
}

impl ValidationError {
    /// Stable wire code for the transport layer. Codes are part of the public
    /// contract and never change meaning.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSize => "invalid_size",
            Self::InvalidPrice => "invalid_price",
            Self::InvalidDirection => "invalid_direction",
            Self::InvalidLeverage => "invalid_leverage",
        }
    }
}

/// Defines the possible errors when constructing a [`RiskConfig`](crate::prelude::RiskConfig).
/// These are fatal: an engine cannot be built from a rejected configuration.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A leverage value of zero was provided.
    #[error("The specified leverage must be > 0")]
    InvalidLeverage,

    /// The price tick was zero or negative.
    #[error("The price tick must be > 0")]
    InvalidPriceTick,

    /// An empty tier table was provided.
    #[error("The maintenance schedule must contain at least one tier")]
    EmptySchedule,

    /// Tier caps were out of order or duplicated.
    #[error("The maintenance tiers must have strictly ascending leverage caps")]
    UnsortedSchedule,

    /// A tier rate was negative or lower than the rate of a lower tier.
    #[error("The maintenance rates must be non-negative and non-decreasing")]
    NonMonotonicRate,

    /// The last tier cap is below the configured maximum leverage.
    #[error("The maintenance schedule does not cover the maximum leverage")]
    ScheduleGap,

    /// A rate at or above the initial margin requirement would let a position
    /// be liquidatable the moment it is opened.
    #[error("A maintenance rate violates rate < 1 / leverage")]
    MaintenanceRateTooHigh,
}

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A request was rejected by the validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A configuration was rejected at construction time.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A programming-defect signal: the engine refuses to return a number it
    /// cannot stand behind.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// Lookup of a trade id failed.
    #[error("The trade id is not known to the store")]
    TradeNotFound,
}

/// This is defined as a convenience.
pub type Result<T> = std::result::Result<T, Error>;
