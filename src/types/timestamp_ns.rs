use derive_more::{Add, Sub};

/// A timestamp measured in nanoseconds, assigned by the caller.
/// The engine itself never reads a clock; stores receive this value from the
/// surrounding application.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Add, Sub)]
#[repr(transparent)]
pub struct TimestampNs(i64);

impl From<i64> for TimestampNs {
    #[inline(always)]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TimestampNs> for i64 {
    #[inline(always)]
    fn from(val: TimestampNs) -> Self {
        val.0
    }
}

impl std::fmt::Display for TimestampNs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
