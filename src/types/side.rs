use std::{fmt::Formatter, str::FromStr};

use Side::*;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Side of a position.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    /// Gains when the mark price rises.
    Long = 0,
    /// Gains when the mark price falls.
    Short = 1,
}

impl Side {
    /// Returns the inverted side
    #[inline(always)]
    pub fn inverted(&self) -> Self {
        match self {
            Long => Short,
            Short => Long,
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Long),
            "short" => Ok(Short),
            _ => Err(ValidationError::InvalidDirection),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Long => write!(f, "long"),
            Short => write!(f, "short"),
        }
    }
}
