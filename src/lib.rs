#![deny(missing_docs, rustdoc::missing_crate_level_docs, unused_imports)]
#![warn(clippy::all)]
#![doc = include_str!("../README.md")]

//! isomargin - isolated-margin risk calculations for leveraged positions

mod config;
mod engine;
mod liquidation;
mod maintenance;
mod margin;
mod trade_store;
mod types;
mod utils;
mod validator;

/// Exports common types
pub mod prelude {
    // To make boundary values constructible without extra imports.
    pub use rust_decimal::Decimal;

    pub use crate::{
        config::RiskConfig,
        engine::RiskEngine,
        leverage,
        liquidation::liquidation_price,
        maintenance::{MaintenanceSchedule, MaintenanceTier},
        margin::MarginRequirement,
        trade_store::{InMemoryTradeStore, Trade, TradeId, TradeStatus, TradeStore},
        types::*,
        validator::validate,
    };
}
