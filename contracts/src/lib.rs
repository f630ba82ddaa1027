#![no_std]
//! # Price-Direction Bet Escrow
//!
//! Soroban contract that escrows fixed-odds wagers on whether a reference
//! price will rise or fall over a bounded window, and settles them against
//! an oracle-attested price.
//!
//! ## Key Features
//! - Role-based access control (Admin, Oracle, Users) with a global pause
//! - Pool solvency guard: contingent payouts never exceed house backing
//! - Oracle freshness and monotonicity checks on every price update
//! - Normal, admin-cancel and emergency settlement paths, all terminal
//! - Checked arithmetic prevents overflow

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{
    BetLogicContract, OUTCOME_LOSS, OUTCOME_WIN, PREDICTION_DROP, PREDICTION_RISE,
};
pub use errors::ContractError;
pub use types::{
    Bet, BetState, ConfigKey, ContractStats, DailyPool, DataKey, PauseState, Prediction,
    PricePoint, UserStats,
};
