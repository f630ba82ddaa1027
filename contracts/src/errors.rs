//! Contract error types for the bet escrow and settlement contract.

use soroban_sdk::contracterror;

/// Contract error types.
///
/// Discriminants are a stable external surface and must never be renumbered.
/// `InvalidBetAmount` covers both an out-of-bounds amount and pool capacity
/// exhaustion; callers cannot tell the two apart.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Caller lacks the required role, or the contract is paused
    Unauthorized = 100,
    /// Bet amount out of bounds, or pool capacity exhausted
    InvalidBetAmount = 101,
    /// Bet duration out of bounds
    InvalidDuration = 102,
    /// No bet exists under this id
    BetNotFound = 103,
    /// Bet is no longer active
    BetAlreadyResolved = 104,
    /// Bet window has not elapsed yet
    BetNotExpired = 105,
    /// Requested funds exceed what is available and unreserved
    InsufficientBalance = 106,
    /// Prediction (or emergency outcome) value is not RISE/DROP
    InvalidPrediction = 107,
    /// Price timestamp outside the freshness window, or no usable price
    OracleError = 108,
    /// Contract has already been initialized
    AlreadyInitialized = 109,
    /// Contract has not been initialized yet
    NotInitialized = 110,
    /// Arithmetic overflow occurred
    Overflow = 111,
}
