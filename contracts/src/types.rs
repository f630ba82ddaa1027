//! Type definitions for the bet escrow and settlement contract.

use soroban_sdk::{contracttype, Address, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Oracle,
    Token,
    Pause,
    HouseBalance,
    ReservedExposure,
    TotalBets,
    TotalVolume,
    NextBetId,
    LatestPrice,
    Bet(u64),
    UserStats(Address),
    DailyPool(u64),
    Config(ConfigKey),
}

/// Admin-tunable settings. A closed key set: every key overrides one named
/// default constant, and unknown keys cannot be stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigKey {
    /// Smallest accepted wager, micro-units
    MinBetAmount,
    /// Largest accepted wager, micro-units
    MaxBetAmount,
    /// Shortest accepted bet window, seconds
    MinDuration,
    /// Longest accepted bet window, seconds
    MaxDuration,
    /// Gross payout per wagered unit, basis points (20_000 = 2x)
    PayoutMultiplierBps,
    /// House fee withheld from a gross payout, basis points
    PlatformFeeBps,
    /// Oldest acceptable oracle timestamp relative to ledger time, seconds
    MaxPriceAge,
    /// Furthest a reported timestamp may run ahead of ledger time, seconds
    MaxClockSkew,
}

/// Predicted price direction over the bet window
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Prediction {
    Rise,
    Drop,
}

/// Bet lifecycle states. `Active` is the only non-terminal state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BetState {
    Active,
    Won,
    Lost,
    Cancelled,
    EmergencyResolved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bet {
    pub owner: Address,
    pub amount: i128,
    pub prediction: Prediction,
    pub entry_price: u128,
    pub placed_at: u64,
    pub duration: u64,
    pub expires_at: u64,
    pub state: BetState,
    /// Realized payout, zero until the bet reaches a terminal state
    pub payout: i128,
    /// Contingent liability reserved against the house at acceptance
    pub max_payout: i128,
}

/// Latest oracle-attested price. Exactly one is retained.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PricePoint {
    pub price: u128,
    pub timestamp: u64,
    pub reported_by: Address,
}

/// Per-day betting aggregates, keyed by `placed_at / 86_400`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyPool {
    pub total_volume: i128,
    pub bet_count: u64,
}

/// Per-user aggregates, created on the first accepted bet
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStats {
    pub total_bets: u64,
    pub total_wagered: i128,
    pub total_won: i128,
    pub win_count: u64,
}

/// Global pause flag. The reason is kept for audit only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseState {
    pub paused: bool,
    pub reason: String,
}

/// Snapshot of the global counters returned by `get_contract_stats`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractStats {
    pub total_bets: u64,
    pub total_volume: i128,
    pub house_balance: i128,
    pub reserved_exposure: i128,
    pub contract_paused: bool,
    pub current_bet_id: u64,
}
