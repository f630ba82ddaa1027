//! Contract events published on every accepted state transition.
//!
//! Events are an audit trail only; no control flow depends on them, and a
//! rejected operation publishes nothing.

use soroban_sdk::{contractevent, Address, String};

use crate::types::{ConfigKey, Prediction};

#[contractevent]
pub struct BetPlaced {
    #[topic]
    pub bet_id: u64,
    #[topic]
    pub owner: Address,
    pub amount: i128,
    pub prediction: Prediction,
    pub entry_price: u128,
    pub expires_at: u64,
}

#[contractevent]
pub struct PriceUpdated {
    #[topic]
    pub reported_by: Address,
    pub price: u128,
    pub timestamp: u64,
}

#[contractevent]
pub struct BetResolved {
    #[topic]
    pub bet_id: u64,
    #[topic]
    pub owner: Address,
    pub won: bool,
    pub final_price: u128,
    pub payout: i128,
}

#[contractevent]
pub struct BetCancelled {
    #[topic]
    pub bet_id: u64,
    #[topic]
    pub owner: Address,
    pub refund: i128,
}

#[contractevent]
pub struct BetEmergencyResolved {
    #[topic]
    pub bet_id: u64,
    #[topic]
    pub owner: Address,
    pub outcome: u32,
    pub payout: i128,
}

#[contractevent]
pub struct PauseChanged {
    pub paused: bool,
    pub reason: String,
}

#[contractevent]
pub struct OracleRotated {
    pub previous: Address,
    pub new_oracle: Address,
}

#[contractevent]
pub struct ConfigSet {
    pub key: ConfigKey,
    pub value: u64,
}

#[contractevent]
pub struct HouseFunded {
    pub amount: i128,
    pub house_balance: i128,
}

#[contractevent]
pub struct HouseWithdrawn {
    pub amount: i128,
    pub house_balance: i128,
}
