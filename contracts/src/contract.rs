//! Core contract implementation for the bet escrow and settlement engine.
//!
//! A user locks value predicting whether a reference price will rise or fall
//! over a bounded window; the oracle later settles the wager against an
//! attested price at fixed odds. Acceptance is gated by a pool solvency
//! guard: the house never carries more contingent payout obligation than it
//! holds in backing funds.

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use crate::errors::ContractError;
use crate::events::{
    BetCancelled, BetEmergencyResolved, BetPlaced, BetResolved, ConfigSet, HouseFunded,
    HouseWithdrawn, OracleRotated, PauseChanged, PriceUpdated,
};
use crate::types::{
    Bet, BetState, ConfigKey, ContractStats, DailyPool, DataKey, PauseState, Prediction,
    PricePoint, UserStats,
};

/// Wire encoding of a price-direction prediction
pub const PREDICTION_RISE: u32 = 1;
pub const PREDICTION_DROP: u32 = 2;

/// Wire encoding of an emergency-resolution outcome
pub const OUTCOME_WIN: u32 = 1;
pub const OUTCOME_LOSS: u32 = 2;

const SECONDS_PER_DAY: u64 = 86_400;
const BPS_DENOMINATOR: i128 = 10_000;

// Defaults for every config key. An admin override through `set_config`
// takes effect on the next operation that reads the key.
const DEFAULT_MIN_BET_AMOUNT: u64 = 100_000; // 0.1 tokens in micro-units
const DEFAULT_MAX_BET_AMOUNT: u64 = 100_000_000_000; // 100,000 tokens
const DEFAULT_MIN_DURATION: u64 = 3_600; // 1 hour
const DEFAULT_MAX_DURATION: u64 = 2_592_000; // 30 days
const DEFAULT_PAYOUT_MULTIPLIER_BPS: u64 = 20_000; // 2x gross
const DEFAULT_PLATFORM_FEE_BPS: u64 = 250; // 2.5% of the gross payout
const DEFAULT_MAX_PRICE_AGE: u64 = 3_600;
const DEFAULT_MAX_CLOCK_SKEW: u64 = 300;

#[contract]
pub struct BetLogicContract;

#[contractimpl]
impl BetLogicContract {
    /// Initializes the contract with admin, oracle and escrow token (one-time only).
    ///
    /// The admin is fixed for the lifetime of the contract; the oracle can be
    /// rotated later through `set_oracle_address`.
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Oracle, &oracle);
        env.storage().persistent().set(&DataKey::Token, &token);
        env.storage().persistent().set(
            &DataKey::Pause,
            &PauseState {
                paused: false,
                reason: String::from_str(&env, ""),
            },
        );
        env.storage().persistent().set(&DataKey::HouseBalance, &0i128);
        env.storage().persistent().set(&DataKey::ReservedExposure, &0i128);
        env.storage().persistent().set(&DataKey::TotalBets, &0u64);
        env.storage().persistent().set(&DataKey::TotalVolume, &0i128);
        env.storage().persistent().set(&DataKey::NextBetId, &1u64);

        Ok(())
    }

    // ----- bet ledger -----

    /// Places a bet on the price direction over the next `duration` seconds.
    ///
    /// Validation order is fixed and externally observable: pause, amount,
    /// duration, prediction, then pool solvency. The wager is escrowed from
    /// the caller before any record is written; a failed transfer aborts the
    /// whole invocation with no state change.
    pub fn place_bet(
        env: Env,
        user: Address,
        amount: i128,
        prediction: u32,
        duration: u64,
        current_price: u128,
    ) -> Result<u64, ContractError> {
        user.require_auth();
        Self::_admin(&env)?;
        Self::_require_not_paused(&env)?;

        let min_bet = Self::_config_or(&env, ConfigKey::MinBetAmount, DEFAULT_MIN_BET_AMOUNT) as i128;
        let max_bet = Self::_config_or(&env, ConfigKey::MaxBetAmount, DEFAULT_MAX_BET_AMOUNT) as i128;
        if amount < min_bet || amount > max_bet {
            return Err(ContractError::InvalidBetAmount);
        }

        let min_duration = Self::_config_or(&env, ConfigKey::MinDuration, DEFAULT_MIN_DURATION);
        let max_duration = Self::_config_or(&env, ConfigKey::MaxDuration, DEFAULT_MAX_DURATION);
        if duration < min_duration || duration > max_duration {
            return Err(ContractError::InvalidDuration);
        }

        let prediction = Self::_parse_prediction(prediction)?;

        // Pool solvency guard. Capacity exhaustion reports the same code as
        // a malformed amount; callers cannot tell the two apart.
        let max_payout = Self::_max_payout(&env, amount)?;
        let house_balance = Self::_house_balance(&env);
        let reserved = Self::_reserved_exposure(&env);
        if house_balance
            .checked_sub(reserved)
            .ok_or(ContractError::Overflow)?
            < max_payout
        {
            return Err(ContractError::InvalidBetAmount);
        }

        // Escrow the wager. The token call is all-or-nothing; on rejection
        // the host rolls back the entire invocation.
        let token_addr = Self::_token(&env)?;
        token::TokenClient::new(&env, &token_addr).transfer(
            &user,
            &env.current_contract_address(),
            &amount,
        );

        let now = env.ledger().timestamp();
        let expires_at = now.checked_add(duration).ok_or(ContractError::Overflow)?;

        let bet_id: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::NextBetId)
            .unwrap_or(1);
        let next_id = bet_id.checked_add(1).ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&DataKey::NextBetId, &next_id);

        let bet = Bet {
            owner: user.clone(),
            amount,
            prediction: prediction.clone(),
            entry_price: current_price,
            placed_at: now,
            duration,
            expires_at,
            state: BetState::Active,
            payout: 0,
            max_payout,
        };
        env.storage().persistent().set(&DataKey::Bet(bet_id), &bet);

        // The stake joins the house backing; the gross payout is reserved
        // as contingent liability until the bet leaves the Active state.
        Self::_set_house_balance(
            &env,
            house_balance.checked_add(amount).ok_or(ContractError::Overflow)?,
        );
        Self::_set_reserved_exposure(
            &env,
            reserved.checked_add(max_payout).ok_or(ContractError::Overflow)?,
        );

        Self::_record_placement(&env, &user, amount, now)?;

        BetPlaced {
            bet_id,
            owner: user,
            amount,
            prediction,
            entry_price: current_price,
            expires_at,
        }
        .publish(&env);

        Ok(bet_id)
    }

    /// Returns the bet record, if any
    pub fn get_bet_info(env: Env, bet_id: u64) -> Option<Bet> {
        env.storage().persistent().get(&DataKey::Bet(bet_id))
    }

    /// Returns aggregates for a user who has placed at least one accepted bet
    pub fn get_user_stats(env: Env, user: Address) -> Option<UserStats> {
        env.storage().persistent().get(&DataKey::UserStats(user))
    }

    /// Returns aggregates for a day bucket (`placed_at / 86_400`)
    pub fn get_daily_pool(env: Env, day: u64) -> Option<DailyPool> {
        env.storage().persistent().get(&DataKey::DailyPool(day))
    }

    /// True iff the bet exists, belongs to `user`, and is still active
    pub fn get_user_active_bet_status(env: Env, user: Address, bet_id: u64) -> bool {
        match env.storage().persistent().get::<_, Bet>(&DataKey::Bet(bet_id)) {
            Some(bet) => bet.owner == user && bet.state == BetState::Active,
            None => false,
        }
    }

    /// Returns the global counters as one snapshot
    pub fn get_contract_stats(env: Env) -> ContractStats {
        ContractStats {
            total_bets: env.storage().persistent().get(&DataKey::TotalBets).unwrap_or(0),
            total_volume: env.storage().persistent().get(&DataKey::TotalVolume).unwrap_or(0),
            house_balance: Self::_house_balance(&env),
            reserved_exposure: Self::_reserved_exposure(&env),
            contract_paused: Self::_is_paused(&env),
            current_bet_id: env.storage().persistent().get(&DataKey::NextBetId).unwrap_or(1),
        }
    }

    /// Returns the escrow token balance held by the contract
    pub fn get_contract_balance(env: Env) -> i128 {
        match env.storage().persistent().get::<_, Address>(&DataKey::Token) {
            Some(token_addr) => token::TokenClient::new(&env, &token_addr)
                .balance(&env.current_contract_address()),
            None => 0,
        }
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    pub fn get_oracle(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Oracle)
    }

    // ----- price oracle feed -----

    /// Records a new attested price (oracle only).
    ///
    /// `timestamp` must fall within `[now - max_price_age, now + max_clock_skew]`
    /// and must not regress behind the previously stored point.
    pub fn update_price(
        env: Env,
        caller: Address,
        price: u128,
        timestamp: u64,
    ) -> Result<(), ContractError> {
        Self::_require_oracle(&env, &caller)?;
        Self::_require_not_paused(&env)?;

        if price == 0 {
            return Err(ContractError::OracleError);
        }

        let now = env.ledger().timestamp();
        let max_age = Self::_config_or(&env, ConfigKey::MaxPriceAge, DEFAULT_MAX_PRICE_AGE);
        let max_skew = Self::_config_or(&env, ConfigKey::MaxClockSkew, DEFAULT_MAX_CLOCK_SKEW);

        if timestamp < now.saturating_sub(max_age) {
            return Err(ContractError::OracleError);
        }
        if timestamp > now.checked_add(max_skew).ok_or(ContractError::Overflow)? {
            return Err(ContractError::OracleError);
        }

        if let Some(previous) = env
            .storage()
            .persistent()
            .get::<_, PricePoint>(&DataKey::LatestPrice)
        {
            if timestamp < previous.timestamp {
                return Err(ContractError::OracleError);
            }
        }

        let point = PricePoint {
            price,
            timestamp,
            reported_by: caller.clone(),
        };
        env.storage().persistent().set(&DataKey::LatestPrice, &point);

        PriceUpdated {
            reported_by: caller,
            price,
            timestamp,
        }
        .publish(&env);

        Ok(())
    }

    /// Returns the latest attested price, if any
    pub fn get_latest_price_info(env: Env) -> Option<PricePoint> {
        env.storage().persistent().get(&DataKey::LatestPrice)
    }

    // ----- resolution engine -----

    /// True iff the bet exists, is active, its window has elapsed, and a
    /// sufficiently fresh price is on record
    pub fn can_bet_be_resolved(env: Env, bet_id: u64) -> bool {
        let bet: Bet = match env.storage().persistent().get(&DataKey::Bet(bet_id)) {
            Some(bet) => bet,
            None => return false,
        };
        if bet.state != BetState::Active {
            return false;
        }
        let now = env.ledger().timestamp();
        now >= bet.expires_at && Self::_fresh_price_available(&env, now)
    }

    /// Settles one expired bet against `final_price` (oracle only).
    ///
    /// RISE wins iff the price rose, DROP wins iff it fell; an unchanged
    /// price settles as a loss. A win pays the reserved gross payout minus
    /// the platform fee. Returns the realized payout.
    pub fn batch_resolve_bet(
        env: Env,
        caller: Address,
        bet_id: u64,
        final_price: u128,
    ) -> Result<i128, ContractError> {
        Self::_require_oracle(&env, &caller)?;
        Self::_require_not_paused(&env)?;

        let mut bet: Bet = env
            .storage()
            .persistent()
            .get(&DataKey::Bet(bet_id))
            .ok_or(ContractError::BetNotFound)?;
        if bet.state != BetState::Active {
            return Err(ContractError::BetAlreadyResolved);
        }

        let now = env.ledger().timestamp();
        if now < bet.expires_at {
            return Err(ContractError::BetNotExpired);
        }
        if !Self::_fresh_price_available(&env, now) {
            return Err(ContractError::OracleError);
        }

        let won = match bet.prediction {
            Prediction::Rise => final_price > bet.entry_price,
            Prediction::Drop => final_price < bet.entry_price,
        };

        let payout = if won {
            Self::_net_payout(&env, bet.max_payout)?
        } else {
            0
        };

        Self::_release_exposure(&env, bet.max_payout)?;
        if payout > 0 {
            Self::_debit_house(&env, payout)?;
        }

        bet.state = if won { BetState::Won } else { BetState::Lost };
        bet.payout = payout;
        env.storage().persistent().set(&DataKey::Bet(bet_id), &bet);

        Self::_record_settlement(&env, &bet.owner, won, payout)?;

        if payout > 0 {
            let token_addr = Self::_token(&env)?;
            token::TokenClient::new(&env, &token_addr).transfer(
                &env.current_contract_address(),
                &bet.owner,
                &payout,
            );
        }

        BetResolved {
            bet_id,
            owner: bet.owner,
            won,
            final_price,
            payout,
        }
        .publish(&env);

        Ok(payout)
    }

    /// Cancels an active bet and refunds the stake to its owner (admin only).
    ///
    /// Allowed while paused so stuck bets can be unwound.
    pub fn cancel_bet(env: Env, caller: Address, bet_id: u64) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;

        let mut bet: Bet = env
            .storage()
            .persistent()
            .get(&DataKey::Bet(bet_id))
            .ok_or(ContractError::BetNotFound)?;
        if bet.state != BetState::Active {
            return Err(ContractError::BetAlreadyResolved);
        }

        Self::_release_exposure(&env, bet.max_payout)?;
        Self::_debit_house(&env, bet.amount)?;

        bet.state = BetState::Cancelled;
        bet.payout = bet.amount;
        env.storage().persistent().set(&DataKey::Bet(bet_id), &bet);

        let token_addr = Self::_token(&env)?;
        token::TokenClient::new(&env, &token_addr).transfer(
            &env.current_contract_address(),
            &bet.owner,
            &bet.amount,
        );

        BetCancelled {
            bet_id,
            owner: bet.owner,
            refund: bet.amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Force-settles an active bet with an admin-supplied outcome and payout,
    /// bypassing the price comparison. Only usable while the contract is
    /// paused; the escape hatch for a failed oracle or a stuck bet.
    ///
    /// The payout may not exceed the bet's reserved liability, so emergency
    /// resolution can never create new exposure.
    pub fn emergency_resolve_bet(
        env: Env,
        caller: Address,
        bet_id: u64,
        outcome: u32,
        payout: i128,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;
        if !Self::_is_paused(&env) {
            return Err(ContractError::Unauthorized);
        }
        if outcome != OUTCOME_WIN && outcome != OUTCOME_LOSS {
            return Err(ContractError::InvalidPrediction);
        }

        let mut bet: Bet = env
            .storage()
            .persistent()
            .get(&DataKey::Bet(bet_id))
            .ok_or(ContractError::BetNotFound)?;
        if bet.state != BetState::Active {
            return Err(ContractError::BetAlreadyResolved);
        }
        if payout < 0 || payout > bet.max_payout {
            return Err(ContractError::InsufficientBalance);
        }

        Self::_release_exposure(&env, bet.max_payout)?;
        if payout > 0 {
            Self::_debit_house(&env, payout)?;
        }

        bet.state = BetState::EmergencyResolved;
        bet.payout = payout;
        env.storage().persistent().set(&DataKey::Bet(bet_id), &bet);

        Self::_record_settlement(&env, &bet.owner, outcome == OUTCOME_WIN, payout)?;

        if payout > 0 {
            let token_addr = Self::_token(&env)?;
            token::TokenClient::new(&env, &token_addr).transfer(
                &env.current_contract_address(),
                &bet.owner,
                &payout,
            );
        }

        BetEmergencyResolved {
            bet_id,
            owner: bet.owner,
            outcome,
            payout,
        }
        .publish(&env);

        Ok(())
    }

    // ----- treasury -----

    /// Deposits admin funds into the house backing pool (admin only)
    pub fn fund_house_balance(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;
        if amount <= 0 {
            return Err(ContractError::InsufficientBalance);
        }

        let token_addr = Self::_token(&env)?;
        token::TokenClient::new(&env, &token_addr).transfer(
            &caller,
            &env.current_contract_address(),
            &amount,
        );

        let house_balance = Self::_house_balance(&env)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        Self::_set_house_balance(&env, house_balance);

        HouseFunded {
            amount,
            house_balance,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraws unreserved house funds to the admin (admin only).
    ///
    /// Funds backing active bets cannot be withdrawn.
    pub fn withdraw_house_balance(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;

        let house_balance = Self::_house_balance(&env);
        let reserved = Self::_reserved_exposure(&env);
        let available = house_balance
            .checked_sub(reserved)
            .ok_or(ContractError::Overflow)?;
        if amount <= 0 || amount > available {
            return Err(ContractError::InsufficientBalance);
        }

        let remaining = house_balance
            .checked_sub(amount)
            .ok_or(ContractError::Overflow)?;
        Self::_set_house_balance(&env, remaining);

        let token_addr = Self::_token(&env)?;
        token::TokenClient::new(&env, &token_addr).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        HouseWithdrawn {
            amount,
            house_balance: remaining,
        }
        .publish(&env);

        Ok(())
    }

    // ----- admin -----

    /// Rotates the oracle principal (admin only)
    pub fn set_oracle_address(
        env: Env,
        caller: Address,
        new_oracle: Address,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;

        let previous = Self::_oracle(&env)?;
        env.storage().persistent().set(&DataKey::Oracle, &new_oracle);

        OracleRotated {
            previous,
            new_oracle,
        }
        .publish(&env);

        Ok(())
    }

    /// Flips the global pause flag (admin only). The reason is stored for
    /// audit and echoed in the event.
    pub fn set_contract_pause(
        env: Env,
        caller: Address,
        paused: bool,
        reason: String,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;

        env.storage().persistent().set(
            &DataKey::Pause,
            &PauseState {
                paused,
                reason: reason.clone(),
            },
        );

        PauseChanged { paused, reason }.publish(&env);

        Ok(())
    }

    /// Overrides one configuration default (admin only). Unconditional for
    /// an authorized admin; takes effect on the next read of the key.
    pub fn set_config(
        env: Env,
        caller: Address,
        key: ConfigKey,
        value: u64,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env, &caller)?;

        env.storage()
            .persistent()
            .set(&DataKey::Config(key.clone()), &value);

        ConfigSet { key, value }.publish(&env);

        Ok(())
    }

    /// Returns the stored override for `key`, if any
    pub fn get_config(env: Env, key: ConfigKey) -> Option<u64> {
        env.storage().persistent().get(&DataKey::Config(key))
    }

    // ----- access control helpers -----

    fn _admin(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    fn _oracle(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Oracle)
            .ok_or(ContractError::NotInitialized)
    }

    fn _token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Token)
            .ok_or(ContractError::NotInitialized)
    }

    fn _require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        if *caller != Self::_admin(env)? {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn _require_oracle(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        if *caller != Self::_oracle(env)? {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn _is_paused(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get::<_, PauseState>(&DataKey::Pause)
            .map(|pause| pause.paused)
            .unwrap_or(false)
    }

    fn _require_not_paused(env: &Env) -> Result<(), ContractError> {
        if Self::_is_paused(env) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    // ----- solvency and payout helpers -----

    fn _config_or(env: &Env, key: ConfigKey, default: u64) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Config(key))
            .unwrap_or(default)
    }

    fn _house_balance(env: &Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::HouseBalance)
            .unwrap_or(0)
    }

    fn _set_house_balance(env: &Env, amount: i128) {
        env.storage().persistent().set(&DataKey::HouseBalance, &amount);
    }

    fn _reserved_exposure(env: &Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::ReservedExposure)
            .unwrap_or(0)
    }

    fn _set_reserved_exposure(env: &Env, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::ReservedExposure, &amount);
    }

    /// Gross contingent payout reserved at acceptance: amount x multiplier
    fn _max_payout(env: &Env, amount: i128) -> Result<i128, ContractError> {
        let multiplier =
            Self::_config_or(env, ConfigKey::PayoutMultiplierBps, DEFAULT_PAYOUT_MULTIPLIER_BPS)
                as i128;
        amount
            .checked_mul(multiplier)
            .map(|gross| gross / BPS_DENOMINATOR)
            .ok_or(ContractError::Overflow)
    }

    /// Realized payout on a win: the reserved gross minus the platform fee
    fn _net_payout(env: &Env, max_payout: i128) -> Result<i128, ContractError> {
        let fee_bps =
            Self::_config_or(env, ConfigKey::PlatformFeeBps, DEFAULT_PLATFORM_FEE_BPS) as i128;
        let fee = max_payout
            .checked_mul(fee_bps)
            .map(|f| f / BPS_DENOMINATOR)
            .ok_or(ContractError::Overflow)?;
        max_payout.checked_sub(fee).ok_or(ContractError::Overflow)
    }

    fn _release_exposure(env: &Env, max_payout: i128) -> Result<(), ContractError> {
        let reserved = Self::_reserved_exposure(env)
            .checked_sub(max_payout)
            .ok_or(ContractError::Overflow)?;
        Self::_set_reserved_exposure(env, reserved);
        Ok(())
    }

    fn _debit_house(env: &Env, amount: i128) -> Result<(), ContractError> {
        let house_balance = Self::_house_balance(env);
        if amount > house_balance {
            return Err(ContractError::InsufficientBalance);
        }
        Self::_set_house_balance(env, house_balance - amount);
        Ok(())
    }

    fn _parse_prediction(value: u32) -> Result<Prediction, ContractError> {
        match value {
            PREDICTION_RISE => Ok(Prediction::Rise),
            PREDICTION_DROP => Ok(Prediction::Drop),
            _ => Err(ContractError::InvalidPrediction),
        }
    }

    fn _fresh_price_available(env: &Env, now: u64) -> bool {
        let max_age = Self::_config_or(env, ConfigKey::MaxPriceAge, DEFAULT_MAX_PRICE_AGE);
        match env
            .storage()
            .persistent()
            .get::<_, PricePoint>(&DataKey::LatestPrice)
        {
            Some(point) => now.saturating_sub(point.timestamp) <= max_age,
            None => false,
        }
    }

    // ----- stats helpers -----

    fn _record_placement(
        env: &Env,
        user: &Address,
        amount: i128,
        now: u64,
    ) -> Result<(), ContractError> {
        let day = now / SECONDS_PER_DAY;
        let pool_key = DataKey::DailyPool(day);
        let mut pool: DailyPool = env.storage().persistent().get(&pool_key).unwrap_or(DailyPool {
            total_volume: 0,
            bet_count: 0,
        });
        pool.total_volume = pool
            .total_volume
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        pool.bet_count = pool.bet_count.checked_add(1).ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&pool_key, &pool);

        let stats_key = DataKey::UserStats(user.clone());
        let mut stats: UserStats =
            env.storage().persistent().get(&stats_key).unwrap_or(UserStats {
                total_bets: 0,
                total_wagered: 0,
                total_won: 0,
                win_count: 0,
            });
        stats.total_bets = stats.total_bets.checked_add(1).ok_or(ContractError::Overflow)?;
        stats.total_wagered = stats
            .total_wagered
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&stats_key, &stats);

        let total_bets: u64 = env
            .storage()
            .persistent()
            .get::<_, u64>(&DataKey::TotalBets)
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&DataKey::TotalBets, &total_bets);

        let total_volume: i128 = env
            .storage()
            .persistent()
            .get::<_, i128>(&DataKey::TotalVolume)
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&DataKey::TotalVolume, &total_volume);

        Ok(())
    }

    fn _record_settlement(
        env: &Env,
        user: &Address,
        won: bool,
        payout: i128,
    ) -> Result<(), ContractError> {
        if !won {
            return Ok(());
        }

        let stats_key = DataKey::UserStats(user.clone());
        let mut stats: UserStats =
            env.storage().persistent().get(&stats_key).unwrap_or(UserStats {
                total_bets: 0,
                total_wagered: 0,
                total_won: 0,
                win_count: 0,
            });
        stats.total_won = stats
            .total_won
            .checked_add(payout)
            .ok_or(ContractError::Overflow)?;
        stats.win_count = stats.win_count.checked_add(1).ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&stats_key, &stats);

        Ok(())
    }
}
