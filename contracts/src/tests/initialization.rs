//! Tests for contract initialization and the pristine-state reads.

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::contract::{BetLogicContract, BetLogicContractClient, PREDICTION_RISE};
use crate::errors::ContractError;
use crate::types::ConfigKey;

use super::{setup, ENTRY_PRICE, MIN_BET, MIN_DURATION};

#[test]
fn test_initialize() {
    let (env, contract_id, admin, oracle, _user, _token) = setup();
    let client = BetLogicContractClient::new(&env, &contract_id);

    assert_eq!(client.get_admin(), Some(admin));
    assert_eq!(client.get_oracle(), Some(oracle));

    let stats = client.get_contract_stats();
    assert_eq!(stats.total_bets, 0);
    assert_eq!(stats.total_volume, 0);
    assert_eq!(stats.house_balance, 0);
    assert_eq!(stats.reserved_exposure, 0);
    assert_eq!(stats.contract_paused, false);
    assert_eq!(stats.current_bet_id, 1);
}

#[test]
fn test_initialize_twice_fails() {
    let (env, contract_id, admin, oracle, _user, token) = setup();
    let client = BetLogicContractClient::new(&env, &contract_id);

    let result = client.try_initialize(&admin, &oracle, &token);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_operations_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(BetLogicContract, ());
    let client = BetLogicContractClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    let result = client.try_place_bet(&caller, &MIN_BET, &PREDICTION_RISE, &MIN_DURATION, &ENTRY_PRICE);
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));

    let result = client.try_update_price(&caller, &ENTRY_PRICE, &0);
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));

    let result = client.try_set_config(&caller, &ConfigKey::MinBetAmount, &1);
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));

    let result = client.try_fund_house_balance(&caller, &100);
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));

    let result = client.try_batch_resolve_bet(&caller, &1, &ENTRY_PRICE);
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_reads_return_absent_for_unknown_keys() {
    let (env, contract_id, _admin, _oracle, user, _token) = setup();
    let client = BetLogicContractClient::new(&env, &contract_id);

    assert_eq!(client.get_bet_info(&999), None);
    assert_eq!(client.get_user_stats(&user), None);
    assert_eq!(client.get_daily_pool(&0), None);
    assert_eq!(client.get_latest_price_info(), None);
    assert_eq!(client.get_config(&ConfigKey::MaxBetAmount), None);
    assert_eq!(client.get_user_active_bet_status(&user, &1), false);
    assert_eq!(client.can_bet_be_resolved(&1), false);
}

#[test]
fn test_contract_balance_starts_empty() {
    let (env, contract_id, _admin, _oracle, _user, _token) = setup();
    let client = BetLogicContractClient::new(&env, &contract_id);

    assert_eq!(client.get_contract_balance(), 0);
}
