//! Test modules for the bet escrow and settlement contract.

mod initialization;

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, Address, Env};

use crate::contract::{BetLogicContract, BetLogicContractClient};

pub(crate) const MIN_BET: i128 = 100_000;
pub(crate) const MAX_BET: i128 = 100_000_000_000;
pub(crate) const MIN_DURATION: u64 = 3_600;
pub(crate) const MAX_DURATION: u64 = 2_592_000;
pub(crate) const ENTRY_PRICE: u128 = 1_000_000;
pub(crate) const HOUSE_FLOAT: i128 = 1_000_000_000;
pub(crate) const USER_FUNDS: i128 = 1_000_000_000_000;

/// Registers the contract and a Stellar asset to escrow, initializes the
/// contract with fresh admin/oracle identities, and mints working balances.
/// Returns (env, contract id, admin, oracle, user, token address).
pub(crate) fn setup() -> (Env, Address, Address, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(BetLogicContract, ());
    let client = BetLogicContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let oracle = Address::generate(&env);
    let user = Address::generate(&env);

    let token = env.register_stellar_asset_contract_v2(admin.clone());
    let token_admin = token::StellarAssetClient::new(&env, &token.address());
    token_admin.mint(&user, &USER_FUNDS);
    token_admin.mint(&admin, &USER_FUNDS);

    client.initialize(&admin, &oracle, &token.address());

    (env, contract_id, admin, oracle, user, token.address())
}

/// Same as `setup`, with the house funded to accept bets
pub(crate) fn setup_funded() -> (Env, Address, Address, Address, Address, Address) {
    let (env, contract_id, admin, oracle, user, token) = setup();

    let client = BetLogicContractClient::new(&env, &contract_id);
    client.fund_house_balance(&admin, &HOUSE_FLOAT);

    (env, contract_id, admin, oracle, user, token)
}
