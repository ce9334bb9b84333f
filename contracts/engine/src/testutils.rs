//! Shared test setup: the engine with one collateral asset, the synthetic
//! debt token (engine as admin), and a settable mock price feed.

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, token, vec, Address, Env};

use crate::oracle::PriceData;
use crate::{SynthEngine, SynthEngineClient};

/// One whole token unit in the engine's 18-decimal fixed point.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// $1 at the mock feed's default 8-decimal precision.
pub const FEED_UNIT: i128 = 100_000_000;

#[contracttype]
#[derive(Clone)]
pub enum FeedDataKey {
    Entry(Address),
}

/// Mock price feed: per-asset price and decimals, stamped with the ledger
/// time at which they were set.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn set_price(env: Env, asset: Address, price: i128, decimals: u32) {
        let data = PriceData {
            price,
            decimals,
            timestamp: env.ledger().timestamp(),
        };
        env.storage()
            .persistent()
            .set(&FeedDataKey::Entry(asset), &data);
    }

    pub fn latest_price(env: Env, asset: Address) -> PriceData {
        env.storage()
            .persistent()
            .get(&FeedDataKey::Entry(asset))
            .unwrap()
    }
}

/// Register and initialize the engine with one collateral asset priced at
/// $1000 (8 feed decimals).
///
/// Returns `(client, engine, collateral, debt_token, feed)`.
pub fn setup(env: &Env) -> (SynthEngineClient<'_>, Address, Address, Address, Address) {
    let engine_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(env, &engine_id);

    let token_admin = Address::generate(env);
    let collateral = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let debt_token = env
        .register_stellar_asset_contract_v2(engine_id.clone())
        .address();

    let feed = env.register(MockPriceFeed, ());
    set_price(env, &feed, &collateral, 1000 * FEED_UNIT, 8);

    client.initialize(
        &vec![env, collateral.clone()],
        &vec![env, feed.clone()],
        &debt_token,
    );

    (client, engine_id, collateral, debt_token, feed)
}

/// Mint collateral into a user's wallet.
pub fn fund_collateral(env: &Env, asset: &Address, user: &Address, amount: i128) {
    token::StellarAssetClient::new(env, asset).mint(user, &amount);
}

pub fn set_price(env: &Env, feed: &Address, asset: &Address, price: i128, decimals: u32) {
    MockPriceFeedClient::new(env, feed).set_price(asset, &price, &decimals);
}

pub fn token_balance(env: &Env, asset: &Address, who: &Address) -> i128 {
    token::Client::new(env, asset).balance(who)
}
