//! # Asset Registry
//!
//! Initialization-time mapping from accepted collateral assets to their price
//! feeds, plus the synthetic debt-token reference. The registry is written
//! exactly once; there is no way to list, delist, or re-point an asset after
//! `initialize`.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::EngineError;

/// Storage keys for registry data
#[contracttype]
#[derive(Clone)]
pub enum RegistryDataKey {
    /// Ordered list of accepted collateral assets
    Assets,
    /// Price feed contract for an accepted asset
    Oracle(Address),
    /// The synthetic debt-token contract; presence marks the engine initialized
    DebtToken,
}

/// Register the accepted collateral assets with their price feeds and the
/// synthetic debt token.
///
/// `assets` and `oracles` are matched positionally and must have equal
/// length.
///
/// # Errors
/// - `AlreadyInitialized` - the registry has already been populated
/// - `CountMismatch` - list lengths differ
pub fn initialize(
    env: &Env,
    assets: Vec<Address>,
    oracles: Vec<Address>,
    debt_token: Address,
) -> Result<(), EngineError> {
    if env.storage().persistent().has(&RegistryDataKey::DebtToken) {
        return Err(EngineError::AlreadyInitialized);
    }
    if assets.len() != oracles.len() {
        return Err(EngineError::CountMismatch);
    }

    for (asset, oracle) in assets.iter().zip(oracles.iter()) {
        env.storage()
            .persistent()
            .set(&RegistryDataKey::Oracle(asset), &oracle);
    }
    env.storage()
        .persistent()
        .set(&RegistryDataKey::Assets, &assets);
    env.storage()
        .persistent()
        .set(&RegistryDataKey::DebtToken, &debt_token);

    Ok(())
}

/// Fail with `NotInitialized` until `initialize` has run.
pub fn require_initialized(env: &Env) -> Result<(), EngineError> {
    if !env.storage().persistent().has(&RegistryDataKey::DebtToken) {
        return Err(EngineError::NotInitialized);
    }
    Ok(())
}

/// Accepted collateral assets in registration order.
pub fn accepted_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::Assets)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn is_accepted(env: &Env, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&RegistryDataKey::Oracle(asset.clone()))
}

/// Price feed registered for `asset`.
pub fn oracle_for(env: &Env, asset: &Address) -> Result<Address, EngineError> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::Oracle(asset.clone()))
        .ok_or(EngineError::AssetNotAccepted)
}

/// The synthetic debt-token contract.
pub fn debt_token(env: &Env) -> Result<Address, EngineError> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::DebtToken)
        .ok_or(EngineError::NotInitialized)
}
