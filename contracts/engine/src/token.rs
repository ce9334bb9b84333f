//! # Token Transfer Port
//!
//! All actual value movement: collateral in and out of the engine, and
//! mint/burn of the synthetic debt token. Any failure in a token call maps to
//! `TransferFailed`, which aborts the enclosing operation together with every
//! ledger write it made.

use soroban_sdk::{token, Address, Env};

use crate::errors::EngineError;
use crate::registry;

/// Pull `amount` of `asset` from `from` into the engine.
pub fn pull_collateral(
    env: &Env,
    asset: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), EngineError> {
    let client = token::Client::new(env, asset);
    if !matches!(
        client.try_transfer(from, &env.current_contract_address(), &amount),
        Ok(Ok(()))
    ) {
        return Err(EngineError::TransferFailed);
    }
    Ok(())
}

/// Push `amount` of `asset` out of the engine to `to`.
pub fn push_collateral(
    env: &Env,
    asset: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), EngineError> {
    let client = token::Client::new(env, asset);
    if !matches!(
        client.try_transfer(&env.current_contract_address(), to, &amount),
        Ok(Ok(()))
    ) {
        return Err(EngineError::TransferFailed);
    }
    Ok(())
}

/// Mint `amount` of the synthetic token to `to`. The engine is the debt
/// token's admin.
pub fn mint_debt_token(env: &Env, to: &Address, amount: i128) -> Result<(), EngineError> {
    let debt_token = registry::debt_token(env)?;
    let client = token::StellarAssetClient::new(env, &debt_token);
    if !matches!(client.try_mint(to, &amount), Ok(Ok(()))) {
        return Err(EngineError::TransferFailed);
    }
    Ok(())
}

/// Pull `amount` of synthetic token from `from` into the engine and destroy
/// it, shrinking the supply by exactly `amount`.
pub fn pull_and_burn_debt_token(
    env: &Env,
    from: &Address,
    amount: i128,
) -> Result<(), EngineError> {
    let debt_token = registry::debt_token(env)?;
    let client = token::Client::new(env, &debt_token);
    let engine = env.current_contract_address();

    if !matches!(client.try_transfer(from, &engine, &amount), Ok(Ok(()))) {
        return Err(EngineError::TransferFailed);
    }
    if !matches!(client.try_burn(&engine, &amount), Ok(Ok(()))) {
        return Err(EngineError::TransferFailed);
    }
    Ok(())
}
