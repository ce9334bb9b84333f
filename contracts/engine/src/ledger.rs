//! # Collateral and Debt Ledgers
//!
//! Per-user balances held inside the engine: collateral per asset and
//! outstanding synthetic debt. Both are non-negative integers; every mutation
//! goes through a checked helper that fails with a typed error instead of
//! wrapping. No oracle or token movement happens here.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::EngineError;

/// Storage keys for ledger data
#[contracttype]
#[derive(Clone)]
pub enum LedgerDataKey {
    /// Collateral held inside the engine: (user, asset) -> amount
    Collateral(Address, Address),
    /// Outstanding synthetic debt per user
    Debt(Address),
}

pub fn collateral_of(env: &Env, user: &Address, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&LedgerDataKey::Collateral(user.clone(), asset.clone()))
        .unwrap_or(0)
}

/// Credit `amount` of `asset` to the user's collateral balance.
pub fn add_collateral(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    let balance = collateral_of(env, user, asset)
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;
    set_collateral(env, user, asset, balance);
    Ok(balance)
}

/// Debit `amount` of `asset` from the user's collateral balance.
///
/// The balance never goes negative: a debit larger than the balance fails
/// with `InsufficientBalance` before any write.
pub fn sub_collateral(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    let held = collateral_of(env, user, asset);
    if amount > held {
        return Err(EngineError::InsufficientBalance);
    }
    let balance = held - amount;
    set_collateral(env, user, asset, balance);
    Ok(balance)
}

pub fn debt_of(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&LedgerDataKey::Debt(user.clone()))
        .unwrap_or(0)
}

/// Record `amount` of newly minted synthetic debt against the user.
pub fn add_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, EngineError> {
    let debt = debt_of(env, user)
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;
    set_debt(env, user, debt);
    Ok(debt)
}

/// Reduce the user's outstanding debt.
///
/// Paying down more than is owed is a caller bug; it fails with
/// `DebtUnderflow` rather than wrapping or saturating.
pub fn sub_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, EngineError> {
    let owed = debt_of(env, user);
    if amount > owed {
        return Err(EngineError::DebtUnderflow);
    }
    let debt = owed - amount;
    set_debt(env, user, debt);
    Ok(debt)
}

fn set_collateral(env: &Env, user: &Address, asset: &Address, amount: i128) {
    env.storage().persistent().set(
        &LedgerDataKey::Collateral(user.clone(), asset.clone()),
        &amount,
    );
}

fn set_debt(env: &Env, user: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&LedgerDataKey::Debt(user.clone()), &amount);
}
