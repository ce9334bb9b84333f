//! # Position Manager
//!
//! The engine's control-flow core: deposit, withdraw, mint, burn, and the two
//! composite flows. Every operation runs as one guarded, all-or-nothing call:
//! ledger mutation first, then the solvency check where one is required, then
//! the external token movement, then the event. An error anywhere discards
//! the whole invocation.

use soroban_sdk::{contractevent, Address, Env};

use crate::errors::EngineError;
use crate::health;
use crate::ledger;
use crate::reentrancy::ReentrancyGuard;
use crate::registry;
use crate::token;

/// Event data emitted on each collateral deposit
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralDepositedEvent {
    pub user: Address,
    pub asset: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Event data emitted on each collateral withdrawal
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralWithdrawnEvent {
    pub user: Address,
    pub asset: Address,
    pub amount: i128,
    pub remaining_balance: i128,
    pub timestamp: u64,
}

/// Event data emitted when synthetic debt is minted
#[contractevent]
#[derive(Clone, Debug)]
pub struct SyntheticMintedEvent {
    pub user: Address,
    pub amount: i128,
    pub total_debt: i128,
    pub timestamp: u64,
}

/// Event data emitted when synthetic debt is burned
#[contractevent]
#[derive(Clone, Debug)]
pub struct SyntheticBurnedEvent {
    pub debtor: Address,
    pub payer: Address,
    pub amount: i128,
    pub remaining_debt: i128,
    pub timestamp: u64,
}

/// Deposit collateral into the engine.
///
/// Credits the user's internal balance, then pulls the tokens from their
/// wallet. A failed pull aborts the call, so the credit is never observable
/// without the tokens.
///
/// # Returns
/// The user's new collateral balance for `asset`.
///
/// # Errors
/// - `AmountNotPositive` - amount is zero or negative
/// - `AssetNotAccepted` - asset is not registered
/// - `TransferFailed` - the wallet pull failed
pub fn deposit(env: &Env, user: Address, asset: Address, amount: i128) -> Result<i128, EngineError> {
    user.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    deposit_inner(env, &user, &asset, amount)
}

/// Withdraw collateral from the engine back to the user's wallet.
///
/// The debit happens first; if the remaining position would violate the
/// solvency invariant the call fails and the debit is discarded with it.
/// Zero-debt users can withdraw freely.
///
/// # Returns
/// The user's remaining collateral balance for `asset`.
///
/// # Errors
/// - `AmountNotPositive` - amount is zero or negative
/// - `InsufficientBalance` - amount exceeds the held balance
/// - `HealthFactorBroken` - the remaining collateral no longer covers the debt
/// - `TransferFailed` - the wallet push failed
pub fn withdraw(
    env: &Env,
    user: Address,
    asset: Address,
    amount: i128,
) -> Result<i128, EngineError> {
    user.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    withdraw_inner(env, &user, &asset, amount)
}

/// Mint synthetic tokens against the user's collateral.
///
/// The debt is recorded first and the solvency invariant evaluated on the
/// increased debt; only then are tokens minted to the user's wallet.
///
/// # Returns
/// The user's total outstanding debt after the mint.
///
/// # Errors
/// - `AmountNotPositive` - amount is zero or negative
/// - `HealthFactorBroken` - collateral does not cover the increased debt
/// - `TransferFailed` - the token mint failed
pub fn mint(env: &Env, user: Address, amount: i128) -> Result<i128, EngineError> {
    user.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    mint_inner(env, &user, amount)
}

/// Burn synthetic tokens to pay down the caller's own debt.
///
/// # Returns
/// The user's remaining outstanding debt.
///
/// # Errors
/// - `AmountNotPositive` - amount is zero or negative
/// - `DebtUnderflow` - amount exceeds the outstanding debt
/// - `TransferFailed` - pulling or burning the tokens failed
pub fn burn(env: &Env, user: Address, amount: i128) -> Result<i128, EngineError> {
    user.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    burn_inner(env, &user, &user, amount)
}

/// Deposit collateral and mint synthetic debt in one atomic call.
///
/// If the mint leg fails, the deposit leg is discarded with it.
pub fn deposit_and_mint(
    env: &Env,
    user: Address,
    asset: Address,
    collateral_amount: i128,
    debt_amount: i128,
) -> Result<(), EngineError> {
    user.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    deposit_inner(env, &user, &asset, collateral_amount)?;
    mint_inner(env, &user, debt_amount)?;
    Ok(())
}

/// Burn synthetic debt and withdraw collateral in one atomic call.
///
/// The burn runs first so the withdraw-time solvency check sees the reduced
/// debt.
pub fn burn_and_redeem(
    env: &Env,
    user: Address,
    asset: Address,
    collateral_amount: i128,
    burn_amount: i128,
) -> Result<(), EngineError> {
    user.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    burn_inner(env, &user, &user, burn_amount)?;
    withdraw_inner(env, &user, &asset, collateral_amount)?;
    Ok(())
}

pub(crate) fn deposit_inner(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    if amount <= 0 {
        return Err(EngineError::AmountNotPositive);
    }
    if !registry::is_accepted(env, asset) {
        return Err(EngineError::AssetNotAccepted);
    }

    let new_balance = ledger::add_collateral(env, user, asset, amount)?;
    token::pull_collateral(env, asset, user, amount)?;

    CollateralDepositedEvent {
        user: user.clone(),
        asset: asset.clone(),
        amount,
        new_balance,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);

    Ok(new_balance)
}

pub(crate) fn withdraw_inner(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    if amount <= 0 {
        return Err(EngineError::AmountNotPositive);
    }

    let remaining_balance = ledger::sub_collateral(env, user, asset, amount)?;
    health::require_healthy(env, user)?;
    token::push_collateral(env, asset, user, amount)?;

    CollateralWithdrawnEvent {
        user: user.clone(),
        asset: asset.clone(),
        amount,
        remaining_balance,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);

    Ok(remaining_balance)
}

pub(crate) fn mint_inner(env: &Env, user: &Address, amount: i128) -> Result<i128, EngineError> {
    if amount <= 0 {
        return Err(EngineError::AmountNotPositive);
    }

    let total_debt = ledger::add_debt(env, user, amount)?;
    health::require_healthy(env, user)?;
    token::mint_debt_token(env, user, amount)?;

    SyntheticMintedEvent {
        user: user.clone(),
        amount,
        total_debt,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);

    Ok(total_debt)
}

/// `debtor` and `payer` differ during liquidation, where the liquidator pays
/// off another user's debt.
pub(crate) fn burn_inner(
    env: &Env,
    debtor: &Address,
    payer: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    if amount <= 0 {
        return Err(EngineError::AmountNotPositive);
    }

    let remaining_debt = ledger::sub_debt(env, debtor, amount)?;
    token::pull_and_burn_debt_token(env, payer, amount)?;

    SyntheticBurnedEvent {
        debtor: debtor.clone(),
        payer: payer.clone(),
        amount,
        remaining_debt,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);

    Ok(remaining_debt)
}
