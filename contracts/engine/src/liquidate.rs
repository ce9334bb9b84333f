//! # Liquidation Engine
//!
//! Forced settlement of under-collateralized positions. Any caller may
//! liquidate any position whose health factor is below the minimum; the
//! caller pays down part of the debt in synthetic tokens and receives the
//! equivalent collateral plus a bonus, seized from the debtor's balance.
//!
//! ## Invariants
//! - Only positions below the solvency minimum can be liquidated.
//! - A completed liquidation strictly improves the debtor's health factor.
//! - The liquidator's own position must still satisfy the solvency invariant
//!   after the call.
//! - Any failure at any phase discards the whole operation.

use soroban_sdk::{contractevent, Address, Env};

use crate::errors::EngineError;
use crate::health;
use crate::ledger;
use crate::oracle::{self, PRECISION};
use crate::position;
use crate::reentrancy::ReentrancyGuard;
use crate::registry;
use crate::token;

/// Percent bonus on seized collateral paid to the liquidator.
pub const LIQUIDATION_BONUS: i128 = 10;

/// Event data emitted on each completed liquidation
#[contractevent]
#[derive(Clone, Debug)]
pub struct LiquidationEvent {
    pub liquidator: Address,
    pub debtor: Address,
    pub asset: Address,
    pub debt_covered: i128,
    pub collateral_seized: i128,
    pub timestamp: u64,
}

/// Liquidate an under-collateralized position.
///
/// `debt_to_cover` is the USD-pegged amount of the debtor's synthetic debt
/// the liquidator pays down. The seizure is sized in units of `asset` at the
/// current oracle price, plus `LIQUIDATION_BONUS` percent, and pushed to the
/// liquidator's wallet. The debtor's withdraw-time solvency check is
/// bypassed; the transfer is involuntary.
///
/// # Returns
/// `(debt_covered, collateral_seized)`.
///
/// # Errors
/// - `AmountNotPositive` - `debt_to_cover` is zero or negative
/// - `AssetNotAccepted` - `asset` is not registered
/// - `UndefinedHealthFactor` - the debtor has no debt to liquidate
/// - `HealthFactorNotBroken` - the debtor's position is healthy
/// - `InsufficientBalance` - the seizure exceeds the debtor's collateral
/// - `HealthFactorNotImproved` - the liquidation left the debtor no better off
/// - `HealthFactorBroken` - the liquidator's own position ended unhealthy
/// - `TransferFailed` - a token movement failed
pub fn liquidate(
    env: &Env,
    liquidator: Address,
    debtor: Address,
    asset: Address,
    debt_to_cover: i128,
) -> Result<(i128, i128), EngineError> {
    liquidator.require_auth();
    registry::require_initialized(env)?;
    let _guard = ReentrancyGuard::new(env)?;

    if debt_to_cover <= 0 {
        return Err(EngineError::AmountNotPositive);
    }
    if !registry::is_accepted(env, &asset) {
        return Err(EngineError::AssetNotAccepted);
    }

    let health_before = health::health_factor(env, &debtor)?;
    if health_before >= PRECISION {
        return Err(EngineError::HealthFactorNotBroken);
    }

    // Size the seizure: the covered debt converted into collateral units at
    // the current price, plus the bonus. Multiplication precedes division so
    // a single-digit bonus percentage does not truncate to zero.
    let token_amount = oracle::token_amount_for_usd(env, &asset, debt_to_cover)?;
    let bonus = token_amount
        .checked_mul(LIQUIDATION_BONUS)
        .ok_or(EngineError::Overflow)?
        .checked_div(100)
        .ok_or(EngineError::Overflow)?;
    let collateral_seized = token_amount
        .checked_add(bonus)
        .ok_or(EngineError::Overflow)?;

    ledger::sub_collateral(env, &debtor, &asset, collateral_seized)?;
    token::push_collateral(env, &asset, &liquidator, collateral_seized)?;

    position::burn_inner(env, &debtor, &liquidator, debt_to_cover)?;

    // A liquidation must leave the debtor strictly better off. A fully
    // cleared debt satisfies that trivially.
    if ledger::debt_of(env, &debtor) > 0 {
        let health_after = health::health_factor(env, &debtor)?;
        if health_after <= health_before {
            return Err(EngineError::HealthFactorNotImproved);
        }
    }
    health::require_healthy(env, &liquidator)?;

    LiquidationEvent {
        liquidator: liquidator.clone(),
        debtor: debtor.clone(),
        asset: asset.clone(),
        debt_covered: debt_to_cover,
        collateral_seized,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);

    Ok((debt_to_cover, collateral_seized))
}
