//! # Health Factor Engine
//!
//! Pure solvency computation over the ledgers and the oracle port. Nothing in
//! this module writes storage; the health factor is recomputed from live data
//! on every check.
//!
//! The global invariant: for every user with non-zero debt,
//! `collateral_value * LIQUIDATION_THRESHOLD / 100 * PRECISION / debt`
//! must be at least `PRECISION`.

use soroban_sdk::{Address, Env};

use crate::errors::EngineError;
use crate::ledger;
use crate::oracle::{self, PRECISION};
use crate::registry;

/// Percent of raw collateral value counted toward solvency. 50 enforces a
/// 200% minimum collateral-to-debt ratio.
pub const LIQUIDATION_THRESHOLD: i128 = 50;

/// Total USD value of the user's collateral, summed over the accepted assets
/// in registration order.
pub fn total_collateral_value(env: &Env, user: &Address) -> Result<i128, EngineError> {
    let mut total: i128 = 0;
    for asset in registry::accepted_assets(env).iter() {
        let balance = ledger::collateral_of(env, user, &asset);
        if balance == 0 {
            continue;
        }
        let value = oracle::usd_value(env, &asset, balance)?;
        total = total.checked_add(value).ok_or(EngineError::Overflow)?;
    }
    Ok(total)
}

/// The user's solvency ratio, scaled so `PRECISION` is the minimum healthy
/// value.
///
/// A user with zero debt has no ratio to compute; callers that need a
/// mint-eligibility answer must apply the tentative debt increase first.
///
/// # Errors
/// - `UndefinedHealthFactor` - the user has no outstanding debt
pub fn health_factor(env: &Env, user: &Address) -> Result<i128, EngineError> {
    let debt = ledger::debt_of(env, user);
    if debt == 0 {
        return Err(EngineError::UndefinedHealthFactor);
    }

    let collateral_value = total_collateral_value(env, user)?;
    let adjusted = collateral_value
        .checked_mul(LIQUIDATION_THRESHOLD)
        .ok_or(EngineError::Overflow)?
        .checked_div(100)
        .ok_or(EngineError::Overflow)?;

    oracle::mul_div(env, adjusted, PRECISION, debt)
}

/// Enforce the solvency invariant for `user`.
///
/// Zero-debt users always pass: the invariant only binds positions with
/// outstanding debt. The boundary is inclusive; a health factor of exactly
/// `PRECISION` is healthy.
pub fn require_healthy(env: &Env, user: &Address) -> Result<(), EngineError> {
    if ledger::debt_of(env, user) == 0 {
        return Ok(());
    }
    if health_factor(env, user)? < PRECISION {
        return Err(EngineError::HealthFactorBroken);
    }
    Ok(())
}
