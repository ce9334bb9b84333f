//! # Views
//!
//! Read-only balances, account summaries, and the health factor for
//! frontends and liquidation bots. Nothing here writes storage; values are
//! recomputed from the ledgers and live oracle prices on every call.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::EngineError;
use crate::health;
use crate::ledger;
use crate::registry;

/// Snapshot of one user's position.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSummary {
    /// Outstanding synthetic debt, 18-decimal units
    pub debt: i128,
    /// Total collateral value in USD, 18-decimal fixed point
    pub collateral_value: i128,
}

/// Collateral of `asset` the user holds inside the engine.
pub fn collateral_balance(env: &Env, user: &Address, asset: &Address) -> i128 {
    ledger::collateral_of(env, user, asset)
}

/// The user's debt and total collateral value at current prices.
pub fn account_summary(env: &Env, user: &Address) -> Result<AccountSummary, EngineError> {
    Ok(AccountSummary {
        debt: ledger::debt_of(env, user),
        collateral_value: health::total_collateral_value(env, user)?,
    })
}

/// The user's current health factor; see `health::health_factor`.
pub fn health_factor(env: &Env, user: &Address) -> Result<i128, EngineError> {
    health::health_factor(env, user)
}

/// Accepted collateral assets in registration order.
pub fn list_assets(env: &Env) -> Vec<Address> {
    registry::accepted_assets(env)
}
