//! # Synthetic Asset Issuance Engine
//!
//! An over-collateralized issuance engine: users lock collateral tokens and
//! mint a USD-pegged synthetic token against them, subject to a 200% minimum
//! collateralization enforced as a health-factor invariant on every
//! state-changing operation. Positions whose health factor falls below the
//! minimum can be liquidated by anyone for a 10% collateral bonus.
//!
//! Collateral assets, their price feeds, and the synthetic debt token are
//! fixed at initialization. Every operation is atomic: an error anywhere,
//! including a failed token transfer, discards the whole invocation.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod errors;
mod health;
mod ledger;
mod liquidate;
mod oracle;
mod position;
mod registry;
mod reentrancy;
mod token;
mod views;

use errors::EngineError;
use views::AccountSummary;

#[cfg(test)]
mod testutils;




#[cfg(test)]
mod withdraw_test;






#[cfg(test)]
mod reentrancy_test;

#[contract]
pub struct SynthEngine;

#[contractimpl]
impl SynthEngine {
    /// Initialize the engine with its accepted collateral assets, their
    /// price feeds, and the synthetic debt token.
    ///
    /// `assets` and `oracles` are matched positionally. The registry is
    /// immutable afterward; there is no way to list or delist assets later.
    ///
    /// # Arguments
    /// * `assets` - Accepted collateral token contracts
    /// * `oracles` - Price feed contract per asset, same order
    /// * `debt_token` - The synthetic token contract the engine administers
    ///
    /// # Errors
    /// - `AlreadyInitialized` - the engine is already set up
    /// - `CountMismatch` - the two lists differ in length
    pub fn initialize(
        env: Env,
        assets: Vec<Address>,
        oracles: Vec<Address>,
        debt_token: Address,
    ) -> Result<(), EngineError> {
        registry::initialize(&env, assets, oracles, debt_token)
    }

    /// Deposit collateral into the engine.
    ///
    /// Pulls `amount` of `asset` from the user's wallet into the engine and
    /// credits their internal balance.
    ///
    /// # Returns
    /// The user's new collateral balance for `asset`.
    ///
    /// # Errors
    /// - `AmountNotPositive` - amount is zero or negative
    /// - `AssetNotAccepted` - asset is not registered
    /// - `TransferFailed` - the wallet pull failed
    pub fn deposit_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, EngineError> {
        position::deposit(&env, user, asset, amount)
    }

    /// Withdraw collateral from the engine back to the user's wallet.
    ///
    /// Fails if the remaining position would no longer cover the user's
    /// outstanding debt; zero-debt users can withdraw freely.
    ///
    /// # Returns
    /// The user's remaining collateral balance for `asset`.
    ///
    /// # Errors
    /// - `AmountNotPositive` - amount is zero or negative
    /// - `InsufficientBalance` - amount exceeds the held balance
    /// - `HealthFactorBroken` - remaining collateral no longer covers the debt
    pub fn withdraw_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, EngineError> {
        position::withdraw(&env, user, asset, amount)
    }

    /// Mint synthetic tokens against deposited collateral.
    ///
    /// The solvency invariant is evaluated on the increased debt before any
    /// tokens are minted.
    ///
    /// # Returns
    /// The user's total outstanding debt after the mint.
    ///
    /// # Errors
    /// - `AmountNotPositive` - amount is zero or negative
    /// - `HealthFactorBroken` - collateral does not cover the increased debt
    pub fn mint_synthetic(env: Env, user: Address, amount: i128) -> Result<i128, EngineError> {
        position::mint(&env, user, amount)
    }

    /// Burn synthetic tokens to pay down the caller's own debt.
    ///
    /// # Returns
    /// The user's remaining outstanding debt.
    ///
    /// # Errors
    /// - `AmountNotPositive` - amount is zero or negative
    /// - `DebtUnderflow` - amount exceeds the outstanding debt
    pub fn burn_synthetic(env: Env, user: Address, amount: i128) -> Result<i128, EngineError> {
        position::burn(&env, user, amount)
    }

    /// Deposit collateral and mint synthetic debt in one atomic call.
    ///
    /// If the mint leg fails the deposit leg is discarded with it.
    pub fn deposit_and_mint(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), EngineError> {
        position::deposit_and_mint(&env, user, asset, collateral_amount, debt_amount)
    }

    /// Burn synthetic debt and withdraw collateral in one atomic call.
    ///
    /// The burn runs first so the withdrawal's solvency check sees the
    /// reduced debt.
    pub fn burn_and_redeem(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        burn_amount: i128,
    ) -> Result<(), EngineError> {
        position::burn_and_redeem(&env, user, asset, collateral_amount, burn_amount)
    }

    /// Liquidate an under-collateralized position.
    ///
    /// Permissionless: any caller may liquidate any position whose health
    /// factor is below the minimum. The liquidator pays `debt_to_cover` of
    /// the debtor's synthetic debt and receives the equivalent collateral in
    /// `asset` plus a 10% bonus, seized from the debtor's balance.
    ///
    /// # Returns
    /// `(debt_covered, collateral_seized)`.
    ///
    /// # Errors
    /// - `AmountNotPositive` - `debt_to_cover` is zero or negative
    /// - `AssetNotAccepted` - `asset` is not registered
    /// - `UndefinedHealthFactor` - the debtor has no debt
    /// - `HealthFactorNotBroken` - the debtor's position is healthy
    /// - `InsufficientBalance` - the seizure exceeds the debtor's collateral
    /// - `HealthFactorNotImproved` - the debtor ended no better off
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        debtor: Address,
        asset: Address,
        debt_to_cover: i128,
    ) -> Result<(i128, i128), EngineError> {
        liquidate::liquidate(&env, liquidator, debtor, asset, debt_to_cover)
    }

    /// Collateral of `asset` the user holds inside the engine.
    pub fn collateral_balance(env: Env, user: Address, asset: Address) -> i128 {
        views::collateral_balance(&env, &user, &asset)
    }

    /// The user's outstanding debt and total collateral value at current
    /// prices.
    pub fn account_summary(env: Env, user: Address) -> Result<AccountSummary, EngineError> {
        views::account_summary(&env, &user)
    }

    /// The user's current health factor, scaled so 1e18 is the minimum
    /// healthy value.
    ///
    /// # Errors
    /// - `UndefinedHealthFactor` - the user has no outstanding debt
    pub fn health_factor(env: Env, user: Address) -> Result<i128, EngineError> {
        views::health_factor(&env, &user)
    }

    /// Accepted collateral assets in registration order.
    pub fn list_assets(env: Env) -> Vec<Address> {
        views::list_assets(&env)
    }

    /// Price feed registered for `asset`.
    pub fn oracle_for(env: Env, asset: Address) -> Result<Address, EngineError> {
        registry::oracle_for(&env, &asset)
    }

    /// The synthetic debt-token contract.
    pub fn debt_token(env: Env) -> Result<Address, EngineError> {
        registry::debt_token(&env)
    }
}
