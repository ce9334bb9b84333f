//! # Price Oracle Port
//!
//! Cross-contract price lookup and fixed-point normalization. Feeds report a
//! USD price at their own native precision; everything downstream of this
//! module works in the engine's 18-decimal scale. A report must be fresh
//! (`MAX_PRICE_AGE_SECONDS`) and strictly positive to be used.

use core::cmp::Ordering;

use soroban_sdk::{contracttype, Address, Env, IntoVal, Symbol, Val, Vec, I256};

use crate::errors::EngineError;
use crate::registry;

/// Engine fixed-point scale: 1e18 represents 1.0 for prices, USD values, and
/// the health factor.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Maximum accepted age of a price report, in ledger seconds.
pub const MAX_PRICE_AGE_SECONDS: u64 = 3600;

/// Price report returned by a feed's `latest_price(asset)` function.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceData {
    /// USD price of one whole asset unit, scaled by `10^decimals`
    pub price: i128,
    /// The feed's native decimal precision
    pub decimals: u32,
    /// Ledger time the price was last updated
    pub timestamp: u64,
}

/// Current USD price for `asset`, normalized to `PRECISION`.
///
/// # Errors
/// - `AssetNotAccepted` - no feed registered for the asset
/// - `PriceUnavailable` - the feed call failed or reported a price <= 0
/// - `StalePrice` - the report is older than `MAX_PRICE_AGE_SECONDS`
pub fn normalized_price(env: &Env, asset: &Address) -> Result<i128, EngineError> {
    let feed = registry::oracle_for(env, asset)?;
    let data = latest_price(env, &feed, asset)?;

    if data.price <= 0 {
        return Err(EngineError::PriceUnavailable);
    }
    let now = env.ledger().timestamp();
    if now.saturating_sub(data.timestamp) > MAX_PRICE_AGE_SECONDS {
        return Err(EngineError::StalePrice);
    }

    normalize(data.price, data.decimals)
}

/// USD value of `amount` of `asset`, 18-decimal fixed point.
pub fn usd_value(env: &Env, asset: &Address, amount: i128) -> Result<i128, EngineError> {
    let price = normalized_price(env, asset)?;
    mul_div(env, price, amount, PRECISION)
}

/// Units of `asset` worth `usd` at the current price.
pub fn token_amount_for_usd(env: &Env, asset: &Address, usd: i128) -> Result<i128, EngineError> {
    let price = normalized_price(env, asset)?;
    mul_div(env, usd, PRECISION, price)
}

/// `a * b / denom` at full 256-bit precision.
///
/// Multiplication always precedes division so small values are not truncated
/// to zero, and the widened intermediate cannot overflow for any pair of
/// i128 operands.
pub fn mul_div(env: &Env, a: i128, b: i128, denom: i128) -> Result<i128, EngineError> {
    if denom == 0 {
        return Err(EngineError::Overflow);
    }
    let product = I256::from_i128(env, a).mul(&I256::from_i128(env, b));
    product
        .div(&I256::from_i128(env, denom))
        .to_i128()
        .ok_or(EngineError::Overflow)
}

fn latest_price(env: &Env, feed: &Address, asset: &Address) -> Result<PriceData, EngineError> {
    let args: Vec<Val> = (asset.clone(),).into_val(env);
    match env.try_invoke_contract::<PriceData, soroban_sdk::Error>(
        feed,
        &Symbol::new(env, "latest_price"),
        args,
    ) {
        Ok(Ok(data)) => Ok(data),
        _ => Err(EngineError::PriceUnavailable),
    }
}

/// Rescale a feed-native price to the engine's 18-decimal fixed point.
pub(crate) fn normalize(price: i128, decimals: u32) -> Result<i128, EngineError> {
    match decimals.cmp(&18) {
        Ordering::Equal => Ok(price),
        Ordering::Less => {
            let factor = 10i128
                .checked_pow(18 - decimals)
                .ok_or(EngineError::Overflow)?;
            price.checked_mul(factor).ok_or(EngineError::Overflow)
        }
        Ordering::Greater => {
            let factor = 10i128
                .checked_pow(decimals - 18)
                .ok_or(EngineError::Overflow)?;
            price.checked_div(factor).ok_or(EngineError::Overflow)
        }
    }
}
