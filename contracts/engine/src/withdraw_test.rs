use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::errors::EngineError;
use crate::testutils::{fund_collateral, setup, token_balance, UNIT};

#[test]
fn test_deposit_withdraw_round_trip() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, engine, collateral, _debt_token, _feed) = setup(&env);
    let user = Address::generate(&env);
    fund_collateral(&env, &collateral, &user, 10 * UNIT);

    client.deposit_collateral(&user, &collateral, &(4 * UNIT));
    let remaining = client.withdraw_collateral(&user, &collateral, &(4 * UNIT));

    assert_eq!(remaining, 0);
    assert_eq!(client.collateral_balance(&user, &collateral), 0);
    assert_eq!(token_balance(&env, &collateral, &user), 10 * UNIT);
    assert_eq!(token_balance(&env, &collateral, &engine), 0);
}

#[test]
fn test_withdraw_partial_with_healthy_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _engine, collateral, _debt_token, _feed) = setup(&env);
    let user = Address::generate(&env);
    fund_collateral(&env, &collateral, &user, 10 * UNIT);
    client.deposit_collateral(&user, &collateral, &(10 * UNIT));
    client.mint_synthetic(&user, &(2000 * UNIT));

    // 5 units left at $1000 = $5,000; covers 2,000 of debt at the 50% threshold
    let remaining = client.withdraw_collateral(&user, &collateral, &(5 * UNIT));
    assert_eq!(remaining, 5 * UNIT);
    assert_eq!(token_balance(&env, &collateral, &user), 5 * UNIT);
}

#[test]
fn test_withdraw_breaking_health_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _engine, collateral, _debt_token, _feed) = setup(&env);
    let user = Address::generate(&env);
    fund_collateral(&env, &collateral, &user, 10 * UNIT);
    client.deposit_collateral(&user, &collateral, &(10 * UNIT));
    client.mint_synthetic(&user, &(5000 * UNIT));

    // The position sits exactly at the boundary; removing any collateral
    // breaks it, and the debit is rolled back
    let result = client.try_withdraw_collateral(&user, &collateral, &UNIT);
    assert_eq!(result, Err(Ok(EngineError::HealthFactorBroken)));
    assert_eq!(client.collateral_balance(&user, &collateral), 10 * UNIT);
    assert_eq!(token_balance(&env, &collateral, &user), 0);
}

#[test]
fn test_withdraw_more_than_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _engine, collateral, _debt_token, _feed) = setup(&env);
    let user = Address::generate(&env);
    fund_collateral(&env, &collateral, &user, 10 * UNIT);
    client.deposit_collateral(&user, &collateral, &(4 * UNIT));

    let result = client.try_withdraw_collateral(&user, &collateral, &(5 * UNIT));
    assert_eq!(result, Err(Ok(EngineError::InsufficientBalance)));
    assert_eq!(client.collateral_balance(&user, &collateral), 4 * UNIT);
}

#[test]
fn test_withdraw_zero_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _engine, collateral, _debt_token, _feed) = setup(&env);
    let user = Address::generate(&env);

    let result = client.try_withdraw_collateral(&user, &collateral, &0);
    assert_eq!(result, Err(Ok(EngineError::AmountNotPositive)));
}

#[test]
fn test_withdraw_unconstrained_without_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _engine, collateral, _debt_token, _feed) = setup(&env);
    let user = Address::generate(&env);
    fund_collateral(&env, &collateral, &user, 10 * UNIT);
    client.deposit_collateral(&user, &collateral, &(10 * UNIT));

    // No debt: no solvency ratio to violate, the whole balance is free
    let remaining = client.withdraw_collateral(&user, &collateral, &(10 * UNIT));
    assert_eq!(remaining, 0);
    assert_eq!(token_balance(&env, &collateral, &user), 10 * UNIT);
}
