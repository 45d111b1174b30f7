/// Liquidity operations for the constant-product exchange
///
/// This module provides the pure calculations behind adding and removing
/// liquidity: the matching-deposit ratio and the proportional withdrawal
/// amounts. Both are advisory; the remote exchange contract recomputes and
/// enforces the same formulas on submission.
use crate::errors::ExchangeError;
use crate::state::{WithdrawalAmounts, U256};
use crate::utils::mul_div_floor;

/// Calculate the token deposit that preserves the pool ratio for a given
/// native-currency deposit
///
/// # Arguments
/// * `deposit_native` - Amount of native currency being deposited, base units
/// * `native_reserve` - Current native-currency reserve of the pool
/// * `token_reserve` - Current token reserve of the pool
///
/// # Returns
/// `floor(deposit_native * token_reserve / native_reserve)`
///
/// # Errors
/// `DivisionByZero` when `native_reserve` is zero. An empty pool has no
/// ratio to preserve; the caller routes that case through the
/// initial-liquidity path where both amounts are free.
pub fn matching_token_deposit(
    deposit_native: U256,
    native_reserve: U256,
    token_reserve: U256,
) -> Result<U256, ExchangeError> {
    mul_div_floor(deposit_native, token_reserve, native_reserve)
}

/// Calculate the amounts returned for burning pool-share tokens
///
/// # Arguments
/// * `burn_amount` - Pool-share tokens being redeemed
/// * `native_reserve` - Current native-currency reserve of the pool
/// * `token_reserve` - Current token reserve of the pool
/// * `total_supply` - Current total supply of pool-share tokens
///
/// # Returns
/// Each underlying amount scaled by the same `burn_amount / total_supply`
/// ratio, floored independently.
///
/// # Errors
/// `DivisionByZero` when `total_supply` is zero, meaning no liquidity exists
/// and withdrawal is not meaningful.
///
/// The range check `burn_amount <= total_supply` is the caller's contract;
/// this function computes, it does not clamp.
pub fn withdraw_amounts(
    burn_amount: U256,
    native_reserve: U256,
    token_reserve: U256,
    total_supply: U256,
) -> Result<WithdrawalAmounts, ExchangeError> {
    let native_amount = mul_div_floor(native_reserve, burn_amount, total_supply)?;
    let token_amount = mul_div_floor(token_reserve, burn_amount, total_supply)?;

    Ok(WithdrawalAmounts {
        native_amount,
        token_amount,
    })
}
