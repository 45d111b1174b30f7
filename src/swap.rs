/// Swap operations for the constant-product exchange
///
/// This module provides the quote calculation for trading one side of the
/// pair for the other, including the 1% input-side fee the remote contract
/// charges before applying `x * y = k`.
use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::errors::ExchangeError;
use crate::state::{PoolSnapshot, SwapDirection, U256};

/// Calculate the output amount for a given input amount
///
/// # Arguments
/// * `input_amount` - Amount of the asset being given up, base units
/// * `input_reserve` - Pool reserve of the asset being given up
/// * `output_reserve` - Pool reserve of the asset being received
///
/// # Returns
/// ```text
/// input_with_fee = input_amount * 99
/// floor(output_reserve * input_with_fee / (input_reserve * 100 + input_with_fee))
/// ```
///
/// The caller must pass the reserves oriented to the side being given up;
/// prefer [`quote_for_direction`] which derives the orientation from a
/// [`SwapDirection`].
///
/// This is a quote only. The ledger recomputes the same formula at execution
/// time against its own (possibly newer) reserves, and its result wins.
///
/// # Errors
/// `DivisionByZero` when `input_reserve` and `input_amount` are both zero.
pub fn quote(
    input_amount: U256,
    input_reserve: U256,
    output_reserve: U256,
) -> Result<U256, ExchangeError> {
    let input_with_fee = input_amount
        .checked_mul(U256::from(FEE_NUMERATOR))
        .ok_or(ExchangeError::MathOverflow)?;

    let numerator = output_reserve
        .checked_mul(input_with_fee)
        .ok_or(ExchangeError::MathOverflow)?;

    let denominator = input_reserve
        .checked_mul(U256::from(FEE_DENOMINATOR))
        .ok_or(ExchangeError::MathOverflow)?
        .checked_add(input_with_fee)
        .ok_or(ExchangeError::MathOverflow)?;

    if denominator.is_zero() {
        return Err(ExchangeError::DivisionByZero);
    }

    Ok(numerator / denominator)
}

/// Quote a swap with the reserve orientation taken from `direction`.
///
/// Giving up native currency trades against `(native_reserve, token_reserve)`;
/// giving up tokens trades against the pair flipped.
pub fn quote_for_direction(
    snapshot: &PoolSnapshot,
    direction: SwapDirection,
    input_amount: U256,
) -> Result<U256, ExchangeError> {
    match direction {
        SwapDirection::NativeToToken => quote(
            input_amount,
            snapshot.native_reserve,
            snapshot.token_reserve,
        ),
        SwapDirection::TokenToNative => quote(
            input_amount,
            snapshot.token_reserve,
            snapshot.native_reserve,
        ),
    }
}
