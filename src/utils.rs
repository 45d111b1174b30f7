use crate::errors::ExchangeError;
use crate::state::U256;

/// Computes `floor(a * b / d)` with the product checked at 256 bits.
///
/// Division truncates toward zero, matching the remote ledger's integer
/// arithmetic exactly. `d == 0` is `DivisionByZero`; a product that does not
/// fit in 256 bits is `MathOverflow`.
pub fn mul_div_floor(a: U256, b: U256, d: U256) -> Result<U256, ExchangeError> {
    if d.is_zero() {
        return Err(ExchangeError::DivisionByZero);
    }
    let numerator = a.checked_mul(b).ok_or(ExchangeError::MathOverflow)?;
    Ok(numerator / d)
}
