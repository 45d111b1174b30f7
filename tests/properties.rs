//! Property tests for the three calculators.

use exchange_math::{matching_token_deposit, quote, withdraw_amounts, ExchangeError, U256};
use proptest::prelude::*;

fn u(v: u128) -> U256 {
    U256::from(v)
}

proptest! {
    // Deposit ratio: result is exactly floor(deposit * token_reserve / native_reserve).
    #[test]
    fn ratio_preservation(
        deposit in 1u128..=u128::MAX,
        native_reserve in 1u128..=u128::MAX,
        token_reserve in 1u128..=u128::MAX,
    ) {
        let result = matching_token_deposit(u(deposit), u(native_reserve), u(token_reserve)).unwrap();
        let expected = u(deposit) * u(token_reserve) / u(native_reserve);
        prop_assert_eq!(result, expected);
    }

    // A withdrawal never returns more than the reserves hold, and burning the
    // whole supply drains the pool exactly.
    #[test]
    fn withdrawal_proportionality(
        total_supply in 1u128..=u128::MAX,
        burn_ratio in 0.0f64..=1.0,
        native_reserve in 0u128..=u128::MAX,
        token_reserve in 0u128..=u128::MAX,
    ) {
        let burn = ((total_supply as f64) * burn_ratio) as u128;
        let burn = burn.min(total_supply);

        let amounts = withdraw_amounts(u(burn), u(native_reserve), u(token_reserve), u(total_supply)).unwrap();
        prop_assert!(amounts.native_amount <= u(native_reserve));
        prop_assert!(amounts.token_amount <= u(token_reserve));

        let full = withdraw_amounts(u(total_supply), u(native_reserve), u(token_reserve), u(total_supply)).unwrap();
        prop_assert_eq!(full.native_amount, u(native_reserve));
        prop_assert_eq!(full.token_amount, u(token_reserve));
    }

    // Output is non-decreasing in the input, and zero input yields zero output.
    // Inputs stay in u64 range so the 256-bit numerator cannot overflow even
    // against maximal reserves.
    #[test]
    fn swap_monotonicity(
        input in 0u128..=u64::MAX as u128,
        step in 1u128..=u64::MAX as u128,
        input_reserve in 1u128..=u128::MAX,
        output_reserve in 0u128..=u128::MAX,
    ) {
        let smaller = quote(u(input), u(input_reserve), u(output_reserve)).unwrap();
        let larger = quote(u(input + step), u(input_reserve), u(output_reserve)).unwrap();
        prop_assert!(smaller <= larger);

        let zero = quote(u(0), u(input_reserve), u(output_reserve)).unwrap();
        prop_assert_eq!(zero, U256::zero());
    }

    // The fee-charging quote never exceeds the fee-less constant-product
    // result, and is strictly below it whenever the two real-valued formulas
    // are at least one whole base unit apart (so flooring cannot mask the gap).
    #[test]
    fn fee_bound(
        input in 1u128..=u64::MAX as u128,
        input_reserve in 1u128..=u128::MAX,
        output_reserve in 1u128..=u128::MAX,
    ) {
        let with_fee = quote(u(input), u(input_reserve), u(output_reserve)).unwrap();
        let feeless = u(output_reserve) * u(input) / (u(input_reserve) + u(input));
        prop_assert!(with_fee <= feeless);

        let gap_numerator = u(output_reserve)
            .checked_mul(u(input))
            .and_then(|n| n.checked_mul(u(input_reserve)));
        let gap_denominator = (u(input_reserve) + u(input))
            .checked_mul(u(input_reserve) * u(100u128) + u(input) * u(99u128));
        if let (Some(n), Some(d)) = (gap_numerator, gap_denominator) {
            if n >= d {
                prop_assert!(with_fee < feeless);
            }
        }
    }

    // Division-by-zero guards.
    #[test]
    fn zero_denominator_guards(
        amount in 0u128..=u128::MAX,
        reserve in 0u128..=u128::MAX,
    ) {
        let deposit = matching_token_deposit(u(amount), u(0), u(reserve));
        prop_assert!(matches!(deposit, Err(ExchangeError::DivisionByZero)));

        let withdrawal = withdraw_amounts(u(amount), u(reserve), u(reserve), u(0));
        prop_assert!(matches!(withdrawal, Err(ExchangeError::DivisionByZero)));
    }
}
