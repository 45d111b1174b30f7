//! Exchange façade: fresh-state quoting and call building.
//!
//! Each operation reads one fresh [`PoolSnapshot`] through the injected
//! [`PoolStateSource`], runs the pure calculators against it, and discards
//! it. No state is held between calls, so concurrent use needs no
//! coordination.

use tracing::debug;

use crate::config::ExchangeConfig;
use crate::errors::ExchangeError;
use crate::liquidity::{matching_token_deposit, withdraw_amounts};
use crate::provider::PoolStateSource;
use crate::state::{PoolSnapshot, SwapDirection, WithdrawalAmounts, U256};
use crate::swap::quote_for_direction;
use crate::tx::{
    AddLiquidityCall, InitialLiquidityCall, RemoveLiquidityCall, Session, SwapCall, TokenApproval,
};

pub struct Exchange<S> {
    source: S,
    config: ExchangeConfig,
}

impl<S: PoolStateSource> Exchange<S> {
    pub fn new(source: S, config: ExchangeConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    fn load(&self) -> Result<PoolSnapshot, ExchangeError> {
        let snapshot = self.source.snapshot()?;
        debug!(
            native_reserve = %snapshot.native_reserve,
            token_reserve = %snapshot.token_reserve,
            lp_total_supply = %snapshot.lp_total_supply,
            "pool snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Whether the pool currently holds no liquidity. Callers use this to
    /// route deposits to [`Exchange::initial_liquidity_call`].
    pub fn pool_is_empty(&self) -> Result<bool, ExchangeError> {
        Ok(self.load()?.is_empty())
    }

    /// Token deposit that preserves the current ratio for `deposit_native`.
    pub fn matching_token_deposit(&self, deposit_native: U256) -> Result<U256, ExchangeError> {
        let snapshot = self.load()?;
        matching_token_deposit(
            deposit_native,
            snapshot.native_reserve,
            snapshot.token_reserve,
        )
    }

    /// Preview of the amounts returned for burning `burn_amount` pool shares.
    pub fn removal_preview(&self, burn_amount: U256) -> Result<WithdrawalAmounts, ExchangeError> {
        let snapshot = self.load()?;
        withdraw_amounts(
            burn_amount,
            snapshot.native_reserve,
            snapshot.token_reserve,
            snapshot.lp_total_supply,
        )
    }

    /// Quoted output for swapping `input_amount` in the given direction.
    pub fn swap_quote(
        &self,
        direction: SwapDirection,
        input_amount: U256,
    ) -> Result<U256, ExchangeError> {
        let snapshot = self.load()?;
        let output = quote_for_direction(&snapshot, direction, input_amount)?;
        debug!(?direction, input = %input_amount, output = %output, "swap quoted");
        Ok(output)
    }

    /// Build a ratio-preserving deposit call.
    ///
    /// Fails with `DivisionByZero` on an empty pool; use
    /// [`Exchange::initial_liquidity_call`] there instead.
    pub fn add_liquidity_call(
        &self,
        session: &Session,
        deposit_native: U256,
    ) -> Result<AddLiquidityCall, ExchangeError> {
        let snapshot = self.load()?;
        let token_deposit = matching_token_deposit(
            deposit_native,
            snapshot.native_reserve,
            snapshot.token_reserve,
        )?;

        Ok(AddLiquidityCall {
            from: session.account,
            exchange: self.config.exchange_address,
            native_value: deposit_native,
            token_deposit,
            approval: self.approval_for(token_deposit),
        })
    }

    /// Build a first-deposit call for an empty pool; both amounts are the
    /// user's free choice.
    pub fn initial_liquidity_call(
        &self,
        session: &Session,
        deposit_native: U256,
        deposit_token: U256,
    ) -> InitialLiquidityCall {
        InitialLiquidityCall {
            from: session.account,
            exchange: self.config.exchange_address,
            native_value: deposit_native,
            token_deposit: deposit_token,
            approval: self.approval_for(deposit_token),
        }
    }

    /// Build a pool-share redemption call with its advisory preview.
    pub fn remove_liquidity_call(
        &self,
        session: &Session,
        burn_amount: U256,
    ) -> Result<RemoveLiquidityCall, ExchangeError> {
        let expected = self.removal_preview(burn_amount)?;

        Ok(RemoveLiquidityCall {
            from: session.account,
            exchange: self.config.exchange_address,
            burn_amount,
            expected,
        })
    }

    /// Build a swap call carrying the current quote. Token-to-native swaps
    /// include the allowance the contract needs to pull the input tokens.
    pub fn swap_call(
        &self,
        session: &Session,
        direction: SwapDirection,
        input_amount: U256,
    ) -> Result<SwapCall, ExchangeError> {
        let expected_output = self.swap_quote(direction, input_amount)?;

        let approval = match direction {
            SwapDirection::NativeToToken => None,
            SwapDirection::TokenToNative => Some(self.approval_for(input_amount)),
        };

        Ok(SwapCall {
            from: session.account,
            exchange: self.config.exchange_address,
            direction,
            input_amount,
            expected_output,
            approval,
        })
    }

    fn approval_for(&self, amount: U256) -> TokenApproval {
        TokenApproval {
            token: self.config.token_address,
            spender: self.config.exchange_address,
            amount,
        }
    }
}
