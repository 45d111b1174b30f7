//! Suggested transaction parameters.
//!
//! The structs here are what the external submitter (wallet/RPC collaborator)
//! turns into actual ledger transactions. Nothing in this crate submits; the
//! amounts are the calculators' advisory outputs and the ledger re-checks
//! every one of them.

use crate::state::{Address, SwapDirection, WithdrawalAmounts, U256};

/// The connected account on whose behalf calls are built.
///
/// Passed explicitly into every builder rather than held as ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub account: Address,
}

impl Session {
    pub fn new(account: Address) -> Self {
        Self { account }
    }
}

/// Token allowance the exchange contract needs before it can pull tokens
/// from the user's account. Must be submitted and confirmed before the call
/// that spends the tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenApproval {
    pub token: Address,
    pub spender: Address,
    pub amount: U256,
}

/// Parameters for a ratio-preserving liquidity deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityCall {
    pub from: Address,
    pub exchange: Address,
    /// Native currency attached to the call.
    pub native_value: U256,
    /// Token deposit computed to preserve the pool ratio.
    pub token_deposit: U256,
    /// Prerequisite allowance covering `token_deposit`.
    pub approval: TokenApproval,
}

/// Parameters for seeding an empty pool. Both amounts are the user's free
/// choice; there is no existing ratio to preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialLiquidityCall {
    pub from: Address,
    pub exchange: Address,
    pub native_value: U256,
    pub token_deposit: U256,
    pub approval: TokenApproval,
}

/// Parameters for redeeming pool-share tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityCall {
    pub from: Address,
    pub exchange: Address,
    pub burn_amount: U256,
    /// Advisory preview of what the ledger should return.
    pub expected: WithdrawalAmounts,
}

/// Parameters for a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCall {
    pub from: Address,
    pub exchange: Address,
    pub direction: SwapDirection,
    pub input_amount: U256,
    /// Quoted output; the ledger's own recomputation is authoritative.
    pub expected_output: U256,
    /// Present only when tokens are being given up; swapping native currency
    /// needs no allowance.
    pub approval: Option<TokenApproval>,
}
