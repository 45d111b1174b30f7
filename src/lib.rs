/// Constant-product exchange math
///
/// This library provides the pure calculations behind a native-currency /
/// token liquidity pool: ratio-preserving deposits, proportional
/// withdrawals, and constant-product swap quotes with a 1% input-side fee.
/// All results are advisory; the remote exchange contract recomputes and
/// enforces the same arithmetic at execution time.

pub mod config;
pub mod constants;
pub mod errors;
pub mod exchange;
pub mod liquidity;
pub mod provider;
pub mod state;
pub mod swap;
pub mod tx;
pub mod utils;

// Re-export the main surface for convenience
pub use config::ExchangeConfig;
pub use constants::{FEE_DENOMINATOR, FEE_NUMERATOR};
pub use errors::{ExchangeError, SourceError};
pub use exchange::Exchange;
pub use liquidity::{matching_token_deposit, withdraw_amounts};
pub use provider::{FixedPoolState, PoolStateSource};
pub use state::{Address, PoolSnapshot, SwapDirection, WithdrawalAmounts, U256};
pub use swap::{quote, quote_for_direction};
pub use tx::Session;
