use serde::Deserialize;

use crate::state::Address;

/// Deployment addresses the transaction builders need.
///
/// Supplied by the deployment environment (the deploy tooling is an external
/// collaborator); this crate only reads the two addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExchangeConfig {
    /// The deployed exchange (pool) contract.
    pub exchange_address: Address,
    /// The fungible token the pool pairs with the native currency.
    pub token_address: Address,
}
