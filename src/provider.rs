//! Injected source of pool state.
//!
//! The calculators never talk to the network themselves; they consume a
//! [`PoolSnapshot`] obtained through this trait. Production wires in an RPC
//! client, tests wire in [`FixedPoolState`].

use crate::errors::SourceError;
use crate::state::PoolSnapshot;

/// Read-only access to the pool's current on-ledger state.
///
/// Every call must fetch a fresh snapshot; implementations must not cache,
/// since staleness is resolved by the ledger, not by this crate.
pub trait PoolStateSource {
    fn snapshot(&self) -> Result<PoolSnapshot, SourceError>;
}

/// A source returning the same fixed snapshot on every read.
///
/// Deterministic stand-in for the remote ledger in tests and offline quoting.
#[derive(Debug, Clone, Copy)]
pub struct FixedPoolState(pub PoolSnapshot);

impl PoolStateSource for FixedPoolState {
    fn snapshot(&self) -> Result<PoolSnapshot, SourceError> {
        Ok(self.0)
    }
}
