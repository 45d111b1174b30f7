use thiserror::Error;

/// Opaque failure from a remote pool-state read.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// A required denominator (reserve or pool-share total supply) is zero.
    #[error("division by zero: empty reserve or zero total supply")]
    DivisionByZero,
    /// A 256-bit intermediate product overflowed.
    #[error("math overflow")]
    MathOverflow,
    /// A remote read failed. Never interpreted here; passed through for the
    /// caller to decide user-facing behavior.
    #[error("pool state read failed")]
    Source(#[from] SourceError),
}

impl ExchangeError {
    /// True when the failure means "no liquidity exists yet", i.e. the
    /// operation is not meaningful rather than wrong.
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, ExchangeError::DivisionByZero)
    }
}
