/// Numerator of the input-side trading fee factor: the pool keeps 1% of every
/// swap input, so only 99/100 of the input participates in pricing.
///
/// The remote exchange contract hardcodes the same 99/100 pair; the two must
/// match bit-for-bit or quotes drift from on-chain execution.
pub const FEE_NUMERATOR: u64 = 99;

/// Denominator of the trading fee factor.
pub const FEE_DENOMINATOR: u64 = 100;
