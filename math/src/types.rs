use num_bigint::BigInt;

pub use crate::rational::Rational;

/// Ledger amount. Reserves, trade amounts, LP amounts and invariants are all arbitrary precision.
pub type Balance = BigInt;

/// Reserves are multiplied by this factor before entering the solvers.
pub const RESERVE_PRECISION: u128 = 1_000_000_000_000u128;

/// Scaling applied to the raw amplification coefficient.
pub const A_PRECISION: u128 = 200u128;

/// Integer granularity of fee charges (basis points).
pub const FEE_PRECISION: u128 = 10_000u128;

/// Upper bound of Newton iterations for both solvers.
pub const MAX_ITERATIONS: u8 = 255;
