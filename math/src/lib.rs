//! # StableSwap Math
//!
//! Deterministic integer math for a two asset StableSwap (amplified curve) pool.
//!
//! The crate solves the curve invariant `D` and the paired reserve `y` with bounded
//! Newton iterations over arbitrary precision integers, quotes trades in both directions
//! net of LP and protocol fees, and computes liquidity issuance and withdrawals.
//! Fee and price arithmetic goes through the exact [`Rational`](rational::Rational) type.
//!
//! Every function is pure; nothing is cached and nothing is shared between calls.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod fee;
pub mod rational;
pub mod stableswap;
#[cfg(test)]
pub mod test_utils;
pub mod types;

/// Target used by every log statement emitted from this crate.
pub const LOG_TARGET: &str = "stableswap-math";

#[macro_export]
macro_rules! ensure {
	($e:expr, $f:expr) => {
		match $e {
			true => (),
			false => {
				return Err($f);
			}
		}
	};
}

#[macro_export]
macro_rules! to_balance {
	($($x:expr),+) => (
		{($($crate::types::Balance::from($x)),+)}
	);
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, thiserror::Error)]
pub enum MathError {
	#[error("amplification coefficient must be positive")]
	NonPositiveAmplification,
	#[error("reserve must be positive")]
	InvalidReserve,
	#[error("amount must be positive")]
	InvalidAmount,
	#[error("fee must be in range [0, 1)")]
	FeeOutOfRange,
	#[error("combined fee must be lower than 1")]
	CombinedFeeTooHigh,
	#[error("requested output exceeds the output reserve")]
	OutputExceedsReserve,
	#[error("pool has no liquidity")]
	InsufficientLiquidity,
	#[error("deposit amounts are both zero")]
	ZeroDeposit,
	#[error("newton iteration did not converge")]
	ConvergenceFailure,
	#[error("division by zero")]
	DivisionByZero,
	#[error("value is not a valid number")]
	InvalidNumber,
}
