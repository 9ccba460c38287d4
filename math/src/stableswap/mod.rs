mod amplification;
mod liquidity;
mod math;
mod trade;

#[cfg(test)]
pub mod tests;

pub mod types;

use crate::types::Balance;
use num_traits::Signed;

pub use amplification::*;
pub use liquidity::*;
pub use math::*;
pub use trade::*;

/// Evaluates the two asset curve polynomial
/// `f(D) = 16·A·x·y·D + D³ − 16·A·x·y·(x+y) − 4·x·y·D`
/// and returns true iff `f(D) <= 0` and `f(D+1) > 0`.
///
/// `D` is then the integer part of the unique non-negative root, so exactly one value
/// passes for well-formed input.
///
/// - `asset_a`, `asset_b` - reserves already scaled by `RESERVE_PRECISION`
/// - `amplification` - raw amplification, not scaled by `A_PRECISION`
/// - `d` - candidate invariant
pub fn liquidity_invariant(asset_a: &Balance, asset_b: &Balance, amplification: &Balance, d: &Balance) -> bool {
	let xy = asset_a * asset_b;
	let amp_xy = Balance::from(16u8) * amplification * &xy;
	let sum = asset_a + asset_b;
	let constant = &amp_xy * &sum;
	let slope = amp_xy - Balance::from(4u8) * xy;

	let curve = |d: &Balance| -> Balance { &slope * d + d * d * d - &constant };

	!curve(d).is_positive() && curve(&(d + 1u8)).is_positive()
}
