
use crate::rational::Rational;
use crate::types::{Balance, RESERVE_PRECISION};

/// One whole token of a six decimals asset.
pub(crate) const ONE: u128 = 1_000_000;

/// Reserve scaled by `RESERVE_PRECISION`, as the solvers see it.
pub(crate) fn scaled(reserve: &Balance) -> Balance {
	reserve * Balance::from(RESERVE_PRECISION)
}

/// Curve polynomial `16·A·x·y·D + D³ − 16·A·x·y·(x+y) − 4·x·y·D` for scaled reserves.
///
/// Non-positive when `d` is not above the root.
pub(crate) fn curve_value(x: &Balance, y: &Balance, amplification: &Balance, d: &Balance) -> Balance {
	let xy = x * y;
	let amp_xy = Balance::from(16u8) * amplification * &xy;
	&amp_xy * d + d * d * d - &amp_xy * (x + y) - Balance::from(4u8) * xy * d
}

pub(crate) fn fees(fee: (u32, u32), protocol_fee: (u32, u32)) -> (Rational, Rational) {
	(
		Rational::new(fee.0, fee.1).unwrap(),
		Rational::new(protocol_fee.0, protocol_fee.1).unwrap(),
	)
}
