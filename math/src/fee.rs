use crate::rational::Rational;
use crate::types::{Balance, FEE_PRECISION};
use crate::{ensure, MathError};
use num_traits::Zero;

/// Checks `0 <= fee < 1`, `0 <= protocol_fee < 1` and `fee + protocol_fee < 1`.
///
/// Returns the combined fee.
pub fn validate_fees(fee: &Rational, protocol_fee: &Rational) -> Result<Rational, MathError> {
	let one = Rational::one();
	ensure!(!fee.is_negative() && *fee < one, MathError::FeeOutOfRange);
	ensure!(
		!protocol_fee.is_negative() && *protocol_fee < one,
		MathError::FeeOutOfRange
	);

	let combined = fee + protocol_fee;
	ensure!(combined < one, MathError::CombinedFeeTooHigh);
	Ok(combined)
}

/// Fee charged on `amount`, rounded up so the pool is never under-charged.
pub fn total_fee_amount(combined_fee: &Rational, amount: &Rational) -> Balance {
	let precision = Rational::from(FEE_PRECISION);
	(combined_fee * &precision * amount / precision).ceil()
}

/// Splits `total_fee` into `(lp_fee, protocol_fee)` in the ratio of the two fee rates.
///
/// The protocol share is rounded down, the LP share takes the remainder.
pub fn split_fee(total_fee: &Balance, fee: &Rational, protocol_fee: &Rational) -> (Balance, Balance) {
	let combined = fee + protocol_fee;
	if combined.is_zero() {
		return (Balance::zero(), Balance::zero());
	}

	let protocol_share = (protocol_fee * &Rational::from(total_fee) / combined).quotient();
	(total_fee - &protocol_share, protocol_share)
}

#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	fn r(n: i64, d: i64) -> Rational {
		Rational::new(n, d).unwrap()
	}

	#[test_case(r(3, 1000), r(1, 1000), Ok(r(1, 250)) ; "regular fees")]
	#[test_case(Rational::zero(), Rational::zero(), Ok(Rational::zero()) ; "zero fees")]
	#[test_case(r(-1, 1000), Rational::zero(), Err(MathError::FeeOutOfRange) ; "negative fee")]
	#[test_case(Rational::one(), Rational::zero(), Err(MathError::FeeOutOfRange) ; "fee of one")]
	#[test_case(Rational::zero(), r(-1, 2), Err(MathError::FeeOutOfRange) ; "negative protocol fee")]
	#[test_case(Rational::zero(), r(3, 2), Err(MathError::FeeOutOfRange) ; "protocol fee above one")]
	#[test_case(r(1, 2), r(1, 2), Err(MathError::CombinedFeeTooHigh) ; "combined fee of one")]
	#[test_case(r(3, 4), r(1, 2), Err(MathError::CombinedFeeTooHigh) ; "combined fee above one")]
	fn validate_fees_should_work(fee: Rational, protocol_fee: Rational, expected: Result<Rational, MathError>) {
		assert_eq!(validate_fees(&fee, &protocol_fee), expected);
	}

	#[test]
	fn total_fee_should_round_up() {
		// raw output of a 10_000_000 swap on a balanced 1_000_000_000 pool at A = 200
		let raw_output = Rational::new(9_999_750_604_846_068_206u128, 1_000_000_000_000u128).unwrap();
		assert_eq!(total_fee_amount(&r(4, 1000), &raw_output), Balance::from(40_000));
		assert_eq!(total_fee_amount(&r(4, 1000), &r(9_999_750, 1)), Balance::from(39_999));
		assert_eq!(total_fee_amount(&r(3, 1000), &r(1000, 1)), Balance::from(3));
		assert_eq!(total_fee_amount(&r(3, 1000), &r(1001, 1)), Balance::from(4));
		assert_eq!(total_fee_amount(&r(3, 1000), &r(1, 2)), Balance::from(1));
		assert_eq!(total_fee_amount(&Rational::zero(), &r(1001, 1)), Balance::zero());
	}

	#[test]
	fn split_fee_should_follow_fee_ratio() {
		let (lp, protocol) = split_fee(&Balance::from(40_000), &r(3, 1000), &r(1, 1000));
		assert_eq!((lp, protocol), (Balance::from(30_000), Balance::from(10_000)));

		// protocol share is floored
		let (lp, protocol) = split_fee(&Balance::from(4_017), &r(3, 1000), &r(1, 1000));
		assert_eq!((lp, protocol), (Balance::from(3_013), Balance::from(1_004)));
	}

	#[test]
	fn split_fee_should_handle_zero_rates() {
		assert_eq!(
			split_fee(&Balance::from(10), &Rational::zero(), &Rational::zero()),
			(Balance::zero(), Balance::zero())
		);
		assert_eq!(
			split_fee(&Balance::from(10), &r(1, 100), &Rational::zero()),
			(Balance::from(10), Balance::zero())
		);
		assert_eq!(
			split_fee(&Balance::from(10), &Rational::zero(), &r(1, 100)),
			(Balance::zero(), Balance::from(10))
		);
	}
}
