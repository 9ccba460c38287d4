use crate::rational::Rational;
use crate::stableswap::liquidity_invariant;
use crate::types::{Balance, A_PRECISION, MAX_ITERATIONS, RESERVE_PRECISION};
use crate::{ensure, to_balance, MathError, LOG_TARGET};
use num_traits::{One, Signed, Zero};

/// Calculating the sum invariant `D` of a pool with reserves `x` and `y`.
///
/// The result is scaled by `RESERVE_PRECISION` and satisfies
/// `liquidity_invariant(x, y, amplification, D)` for the scaled reserves.
/// An empty pool has `D == 0`.
pub fn get_sum_invariant(amplification: &Balance, x: &Balance, y: &Balance) -> Result<Balance, MathError> {
	calculate_sum_invariant::<MAX_ITERATIONS>(amplification, x, y)
}

/// Calculating the reserve paired with `new_x` that keeps the sum invariant at `sum_invariant`.
///
/// `new_x` is in ledger units, `sum_invariant` and the result are scaled by `RESERVE_PRECISION`.
pub fn get_new_y(new_x: &Balance, amplification: &Balance, sum_invariant: &Balance) -> Result<Balance, MathError> {
	calculate_new_y::<MAX_ITERATIONS>(new_x, amplification, sum_invariant)
}

/// Marginal price of asset A expressed in asset B units (`dA/dB` along the curve).
///
/// A balanced pool has a price of exactly one.
pub fn get_price(a_reserve: &Balance, b_reserve: &Balance, amplification: &Balance) -> Result<Rational, MathError> {
	ensure!(
		a_reserve.is_positive() && b_reserve.is_positive(),
		MathError::InvalidReserve
	);

	let d = Rational::new(
		get_sum_invariant(amplification, a_reserve, b_reserve)?,
		RESERVE_PRECISION,
	)?;
	let ann = calculate_ann(amplification);

	// xp_a = 2·A·x, d_r = D³ / (8·x·y)
	let xp_a = Rational::new(&ann * a_reserve, A_PRECISION)?;
	let d_r = &d * &d * &d / Rational::from(to_balance!(8u8) * a_reserve * b_reserve);
	let reserve_ratio = Rational::new(a_reserve.clone(), b_reserve.clone())?;

	Ok((&xp_a + &d_r * &reserve_ratio) / (xp_a + d_r))
}

/// amplification * A_PRECISION * n where n is number of assets in pool.
pub(crate) fn calculate_ann(amplification: &Balance) -> Balance {
	to_balance!(2u8) * amplification * to_balance!(A_PRECISION)
}

/// N - maximum number of Newton iterations before giving up with `ConvergenceFailure`.
pub(crate) fn calculate_sum_invariant<const N: u8>(
	amplification: &Balance,
	x: &Balance,
	y: &Balance,
) -> Result<Balance, MathError> {
	ensure!(amplification.is_positive(), MathError::NonPositiveAmplification);
	ensure!(!x.is_negative() && !y.is_negative(), MathError::InvalidReserve);

	let precision = to_balance!(RESERVE_PRECISION);
	let (x_hp, y_hp) = (x * &precision, y * &precision);
	let sum = &x_hp + &y_hp;
	if sum.is_zero() {
		return Ok(Balance::zero());
	}
	ensure!(!x_hp.is_zero() && !y_hp.is_zero(), MathError::InvalidReserve);

	let (two, three, hundred) = to_balance!(2u8, 3u8, 100u8);
	let ann = calculate_ann(amplification);
	let ann_sum = &ann * &sum / &hundred;
	let ann_less_one = &ann - &hundred;
	let xy_4 = to_balance!(4u8) * &x_hp * &y_hp;

	let mut d = sum;

	for i in 0..N {
		let d_p = &d * &d * &d / &xy_4;
		let d_next = (&ann_sum + &two * &d_p) * &d / (&ann_less_one * &d / &hundred + &three * &d_p);

		if has_converged(&d, &d_next) {
			log::trace!(target: LOG_TARGET, "sum invariant converged after {} iterations", i + 1);
			// the iteration lands on the root or one above it
			return Ok(if liquidity_invariant(&x_hp, &y_hp, amplification, &d_next) {
				d_next
			} else {
				d_next - 1u8
			});
		}
		d = d_next;
	}

	log::warn!(
		target: LOG_TARGET,
		"sum invariant did not converge in {} iterations, amplification: {}, x: {}, y: {}",
		N,
		amplification,
		x,
		y
	);
	Err(MathError::ConvergenceFailure)
}

/// N - maximum number of Newton iterations before giving up with `ConvergenceFailure`.
pub(crate) fn calculate_new_y<const N: u8>(
	new_x: &Balance,
	amplification: &Balance,
	sum_invariant: &Balance,
) -> Result<Balance, MathError> {
	ensure!(amplification.is_positive(), MathError::NonPositiveAmplification);
	ensure!(new_x.is_positive(), MathError::InvalidReserve);
	ensure!(sum_invariant.is_positive(), MathError::InsufficientLiquidity);

	let d = sum_invariant;
	let x_hp = new_x * to_balance!(RESERVE_PRECISION);
	let (two, hundred) = to_balance!(2u8, 100u8);
	let ann = calculate_ann(amplification);

	// c = D³ / (16·A·x), b = x + D / (4·A)
	let c = d * d / (&two * &x_hp);
	let c = c * d * &hundred / (&ann * &two);
	let b = &x_hp + d * &hundred / &ann;

	let mut y = d.clone();

	for i in 0..N {
		let denominator = &two * &y + &b - d;
		ensure!(denominator.is_positive(), MathError::ConvergenceFailure);
		let y_next = (&y * &y + &c) / denominator;

		if has_converged(&y, &y_next) {
			log::trace!(target: LOG_TARGET, "new y converged after {} iterations", i + 1);
			// approached from the other side of the root than the sum invariant
			return Ok(if liquidity_invariant(&x_hp, &y_next, amplification, d) {
				y_next
			} else {
				y_next + 1u8
			});
		}
		y = y_next;
	}

	log::warn!(
		target: LOG_TARGET,
		"new y did not converge in {} iterations, x: {}, amplification: {}, d: {}",
		N,
		new_x,
		amplification,
		sum_invariant
	);
	Err(MathError::ConvergenceFailure)
}

#[inline]
fn has_converged(v0: &Balance, v1: &Balance) -> bool {
	(v1 - v0).abs() <= Balance::one()
}
