use crate::rational::Rational;
use crate::stableswap::math::get_sum_invariant;
use crate::stableswap::types::LiquidityOutcome;
use crate::types::{Balance, RESERVE_PRECISION};
use crate::{ensure, to_balance, MathError, LOG_TARGET};
use num_traits::{Signed, Zero};

/// LP amount issued for the first deposit of a new pool: the sum invariant in ledger units.
pub fn get_first_lp(a: &Balance, b: &Balance, amplification: &Balance) -> Result<Balance, MathError> {
	ensure!(!a.is_negative() && !b.is_negative(), MathError::InvalidAmount);
	ensure!(!(a.is_zero() && b.is_zero()), MathError::ZeroDeposit);

	let d = get_sum_invariant(amplification, a, b)?;
	Ok(d / to_balance!(RESERVE_PRECISION))
}

/// Calculate amount of LP tokens to be given for a deposit of `a` and `b` into a pool.
///
/// Minted amount is proportional to the growth of the sum invariant, rounded down.
/// Any deposit ratio is accepted as is, there is never any change to refund.
pub fn calculate_liquidity(
	a: &Balance,
	b: &Balance,
	a_reserve: &Balance,
	b_reserve: &Balance,
	total_lp: &Balance,
	amplification: &Balance,
) -> Result<LiquidityOutcome, MathError> {
	ensure!(
		!(a_reserve.is_zero() && b_reserve.is_zero()),
		MathError::InsufficientLiquidity
	);
	ensure!(!(a.is_zero() && b.is_zero()), MathError::ZeroDeposit);
	ensure!(!a.is_negative() && !b.is_negative(), MathError::InvalidAmount);
	ensure!(total_lp.is_positive(), MathError::InsufficientLiquidity);

	let initial_d = get_sum_invariant(amplification, a_reserve, b_reserve)?;
	let updated_d = get_sum_invariant(amplification, &(a_reserve + a), &(b_reserve + b))?;

	let generated_lp = (updated_d - &initial_d) * total_lp / initial_d;
	let next_total_lp = total_lp + &generated_lp;
	let share = Rational::new(generated_lp.clone(), next_total_lp.clone())?;

	log::debug!(
		target: LOG_TARGET,
		"liquidity added: a {}, b {}, generated lp {}, next total lp {}",
		a,
		b,
		generated_lp,
		next_total_lp
	);

	Ok(LiquidityOutcome {
		next_total_lp,
		generated_lp,
		share,
		a_change: Balance::zero(),
		b_change: Balance::zero(),
		actual_deposited_a: a.clone(),
		actual_deposited_b: b.clone(),
	})
}

/// Given amount of LP tokens and asset reserves, calculate corresponding amounts of both assets to be withdrawn.
///
/// Returns `(amount_a, amount_b)`, each rounded down.
pub fn get_tokens_for_lp(
	lp: &Balance,
	a_reserve: &Balance,
	b_reserve: &Balance,
	total_lp: &Balance,
) -> Result<(Balance, Balance), MathError> {
	ensure!(total_lp.is_positive(), MathError::InsufficientLiquidity);
	ensure!(!lp.is_negative() && lp <= total_lp, MathError::InvalidAmount);
	ensure!(
		!a_reserve.is_negative() && !b_reserve.is_negative(),
		MathError::InvalidReserve
	);

	let amount_a = lp * a_reserve / total_lp;
	let amount_b = lp * b_reserve / total_lp;

	log::debug!(
		target: LOG_TARGET,
		"liquidity removed: lp {}, a {}, b {}",
		lp,
		amount_a,
		amount_b
	);

	Ok((amount_a, amount_b))
}
