use crate::fee::{split_fee, total_fee_amount, validate_fees};
use crate::rational::{Rational, Rounding};
use crate::stableswap::math::{get_new_y, get_price, get_sum_invariant};
use crate::stableswap::types::SwapOutcome;
use crate::types::{Balance, RESERVE_PRECISION};
use crate::{ensure, to_balance, MathError, LOG_TARGET};
use num_traits::{Signed, Zero};

/// Calculating amount to be received from the pool given the amount to be sent to the pool and both reserves.
///
/// The fee is charged on the output side and rounded up. The protocol part of the fee leaves
/// the pool, so it is removed from the next output reserve.
///
/// - `round_output_up` - round the net output up instead of down, for callers that need an
///   upper bound of the output rather than the exact quote
pub fn get_swap_output(
	input: &Balance,
	input_reserve: &Balance,
	output_reserve: &Balance,
	fee: &Rational,
	protocol_fee: &Rational,
	amplification: &Balance,
	round_output_up: bool,
) -> Result<SwapOutcome, MathError> {
	ensure!(input.is_positive(), MathError::InvalidAmount);
	ensure!(input_reserve.is_positive(), MathError::InvalidReserve);
	ensure!(output_reserve.is_positive(), MathError::InvalidReserve);
	let combined_fee = validate_fees(fee, protocol_fee)?;

	let d = get_sum_invariant(amplification, input_reserve, output_reserve)?;
	let next_input_reserve = input_reserve + input;
	let new_y = get_new_y(&next_input_reserve, amplification, &d)?;

	let precision = to_balance!(RESERVE_PRECISION);
	let raw_output = Rational::new(output_reserve * &precision - new_y, precision)?;

	let total_fee = total_fee_amount(&combined_fee, &raw_output);
	let (output_lp_fee, output_protocol_fee) = split_fee(&total_fee, fee, protocol_fee);

	let rounding = if round_output_up { Rounding::Up } else { Rounding::Down };
	let output = (raw_output - Rational::from(&total_fee))
		.round(rounding)
		.max(Balance::zero());

	let next_output_reserve = output_reserve - &output - &output_protocol_fee;
	let next_sum_invariant = get_sum_invariant(amplification, &next_input_reserve, &next_output_reserve)?;
	let price_impact = calculate_price_impact(input, &output, input_reserve, output_reserve, amplification)?;

	log::debug!(
		target: LOG_TARGET,
		"swap output: input {}, output {}, lp fee {}, protocol fee {}",
		input,
		output,
		output_lp_fee,
		output_protocol_fee
	);

	Ok(SwapOutcome {
		input: input.clone(),
		output,
		output_lp_fee,
		output_protocol_fee,
		next_input_reserve,
		next_output_reserve,
		next_sum_invariant,
		price_impact,
	})
}

/// Calculating amount to be sent to the pool given the amount to be received from the pool and both reserves.
///
/// The output is grossed up by the combined fee first (rounded up), then the input that removes
/// the gross output while keeping the invariant is rounded up as well.
pub fn get_swap_input(
	output: &Balance,
	input_reserve: &Balance,
	output_reserve: &Balance,
	fee: &Rational,
	protocol_fee: &Rational,
	amplification: &Balance,
) -> Result<SwapOutcome, MathError> {
	ensure!(output.is_positive(), MathError::InvalidAmount);
	ensure!(input_reserve.is_positive(), MathError::InvalidReserve);
	ensure!(output_reserve.is_positive(), MathError::InvalidReserve);
	let combined_fee = validate_fees(fee, protocol_fee)?;
	ensure!(output < output_reserve, MathError::OutputExceedsReserve);

	let raw_output = (Rational::from(output) / (Rational::one() - &combined_fee)).ceil();
	ensure!(raw_output < *output_reserve, MathError::OutputExceedsReserve);

	let d = get_sum_invariant(amplification, input_reserve, output_reserve)?;
	let new_x = get_new_y(&(output_reserve - &raw_output), amplification, &d)?;

	let precision = to_balance!(RESERVE_PRECISION);
	let input = Rational::new(new_x - input_reserve * &precision, precision)?.ceil();

	let total_fee = &raw_output - output;
	let (output_lp_fee, output_protocol_fee) = split_fee(&total_fee, fee, protocol_fee);

	let next_input_reserve = input_reserve + &input;
	let next_output_reserve = output_reserve - output - &output_protocol_fee;
	let next_sum_invariant = get_sum_invariant(amplification, &next_input_reserve, &next_output_reserve)?;
	let price_impact = calculate_price_impact(&input, output, input_reserve, output_reserve, amplification)?;

	log::debug!(
		target: LOG_TARGET,
		"swap input: output {}, input {}, lp fee {}, protocol fee {}",
		output,
		input,
		output_lp_fee,
		output_protocol_fee
	);

	Ok(SwapOutcome {
		input,
		output: output.clone(),
		output_lp_fee,
		output_protocol_fee,
		next_input_reserve,
		next_output_reserve,
		next_sum_invariant,
		price_impact,
	})
}

/// Execution price impact: `1 - ideal_price / actual_price`.
///
/// The ideal price is the marginal price before the trade, the actual price is `input / output`.
/// A trade that receives nothing has an impact of one.
pub fn calculate_price_impact(
	input: &Balance,
	output: &Balance,
	input_reserve: &Balance,
	output_reserve: &Balance,
	amplification: &Balance,
) -> Result<Rational, MathError> {
	if output.is_zero() {
		return Ok(Rational::one());
	}

	let ideal_price = get_price(input_reserve, output_reserve, amplification)?;
	let actual_price = Rational::new(input.clone(), output.clone())?;

	Ok(Rational::one() - ideal_price / actual_price)
}
