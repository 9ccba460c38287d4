use crate::rational::Rational;
use crate::types::Balance;
use serde::{Deserialize, Serialize};

/// Result of a quote in either direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
	pub input: Balance,
	/// Amount received by the trader, net of fees.
	pub output: Balance,
	/// Part of the fee that stays in the pool for liquidity providers.
	pub output_lp_fee: Balance,
	/// Part of the fee that leaves the pool.
	pub output_protocol_fee: Balance,
	pub next_input_reserve: Balance,
	/// Output reserve after the output and the protocol fee were removed.
	pub next_output_reserve: Balance,
	pub next_sum_invariant: Balance,
	/// `1 - ideal_price / actual_price`, where the ideal price is the pre-trade marginal price
	/// and the actual price is `input / output`.
	pub price_impact: Rational,
}

impl SwapOutcome {
	pub fn total_fee(&self) -> Balance {
		&self.output_lp_fee + &self.output_protocol_fee
	}
}

/// Result of a deposit.
///
/// StableSwap accepts any deposit ratio, so nothing is refunded and the whole requested
/// amounts are deposited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityOutcome {
	pub next_total_lp: Balance,
	pub generated_lp: Balance,
	/// Share of the pool owned by the newly generated LP tokens.
	pub share: Rational,
	pub a_change: Balance,
	pub b_change: Balance,
	pub actual_deposited_a: Balance,
	pub actual_deposited_b: Balance,
}
