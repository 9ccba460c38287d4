use crate::types::Balance;

/// Amplification in effect at `current_block` while it moves linearly from
/// `initial_amplification` at `initial_block` to `future_amplification` at `future_block`.
pub fn calculate_amplification(
	initial_amplification: &Balance,
	future_amplification: &Balance,
	initial_block: u64,
	future_block: u64,
	current_block: u64,
) -> Balance {
	// short circuit if the change is complete or there is nothing to change
	if current_block >= future_block || initial_amplification == future_amplification {
		return future_amplification.clone();
	}
	if current_block <= initial_block {
		return initial_amplification.clone();
	}

	let step = (future_amplification - initial_amplification) * Balance::from(current_block - initial_block)
		/ Balance::from(future_block - initial_block);

	initial_amplification + step
}
