use crate::types::Balance;
use proptest::prelude::*;

// ----- Macros

/// Asserts that two expressions `$x` and `$y` are approximately equal to each other up to a delta `$z`.
macro_rules! assert_approx_eq {
	($x:expr, $y:expr, $z:expr) => {{
		assert_approx_eq!($x, $y, $z, "values are not approximately equal");
	}};
	($x:expr, $y:expr, $z:expr, $r:expr) => {{
		let diff = if $x >= $y {
			$x.clone() - $y.clone()
		} else {
			$y.clone() - $x.clone()
		};
		assert!(
			diff <= $z,
			"\n{}\n    left: {:?}\n   right: {:?}\n    diff: {:?}\nmax_diff: {:?}\n",
			$r,
			$x,
			$y,
			diff,
			$z
		);
	}};
}
pub(crate) use assert_approx_eq;

/// Asserts that two expressions `$x` and `$y` are approximately equal to each other up to a delta `$z`.
macro_rules! prop_assert_approx_eq {
	($x:expr, $y:expr, $z:expr) => {{
		prop_assert_approx_eq!($x, $y, $z, "values are not approximately equal");
	}};
	($x:expr, $y:expr, $z:expr, $r:expr) => {{
		let diff = if $x >= $y {
			$x.clone() - $y.clone()
		} else {
			$y.clone() - $x.clone()
		};
		prop_assert!(
			diff <= $z,
			"\n{}\n    left: {:?}\n   right: {:?}\n    diff: {:?}\nmax_diff: {:?}\n",
			$r,
			$x,
			$y,
			diff,
			$z
		);
	}};
}
pub(crate) use prop_assert_approx_eq;

// ----- Strategies

/// Uniformly distributed balance in `min..max`.
pub fn balance_in(min: u128, max: u128) -> impl Strategy<Value = Balance> {
	(min..max).prop_map(Balance::from)
}

// ----- Helpers

pub fn balance(value: u128) -> Balance {
	Balance::from(value)
}

#[test]
fn assert_approx_eq_should_accept_difference_within_delta() {
	assert_approx_eq!(balance(100), balance(101), balance(1));
	assert_approx_eq!(balance(101), balance(100), balance(1), "reversed");
}

#[test]
#[should_panic]
fn assert_approx_eq_should_reject_difference_above_delta() {
	assert_approx_eq!(balance(100), balance(103), balance(2));
}
