use crate::types::{Balance, FEE_PRECISION};
use crate::{ensure, MathError};
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;
use num_rational::BigRational;
use num_traits::{CheckedDiv, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use sp_arithmetic::{PerThing, Permill};

/// Enum to specify how to round a rational number to an integer.
/// `Down` ensures the output is less than or equal to the input.
/// `Up` ensures the output is greater than or equal to the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
	Down,
	Up,
}

/// An exact fraction of two `Balance`s.
///
/// Always kept in lowest terms with a positive denominator. Division by zero saturates
/// to zero; use `checked_div` to detect it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Balance, Balance)", into = "(Balance, Balance)")]
pub struct Rational(BigRational);

impl Rational {
	/// Build from a raw `n/d`. Fails with `DivisionByZero` when `d == 0`.
	pub fn new(n: impl Into<Balance>, d: impl Into<Balance>) -> Result<Self, MathError> {
		let (n, d) = (n.into(), d.into());
		ensure!(!d.is_zero(), MathError::DivisionByZero);
		Ok(Self(BigRational::new(n, d)))
	}

	pub fn from_integer(n: impl Into<Balance>) -> Self {
		Self(BigRational::from_integer(n.into()))
	}

	/// Fee expressed in basis points, e.g. `30` is `30 / 10_000`.
	pub fn from_basis_points(bp: u32) -> Self {
		Self(BigRational::new(Balance::from(bp), Balance::from(FEE_PRECISION)))
	}

	/// Exact value of a finite float. `0.1` becomes its binary expansion, not `1/10`;
	/// parse a decimal string when the decimal value is meant.
	pub fn from_f64(value: f64) -> Result<Self, MathError> {
		BigRational::from_float(value).map(Self).ok_or(MathError::InvalidNumber)
	}

	pub fn zero() -> Self {
		Self(BigRational::zero())
	}

	pub fn one() -> Self {
		Self::from_integer(1u8)
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.0.is_negative()
	}

	pub fn numer(&self) -> &Balance {
		self.0.numer()
	}

	pub fn denom(&self) -> &Balance {
		self.0.denom()
	}

	/// Largest integer not greater than `self`.
	pub fn quotient(&self) -> Balance {
		self.0.floor().to_integer()
	}

	/// Smallest integer not lower than `self`.
	pub fn ceil(&self) -> Balance {
		self.0.ceil().to_integer()
	}

	pub fn round(&self, rounding: Rounding) -> Balance {
		match rounding {
			Rounding::Down => self.quotient(),
			Rounding::Up => self.ceil(),
		}
	}

	/// Returns `None` when dividing by zero.
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		self.0.checked_div(&rhs.0).map(Self)
	}

	/// Approximation for display and tests.
	pub fn to_f64(&self) -> f64 {
		self.0.to_f64().unwrap_or(f64::NAN)
	}
}

macro_rules! impl_rational_op {
	($op:ident, $method:ident) => {
		impl<'a, 'b> $op<&'b Rational> for &'a Rational {
			type Output = Rational;

			fn $method(self, rhs: &'b Rational) -> Rational {
				Rational($op::$method(&self.0, &rhs.0))
			}
		}

		impl<'b> $op<&'b Rational> for Rational {
			type Output = Rational;

			fn $method(self, rhs: &'b Rational) -> Rational {
				Rational($op::$method(self.0, &rhs.0))
			}
		}

		impl<'a> $op<Rational> for &'a Rational {
			type Output = Rational;

			fn $method(self, rhs: Rational) -> Rational {
				Rational($op::$method(&self.0, rhs.0))
			}
		}

		impl $op<Rational> for Rational {
			type Output = Rational;

			fn $method(self, rhs: Rational) -> Rational {
				Rational($op::$method(self.0, rhs.0))
			}
		}
	};
}

impl_rational_op!(Add, add);
impl_rational_op!(Sub, sub);
impl_rational_op!(Mul, mul);

// Dividing by zero yields zero, use `checked_div` to detect it.
impl<'a, 'b> Div<&'b Rational> for &'a Rational {
	type Output = Rational;

	fn div(self, rhs: &'b Rational) -> Rational {
		self.checked_div(rhs).unwrap_or_else(Rational::zero)
	}
}

impl<'b> Div<&'b Rational> for Rational {
	type Output = Rational;

	fn div(self, rhs: &'b Rational) -> Rational {
		&self / rhs
	}
}

impl<'a> Div<Rational> for &'a Rational {
	type Output = Rational;

	fn div(self, rhs: Rational) -> Rational {
		self / &rhs
	}
}

impl Div<Rational> for Rational {
	type Output = Rational;

	fn div(self, rhs: Rational) -> Rational {
		&self / &rhs
	}
}

impl Neg for Rational {
	type Output = Rational;

	fn neg(self) -> Rational {
		Rational(-self.0)
	}
}

impl<'a> Neg for &'a Rational {
	type Output = Rational;

	fn neg(self) -> Rational {
		Rational(-&self.0)
	}
}

impl From<Balance> for Rational {
	fn from(n: Balance) -> Self {
		Self::from_integer(n)
	}
}

impl From<&Balance> for Rational {
	fn from(n: &Balance) -> Self {
		Self::from_integer(n.clone())
	}
}

impl From<u128> for Rational {
	fn from(n: u128) -> Self {
		Self::from_integer(n)
	}
}

impl From<u64> for Rational {
	fn from(n: u64) -> Self {
		Self::from_integer(n)
	}
}

impl From<i64> for Rational {
	fn from(n: i64) -> Self {
		Self::from_integer(n)
	}
}

impl From<Permill> for Rational {
	fn from(value: Permill) -> Self {
		Self(BigRational::new(
			Balance::from(value.deconstruct()),
			Balance::from(Permill::ACCURACY),
		))
	}
}

impl TryFrom<(Balance, Balance)> for Rational {
	type Error = MathError;

	fn try_from((n, d): (Balance, Balance)) -> Result<Self, Self::Error> {
		Self::new(n, d)
	}
}

impl From<Rational> for (Balance, Balance) {
	fn from(value: Rational) -> (Balance, Balance) {
		value.0.into_raw()
	}
}

/// Accepts integers (`"42"`), decimals (`"0.003"`, `"-1.5"`) and fractions (`"3/1000"`).
impl FromStr for Rational {
	type Err = MathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if let Some((n, d)) = s.split_once('/') {
			let n: Balance = n.trim().parse().map_err(|_| MathError::InvalidNumber)?;
			let d: Balance = d.trim().parse().map_err(|_| MathError::InvalidNumber)?;
			return Self::new(n, d);
		}

		let (negative, digits) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s.strip_prefix('+').unwrap_or(s)),
		};
		let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
		ensure!(
			!(int_part.is_empty() && frac_part.is_empty()),
			MathError::InvalidNumber
		);
		ensure!(
			int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()),
			MathError::InvalidNumber
		);

		let mantissa: Balance = format!("{int_part}{frac_part}")
			.parse()
			.map_err(|_| MathError::InvalidNumber)?;
		let scale = Balance::from(10u8).pow(frac_part.len() as u32);
		let n = if negative { -mantissa } else { mantissa };
		Self::new(n, scale)
	}
}

impl fmt::Display for Rational {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}
