// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! Exponent normalization and rate derivation.
//!
//! Amounts are integers in the smallest denomination of their token, prices
//! are quoted per display unit. Converting between the two requires scaling
//! by `10^exponent`, which is done exactly on the raw units of a `Price`.

use crate::error::MathError;
use primitives::{Balance, Exponent, Price};
use sp_runtime::{
	traits::{CheckedDiv, CheckedMul},
	FixedPointNumber,
};

/// The exponent of the reference unit all reserves are valued in.
pub const VALUATION_EXPONENT: Exponent = 0;

/// The number of decimal places a `Price` can hold, `10^-18` is its smallest
/// positive value.
pub const MAX_NEGATIVE_EXPONENT_DIFFERENCE: Exponent = 18;

/// Returns the exact factor `10^(result - initial)` that converts an amount
/// given at the `initial` exponent into the `result` exponent.
pub fn exponent_factor(initial: Exponent, result: Exponent) -> Result<Price, MathError> {
	let invalid = MathError::InvalidExponent { from: initial, to: result };
	if result >= initial {
		let scale = 10u128.checked_pow(result - initial).ok_or(invalid)?;
		Price::checked_from_integer(scale).ok_or(invalid)
	} else {
		let difference = initial - result;
		if difference > MAX_NEGATIVE_EXPONENT_DIFFERENCE {
			return Err(invalid);
		}
		// 10^-difference expressed in raw units of 10^-18
		let inner = 10u128.checked_pow(MAX_NEGATIVE_EXPONENT_DIFFERENCE - difference).ok_or(invalid)?;
		Ok(Price::from_inner(inner))
	}
}

/// Expresses `amount` smallest units of a token with the given `exponent` in
/// reference units: `10^(VALUATION_EXPONENT - exponent) * amount`.
pub fn normalize_amount(amount: Balance, exponent: Exponent) -> Result<Price, MathError> {
	let factor = exponent_factor(exponent, VALUATION_EXPONENT)?;
	factor.into_inner().checked_mul(amount).map(Price::from_inner).ok_or(MathError::Overflow)
}

/// The value of `amount` smallest units at the given unit `price`, in
/// reference units.
pub fn value_in_reference(amount: Balance, price: Price, exponent: Exponent) -> Result<Price, MathError> {
	normalize_amount(amount, exponent)?.checked_mul(&price).ok_or(MathError::Overflow)
}

/// The per unit price of a token given the `total_value` of `amount` smallest
/// units of it: `total_value / normalize_amount(amount, exponent)`.
pub fn price_in_reference(amount: Balance, total_value: Price, exponent: Exponent) -> Result<Price, MathError> {
	let normalized = normalize_amount(amount, exponent)?;
	if normalized.into_inner() == 0 {
		return Err(MathError::ZeroPrice);
	}
	total_value.checked_div(&normalized).ok_or(MathError::Overflow)
}

/// How many smallest units of the `to` token a single smallest unit of the
/// `from` token is worth:
/// `10^(exponent_to - exponent_from) * price_from / price_to`
///
/// The ratio is truncated before it is scaled. Rates in opposite directions
/// are therefore not exact reciprocals of each other.
pub fn rate(
	price_from: Price,
	price_to: Price,
	exponent_from: Exponent,
	exponent_to: Exponent,
) -> Result<Price, MathError> {
	if price_to.into_inner() == 0 {
		return Err(MathError::ZeroPrice);
	}
	let factor = exponent_factor(exponent_from, exponent_to)?;
	let ratio = price_from.checked_div(&price_to).ok_or(MathError::Overflow)?;
	factor.checked_mul(&ratio).ok_or(MathError::Overflow)
}
