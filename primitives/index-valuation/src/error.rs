// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

use codec::{Decode, Encode};
use primitives::Exponent;
use scale_info::TypeInfo;
use sp_runtime::{DispatchError, RuntimeDebug};

/// Failures of the fixed point math in [`crate::math`].
#[derive(PartialEq, Eq, Clone, Copy, Encode, Decode, RuntimeDebug, TypeInfo)]
pub enum MathError {
	/// Attempted to divide by a zero price
	ZeroPrice,
	/// The factor `10^(to - from)` can not be represented as a `Price`
	InvalidExponent { from: Exponent, to: Exponent },
	/// A checked operation overflowed
	Overflow,
}

/// Everything that can abort a valuation.
///
/// None of these are recovered internally, a failed valuation never yields a
/// partial result.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
pub enum ValuationError<AssetId, Symbol> {
	/// The registry has no settings for an accepted asset
	AssetConfigNotFound(AssetId),
	/// The oracle has no observation for the symbol
	PriceUnavailable(Symbol),
	/// An accepted asset has no entry in the index balances
	ReserveBalanceMissing(AssetId),
	/// Thrown when pricing an unminted index that accepts no assets
	NoAcceptedAssets,
	/// A zero price ended up as divisor while pricing the given asset
	ZeroPrice(AssetId),
	/// The exponent difference exceeds the precision of `Price`
	InvalidExponent { from: Exponent, to: Exponent },
	/// A checked operation overflowed
	Overflow,
	/// The index configuration lists the asset more than once
	DuplicateAcceptedAsset(AssetId),
	/// No balances are recorded for the index
	IndexNotFound(AssetId),
	/// The asset is not part of the index
	AssetNotInIndex(AssetId),
}

impl<AssetId, Symbol> ValuationError<AssetId, Symbol> {
	/// Lifts a math failure that occurred while processing `asset`
	pub fn from_math(err: MathError, asset: &AssetId) -> Self
	where
		AssetId: Clone,
	{
		match err {
			MathError::ZeroPrice => Self::ZeroPrice(asset.clone()),
			MathError::InvalidExponent { from, to } => Self::InvalidExponent { from, to },
			MathError::Overflow => Self::Overflow,
		}
	}

	/// The name of the variant
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AssetConfigNotFound(_) => "AssetConfigNotFound",
			Self::PriceUnavailable(_) => "PriceUnavailable",
			Self::ReserveBalanceMissing(_) => "ReserveBalanceMissing",
			Self::NoAcceptedAssets => "NoAcceptedAssets",
			Self::ZeroPrice(_) => "ZeroPrice",
			Self::InvalidExponent { .. } => "InvalidExponent",
			Self::Overflow => "Overflow",
			Self::DuplicateAcceptedAsset(_) => "DuplicateAcceptedAsset",
			Self::IndexNotFound(_) => "IndexNotFound",
			Self::AssetNotInIndex(_) => "AssetNotInIndex",
		}
	}
}

impl<AssetId, Symbol> From<ValuationError<AssetId, Symbol>> for DispatchError {
	fn from(err: ValuationError<AssetId, Symbol>) -> Self {
		DispatchError::Other(err.as_str())
	}
}

#[cfg(feature = "std")]
impl<AssetId: std::fmt::Debug, Symbol: std::fmt::Debug> std::fmt::Display for ValuationError<AssetId, Symbol> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::AssetConfigNotFound(asset) => write!(f, "no registry settings for asset {:?}", asset),
			Self::PriceUnavailable(symbol) => write!(f, "price not found in oracle for symbol {:?}", symbol),
			Self::ReserveBalanceMissing(asset) => write!(f, "balance for asset {:?} not found", asset),
			Self::NoAcceptedAssets => write!(f, "index has no accepted assets"),
			Self::ZeroPrice(asset) => write!(f, "zero price while pricing asset {:?}", asset),
			Self::InvalidExponent { from, to } => {
				write!(f, "exponent difference between {} and {} not supported", from, to)
			}
			Self::Overflow => write!(f, "arithmetic overflow"),
			Self::DuplicateAcceptedAsset(asset) => write!(f, "asset {:?} accepted more than once", asset),
			Self::IndexNotFound(index) => write!(f, "no balances found for index {:?}", index),
			Self::AssetNotInIndex(asset) => write!(f, "asset {:?} is not accepted by the index", asset),
		}
	}
}

#[cfg(feature = "std")]
impl<AssetId: std::fmt::Debug, Symbol: std::fmt::Debug> std::error::Error for ValuationError<AssetId, Symbol> {}

#[cfg(test)]
mod tests {
	use super::*;

	type Error = ValuationError<&'static str, &'static str>;

	#[test]
	fn math_errors_carry_asset_context() {
		assert_eq!(Error::from_math(MathError::ZeroPrice, &"uatom"), Error::ZeroPrice("uatom"));
		assert_eq!(
			Error::from_math(MathError::InvalidExponent { from: 19, to: 0 }, &"uatom"),
			Error::InvalidExponent { from: 19, to: 0 }
		);
		assert_eq!(Error::from_math(MathError::Overflow, &"uatom"), Error::Overflow);
	}

	#[test]
	fn converts_into_dispatch_error() {
		let err: DispatchError = Error::PriceUnavailable("ATOM").into();
		assert_eq!(err, DispatchError::Other("PriceUnavailable"));
	}

	#[test]
	fn display_names_the_symbol() {
		assert_eq!(Error::PriceUnavailable("ATOM").to_string(), "price not found in oracle for symbol \"ATOM\"");
	}
}
