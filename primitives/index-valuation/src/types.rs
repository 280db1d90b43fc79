// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

use crate::error::ValuationError;
use codec::{Decode, Encode};
use primitives::{Balance, Exponent, Price};
use scale_info::TypeInfo;
use sp_runtime::{FixedPointNumber, RuntimeDebug};
use sp_std::vec::Vec;

/// An asset that backs the index and can be swapped into or redeemed from it
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptedAsset<AssetId> {
	pub denom: AssetId,
}

/// Definition of an index token
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Index<AssetId> {
	/// The denom of the index token
	pub denom: AssetId,
	/// The display exponent of the index token
	pub exponent: Exponent,
	/// The backing assets, in composition order
	pub accepted_assets: Vec<AcceptedAsset<AssetId>>,
}

impl<AssetId: Clone + PartialEq> Index<AssetId> {
	pub fn new(denom: AssetId, exponent: Exponent, accepted_assets: Vec<AssetId>) -> Self {
		Self {
			denom,
			exponent,
			accepted_assets: accepted_assets.into_iter().map(|denom| AcceptedAsset { denom }).collect(),
		}
	}

	/// Whether the index accepts the given asset
	pub fn accepts(&self, denom: &AssetId) -> bool {
		self.accepted_assets.iter().any(|asset| asset.denom == *denom)
	}

	/// Ensures no asset is accepted more than once.
	pub fn validate<Symbol>(&self) -> Result<(), ValuationError<AssetId, Symbol>> {
		for (i, asset) in self.accepted_assets.iter().enumerate() {
			if self.accepted_assets[..i].iter().any(|other| other.denom == asset.denom) {
				return Err(ValuationError::DuplicateAcceptedAsset(asset.denom.clone()));
			}
		}
		Ok(())
	}
}

/// The resolved price of an accepted asset and its conversion rates from and
/// into the index token.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct AssetPrice<AssetId, Symbol> {
	pub base_denom: AssetId,
	pub symbol_denom: Symbol,
	/// Price of one display unit in reference units
	pub price: Price,
	pub exponent: Exponent,
	/// Smallest units of the index token per smallest unit of the asset
	pub swap_rate: Price,
	/// Smallest units of the asset per smallest unit of the index token
	pub redeem_rate: Price,
}

impl<AssetId, Symbol> AssetPrice<AssetId, Symbol> {
	/// Creates a new entry, the rates are filled in once the index price is known
	pub fn new(base_denom: AssetId, symbol_denom: Symbol, price: Price, exponent: Exponent) -> Self {
		Self {
			base_denom,
			symbol_denom,
			price,
			exponent,
			swap_rate: Price::from_inner(0),
			redeem_rate: Price::from_inner(0),
		}
	}
}

/// The outcome of a valuation: the index token price and one entry per
/// accepted asset, in composition order.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct IndexPrices<AssetId, Symbol> {
	pub denom: AssetId,
	/// Price of one display unit of the index token in reference units
	pub price: Price,
	pub exponent: Exponent,
	pub assets: Vec<AssetPrice<AssetId, Symbol>>,
}

impl<AssetId: Clone + PartialEq, Symbol> IndexPrices<AssetId, Symbol> {
	/// A zero priced skeleton for the given index
	pub fn empty(index: &Index<AssetId>) -> Self {
		Self {
			denom: index.denom.clone(),
			price: Price::from_inner(0),
			exponent: index.exponent,
			assets: Vec::with_capacity(index.accepted_assets.len()),
		}
	}

	/// Replaces the entry of the same base denom, or appends a new one.
	pub fn set_price(&mut self, asset_price: AssetPrice<AssetId, Symbol>) {
		match self.assets.iter_mut().find(|asset| asset.base_denom == asset_price.base_denom) {
			Some(existing) => *existing = asset_price,
			None => self.assets.push(asset_price),
		}
	}

	pub fn price_by_base_denom(&self, denom: &AssetId) -> Result<&AssetPrice<AssetId, Symbol>, ValuationError<AssetId, Symbol>> {
		self.assets
			.iter()
			.find(|asset| asset.base_denom == *denom)
			.ok_or_else(|| ValuationError::AssetNotInIndex(denom.clone()))
	}

	/// Index token units received for `amount` units of the asset, truncated.
	pub fn swap_amount(&self, denom: &AssetId, amount: Balance) -> Result<Balance, ValuationError<AssetId, Symbol>> {
		self.price_by_base_denom(denom)?.swap_rate.checked_mul_int(amount).ok_or(ValuationError::Overflow)
	}

	/// Asset units received for `index_amount` units of the index token, truncated.
	pub fn redeem_amount(
		&self,
		denom: &AssetId,
		index_amount: Balance,
	) -> Result<Balance, ValuationError<AssetId, Symbol>> {
		self.price_by_base_denom(denom)?.redeem_rate.checked_mul_int(index_amount).ok_or(ValuationError::Overflow)
	}
}
