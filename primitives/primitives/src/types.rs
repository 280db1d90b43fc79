// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! Shareable valuation types

use crate::{Balance, BlockNumber, Exponent, Price};
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::vec::Vec;

/// A single price observation reported by the oracle.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct MarketPrice<Symbol> {
	/// The symbol the price is reported under
	pub symbol: Symbol,
	/// The price of one display unit, measured in the reference unit
	pub price: Price,
	/// The height at which the price was observed
	pub block_number: BlockNumber,
}

impl<Symbol: PartialEq> MarketPrice<Symbol> {
	/// Whether this observation was reported for the given symbol
	pub fn is_for(&self, symbol: &Symbol) -> bool {
		self.symbol == *symbol
	}
}

impl<Symbol> MarketPrice<Symbol> {
	pub fn new(symbol: Symbol, price: Price, block_number: BlockNumber) -> Self {
		Self { symbol, price, block_number }
	}

	/// Whether this observation should be preferred over `other`.
	///
	/// The higher block wins. On equal heights the higher price wins, which
	/// equals taking the last entry of the observations sorted by
	/// `(block_number, price)`.
	pub fn supersedes(&self, other: &Self) -> bool {
		(self.block_number, self.price) > (other.block_number, other.price)
	}
}

/// Registry settings of an asset.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetSettings<Symbol> {
	/// The symbol used to look up the asset's market price
	pub symbol: Symbol,
	/// The asset's display exponent
	pub exponent: Exponent,
}

impl<Symbol> AssetSettings<Symbol> {
	pub fn new(symbol: Symbol, exponent: Exponent) -> Self {
		Self { symbol, exponent }
	}
}

/// Reserves of a single accepted asset held by an index.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetBalance<AssetId> {
	/// The identifier of the reserve asset
	pub denom: AssetId,
	/// Units lent out to the leverage module, still owned by the index
	pub leveraged: Balance,
	/// Units held in the index's reserves
	pub reserved: Balance,
	/// Collected fees, not backing the index token
	pub fees: Balance,
}

impl<AssetId> AssetBalance<AssetId> {
	pub fn new(denom: AssetId, leveraged: Balance, reserved: Balance, fees: Balance) -> Self {
		Self { denom, leveraged, reserved, fees }
	}

	/// Units backing the index token: `leveraged + reserved`.
	///
	/// Returns `None` on overflow.
	pub fn available_supply(&self) -> Option<Balance> {
		self.leveraged.checked_add(self.reserved)
	}
}

/// Supply of an index token together with the balances of its reserves.
#[derive(PartialEq, Eq, Clone, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexBalances<AssetId> {
	/// The total issued amount of the index token
	pub metoken_supply: Balance,
	/// Reserve balances, one per accepted asset
	pub asset_balances: Vec<AssetBalance<AssetId>>,
}

impl<AssetId: PartialEq> IndexBalances<AssetId> {
	pub fn new(metoken_supply: Balance, asset_balances: Vec<AssetBalance<AssetId>>) -> Self {
		Self { metoken_supply, asset_balances }
	}

	/// Returns the balance entry of the given asset, if any
	pub fn asset_balance(&self, denom: &AssetId) -> Option<&AssetBalance<AssetId>> {
		self.asset_balances.iter().find(|balance| balance.denom == *denom)
	}

	/// Whether no index token has been minted yet
	pub fn is_unminted(&self) -> bool {
		self.metoken_supply == 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sp_runtime::FixedPointNumber;

	fn observation(price: u128, block_number: BlockNumber) -> MarketPrice<&'static str> {
		MarketPrice::new("ATOM", Price::saturating_from_integer(price), block_number)
	}

	#[test]
	fn can_detect_symbol() {
		let price = observation(10, 1);
		assert!(price.is_for(&"ATOM"));
		assert!(!price.is_for(&"OSMO"));
	}

	#[test]
	fn higher_block_supersedes() {
		assert!(observation(1, 20).supersedes(&observation(5, 10)));
		assert!(!observation(5, 10).supersedes(&observation(1, 20)));
	}

	#[test]
	fn equal_heights_resolve_to_higher_price() {
		assert!(observation(6, 10).supersedes(&observation(5, 10)));
		assert!(!observation(5, 10).supersedes(&observation(6, 10)));
		assert!(!observation(5, 10).supersedes(&observation(5, 10)));
	}

	#[test]
	fn available_supply_excludes_fees() {
		let balance = AssetBalance::new("uatom", 300, 700, 50);
		assert_eq!(balance.available_supply(), Some(1_000));
	}

	#[test]
	fn available_supply_detects_overflow() {
		let balance = AssetBalance::new("uatom", Balance::MAX, 1, 0);
		assert_eq!(balance.available_supply(), None);
	}

	#[test]
	fn can_find_asset_balance() {
		let balances = IndexBalances::new(
			0,
			vec![AssetBalance::new("uatom", 0, 10, 0), AssetBalance::new("uosmo", 0, 20, 0)],
		);
		assert!(balances.is_unminted());
		assert_eq!(balances.asset_balance(&"uosmo").map(|b| b.reserved), Some(20));
		assert!(balances.asset_balance(&"uumee").is_none());
	}
}
