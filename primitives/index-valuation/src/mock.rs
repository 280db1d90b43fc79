// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! In-memory collaborators used to test the valuation.

use crate::types::Index;
use primitives::{
	traits::{AssetRegistry, PriceOracle, ReserveProvider},
	AssetBalance, AssetSettings, Balance, BlockNumber, Exponent, IndexBalances, MarketPrice, Price,
};
use sp_runtime::FixedPointNumber;
use std::collections::BTreeMap;

pub(crate) type AssetId = &'static str;
pub(crate) type Symbol = &'static str;

pub(crate) const ME_USD: AssetId = "me/USD";
pub(crate) const INDEX_EXPONENT: Exponent = 6;

pub(crate) const USDT: AssetId = "ibc/usdt";
pub(crate) const USDT_SYMBOL: Symbol = "USDT";
pub(crate) const USDT_EXPONENT: Exponent = 6;

pub(crate) const WETH: AssetId = "ibc/weth";
pub(crate) const WETH_SYMBOL: Symbol = "WETH";
pub(crate) const WETH_EXPONENT: Exponent = 18;

pub(crate) const ATOM: AssetId = "ibc/atom";
pub(crate) const ATOM_SYMBOL: Symbol = "ATOM";
pub(crate) const ATOM_EXPONENT: Exponent = 6;

pub(crate) const UNKNOWN_ASSET: AssetId = "ibc/unknown";

/// One display unit of a token with the given exponent, in smallest units
pub(crate) fn units(exponent: Exponent) -> Balance {
	10u128.pow(exponent)
}

pub(crate) fn int(n: u128) -> Price {
	Price::saturating_from_integer(n)
}

pub(crate) fn price(n: u128, d: u128) -> Price {
	Price::checked_from_rational(n, d).unwrap()
}

pub(crate) fn observation(symbol: Symbol, price: Price, block_number: BlockNumber) -> MarketPrice<Symbol> {
	MarketPrice::new(symbol, price, block_number)
}

pub(crate) fn reserved(denom: AssetId, reserved: Balance) -> AssetBalance<AssetId> {
	AssetBalance::new(denom, 0, reserved, 0)
}

pub(crate) fn index(accepted_assets: Vec<AssetId>) -> Index<AssetId> {
	Index::new(ME_USD, INDEX_EXPONENT, accepted_assets)
}

#[derive(Default)]
pub(crate) struct MockRegistry {
	settings: BTreeMap<AssetId, AssetSettings<Symbol>>,
}

impl MockRegistry {
	pub(crate) fn with(mut self, asset: AssetId, symbol: Symbol, exponent: Exponent) -> Self {
		self.settings.insert(asset, AssetSettings::new(symbol, exponent));
		self
	}
}

impl AssetRegistry<AssetId, Symbol> for MockRegistry {
	fn asset_settings(&self, asset: &AssetId) -> Option<AssetSettings<Symbol>> {
		self.settings.get(asset).cloned()
	}
}

/// Registry knowing USDT, WETH and ATOM
pub(crate) fn registry() -> MockRegistry {
	MockRegistry::default()
		.with(USDT, USDT_SYMBOL, USDT_EXPONENT)
		.with(WETH, WETH_SYMBOL, WETH_EXPONENT)
		.with(ATOM, ATOM_SYMBOL, ATOM_EXPONENT)
}

pub(crate) struct MockOracle {
	pub prices: Vec<MarketPrice<Symbol>>,
}

impl PriceOracle<Symbol> for MockOracle {
	fn all_median_prices(&self) -> Vec<MarketPrice<Symbol>> {
		self.prices.clone()
	}
}

#[derive(Default)]
pub(crate) struct MockReserves {
	balances: BTreeMap<AssetId, IndexBalances<AssetId>>,
}

impl MockReserves {
	pub(crate) fn with(mut self, index: AssetId, balances: IndexBalances<AssetId>) -> Self {
		self.balances.insert(index, balances);
		self
	}
}

impl ReserveProvider<AssetId> for MockReserves {
	fn index_balances(&self, index: &AssetId) -> Option<IndexBalances<AssetId>> {
		self.balances.get(index).cloned()
	}
}
