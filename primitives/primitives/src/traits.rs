// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! This contains the narrow read interfaces through which the valuation
//! reaches its collaborators. None of them are allowed to mutate state.

use crate::types::{AssetSettings, IndexBalances, MarketPrice};
use sp_std::vec::Vec;

/// Type that provides the mapping between an asset and its registry settings.
pub trait AssetRegistry<AssetId, Symbol> {
	/// Returns the symbol and the display exponent of the given asset.
	///
	/// `None` if the asset is not registered.
	fn asset_settings(&self, asset: &AssetId) -> Option<AssetSettings<Symbol>>;
}

/// An interface to access median price data.
pub trait PriceOracle<Symbol> {
	/// Returns all known median observations for every tracked symbol.
	///
	/// A symbol may appear several times with different heights, selecting
	/// the freshest one is up to the caller.
	fn all_median_prices(&self) -> Vec<MarketPrice<Symbol>>;
}

/// Provides the supply and reserve balances of an index.
pub trait ReserveProvider<AssetId> {
	/// Returns the balances of the index identified by its token denom.
	///
	/// `None` if no balances were ever recorded for that index.
	fn index_balances(&self, index: &AssetId) -> Option<IndexBalances<AssetId>>;
}
