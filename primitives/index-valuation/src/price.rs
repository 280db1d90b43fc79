// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! Valuation of an index token and its accepted assets.

use crate::{
	error::ValuationError,
	math,
	types::{AssetPrice, Index, IndexPrices},
};
use primitives::{
	traits::{AssetRegistry, PriceOracle, ReserveProvider},
	IndexBalances, MarketPrice, Price,
};
use sp_runtime::traits::CheckedAdd;
use sp_std::fmt::Debug;

const LOG_TARGET: &str = "index-valuation";

type Error<AssetId, Symbol> = ValuationError<AssetId, Symbol>;

/// Selects the freshest observation for `symbol`.
///
/// Among observations at the same height the one with the highest price is
/// chosen, so the outcome does not depend on the order of `prices`.
pub fn latest_price<'a, Symbol: PartialEq>(
	prices: &'a [MarketPrice<Symbol>],
	symbol: &Symbol,
) -> Option<&'a MarketPrice<Symbol>> {
	prices.iter().filter(|price| price.is_for(symbol)).fold(None, |latest, price| match latest {
		Some(latest) if !price.supersedes(latest) => Some(latest),
		_ => Some(price),
	})
}

/// Calculates the index token price and the swap and redeem rates of all its
/// accepted assets from the given snapshot of balances and prices.
///
/// As long as no index token was minted, the price is the mean of the
/// accepted assets' prices. Afterwards it is the value of the available
/// reserves divided by the supply.
pub fn valuate<AssetId, Symbol, R>(
	registry: &R,
	index: &Index<AssetId>,
	balances: &IndexBalances<AssetId>,
	prices: &[MarketPrice<Symbol>],
) -> Result<IndexPrices<AssetId, Symbol>, ValuationError<AssetId, Symbol>>
where
	AssetId: Clone + PartialEq + Debug,
	Symbol: Clone + PartialEq + Debug,
	R: AssetRegistry<AssetId, Symbol>,
{
	index.validate::<Symbol>()?;

	let mut index_prices = IndexPrices::empty(index);
	let mut total_value = Price::from_inner(0);

	for accepted in &index.accepted_assets {
		let asset = &accepted.denom;
		let settings = match registry.asset_settings(asset) {
			Some(settings) => settings,
			None => return Err(ValuationError::AssetConfigNotFound(asset.clone())),
		};

		let price = match latest_price(prices, &settings.symbol) {
			Some(observation) => observation.price,
			None => {
				log::warn!(target: LOG_TARGET, "no price observed for {:?}", settings.symbol);
				return Err(ValuationError::PriceUnavailable(settings.symbol));
			}
		};
		log::debug!(target: LOG_TARGET, "resolved price of {:?} ({:?}): {:?}", asset, settings.symbol, price);

		// unminted indexes are valued by the sum of the asset prices
		let asset_value = if balances.is_unminted() {
			price
		} else {
			let balance = match balances.asset_balance(asset) {
				Some(balance) => balance,
				None => {
					log::error!(target: LOG_TARGET, "balance of accepted asset {:?} missing for {:?}", asset, index.denom);
					return Err(ValuationError::ReserveBalanceMissing(asset.clone()));
				}
			};
			let available = balance.available_supply().ok_or(Error::<AssetId, Symbol>::Overflow)?;
			math::value_in_reference(available, price, settings.exponent)
				.map_err(|err| Error::<AssetId, Symbol>::from_math(err, asset))?
		};
		total_value = total_value.checked_add(&asset_value).ok_or(Error::<AssetId, Symbol>::Overflow)?;

		index_prices.set_price(AssetPrice::new(asset.clone(), settings.symbol, price, settings.exponent));
	}

	index_prices.price = if balances.is_unminted() {
		let count = index.accepted_assets.len() as u128;
		if count == 0 {
			return Err(ValuationError::NoAcceptedAssets);
		}
		Price::from_inner(total_value.into_inner() / count)
	} else {
		math::price_in_reference(balances.metoken_supply, total_value, index.exponent)
			.map_err(|err| Error::<AssetId, Symbol>::from_math(err, &index.denom))?
	};

	let index_price = index_prices.price;
	let index_exponent = index_prices.exponent;
	for asset in index_prices.assets.iter_mut() {
		asset.swap_rate = math::rate(asset.price, index_price, asset.exponent, index_exponent)
			.map_err(|err| Error::<AssetId, Symbol>::from_math(err, &asset.base_denom))?;
		asset.redeem_rate = math::rate(index_price, asset.price, index_exponent, asset.exponent)
			.map_err(|err| Error::<AssetId, Symbol>::from_math(err, &asset.base_denom))?;
	}

	log::debug!(target: LOG_TARGET, "price of {:?}: {:?}", index.denom, index_price);
	Ok(index_prices)
}

/// Reads a snapshot from the collaborators and values the index on it.
///
/// Balances and prices are each read exactly once before any arithmetic
/// happens.
pub fn quote<AssetId, Symbol, R, O, P>(
	registry: &R,
	oracle: &O,
	reserves: &P,
	index: &Index<AssetId>,
) -> Result<IndexPrices<AssetId, Symbol>, ValuationError<AssetId, Symbol>>
where
	AssetId: Clone + PartialEq + Debug,
	Symbol: Clone + PartialEq + Debug,
	R: AssetRegistry<AssetId, Symbol>,
	O: PriceOracle<Symbol>,
	P: ReserveProvider<AssetId>,
{
	let balances = match reserves.index_balances(&index.denom) {
		Some(balances) => balances,
		None => return Err(ValuationError::IndexNotFound(index.denom.clone())),
	};
	let prices = oracle.all_median_prices();
	valuate(registry, index, &balances, &prices)
}
