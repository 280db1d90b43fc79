// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! Primitive types used for index token valuation

#![cfg_attr(not(feature = "std"), no_std)]

use sp_runtime::FixedU128;

pub mod traits;
pub mod types;

pub use types::{AssetBalance, AssetSettings, IndexBalances, MarketPrice};

/// Balance of an asset or of the index token, in its smallest denomination.
pub type Balance = u128;

/// An index to a block. Used as the observation height of market prices.
pub type BlockNumber = u64;

/// Number of decimal places between the display unit and the smallest
/// denomination of a token.
pub type Exponent = u32;

/// The type to represent asset prices and any derived rates.
pub type Price = FixedU128;
