// Copyright 2021 ChainSafe Systems
// SPDX-License-Identifier: LGPL-3.0-only

//! Index token valuation
//!
//! Prices an index token from the market prices of its accepted assets and
//! the reserves backing it, and derives the per asset swap and redeem rates.
//! Everything in here is a pure function of the snapshot handed in by the
//! caller. The collaborators in [`primitives::traits`] are only read.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
mod mock;


pub mod error;
pub mod math;
pub mod price;
pub mod types;

pub use error::{MathError, ValuationError};
pub use price::{latest_price, quote, valuate};
pub use types::{AcceptedAsset, AssetPrice, Index, IndexPrices};
