use cosmwasm_std::{OverflowError, Uint128};

use crate::state::Config;

/// Flat pricing: `count` guardians cost `count * unit_price`.
/// Quotes and purchases both go through here so an exact quote is always
/// accepted at the same supply level.
pub fn price_for(unit_price: Uint128, count: u32) -> Result<Uint128, OverflowError> {
    unit_price.checked_mul(Uint128::from(count))
}

pub fn native_price(config: &Config, count: u32) -> Result<Uint128, OverflowError> {
    price_for(config.native_price_per_guardian, count)
}

pub fn k9wt_price(config: &Config, count: u32) -> Result<Uint128, OverflowError> {
    price_for(config.k9wt_price_per_guardian, count)
}
