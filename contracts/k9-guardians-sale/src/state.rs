use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};

/// Hard cap on guardians ever issued.
pub const MAX_SUPPLY: u32 = 1000;

/// Guardians granted to the developer at instantiation.
pub const DEVELOPER_GRANT: u32 = 10;

/// Ids up to and including this one resolve to the dark theme URI.
pub const DARK_THEME_CUTOFF: u32 = 100;

pub fn default_native_denom() -> String {
    "uaxm".to_string()
}

/// 0.015 of a 6-decimal native coin.
pub fn default_native_price() -> Uint128 {
    Uint128::new(15_000)
}

/// 10 guardians cost 2_000_000 micro-K9WT.
pub fn default_k9wt_price() -> Uint128 {
    Uint128::new(200_000)
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub developer: Addr,
    /// CW20 token contract address (K9WT)
    pub k9wt_token: Addr,
    pub native_denom: String,
    /// Flat price of one guardian in `native_denom`
    pub native_price_per_guardian: Uint128,
    /// Flat price of one guardian in micro-K9WT
    pub k9wt_price_per_guardian: Uint128,
    pub max_supply: u32,
    pub dark_theme_cutoff: u32,
    pub base_uri: String,
    pub dark_theme_uri: String,
}

#[cw_serde]
pub struct SaleState {
    /// Highest guardian id issued so far (ids are sequential from 1)
    pub total_issued: u32,
    pub sale_open: bool,
    /// Native coin collected and not yet withdrawn
    pub native_balance: Uint128,
    /// K9WT collected and not yet burned
    pub k9wt_balance: Uint128,
    pub total_native_received: Uint128,
    pub total_k9wt_received: Uint128,
}

impl SaleState {
    pub fn remaining(&self, max_supply: u32) -> u32 {
        max_supply.saturating_sub(self.total_issued)
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const SALE_STATE: Item<SaleState> = Item::new("sale_state");

/// token_id -> current holder
pub const TOKEN_OWNERS: Map<u32, Addr> = Map::new("token_owners");

/// (holder, token_id) index for paging a holder's guardians
pub const OWNED: Map<(&Addr, u32), Empty> = Map::new("owned");

/// holder -> number of guardians held
pub const BALANCES: Map<&Addr, u32> = Map::new("balances");
