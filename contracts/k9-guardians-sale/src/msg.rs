use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 K9WT token contract address
    pub k9wt_token: String,
    /// Receives the initial guardian grant and may mint outside the sale
    pub developer: String,
    #[serde(default = "crate::state::default_native_denom")]
    pub native_denom: String,
    #[serde(default = "crate::state::default_native_price")]
    pub native_price_per_guardian: Uint128,
    #[serde(default = "crate::state::default_k9wt_price")]
    pub k9wt_price_per_guardian: Uint128,
    #[serde(default)]
    pub base_uri: String,
    #[serde(default)]
    pub dark_theme_uri: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: open the public sale
    StartSale {},

    /// Owner: close the public sale
    StopSale {},

    /// Buy guardians with native coin. Attach at least the quoted price;
    /// any excess is refunded.
    BuyWithNative { count: u32 },

    /// Buy guardians with K9WT. The buyer must first raise its allowance to
    /// this contract to at least the quoted price.
    BuyWithK9wt { count: u32 },

    /// Developer: mint guardians for free, regardless of sale state
    MintToDeveloper { count: u32 },

    /// Owner: burn every K9WT held by this contract
    BurnAvailableK9wt {},

    /// Owner: send the whole native balance to the developer or the owner
    WithdrawMoney { to_developer: bool },

    /// Owner: URI returned for ids above the dark theme cutoff
    SetBaseUri { uri: String },

    /// Owner: URI returned for ids up to the dark theme cutoff
    SetDarkThemeUri { uri: String },

    /// Holder: move a guardian to another address
    TransferGuardian { recipient: String, token_id: u32 },

    /// Owner: hand admin rights to another address
    TransferOwnership { new_owner: String },
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Supply and balances of the sale
    #[returns(StatusResponse)]
    Status {},

    #[returns(PriceResponse)]
    NativePriceForTokens { count: u32 },

    #[returns(PriceResponse)]
    K9wtPriceForTokens { count: u32 },

    /// K9WT allowance `address` has granted to this contract
    #[returns(ApprovalAmountResponse)]
    K9wtApprovalAmount { address: String },

    /// Number of guardians held by `address`
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u32 },

    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(TokenUriResponse)]
    TokenUri { token_id: u32 },
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub developer: Addr,
    pub k9wt_token: Addr,
    pub native_denom: String,
    pub native_price_per_guardian: Uint128,
    pub k9wt_price_per_guardian: Uint128,
    pub max_supply: u32,
    pub dark_theme_cutoff: u32,
    pub base_uri: String,
    pub dark_theme_uri: String,
}

#[cw_serde]
pub struct StatusResponse {
    pub total_supply: u32,
    pub max_supply: u32,
    pub sale_open: bool,
    /// Native coin collected since the last withdrawal
    pub native_balance: Uint128,
    /// K9WT collected since the last burn
    pub k9wt_balance: Uint128,
    pub total_native_received: Uint128,
    pub total_k9wt_received: Uint128,
}

#[cw_serde]
pub struct PriceResponse {
    pub count: u32,
    /// Native denom or the K9WT contract address
    pub currency: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ApprovalAmountResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u32,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub token_id: u32,
    pub owner: Addr,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u32>,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_id: u32,
    pub uri: String,
}
