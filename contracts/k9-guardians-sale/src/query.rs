use cosmwasm_std::{Deps, Env, Order, StdError, StdResult};
use cw20::{AllowanceResponse, Cw20QueryMsg};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ApprovalAmountResponse, BalanceResponse, ConfigResponse, OwnerOfResponse, PriceResponse,
    StatusResponse, TokenUriResponse, TokensResponse,
};
use crate::pricing::{k9wt_price, native_price};
use crate::state::{BALANCES, CONFIG, OWNED, SALE_STATE, TOKEN_OWNERS};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        developer: config.developer,
        k9wt_token: config.k9wt_token,
        native_denom: config.native_denom,
        native_price_per_guardian: config.native_price_per_guardian,
        k9wt_price_per_guardian: config.k9wt_price_per_guardian,
        max_supply: config.max_supply,
        dark_theme_cutoff: config.dark_theme_cutoff,
        base_uri: config.base_uri,
        dark_theme_uri: config.dark_theme_uri,
    })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = SALE_STATE.load(deps.storage)?;
    Ok(StatusResponse {
        total_supply: state.total_issued,
        max_supply: config.max_supply,
        sale_open: state.sale_open,
        native_balance: state.native_balance,
        k9wt_balance: state.k9wt_balance,
        total_native_received: state.total_native_received,
        total_k9wt_received: state.total_k9wt_received,
    })
}

fn ensure_quantity(count: u32) -> StdResult<()> {
    if count == 0 {
        return Err(StdError::generic_err(ContractError::InvalidQuantity.to_string()));
    }
    Ok(())
}

pub fn query_native_price(deps: Deps, count: u32) -> StdResult<PriceResponse> {
    ensure_quantity(count)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(PriceResponse {
        count,
        amount: native_price(&config, count)?,
        currency: config.native_denom,
    })
}

pub fn query_k9wt_price(deps: Deps, count: u32) -> StdResult<PriceResponse> {
    ensure_quantity(count)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(PriceResponse {
        count,
        amount: k9wt_price(&config, count)?,
        currency: config.k9wt_token.to_string(),
    })
}

pub fn query_k9wt_approval_amount(
    deps: Deps,
    env: Env,
    address: String,
) -> StdResult<ApprovalAmountResponse> {
    let owner = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        config.k9wt_token.to_string(),
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;
    Ok(ApprovalAmountResponse {
        allowance: allowance.allowance,
    })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_owner_of(deps: Deps, token_id: u32) -> StdResult<OwnerOfResponse> {
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("guardian {token_id}")))?;
    Ok(OwnerOfResponse { token_id, owner })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = OWNED
        .prefix(&addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<u32>>>()?;

    Ok(TokensResponse { tokens })
}

/// Ids up to the dark theme cutoff get the dark theme URI, the rest the
/// base URI. Both are returned verbatim.
pub fn query_token_uri(deps: Deps, token_id: u32) -> StdResult<TokenUriResponse> {
    let state = SALE_STATE.load(deps.storage)?;
    if token_id == 0 || token_id > state.total_issued {
        return Err(StdError::not_found(format!("guardian {token_id}")));
    }

    let config = CONFIG.load(deps.storage)?;
    let uri = if token_id <= config.dark_theme_cutoff {
        config.dark_theme_uri
    } else {
        config.base_uri
    };
    Ok(TokenUriResponse { token_id, uri })
}
