use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::execute::mint::mint_guardians;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{
    Config, SaleState, CONFIG, DARK_THEME_CUTOFF, DEVELOPER_GRANT, MAX_SUPPLY, SALE_STATE,
};

const CONTRACT_NAME: &str = "crates.io:k9-guardians-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.native_price_per_guardian.is_zero() || msg.k9wt_price_per_guardian.is_zero() {
        return Err(ContractError::InvalidPrice);
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidDenom {
            expected: "a native denom".to_string(),
            denom: msg.native_denom,
        });
    }

    let config = Config {
        owner: info.sender,
        developer: deps.api.addr_validate(&msg.developer)?,
        k9wt_token: deps.api.addr_validate(&msg.k9wt_token)?,
        native_denom: msg.native_denom,
        native_price_per_guardian: msg.native_price_per_guardian,
        k9wt_price_per_guardian: msg.k9wt_price_per_guardian,
        max_supply: MAX_SUPPLY,
        dark_theme_cutoff: DARK_THEME_CUTOFF,
        base_uri: msg.base_uri,
        dark_theme_uri: msg.dark_theme_uri,
    };
    CONFIG.save(deps.storage, &config)?;

    let mut state = SaleState {
        total_issued: 0,
        sale_open: false,
        native_balance: Uint128::zero(),
        k9wt_balance: Uint128::zero(),
        total_native_received: Uint128::zero(),
        total_k9wt_received: Uint128::zero(),
    };
    mint_guardians(deps.storage, &mut state, &config.developer, DEVELOPER_GRANT)?;
    SALE_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("developer", config.developer.to_string())
        .add_attribute("k9wt_token", config.k9wt_token.to_string())
        .add_attribute("minted", DEVELOPER_GRANT.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Native coin is only accepted as payment for a native purchase
    if !matches!(msg, ExecuteMsg::BuyWithNative { .. }) {
        nonpayable(&info)?;
    }

    match msg {
        ExecuteMsg::StartSale {} => crate::execute::sale::execute_set_sale_open(deps, info, true),
        ExecuteMsg::StopSale {} => crate::execute::sale::execute_set_sale_open(deps, info, false),
        ExecuteMsg::BuyWithNative { count } => {
            crate::execute::buy_native::execute_buy_with_native(deps, env, info, count)
        }
        ExecuteMsg::BuyWithK9wt { count } => {
            crate::execute::buy_k9wt::execute_buy_with_k9wt(deps, env, info, count)
        }
        ExecuteMsg::MintToDeveloper { count } => {
            crate::execute::mint::execute_mint_to_developer(deps, env, info, count)
        }
        ExecuteMsg::BurnAvailableK9wt {} => {
            crate::execute::burn::execute_burn_available_k9wt(deps, env, info)
        }
        ExecuteMsg::WithdrawMoney { to_developer } => {
            crate::execute::withdraw::execute_withdraw_money(deps, env, info, to_developer)
        }
        ExecuteMsg::SetBaseUri { uri } => {
            crate::execute::uri::execute_set_base_uri(deps, info, uri)
        }
        ExecuteMsg::SetDarkThemeUri { uri } => {
            crate::execute::uri::execute_set_dark_theme_uri(deps, info, uri)
        }
        ExecuteMsg::TransferGuardian {
            recipient,
            token_id,
        } => crate::execute::transfer::execute_transfer_guardian(deps, info, recipient, token_id),
        ExecuteMsg::TransferOwnership { new_owner } => {
            crate::execute::transfer::execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&crate::query::query_status(deps)?),
        QueryMsg::NativePriceForTokens { count } => {
            to_json_binary(&crate::query::query_native_price(deps, count)?)
        }
        QueryMsg::K9wtPriceForTokens { count } => {
            to_json_binary(&crate::query::query_k9wt_price(deps, count)?)
        }
        QueryMsg::K9wtApprovalAmount { address } => {
            to_json_binary(&crate::query::query_k9wt_approval_amount(deps, env, address)?)
        }
        QueryMsg::Balance { address } => {
            to_json_binary(&crate::query::query_balance(deps, address)?)
        }
        QueryMsg::OwnerOf { token_id } => {
            to_json_binary(&crate::query::query_owner_of(deps, token_id)?)
        }
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_json_binary(&crate::query::query_tokens(deps, owner, start_after, limit)?),
        QueryMsg::TokenUri { token_id } => {
            to_json_binary(&crate::query::query_token_uri(deps, token_id)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            name: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
