use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::state::{CONFIG, SALE_STATE};

/// Owner-only: burn every K9WT this contract holds.
/// Burns the balance reported by the token contract, so K9WT sent here
/// outside of a purchase is destroyed as well.
pub fn execute_burn_available_k9wt(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let held: BalanceResponse = deps.querier.query_wasm_smart(
        config.k9wt_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    SALE_STATE.update(deps.storage, |mut state| -> Result<_, ContractError> {
        state.k9wt_balance = Uint128::zero();
        Ok(state)
    })?;

    let mut response = Response::new();
    if !held.balance.is_zero() {
        response = response.add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.k9wt_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Burn {
                amount: held.balance,
            })?,
            funds: vec![],
        }));
    }

    Ok(response
        .add_attribute("action", "burn_available_k9wt")
        .add_attribute("amount", held.balance.to_string()))
}
