use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::execute::mint::{check_supply, mint_guardians};
use crate::pricing::k9wt_price;
use crate::state::{CONFIG, SALE_STATE};

/// User pays with K9WT previously approved to this contract.
/// The price is pulled with a CW20 `TransferFrom`; if the token contract
/// rejects it the whole purchase reverts.
pub fn execute_buy_with_k9wt(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    count: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = SALE_STATE.load(deps.storage)?;

    if !state.sale_open {
        return Err(ContractError::SaleNotStarted);
    }
    check_supply(&config, &state, count)?;

    let price = k9wt_price(&config, count)?;

    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        config.k9wt_token.to_string(),
        &Cw20QueryMsg::Allowance {
            owner: info.sender.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;
    if allowance.expires.is_expired(&env.block) {
        return Err(ContractError::TransferFailed {
            reason: "allowance expired".to_string(),
        });
    }
    if allowance.allowance < price {
        return Err(ContractError::TransferFailed {
            reason: format!("allowance {} is below price {}", allowance.allowance, price),
        });
    }

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.k9wt_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: info.sender.to_string(),
        },
    )?;
    if balance.balance < price {
        return Err(ContractError::TransferFailed {
            reason: format!("balance {} is below price {}", balance.balance, price),
        });
    }

    let (first, last) = mint_guardians(deps.storage, &mut state, &info.sender, count)?;
    state.k9wt_balance += price;
    state.total_k9wt_received += price;
    SALE_STATE.save(deps.storage, &state)?;

    let pull_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.k9wt_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount: price,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull_msg)
        .add_attribute("action", "buy_with_k9wt")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("count", count.to_string())
        .add_attribute("first_token_id", first.to_string())
        .add_attribute("last_token_id", last.to_string())
        .add_attribute("price", price.to_string()))
}
