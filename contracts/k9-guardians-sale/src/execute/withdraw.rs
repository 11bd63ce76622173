use cosmwasm_std::{BankMsg, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::state::{CONFIG, SALE_STATE};

/// Owner-only: send the contract's whole native balance to the developer
/// (`to_developer == true`) or to the owner.
/// An empty balance is an error: bank sends of zero coins are rejected by the chain.
pub fn execute_withdraw_money(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to_developer: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    // Query actual native balance
    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), &config.native_denom)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    SALE_STATE.update(deps.storage, |mut state| -> Result<_, ContractError> {
        state.native_balance = Uint128::zero();
        Ok(state)
    })?;

    let recipient = if to_developer {
        config.developer
    } else {
        config.owner
    };

    let send_msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![balance.clone()],
    });

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw_money")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("amount", balance.amount.to_string()))
}
