use cosmwasm_std::{DepsMut, Empty, MessageInfo, Response, StdResult};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::state::{BALANCES, CONFIG, OWNED, TOKEN_OWNERS};

/// Holder moves one guardian to `recipient`.
pub fn execute_transfer_guardian(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    token_id: u32,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let holder = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NotFound { token_id })?;
    if holder != info.sender {
        return Err(ContractError::Unauthorized);
    }

    OWNED.remove(deps.storage, (&holder, token_id));
    BALANCES.update(deps.storage, &holder, |held| -> StdResult<u32> {
        Ok(held.unwrap_or_default().saturating_sub(1))
    })?;

    TOKEN_OWNERS.save(deps.storage, token_id, &recipient)?;
    OWNED.save(deps.storage, (&recipient, token_id), &Empty {})?;
    BALANCES.update(deps.storage, &recipient, |held| -> StdResult<u32> {
        Ok(held.unwrap_or_default() + 1)
    })?;

    Ok(Response::new()
        .add_attribute("action", "transfer_guardian")
        .add_attribute("from", holder.to_string())
        .add_attribute("to", recipient.to_string())
        .add_attribute("token_id", token_id.to_string()))
}

/// Owner hands admin rights to `new_owner` in a single step.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", info.sender.to_string())
        .add_attribute("new_owner", config.owner.to_string()))
}
