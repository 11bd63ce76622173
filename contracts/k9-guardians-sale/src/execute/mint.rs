use cosmwasm_std::{Addr, DepsMut, Empty, Env, MessageInfo, Response, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{Config, SaleState, BALANCES, CONFIG, OWNED, SALE_STATE, TOKEN_OWNERS};

/// Rejects empty orders and orders that would push supply past `max_supply`.
pub(crate) fn check_supply(
    config: &Config,
    state: &SaleState,
    count: u32,
) -> Result<(), ContractError> {
    if count == 0 {
        return Err(ContractError::InvalidQuantity);
    }
    let available = state.remaining(config.max_supply);
    if count > available {
        return Err(ContractError::InsufficientSupply {
            requested: count,
            available,
        });
    }
    Ok(())
}

/// Issues `count` sequential ids to `recipient` and advances `total_issued`.
/// Returns the first and last id minted. Caller saves `state`.
pub(crate) fn mint_guardians(
    storage: &mut dyn Storage,
    state: &mut SaleState,
    recipient: &Addr,
    count: u32,
) -> StdResult<(u32, u32)> {
    let first = state.total_issued + 1;
    let last = state.total_issued + count;

    for token_id in first..=last {
        TOKEN_OWNERS.save(storage, token_id, recipient)?;
        OWNED.save(storage, (recipient, token_id), &Empty {})?;
    }
    BALANCES.update(storage, recipient, |held| -> StdResult<u32> {
        Ok(held.unwrap_or_default() + count)
    })?;

    state.total_issued = last;
    Ok((first, last))
}

/// Developer-only mint. Bypasses the sale gate and takes no payment.
pub fn execute_mint_to_developer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    count: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.developer {
        return Err(ContractError::Unauthorized);
    }

    let mut state = SALE_STATE.load(deps.storage)?;
    check_supply(&config, &state, count)?;

    let (first, last) = mint_guardians(deps.storage, &mut state, &config.developer, count)?;
    SALE_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "mint_to_developer")
        .add_attribute("developer", config.developer.to_string())
        .add_attribute("count", count.to_string())
        .add_attribute("first_token_id", first.to_string())
        .add_attribute("last_token_id", last.to_string())
        .add_attribute("total_supply", state.total_issued.to_string()))
}
