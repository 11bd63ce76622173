use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::state::{CONFIG, SALE_STATE};

/// Owner: open or close the public sale. Setting the current value again is a no-op.
pub fn execute_set_sale_open(
    deps: DepsMut,
    info: MessageInfo,
    open: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    SALE_STATE.update(deps.storage, |mut state| -> Result<_, ContractError> {
        state.sale_open = open;
        Ok(state)
    })?;

    let action = if open { "start_sale" } else { "stop_sale" };
    Ok(Response::new()
        .add_attribute("action", action)
        .add_attribute("sale_open", open.to_string()))
}
