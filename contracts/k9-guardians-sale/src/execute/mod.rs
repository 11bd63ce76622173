use cosmwasm_std::Addr;

use crate::error::ContractError;
use crate::state::Config;

pub mod burn;
pub mod buy_k9wt;
pub mod buy_native;
pub mod mint;
pub mod sale;
pub mod transfer;
pub mod uri;
pub mod withdraw;

pub(crate) fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
