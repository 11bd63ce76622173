use cosmwasm_std::{coins, BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::mint::{check_supply, mint_guardians};
use crate::pricing::native_price;
use crate::state::{CONFIG, SALE_STATE};

/// Amount of `denom` attached to the call. No funds counts as zero.
fn paid_amount(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    match funds {
        [] => Ok(Uint128::zero()),
        [coin] if coin.denom == denom => Ok(coin.amount),
        [coin] => Err(ContractError::InvalidDenom {
            expected: denom.to_string(),
            denom: coin.denom.clone(),
        }),
        _ => Err(ContractError::MultipleDenoms {
            denom: denom.to_string(),
        }),
    }
}

/// User attaches native coin and receives `count` guardians.
/// Anything paid above the quoted price is sent back.
pub fn execute_buy_with_native(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    count: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = SALE_STATE.load(deps.storage)?;

    if !state.sale_open {
        return Err(ContractError::SaleNotStarted);
    }
    check_supply(&config, &state, count)?;

    let payment = paid_amount(&info.funds, &config.native_denom)?;
    let price = native_price(&config, count)?;
    if payment < price {
        return Err(ContractError::InsufficientPayment {
            required: price.to_string(),
            sent: payment.to_string(),
        });
    }
    let refund = payment - price;

    let (first, last) = mint_guardians(deps.storage, &mut state, &info.sender, count)?;
    state.native_balance += price;
    state.total_native_received += price;
    SALE_STATE.save(deps.storage, &state)?;

    let mut response = Response::new();
    if !refund.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(refund.u128(), &config.native_denom),
        });
    }

    Ok(response
        .add_attribute("action", "buy_with_native")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("count", count.to_string())
        .add_attribute("first_token_id", first.to_string())
        .add_attribute("last_token_id", last.to_string())
        .add_attribute("price", price.to_string())
        .add_attribute("refund", refund.to_string()))
}
