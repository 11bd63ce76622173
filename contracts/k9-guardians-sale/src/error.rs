use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Sale hasn't started.")]
    SaleNotStarted,

    #[error("There aren't this many tokens left. Requested: {requested}, available: {available}")]
    InsufficientSupply { requested: u32, available: u32 },

    #[error("Insufficient payment: required {required}, sent {sent}")]
    InsufficientPayment { required: String, sent: String },

    #[error("K9WT transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Guardian not found: {token_id}")]
    NotFound { token_id: u32 },

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Invalid price: per-guardian prices must be > 0")]
    InvalidPrice,

    #[error("Invalid denom: expected {expected}, got {denom}")]
    InvalidDenom { expected: String, denom: String },

    #[error("Send exactly one coin denomination ({denom})")]
    MultipleDenoms { denom: String },

    #[error("No native funds to withdraw")]
    NothingToWithdraw,

    #[error("Cannot migrate from contract {name}")]
    InvalidMigration { name: String },
}
