use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_bazaar_access::AccessError;
use cw_denom::DenomError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Denom(#[from] DenomError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("No item with SKU ({sku})")]
    NotFound { sku: u64 },

    #[error("Insufficient stock. Available ({available}), requested ({requested})")]
    InsufficientStock { available: u64, requested: u64 },

    #[error("Incorrect payment. Expected ({expected}), got ({actual})")]
    IncorrectPayment { expected: Uint128, actual: Uint128 },
}
