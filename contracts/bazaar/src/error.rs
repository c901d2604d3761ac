use cosmwasm_std::StdError;
use cw_bazaar_access::AccessError;
use cw_denom::DenomError;
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Denom(#[from] DenomError),

    #[error("{0}")]
    ParseReplyError(#[from] ParseReplyError),

    #[error("Invalid store ownership request ({index})")]
    InvalidRequest { index: u64 },

    #[error("Address ({address}) is already a store owner")]
    AlreadyStoreOwner { address: String },

    #[error("reentered bazaar during store instantiation")]
    Reentrancy,

    #[error("Got a submessage reply with unknown id: {id}")]
    UnknownReplyId { id: u64 },
}
