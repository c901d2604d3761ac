#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod contract;
mod error;
pub mod msg;
pub mod state;


// so that consumers don't need a cw-bazaar-access dependency to consume
// this contract's queries.
pub use cw_bazaar_access::Role;

pub use crate::error::ContractError;
