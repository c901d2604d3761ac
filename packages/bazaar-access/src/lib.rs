#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Storage};
use cw_storage_plus::Map;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("Unauthorized")]
    Unauthorized {},
}

/// The role an address holds on the bazaar.
#[cw_serde]
pub enum Role {
    /// May approve store ownership requests and add other admins.
    Admin,
    /// Owns a store provisioned by the bazaar.
    StoreOwner,
    /// Neither of the above.
    Unregistered,
}

/// A requirement the sender of a message must satisfy before the
/// message is allowed to modify state.
pub enum Guard<'a> {
    /// The sender must be a member of the set stored in this map.
    Member(&'a Map<'a, &'a Addr, Empty>),
    /// The sender must be exactly this address.
    Exactly(&'a Addr),
}

/// Checks that `sender` satisfies `guard`. Performs no writes.
pub fn authorize(storage: &dyn Storage, sender: &Addr, guard: Guard) -> Result<(), AccessError> {
    let allowed = match guard {
        Guard::Member(set) => set.has(storage, sender),
        Guard::Exactly(addr) => addr == sender,
    };
    if allowed {
        Ok(())
    } else {
        Err(AccessError::Unauthorized {})
    }
}
