use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Code ID stores are instantiated from.
    pub store_code_id: u64,
    /// Native denomination every provisioned store prices in.
    pub denom: String,
}

#[cw_serde]
pub enum RequestStatus {
    /// Awaiting approval.
    Pending,
    /// Approved. Entries are never removed from the queue so that
    /// indexes stay stable.
    Processed,
}

#[cw_serde]
pub struct StoreRequest {
    pub requester: Addr,
    /// Name the store will be created with.
    pub name: String,
    /// Description the store will be created with.
    pub description: String,
    pub status: RequestStatus,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const ADMINS: Map<&Addr, Empty> = Map::new("admins");
pub const STORE_OWNERS: Map<&Addr, Empty> = Map::new("store_owners");

/// Store ownership requests keyed by their position in the queue.
pub const REQUESTS: Map<u64, StoreRequest> = Map::new("requests");
/// Number of requests ever made. Also the index of the next request.
pub const REQUEST_COUNT: Item<u64> = Item::new("request_count");

/// Store owner -> store contract.
pub const STORES: Map<&Addr, Addr> = Map::new("stores");

/// Temporarily holds the owner of the store being instantiated until
/// the instantiation reply arrives.
pub const PENDING_STORE_OWNER: Item<Addr> = Item::new("pending_store_owner");
