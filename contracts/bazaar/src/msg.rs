use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    /// Code ID of the store contract instantiated for approved owners.
    pub store_code_id: u64,
    /// Native denomination provisioned stores price their items in.
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Asks to become a store owner. The request's index in the queue
    /// is returned in the `index` attribute.
    RequestStoreOwnership { name: String, description: String },
    /// Approves the request at `index`, which must have been made by
    /// `requester`, and instantiates a store owned by the requester
    /// (only admins).
    ApproveRequest { index: u64, requester: String },
    /// Grants admin rights to an address (only admins).
    AddAdmin { address: String },
    /// Updates the code ID used when instantiating new stores (only
    /// admins). Existing stores are unaffected.
    UpdateStoreCodeId { store_code_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    /// Classifies an address as an admin, store owner, or neither.
    #[returns(cw_bazaar_access::Role)]
    Role { address: String },
    #[returns(bool)]
    IsAdmin { address: String },
    #[returns(bool)]
    IsStoreOwner { address: String },
    /// Returns the request at a position in the queue.
    #[returns(crate::state::StoreRequest)]
    Request { index: u64 },
    /// Returns the number of requests ever made.
    #[returns(u64)]
    RequestCount {},
    /// Returns the store owned by an address, if any.
    #[returns(Option<cosmwasm_std::Addr>)]
    Store { owner: String },
    /// Lists the store directory ordered by owner address.
    #[returns(Vec<StoreEntry>)]
    ListStores {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub struct StoreEntry {
    pub owner: cosmwasm_std::Addr,
    pub store: cosmwasm_std::Addr,
}

#[cw_serde]
pub struct MigrateMsg {}
