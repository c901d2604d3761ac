use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    /// The store owner. Must be a valid account address.
    pub owner: String,
    pub name: String,
    pub description: String,
    /// Native denomination prices are quoted and paid in.
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Adds a new item with a quantity of zero (only owner). The
    /// assigned SKU is returned in the `sku` attribute.
    AddItem {
        name: String,
        description: String,
        /// Price of a single unit.
        price: Uint128,
    },
    /// Adds `amount` units to an existing item (only owner).
    Restock { sku: u64, amount: u64 },
    /// Sets the unit price of an existing item (only owner).
    UpdatePrice { sku: u64, price: Uint128 },
    /// Buys `amount` units of an item. Must be sent with exactly
    /// `amount * price` of the store's denom.
    Purchase { sku: u64, amount: u64 },
    /// Sends the store's entire balance to the owner (only owner).
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the store's owner, name, description and denom.
    #[returns(crate::state::Config)]
    Config {},
    /// Returns a single item by SKU.
    #[returns(crate::state::StoreItem)]
    Item { sku: u64 },
    /// Lists items in SKU order.
    #[returns(Vec<crate::state::StoreItem>)]
    ListItems {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Returns the proceeds available for withdrawal.
    #[returns(cosmwasm_std::Coin)]
    Balance {},
    /// Returns the most recently assigned SKU.
    #[returns(u64)]
    SkuCount {},
    #[returns(cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub struct MigrateMsg {}
