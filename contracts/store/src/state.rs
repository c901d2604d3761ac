use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The only address allowed to manage inventory and withdraw
    /// funds. Never changes after instantiation.
    pub owner: Addr,
    pub name: String,
    pub description: String,
    /// The native denomination prices are quoted and paid in.
    pub denom: String,
}

#[cw_serde]
pub struct StoreItem {
    pub sku: u64,
    /// Units currently available for purchase.
    pub quantity: u64,
    /// Price of a single unit in the smallest unit of `denom`.
    pub price: Uint128,
    pub name: String,
    pub description: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const ITEMS: Map<u64, StoreItem> = Map::new("items");
/// The most recently assigned SKU. Zero until the first item is added.
pub const SKU_COUNT: Item<u64> = Item::new("sku_count");
/// Proceeds from completed sales that have not yet been withdrawn.
pub const BALANCE: Item<Uint128> = Item::new("balance");
