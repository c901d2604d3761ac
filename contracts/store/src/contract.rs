#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coin, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Order, OverflowError,
    OverflowOperation, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_bazaar_access::{authorize, Guard};
use cw_denom::validate_native_denom;
use cw_storage_plus::Bound;
use cw_utils::may_pay;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, StoreItem, BALANCE, CONFIG, ITEMS, SKU_COUNT};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-bazaar-store";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let denom = validate_native_denom(msg.denom)?.to_string();
    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            name: msg.name.clone(),
            description: msg.description,
            denom,
        },
    )?;
    SKU_COUNT.save(deps.storage, &0)?;
    BALANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("name", msg.name))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddItem {
            name,
            description,
            price,
        } => execute_add_item(deps, info, name, description, price),
        ExecuteMsg::Restock { sku, amount } => execute_restock(deps, info, sku, amount),
        ExecuteMsg::UpdatePrice { sku, price } => execute_update_price(deps, info, sku, price),
        ExecuteMsg::Purchase { sku, amount } => execute_purchase(deps, info, sku, amount),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, info),
    }
}

/// Loads the store config, failing unless `info.sender` is the owner.
fn owner_config(deps: Deps, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    authorize(deps.storage, &info.sender, Guard::Exactly(&config.owner))?;
    Ok(config)
}

fn require_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    owner_config(deps, info).map(|_| ())
}

fn load_item(deps: Deps, sku: u64) -> Result<StoreItem, ContractError> {
    ITEMS
        .may_load(deps.storage, sku)?
        .ok_or(ContractError::NotFound { sku })
}

pub fn execute_add_item(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    description: String,
    price: Uint128,
) -> Result<Response, ContractError> {
    require_owner(deps.as_ref(), &info)?;

    let sku = SKU_COUNT.update(deps.storage, |sku| -> Result<_, ContractError> {
        Ok(sku
            .checked_add(1)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Add, sku, 1))?)
    })?;

    ITEMS.save(
        deps.storage,
        sku,
        &StoreItem {
            sku,
            quantity: 0,
            price,
            name: name.clone(),
            description,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "add_item")
        .add_attribute("sku", sku.to_string())
        .add_attribute("name", name)
        .add_attribute("price", price))
}

pub fn execute_restock(
    deps: DepsMut,
    info: MessageInfo,
    sku: u64,
    amount: u64,
) -> Result<Response, ContractError> {
    require_owner(deps.as_ref(), &info)?;

    let mut item = load_item(deps.as_ref(), sku)?;
    item.quantity = item
        .quantity
        .checked_add(amount)
        .ok_or_else(|| OverflowError::new(OverflowOperation::Add, item.quantity, amount))?;
    ITEMS.save(deps.storage, sku, &item)?;

    Ok(Response::new()
        .add_attribute("action", "restock")
        .add_attribute("sku", sku.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("quantity", item.quantity.to_string()))
}

pub fn execute_update_price(
    deps: DepsMut,
    info: MessageInfo,
    sku: u64,
    price: Uint128,
) -> Result<Response, ContractError> {
    require_owner(deps.as_ref(), &info)?;

    let mut item = load_item(deps.as_ref(), sku)?;
    item.price = price;
    ITEMS.save(deps.storage, sku, &item)?;

    Ok(Response::new()
        .add_attribute("action", "update_price")
        .add_attribute("sku", sku.to_string())
        .add_attribute("price", price))
}

pub fn execute_purchase(
    deps: DepsMut,
    info: MessageInfo,
    sku: u64,
    amount: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut item = load_item(deps.as_ref(), sku)?;

    if amount > item.quantity {
        return Err(ContractError::InsufficientStock {
            available: item.quantity,
            requested: amount,
        });
    }

    // Funds in any other denom are rejected here.
    let paid = may_pay(&info, &config.denom)?;
    let expected = item.price.checked_mul(Uint128::from(amount))?;
    if paid != expected {
        return Err(ContractError::IncorrectPayment {
            expected,
            actual: paid,
        });
    }

    item.quantity -= amount;
    ITEMS.save(deps.storage, sku, &item)?;
    let balance = BALANCE.load(deps.storage)?.checked_add(paid)?;
    BALANCE.save(deps.storage, &balance)?;

    Ok(Response::new()
        .add_attribute("action", "purchase")
        .add_attribute("buyer", info.sender)
        .add_attribute("sku", sku.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("payment", paid))
}

pub fn execute_withdraw(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = owner_config(deps.as_ref(), &info)?;

    let balance = BALANCE.load(deps.storage)?;
    BALANCE.save(deps.storage, &Uint128::zero())?;

    let res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", config.owner.as_str())
        .add_attribute("amount", balance);

    // The bank module rejects empty sends, so an empty balance sends
    // nothing.
    if balance.is_zero() {
        return Ok(res);
    }

    Ok(res.add_message(BankMsg::Send {
        to_address: config.owner.into_string(),
        amount: vec![coin(balance.u128(), config.denom)],
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Item { sku } => to_json_binary(&ITEMS.load(deps.storage, sku)?),
        QueryMsg::ListItems { start_after, limit } => {
            to_json_binary(&query_list_items(deps, start_after, limit)?)
        }
        QueryMsg::Balance {} => {
            let denom = CONFIG.load(deps.storage)?.denom;
            let balance = BALANCE.load(deps.storage)?;
            to_json_binary(&coin(balance.u128(), denom))
        }
        QueryMsg::SkuCount {} => to_json_binary(&SKU_COUNT.load(deps.storage)?),
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

pub fn query_list_items(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<StoreItem>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    ITEMS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, item)| item))
        .collect()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
