#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order, Reply, Response,
    StdResult, SubMsg, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_bazaar_access::{authorize, Guard, Role};
use cw_bazaar_store::msg::InstantiateMsg as StoreInstantiateMsg;
use cw_denom::validate_native_denom;
use cw_storage_plus::Bound;
use cw_utils::parse_reply_instantiate_data;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, StoreEntry};
use crate::state::{
    Config, RequestStatus, StoreRequest, ADMINS, CONFIG, PENDING_STORE_OWNER, REQUESTS,
    REQUEST_COUNT, STORES, STORE_OWNERS,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-bazaar";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const INSTANTIATE_STORE_REPLY_ID: u64 = 0;

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let denom = validate_native_denom(msg.denom)?.to_string();
    CONFIG.save(
        deps.storage,
        &Config {
            store_code_id: msg.store_code_id,
            denom,
        },
    )?;

    // The instantiator is the first admin.
    ADMINS.save(deps.storage, &info.sender, &Empty {})?;
    REQUEST_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequestStoreOwnership { name, description } => {
            execute_request_store_ownership(deps, info, name, description)
        }
        ExecuteMsg::ApproveRequest { index, requester } => {
            execute_approve_request(deps, env, info, index, requester)
        }
        ExecuteMsg::AddAdmin { address } => execute_add_admin(deps, info, address),
        ExecuteMsg::UpdateStoreCodeId { store_code_id } => {
            execute_update_store_code_id(deps, info, store_code_id)
        }
    }
}

pub fn execute_request_store_ownership(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    description: String,
) -> Result<Response, ContractError> {
    // Owners already have their store; a second request could never be
    // approved.
    if STORE_OWNERS.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyStoreOwner {
            address: info.sender.into_string(),
        });
    }

    let index = REQUEST_COUNT.load(deps.storage)?;
    REQUESTS.save(
        deps.storage,
        index,
        &StoreRequest {
            requester: info.sender.clone(),
            name,
            description,
            status: RequestStatus::Pending,
        },
    )?;
    REQUEST_COUNT.save(deps.storage, &(index + 1))?;

    Ok(Response::new()
        .add_attribute("action", "request_store_ownership")
        .add_attribute("requester", info.sender)
        .add_attribute("index", index.to_string()))
}

pub fn execute_approve_request(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    index: u64,
    requester: String,
) -> Result<Response, ContractError> {
    authorize(deps.storage, &info.sender, Guard::Member(&ADMINS))?;

    // Queued requesters are already validated, so an exact string match
    // is all that is needed.
    let mut request = match REQUESTS.may_load(deps.storage, index)? {
        Some(request)
            if request.status == RequestStatus::Pending
                && request.requester.as_str() == requester
                && !STORE_OWNERS.has(deps.storage, &request.requester) =>
        {
            request
        }
        _ => return Err(ContractError::InvalidRequest { index }),
    };
    let requester = request.requester.clone();

    if PENDING_STORE_OWNER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::Reentrancy);
    }

    request.status = RequestStatus::Processed;
    REQUESTS.save(deps.storage, index, &request)?;
    STORE_OWNERS.save(deps.storage, &requester, &Empty {})?;
    PENDING_STORE_OWNER.save(deps.storage, &requester)?;

    let config = CONFIG.load(deps.storage)?;
    let instantiate = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: config.store_code_id,
        msg: to_json_binary(&StoreInstantiateMsg {
            owner: requester.to_string(),
            name: request.name.clone(),
            description: request.description,
            denom: config.denom,
        })?,
        funds: vec![],
        label: format!("bazaar store: {}", request.name),
    };

    Ok(Response::new()
        .add_attribute("action", "approve_request")
        .add_attribute("index", index.to_string())
        .add_attribute("requester", requester)
        .add_submessage(SubMsg::reply_on_success(
            instantiate,
            INSTANTIATE_STORE_REPLY_ID,
        )))
}

pub fn execute_add_admin(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    authorize(deps.storage, &info.sender, Guard::Member(&ADMINS))?;

    let address = deps.api.addr_validate(&address)?;
    ADMINS.save(deps.storage, &address, &Empty {})?;

    Ok(Response::new()
        .add_attribute("action", "add_admin")
        .add_attribute("address", address))
}

pub fn execute_update_store_code_id(
    deps: DepsMut,
    info: MessageInfo,
    store_code_id: u64,
) -> Result<Response, ContractError> {
    authorize(deps.storage, &info.sender, Guard::Member(&ADMINS))?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.store_code_id = store_code_id;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "update_store_code_id")
        .add_attribute("store_code_id", store_code_id.to_string()))
}

/// Admin takes precedence over store owner.
pub fn classify(deps: Deps, address: &Addr) -> Role {
    if ADMINS.has(deps.storage, address) {
        Role::Admin
    } else if STORE_OWNERS.has(deps.storage, address) {
        Role::StoreOwner
    } else {
        Role::Unregistered
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Role { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&classify(deps, &address))
        }
        QueryMsg::IsAdmin { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&ADMINS.has(deps.storage, &address))
        }
        QueryMsg::IsStoreOwner { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&STORE_OWNERS.has(deps.storage, &address))
        }
        QueryMsg::Request { index } => to_json_binary(&REQUESTS.load(deps.storage, index)?),
        QueryMsg::RequestCount {} => to_json_binary(&REQUEST_COUNT.load(deps.storage)?),
        QueryMsg::Store { owner } => {
            let owner = deps.api.addr_validate(&owner)?;
            to_json_binary(&STORES.may_load(deps.storage, &owner)?)
        }
        QueryMsg::ListStores { start_after, limit } => {
            to_json_binary(&query_list_stores(deps, start_after, limit)?)
        }
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

pub fn query_list_stores(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<StoreEntry>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr: Addr;
    let start = match start_after {
        None => None,
        Some(addr_str) => {
            addr = deps.api.addr_validate(&addr_str)?;
            Some(Bound::exclusive(&addr))
        }
    };

    STORES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (owner, store) = item?;
            Ok(StoreEntry { owner, store })
        })
        .collect()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_STORE_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg)?;
            let store = deps.api.addr_validate(&res.contract_address)?;

            let owner = PENDING_STORE_OWNER.load(deps.storage)?;
            PENDING_STORE_OWNER.remove(deps.storage);
            STORES.save(deps.storage, &owner, &store)?;

            Ok(Response::new()
                .add_attribute("action", "store_created")
                .add_attribute("owner", owner)
                .add_attribute("store", store))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
