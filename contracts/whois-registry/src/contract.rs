#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::fees::{load_params, set_params, Params};
use crate::genesis::{export_genesis, init_genesis};
use crate::ledger::{format_coins, FundsLedger};
use crate::msg::{
    ConfigResponse, CountResponse, CreatorResponse, ExecuteMsg, ExistsResponse, InstantiateMsg,
    ListWhoisResponse, PriceResponse, QueryMsg, ResolveNameResponse, WhoisResponse,
};
use crate::registry::{resolve_name, whois_creator, whois_exists, whois_price, Registry};
use crate::state::{all_whois, get_whois, whois_count, Config, CONFIG};
use crate::validation::DefaultPolicy;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-whois-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
        },
    )?;

    let genesis = msg.genesis.unwrap_or_default();
    init_genesis(deps.storage, &genesis)?;
    if let Some(params) = msg.params {
        set_params(deps.storage, &params)?;
    }

    let count = whois_count(deps.storage)?;
    deps.api.debug(&format!(
        "whois genesis loaded: {} records, count {}",
        genesis.whois_list.len(),
        count
    ));

    // instantiate charges nothing, so attached funds go straight back
    let response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("whois_count", count.to_string());
    Ok(refund_unspent(response, &info, &FundsLedger::new(&info)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateWhois {
            name,
            address,
            price,
        } => execute_create_whois(deps, info, name, address, price),
        ExecuteMsg::UpdateWhois {
            id,
            name,
            address,
            price,
        } => execute_update_whois(deps, info, id, name, address, price),
        ExecuteMsg::DeleteWhois { id } => execute_delete_whois(deps, info, id),
        ExecuteMsg::SetParams {
            create_whois_price,
            update_whois_price,
            delete_whois_price,
        } => execute_set_params(
            deps,
            info,
            Params::new(create_whois_price, update_whois_price, delete_whois_price),
        ),
    }
}

pub fn execute_create_whois(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    address: String,
    price: String,
) -> Result<Response, ContractError> {
    let mut ledger = FundsLedger::new(&info);
    let (whois, fee) = Registry::new(deps.storage, &mut ledger, &DefaultPolicy).create_whois(
        info.sender.as_str(),
        &name,
        &address,
        &price,
    )?;

    Ok(refund_unspent(Response::new(), &info, &ledger)
        .add_attribute("action", "create_whois")
        .add_attribute("id", whois.id)
        .add_attribute("creator", whois.creator)
        .add_attribute("name", whois.name)
        .add_attribute("fee", format_coins(&fee)))
}

pub fn execute_update_whois(
    deps: DepsMut,
    info: MessageInfo,
    id: String,
    name: String,
    address: String,
    price: String,
) -> Result<Response, ContractError> {
    let mut ledger = FundsLedger::new(&info);
    let (whois, fee) = Registry::new(deps.storage, &mut ledger, &DefaultPolicy).update_whois(
        info.sender.as_str(),
        &id,
        &name,
        &address,
        &price,
    )?;

    Ok(refund_unspent(Response::new(), &info, &ledger)
        .add_attribute("action", "update_whois")
        .add_attribute("id", whois.id)
        .add_attribute("creator", whois.creator)
        .add_attribute("name", whois.name)
        .add_attribute("fee", format_coins(&fee)))
}

pub fn execute_delete_whois(
    deps: DepsMut,
    info: MessageInfo,
    id: String,
) -> Result<Response, ContractError> {
    let mut ledger = FundsLedger::new(&info);
    let (whois, fee) = Registry::new(deps.storage, &mut ledger, &DefaultPolicy)
        .delete_whois(info.sender.as_str(), &id)?;

    Ok(refund_unspent(Response::new(), &info, &ledger)
        .add_attribute("action", "delete_whois")
        .add_attribute("id", whois.id)
        .add_attribute("creator", whois.creator)
        .add_attribute("name", whois.name)
        .add_attribute("fee", format_coins(&fee)))
}

pub fn execute_set_params(
    deps: DepsMut,
    info: MessageInfo,
    params: Params,
) -> Result<Response, ContractError> {
    // admin authentication
    let config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    set_params(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "set_params")
        .add_attribute("create_whois_price", params.create_whois_price)
        .add_attribute("update_whois_price", params.update_whois_price)
        .add_attribute("delete_whois_price", params.delete_whois_price))
}

/// Sends back whatever the sender attached beyond the fee.
fn refund_unspent(response: Response, info: &MessageInfo, ledger: &FundsLedger) -> Response {
    let remaining = ledger.remaining();
    if remaining.is_empty() {
        return response;
    }
    response.add_message(BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: remaining,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Whois { id } => to_binary(&WhoisResponse {
            whois: get_whois(deps.storage, &id)?,
        }),
        QueryMsg::ListWhois {} => to_binary(&ListWhoisResponse {
            whois: all_whois(deps.storage)?,
        }),
        QueryMsg::ResolveName { name } => to_binary(&ResolveNameResponse {
            address: resolve_name(deps.storage, &name)?,
        }),
        QueryMsg::Creator { id } => to_binary(&CreatorResponse {
            creator: whois_creator(deps.storage, &id)?,
        }),
        QueryMsg::Price { id } => to_binary(&PriceResponse {
            price: whois_price(deps.storage, &id)?,
        }),
        QueryMsg::Exists { id } => to_binary(&ExistsResponse {
            exists: whois_exists(deps.storage, &id),
        }),
        QueryMsg::Count {} => to_binary(&CountResponse {
            count: whois_count(deps.storage)?,
        }),
        QueryMsg::Params {} => to_binary(&load_params(deps.storage)?),
        QueryMsg::Config {} => to_binary(&ConfigResponse::from(CONFIG.load(deps.storage)?)),
        QueryMsg::ExportGenesis {} => to_binary(&export_genesis(deps.storage)?),
    }
}
