use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

pub const DEFAULT_CREATE_WHOIS_PRICE: &str = "10trycoin";
pub const DEFAULT_UPDATE_WHOIS_PRICE: &str = "5trycoin";
pub const DEFAULT_DELETE_WHOIS_PRICE: &str = "1trycoin";

/// The registry action a fee is charged for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeeKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeKind::Create => write!(f, "create"),
            FeeKind::Update => write!(f, "update"),
            FeeKind::Delete => write!(f, "delete"),
        }
    }
}

/// Fee schedule. Each price is a `<amount><denom>` string, e.g. `10trycoin`.
#[cw_serde]
pub struct Params {
    pub create_whois_price: String,
    pub update_whois_price: String,
    pub delete_whois_price: String,
}

impl Params {
    pub fn new(
        create_whois_price: impl Into<String>,
        update_whois_price: impl Into<String>,
        delete_whois_price: impl Into<String>,
    ) -> Self {
        Params {
            create_whois_price: create_whois_price.into(),
            update_whois_price: update_whois_price.into(),
            delete_whois_price: delete_whois_price.into(),
        }
    }

    pub fn price(&self, kind: FeeKind) -> &str {
        match kind {
            FeeKind::Create => &self.create_whois_price,
            FeeKind::Update => &self.update_whois_price,
            FeeKind::Delete => &self.delete_whois_price,
        }
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        for kind in [FeeKind::Create, FeeKind::Update, FeeKind::Delete].iter() {
            if self.price(*kind).is_empty() {
                return Err(ContractError::EmptyPrice { kind: *kind });
            }
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new(
            DEFAULT_CREATE_WHOIS_PRICE,
            DEFAULT_UPDATE_WHOIS_PRICE,
            DEFAULT_DELETE_WHOIS_PRICE,
        )
    }
}

pub const PARAMS: Item<Params> = Item::new("params");

pub fn load_params(storage: &dyn Storage) -> StdResult<Params> {
    PARAMS.load(storage)
}

pub fn fee_price(storage: &dyn Storage, kind: FeeKind) -> StdResult<String> {
    Ok(load_params(storage)?.price(kind).to_string())
}

/// Replaces all three prices at once, or none of them.
pub fn set_params(storage: &mut dyn Storage, params: &Params) -> Result<(), ContractError> {
    params.validate()?;
    PARAMS.save(storage, params)?;
    Ok(())
}

/// Installs the default schedule unless one is already persisted.
/// Returns whether the defaults were written.
pub fn init_default_params(storage: &mut dyn Storage) -> StdResult<bool> {
    if PARAMS.may_load(storage)?.is_some() {
        return Ok(false);
    }
    PARAMS.save(storage, &Params::default())?;
    Ok(true)
}
