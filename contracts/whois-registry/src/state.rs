use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage};
use cosmwasm_storage::{PrefixedStorage, ReadonlyPrefixedStorage};
use cw_storage_plus::{Item, Map};

pub const WHOIS_KEY: &str = "Whois-value-";
pub const WHOIS_COUNT_KEY: &[u8] = b"Whois-count-";

#[cw_serde]
pub struct Config {
    /// allowed to change the fee schedule
    pub admin: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct WhoisRecord {
    pub id: String,
    pub creator: String,
    pub name: String,
    pub address: String,
    pub price: String,
}

/// Whois records keyed by id. Iteration follows the byte order of the id,
/// so "10" comes before "2".
pub const WHOIS: Map<&str, WhoisRecord> = Map::new(WHOIS_KEY);

/// Number of whois records ever created, 0 when nothing was stored yet.
pub fn whois_count(storage: &dyn Storage) -> StdResult<i64> {
    let store = ReadonlyPrefixedStorage::new(storage, WHOIS_COUNT_KEY);
    match store.get(WHOIS_COUNT_KEY) {
        None => Ok(0),
        Some(bz) => std::str::from_utf8(&bz)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| StdError::parse_err("i64", "cannot decode whois count")),
    }
}

/// Stored as the ASCII decimal string of the count.
pub fn set_whois_count(storage: &mut dyn Storage, count: i64) {
    let mut store = PrefixedStorage::new(storage, WHOIS_COUNT_KEY);
    store.set(WHOIS_COUNT_KEY, count.to_string().as_bytes());
}

pub fn set_whois(storage: &mut dyn Storage, whois: &WhoisRecord) -> StdResult<()> {
    WHOIS.save(storage, &whois.id, whois)
}

pub fn get_whois(storage: &dyn Storage, id: &str) -> StdResult<Option<WhoisRecord>> {
    WHOIS.may_load(storage, id)
}

pub fn has_whois(storage: &dyn Storage, id: &str) -> bool {
    WHOIS.has(storage, id)
}

pub fn remove_whois(storage: &mut dyn Storage, id: &str) {
    WHOIS.remove(storage, id)
}

pub fn all_whois(storage: &dyn Storage) -> StdResult<Vec<WhoisRecord>> {
    WHOIS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, whois)| whois))
        .collect()
}

/// First record, in id order, whose name matches.
pub fn find_whois_by_name(storage: &dyn Storage, name: &str) -> StdResult<Option<WhoisRecord>> {
    for item in WHOIS.range(storage, None, None, Order::Ascending) {
        let (_, whois) = item?;
        if whois.name == name {
            return Ok(Some(whois));
        }
    }
    Ok(None)
}
