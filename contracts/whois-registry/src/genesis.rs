use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult, Storage};

use crate::fees::init_default_params;
use crate::state::{all_whois, set_whois, set_whois_count, whois_count, WhoisRecord};

#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub whois_list: Vec<WhoisRecord>,
    /// Counter to resume from. Falls back to the number of records when absent.
    pub whois_count: Option<i64>,
}

/// Bulk-loads records as they are, without ownership or uniqueness checks.
///
/// The counter is raised past every numeric id in the list so that later creates
/// never mint an id that is already taken.
pub fn init_genesis(storage: &mut dyn Storage, genesis: &GenesisState) -> StdResult<()> {
    init_default_params(storage)?;

    for whois in &genesis.whois_list {
        set_whois(storage, whois)?;
    }

    let count = match genesis.whois_count {
        Some(count) if count < 0 => {
            return Err(StdError::generic_err(format!(
                "negative whois count {}",
                count
            )))
        }
        Some(count) => count,
        None => genesis.whois_list.len() as i64,
    };
    set_whois_count(storage, count.max(next_free_id(&genesis.whois_list)?));

    Ok(())
}

fn next_free_id(whois_list: &[WhoisRecord]) -> StdResult<i64> {
    whois_list
        .iter()
        .filter_map(|whois| whois.id.parse::<i64>().ok())
        .try_fold(0i64, |next, id| {
            let after = id
                .checked_add(1)
                .ok_or_else(|| StdError::generic_err("whois id overflow"))?;
            Ok(next.max(after))
        })
}

pub fn export_genesis(storage: &dyn Storage) -> StdResult<GenesisState> {
    Ok(GenesisState {
        whois_list: all_whois(storage)?,
        whois_count: Some(whois_count(storage)?),
    })
}
