use cosmwasm_std::{Coin, StdError, StdResult, Storage};

use crate::error::ContractError;
use crate::fees::{fee_price, FeeKind};
use crate::ledger::BalanceLedger;
use crate::price::parse_price;
use crate::state::{
    find_whois_by_name, get_whois, has_whois, remove_whois, set_whois, set_whois_count,
    whois_count, WhoisRecord,
};
use crate::validation::WhoisPolicy;

/// Applies create, update and delete to the whois store.
///
/// Every operation validates first, then charges its fee through the ledger, and
/// only then writes. A failure at any step leaves the store as it was.
pub struct Registry<'a, L: ?Sized, P: ?Sized> {
    storage: &'a mut dyn Storage,
    ledger: &'a mut L,
    policy: &'a P,
}

impl<'a, L, P> Registry<'a, L, P>
where
    L: BalanceLedger + ?Sized,
    P: WhoisPolicy + ?Sized,
{
    pub fn new(storage: &'a mut dyn Storage, ledger: &'a mut L, policy: &'a P) -> Self {
        Registry {
            storage,
            ledger,
            policy,
        }
    }

    /// Registers `name` under a freshly minted id.
    pub fn create_whois(
        &mut self,
        creator: &str,
        name: &str,
        address: &str,
        price: &str,
    ) -> Result<(WhoisRecord, Vec<Coin>), ContractError> {
        self.validate(None, name, address, price)?;
        let fee = self.charge(creator, FeeKind::Create)?;

        let count = whois_count(self.storage)?;
        let next = count
            .checked_add(1)
            .ok_or_else(|| StdError::generic_err("whois count overflow"))?;
        let whois = WhoisRecord {
            id: count.to_string(),
            creator: creator.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            price: price.to_string(),
        };
        set_whois(self.storage, &whois)?;
        set_whois_count(self.storage, next);

        Ok((whois, fee))
    }

    /// Replaces every field of record `id` but the id itself.
    pub fn update_whois(
        &mut self,
        creator: &str,
        id: &str,
        name: &str,
        address: &str,
        price: &str,
    ) -> Result<(WhoisRecord, Vec<Coin>), ContractError> {
        self.load_owned(creator, id)?;
        self.validate(Some(id), name, address, price)?;
        let fee = self.charge(creator, FeeKind::Update)?;

        let whois = WhoisRecord {
            id: id.to_string(),
            creator: creator.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            price: price.to_string(),
        };
        set_whois(self.storage, &whois)?;

        Ok((whois, fee))
    }

    /// Removes record `id`. The counter is left alone so the id is never reissued.
    pub fn delete_whois(
        &mut self,
        creator: &str,
        id: &str,
    ) -> Result<(WhoisRecord, Vec<Coin>), ContractError> {
        let whois = self.load_owned(creator, id)?;
        let fee = self.charge(creator, FeeKind::Delete)?;
        remove_whois(self.storage, id);

        Ok((whois, fee))
    }

    fn load_owned(&self, creator: &str, id: &str) -> Result<WhoisRecord, ContractError> {
        if !has_whois(self.storage, id) {
            return Err(ContractError::NotFound { id: id.to_string() });
        }
        let whois = get_whois(self.storage, id)?
            .ok_or_else(|| ContractError::NotFound { id: id.to_string() })?;
        if whois.creator != creator {
            return Err(ContractError::Unauthorized {});
        }
        Ok(whois)
    }

    // `current` is the record being updated. Unlike the chain module this registry
    // replaces, resubmitting a record's own name on update is not a clash.
    fn validate(
        &self,
        current: Option<&str>,
        name: &str,
        address: &str,
        price: &str,
    ) -> Result<(), ContractError> {
        if let Some(existing) = find_whois_by_name(self.storage, name)? {
            if current != Some(existing.id.as_str()) {
                return Err(ContractError::NameExists {
                    name: name.to_string(),
                });
            }
        }
        if !self.policy.is_valid_name(name) {
            return Err(ContractError::InvalidName {
                name: name.to_string(),
            });
        }
        if !self.policy.is_valid_address(address) {
            return Err(ContractError::InvalidAddress {
                address: address.to_string(),
            });
        }
        parse_price(price)?;
        Ok(())
    }

    fn charge(&mut self, creator: &str, kind: FeeKind) -> Result<Vec<Coin>, ContractError> {
        let fee = parse_price(&fee_price(self.storage, kind)?)?;
        self.ledger.deduct(creator, &fee)?;
        Ok(fee)
    }
}

pub fn resolve_name(storage: &dyn Storage, name: &str) -> StdResult<Option<String>> {
    Ok(find_whois_by_name(storage, name)?.map(|whois| whois.address))
}

pub fn whois_creator(storage: &dyn Storage, id: &str) -> StdResult<Option<String>> {
    Ok(get_whois(storage, id)?.map(|whois| whois.creator))
}

pub fn whois_price(storage: &dyn Storage, id: &str) -> StdResult<Option<String>> {
    Ok(get_whois(storage, id)?.map(|whois| whois.price))
}

pub fn whois_exists(storage: &dyn Storage, id: &str) -> bool {
    has_whois(storage, id)
}
