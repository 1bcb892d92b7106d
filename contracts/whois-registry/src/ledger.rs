use cosmwasm_std::{Addr, Coin, MessageInfo};

use crate::error::ContractError;

/// Source of the fees the registry charges.
pub trait BalanceLedger {
    /// Debits `amount` from `account`, or fails with
    /// [`ContractError::InsufficientFunds`] leaving every balance untouched.
    fn deduct(&mut self, account: &str, amount: &[Coin]) -> Result<(), ContractError>;
}

/// Ledger backed by the funds attached to the executing message.
///
/// Only the sender holds a balance here. Whatever is not deducted by the end of
/// the message is handed back through [`FundsLedger::remaining`].
#[derive(Clone, Debug, PartialEq)]
pub struct FundsLedger {
    sender: Addr,
    funds: Vec<Coin>,
}

impl FundsLedger {
    pub fn new(info: &MessageInfo) -> Self {
        FundsLedger {
            sender: info.sender.clone(),
            funds: info.funds.clone(),
        }
    }

    /// Coins still unspent, zero amounts dropped.
    pub fn remaining(&self) -> Vec<Coin> {
        self.funds
            .iter()
            .filter(|c| !c.amount.is_zero())
            .cloned()
            .collect()
    }
}

impl BalanceLedger for FundsLedger {
    fn deduct(&mut self, account: &str, amount: &[Coin]) -> Result<(), ContractError> {
        let insufficient = || ContractError::InsufficientFunds {
            account: account.to_string(),
            required: format_coins(amount),
        };
        if amount.is_empty() {
            return Ok(());
        }
        if self.sender.as_str() != account {
            return Err(insufficient());
        }

        let mut funds = self.funds.clone();
        for coin in amount {
            let held = funds
                .iter_mut()
                .find(|c| c.denom == coin.denom)
                .ok_or_else(insufficient)?;
            held.amount = held
                .amount
                .checked_sub(coin.amount)
                .map_err(|_| insufficient())?;
        }
        self.funds = funds;
        Ok(())
    }
}

/// Renders coins the way prices are written, e.g. `10trycoin,3stake`.
pub fn format_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
