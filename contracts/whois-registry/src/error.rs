use cosmwasm_std::StdError;
use thiserror::Error;

use crate::fees::FeeKind;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    /// Storage and (de)serialization faults. A stored value that fails to decode
    /// lands here and aborts the whole message.
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("key {id} doesn't exist")]
    NotFound { id: String },

    #[error("Name {name} is already registered")]
    NameExists { name: String },

    #[error("Name {name} is not in the expected format")]
    InvalidName { name: String },

    #[error("Address {address} is not in the expected format")]
    InvalidAddress { address: String },

    #[error("Invalid price {price}: {reason}")]
    InvalidPrice { price: String, reason: String },

    #[error("{kind} whois price cannot be empty")]
    EmptyPrice { kind: FeeKind },

    #[error("Insufficient funds: {account} cannot pay {required}")]
    InsufficientFunds { account: String, required: String },
}
