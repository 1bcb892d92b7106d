pub mod contract;
mod error;
pub mod fees;
pub mod genesis;
pub mod ledger;
pub mod msg;
pub mod price;
pub mod registry;
pub mod state;
pub mod validation;

pub use crate::error::ContractError;
