use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::fees::Params;
use crate::genesis::GenesisState;
use crate::state::{Config, WhoisRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the sender
    pub admin: Option<String>,
    /// Defaults to 10trycoin / 5trycoin / 1trycoin
    pub params: Option<Params>,
    pub genesis: Option<GenesisState>,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateWhois {
        name: String,
        address: String,
        price: String,
    },
    UpdateWhois {
        id: String,
        name: String,
        address: String,
        price: String,
    },
    DeleteWhois {
        id: String,
    },
    /// Replaces the whole fee schedule. Admin only.
    SetParams {
        create_whois_price: String,
        update_whois_price: String,
        delete_whois_price: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(WhoisResponse)]
    Whois { id: String },
    // ListWhois returns every record, ordered by id as a string
    #[returns(ListWhoisResponse)]
    ListWhois {},
    // ResolveName returns the address that the name resolves to
    #[returns(ResolveNameResponse)]
    ResolveName { name: String },
    #[returns(CreatorResponse)]
    Creator { id: String },
    #[returns(PriceResponse)]
    Price { id: String },
    #[returns(ExistsResponse)]
    Exists { id: String },
    #[returns(CountResponse)]
    Count {},
    #[returns(Params)]
    Params {},
    #[returns(ConfigResponse)]
    Config {},
    #[returns(GenesisState)]
    ExportGenesis {},
}

// We define a custom struct for each query response
#[cw_serde]
pub struct WhoisResponse {
    pub whois: Option<WhoisRecord>,
}

#[cw_serde]
pub struct ListWhoisResponse {
    pub whois: Vec<WhoisRecord>,
}

#[cw_serde]
pub struct ResolveNameResponse {
    pub address: Option<String>,
}

#[cw_serde]
pub struct CreatorResponse {
    pub creator: Option<String>,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Option<String>,
}

#[cw_serde]
pub struct ExistsResponse {
    pub exists: bool,
}

#[cw_serde]
pub struct CountResponse {
    pub count: i64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        ConfigResponse {
            admin: config.admin.into_string(),
        }
    }
}
