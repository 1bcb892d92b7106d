//! Runs the registry inside a cw-multi-test `App` so that fees move real bank
//! balances between the sender and the contract.

use cosmwasm_std::{coins, Addr, Coin, Empty};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use cw_whois_registry::contract::{execute, instantiate, query};
use cw_whois_registry::fees::Params;
use cw_whois_registry::genesis::GenesisState;
use cw_whois_registry::msg::{
    CountResponse, ExecuteMsg, ExistsResponse, InstantiateMsg, ListWhoisResponse, QueryMsg,
    ResolveNameResponse, WhoisResponse,
};
use cw_whois_registry::ContractError;

const ADMIN: &str = "admin";
const ALICE: &str = "alice";
const BOB: &str = "bob";
const DENOM: &str = "trycoin";

fn whois_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(execute, instantiate, query);
    Box::new(contract)
}

fn mock_app() -> App {
    App::new(|router, _, storage| {
        for account in [ALICE, BOB].iter() {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(*account), coins(100, DENOM))
                .unwrap();
        }
    })
}

fn instantiate_registry(app: &mut App, genesis: Option<GenesisState>) -> Addr {
    let code_id = app.store_code(whois_contract());
    let msg = InstantiateMsg {
        admin: None,
        params: None,
        genesis,
    };
    app.instantiate_contract(code_id, Addr::unchecked(ADMIN), &msg, &[], "whois", None)
        .unwrap()
}

fn balance(app: &App, account: &str) -> u128 {
    app.wrap()
        .query_balance(account, DENOM)
        .unwrap()
        .amount
        .u128()
}

fn count(app: &App, registry: &Addr) -> i64 {
    let res: CountResponse = app
        .wrap()
        .query_wasm_smart(registry, &QueryMsg::Count {})
        .unwrap();
    res.count
}

fn assert_contract_err(err: anyhow::Error, expected: ContractError) {
    assert_eq!(err.root_cause().to_string(), expected.to_string());
}

#[test]
fn register_update_delete_debits_fees() {
    let mut app = mock_app();
    let registry = instantiate_registry(&mut app, None);

    let create = ExecuteMsg::CreateWhois {
        name: "bob.id".to_string(),
        address: "0xabc".to_string(),
        price: "10trycoin".to_string(),
    };
    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &create,
        &coins(10, DENOM),
    )
    .unwrap();
    assert_eq!(balance(&app, ALICE), 90);
    assert_eq!(balance(&app, registry.as_str()), 10);

    let res: WhoisResponse = app
        .wrap()
        .query_wasm_smart(&registry, &QueryMsg::Whois { id: "0".to_string() })
        .unwrap();
    let whois = res.whois.unwrap();
    assert_eq!(whois.creator, ALICE);
    assert_eq!(whois.name, "bob.id");

    let update = ExecuteMsg::UpdateWhois {
        id: "0".to_string(),
        name: "bob2.id".to_string(),
        address: "0xdef".to_string(),
        price: "5trycoin".to_string(),
    };
    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &update,
        &coins(5, DENOM),
    )
    .unwrap();
    assert_eq!(balance(&app, ALICE), 85);

    let res: ResolveNameResponse = app
        .wrap()
        .query_wasm_smart(
            &registry,
            &QueryMsg::ResolveName {
                name: "bob2.id".to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.address, Some("0xdef".to_string()));

    let delete = ExecuteMsg::DeleteWhois { id: "0".to_string() };
    let err = app
        .execute_contract(
            Addr::unchecked(BOB),
            registry.clone(),
            &delete,
            &coins(1, DENOM),
        )
        .unwrap_err();
    assert_contract_err(err, ContractError::Unauthorized {});
    // the failed message is reverted and bob is not charged
    assert_eq!(balance(&app, BOB), 100);

    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &delete,
        &coins(1, DENOM),
    )
    .unwrap();
    assert_eq!(balance(&app, ALICE), 84);
    assert_eq!(balance(&app, registry.as_str()), 16);

    let res: ExistsResponse = app
        .wrap()
        .query_wasm_smart(&registry, &QueryMsg::Exists { id: "0".to_string() })
        .unwrap();
    assert!(!res.exists);
    assert_eq!(count(&app, &registry), 1);
}

#[test]
fn overpayment_is_refunded() {
    let mut app = mock_app();
    let registry = instantiate_registry(&mut app, None);

    let create = ExecuteMsg::CreateWhois {
        name: "carol.id".to_string(),
        address: "0xabc".to_string(),
        price: "1trycoin".to_string(),
    };
    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &create,
        &coins(25, DENOM),
    )
    .unwrap();
    assert_eq!(balance(&app, ALICE), 90);
    assert_eq!(balance(&app, registry.as_str()), 10);
}

#[test]
fn underpayment_and_duplicates_are_rejected() {
    let mut app = mock_app();
    let registry = instantiate_registry(&mut app, None);

    let create = ExecuteMsg::CreateWhois {
        name: "bob.id".to_string(),
        address: "0xabc".to_string(),
        price: "10trycoin".to_string(),
    };
    let err = app
        .execute_contract(
            Addr::unchecked(ALICE),
            registry.clone(),
            &create,
            &coins(9, DENOM),
        )
        .unwrap_err();
    assert_contract_err(
        err,
        ContractError::InsufficientFunds {
            account: ALICE.to_string(),
            required: "10trycoin".to_string(),
        },
    );
    assert_eq!(balance(&app, ALICE), 100);
    assert_eq!(count(&app, &registry), 0);

    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &create,
        &coins(10, DENOM),
    )
    .unwrap();
    let err = app
        .execute_contract(
            Addr::unchecked(BOB),
            registry.clone(),
            &create,
            &coins(10, DENOM),
        )
        .unwrap_err();
    assert_contract_err(
        err,
        ContractError::NameExists {
            name: "bob.id".to_string(),
        },
    );
    assert_eq!(balance(&app, BOB), 100);
    assert_eq!(count(&app, &registry), 1);
}

#[test]
fn admin_changes_fee_schedule() {
    let mut app = mock_app();
    let registry = instantiate_registry(&mut app, None);

    let set_params = ExecuteMsg::SetParams {
        create_whois_price: "3trycoin".to_string(),
        update_whois_price: "2trycoin".to_string(),
        delete_whois_price: "1trycoin".to_string(),
    };
    let err = app
        .execute_contract(Addr::unchecked(ALICE), registry.clone(), &set_params, &[])
        .unwrap_err();
    assert_contract_err(err, ContractError::Unauthorized {});

    app.execute_contract(Addr::unchecked(ADMIN), registry.clone(), &set_params, &[])
        .unwrap();
    let params: Params = app
        .wrap()
        .query_wasm_smart(&registry, &QueryMsg::Params {})
        .unwrap();
    assert_eq!(params, Params::new("3trycoin", "2trycoin", "1trycoin"));

    let create = ExecuteMsg::CreateWhois {
        name: "cheap.id".to_string(),
        address: "0xabc".to_string(),
        price: "1trycoin".to_string(),
    };
    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &create,
        &coins(3, DENOM),
    )
    .unwrap();
    assert_eq!(balance(&app, ALICE), 97);
}

#[test]
fn exported_genesis_seeds_a_new_registry() {
    let mut app = mock_app();
    let registry = instantiate_registry(&mut app, None);

    for name in ["a1.id", "a2.id", "a3.id"].iter() {
        let create = ExecuteMsg::CreateWhois {
            name: name.to_string(),
            address: "0xabc".to_string(),
            price: "1trycoin".to_string(),
        };
        app.execute_contract(
            Addr::unchecked(ALICE),
            registry.clone(),
            &create,
            &coins(10, DENOM),
        )
        .unwrap();
    }
    let delete = ExecuteMsg::DeleteWhois { id: "1".to_string() };
    app.execute_contract(
        Addr::unchecked(ALICE),
        registry.clone(),
        &delete,
        &[Coin::new(1, DENOM)],
    )
    .unwrap();

    let genesis: GenesisState = app
        .wrap()
        .query_wasm_smart(&registry, &QueryMsg::ExportGenesis {})
        .unwrap();
    let copy = instantiate_registry(&mut app, Some(genesis));

    let original: ListWhoisResponse = app
        .wrap()
        .query_wasm_smart(&registry, &QueryMsg::ListWhois {})
        .unwrap();
    let restored: ListWhoisResponse = app
        .wrap()
        .query_wasm_smart(&copy, &QueryMsg::ListWhois {})
        .unwrap();
    assert_eq!(original, restored);
    assert_eq!(count(&app, &copy), 3);

    // the next id continues after the deleted one instead of reusing it
    let create = ExecuteMsg::CreateWhois {
        name: "a4.id".to_string(),
        address: "0xabc".to_string(),
        price: "1trycoin".to_string(),
    };
    app.execute_contract(Addr::unchecked(BOB), copy.clone(), &create, &coins(10, DENOM))
        .unwrap();
    let res: WhoisResponse = app
        .wrap()
        .query_wasm_smart(&copy, &QueryMsg::Whois { id: "3".to_string() })
        .unwrap();
    assert_eq!(res.whois.unwrap().creator, BOB);
}
