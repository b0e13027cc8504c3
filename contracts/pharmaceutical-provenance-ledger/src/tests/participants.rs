use soroban_sdk::{testutils::Address as _, Address, Env, String};

use super::utils::{create_test_contract, register_inactive, setup};
use crate::{ContractError, Role};

#[test]
fn test_initialize_only_once() {
    let env = Env::default();
    env.mock_all_auths();

    let contract = create_test_contract(&env);
    let admin = Address::generate(&env);

    contract.initialize(&admin);

    let result = contract.try_initialize(&admin);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_admin_is_preactivated_regulator() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);

    let record = contract.get_participant(&admin);
    assert_eq!(record.role, Role::Regulator);
    assert!(record.active);
    assert_eq!(contract.get_admin(), admin);
}

#[test]
fn test_register_participant() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    let addr = Address::generate(&env);

    contract.register_participant(
        &admin,
        &addr,
        &String::from_str(&env, "Acme Pharma"),
        &String::from_str(&env, "Zurich"),
        &Role::Manufacturer,
    );

    let record = contract.get_participant(&addr);
    assert_eq!(record.addr, addr);
    assert_eq!(record.name, String::from_str(&env, "Acme Pharma"));
    assert_eq!(record.location, String::from_str(&env, "Zurich"));
    assert_eq!(record.role, Role::Manufacturer);
    // Registration alone grants nothing until the admin activates
    assert!(!record.active);
    assert!(!contract.is_active_participant(&addr));
}

#[test]
fn test_register_requires_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _admin) = setup(&env);
    let stranger = Address::generate(&env);
    let addr = Address::generate(&env);

    let result = contract.try_register_participant(
        &stranger,
        &addr,
        &String::from_str(&env, "Acme Pharma"),
        &String::from_str(&env, "Zurich"),
        &Role::Manufacturer,
    );
    assert_eq!(result, Err(Ok(ContractError::AdminOnly)));
}

#[test]
fn test_register_duplicate_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    let addr = register_inactive(&contract, &env, &admin, Role::Distributor);

    let result = contract.try_register_participant(
        &admin,
        &addr,
        &String::from_str(&env, "Same Address Again"),
        &String::from_str(&env, "Geneva"),
        &Role::Pharmacy,
    );
    assert_eq!(result, Err(Ok(ContractError::ParticipantExists)));
}

#[test]
fn test_register_unknown_role_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    let addr = Address::generate(&env);

    let result = contract.try_register_participant(
        &admin,
        &addr,
        &String::from_str(&env, "Nameless"),
        &String::from_str(&env, "Nowhere"),
        &Role::Unknown,
    );
    assert_eq!(result, Err(Ok(ContractError::InvalidRole)));

    // Nothing was persisted for the rejected registration
    let lookup = contract.try_get_participant(&addr);
    assert_eq!(lookup, Err(Ok(ContractError::ParticipantNotFound)));
}

#[test]
fn test_activate_and_deactivate() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    let addr = register_inactive(&contract, &env, &admin, Role::Pharmacy);

    contract.activate_participant(&admin, &addr);
    assert!(contract.get_participant(&addr).active);
    assert!(contract.is_active_participant(&addr));

    contract.deactivate_participant(&admin, &addr);
    assert!(!contract.get_participant(&addr).active);
    assert!(!contract.is_active_participant(&addr));
}

#[test]
fn test_activate_requires_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    let addr = register_inactive(&contract, &env, &admin, Role::Pharmacy);
    let stranger = Address::generate(&env);

    let result = contract.try_activate_participant(&stranger, &addr);
    assert_eq!(result, Err(Ok(ContractError::AdminOnly)));
}

#[test]
fn test_activate_unregistered_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    let unknown = Address::generate(&env);

    let result = contract.try_activate_participant(&admin, &unknown);
    assert_eq!(result, Err(Ok(ContractError::ParticipantNotFound)));

    let result = contract.try_deactivate_participant(&admin, &unknown);
    assert_eq!(result, Err(Ok(ContractError::ParticipantNotFound)));
}

#[test]
fn test_update_profile_self_service() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    // Still inactive: profile updates are allowed regardless of the flag
    let addr = register_inactive(&contract, &env, &admin, Role::Distributor);

    contract.update_participant_info(
        &addr,
        &String::from_str(&env, "Renamed Logistics"),
        &String::from_str(&env, "Rotterdam"),
    );

    let record = contract.get_participant(&addr);
    assert_eq!(record.name, String::from_str(&env, "Renamed Logistics"));
    assert_eq!(record.location, String::from_str(&env, "Rotterdam"));
    assert_eq!(record.role, Role::Distributor);
    assert!(!record.active);
}

#[test]
fn test_update_profile_unregistered_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _admin) = setup(&env);
    let stranger = Address::generate(&env);

    let result = contract.try_update_participant_info(
        &stranger,
        &String::from_str(&env, "Ghost"),
        &String::from_str(&env, "Nowhere"),
    );
    assert_eq!(result, Err(Ok(ContractError::NotRegistered)));
}

#[test]
fn test_get_participant_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _admin) = setup(&env);
    let unknown = Address::generate(&env);

    let result = contract.try_get_participant(&unknown);
    assert_eq!(result, Err(Ok(ContractError::ParticipantNotFound)));
}
