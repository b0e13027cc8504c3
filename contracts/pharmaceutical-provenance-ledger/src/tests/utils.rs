use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{PharmaceuticalProvenanceLedger, PharmaceuticalProvenanceLedgerClient, Role};

pub const THIRTY_DAYS: u64 = 30 * 24 * 60 * 60;

pub fn create_test_contract(env: &Env) -> PharmaceuticalProvenanceLedgerClient<'_> {
    PharmaceuticalProvenanceLedgerClient::new(
        env,
        &env.register(PharmaceuticalProvenanceLedger, ()),
    )
}

/// Creates and initializes a contract, returning the client and the admin.
pub fn setup(env: &Env) -> (PharmaceuticalProvenanceLedgerClient<'_>, Address) {
    let contract = create_test_contract(env);
    let admin = Address::generate(env);
    contract.initialize(&admin);
    (contract, admin)
}

/// Registers and activates a fresh participant with the given role.
pub fn register_active(
    contract: &PharmaceuticalProvenanceLedgerClient,
    env: &Env,
    admin: &Address,
    role: Role,
) -> Address {
    let addr = Address::generate(env);
    contract.register_participant(
        admin,
        &addr,
        &String::from_str(env, "Participant"),
        &String::from_str(env, "Basel"),
        &role,
    );
    contract.activate_participant(admin, &addr);
    addr
}

/// Registers a participant without activating it.
pub fn register_inactive(
    contract: &PharmaceuticalProvenanceLedgerClient,
    env: &Env,
    admin: &Address,
    role: Role,
) -> Address {
    let addr = Address::generate(env);
    contract.register_participant(
        admin,
        &addr,
        &String::from_str(env, "Participant"),
        &String::from_str(env, "Basel"),
        &role,
    );
    addr
}

/// Manufactures a batch with default fields and returns its id.
pub fn manufacture_default(
    contract: &PharmaceuticalProvenanceLedgerClient,
    env: &Env,
    manufacturer: &Address,
    batch_number: &str,
) -> u64 {
    contract.manufacture_drug(
        manufacturer,
        &String::from_str(env, "Amoxicillin 500mg"),
        &String::from_str(env, batch_number),
        &String::from_str(env, "bafybeifmfgcert"),
        &(env.ledger().timestamp() + THIRTY_DAYS),
    )
}
