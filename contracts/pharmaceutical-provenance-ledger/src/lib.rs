#![no_std]

mod access;
mod error;
mod events;
mod ledger;
mod participants;
mod quality;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use storage::*;

#[contract]
pub struct PharmaceuticalProvenanceLedger;

#[contractimpl]
impl PharmaceuticalProvenanceLedger {
    /// Initialize the contract with the administrator identity. The
    /// administrator doubles as a pre-activated Regulator participant.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);

        let timestamp = env.ledger().timestamp();
        let name = String::from_str(&env, "Admin");
        let participant = Participant {
            addr: admin.clone(),
            name: name.clone(),
            location: String::from_str(&env, ""),
            role: Role::Regulator,
            active: true,
            registered_at: timestamp,
        };
        storage::set_participant(&env, &participant);

        events::emit_participant_registered(&env, admin, name, Role::Regulator, timestamp);

        Ok(())
    }

    /// Register a new participant; administrator only. The participant
    /// starts inactive and must be activated before it can act.
    pub fn register_participant(
        env: Env,
        admin: Address,
        addr: Address,
        name: String,
        location: String,
        role: Role,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        participants::register_participant(&env, &admin, addr, name, location, role)
    }

    /// Activate a registered participant; administrator only.
    pub fn activate_participant(
        env: Env,
        admin: Address,
        addr: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        participants::activate_participant(&env, &admin, addr)
    }

    /// Deactivate a registered participant; administrator only.
    pub fn deactivate_participant(
        env: Env,
        admin: Address,
        addr: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        participants::deactivate_participant(&env, &admin, addr)
    }

    /// Update the caller's own profile fields.
    pub fn update_participant_info(
        env: Env,
        caller: Address,
        name: String,
        location: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        participants::update_participant_info(&env, &caller, name, location)
    }

    /// Record a newly manufactured batch and return its assigned id.
    pub fn manufacture_drug(
        env: Env,
        manufacturer: Address,
        name: String,
        batch_number: String,
        evidence_hash: String,
        expiry_date: u64,
    ) -> Result<u64, ContractError> {
        manufacturer.require_auth();
        ledger::manufacture_drug(
            &env,
            &manufacturer,
            name,
            batch_number,
            evidence_hash,
            expiry_date,
        )
    }

    /// Transfer custody of a batch to another participant.
    pub fn transfer_drug(
        env: Env,
        caller: Address,
        drug_id: u64,
        to: Address,
        note: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        ledger::transfer_custody(&env, &caller, drug_id, to, note)
    }

    /// Set a batch's lifecycle state; current owner or administrator.
    pub fn update_drug_state(
        env: Env,
        caller: Address,
        drug_id: u64,
        new_state: DrugState,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        ledger::update_drug_state(&env, &caller, drug_id, new_state)
    }

    /// Force a batch into the Recalled state; administrator only.
    pub fn recall_drug(
        env: Env,
        admin: Address,
        drug_id: u64,
        note: String,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        ledger::recall_drug(&env, &admin, drug_id, note)
    }

    /// File a quality inspection record for a batch.
    pub fn add_quality_check(
        env: Env,
        inspector: Address,
        drug_id: u64,
        location: String,
        temperature: i32,
        humidity: u32,
        passed: bool,
        remarks: String,
        evidence_hash: String,
        gateway_url: String,
    ) -> Result<(), ContractError> {
        inspector.require_auth();
        quality::add_quality_check(
            &env,
            &inspector,
            drug_id,
            location,
            temperature,
            humidity,
            passed,
            remarks,
            evidence_hash,
            gateway_url,
        )
    }

    /// Resolve a batch number to its drug id, if any.
    pub fn verify_by_batch(env: Env, batch_number: String) -> Option<u64> {
        ledger::verify_by_batch(&env, batch_number)
    }

    /// Get the core record of a batch.
    pub fn get_drug_basic(env: Env, drug_id: u64) -> Result<Drug, ContractError> {
        ledger::get_drug(&env, drug_id)
    }

    /// Get the ordered list of all historical owners of a batch.
    pub fn get_ownership_history(env: Env, drug_id: u64) -> Result<Vec<Address>, ContractError> {
        ledger::get_ownership_history(&env, drug_id)
    }

    pub fn get_transfers_count(env: Env, drug_id: u64) -> Result<u32, ContractError> {
        ledger::get_transfers_count(&env, drug_id)
    }

    pub fn get_transfer_by_index(
        env: Env,
        drug_id: u64,
        index: u32,
    ) -> Result<TransferRecord, ContractError> {
        ledger::get_transfer_by_index(&env, drug_id, index)
    }

    pub fn get_quality_checks_count(env: Env, drug_id: u64) -> Result<u32, ContractError> {
        quality::get_quality_checks_count(&env, drug_id)
    }

    pub fn get_quality_check_by_index(
        env: Env,
        drug_id: u64,
        index: u32,
    ) -> Result<QualityCheck, ContractError> {
        quality::get_quality_check_by_index(&env, drug_id, index)
    }

    pub fn get_participant(env: Env, addr: Address) -> Result<Participant, ContractError> {
        participants::get_participant(&env, &addr)
    }

    /// Number of batches recorded so far.
    pub fn total_drugs(env: Env) -> u64 {
        ledger::total_drugs(&env)
    }

    /// Get batch ids recorded by a manufacturer, paged.
    pub fn get_manufacturer_drugs(
        env: Env,
        manufacturer: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<u64> {
        ledger::get_manufacturer_drugs(&env, &manufacturer, offset, limit)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_active_participant(env: Env, addr: Address) -> bool {
        access::is_active_participant(&env, &addr)
    }
}
