use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::ledger;
use crate::storage::{self, QualityCheck};
use crate::utils;
use soroban_sdk::{Address, Env, String};

/// Appends an inspection record anchored to an external evidence hash.
/// Records are never edited or removed, and adding one has no effect on
/// custody or lifecycle state.
pub fn add_quality_check(
    env: &Env,
    caller: &Address,
    drug_id: u64,
    location: String,
    temperature: i32,
    humidity: u32,
    passed: bool,
    remarks: String,
    evidence_hash: String,
    gateway_url: String,
) -> Result<(), ContractError> {
    ledger::get_drug(env, drug_id)?;

    // Evidence hash is mandatory regardless of who files the check
    if !utils::is_valid_evidence_hash(&evidence_hash) {
        return Err(ContractError::MissingEvidenceHash);
    }

    access::require_inspector(env, caller)?;

    let timestamp = env.ledger().timestamp();

    let check = QualityCheck {
        inspector: caller.clone(),
        timestamp,
        location,
        temperature,
        humidity,
        passed,
        remarks,
        evidence_hash,
        gateway_url,
    };

    storage::push_quality_check(env, drug_id, &check);

    events::emit_quality_check_added(env, drug_id, caller.clone(), passed, timestamp);

    Ok(())
}

pub fn get_quality_checks_count(env: &Env, drug_id: u64) -> Result<u32, ContractError> {
    ledger::get_drug(env, drug_id)?;
    Ok(storage::get_quality_checks(env, drug_id).len())
}

pub fn get_quality_check_by_index(
    env: &Env,
    drug_id: u64,
    index: u32,
) -> Result<QualityCheck, ContractError> {
    ledger::get_drug(env, drug_id)?;
    storage::get_quality_checks(env, drug_id)
        .get(index)
        .ok_or(ContractError::IndexOutOfBounds)
}
