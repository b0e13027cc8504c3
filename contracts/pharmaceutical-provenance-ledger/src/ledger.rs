use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::storage::{self, Drug, DrugState, Role, TransferRecord};
use crate::utils;
use soroban_sdk::{Address, Env, String, Vec};

pub fn manufacture_drug(
    env: &Env,
    caller: &Address,
    name: String,
    batch_number: String,
    evidence_hash: String,
    expiry_date: u64,
) -> Result<u64, ContractError> {
    access::require_role(env, caller, Role::Manufacturer)?;

    if !utils::is_valid_name(&name) {
        return Err(ContractError::InvalidInput);
    }

    if storage::get_batch_number_id(env, &batch_number).is_some() {
        return Err(ContractError::BatchNumberExists);
    }

    let timestamp = env.ledger().timestamp();

    if !utils::is_valid_expiry(timestamp, expiry_date) {
        return Err(ContractError::InvalidExpiry);
    }

    // All preconditions hold, so the id counter may advance now
    let drug_id = storage::next_drug_id(env);

    let drug = Drug {
        id: drug_id,
        batch_number: batch_number.clone(),
        name,
        evidence_hash,
        manufacturer: caller.clone(),
        manufactured_at: timestamp,
        expiry_date,
        state: DrugState::Manufactured,
        current_owner: caller.clone(),
    };

    storage::set_drug(env, &drug);
    storage::set_batch_number_id(env, &batch_number, drug_id);
    storage::push_owner(env, drug_id, caller);
    storage::add_manufacturer_drug(env, caller, drug_id);

    events::emit_drug_manufactured(
        env,
        drug_id,
        batch_number,
        caller.clone(),
        expiry_date,
        timestamp,
    );

    Ok(drug_id)
}

/// Moves custody to another participant. Lifecycle state is untouched;
/// custody and state are tracked on separate axes.
pub fn transfer_custody(
    env: &Env,
    caller: &Address,
    drug_id: u64,
    to: Address,
    note: String,
) -> Result<(), ContractError> {
    let mut drug = get_drug(env, drug_id)?;

    if drug.current_owner != *caller {
        return Err(ContractError::NotCurrentOwner);
    }

    // The counterparty must be a registered, active participant
    access::require_active(env, &to)?;

    let timestamp = env.ledger().timestamp();

    let record = TransferRecord {
        from: caller.clone(),
        to: to.clone(),
        timestamp,
        note,
    };

    storage::push_transfer(env, drug_id, &record);
    storage::push_owner(env, drug_id, &to);

    drug.current_owner = to.clone();
    storage::set_drug(env, &drug);

    events::emit_custody_transferred(env, drug_id, caller.clone(), to, timestamp);

    Ok(())
}

/// Sets the lifecycle state to any value, including moves back up the
/// chain. There is deliberately no transition graph here; states act as
/// free-form stage tags under the control of the owner or administrator.
pub fn update_drug_state(
    env: &Env,
    caller: &Address,
    drug_id: u64,
    new_state: DrugState,
) -> Result<(), ContractError> {
    let mut drug = get_drug(env, drug_id)?;

    if drug.current_owner != *caller && !storage::is_admin(env, caller) {
        return Err(ContractError::NotCurrentOwner);
    }

    let old_state = drug.state.clone();
    let timestamp = env.ledger().timestamp();

    drug.state = new_state.clone();
    storage::set_drug(env, &drug);

    events::emit_drug_state_changed(env, drug_id, caller.clone(), old_state, new_state, timestamp);

    Ok(())
}

/// Forces the batch into the Recalled state. The recall rides the transfer
/// stream as a self-to-self record so custody and recall events share one
/// chronological audit trail; ownership itself does not move.
pub fn recall_drug(
    env: &Env,
    admin: &Address,
    drug_id: u64,
    note: String,
) -> Result<(), ContractError> {
    access::require_admin(env, admin)?;

    let mut drug = get_drug(env, drug_id)?;

    let timestamp = env.ledger().timestamp();

    drug.state = DrugState::Recalled;
    storage::set_drug(env, &drug);

    let record = TransferRecord {
        from: drug.current_owner.clone(),
        to: drug.current_owner.clone(),
        timestamp,
        note: note.clone(),
    };
    storage::push_transfer(env, drug_id, &record);

    events::emit_drug_recalled(env, drug_id, drug.current_owner, note, timestamp);

    Ok(())
}

pub fn get_drug(env: &Env, drug_id: u64) -> Result<Drug, ContractError> {
    storage::get_drug(env, drug_id).ok_or(ContractError::DrugNotFound)
}

pub fn verify_by_batch(env: &Env, batch_number: String) -> Option<u64> {
    storage::get_batch_number_id(env, &batch_number)
}

pub fn get_ownership_history(env: &Env, drug_id: u64) -> Result<Vec<Address>, ContractError> {
    get_drug(env, drug_id)?;
    Ok(storage::get_ownership_history(env, drug_id))
}

pub fn get_transfers_count(env: &Env, drug_id: u64) -> Result<u32, ContractError> {
    get_drug(env, drug_id)?;
    Ok(storage::get_transfers(env, drug_id).len())
}

pub fn get_transfer_by_index(
    env: &Env,
    drug_id: u64,
    index: u32,
) -> Result<TransferRecord, ContractError> {
    get_drug(env, drug_id)?;
    storage::get_transfers(env, drug_id)
        .get(index)
        .ok_or(ContractError::IndexOutOfBounds)
}

pub fn total_drugs(env: &Env) -> u64 {
    storage::get_drug_count(env)
}

pub fn get_manufacturer_drugs(
    env: &Env,
    manufacturer: &Address,
    offset: u32,
    limit: u32,
) -> Vec<u64> {
    let all_ids = storage::get_manufacturer_drug_ids(env, manufacturer);
    let mut result = Vec::new(env);

    let start = offset;
    let end = offset.saturating_add(limit).min(all_ids.len());

    for i in start..end {
        if let Some(drug_id) = all_ids.get(i) {
            result.push_back(drug_id);
        }
    }

    result
}
