use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::storage::{self, Participant, Role};
use crate::utils;
use soroban_sdk::{Address, Env, String};

pub fn register_participant(
    env: &Env,
    admin: &Address,
    addr: Address,
    name: String,
    location: String,
    role: Role,
) -> Result<(), ContractError> {
    access::require_admin(env, admin)?;

    if role == Role::Unknown {
        return Err(ContractError::InvalidRole);
    }

    if !utils::is_valid_name(&name) {
        return Err(ContractError::InvalidInput);
    }

    if storage::get_participant(env, &addr).is_some() {
        return Err(ContractError::ParticipantExists);
    }

    let timestamp = env.ledger().timestamp();

    // New participants wait for explicit activation by the administrator
    let participant = Participant {
        addr: addr.clone(),
        name: name.clone(),
        location,
        role: role.clone(),
        active: false,
        registered_at: timestamp,
    };

    storage::set_participant(env, &participant);

    events::emit_participant_registered(env, addr, name, role, timestamp);

    Ok(())
}

pub fn activate_participant(
    env: &Env,
    admin: &Address,
    addr: Address,
) -> Result<(), ContractError> {
    access::require_admin(env, admin)?;

    let mut participant =
        storage::get_participant(env, &addr).ok_or(ContractError::ParticipantNotFound)?;

    participant.active = true;
    storage::set_participant(env, &participant);

    events::emit_participant_activated(env, addr, env.ledger().timestamp());

    Ok(())
}

pub fn deactivate_participant(
    env: &Env,
    admin: &Address,
    addr: Address,
) -> Result<(), ContractError> {
    access::require_admin(env, admin)?;

    let mut participant =
        storage::get_participant(env, &addr).ok_or(ContractError::ParticipantNotFound)?;

    participant.active = false;
    storage::set_participant(env, &participant);

    events::emit_participant_deactivated(env, addr, env.ledger().timestamp());

    Ok(())
}

/// Profile fields are self-service, even while the participant is inactive.
pub fn update_participant_info(
    env: &Env,
    caller: &Address,
    name: String,
    location: String,
) -> Result<(), ContractError> {
    let mut participant =
        storage::get_participant(env, caller).ok_or(ContractError::NotRegistered)?;

    if !utils::is_valid_name(&name) {
        return Err(ContractError::InvalidInput);
    }

    participant.name = name;
    participant.location = location;
    storage::set_participant(env, &participant);

    events::emit_participant_updated(env, caller.clone(), env.ledger().timestamp());

    Ok(())
}

pub fn get_participant(env: &Env, addr: &Address) -> Result<Participant, ContractError> {
    storage::get_participant(env, addr).ok_or(ContractError::ParticipantNotFound)
}
