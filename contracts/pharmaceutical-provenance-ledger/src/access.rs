use crate::error::ContractError;
use crate::storage::{self, Participant, Role};
use soroban_sdk::{Address, Env};

/// Checks that the caller is the configured administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    if *caller != admin {
        return Err(ContractError::AdminOnly);
    }
    Ok(())
}

/// Checks that the caller is registered and active, returning its record.
pub fn require_active(env: &Env, caller: &Address) -> Result<Participant, ContractError> {
    let participant =
        storage::get_participant(env, caller).ok_or(ContractError::NotRegistered)?;
    if !participant.active {
        return Err(ContractError::ParticipantInactive);
    }
    Ok(participant)
}

/// Checks that the caller is registered, active, and holds the given role.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<Participant, ContractError> {
    let participant = require_active(env, caller)?;
    if participant.role != role {
        return Err(ContractError::WrongRole);
    }
    Ok(participant)
}

/// Quality checks may be filed by inspectors or by the regulator role.
pub fn require_inspector(env: &Env, caller: &Address) -> Result<Participant, ContractError> {
    let participant = require_active(env, caller)?;
    if participant.role != Role::QualityInspector && participant.role != Role::Regulator {
        return Err(ContractError::WrongRole);
    }
    Ok(participant)
}

pub fn is_active_participant(env: &Env, addr: &Address) -> bool {
    match storage::get_participant(env, addr) {
        Some(participant) => participant.active,
        None => false,
    }
}
