use soroban_sdk::{contracttype, Address, Env, String};

use crate::storage::{DrugState, Role};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRegisteredEvent {
    pub addr: Address,
    pub name: String,
    pub role: Role,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantStatusEvent {
    pub addr: Address,
    pub active: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantUpdatedEvent {
    pub addr: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugManufacturedEvent {
    pub drug_id: u64,
    pub batch_number: String,
    pub manufacturer: Address,
    pub expiry_date: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyTransferredEvent {
    pub drug_id: u64,
    pub from: Address,
    pub to: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugStateChangedEvent {
    pub drug_id: u64,
    pub updater: Address,
    pub old_state: DrugState,
    pub new_state: DrugState,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugRecalledEvent {
    pub drug_id: u64,
    pub current_owner: Address,
    pub note: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QualityCheckAddedEvent {
    pub drug_id: u64,
    pub inspector: Address,
    pub passed: bool,
    pub timestamp: u64,
}

pub fn emit_participant_registered(
    env: &Env,
    addr: Address,
    name: String,
    role: Role,
    timestamp: u64,
) {
    let event = ParticipantRegisteredEvent {
        addr,
        name,
        role,
        timestamp,
    };
    env.events().publish(("participant_registered",), event);
}

pub fn emit_participant_activated(env: &Env, addr: Address, timestamp: u64) {
    let event = ParticipantStatusEvent {
        addr,
        active: true,
        timestamp,
    };
    env.events().publish(("participant_activated",), event);
}

pub fn emit_participant_deactivated(env: &Env, addr: Address, timestamp: u64) {
    let event = ParticipantStatusEvent {
        addr,
        active: false,
        timestamp,
    };
    env.events().publish(("participant_deactivated",), event);
}

pub fn emit_participant_updated(env: &Env, addr: Address, timestamp: u64) {
    let event = ParticipantUpdatedEvent { addr, timestamp };
    env.events().publish(("participant_updated",), event);
}

pub fn emit_drug_manufactured(
    env: &Env,
    drug_id: u64,
    batch_number: String,
    manufacturer: Address,
    expiry_date: u64,
    timestamp: u64,
) {
    let event = DrugManufacturedEvent {
        drug_id,
        batch_number,
        manufacturer,
        expiry_date,
        timestamp,
    };
    env.events().publish(("drug_manufactured",), event);
}

pub fn emit_custody_transferred(
    env: &Env,
    drug_id: u64,
    from: Address,
    to: Address,
    timestamp: u64,
) {
    let event = CustodyTransferredEvent {
        drug_id,
        from,
        to,
        timestamp,
    };
    env.events().publish(("custody_transferred",), event);
}

pub fn emit_drug_state_changed(
    env: &Env,
    drug_id: u64,
    updater: Address,
    old_state: DrugState,
    new_state: DrugState,
    timestamp: u64,
) {
    let event = DrugStateChangedEvent {
        drug_id,
        updater,
        old_state,
        new_state,
        timestamp,
    };
    env.events().publish(("drug_state_changed",), event);
}

pub fn emit_drug_recalled(
    env: &Env,
    drug_id: u64,
    current_owner: Address,
    note: String,
    timestamp: u64,
) {
    let event = DrugRecalledEvent {
        drug_id,
        current_owner,
        note,
        timestamp,
    };
    env.events().publish(("drug_recalled",), event);
}

pub fn emit_quality_check_added(
    env: &Env,
    drug_id: u64,
    inspector: Address,
    passed: bool,
    timestamp: u64,
) {
    let event = QualityCheckAddedEvent {
        drug_id,
        inspector,
        passed,
        timestamp,
    };
    env.events().publish(("quality_check_added",), event);
}
