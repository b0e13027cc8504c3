use soroban_sdk::{contracttype, Address, Env, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Unknown,
    Manufacturer,
    Distributor,
    Pharmacy,
    Regulator,
    QualityInspector,
    Consumer,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrugState {
    Manufactured,
    ShippedToDistributor,
    ReceivedByDistributor,
    ShippedToPharmacy,
    ReceivedByPharmacy,
    SoldToCustomer,
    Recalled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub addr: Address,
    pub name: String,
    pub location: String,
    pub role: Role,
    pub active: bool,
    pub registered_at: u64,
}

/// Core batch record. The per-batch histories (owners, transfers, quality
/// checks) live under their own keys so this record stays bounded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drug {
    pub id: u64,
    pub batch_number: String,
    pub name: String,
    pub evidence_hash: String,
    pub manufacturer: Address,
    pub manufactured_at: u64,
    pub expiry_date: u64,
    pub state: DrugState,
    pub current_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferRecord {
    pub from: Address,
    pub to: Address,
    pub timestamp: u64,
    pub note: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QualityCheck {
    pub inspector: Address,
    pub timestamp: u64,
    pub location: String,
    pub temperature: i32,
    pub humidity: u32,
    pub passed: bool,
    pub remarks: String,
    pub evidence_hash: String,
    pub gateway_url: String,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    DrugCounter,
    Participant(Address),          // addr -> Participant
    Drug(u64),                     // drug id -> Drug
    BatchNumber(String),           // batch number -> drug id
    OwnershipHistory(u64),         // drug id -> Vec<Address>, append-only
    Transfers(u64),                // drug id -> Vec<TransferRecord>, append-only
    QualityChecks(u64),            // drug id -> Vec<QualityCheck>, append-only
    ManufacturerDrugs(Address),    // manufacturer -> Vec<drug id>
}

// Admin storage functions
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_admin(env: &Env, addr: &Address) -> bool {
    match get_admin(env) {
        Some(admin) => admin == *addr,
        None => false,
    }
}

// Drug id counter. Ids start at 1 and are handed out only after every
// precondition of a manufacture call has passed, so failed attempts never
// consume one.
pub fn get_drug_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::DrugCounter).unwrap_or(0u64)
}

pub fn next_drug_id(env: &Env) -> u64 {
    let next = get_drug_count(env) + 1;
    env.storage().instance().set(&DataKey::DrugCounter, &next);
    next
}

// Participant storage functions
pub fn get_participant(env: &Env, addr: &Address) -> Option<Participant> {
    let key = DataKey::Participant(addr.clone());
    env.storage().persistent().get(&key)
}

pub fn set_participant(env: &Env, participant: &Participant) {
    let key = DataKey::Participant(participant.addr.clone());
    env.storage().persistent().set(&key, participant);
}

// Drug storage functions
pub fn get_drug(env: &Env, drug_id: u64) -> Option<Drug> {
    let key = DataKey::Drug(drug_id);
    env.storage().persistent().get(&key)
}

pub fn set_drug(env: &Env, drug: &Drug) {
    let key = DataKey::Drug(drug.id);
    env.storage().persistent().set(&key, drug);
}

// Batch number index functions
pub fn get_batch_number_id(env: &Env, batch_number: &String) -> Option<u64> {
    let key = DataKey::BatchNumber(batch_number.clone());
    env.storage().persistent().get(&key)
}

pub fn set_batch_number_id(env: &Env, batch_number: &String, drug_id: u64) {
    let key = DataKey::BatchNumber(batch_number.clone());
    env.storage().persistent().set(&key, &drug_id);
}

// Ownership history storage functions
pub fn get_ownership_history(env: &Env, drug_id: u64) -> Vec<Address> {
    let key = DataKey::OwnershipHistory(drug_id);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn push_owner(env: &Env, drug_id: u64, owner: &Address) {
    let key = DataKey::OwnershipHistory(drug_id);
    let mut owners = get_ownership_history(env, drug_id);
    owners.push_back(owner.clone());
    env.storage().persistent().set(&key, &owners);
}

// Transfer record storage functions
pub fn get_transfers(env: &Env, drug_id: u64) -> Vec<TransferRecord> {
    let key = DataKey::Transfers(drug_id);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn push_transfer(env: &Env, drug_id: u64, record: &TransferRecord) {
    let key = DataKey::Transfers(drug_id);
    let mut records = get_transfers(env, drug_id);
    records.push_back(record.clone());
    env.storage().persistent().set(&key, &records);
}

// Quality check storage functions
pub fn get_quality_checks(env: &Env, drug_id: u64) -> Vec<QualityCheck> {
    let key = DataKey::QualityChecks(drug_id);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn push_quality_check(env: &Env, drug_id: u64, check: &QualityCheck) {
    let key = DataKey::QualityChecks(drug_id);
    let mut checks = get_quality_checks(env, drug_id);
    checks.push_back(check.clone());
    env.storage().persistent().set(&key, &checks);
}

// Manufacturer index storage functions
pub fn get_manufacturer_drug_ids(env: &Env, manufacturer: &Address) -> Vec<u64> {
    let key = DataKey::ManufacturerDrugs(manufacturer.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_manufacturer_drug(env: &Env, manufacturer: &Address, drug_id: u64) {
    let key = DataKey::ManufacturerDrugs(manufacturer.clone());
    let mut ids = get_manufacturer_drug_ids(env, manufacturer);
    ids.push_back(drug_id);
    env.storage().persistent().set(&key, &ids);
}
