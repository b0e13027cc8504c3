use soroban_sdk::String;

// Expiry must be strictly after the manufacture timestamp
pub fn is_valid_expiry(now: u64, expiry_date: u64) -> bool {
    expiry_date > now
}

// Evidence hashes are mandatory on quality checks
pub fn is_valid_evidence_hash(evidence_hash: &String) -> bool {
    evidence_hash.len() > 0
}

// Validate display name / drug name
pub fn is_valid_name(name: &String) -> bool {
    name.len() > 0 && name.len() <= 100
}
