use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    AdminOnly = 3,
    NotRegistered = 4,
    ParticipantInactive = 5,
    WrongRole = 6,
    NotCurrentOwner = 7,

    // Not-found errors
    DrugNotFound = 8,
    ParticipantNotFound = 9,
    IndexOutOfBounds = 10,

    // Conflict errors
    BatchNumberExists = 11,
    ParticipantExists = 12,

    // Validation errors
    InvalidRole = 13,
    InvalidExpiry = 14,
    MissingEvidenceHash = 15,
    InvalidInput = 16,
}
