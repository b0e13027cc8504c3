#![cfg(test)]

/// Test utilities and helper functions
pub mod utils;

/// Participant registration, activation, and profile tests
mod participants;
