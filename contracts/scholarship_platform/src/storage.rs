//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                | Type  | Description                            |
//! |--------------------|-------|----------------------------------------|
//! | `ScholarshipCount` | `u64` | Auto-increment scholarship ID counter  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key               | Type                | Description                       |
//! |-------------------|---------------------|-----------------------------------|
//! | `Student(addr)`   | `StudentRecord`     | One-time student registration     |
//! | `SchConfig(id)`   | `ScholarshipConfig` | Immutable scholarship parameters  |
//! | `SchState(id)`    | `ScholarshipState`  | Mutable scholarship state         |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! Lookups return `Option` — mapping a missing entry to the right contract
//! error is the entry points' job.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Scholarship, ScholarshipConfig, ScholarshipState, StudentRecord};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// The instance-tier `ScholarshipCount` lives as long as the contract.
/// Persistent-tier keys hold per-student and per-scholarship data with
/// independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for scholarship IDs (Instance).
    ScholarshipCount,
    /// Student registration keyed by wallet address (Persistent).
    Student(Address),
    /// Immutable scholarship configuration keyed by ID (Persistent).
    SchConfig(u64),
    /// Mutable scholarship state keyed by ID (Persistent).
    SchState(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Atomically reads, increments, and stores the scholarship counter.
/// Returns the ID to use for the *current* scholarship; the first ID is 1.
pub fn next_scholarship_id(env: &Env) -> u64 {
    bump_instance(env);
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ScholarshipCount)
        .unwrap_or(0)
        + 1;
    env.storage()
        .instance()
        .set(&DataKey::ScholarshipCount, &id);
    id
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Whether the address already holds a registration.
pub fn has_student(env: &Env, student: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Student(student.clone()))
}

/// Store a student registration.
pub fn save_student(env: &Env, student: &Address, record: &StudentRecord) {
    let key = DataKey::Student(student.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Load a student registration, if one exists.
pub fn load_student(env: &Env, student: &Address) -> Option<StudentRecord> {
    let key = DataKey::Student(student.clone());
    let record: Option<StudentRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

/// Save both the immutable config and mutable state for a new scholarship.
pub fn save_scholarship(env: &Env, scholarship: &Scholarship) {
    let config_key = DataKey::SchConfig(scholarship.id);
    let state_key = DataKey::SchState(scholarship.id);

    let config = ScholarshipConfig {
        id: scholarship.id,
        donor: scholarship.donor.clone(),
        token: scholarship.token.clone(),
        title: scholarship.title.clone(),
        total_amount: scholarship.total_amount,
    };

    let state = ScholarshipState {
        funded_amount: scholarship.funded_amount,
        assigned_student: scholarship.assigned_student.clone(),
        fulfilled: scholarship.fulfilled,
        active: scholarship.active,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Scholarship` by combining config and state.
pub fn load_scholarship(env: &Env, id: u64) -> Option<Scholarship> {
    let config = load_scholarship_config(env, id)?;
    let state = load_scholarship_state(env, id)?;
    Some(Scholarship {
        id: config.id,
        donor: config.donor,
        token: config.token,
        title: config.title,
        total_amount: config.total_amount,
        funded_amount: state.funded_amount,
        assigned_student: state.assigned_student,
        fulfilled: state.fulfilled,
        active: state.active,
    })
}

/// Load only the immutable scholarship configuration.
pub fn load_scholarship_config(env: &Env, id: u64) -> Option<ScholarshipConfig> {
    let key = DataKey::SchConfig(id);
    let config: Option<ScholarshipConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable scholarship state.
pub fn load_scholarship_state(env: &Env, id: u64) -> Option<ScholarshipState> {
    let key = DataKey::SchState(id);
    let state: Option<ScholarshipState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable scholarship state (the donation/release write path).
pub fn save_scholarship_state(env: &Env, id: u64, state: &ScholarshipState) {
    let key = DataKey::SchState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}
