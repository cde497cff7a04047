//! # Types
//!
//! Shared data structures used across all modules of the scholarship contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Scholarship` is internally stored as two separate ledger entries:
//!
//! - [`ScholarshipConfig`] — written once at creation; never mutated.
//! - [`ScholarshipState`] — written on every donation, on assignment, and on
//!   release.
//!
//! Donations are the high-frequency write path, so only the small state entry
//! is rewritten for each one. The public API exposes the reconstructed
//! [`Scholarship`] struct for convenience.
//!
//! ### Lifecycle flags
//!
//! A scholarship moves through exactly one transition:
//!
//! ```text
//! active=true, fulfilled=false ──release──► active=false, fulfilled=true
//! ```
//!
//! The fulfilled state is terminal: no donation, re-assignment, or second
//! release is accepted afterwards.

use soroban_sdk::{contracttype, Address, BytesN, String};

/// A student's on-chain registration, keyed by their address.
///
/// Written once by the student's own authorized transaction and never
/// mutated afterwards; there is no edit or unregister operation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentRecord {
    /// Display name.
    pub name: String,
    /// Content-hash of the supporting documents (e.g. IPFS CID digest).
    pub document_hash: BytesN<32>,
    /// Always `true` once the record exists.
    pub is_registered: bool,
}

/// Immutable scholarship configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScholarshipConfig {
    pub id: u64,
    pub donor: Address,
    pub token: Address,
    pub title: String,
    pub total_amount: i128,
}

/// Mutable scholarship state, updated on donations, assignment, and release.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScholarshipState {
    pub funded_amount: i128,
    pub assigned_student: Option<Address>,
    pub fulfilled: bool,
    pub active: bool,
}

/// Full on-chain representation of a scholarship.
///
/// Used as the public API return type; reconstructed internally from the
/// split `ScholarshipConfig` + `ScholarshipState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scholarship {
    /// Unique identifier (auto-incremented, starting at 1).
    pub id: u64,
    /// Address that created the scholarship; only it may assign or release.
    pub donor: Address,
    /// Address of the token representing the funding asset.
    pub token: Address,
    /// Human-readable title, e.g. "Engineering Fund".
    pub title: String,
    /// Target funding amount. Donations are not capped at this value.
    pub total_amount: i128,
    /// Amount transferred in so far (initial funding plus donations).
    pub funded_amount: i128,
    /// Recipient of the funds; unset until the donor assigns one.
    pub assigned_student: Option<Address>,
    /// `true` once funds have been released. Terminal.
    pub fulfilled: bool,
    /// `false` once funds have been released.
    pub active: bool,
}
