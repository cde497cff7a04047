//! Canonical event types emitted by the scholarship contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/scholarship_platform/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the scholarship contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A student registered on-chain (`registered` topic).
    StudentRegistered,
    /// A donor opened a scholarship (`created` topic).
    ScholarshipCreated,
    /// A donation was made to a scholarship (`donated` topic).
    DonationReceived,
    /// The donor assigned a recipient (`assigned` topic).
    ScholarshipAssigned,
    /// Funds were released to the assigned student (`released` topic).
    FundsReleased,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "registered" => Self::StudentRegistered,
            "created" => Self::ScholarshipCreated,
            "donated" => Self::DonationReceived,
            "assigned" => Self::ScholarshipAssigned,
            "released" => Self::FundsReleased,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudentRegistered => "student_registered",
            Self::ScholarshipCreated => "scholarship_created",
            Self::DonationReceived => "donation_received",
            Self::ScholarshipAssigned => "scholarship_assigned",
            Self::FundsReleased => "funds_released",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded scholarship event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipEvent {
    pub event_type: String,
    pub scholarship_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub scholarship_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
