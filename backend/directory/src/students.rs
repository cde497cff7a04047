//! Student directory records.
//!
//! The JSON field names are camelCase because the registration form submits
//! `walletAddress` / `documentHash` style payloads.

use serde::{Deserialize, Serialize};

/// A stored applicant record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub bio: String,
    /// Globally unique.
    pub wallet_address: String,
    /// Globally unique.
    pub email: String,
    /// Amount needed, in the funding asset's display units.
    pub needs: f64,
    pub document_hash: String,
    pub is_registered: bool,
    /// Unix epoch seconds.
    pub created_at: i64,
}

/// Application submission payload for `POST /api/students`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub bio: String,
    pub wallet_address: String,
    pub email: String,
    pub needs: f64,
    pub document_hash: String,
}

impl NewStudent {
    /// Reject empty required fields before touching the database; uniqueness
    /// is left to the store's constraints.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("bio", &self.bio),
            ("walletAddress", &self.wallet_address),
            ("email", &self.email),
            ("documentHash", &self.document_hash),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        if self.needs <= 0.0 {
            return Err("needs must be a positive amount".to_string());
        }
        Ok(())
    }
}
