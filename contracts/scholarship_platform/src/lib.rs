//! # Scholarship Platform Contract
//!
//! Root crate of the scholarship platform ledger. It exposes the single
//! Soroban contract `ScholarshipPlatform` whose entry points cover the full
//! scholarship lifecycle:
//!
//! | Phase        | Entry Point(s)                                     |
//! |--------------|----------------------------------------------------|
//! | Registration | [`ScholarshipPlatform::register_student`]          |
//! | Creation     | [`ScholarshipPlatform::create_scholarship`]        |
//! | Funding      | [`ScholarshipPlatform::donate`]                    |
//! | Assignment   | [`ScholarshipPlatform::assign_scholarship`]        |
//! | Release      | [`ScholarshipPlatform::release_funds`]             |
//! | Queries      | `get_student`, `get_scholarship`                   |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event payloads and
//! emission to [`events`]. This file contains **only** the public entry
//! points and their guard conditions.
//!
//! ## Lifecycle rules
//!
//! * An address registers at most once; the record is immutable afterwards.
//! * The attached initial funding may be below, equal to, or above the
//!   target amount — and so may the running total. Donations are never
//!   capped at the target.
//! * Only the scholarship's donor may assign a recipient or release funds.
//! * Release pays out exactly the funded amount, once. The state flip to
//!   `fulfilled` is persisted before the token transfer, so a re-entrant
//!   call observes the terminal state.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, BytesN, Env, String,
};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{
    DonationReceived, FundsReleased, ScholarshipAssigned, ScholarshipCreated, StudentRegistered,
};
pub use types::{Scholarship, ScholarshipConfig, ScholarshipState, StudentRecord};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyRegistered    = 1,
    StudentNotFound      = 2,
    ScholarshipNotFound  = 3,
    NotDonor             = 4,
    NotAssigned          = 5,
    AlreadyFulfilled     = 6,
    StudentNotRegistered = 7,
    InvalidAmount        = 8,
}

#[contract]
pub struct ScholarshipPlatform;

#[contractimpl]
impl ScholarshipPlatform {
    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    /// Register the calling address as a student.
    ///
    /// - `student` must sign the transaction.
    /// - Fails with `Error::AlreadyRegistered` on a second attempt; the
    ///   existing record is left untouched.
    pub fn register_student(env: Env, student: Address, name: String, document_hash: BytesN<32>) {
        student.require_auth();

        if storage::has_student(&env, &student) {
            panic_with_error!(&env, Error::AlreadyRegistered);
        }

        let record = StudentRecord {
            name: name.clone(),
            document_hash: document_hash.clone(),
            is_registered: true,
        };
        storage::save_student(&env, &student, &record);

        events::student_registered(&env, &student, &name, &document_hash);
    }

    /// Retrieve a student registration by address.
    pub fn get_student(env: Env, student: Address) -> StudentRecord {
        storage::load_student(&env, &student)
            .unwrap_or_else(|| panic_with_error!(&env, Error::StudentNotFound))
    }

    // ─────────────────────────────────────────────────────────
    // Creation & funding
    // ─────────────────────────────────────────────────────────

    /// Open a new scholarship.
    ///
    /// - `donor` must sign the transaction and becomes the only address
    ///   allowed to assign or release.
    /// - `initial_amount` tokens are transferred from the donor into the
    ///   contract and become the starting funded amount. Zero is legitimate:
    ///   funding may arrive entirely through later donations.
    /// - IDs are sequential starting at 1.
    pub fn create_scholarship(
        env: Env,
        donor: Address,
        token: Address,
        title: String,
        total_amount: i128,
        initial_amount: i128,
    ) -> Scholarship {
        donor.require_auth();

        if total_amount <= 0 || initial_amount < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let id = storage::next_scholarship_id(&env);

        if initial_amount > 0 {
            token::Client::new(&env, &token).transfer(
                &donor,
                &env.current_contract_address(),
                &initial_amount,
            );
        }

        let scholarship = Scholarship {
            id,
            donor: donor.clone(),
            token: token.clone(),
            title,
            total_amount,
            funded_amount: initial_amount,
            assigned_student: None,
            fulfilled: false,
            active: true,
        };
        storage::save_scholarship(&env, &scholarship);

        events::scholarship_created(&env, id, &donor, &token, total_amount, initial_amount);
        scholarship
    }

    /// Retrieve a scholarship by its ID.
    pub fn get_scholarship(env: Env, id: u64) -> Scholarship {
        storage::load_scholarship(&env, id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound))
    }

    /// Donate to a scholarship. Open to any address.
    ///
    /// Transfers `amount` tokens from the donator into the contract and
    /// increases the funded amount by exactly that much. There is no cap at
    /// the target amount; over-funding is allowed. Donations to a fulfilled
    /// scholarship are rejected — released funds have already left the
    /// contract, so late donations would be stranded.
    pub fn donate(env: Env, scholarship_id: u64, donator: Address, amount: i128) {
        donator.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let config = storage::load_scholarship_config(&env, scholarship_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound));
        let mut state = storage::load_scholarship_state(&env, scholarship_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound));

        if state.fulfilled || !state.active {
            panic_with_error!(&env, Error::AlreadyFulfilled);
        }

        token::Client::new(&env, &config.token).transfer(
            &donator,
            &env.current_contract_address(),
            &amount,
        );

        state.funded_amount += amount;
        storage::save_scholarship_state(&env, scholarship_id, &state);

        events::donation_received(&env, scholarship_id, &donator, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Assignment & release
    // ─────────────────────────────────────────────────────────

    /// Assign a registered student as the scholarship's recipient.
    ///
    /// - `caller` must sign and must be the scholarship's donor.
    /// - `student` must hold a registration.
    /// - Re-assignment overwrites the previous recipient while the
    ///   scholarship is still active; once fulfilled it is rejected.
    pub fn assign_scholarship(env: Env, caller: Address, scholarship_id: u64, student: Address) {
        caller.require_auth();

        let config = storage::load_scholarship_config(&env, scholarship_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound));
        if caller != config.donor {
            panic_with_error!(&env, Error::NotDonor);
        }

        let mut state = storage::load_scholarship_state(&env, scholarship_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound));
        if state.fulfilled || !state.active {
            panic_with_error!(&env, Error::AlreadyFulfilled);
        }

        if !storage::has_student(&env, &student) {
            panic_with_error!(&env, Error::StudentNotRegistered);
        }

        state.assigned_student = Some(student.clone());
        storage::save_scholarship_state(&env, scholarship_id, &state);

        events::scholarship_assigned(&env, scholarship_id, &config.donor, &student);
    }

    /// Release the funded amount to the assigned student.
    ///
    /// - `caller` must sign and must be the scholarship's donor.
    /// - A recipient must have been assigned.
    /// - One-time: a second call fails with `Error::AlreadyFulfilled`.
    ///
    /// The state flip (`fulfilled=true, active=false`) is persisted before
    /// the token transfer.
    pub fn release_funds(env: Env, caller: Address, scholarship_id: u64) {
        caller.require_auth();

        let config = storage::load_scholarship_config(&env, scholarship_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound));
        if caller != config.donor {
            panic_with_error!(&env, Error::NotDonor);
        }

        let mut state = storage::load_scholarship_state(&env, scholarship_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ScholarshipNotFound));
        if state.fulfilled || !state.active {
            panic_with_error!(&env, Error::AlreadyFulfilled);
        }

        let student = state
            .assigned_student
            .clone()
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotAssigned));
        let amount = state.funded_amount;

        state.fulfilled = true;
        state.active = false;
        storage::save_scholarship_state(&env, scholarship_id, &state);

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &student,
            &amount,
        );

        events::funds_released(&env, scholarship_id, &student, amount);
    }
}
