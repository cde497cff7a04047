//! Contract events.
//!
//! Each entry point publishes one typed event. Topics carry the event symbol
//! plus the entity key (student address or scholarship ID) so off-chain
//! consumers can filter without decoding the payload; the payload structs
//! below are what the backend indexer stores.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol};

/// Topic `registered` — a new student registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentRegistered {
    pub student: Address,
    pub name: String,
    pub document_hash: BytesN<32>,
}

/// Topic `created` — a donor opened a new scholarship.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScholarshipCreated {
    pub scholarship_id: u64,
    pub donor: Address,
    pub token: Address,
    pub total_amount: i128,
    pub initial_amount: i128,
}

/// Topic `donated` — funds were added to a scholarship.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub scholarship_id: u64,
    pub donator: Address,
    pub amount: i128,
}

/// Topic `assigned` — the donor picked a recipient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScholarshipAssigned {
    pub scholarship_id: u64,
    pub donor: Address,
    pub student: Address,
}

/// Topic `released` — funds were paid out to the assigned student.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsReleased {
    pub scholarship_id: u64,
    pub student: Address,
    pub amount: i128,
}

pub fn student_registered(env: &Env, student: &Address, name: &String, document_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "registered"), student.clone()),
        StudentRegistered {
            student: student.clone(),
            name: name.clone(),
            document_hash: document_hash.clone(),
        },
    );
}

pub fn scholarship_created(
    env: &Env,
    scholarship_id: u64,
    donor: &Address,
    token: &Address,
    total_amount: i128,
    initial_amount: i128,
) {
    env.events().publish(
        (symbol_short!("created"), scholarship_id),
        ScholarshipCreated {
            scholarship_id,
            donor: donor.clone(),
            token: token.clone(),
            total_amount,
            initial_amount,
        },
    );
}

pub fn donation_received(env: &Env, scholarship_id: u64, donator: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("donated"), scholarship_id),
        DonationReceived {
            scholarship_id,
            donator: donator.clone(),
            amount,
        },
    );
}

pub fn scholarship_assigned(env: &Env, scholarship_id: u64, donor: &Address, student: &Address) {
    env.events().publish(
        (symbol_short!("assigned"), scholarship_id),
        ScholarshipAssigned {
            scholarship_id,
            donor: donor.clone(),
            student: student.clone(),
        },
    );
}

pub fn funds_released(env: &Env, scholarship_id: u64, student: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("released"), scholarship_id),
        FundsReleased {
            scholarship_id,
            student: student.clone(),
            amount,
        },
    );
}
