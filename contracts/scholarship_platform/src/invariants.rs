#![allow(dead_code)]

extern crate std;

use crate::types::Scholarship;

/// INV-1: Funded amount must never be negative.
pub fn assert_funded_non_negative(scholarship: &Scholarship) {
    assert!(
        scholarship.funded_amount >= 0,
        "INV-1 violated: scholarship {} has negative funded amount ({})",
        scholarship.id,
        scholarship.funded_amount
    );
}

/// INV-2: Target amount must always be positive.
pub fn assert_total_positive(scholarship: &Scholarship) {
    assert!(
        scholarship.total_amount > 0,
        "INV-2 violated: scholarship {} has non-positive target ({})",
        scholarship.id,
        scholarship.total_amount
    );
}

/// INV-3: The two lifecycle flags move together — a scholarship is either
/// active and unfulfilled, or inactive and fulfilled.
pub fn assert_flags_consistent(scholarship: &Scholarship) {
    assert_eq!(
        scholarship.fulfilled, !scholarship.active,
        "INV-3 violated: scholarship {} has fulfilled={} active={}",
        scholarship.id, scholarship.fulfilled, scholarship.active
    );
}

/// INV-4: A fulfilled scholarship must have an assigned student — funds
/// cannot have been released to nobody.
pub fn assert_fulfilled_has_assignee(scholarship: &Scholarship) {
    if scholarship.fulfilled {
        assert!(
            scholarship.assigned_student.is_some(),
            "INV-4 violated: scholarship {} is fulfilled without an assignee",
            scholarship.id
        );
    }
}

/// INV-5: Donation invariant — after a donation of `amount`, the funded
/// amount increases by exactly `amount`.
pub fn assert_donation_invariant(funded_before: i128, funded_after: i128, amount: i128) {
    assert_eq!(
        funded_after,
        funded_before + amount,
        "INV-5 violated: donation invariant broken: {} + {} != {}",
        funded_before,
        amount,
        funded_after
    );
}

/// INV-6: Scholarship IDs are sequential starting from 1.
pub fn assert_sequential_ids(scholarships: &[Scholarship]) {
    for (i, scholarship) in scholarships.iter().enumerate() {
        assert_eq!(
            scholarship.id,
            i as u64 + 1,
            "INV-6 violated: expected id {}, got {}",
            i + 1,
            scholarship.id
        );
    }
}

/// INV-7: Immutability — fields written at creation (donor, token, title,
/// target) never change afterwards.
pub fn assert_config_immutable(original: &Scholarship, current: &Scholarship) {
    assert_eq!(original.id, current.id, "INV-7 violated: scholarship id changed");
    assert_eq!(
        original.donor, current.donor,
        "INV-7 violated: scholarship donor changed"
    );
    assert_eq!(
        original.token, current.token,
        "INV-7 violated: scholarship token changed"
    );
    assert_eq!(
        original.title, current.title,
        "INV-7 violated: scholarship title changed"
    );
    assert_eq!(
        original.total_amount, current.total_amount,
        "INV-7 violated: scholarship target changed"
    );
}

/// Run all stateless scholarship invariants.
pub fn assert_all_scholarship_invariants(scholarship: &Scholarship) {
    assert_funded_non_negative(scholarship);
    assert_total_positive(scholarship);
    assert_flags_consistent(scholarship);
    assert_fulfilled_has_assignee(scholarship);
}
