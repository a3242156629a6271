//! Owner-scoped access control for patient records.
//!
//! One rule, applied uniformly: an operation on a patient record is permitted
//! if and only if the requesting physician is the record's owner. There is no
//! cross-owner visibility, read-only or otherwise.

use crate::id::PhysicianId;

/// Per-object operations gated by the policy. Creation is not listed —
/// a created record is always owned by its creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientAction {
    Read,
    Update,
    Delete,
}

/// Why an operation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("requesting physician does not own the record")]
    NotOwner,
}

/// Decide whether `requester` may perform `action` on a record owned by
/// `owner`.
///
/// Callers must invoke this on every per-object operation, even when the
/// record was already looked up through an owner-scoped query — the explicit
/// check stays correct if the query ever changes.
pub fn authorize(
    requester: PhysicianId,
    owner: PhysicianId,
    _action: PatientAction,
) -> Result<(), Denial> {
    if requester == owner {
        Ok(())
    } else {
        Err(Denial::NotOwner)
    }
}
