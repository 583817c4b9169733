//! Review workflow state machine
//!
//! Every reading starts `pending` and ends in exactly one of two terminal
//! states:
//!
//! ```text
//! pending --verify--> verified
//! pending --reject--> rejected
//! ```
//!
//! No transition is defined out of a terminal state; in particular,
//! switching between `verified` and `rejected` is not allowed. The record
//! store enforces this table on every status mutation instead of trusting
//! its callers.

use serde::{Deserialize, Serialize};

/// Review status of a fault-line reading.
///
/// Serialized lowercase on the wire (`"pending"`, `"verified"`,
/// `"rejected"`). `Pending` is the default so records persisted before the
/// workflow existed decode as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Submitted, awaiting review (initial state)
    #[default]
    Pending,
    /// Accepted by a reviewer (terminal)
    Verified,
    /// Declined by a reviewer (terminal)
    Rejected,
}

impl ReviewStatus {
    /// Wire/display form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Verified => "verified",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReviewStatus::Verified | ReviewStatus::Rejected)
    }

    /// Whether the workflow defines a transition from `self` to `next`.
    pub fn can_transition_to(self, next: ReviewStatus) -> bool {
        matches!(
            (self, next),
            (ReviewStatus::Pending, ReviewStatus::Verified)
                | (ReviewStatus::Pending, ReviewStatus::Rejected)
        )
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
