// src/domain/validation.rs

use crate::domain::booking::{DateRange, GuestDetails};
use serde::Serialize;

/// Result of one submit attempt. The two failure kinds are plain user-input
/// errors; the form just gets corrected and resubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    MissingDates,
    IncompleteProfile,
    Accepted,
}

impl SubmissionOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

/// Dates are checked before guest fields, and the first failure wins.
pub fn validate_submission(dates: &DateRange, guest: &GuestDetails) -> SubmissionOutcome {
    if dates.check_in.is_none() || dates.check_out.is_none() {
        return SubmissionOutcome::MissingDates;
    }
    if !guest.is_complete() {
        return SubmissionOutcome::IncompleteProfile;
    }
    SubmissionOutcome::Accepted
}
