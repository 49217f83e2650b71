use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use devday_model::RegistrationInput;
use devday_validate::{ValidationReport, validate_registration};

use crate::outcome::SubmissionOutcome;

/// Fixed delay the simulated registration call takes to resolve.
pub const SUBMISSION_DELAY: Duration = Duration::from_secs(2);

/// Banner text shown when the simulated service rejects a submission.
pub const SERVICE_UNAVAILABLE: &str =
    "Registration service temporarily unavailable. Please try again.";

/// Where a registration submission currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Why [`Submission::begin`] refused to start.
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    /// One or more fields failed validation; the report carries the
    /// per-field issues. The machine state is untouched.
    #[error("validation rejected {} field(s)", .0.issue_count())]
    Validation(ValidationReport),
    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    InProgress,
    /// The previous submission succeeded and has not been reset.
    #[error("registration already completed")]
    Completed,
}

/// The registration submission state machine.
///
/// `begin` validates the input and moves Idle or Failed to Submitting;
/// `resolve` applies the outcome of the in-flight call; `reset` returns
/// to Idle. The Submitting state doubles as the submit lock: no second
/// submission can start while one is in flight.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validates the input and, if every field passes, moves to
    /// Submitting. Validation runs strictly before the state change, so
    /// a rejected input never leaves Idle or Failed.
    pub fn begin(&mut self, input: &RegistrationInput) -> Result<(), SubmitError> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitError::InProgress),
            SubmissionState::Succeeded => return Err(SubmitError::Completed),
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }
        let report = validate_registration(input);
        if !report.is_valid() {
            return Err(SubmitError::Validation(report));
        }
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Applies the outcome of the in-flight call. Outside Submitting the
    /// outcome is dropped with a warning.
    pub fn resolve(&mut self, outcome: SubmissionOutcome) {
        if self.state != SubmissionState::Submitting {
            warn!(?outcome, state = ?self.state, "dropping outcome with no submission in flight");
            return;
        }
        self.state = match outcome {
            SubmissionOutcome::Accepted => SubmissionState::Succeeded,
            SubmissionOutcome::Rejected => SubmissionState::Failed(SERVICE_UNAVAILABLE.to_string()),
        };
    }

    /// Returns to Idle, abandoning any recorded result.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
