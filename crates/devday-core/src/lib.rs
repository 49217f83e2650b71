//! Submission state machine and outcome sources for the registration
//! form. Validation comes from `devday-validate`; the simulated gateway
//! here only decides how a dispatched call resolves.

pub mod outcome;
pub mod submission;

pub use outcome::{FixedOutcome, OutcomeSource, SimulatedGateway, SubmissionOutcome};
pub use submission::{
    SERVICE_UNAVAILABLE, SUBMISSION_DELAY, Submission, SubmissionState, SubmitError,
};
