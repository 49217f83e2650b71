//! Registration form state

use crossbeam_channel::{Receiver, TryRecvError};

use devday_core::{OutcomeSource, Submission, SubmissionOutcome, SubmissionState, SubmitError};
use devday_model::RegistrationInput;
use devday_validate::ValidationReport;

use crate::services::submission::dispatch;

/// Everything the registration section owns: the draft input, the
/// submission machine, the report driving the inline field messages,
/// and the channel carrying the in-flight simulated call.
pub struct RegistrationState {
    pub input: RegistrationInput,
    pub submission: Submission,
    /// Report from the most recent submit attempt. Rebuilt wholesale on
    /// every attempt, never edited field by field.
    pub report: ValidationReport,
    /// Receives the outcome of the in-flight call, if one is running.
    pub pending: Option<Receiver<SubmissionOutcome>>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            input: RegistrationInput::default(),
            submission: Submission::new(),
            report: ValidationReport::default(),
            pending: None,
        }
    }
}

impl RegistrationState {
    /// Validates the draft and, if clean, dispatches the simulated call.
    /// Validation failures update the report and leave the machine
    /// untouched.
    pub fn submit(&mut self, source: &mut dyn OutcomeSource) {
        match self.submission.begin(&self.input) {
            Ok(()) => {
                self.report = ValidationReport::default();
                self.pending = Some(dispatch(&self.input, source));
            }
            Err(SubmitError::Validation(report)) => {
                tracing::debug!(
                    issues = report.issue_count(),
                    "submission blocked by validation"
                );
                self.report = report;
            }
            Err(err) => {
                tracing::warn!(%err, "submit request ignored");
            }
        }
    }

    /// Checks the in-flight call and applies its outcome if it has
    /// resolved. A worker that vanished without reporting counts as a
    /// rejection.
    pub fn poll(&mut self) {
        let Some(receiver) = &self.pending else {
            return;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.submission.resolve(outcome);
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("submission worker dropped without reporting an outcome");
                self.submission.resolve(SubmissionOutcome::Rejected);
                self.pending = None;
            }
        }
    }

    /// Clears the form and returns the machine to Idle.
    pub fn reset(&mut self) {
        self.input = RegistrationInput::default();
        self.report = ValidationReport::default();
        self.submission.reset();
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Banner text when the last call was rejected.
    pub fn failure_message(&self) -> Option<&str> {
        match self.submission.state() {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        *self.submission.state() == SubmissionState::Succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devday_core::FixedOutcome;
    use devday_model::Role;
    use devday_validate::FieldId;

    fn filled_input() -> RegistrationInput {
        RegistrationInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@denverdevday.com".to_string(),
            role: Some(Role::Developer),
            company: "Denver Devs".to_string(),
            dietary: "None".to_string(),
            newsletter: true,
        }
    }

    #[test]
    fn invalid_draft_records_report_without_dispatching() {
        let mut state = RegistrationState::default();
        let mut source = FixedOutcome(SubmissionOutcome::Accepted);

        state.submit(&mut source);

        assert!(!state.is_submitting());
        assert!(state.pending.is_none());
        assert!(state.report.issue_for(FieldId::FullName).is_some());
    }

    #[test]
    fn valid_draft_dispatches_and_clears_old_report() {
        let mut state = RegistrationState::default();
        let mut source = FixedOutcome(SubmissionOutcome::Accepted);

        state.submit(&mut source);
        assert!(!state.report.is_valid());

        state.input = filled_input();
        state.submit(&mut source);

        assert!(state.is_submitting());
        assert!(state.pending.is_some());
        assert!(state.report.is_valid());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut state = RegistrationState::default();
        state.input = filled_input();
        state.reset();

        assert_eq!(state.input, RegistrationInput::default());
        assert!(state.report.is_valid());
        assert!(!state.is_submitting());
    }

    #[test]
    fn poll_without_pending_call_is_a_no_op() {
        let mut state = RegistrationState::default();
        state.poll();
        assert!(!state.succeeded());
        assert!(state.failure_message().is_none());
    }

    #[test]
    fn dropped_worker_surfaces_as_rejection() {
        let mut state = RegistrationState::default();
        state.input = filled_input();
        state.submission.begin(&state.input).expect("begin");

        let (sender, receiver) = crossbeam_channel::bounded(1);
        drop(sender);
        state.pending = Some(receiver);

        state.poll();
        assert!(state.failure_message().is_some());
        assert!(state.pending.is_none());
    }

    #[test]
    fn delivered_outcome_resolves_the_machine() {
        let mut state = RegistrationState::default();
        state.input = filled_input();
        state.submission.begin(&state.input).expect("begin");

        let (sender, receiver) = crossbeam_channel::bounded(1);
        sender.send(SubmissionOutcome::Accepted).expect("send");
        state.pending = Some(receiver);

        state.poll();
        assert!(state.succeeded());
        assert!(state.pending.is_none());
    }
}
