//! Simulated registration call.
//!
//! There is no real backend. A dispatched submission logs its payload,
//! sleeps out the fixed delay on a worker thread, and reports the
//! outcome over a channel polled from the UI loop.

use std::thread;

use crossbeam_channel::{Receiver, bounded};

use devday_core::{OutcomeSource, SUBMISSION_DELAY, SubmissionOutcome};
use devday_model::RegistrationInput;

/// Dispatches the simulated call for an already-validated input.
///
/// The outcome is drawn from the source at dispatch time and carried by
/// the worker through the delay; the returned receiver yields it once
/// the delay has elapsed. The input itself is discarded; nothing is
/// persisted.
pub fn dispatch(
    input: &RegistrationInput,
    source: &mut dyn OutcomeSource,
) -> Receiver<SubmissionOutcome> {
    let outcome = source.decide();

    match serde_json::to_string(input) {
        Ok(payload) => tracing::debug!(payload, "Dispatching registration"),
        Err(e) => tracing::debug!("Dispatching registration (payload unavailable: {})", e),
    }

    let (sender, receiver) = bounded(1);
    thread::spawn(move || {
        thread::sleep(SUBMISSION_DELAY);
        tracing::info!(?outcome, "Registration call resolved");
        // The app may have shut down while the call was in flight.
        let _ = sender.send(outcome);
    });

    receiver
}
