use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Resolution of a dispatched registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

/// Decides how a dispatched submission resolves.
///
/// The application wires in [`SimulatedGateway`]; tests inject
/// [`FixedOutcome`] to pin one path.
pub trait OutcomeSource {
    fn decide(&mut self) -> SubmissionOutcome;
}

const ACCEPT_NUMERATOR: u32 = 9;
const ACCEPT_DENOMINATOR: u32 = 10;

/// Stand-in for the real registration backend: accepts nine in ten
/// submissions, drawn from a seedable generator. The ratio is a
/// placeholder with no contract behind it.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    rng: ChaCha8Rng,
}

impl SimulatedGateway {
    /// Gateway seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Gateway with a fixed seed, for reproducible outcome sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSource for SimulatedGateway {
    fn decide(&mut self) -> SubmissionOutcome {
        if self.rng.random_ratio(ACCEPT_NUMERATOR, ACCEPT_DENOMINATOR) {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected
        }
    }
}

/// Outcome source that always resolves the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub SubmissionOutcome);

impl OutcomeSource for FixedOutcome {
    fn decide(&mut self) -> SubmissionOutcome {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut a = SimulatedGateway::from_seed(42);
        let mut b = SimulatedGateway::from_seed(42);
        let first: Vec<_> = (0..32).map(|_| a.decide()).collect();
        let second: Vec<_> = (0..32).map(|_| b.decide()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn acceptance_dominates_over_many_draws() {
        let mut gateway = SimulatedGateway::from_seed(7);
        let accepted = (0..1000)
            .filter(|_| gateway.decide() == SubmissionOutcome::Accepted)
            .count();
        // Ratio is 9/10; anything near that clears 800 comfortably.
        assert!(accepted > 800, "accepted {} of 1000", accepted);
    }

    #[test]
    fn fixed_outcome_never_varies() {
        let mut source = FixedOutcome(SubmissionOutcome::Rejected);
        for _ in 0..8 {
            assert_eq!(source.decide(), SubmissionOutcome::Rejected);
        }
    }
}
