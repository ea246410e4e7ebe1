//! Per-submission lifecycle tracking.

use std::fmt;

use tracing::debug;

/// Where a submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Rendering,
    Requesting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(self, next: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rendering)
                | (Validating, Failed)
                | (Rendering, Requesting)
                | (Rendering, Failed)
                | (Requesting, Succeeded)
                | (Requesting, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Validating => "validating",
            SubmissionPhase::Rendering => "rendering",
            SubmissionPhase::Requesting => "requesting",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Records the phases one submission passes through.
#[derive(Debug, Clone)]
pub struct Submission {
    history: Vec<SubmissionPhase>,
}

impl Default for Submission {
    fn default() -> Self {
        Self { history: vec![SubmissionPhase::Idle] }
    }
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.history.last().copied().unwrap_or(SubmissionPhase::Idle)
    }

    pub fn history(&self) -> &[SubmissionPhase] {
        &self.history
    }

    /// Move to `next`. Transitions the lifecycle does not allow are ignored and logged.
    pub fn advance(&mut self, next: SubmissionPhase) {
        let current = self.phase();
        if !current.can_transition_to(next) {
            debug!(target: "submission", from = %current, to = %next, "ignored invalid transition");
            return;
        }
        debug!(target: "submission", from = %current, to = %next, "phase transition");
        self.history.push(next);
    }

    /// Settle into a terminal phase, then return to idle.
    pub fn finish(&mut self, succeeded: bool) {
        if !self.phase().is_terminal() {
            self.advance(if succeeded { SubmissionPhase::Succeeded } else { SubmissionPhase::Failed });
        }
        self.advance(SubmissionPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubmissionPhase::*;

    #[test]
    fn happy_path_returns_to_idle() {
        let mut submission = Submission::new();
        submission.advance(Validating);
        submission.advance(Rendering);
        submission.advance(Requesting);
        submission.finish(true);
        assert_eq!(submission.history(), &[Idle, Validating, Rendering, Requesting, Succeeded, Idle]);
    }

    #[test]
    fn validation_failure_skips_request() {
        let mut submission = Submission::new();
        submission.advance(Validating);
        submission.finish(false);
        assert_eq!(submission.history(), &[Idle, Validating, Failed, Idle]);
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        let mut submission = Submission::new();
        submission.advance(Requesting);
        assert_eq!(submission.phase(), Idle);
        assert!(!Succeeded.can_transition_to(Requesting));
        assert!(!Idle.can_transition_to(Succeeded));
    }
}
