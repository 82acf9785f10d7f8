use crate::{Job, JobId};

/// Confirm-then-commit state machine guarding destructive removal.
///
/// Holds at most one pending target; arming while already armed replaces the
/// target. The UI disables the trigger while a confirmation is open, but the
/// machine does not rely on that.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    PendingConfirmation(Job),
}

impl DeletionState {
    pub fn request(&mut self, job: Job) {
        *self = DeletionState::PendingConfirmation(job);
    }

    /// Returns the confirmed target id, transitioning back to `Idle`.
    /// Inert when nothing is pending.
    pub fn confirm(&mut self) -> Option<JobId> {
        match std::mem::take(self) {
            DeletionState::Idle => None,
            DeletionState::PendingConfirmation(job) => Some(job.id),
        }
    }

    /// Discard the target with no side effects.
    pub fn cancel(&mut self) {
        *self = DeletionState::Idle;
    }

    pub fn pending(&self) -> Option<&Job> {
        match self {
            DeletionState::Idle => None,
            DeletionState::PendingConfirmation(job) => Some(job),
        }
    }
}
