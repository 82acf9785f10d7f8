use crate::filter::completed_jobs;
use crate::{Job, JobId};

/// The job considered "current" for playback plus a navigation index into
/// the ordered completed-jobs sequence.
///
/// The index is only meaningful relative to the sequence at call time; it is
/// recomputed on every store change rather than reused, so it can never point
/// at an unrelated job after a poll or deletion reshapes the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    current: Option<JobId>,
    nav_index: usize,
}

impl SelectionState {
    pub fn current(&self) -> Option<&JobId> {
        self.current.as_ref()
    }

    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    /// Explicit user selection. Completed jobs re-anchor the navigation
    /// index; anything else keeps the previous index.
    pub fn select(&mut self, job_id: &JobId, jobs: &[Job]) {
        self.current = Some(job_id.clone());
        let completed = completed_jobs(jobs);
        if let Some(pos) = completed.iter().position(|job| &job.id == job_id) {
            self.nav_index = pos;
        }
    }

    /// Advance to the next completed job. Inert at the last index and when
    /// the sequence is empty.
    pub fn next(&mut self, jobs: &[Job]) -> bool {
        let completed = completed_jobs(jobs);
        if self.nav_index + 1 >= completed.len() {
            return false;
        }
        self.nav_index += 1;
        self.current = Some(completed[self.nav_index].id.clone());
        true
    }

    /// Retreat to the previous completed job. Inert at index 0.
    pub fn previous(&mut self, jobs: &[Job]) -> bool {
        if self.nav_index == 0 || completed_jobs(jobs).is_empty() {
            return false;
        }
        self.nav_index -= 1;
        self.current = Some(completed_jobs(jobs)[self.nav_index].id.clone());
        true
    }

    /// Re-derive selection after the collection changed.
    ///
    /// A vanished current job clears the selection and auto-selects the first
    /// completed job. A surviving completed current job re-anchors the index
    /// at its position; a surviving non-completed one keeps the index clamped
    /// to the sequence bounds.
    pub fn reconcile(&mut self, jobs: &[Job]) {
        if let Some(current) = &self.current {
            if !jobs.iter().any(|job| &job.id == current) {
                self.current = None;
            }
        }

        let completed = completed_jobs(jobs);
        match &self.current {
            Some(current) => {
                if let Some(pos) = completed.iter().position(|job| &job.id == current) {
                    self.nav_index = pos;
                } else {
                    self.nav_index = self.nav_index.min(completed.len().saturating_sub(1));
                }
            }
            None => {
                if let Some(first) = completed.first() {
                    self.current = Some(first.id.clone());
                    self.nav_index = 0;
                } else {
                    self.nav_index = 0;
                }
            }
        }
    }
}
