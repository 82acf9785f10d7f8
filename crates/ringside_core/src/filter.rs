use crate::{Job, JobStatus};

/// Which subset of jobs the list renders. Never mutates the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Failed,
}

impl StatusFilter {
    fn matches(self, job: &Job) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => job.status == JobStatus::Completed,
            StatusFilter::Failed => job.status == JobStatus::Failed,
        }
    }
}

/// Rendering layout only; no effect on data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Embed,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Embed,
            ViewMode::Embed => ViewMode::List,
        }
    }
}

/// Pure derivation of the displayed subset; collection order is preserved.
pub fn filtered_jobs(jobs: &[Job], filter: StatusFilter) -> Vec<&Job> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

/// The ordered completed-jobs sequence used for prev/next navigation.
pub fn completed_jobs(jobs: &[Job]) -> Vec<&Job> {
    jobs.iter().filter(|job| job.is_completed()).collect()
}
