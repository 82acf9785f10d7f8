use crate::{GenerationRequest, JobId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full job collection from the backend.
    FetchJobs,
    /// Send a generation request.
    SubmitGeneration(GenerationRequest),
    /// Request backend deletion of one job.
    DeleteJob(JobId),
}
