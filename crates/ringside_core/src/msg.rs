use crate::{AnchorRect, GenerationForm, Job, JobId, StatusFilter};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Poll snapshot arrived; replaces the local collection wholesale.
    SnapshotLoaded(Vec<Job>),
    /// User pressed Generate with the current form contents.
    GenerateClicked(GenerationForm),
    /// Backend accepted the generation request and created this job.
    JobCreated(Job),
    /// Generation request rejected or malformed.
    SubmitFailed(String),
    /// User clicked a job row to make it current.
    JobSelected(JobId),
    /// Advance within the completed-jobs sequence.
    NextClicked,
    /// Retreat within the completed-jobs sequence.
    PrevClicked,
    /// User picked a status filter chip.
    FilterChanged(StatusFilter),
    /// Toggle between compact-list and single-large-item layout.
    ViewToggled,
    /// User asked to delete a job; arms the confirmation modal.
    DeleteRequested(JobId),
    /// User confirmed the pending deletion.
    DeleteConfirmed,
    /// User dismissed the confirmation modal.
    DeleteCancelled,
    /// Backend confirmed deletion of this job.
    JobDeleted(JobId),
    /// Backend rejected the deletion; the job stays in the store.
    DeleteFailed { job_id: JobId, message: String },
    /// User opened a row's contextual menu from its trigger.
    RowMenuOpened { job_id: JobId, anchor: AnchorRect },
    RowMenuClosed,
    /// User toggled the settings popup from its trigger.
    SettingsToggled { anchor: AnchorRect },
    /// Pointer press outside any overlay and its trigger.
    OutsidePressed,
    /// Scroll anywhere in the document.
    ListScrolled,
    /// User dismissed the error banner.
    ErrorDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
