//! Ringside core: pure job-lifecycle state machine and view-model helpers.
mod deletion;
mod effect;
mod filter;
mod job;
mod msg;
mod overlay;
mod request;
mod selection;
mod state;
mod update;
mod view_model;

pub use deletion::DeletionState;
pub use effect::Effect;
pub use filter::{completed_jobs, filtered_jobs, StatusFilter, ViewMode};
pub use job::{Job, JobId, JobStatus};
pub use msg::Msg;
pub use overlay::{
    row_menu_position, settings_offsets, AnchorRect, CornerOffsets, OpenOverlay,
    OverlayCoordinator, OverlayKind, Point, Size, Viewport,
};
pub use request::{
    build_request, ClipDuration, FormError, GenerationForm, GenerationRequest, Orientation, MODEL,
};
pub use selection::SelectionState;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, CurrentVideoView, JobRowView, PROMPT_HISTORY_LIMIT};
