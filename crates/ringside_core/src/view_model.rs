use crate::{JobId, JobStatus, StatusFilter, ViewMode};

/// How many recent completed prompts the history surface offers.
pub const PROMPT_HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct JobRowView {
    pub id: JobId,
    pub prompt: String,
    pub status: JobStatus,
    pub thumbnail_url: Option<String>,
    pub cost: Option<f64>,
    pub created_at: String,
    pub selected: bool,
}

/// The playback surface; present only when the current job is completed and
/// carries a video URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentVideoView {
    pub id: JobId,
    pub prompt: String,
    pub video_url: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    /// Rows after applying the status filter, collection order preserved.
    pub jobs: Vec<JobRowView>,
    pub filter: StatusFilter,
    pub view_mode: ViewMode,
    pub current_video: Option<CurrentVideoView>,
    pub completed_count: usize,
    pub nav_index: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub generating: bool,
    /// Set while the deletion workflow awaits confirmation.
    pub pending_delete: Option<JobRowView>,
    pub row_menu_open_for: Option<JobId>,
    pub settings_open: bool,
    pub prompt_history: Vec<String>,
    pub last_error: Option<String>,
    pub dirty: bool,
}
