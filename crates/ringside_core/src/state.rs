use crate::filter::{completed_jobs, filtered_jobs};
use crate::view_model::{AppViewModel, CurrentVideoView, JobRowView, PROMPT_HISTORY_LIMIT};
use crate::{
    AnchorRect, DeletionState, Job, JobId, OverlayCoordinator, OverlayKind, SelectionState,
    StatusFilter, ViewMode,
};

/// The single source of truth the view reads from.
///
/// The job collection is mutated only here: polls apply full snapshot
/// replacement, deletion applies targeted removal, and every mutation is
/// followed by a selection reconcile so nothing ever points at a missing job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    jobs: Vec<Job>,
    selection: SelectionState,
    filter: StatusFilter,
    view_mode: ViewMode,
    deletion: DeletionState,
    overlays: OverlayCoordinator,
    generating: bool,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let completed = completed_jobs(&self.jobs);
        let current_job = self
            .selection
            .current()
            .and_then(|id| self.jobs.iter().find(|job| &job.id == id));

        let current_video = current_job.and_then(|job| {
            let video_url = job.video_url.clone()?;
            job.is_completed().then(|| CurrentVideoView {
                id: job.id.clone(),
                prompt: job.prompt.clone(),
                video_url,
                created_at: job.created_at.clone(),
            })
        });

        let nav_index = self.selection.nav_index();
        AppViewModel {
            jobs: filtered_jobs(&self.jobs, self.filter)
                .into_iter()
                .map(|job| self.job_row(job))
                .collect(),
            filter: self.filter,
            view_mode: self.view_mode,
            current_video,
            completed_count: completed.len(),
            nav_index,
            can_go_prev: nav_index > 0 && !completed.is_empty(),
            can_go_next: nav_index + 1 < completed.len(),
            generating: self.generating,
            pending_delete: self.deletion.pending().map(|job| self.job_row(job)),
            row_menu_open_for: self
                .overlays
                .open_overlay(OverlayKind::RowMenu)
                .map(|overlay| overlay.trigger.clone()),
            settings_open: self.overlays.is_open(OverlayKind::Settings),
            prompt_history: completed
                .iter()
                .take(PROMPT_HISTORY_LIMIT)
                .map(|job| job.prompt.clone())
                .collect(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    fn job_row(&self, job: &Job) -> JobRowView {
        JobRowView {
            id: job.id.clone(),
            prompt: job.prompt.clone(),
            status: job.status,
            thumbnail_url: job.thumbnail_url.clone(),
            cost: job.cost,
            created_at: job.created_at.clone(),
            selected: self.selection.current() == Some(&job.id),
        }
    }

    /// Returns whether a re-render is due, resetting the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub(crate) fn is_generating(&self) -> bool {
        self.generating
    }

    /// Snapshot replacement: the poll body is authoritative, never merged.
    pub(crate) fn replace_jobs(&mut self, snapshot: Vec<Job>) {
        if self.jobs == snapshot {
            return;
        }
        self.jobs = snapshot;
        self.selection.reconcile(&self.jobs);
        self.mark_dirty();
    }

    /// Optimistic insert of a freshly created job at the head.
    pub(crate) fn prepend_job(&mut self, job: Job) {
        self.jobs.insert(0, job);
        self.selection.reconcile(&self.jobs);
        self.mark_dirty();
    }

    /// Targeted removal by identity, e.g. after a confirmed deletion.
    pub(crate) fn remove_job(&mut self, job_id: &JobId) {
        let before = self.jobs.len();
        self.jobs.retain(|job| &job.id != job_id);
        if self.jobs.len() != before {
            self.selection.reconcile(&self.jobs);
            self.mark_dirty();
        }
    }

    pub(crate) fn select_job(&mut self, job_id: &JobId) {
        if !self.jobs.iter().any(|job| &job.id == job_id) {
            return;
        }
        self.selection.select(job_id, &self.jobs);
        self.mark_dirty();
    }

    pub(crate) fn select_next(&mut self) {
        if self.selection.next(&self.jobs) {
            self.mark_dirty();
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selection.previous(&self.jobs) {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_filter(&mut self, filter: StatusFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.mark_dirty();
    }

    pub(crate) fn set_generating(&mut self, generating: bool) {
        if self.generating != generating {
            self.generating = generating;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn clear_error(&mut self) {
        if self.last_error.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Arm the confirmation modal for a job that is still in the store.
    /// The row menu is closed alongside; the modal replaces it.
    pub(crate) fn request_delete(&mut self, job_id: &JobId) {
        let Some(job) = self.jobs.iter().find(|job| &job.id == job_id).cloned() else {
            return;
        };
        self.deletion.request(job);
        self.overlays.close(OverlayKind::RowMenu);
        self.mark_dirty();
    }

    pub(crate) fn confirm_delete(&mut self) -> Option<JobId> {
        let confirmed = self.deletion.confirm();
        if confirmed.is_some() {
            self.mark_dirty();
        }
        confirmed
    }

    pub(crate) fn cancel_delete(&mut self) {
        if self.deletion.pending().is_some() {
            self.deletion.cancel();
            self.mark_dirty();
        }
    }

    pub(crate) fn open_row_menu(&mut self, job_id: JobId, anchor: AnchorRect) {
        if !self.jobs.iter().any(|job| job.id == job_id) {
            return;
        }
        self.overlays.open(OverlayKind::RowMenu, job_id, anchor);
        self.mark_dirty();
    }

    pub(crate) fn close_row_menu(&mut self) {
        if self.overlays.is_open(OverlayKind::RowMenu) {
            self.overlays.close(OverlayKind::RowMenu);
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_settings(&mut self, anchor: AnchorRect) {
        if self.overlays.is_open(OverlayKind::Settings) {
            self.overlays.close(OverlayKind::Settings);
        } else {
            self.overlays.open(OverlayKind::Settings, "settings", anchor);
        }
        self.mark_dirty();
    }

    pub(crate) fn close_overlays(&mut self) {
        if self.overlays.is_open(OverlayKind::RowMenu) || self.overlays.is_open(OverlayKind::Settings)
        {
            self.overlays.close_all();
            self.mark_dirty();
        }
    }

    pub(crate) fn overlays_scrolled(&mut self) {
        if self.overlays.is_open(OverlayKind::RowMenu) {
            self.overlays.scrolled();
            self.mark_dirty();
        }
    }
}
