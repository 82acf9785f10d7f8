use crate::{build_request, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SnapshotLoaded(jobs) => {
            state.replace_jobs(jobs);
            Vec::new()
        }
        Msg::GenerateClicked(form) => {
            // The Generate trigger is disabled while a submission is in
            // flight; the machine tolerates a duplicate click anyway.
            if state.is_generating() {
                return (state, Vec::new());
            }
            match build_request(&form) {
                Ok(request) => {
                    state.set_generating(true);
                    vec![Effect::SubmitGeneration(request)]
                }
                Err(err) => {
                    state.set_error(err.to_string());
                    Vec::new()
                }
            }
        }
        Msg::JobCreated(job) => {
            // Optimistic prepend, then reconcile against the authoritative
            // collection right away.
            state.set_generating(false);
            state.prepend_job(job);
            vec![Effect::FetchJobs]
        }
        Msg::SubmitFailed(message) => {
            state.set_generating(false);
            state.set_error(format!("Failed to generate video: {message}"));
            Vec::new()
        }
        Msg::JobSelected(job_id) => {
            state.select_job(&job_id);
            Vec::new()
        }
        Msg::NextClicked => {
            state.select_next();
            Vec::new()
        }
        Msg::PrevClicked => {
            state.select_previous();
            Vec::new()
        }
        Msg::FilterChanged(filter) => {
            state.set_filter(filter);
            Vec::new()
        }
        Msg::ViewToggled => {
            state.toggle_view();
            Vec::new()
        }
        Msg::DeleteRequested(job_id) => {
            state.request_delete(&job_id);
            Vec::new()
        }
        Msg::DeleteConfirmed => match state.confirm_delete() {
            Some(job_id) => vec![Effect::DeleteJob(job_id)],
            None => Vec::new(),
        },
        Msg::DeleteCancelled => {
            state.cancel_delete();
            Vec::new()
        }
        Msg::JobDeleted(job_id) => {
            state.remove_job(&job_id);
            Vec::new()
        }
        Msg::DeleteFailed { job_id, message } => {
            state.set_error(format!("Failed to delete video {job_id}: {message}"));
            Vec::new()
        }
        Msg::RowMenuOpened { job_id, anchor } => {
            state.open_row_menu(job_id, anchor);
            Vec::new()
        }
        Msg::RowMenuClosed => {
            state.close_row_menu();
            Vec::new()
        }
        Msg::SettingsToggled { anchor } => {
            state.toggle_settings(anchor);
            Vec::new()
        }
        Msg::OutsidePressed => {
            state.close_overlays();
            Vec::new()
        }
        Msg::ListScrolled => {
            state.overlays_scrolled();
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.clear_error();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
