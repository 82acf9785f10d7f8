use std::sync::Once;

use ringside_core::{update, AppState, Job, JobStatus, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn job(id: &str, status: JobStatus) -> Job {
    Job {
        id: id.to_string(),
        prompt: format!("prompt {id}"),
        status,
        video_url: (status == JobStatus::Completed).then(|| format!("/videos/{id}/video.mp4")),
        thumbnail_url: None,
        cost: None,
        error: None,
        created_at: "2026-08-01T12:00:00Z".to_string(),
    }
}

fn loaded(jobs: Vec<Job>) -> AppState {
    let (state, _effects) = update(AppState::new(), Msg::SnapshotLoaded(jobs));
    state
}

#[test]
fn first_completed_job_is_auto_selected() {
    init_logging();
    let state = loaded(vec![
        job("p", JobStatus::Pending),
        job("c1", JobStatus::Completed),
        job("c2", JobStatus::Completed),
    ]);

    let view = state.view();
    assert_eq!(view.current_video.map(|v| v.id), Some("c1".to_string()));
    assert_eq!(view.nav_index, 0);
    assert!(!view.can_go_prev);
    assert!(view.can_go_next);
}

#[test]
fn no_completed_jobs_renders_placeholder() {
    init_logging();
    let state = loaded(vec![
        job("p", JobStatus::Pending),
        job("f", JobStatus::Failed),
    ]);

    let view = state.view();
    assert!(view.current_video.is_none());
    assert_eq!(view.completed_count, 0);
    assert!(!view.can_go_prev);
    assert!(!view.can_go_next);
}

#[test]
fn explicit_selection_recomputes_nav_index() {
    init_logging();
    let state = loaded(vec![
        job("c1", JobStatus::Completed),
        job("f", JobStatus::Failed),
        job("c2", JobStatus::Completed),
    ]);

    let (state, _effects) = update(state, Msg::JobSelected("c2".to_string()));
    let view = state.view();
    assert_eq!(view.current_video.map(|v| v.id), Some("c2".to_string()));
    // Position within the completed sequence, not the full collection.
    assert_eq!(view.nav_index, 1);
    assert!(view.can_go_prev);
    assert!(!view.can_go_next);
}

#[test]
fn selecting_unknown_job_is_ignored() {
    init_logging();
    let mut state = loaded(vec![job("c1", JobStatus::Completed)]);
    assert!(state.consume_dirty());

    let (mut state, _effects) = update(state, Msg::JobSelected("ghost".to_string()));
    assert_eq!(
        state.view().current_video.map(|v| v.id),
        Some("c1".to_string())
    );
    assert!(!state.consume_dirty());
}

#[test]
fn next_and_previous_walk_the_completed_sequence() {
    init_logging();
    let state = loaded(vec![
        job("c1", JobStatus::Completed),
        job("c2", JobStatus::Completed),
        job("c3", JobStatus::Completed),
    ]);

    let (state, _effects) = update(state, Msg::NextClicked);
    assert_eq!(
        state.view().current_video.as_ref().map(|v| v.id.clone()),
        Some("c2".to_string())
    );

    let (state, _effects) = update(state, Msg::NextClicked);
    assert_eq!(state.view().nav_index, 2);

    let (state, _effects) = update(state, Msg::PrevClicked);
    assert_eq!(
        state.view().current_video.map(|v| v.id),
        Some("c2".to_string())
    );
}

#[test]
fn navigation_clamps_at_both_bounds() {
    init_logging();
    let mut state = loaded(vec![
        job("c1", JobStatus::Completed),
        job("c2", JobStatus::Completed),
    ]);
    assert!(state.consume_dirty());

    // At index 0: previous is inert.
    let (mut state, _effects) = update(state, Msg::PrevClicked);
    assert_eq!(state.view().nav_index, 0);
    assert!(!state.consume_dirty());

    // Walk to the end, then next is inert.
    let (state, _effects) = update(state, Msg::NextClicked);
    let (mut state, _effects) = update(state, Msg::NextClicked);
    assert_eq!(state.view().nav_index, 1);
    assert!(state.consume_dirty());
    let (mut state, _effects) = update(state, Msg::NextClicked);
    assert_eq!(state.view().nav_index, 1);
    assert!(!state.consume_dirty());
}

#[test]
fn navigation_is_inert_on_empty_sequence() {
    init_logging();
    let mut state = loaded(vec![job("f", JobStatus::Failed)]);
    assert!(state.consume_dirty());

    let (state, _effects) = update(state, Msg::NextClicked);
    let (mut state, _effects) = update(state, Msg::PrevClicked);
    assert_eq!(state.view().nav_index, 0);
    assert!(!state.consume_dirty());
}

#[test]
fn unrelated_shrink_clamps_index_and_keeps_current() {
    init_logging();
    let state = loaded(vec![
        job("c1", JobStatus::Completed),
        job("c2", JobStatus::Completed),
        job("c3", JobStatus::Completed),
    ]);
    let (state, _effects) = update(state, Msg::JobSelected("c3".to_string()));
    assert_eq!(state.view().nav_index, 2);

    // "c1" disappears; the current job survives, so its index is re-derived
    // from the new sequence instead of pointing one past the end.
    let (state, _effects) = update(
        state,
        Msg::SnapshotLoaded(vec![
            job("c2", JobStatus::Completed),
            job("c3", JobStatus::Completed),
        ]),
    );
    let view = state.view();
    assert_eq!(view.current_video.map(|v| v.id), Some("c3".to_string()));
    assert_eq!(view.nav_index, 1);
}
