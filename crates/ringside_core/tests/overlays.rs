use ringside_core::{
    row_menu_position, settings_offsets, update, AnchorRect, AppState, Job, JobStatus, Msg,
    OverlayCoordinator, OverlayKind, Size, Viewport,
};

fn job(id: &str) -> Job {
    Job {
        id: id.to_string(),
        prompt: format!("prompt {id}"),
        status: JobStatus::Completed,
        video_url: Some(format!("/videos/{id}/video.mp4")),
        thumbnail_url: None,
        cost: None,
        error: None,
        created_at: "2026-08-01T12:00:00Z".to_string(),
    }
}

fn anchor(left: f64, top: f64) -> AnchorRect {
    AnchorRect {
        left,
        top,
        width: 24.0,
        height: 24.0,
    }
}

#[test]
fn row_menu_sits_left_of_its_trigger() {
    let position = row_menu_position(
        anchor(400.0, 120.0),
        Size {
            width: 160.0,
            height: 96.0,
        },
    );
    assert_eq!(position.x, 400.0 - 160.0 - 8.0);
    assert_eq!(position.y, 120.0);
}

#[test]
fn settings_popup_hangs_above_right_aligned() {
    let offsets = settings_offsets(
        anchor(700.0, 500.0),
        Viewport {
            width: 1280.0,
            height: 720.0,
        },
    );
    assert_eq!(offsets.bottom, 720.0 - 500.0 + 10.0);
    assert_eq!(offsets.right, 1280.0 - (700.0 + 24.0) - 10.0);
}

#[test]
fn second_trigger_replaces_open_overlay_of_same_kind() {
    let mut overlays = OverlayCoordinator::default();
    overlays.open(OverlayKind::RowMenu, "a", anchor(10.0, 10.0));
    overlays.open(OverlayKind::RowMenu, "b", anchor(10.0, 60.0));

    let open = overlays.open_overlay(OverlayKind::RowMenu).unwrap();
    assert_eq!(open.trigger, "b");
}

#[test]
fn kinds_are_independent() {
    let mut overlays = OverlayCoordinator::default();
    overlays.open(OverlayKind::RowMenu, "a", anchor(10.0, 10.0));
    overlays.open(OverlayKind::Settings, "settings", anchor(700.0, 500.0));

    assert!(overlays.is_open(OverlayKind::RowMenu));
    assert!(overlays.is_open(OverlayKind::Settings));

    overlays.close(OverlayKind::Settings);
    assert!(overlays.is_open(OverlayKind::RowMenu));
    assert!(!overlays.is_open(OverlayKind::Settings));
}

#[test]
fn scroll_closes_row_menu_but_not_settings() {
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::SnapshotLoaded(vec![job("a")]));
    let (state, _effects) = update(
        state,
        Msg::RowMenuOpened {
            job_id: "a".to_string(),
            anchor: anchor(400.0, 120.0),
        },
    );
    let (state, _effects) = update(
        state,
        Msg::SettingsToggled {
            anchor: anchor(700.0, 500.0),
        },
    );
    assert!(state.view().row_menu_open_for.is_some());
    assert!(state.view().settings_open);

    let (state, _effects) = update(state, Msg::ListScrolled);
    let view = state.view();
    assert!(view.row_menu_open_for.is_none());
    assert!(view.settings_open);
}

#[test]
fn outside_press_closes_everything() {
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::SnapshotLoaded(vec![job("a")]));
    let (state, _effects) = update(
        state,
        Msg::RowMenuOpened {
            job_id: "a".to_string(),
            anchor: anchor(400.0, 120.0),
        },
    );
    let (state, _effects) = update(
        state,
        Msg::SettingsToggled {
            anchor: anchor(700.0, 500.0),
        },
    );

    let (state, _effects) = update(state, Msg::OutsidePressed);
    let view = state.view();
    assert!(view.row_menu_open_for.is_none());
    assert!(!view.settings_open);
}

#[test]
fn settings_toggle_closes_an_open_popup() {
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::SettingsToggled {
            anchor: anchor(700.0, 500.0),
        },
    );
    assert!(state.view().settings_open);

    let (state, _effects) = update(
        state,
        Msg::SettingsToggled {
            anchor: anchor(700.0, 500.0),
        },
    );
    assert!(!state.view().settings_open);
}

#[test]
fn row_menu_for_unknown_job_is_ignored() {
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::RowMenuOpened {
            job_id: "ghost".to_string(),
            anchor: anchor(0.0, 0.0),
        },
    );
    assert!(state.view().row_menu_open_for.is_none());
}
