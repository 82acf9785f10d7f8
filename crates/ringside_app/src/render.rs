use chrono::DateTime;
use ringside_core::{AppViewModel, JobRowView, StatusFilter, ViewMode};

/// Plain-text rendering of the view model, one String per screen.
pub fn render(view: &AppViewModel) -> String {
    let mut lines = Vec::new();
    lines.push(header_line(view));

    if let Some(error) = &view.last_error {
        lines.push(format!("! {error} (dismiss to clear)"));
    }
    if view.generating {
        lines.push("generating...".to_string());
    }
    if let Some(pending) = &view.pending_delete {
        lines.push(format!(
            "delete \"{}\" ({})? confirm / cancel",
            pending.prompt, pending.id
        ));
    }

    match view.view_mode {
        ViewMode::List => {
            if view.jobs.is_empty() {
                lines.push("  (no jobs)".to_string());
            }
            for row in &view.jobs {
                lines.push(format_job_row(row));
            }
        }
        ViewMode::Embed => match &view.current_video {
            Some(video) => {
                lines.push(format!("  {}", video.prompt));
                lines.push(format!("  {}", video.video_url));
                lines.push(format!("  created {}", format_timestamp(&video.created_at)));
            }
            None => lines.push("  (no completed video selected)".to_string()),
        },
    }

    if view.view_mode == ViewMode::List {
        if let Some(video) = &view.current_video {
            lines.push(format!("now playing: {} ({})", video.prompt, video.video_url));
        }
    }

    lines.join("\n")
}

fn header_line(view: &AppViewModel) -> String {
    let position = if view.completed_count > 0 {
        format!(" ({}/{})", view.nav_index + 1, view.completed_count)
    } else {
        String::new()
    };
    format!(
        "jobs: {} | filter: {} | view: {} | completed: {}{}",
        view.jobs.len(),
        filter_label(view.filter),
        view_label(view.view_mode),
        view.completed_count,
        position
    )
}

fn format_job_row(row: &JobRowView) -> String {
    let marker = if row.selected { '>' } else { ' ' };
    let cost = row
        .cost
        .map(|c| format!(" ${c:.2}"))
        .unwrap_or_default();
    format!(
        "{marker} [{status}] {id}{cost}  {created}  {prompt}",
        status = row.status.label(),
        id = row.id,
        created = format_timestamp(&row.created_at),
        prompt = row.prompt
    )
}

// Timestamps arrive as RFC 3339 strings; an unparsable one renders as-is.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn filter_label(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "all",
        StatusFilter::Completed => "completed",
        StatusFilter::Failed => "failed",
    }
}

fn view_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::List => "list",
        ViewMode::Embed => "embed",
    }
}
