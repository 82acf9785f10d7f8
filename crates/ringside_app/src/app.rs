use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::client_info;
use ringside_client::{ApiError, ApiSettings};
use ringside_core::{update, AppState, GenerationForm, Msg};

use crate::effects::EffectRunner;
use crate::input::{parse_command, ShellCommand, HELP_TEXT};
use crate::render;

const LOOP_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> Result<(), ApiError> {
    let settings = ApiSettings {
        base_url: std::env::var("RINGSIDE_API_URL")
            .unwrap_or_else(|_| ApiSettings::default().base_url),
        ..ApiSettings::default()
    };
    client_info!("connecting to {}", settings.base_url);

    let runner = EffectRunner::new(settings)?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let line_rx = spawn_input_thread();

    let mut state = AppState::new();
    // Form fields persist across requests; only the prompt comes from the
    // generate command itself.
    let mut form = GenerationForm::default();

    println!("ringside — type 'help' for commands");

    loop {
        runner.pump(&msg_tx);

        while let Ok(line) = line_rx.try_recv() {
            match parse_command(&line) {
                Ok(ShellCommand::Quit) => {
                    // Tear down the poll loop; in-flight results are dropped.
                    runner.shutdown();
                    return Ok(());
                }
                Ok(ShellCommand::Help) => println!("{HELP_TEXT}"),
                Ok(ShellCommand::Show) => println!("{}", render::render(&state.view())),
                Ok(ShellCommand::History) => {
                    let history = state.view().prompt_history;
                    if history.is_empty() {
                        println!("(no completed prompts yet)");
                    }
                    for (i, prompt) in history.iter().enumerate() {
                        println!("{:2}. {prompt}", i + 1);
                    }
                }
                Ok(command) => {
                    if let Some(msg) = apply_command(command, &mut form) {
                        let _ = msg_tx.send(msg);
                    }
                }
                Err(usage) => println!("{usage}"),
            }
        }

        let mut dirty = false;
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
            dirty |= state.consume_dirty();
        }
        if dirty {
            println!("{}", render::render(&state.view()));
        }

        thread::sleep(LOOP_INTERVAL);
    }
}

/// Form tweaks mutate the local form; everything else maps onto a message.
fn apply_command(command: ShellCommand, form: &mut GenerationForm) -> Option<Msg> {
    match command {
        ShellCommand::Generate(prompt) => {
            form.prompt = prompt;
            Some(Msg::GenerateClicked(form.clone()))
        }
        ShellCommand::Image(id) => {
            form.custom_image_id = Some(id);
            None
        }
        ShellCommand::Orientation(orientation) => {
            form.orientation = orientation;
            None
        }
        ShellCommand::Duration(duration) => {
            form.duration = duration;
            None
        }
        ShellCommand::ToggleMusic => {
            form.no_music = !form.no_music;
            None
        }
        ShellCommand::ToggleCrowd => {
            form.no_crowd = !form.no_crowd;
            None
        }
        ShellCommand::ToggleCommentators => {
            form.no_commentators = !form.no_commentators;
            None
        }
        ShellCommand::ToggleAnime => {
            form.like_anime = !form.like_anime;
            None
        }
        ShellCommand::Select(job_id) => Some(Msg::JobSelected(job_id)),
        ShellCommand::Next => Some(Msg::NextClicked),
        ShellCommand::Prev => Some(Msg::PrevClicked),
        ShellCommand::Filter(filter) => Some(Msg::FilterChanged(filter)),
        ShellCommand::ViewToggle => Some(Msg::ViewToggled),
        ShellCommand::Delete(job_id) => Some(Msg::DeleteRequested(job_id)),
        ShellCommand::Confirm => Some(Msg::DeleteConfirmed),
        ShellCommand::Cancel => Some(Msg::DeleteCancelled),
        ShellCommand::Dismiss => Some(Msg::ErrorDismissed),
        // Handled by the loop before we get here.
        ShellCommand::Show | ShellCommand::History | ShellCommand::Help | ShellCommand::Quit => {
            None
        }
    }
}

fn spawn_input_thread() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    line_rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringside_core::{ClipDuration, Orientation, StatusFilter};

    #[test]
    fn form_tweaks_accumulate_into_the_next_generate() {
        let mut form = GenerationForm::default();
        assert!(apply_command(ShellCommand::Image("img-42".to_string()), &mut form).is_none());
        assert!(apply_command(ShellCommand::Orientation(Orientation::Portrait), &mut form)
            .is_none());
        assert!(apply_command(ShellCommand::Duration(ClipDuration::Fifteen), &mut form).is_none());
        assert!(apply_command(ShellCommand::ToggleAnime, &mut form).is_none());

        let msg = apply_command(ShellCommand::Generate("uppercut".to_string()), &mut form)
            .expect("generate maps to a message");
        match msg {
            Msg::GenerateClicked(submitted) => {
                assert_eq!(submitted.prompt, "uppercut");
                assert_eq!(submitted.custom_image_id.as_deref(), Some("img-42"));
                assert_eq!(submitted.orientation, Orientation::Portrait);
                assert_eq!(submitted.duration, ClipDuration::Fifteen);
                assert!(submitted.like_anime);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn toggles_flip_back_on_second_use() {
        let mut form = GenerationForm::default();
        apply_command(ShellCommand::ToggleMusic, &mut form);
        assert!(form.no_music);
        apply_command(ShellCommand::ToggleMusic, &mut form);
        assert!(!form.no_music);
    }

    #[test]
    fn store_commands_map_onto_messages() {
        let mut form = GenerationForm::default();
        assert_eq!(
            apply_command(ShellCommand::Filter(StatusFilter::Failed), &mut form),
            Some(Msg::FilterChanged(StatusFilter::Failed))
        );
        assert_eq!(
            apply_command(ShellCommand::Delete("j1".to_string()), &mut form),
            Some(Msg::DeleteRequested("j1".to_string()))
        );
        assert_eq!(
            apply_command(ShellCommand::Confirm, &mut form),
            Some(Msg::DeleteConfirmed)
        );
    }
}
