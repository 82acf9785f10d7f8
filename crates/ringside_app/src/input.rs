use ringside_core::{ClipDuration, Orientation, StatusFilter};

/// One line of shell input, parsed. Form tweaks mutate local form state;
/// everything else becomes a message for the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Generate(String),
    Image(String),
    Orientation(Orientation),
    Duration(ClipDuration),
    ToggleMusic,
    ToggleCrowd,
    ToggleCommentators,
    ToggleAnime,
    Select(String),
    Next,
    Prev,
    Filter(StatusFilter),
    ViewToggle,
    Delete(String),
    Confirm,
    Cancel,
    Dismiss,
    Show,
    History,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "generate" | "gen" if !rest.is_empty() => Ok(ShellCommand::Generate(rest.to_string())),
        "generate" | "gen" => Err("usage: generate <prompt>".to_string()),
        "image" if !rest.is_empty() => Ok(ShellCommand::Image(rest.to_string())),
        "image" => Err("usage: image <id>".to_string()),
        "portrait" => Ok(ShellCommand::Orientation(Orientation::Portrait)),
        "landscape" => Ok(ShellCommand::Orientation(Orientation::Landscape)),
        "duration" => match rest {
            "10" => Ok(ShellCommand::Duration(ClipDuration::Ten)),
            "15" => Ok(ShellCommand::Duration(ClipDuration::Fifteen)),
            _ => Err("usage: duration 10|15".to_string()),
        },
        "music" => Ok(ShellCommand::ToggleMusic),
        "crowd" => Ok(ShellCommand::ToggleCrowd),
        "commentators" => Ok(ShellCommand::ToggleCommentators),
        "anime" => Ok(ShellCommand::ToggleAnime),
        "select" if !rest.is_empty() => Ok(ShellCommand::Select(rest.to_string())),
        "select" => Err("usage: select <job-id>".to_string()),
        "next" | "n" => Ok(ShellCommand::Next),
        "prev" | "p" => Ok(ShellCommand::Prev),
        "filter" => match rest {
            "all" => Ok(ShellCommand::Filter(StatusFilter::All)),
            "completed" => Ok(ShellCommand::Filter(StatusFilter::Completed)),
            "failed" => Ok(ShellCommand::Filter(StatusFilter::Failed)),
            _ => Err("usage: filter all|completed|failed".to_string()),
        },
        "view" => Ok(ShellCommand::ViewToggle),
        "delete" | "del" if !rest.is_empty() => Ok(ShellCommand::Delete(rest.to_string())),
        "delete" | "del" => Err("usage: delete <job-id>".to_string()),
        "confirm" | "y" => Ok(ShellCommand::Confirm),
        "cancel" => Ok(ShellCommand::Cancel),
        "dismiss" => Ok(ShellCommand::Dismiss),
        "show" | "jobs" | "ls" => Ok(ShellCommand::Show),
        "history" => Ok(ShellCommand::History),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        "" => Ok(ShellCommand::Show),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

pub const HELP_TEXT: &str = "\
commands:
  generate <prompt>        submit a generation request with the current form
  image <id>               set the reference image for the next request
  portrait | landscape     pick the clip orientation
  duration 10|15           pick the clip length in seconds
  music | crowd |          toggle the matching prompt modifier
  commentators | anime
  select <job-id>          make a job current
  next | prev              step through completed jobs
  filter all|completed|failed
  view                     toggle list/embed layout
  delete <job-id>          arm deletion (confirm / cancel to resolve)
  dismiss                  clear the error banner
  show                     print the current view
  history                  list recent completed prompts
  quit                     exit";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_generate_with_prompt_verbatim() {
        assert_eq!(
            parse_command("generate  left hook, slow motion "),
            Ok(ShellCommand::Generate("left hook, slow motion".to_string()))
        );
    }

    #[test]
    fn generate_without_prompt_is_rejected() {
        assert!(parse_command("generate").is_err());
    }

    #[test]
    fn parses_form_tweaks() {
        assert_eq!(
            parse_command("portrait"),
            Ok(ShellCommand::Orientation(Orientation::Portrait))
        );
        assert_eq!(
            parse_command("duration 15"),
            Ok(ShellCommand::Duration(ClipDuration::Fifteen))
        );
        assert!(parse_command("duration 12").is_err());
        assert_eq!(parse_command("anime"), Ok(ShellCommand::ToggleAnime));
    }

    #[test]
    fn parses_navigation_and_filters() {
        assert_eq!(parse_command("next"), Ok(ShellCommand::Next));
        assert_eq!(parse_command("p"), Ok(ShellCommand::Prev));
        assert_eq!(
            parse_command("filter completed"),
            Ok(ShellCommand::Filter(StatusFilter::Completed))
        );
        assert!(parse_command("filter done").is_err());
    }

    #[test]
    fn blank_line_reprints_the_view() {
        assert_eq!(parse_command("   "), Ok(ShellCommand::Show));
    }

    #[test]
    fn unknown_word_reports_itself() {
        let err = parse_command("explode").unwrap_err();
        assert!(err.contains("explode"));
    }
}
