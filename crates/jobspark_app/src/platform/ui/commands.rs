use std::path::PathBuf;

use jobspark_core::Msg;

pub const HELP_TEXT: &str = "\
Commands:
  search <keywords> [| <location>]   run a new search
  more                               load the next page
  upload <path>                      select a PDF resume
  jd <text>                          set the job description (empty clears it)
  score                              score the selected resume
  show                               print the current screen
  help                               print this text
  quit                               leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    /// Needs the file read before a message can be built.
    Upload(PathBuf),
    Show,
    Help,
    Quit,
    Invalid(String),
}

/// Parses one input line. `location` is the current location box; a search
/// without `|` keeps it.
pub fn parse_command(line: &str, location: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(Vec::new()),
        "search" | "s" => {
            if rest.is_empty() {
                return Command::Dispatch(vec![Msg::SearchClicked]);
            }
            let (term, location) = match rest.split_once('|') {
                Some((term, location)) => (term.trim(), location.trim()),
                None => (rest, location),
            };
            Command::Dispatch(vec![
                Msg::QueryChanged {
                    term: term.to_string(),
                    location: location.to_string(),
                },
                Msg::SearchClicked,
            ])
        }
        "more" | "m" => Command::Dispatch(vec![Msg::LoadMoreClicked]),
        "upload" | "u" => {
            if rest.is_empty() {
                Command::Invalid("upload needs a file path".to_string())
            } else {
                Command::Upload(PathBuf::from(rest))
            }
        }
        "jd" => Command::Dispatch(vec![Msg::JobDescriptionChanged(rest.to_string())]),
        "score" => Command::Dispatch(vec![Msg::ScoreClicked]),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command '{other}' (try help)")),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jobspark_core::Msg;

    use super::{parse_command, Command};

    fn query(term: &str, location: &str) -> Msg {
        Msg::QueryChanged {
            term: term.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn search_splits_term_and_location() {
        assert_eq!(
            parse_command("search rust developer | Berlin", "India"),
            Command::Dispatch(vec![query("rust developer", "Berlin"), Msg::SearchClicked])
        );
    }

    #[test]
    fn search_without_location_keeps_the_current_one() {
        assert_eq!(
            parse_command("  SEARCH  data engineer ", "India"),
            Command::Dispatch(vec![query("data engineer", "India"), Msg::SearchClicked])
        );
    }

    #[test]
    fn bare_search_reuses_the_query_boxes() {
        assert_eq!(
            parse_command("search", "India"),
            Command::Dispatch(vec![Msg::SearchClicked])
        );
    }

    #[test]
    fn empty_location_after_bar_is_kept_empty() {
        assert_eq!(
            parse_command("search qa |", "India"),
            Command::Dispatch(vec![query("qa", ""), Msg::SearchClicked])
        );
    }

    #[test]
    fn scoring_commands() {
        assert_eq!(
            parse_command("upload ./cv/resume.pdf", ""),
            Command::Upload(PathBuf::from("./cv/resume.pdf"))
        );
        assert_eq!(
            parse_command("jd Senior Rust engineer, async networking", ""),
            Command::Dispatch(vec![Msg::JobDescriptionChanged(
                "Senior Rust engineer, async networking".to_string()
            )])
        );
        assert_eq!(
            parse_command("jd", ""),
            Command::Dispatch(vec![Msg::JobDescriptionChanged(String::new())])
        );
        assert_eq!(
            parse_command("score", ""),
            Command::Dispatch(vec![Msg::ScoreClicked])
        );
    }

    #[test]
    fn upload_without_path_is_invalid() {
        assert!(matches!(parse_command("upload", ""), Command::Invalid(_)));
    }

    #[test]
    fn unknown_and_blank_lines() {
        assert!(matches!(parse_command("frobnicate", ""), Command::Invalid(_)));
        assert_eq!(parse_command("   ", ""), Command::Dispatch(Vec::new()));
        assert_eq!(parse_command("quit", ""), Command::Quit);
        assert_eq!(parse_command("more", ""), Command::Dispatch(vec![Msg::LoadMoreClicked]));
    }
}
