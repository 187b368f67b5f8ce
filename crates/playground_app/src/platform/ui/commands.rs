use std::path::PathBuf;

use playground_core::{InputMode, Msg, WorkflowMsg};

pub const HELP: &[&str] = &[
    "go <path>                        open /login, /register, /dashboard, /conversation, /image or /summarize",
    "login <user> <password>          sign in",
    "register <user> <email> <pass>   create an account and sign in",
    "logout                           sign out",
    "select <file>                    pick a file for the current skill",
    "mode file|url                    switch input mode (summarize only)",
    "url <address>                    set the URL to summarize",
    "analyze                          submit the pending input",
    "reset                            clear input, result and error",
    "tab <n>                          show result tab n",
    "show                             redraw the screen",
    "help                             list commands",
    "quit                             exit",
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Applies regardless of the current screen.
    App(Msg),
    /// Addressed to the skill on screen.
    Workflow(WorkflowMsg),
    /// Read this file and offer it to the skill on screen.
    Select(PathBuf),
    Show,
    Help,
    Quit,
}

/// Parses a line typed at the prompt. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();
    let mut next_arg = || args.next().unwrap_or_default().to_string();

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "go" => {
            if rest.is_empty() {
                return Err("usage: go <path>".to_string());
            }
            Command::App(Msg::Navigate(rest.to_string()))
        }
        "login" => Command::App(Msg::LoginSubmitted {
            username: next_arg(),
            password: next_arg(),
        }),
        "register" => Command::App(Msg::RegisterSubmitted {
            username: next_arg(),
            email: next_arg(),
            password: next_arg(),
        }),
        "logout" => Command::App(Msg::LogoutClicked),
        "select" => {
            if rest.is_empty() {
                return Err("usage: select <file>".to_string());
            }
            Command::Select(PathBuf::from(rest))
        }
        "mode" => match rest.to_ascii_lowercase().as_str() {
            "file" => Command::Workflow(WorkflowMsg::ModeSwitched(InputMode::File)),
            "url" => Command::Workflow(WorkflowMsg::ModeSwitched(InputMode::Url)),
            _ => return Err("usage: mode file|url".to_string()),
        },
        "url" => Command::Workflow(WorkflowMsg::UrlEdited(rest.to_string())),
        "analyze" => Command::Workflow(WorkflowMsg::AnalyzeClicked),
        "reset" => Command::Workflow(WorkflowMsg::ResetClicked),
        "tab" => match rest.parse::<usize>() {
            Ok(number) if number >= 1 => Command::Workflow(WorkflowMsg::PaneSelected(number - 1)),
            _ => return Err("usage: tab <n> (starting at 1)".to_string()),
        },
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`, type `help`")),
    };
    Ok(Some(command))
}
