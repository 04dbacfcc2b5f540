use crate::models::Threshold;

/// All slash commands supported by the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum SlashCommand {
    Threshold {
        value: Option<Threshold>,
    },
    Limit {
        value: Option<usize>,
    },
    Top,
    Stats,
    Diff,
    Version,
    Clear,
    Help {
        command: Option<String>,
    },
    Exit,
}

/// A line of REPL input: either a question or a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Query(String),
    Command(SlashCommand),
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "threshold",
        usage: "/threshold [N]",
        description: "Show or set the minimum confidence (0-100); re-runs the last question",
    },
    CommandHelp {
        name: "limit",
        usage: "/limit [N]",
        description: "Show or set how many candidates /top lists",
    },
    CommandHelp {
        name: "top",
        usage: "/top",
        description: "Rank the best candidates for the last question",
    },
    CommandHelp {
        name: "stats",
        usage: "/stats",
        description: "Show corpus statistics",
    },
    CommandHelp {
        name: "diff",
        usage: "/diff",
        description: "Toggle the character diff between question and match",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the REPL",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/threshold",
    "/limit",
    "/top",
    "/stats",
    "/diff",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

/// Classify a raw input line. Lines not starting with `/` are questions.
pub fn parse_input(input: &str) -> Result<Input, String> {
    let trimmed = input.trim();
    if trimmed.starts_with('/') {
        parse_command(trimmed).map(Input::Command)
    } else {
        Ok(Input::Query(trimmed.to_string()))
    }
}

/// Parse a raw input line into a SlashCommand, or return an error message.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err("Commands must start with /. Type /help for available commands.".into());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err("Empty command".into());
    }

    let cmd = parts[0];
    let args = &parts[1..];

    match cmd {
        "/threshold" | "/t" => parse_threshold(args),
        "/limit" => parse_limit(args),
        "/top" => Ok(SlashCommand::Top),
        "/stats" => Ok(SlashCommand::Stats),
        "/diff" => Ok(SlashCommand::Diff),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!("Unknown command: {}. Type /help for available commands.", other)),
    }
}

fn parse_threshold(args: &[&str]) -> Result<SlashCommand, String> {
    match args {
        [] => Ok(SlashCommand::Threshold { value: None }),
        [raw] => raw
            .parse::<Threshold>()
            .map(|t| SlashCommand::Threshold { value: Some(t) })
            .map_err(|e| e.to_string()),
        _ => Err("Usage: /threshold [N]".into()),
    }
}

fn parse_limit(args: &[&str]) -> Result<SlashCommand, String> {
    match args {
        [] => Ok(SlashCommand::Limit { value: None }),
        [raw] => match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(SlashCommand::Limit { value: Some(n) }),
            _ => Err(format!("Invalid limit: {}. Use a whole number of at least 1", raw)),
        },
        _ => Err("Usage: /limit [N]".into()),
    }
}
