use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::repl::commands::COMMAND_NAMES;

#[derive(Default)]
pub struct ReplHelper;

impl Helper for ReplHelper {}
impl Validator for ReplHelper {}
impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        command_hint(line)
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(&line[..pos]))
    }
}

/// Remaining characters of the first command name that `line` prefixes.
fn command_hint(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') || trimmed.contains(' ') {
        return None;
    }
    COMMAND_NAMES
        .iter()
        .find(|name| name.starts_with(trimmed) && **name != trimmed)
        .map(|name| name[trimmed.len()..].to_string())
}

/// Completion start offset and candidates for the text before the cursor.
fn complete_line(prefix: &str) -> (usize, Vec<Pair>) {
    let pos = prefix.len();
    let trimmed = prefix.trim_start();

    // Questions are free text
    if !trimmed.starts_with('/') {
        return (0, vec![]);
    }

    // Past the command name: complete its argument
    if let Some(space_idx) = trimmed.find(' ') {
        let cmd = &trimmed[..space_idx];
        let arg_prefix = trimmed[space_idx..].trim_start();
        let arg_start = pos - arg_prefix.len();

        let names: Vec<&str> = COMMAND_NAMES.iter().map(|n| n.trim_start_matches('/')).collect();
        let args: &[&str] = match cmd {
            "/threshold" => &["0", "50", "70", "80", "90", "100"],
            "/limit" => &["1", "3", "5", "10"],
            "/help" => names.as_slice(),
            _ => &[],
        };

        return (arg_start, to_pairs(args.iter().copied().filter(|a| a.starts_with(arg_prefix))));
    }

    let start = pos - trimmed.len();
    (start, to_pairs(COMMAND_NAMES.iter().copied().filter(|name| name.starts_with(trimmed))))
}

fn to_pairs<'a>(items: impl Iterator<Item = &'a str>) -> Vec<Pair> {
    items
        .map(|s| Pair {
            display: s.to_string(),
            replacement: s.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.replacement.as_str()).collect()
    }

    #[test]
    fn test_hint_completes_command_name() {
        assert_eq!(command_hint("/thr").as_deref(), Some("eshold"));
        assert_eq!(command_hint("/threshold"), None);
        assert_eq!(command_hint("La Tierra"), None);
    }

    #[test]
    fn test_complete_command_names() {
        let (start, pairs) = complete_line("/st");
        assert_eq!(start, 0);
        assert_eq!(replacements(&pairs), vec!["/stats"]);
    }

    #[test]
    fn test_complete_help_argument() {
        let (start, pairs) = complete_line("/help li");
        assert_eq!(start, 6);
        assert_eq!(replacements(&pairs), vec!["limit"]);
    }

    #[test]
    fn test_questions_not_completed() {
        let (_, pairs) = complete_line("El agua");
        assert!(pairs.is_empty());
    }
}
