use console::style;

use crate::corpus::CorpusStats;
use crate::models::{Match, Threshold};
use crate::repl::commands::{CommandHelp, COMMAND_HELP};
use crate::utils::diff::render_inline_diff;
use crate::utils::formatting::{format_answer, format_confidence, truncate_chars};

/// Width of a question column in candidate tables.
const QUESTION_WIDTH: usize = 60;

/// Render an answer as a colored badge.
pub fn render_answer_badge(answer: bool) -> String {
    if answer {
        style(format!(" {} ", format_answer(answer).to_uppercase())).on_green().black().bold().to_string()
    } else {
        style(format!(" {} ", format_answer(answer).to_uppercase())).on_red().white().bold().to_string()
    }
}

/// Render the selected entry for a query.
pub fn render_match(m: &Match<'_>, query: &str, show_diff: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n  {} {}\n",
        render_answer_badge(m.entry.answer),
        style(format_confidence(m.confidence)).white().bold(),
    ));
    out.push_str(&format!("  {} {}\n", style("Question:").dim(), m.entry.key));

    if let Some(explanation) = m.entry.explanation.as_deref().filter(|e| !e.trim().is_empty()) {
        out.push_str(&format!("  {} {}\n", style("Why:").dim(), explanation));
    }

    if show_diff && m.confidence < 100.0 {
        out.push_str(&format!(
            "  {} {}\n",
            style("Diff:").dim(),
            render_inline_diff(query, &m.entry.key, console::colors_enabled()),
        ));
    }
    out
}

pub fn render_no_match(threshold: Threshold) -> String {
    format!(
        "  {} No match found at threshold {}",
        style("∅").yellow().bold(),
        style(threshold).white().bold(),
    )
}

/// Render ranked candidates as a numbered table.
pub fn render_candidates(candidates: &[Match<'_>]) -> String {
    if candidates.is_empty() {
        return render_info("No candidates.");
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n  {:<4} {:<9} {:<7} {}\n",
        style("#").dim(),
        style("Conf").dim(),
        style("Answer").dim(),
        style("Question").dim(),
    ));
    for (i, m) in candidates.iter().enumerate() {
        out.push_str(&format!(
            "  {:<4} {:<9} {:<7} {}\n",
            i + 1,
            format_confidence(m.confidence),
            format_answer(m.entry.answer),
            truncate_chars(&m.entry.key, QUESTION_WIDTH),
        ));
    }
    out
}

pub fn render_stats(stats: &CorpusStats, duplicates: usize) -> String {
    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n  {} {}\n  {} {}\n",
        style("Entries:").dim(),
        style(stats.total).white().bold(),
        style("True:").dim(),
        style(stats.true_answers).green(),
        style("False:").dim(),
        style(stats.false_answers).red(),
        style("Explained:").dim(),
        stats.explained,
        style("Duplicates:").dim(),
        duplicates,
    )
}

/// Current session settings, shown after a change.
pub fn render_settings(threshold: Threshold, limit: usize, show_diff: bool) -> String {
    format!(
        "  {} {}  {} {}  {} {}",
        style("threshold").dim(),
        style(threshold).white().bold(),
        style("limit").dim(),
        style(limit).white().bold(),
        style("diff").dim(),
        style(if show_diff { "on" } else { "off" }).white().bold(),
    )
}

/// Render help text for all commands or a specific command.
pub fn render_help(specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        if let Some(cmd) = COMMAND_HELP.iter().find(|c| c.name == cmd_name) {
            return format_command_detail(cmd);
        } else {
            return format!("{} Unknown command: /{}", style("✗").red(), cmd_name);
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n  {}\n\n",
        style("Type a question to look up its answer.").white().bold(),
        style("Lines starting with / are commands:").dim(),
    ));
    for cmd in COMMAND_HELP {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out
}

fn format_command_detail(cmd: &CommandHelp) -> String {
    format!(
        "\n  {}\n  {}\n",
        style(cmd.usage).cyan().bold(),
        style(cmd.description).dim(),
    )
}

/// Render version and build info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");
    let profile = option_env!("QUIZSOLVER_BUILD_PROFILE").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {} ({})\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
        profile,
    )
}

pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

pub fn render_info(msg: &str) -> String {
    format!("{}", style(msg).dim())
}
