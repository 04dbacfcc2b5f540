use std::sync::Arc;

use console::style;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use tracing::debug;

use crate::corpus::Corpus;
use crate::errors::SolverError;
use crate::matching::{find_best_match, rank_matches};
use crate::models::Threshold;
use crate::repl::banner;
use crate::repl::commands::{self, Input, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::repl::renderer;

/// Mutable settings of one interactive session.
struct SessionState {
    threshold: Threshold,
    limit: usize,
    show_diff: bool,
    /// Last question asked, re-run when the threshold changes
    last_query: Option<String>,
}

/// What the loop should do after one line of input.
#[derive(Debug)]
pub struct Step {
    pub output: String,
    pub exit: bool,
}

impl Step {
    fn show(output: String) -> Self {
        Self { output, exit: false }
    }
}

pub struct ReplSession {
    corpus: Arc<Corpus>,
    state: SessionState,
}

impl ReplSession {
    pub fn new(corpus: Arc<Corpus>, threshold: Threshold, limit: usize) -> Self {
        Self {
            corpus,
            state: SessionState {
                threshold,
                limit,
                show_diff: false,
                last_query: None,
            },
        }
    }

    pub async fn run(mut self, splash: bool) -> Result<(), SolverError> {
        if splash {
            banner::show_splash(self.corpus.len());
        }

        let config = Config::builder()
            .auto_add_history(true)
            .build();
        let mut editor = Editor::with_config(config)
            .map_err(|e| SolverError::Internal(format!("Failed to initialize REPL: {}", e)))?;
        editor.set_helper(Some(ReplHelper::default()));

        loop {
            let readline = {
                // rustyline is blocking, so use spawn_blocking
                let result = tokio::task::spawn_blocking({
                    move || {
                        let prompt = format!("{} ", style("quiz>").cyan().bold());
                        let result = editor.readline(&prompt);
                        (editor, result)
                    }
                })
                .await
                .map_err(|e| SolverError::Internal(format!("Readline task failed: {}", e)))?;

                editor = result.0;
                result.1
            };

            match readline {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let step = self.execute_line(&line);
                    if !step.output.is_empty() {
                        println!("{}", step.output);
                    }
                    if step.exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!("{}", renderer::render_error(&format!("Input error: {}", err)));
                    break;
                }
            }
        }

        println!("{}", renderer::render_info("Goodbye."));
        Ok(())
    }

    /// Handle one line of input and produce what to print.
    pub fn execute_line(&mut self, line: &str) -> Step {
        match commands::parse_input(line) {
            Ok(Input::Query(query)) => {
                let output = self.answer(&query);
                self.state.last_query = Some(query);
                Step::show(output)
            }
            Ok(Input::Command(cmd)) => self.handle_command(cmd),
            Err(msg) => Step::show(renderer::render_error(&msg)),
        }
    }

    fn answer(&self, query: &str) -> String {
        debug!(threshold = self.state.threshold.value(), "Answering question");
        match find_best_match(query, &self.corpus, self.state.threshold) {
            Some(m) => renderer::render_match(&m, query, self.state.show_diff),
            None => renderer::render_no_match(self.state.threshold),
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> Step {
        match cmd {
            SlashCommand::Exit => Step { output: String::new(), exit: true },

            SlashCommand::Clear => {
                let _ = console::Term::stdout().clear_screen();
                Step::show(String::new())
            }

            SlashCommand::Help { command } => Step::show(renderer::render_help(command.as_deref())),

            SlashCommand::Version => Step::show(renderer::render_version()),

            SlashCommand::Stats => Step::show(renderer::render_stats(
                &self.corpus.stats(),
                self.corpus.duplicates().len(),
            )),

            SlashCommand::Threshold { value: None } => Step::show(self.render_settings()),

            SlashCommand::Threshold { value: Some(threshold) } => {
                self.state.threshold = threshold;
                let mut output = renderer::render_success(&format!("Threshold set to {}", threshold));
                if let Some(query) = &self.state.last_query {
                    output.push('\n');
                    output.push_str(&self.answer(query));
                }
                Step::show(output)
            }

            SlashCommand::Limit { value: None } => Step::show(self.render_settings()),

            SlashCommand::Limit { value: Some(limit) } => {
                self.state.limit = limit;
                Step::show(renderer::render_success(&format!("Limit set to {}", limit)))
            }

            SlashCommand::Diff => {
                self.state.show_diff = !self.state.show_diff;
                Step::show(self.render_settings())
            }

            SlashCommand::Top => match &self.state.last_query {
                Some(query) => {
                    let ranked = rank_matches(query, &self.corpus, self.state.threshold, self.state.limit);
                    Step::show(renderer::render_candidates(&ranked))
                }
                None => Step::show(renderer::render_info("Ask a question first.")),
            },
        }
    }

    fn render_settings(&self) -> String {
        renderer::render_settings(self.state.threshold, self.state.limit, self.state.show_diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CorpusEntry;

    fn session(threshold: f64) -> ReplSession {
        let corpus: Corpus = vec![
            CorpusEntry::new("La Tierra es redonda", true, None),
            CorpusEntry::new("El Sol es una estrella", true, Some("Una enana amarilla".into())),
            CorpusEntry::new("La Luna es de queso", false, None),
        ]
        .into_iter()
        .collect();
        ReplSession::new(Arc::new(corpus), Threshold::new(threshold).unwrap(), 5)
    }

    #[test]
    fn test_query_renders_match() {
        let mut s = session(0.0);
        let step = s.execute_line("La Tierra es redonda");
        assert!(!step.exit);
        assert!(step.output.contains("100.00%"));
        assert_eq!(s.state.last_query.as_deref(), Some("La Tierra es redonda"));
    }

    #[test]
    fn test_query_below_threshold() {
        let mut s = session(90.0);
        assert!(s.execute_line("Planeta Tierra").output.contains("No match"));
    }

    #[test]
    fn test_threshold_change_reruns_last_query() {
        let mut s = session(0.0);
        assert!(!s.execute_line("Planeta Tierra").output.contains("No match"));

        let step = s.execute_line("/threshold 90");
        assert!(step.output.contains("Threshold set to 90%"));
        assert!(step.output.contains("No match"));
        assert_eq!(s.state.threshold.value(), 90.0);
    }

    #[test]
    fn test_threshold_change_without_query() {
        let mut s = session(0.0);
        let step = s.execute_line("/threshold 50");
        assert!(!step.output.contains("No match"));
    }

    #[test]
    fn test_invalid_threshold_keeps_previous() {
        let mut s = session(40.0);
        let step = s.execute_line("/threshold 150");
        assert!(step.output.contains("outside"));
        assert_eq!(s.state.threshold.value(), 40.0);
    }

    #[test]
    fn test_top_needs_a_question() {
        let mut s = session(0.0);
        assert!(s.execute_line("/top").output.contains("Ask a question first"));
        s.execute_line("La Luna");
        let out = s.execute_line("/top").output;
        assert!(out.contains("La Luna es de queso"));
    }

    #[test]
    fn test_limit_and_diff_toggle() {
        let mut s = session(0.0);
        s.execute_line("/limit 2");
        assert_eq!(s.state.limit, 2);
        s.execute_line("/diff");
        assert!(s.state.show_diff);
        s.execute_line("/diff");
        assert!(!s.state.show_diff);
    }

    #[test]
    fn test_exit() {
        let mut s = session(0.0);
        assert!(s.execute_line("/exit").exit);
    }

    #[test]
    fn test_unknown_command_is_error_not_exit() {
        let mut s = session(0.0);
        let step = s.execute_line("/nope");
        assert!(!step.exit);
        assert!(step.output.contains("Unknown command"));
    }
}
