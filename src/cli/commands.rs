use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "quizsolver", version, about = "Answer true/false questions by similarity to a known corpus")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log line format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the recorded answer for a question
    Match(MatchArgs),
    /// Read questions from screenshots and answer them
    Ocr(OcrArgs),
    /// Interactive question prompt
    Interactive(InteractiveArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Ask a running server
    Ask(AskArgs),
    /// Show corpus statistics
    Stats(StatsArgs),
    /// Validate a configuration or corpus file
    Validate(ValidateArgs),
}

/// Options shared by every command that loads a corpus.
#[derive(Args, Clone, Debug, Default)]
pub struct CorpusArgs {
    /// Corpus JSON file (overrides the config file)
    #[arg(long)]
    pub corpus: Option<String>,

    /// Minimum confidence, 0-100
    #[arg(short, long)]
    pub threshold: Option<String>,
}

#[derive(Args, Clone)]
pub struct MatchArgs {
    /// Question text
    pub query: String,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of ranked candidates to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a character diff between the question and the match
    #[arg(long)]
    pub diff: bool,
}

#[derive(Args, Clone)]
pub struct OcrArgs {
    /// Image files or glob patterns
    #[arg(required = true)]
    pub images: Vec<String>,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Args, Clone)]
pub struct AskArgs {
    /// Question text
    pub query: String,

    /// Base URL of a running `quizsolver serve`
    #[arg(long, default_value = "http://localhost:8080")]
    pub server: String,

    /// Minimum confidence, 0-100
    #[arg(short, long)]
    pub threshold: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct StatsArgs {
    /// Corpus JSON file (overrides the config file)
    #[arg(long)]
    pub corpus: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config (.yaml/.yml) or corpus (.json) file to validate
    pub file: String,
}
