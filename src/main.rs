use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizsolver::cli::{self, Commands, LogFormat};
use quizsolver::errors::SolverError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so JSON results on stdout stay parseable
    match cli.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = cli.config.as_deref();
    let result: Result<(), SolverError> = match cli.command {
        Commands::Match(args) => cli::find::handle_match(args, config).await,
        Commands::Ocr(args) => cli::ocr::handle_ocr(args, config, cli.quiet).await,
        Commands::Interactive(args) => cli::interactive::handle_interactive(args, config).await,
        Commands::Serve(args) => cli::serve::handle_serve(args, config).await,
        Commands::Ask(args) => cli::ask::handle_ask(args).await,
        Commands::Stats(args) => cli::stats::handle_stats(args, config).await,
        Commands::Validate(args) => cli::validate::handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
