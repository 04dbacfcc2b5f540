use std::path::Path;

use crate::cli::commands::ValidateArgs;
use crate::config::parse_config;
use crate::corpus::load_corpus;
use crate::errors::SolverError;
use crate::repl::renderer;

/// Kind of document a file holds, judged by its extension.
#[derive(Debug, PartialEq, Eq)]
enum FileKind {
    Config,
    Corpus,
}

fn file_kind(path: &Path) -> Result<FileKind, SolverError> {
    match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("yaml") | Some("yml") => Ok(FileKind::Config),
        Some("json") => Ok(FileKind::Corpus),
        _ => Err(SolverError::Config(format!(
            "Cannot tell what {} is; expected .yaml, .yml or .json",
            path.display()
        ))),
    }
}

pub async fn handle_validate(args: ValidateArgs) -> Result<(), SolverError> {
    let path = Path::new(&args.file);
    match file_kind(path)? {
        FileKind::Config => {
            parse_config(path).await?;
            println!("{}", renderer::render_success(&format!("Configuration is valid: {}", args.file)));
        }
        FileKind::Corpus => {
            let corpus = load_corpus(path).await?;
            println!(
                "{}",
                renderer::render_success(&format!(
                    "Corpus is valid: {} ({} entries, {} repeated)",
                    args.file,
                    corpus.len(),
                    corpus.duplicates().len()
                ))
            );
        }
    }
    Ok(())
}
