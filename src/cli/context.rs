use std::path::PathBuf;

use tracing::debug;

use crate::cli::commands::CorpusArgs;
use crate::config::{load_or_default, SolverConfig};
use crate::corpus::{load_corpus, Corpus};
use crate::errors::SolverError;
use crate::models::Threshold;

/// Everything a matching command needs, with command-line overrides applied
/// on top of the config file.
pub struct SolverContext {
    pub config: SolverConfig,
    pub corpus: Corpus,
    pub threshold: Threshold,
    pub limit: usize,
}

impl SolverContext {
    pub async fn load(config_path: Option<&str>, args: &CorpusArgs) -> Result<Self, SolverError> {
        let config = load_or_default(config_path).await?;
        let threshold = resolve_threshold(&config, args.threshold.as_deref())?;
        let path = resolve_corpus_path(&config, args.corpus.as_deref());
        debug!(corpus = %path.display(), threshold = threshold.value(), "Resolved settings");

        let corpus = load_corpus(&path).await?;
        let limit = config.limit();

        Ok(Self {
            config,
            corpus,
            threshold,
            limit,
        })
    }
}

pub fn resolve_corpus_path(config: &SolverConfig, cli_path: Option<&str>) -> PathBuf {
    match cli_path {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from(config.corpus_path()),
    }
}

pub fn resolve_threshold(config: &SolverConfig, cli_value: Option<&str>) -> Result<Threshold, SolverError> {
    match cli_value {
        Some(raw) => raw.parse(),
        None => Ok(config.threshold()),
    }
}
