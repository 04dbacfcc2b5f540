pub mod api;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod errors;
pub mod matching;
pub mod models;
pub mod ocr;
pub mod repl;
pub mod utils;

pub use corpus::Corpus;
pub use errors::SolverError;
pub use matching::{find_best_match, rank_matches, score};
pub use models::{CorpusEntry, Match, Threshold};
