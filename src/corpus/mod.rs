pub mod loader;
pub mod schema;
pub mod types;

pub use loader::{load_corpus, parse_corpus};
pub use types::{Corpus, CorpusStats};
