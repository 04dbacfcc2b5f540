pub mod matcher;
pub mod scorer;

pub use matcher::{find_best_match, rank_matches, score_corpus};
pub use scorer::score;
