use tracing::debug;

use crate::corpus::Corpus;
use crate::models::{CorpusEntry, Match, Threshold};
use super::scorer::score;

/// Similarity of every corpus entry to `query`, in corpus order.
pub fn score_corpus<'a>(query: &str, corpus: &'a Corpus) -> Vec<(&'a CorpusEntry, f64)> {
    corpus
        .iter()
        .map(|entry| (entry, score(&entry.key, query)))
        .collect()
}

/// The most similar entry whose confidence meets `threshold`.
///
/// Equal ratios resolve to the entry that comes first in the corpus. Returns
/// `None` for an empty corpus or when nothing clears the threshold.
pub fn find_best_match<'a>(query: &str, corpus: &'a Corpus, threshold: Threshold) -> Option<Match<'a>> {
    if corpus.is_empty() {
        return None;
    }

    let mut best: Option<(&CorpusEntry, f64)> = None;
    for (entry, ratio) in score_corpus(query, corpus) {
        if !threshold.admits(ratio) {
            continue;
        }
        match best {
            Some((_, best_ratio)) if ratio > best_ratio => best = Some((entry, ratio)),
            None => best = Some((entry, ratio)),
            _ => {}
        }
    }

    debug!(
        threshold = threshold.value(),
        matched = best.is_some(),
        best_ratio = best.map(|(_, r)| r),
        "Best match search finished"
    );

    best.map(|(entry, ratio)| Match::new(entry, ratio))
}

/// Up to `limit` entries meeting `threshold`, most similar first.
///
/// Ties keep corpus order, so the head of the list always agrees with
/// [`find_best_match`].
pub fn rank_matches<'a>(
    query: &str,
    corpus: &'a Corpus,
    threshold: Threshold,
    limit: usize,
) -> Vec<Match<'a>> {
    let mut candidates: Vec<(&CorpusEntry, f64)> = score_corpus(query, corpus)
        .into_iter()
        .filter(|(_, ratio)| threshold.admits(*ratio))
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    candidates
        .into_iter()
        .take(limit)
        .map(|(entry, ratio)| Match::new(entry, ratio))
        .collect()
}
