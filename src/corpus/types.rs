use std::collections::HashMap;

use serde::Serialize;
use crate::models::CorpusEntry;

/// Ordered, read-only collection of recorded questions.
///
/// Iteration follows insertion order, which decides ties during matching.
/// Inserting a key that already exists replaces its answer and explanation
/// but keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    index: HashMap<String, usize>,
    duplicates: Vec<String>,
}

/// Summary counts over a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub total: usize,
    pub true_answers: usize,
    pub false_answers: usize,
    pub explained: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: CorpusEntry) {
        match self.index.get(&entry.key) {
            Some(&pos) => {
                self.duplicates.push(entry.key.clone());
                self.entries[pos] = entry;
            }
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&CorpusEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that appeared more than once while building the corpus, one item
    /// per repeated occurrence.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn stats(&self) -> CorpusStats {
        let true_answers = self.entries.iter().filter(|e| e.answer).count();
        CorpusStats {
            total: self.entries.len(),
            true_answers,
            false_answers: self.entries.len() - true_answers,
            explained: self.entries.iter().filter(|e| e.has_explanation()).count(),
        }
    }
}

impl FromIterator<CorpusEntry> for Corpus {
    fn from_iter<I: IntoIterator<Item = CorpusEntry>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for entry in iter {
            corpus.insert(entry);
        }
        corpus
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CorpusEntry;
    type IntoIter = std::slice::Iter<'a, CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
