//! Keyword relevance scoring
//!
//! A chunk's score is the sum of:
//! - the number of distinct query words that also occur in the chunk
//! - a phrase bonus when the whole query appears verbatim in the chunk
//! - one point per key term found in both the query and the chunk
//!
//! Everything is compared lower-cased. Chunks scoring zero are never returned.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Regex matching word tokens (letters, digits, underscore)
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

pub const DEFAULT_PHRASE_BONUS: u32 = 2;

pub const DEFAULT_KEY_TERMS: [&str; 7] = [
    "minhajul",
    "bhuiyan",
    "developer",
    "engineer",
    "project",
    "experience",
    "skill",
];

/// Tunable weights for the keyword scorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Added when the full query is a substring of the chunk
    pub phrase_bonus: u32,
    /// Domain terms worth one point when present in both query and chunk
    pub key_terms: Vec<String>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            phrase_bonus: DEFAULT_PHRASE_BONUS,
            key_terms: DEFAULT_KEY_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ScoringWeights {
    pub fn with_phrase_bonus(mut self, phrase_bonus: u32) -> Self {
        self.phrase_bonus = phrase_bonus;
        self
    }

    pub fn with_key_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_terms = terms
            .into_iter()
            .map(|t| t.into().to_lowercase())
            .collect();
        self
    }
}

/// A chunk paired with its relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredChunk<'a> {
    pub score: u32,
    pub chunk: &'a str,
}

/// Scores and ranks chunks against a query by keyword overlap
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    weights: ScoringWeights,
}

impl KeywordScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every chunk and return the non-zero ones, best first.
    ///
    /// Sorting is stable, so chunks with equal scores keep their original order.
    pub fn score_chunks<'a>(&self, query: &str, chunks: &'a [String]) -> Vec<ScoredChunk<'a>> {
        let query_lower = query.to_lowercase();
        let query_words = tokenize(&query_lower);

        let mut scored: Vec<ScoredChunk<'a>> = chunks
            .iter()
            .filter_map(|chunk| {
                let score = self.score(&query_lower, &query_words, chunk);
                (score > 0).then_some(ScoredChunk {
                    score,
                    chunk: chunk.as_str(),
                })
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Return up to `top_k` chunk texts ranked by relevance
    pub fn search(&self, query: &str, chunks: &[String], top_k: usize) -> Vec<String> {
        self.score_chunks(query, chunks)
            .into_iter()
            .take(top_k)
            .map(|scored| scored.chunk.to_string())
            .collect()
    }

    fn score(&self, query_lower: &str, query_words: &HashSet<&str>, chunk: &str) -> u32 {
        let chunk_lower = chunk.to_lowercase();
        let chunk_words = tokenize(&chunk_lower);

        let overlap = query_words.intersection(&chunk_words).count() as u32;

        let phrase_bonus = if chunk_lower.contains(query_lower) {
            self.weights.phrase_bonus
        } else {
            0
        };

        let key_bonus = self
            .weights
            .key_terms
            .iter()
            .filter(|term| chunk_lower.contains(term.as_str()) && query_lower.contains(term.as_str()))
            .count() as u32;

        overlap + phrase_bonus + key_bonus
    }
}

fn tokenize(text: &str) -> HashSet<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}
