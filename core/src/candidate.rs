//! Candidate types and final ranking.
//!
//! This module provides:
//! - `Origin`: where a candidate came from (base word, n-gram, decoded sentence)
//! - `Candidate`: a single scored suggestion with span/remainder metadata
//! - `CandidatePool`: per-request dedup and composite ordering

use serde::{Deserialize, Serialize};

use ahash::AHashMap;

/// Where a candidate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// A base dictionary word.
    Base,
    /// A multi-syllable phrase completion rather than a base word.
    Ngram,
    /// A full-coverage path assembled by the sentence decoder.
    Sentence,
}

impl Origin {
    /// Ordering rank: base words and decoded sentences come before n-gram
    /// completions. The decoder only runs when no base word spans the whole
    /// input, so a sentence is the sole full-span entry in its group.
    pub fn rank(self) -> u8 {
        match self {
            Origin::Base | Origin::Sentence => 0,
            Origin::Ngram => 1,
        }
    }
}

/// A single scored suggestion.
///
/// `span` is the number of input syllables the candidate consumes (or
/// characters, for the Latin engine); `remainder` is the unconsumed suffix
/// of the raw composing buffer, which lets a caller commit the word and
/// re-seed composing state for segmented selection.
///
/// Scores are on a relative scale; higher is better. Use `f32` for
/// compactness and performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub span: usize,
    pub score: f32,
    pub origin: Origin,
    pub remainder: String,
}

impl Candidate {
    pub fn new<T: Into<String>, R: Into<String>>(
        text: T,
        span: usize,
        score: f32,
        origin: Origin,
        remainder: R,
    ) -> Self {
        Candidate {
            text: text.into(),
            span,
            score,
            origin,
            remainder: remainder.into(),
        }
    }
}

/// Per-request candidate pool with dedup and composite final ordering.
///
/// Candidates are keyed by display text. The first occurrence wins unless a
/// later one consumes a strictly longer span of the input (a full-buffer
/// match must displace a shorter duplicate that happened to pool first).
///
/// Final ordering: span descending (full-span matches first), then origin
/// (base words before n-gram completions), then score descending. The sort
/// is stable, so equal candidates keep their pooling order.
#[derive(Debug, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    by_text: AHashMap<String, usize>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            by_text: AHashMap::new(),
        }
    }

    /// Number of candidates currently pooled.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Add a candidate, applying the dedup rule.
    pub fn push(&mut self, cand: Candidate) {
        match self.by_text.get(&cand.text) {
            Some(&idx) => {
                if cand.span > self.candidates[idx].span {
                    self.candidates[idx] = cand;
                }
            }
            None => {
                self.by_text.insert(cand.text.clone(), self.candidates.len());
                self.candidates.push(cand);
            }
        }
    }

    /// Add many candidates.
    pub fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        for cand in iter {
            self.push(cand);
        }
    }

    /// Rank the pooled candidates and truncate to `cap`.
    pub fn into_ranked(mut self, cap: usize) -> Vec<Candidate> {
        self.candidates.sort_by(|a, b| {
            b.span
                .cmp(&a.span)
                .then_with(|| a.origin.rank().cmp(&b.origin.rank()))
                .then_with(|| {
                    b.score
                        .partial_cmp(&a.score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        self.candidates.truncate(cap);
        self.candidates
    }
}
