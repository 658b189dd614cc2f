//! libsuggest-core
//!
//! Candidate model, ranking, and trie primitives shared by the language
//! engines (libbopomofo, liblatin).
//!
//! This crate is deliberately free of storage and UI concerns: it holds the
//! pieces both engines agree on. Scored candidates carry a consumed span
//! and an unconsumed raw remainder, the pool deduplicates and ranks them,
//! a prefix trie answers syllable longest-match, and the shared tuning
//! configuration lives here too.
//!
//! Public API:
//! - `Candidate`, `Origin` - Scored suggestion with span/remainder metadata
//! - `CandidatePool` - Dedup + final ordering for one suggestion request
//! - `TrieNode` - Prefix trie used for syllable validation and matching
//! - `Config` - Tuning constants and result bounds

use serde::{Deserialize, Serialize};

pub mod candidate;
pub use candidate::{Candidate, CandidatePool, Origin};

pub mod trie;
pub use trie::TrieNode;

/// Tuning configuration shared by the suggestion engines.
///
/// Every scoring constant and result bound of the pipeline lives here so a
/// deployment can adjust them from a TOML file without rebuilding. The
/// defaults are the hand-tuned values the engines ship with.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Score penalty applied to a candidate reached through a proximity
    /// (adjacent-key) corrected initial path instead of the exact one.
    pub proximity_penalty: f32,

    /// Lattice bonus for base dictionary words over n-gram completions
    /// during sentence decoding.
    pub base_word_bonus: f32,
    /// Lattice bonus per extra syllable spanned: `span_bonus * (len - 1)`.
    pub span_bonus: f32,
    /// Override score for a decoded full-coverage sentence so it always
    /// outranks partial matches of the same span.
    pub sentence_score: f32,

    // Dictionary query limits, chosen per input shape.
    /// Row limit when the input is a single syllable.
    pub single_query_limit: usize,
    /// Row limit when the input carries at least one explicit tone.
    pub toned_query_limit: usize,
    /// Row limit for untoned multi-syllable input.
    pub untoned_query_limit: usize,
    /// Row limit for n-gram completion queries.
    pub ngram_query_limit: usize,
    /// Run the n-gram completion query when fewer candidates than this are
    /// pooled so far (multi-syllable inputs always backfill).
    pub ngram_backfill_threshold: usize,
    /// Row cap for the per-span exact-length queries issued by the
    /// sentence decoder.
    pub decode_query_cap: usize,

    // Final result caps.
    /// Result cap when the input carries explicit tone information.
    pub toned_result_cap: usize,
    /// Result cap for untoned input (a much noisier match set).
    pub untoned_result_cap: usize,

    // Latin engine bounds.
    /// How many whole words each Latin trie node caches for prefix queries.
    pub latin_node_candidates: usize,
    /// Default maximum edit distance for Latin fuzzy lookup.
    pub latin_fuzzy_distance: usize,
    /// Minimum input length before fuzzy lookup is attempted at all.
    pub latin_fuzzy_min_len: usize,
    /// Result cap for Latin fuzzy lookup.
    pub latin_fuzzy_result_cap: usize,

    /// Maximum number of entries in the input -> suggestions cache.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proximity_penalty: -20.0,
            base_word_bonus: 1000.0,
            span_bonus: 50.0,
            sentence_score: 999_999.0,
            single_query_limit: 1000,
            toned_query_limit: 500,
            untoned_query_limit: 150,
            ngram_query_limit: 100,
            ngram_backfill_threshold: 20,
            decode_query_cap: 300,
            toned_result_cap: 300,
            untoned_result_cap: 40,
            latin_node_candidates: 10,
            latin_fuzzy_distance: 1,
            latin_fuzzy_min_len: 3,
            latin_fuzzy_result_cap: 15,
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Set the proximity correction penalty. More negative values push
    /// corrected candidates further down the ranking.
    pub fn set_proximity_penalty(&mut self, penalty: f32) {
        self.proximity_penalty = penalty;
    }

    /// Result cap for the current input shape.
    pub fn result_cap(&self, has_tone: bool) -> usize {
        if has_tone {
            self.toned_result_cap
        } else {
            self.untoned_result_cap
        }
    }
}

/// Utility helpers.
pub mod utils {
    /// NFC-normalize raw composing text.
    ///
    /// Unlike the usual normalize-and-trim helper, this must NOT trim:
    /// a trailing ASCII space is the tone-1 mark in bopomofo input.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect()
    }
}
