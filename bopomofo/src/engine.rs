//! Bopomofo suggestion engine.
//!
//! One `suggest` call per keystroke: tokenize the composing buffer, pull
//! whole-buffer matches out of the dictionary (with proximity correction),
//! fall back to the sentence decoder when nothing spans the full input,
//! supplement single first-syllable words for segmented commit, backfill
//! n-gram completions, then dedup, rank and cap.
//!
//! The engine holds no per-request state: the dictionary is read-only and
//! a request can be abandoned at any point, so callers cancel superseded
//! keystrokes simply by discarding the result. Because suggestions are a
//! pure function of (dictionary, input), results are memoized in a small
//! LRU keyed by the raw buffer; the mutex around it keeps the engine
//! shareable across concurrent readers.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use libsuggest_core::{Candidate, CandidatePool, Config, Origin};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder;
use crate::dict::Dictionary;
use crate::matcher::phonetic_match;
use crate::proximity;
use crate::syllables::{self, is_tone_digit};
use crate::tokenizer::{tokenize, Unit};

/// One ranked suggestion: the display word plus the unconsumed raw suffix
/// of the composing buffer. Committing the word leaves exactly `remainder`
/// as the new composing state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub remainder: String,
}

impl Suggestion {
    pub fn new<T: Into<String>, R: Into<String>>(text: T, remainder: R) -> Self {
        Self {
            text: text.into(),
            remainder: remainder.into(),
        }
    }
}

/// The phonetic suggestion engine.
pub struct Engine {
    dict: Arc<Dictionary>,
    config: Config,
    cache: Mutex<LruCache<String, Vec<Suggestion>>>,
}

impl Engine {
    pub fn new(dict: Arc<Dictionary>, config: Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1000).unwrap());
        Self {
            dict,
            config,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Ranked suggestions for the raw composing buffer.
    pub fn suggest(&self, input: &str) -> Vec<Suggestion> {
        if input.is_empty() {
            return Vec::new();
        }
        if let Some(cached) = self.cache.lock().unwrap().get(input) {
            return cached.clone();
        }

        let raw = syllables::canonicalize(input);
        let raw_chars: Vec<char> = raw.chars().collect();
        let normalized = syllables::digits_form(&raw);
        let has_tone = normalized.chars().any(is_tone_digit);

        let units = tokenize(&raw);
        if units.is_empty() {
            return Vec::new();
        }
        let n = units.len();
        debug!(segments = n, has_tone, "suggest");

        let base_limit = if n == 1 {
            self.config.single_query_limit
        } else if has_tone {
            self.config.toned_query_limit
        } else {
            self.config.untoned_query_limit
        };

        let mut pool = CandidatePool::new();

        // Whole-buffer dictionary matches first.
        let full = self.query_with_remainder(&units, &raw_chars, false, base_limit, n > 1);
        let has_full_base = full.iter().any(|c| c.span == n);
        pool.extend(full);

        // No base word spans the input: assemble one from the lattice.
        if n > 1 && !has_full_base {
            if let Some(sentence) = decoder::decode(&units, &self.dict, &self.config) {
                debug!(%sentence, "decoder produced full-coverage candidate");
                pool.push(Candidate::new(
                    sentence,
                    n,
                    self.config.sentence_score,
                    Origin::Sentence,
                    "",
                ));
            }
        }

        // Single words for the first syllable, so a prefix can be committed
        // while the rest of the buffer stays composing.
        if n > 1 {
            pool.extend(self.query_with_remainder(&units[..1], &raw_chars, false, base_limit, false));
        }

        // Phrase completions, when the pool is thin or the input is long.
        if pool.len() < self.config.ngram_backfill_threshold || n > 1 {
            pool.extend(self.query_with_remainder(
                &units,
                &raw_chars,
                true,
                self.config.ngram_query_limit,
                n > 1,
            ));
        }

        let ranked = pool.into_ranked(self.config.result_cap(has_tone));
        let suggestions: Vec<Suggestion> = ranked
            .into_iter()
            .map(|c| Suggestion::new(c.text, c.remainder))
            .collect();

        self.cache
            .lock()
            .unwrap()
            .put(input.to_string(), suggestions.clone());
        suggestions
    }

    /// Query the dictionary over the given units and attach the unconsumed
    /// raw suffix to every accepted entry.
    fn query_with_remainder(
        &self,
        units: &[Unit],
        raw_chars: &[char],
        is_ngram: bool,
        limit: usize,
        use_proximity: bool,
    ) -> Vec<Candidate> {
        let paths = proximity::variants(units, use_proximity);
        let origin = if is_ngram { Origin::Ngram } else { Origin::Base };
        let mut out = Vec::new();
        for (entry, fuzzy) in self.dict.lookup(&paths, is_ngram, limit) {
            if !phonetic_match(units, &entry.syllables, fuzzy) {
                continue;
            }
            let span = entry.syllables.len();
            let consumed: usize = units[..span].iter().map(|u| u.raw_len).sum();
            let remainder: String = raw_chars[consumed.min(raw_chars.len())..].iter().collect();
            let score = if fuzzy {
                entry.weight + self.config.proximity_penalty
            } else {
                entry.weight
            };
            out.push(Candidate::new(entry.word.clone(), span, score, origin, remainder));
        }
        out
    }
}
