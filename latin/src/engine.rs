//! Latin suggestion engine.
//!
//! Wraps the word trie behind the same provider-style surface the phonetic
//! engine exposes: one call per keystroke, ranked words out. The engine
//! echoes the typed prefix itself first (committing what you typed is
//! always an option), then exact prefix completions, then fuzzy matches for
//! inputs long enough to be worth correcting. The caller owns case-shape
//! restoration; everything here is lowercase.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use anyhow::{Context, Result};
use libsuggest_core::Config;
use tracing::debug;

use crate::trie::LatinTrie;

/// The Latin suggestion engine.
pub struct Engine {
    trie: LatinTrie,
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            trie: LatinTrie::with_node_cap(config.latin_node_candidates),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Insert one word. Build-time only: inserts must complete before
    /// concurrent suggestion calls begin.
    pub fn insert(&mut self, word: &str) {
        self.trie.insert(word);
    }

    /// Load a word list, one word per line; blank lines and `#` comments
    /// are skipped. Returns the number of words inserted.
    pub fn load_words<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open word list {}", path.display()))?;
        let mut inserted = 0usize;
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("read {}", path.display()))?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            self.trie.insert(word);
            inserted += 1;
        }
        debug!(words = inserted, path = %path.display(), "loaded word list");
        Ok(inserted)
    }

    /// Ranked suggestions for a typed prefix: the prefix itself, exact
    /// completions, then fuzzy corrections, deduplicated in that order.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let raw = input.to_lowercase();
        if raw.is_empty() {
            return Vec::new();
        }

        let exact = self.trie.prefix_lookup(&raw);
        let fuzzy: Vec<String> = if raw.chars().count() >= self.config.latin_fuzzy_min_len {
            self.trie
                .fuzzy_lookup(&raw, self.config.latin_fuzzy_distance)
                .into_iter()
                .take(self.config.latin_fuzzy_result_cap)
                .map(|(word, _)| word)
                .collect()
        } else {
            Vec::new()
        };
        debug!(exact = exact.len(), fuzzy = fuzzy.len(), "latin suggest");

        let mut seen = AHashSet::new();
        std::iter::once(raw)
            .chain(exact)
            .chain(fuzzy)
            .filter(|w| seen.insert(w.clone()))
            .collect()
    }
}
