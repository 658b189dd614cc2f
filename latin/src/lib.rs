//! # liblatin
//!
//! Latin-script suggestion engine built on libsuggest-core: a word trie
//! with per-node candidate caches for O(prefix) completion, plus bounded
//! edit-distance fuzzy lookup for typo recovery.

pub mod engine;
pub mod trie;

pub use engine::Engine;
pub use trie::LatinTrie;
