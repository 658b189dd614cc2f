//! # libbopomofo
//!
//! Bopomofo (zhuyin) predictive-text engine built on libsuggest-core.
//!
//! Turns a raw phonetic composing buffer into a ranked list of candidate
//! words and phrases: syllable tokenizing, a trie-indexed dictionary with
//! adjacent-key proximity correction, toned/untoned phonetic matching, and
//! a Viterbi-style sentence decoder for inputs no single entry spans.

pub mod decoder;
pub mod dict;
pub mod engine;
pub mod matcher;
pub mod proximity;
pub mod syllables;
pub mod tokenizer;

pub use dict::{DictEntry, DictRow, Dictionary};
pub use engine::{Engine, Suggestion};
pub use tokenizer::{tokenize, Unit};
