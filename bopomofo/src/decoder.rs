//! Sentence decoder: maximum-score full-coverage path over the syllable
//! lattice.
//!
//! Only runs when no single dictionary entry spans the whole input. Every
//! (start, length) window is queried against the dictionary with proximity
//! correction enabled; each accepted entry becomes a lattice edge whose
//! score favors base words over n-gram completions and longer spans over
//! chains of short ones. Forward dynamic programming by increasing end
//! index then yields the best path covering every syllable, reconstructed
//! through back-pointers.

use libsuggest_core::Config;
use tracing::trace;

use crate::dict::Dictionary;
use crate::matcher::phonetic_match;
use crate::proximity;
use crate::tokenizer::Unit;

/// One lattice node: an accepted entry spanning `start..end`, plus the DP
/// state (`total`, `prev`) filled in during the forward pass. `prev` indexes
/// into the node list ending at `start`.
#[derive(Debug)]
struct LatticeNode {
    word: String,
    score: f32,
    start: usize,
    total: f32,
    prev: Option<usize>,
}

/// Decode the best full-coverage sentence, or `None` when no combination of
/// dictionary entries covers every syllable.
pub fn decode(units: &[Unit], dict: &Dictionary, config: &Config) -> Option<String> {
    let n = units.len();
    if n == 0 {
        return None;
    }

    // ends[e] holds the lattice nodes whose span ends at e. Index 0 holds
    // the start sentinel.
    let mut ends: Vec<Vec<LatticeNode>> = (0..=n).map(|_| Vec::new()).collect();
    ends[0].push(LatticeNode {
        word: String::new(),
        score: 0.0,
        start: 0,
        total: 0.0,
        prev: None,
    });

    for i in 0..n {
        for len in 1..=(n - i) {
            let span = &units[i..i + len];
            let paths = proximity::variants(span, true);
            for (entry, fuzzy) in dict.lookup_any(&paths, config.decode_query_cap) {
                if !phonetic_match(span, &entry.syllables, fuzzy) {
                    continue;
                }
                let priority = if entry.is_ngram {
                    0.0
                } else {
                    config.base_word_bonus
                };
                let span_bonus = (len - 1) as f32 * config.span_bonus;
                let penalty = if fuzzy { config.proximity_penalty } else { 0.0 };
                ends[i + len].push(LatticeNode {
                    word: entry.word.clone(),
                    score: entry.weight + priority + span_bonus + penalty,
                    start: i,
                    total: f32::NEG_INFINITY,
                    prev: None,
                });
            }
        }
    }

    // Forward pass: nodes ending at idx only depend on nodes ending at
    // their start index, which is always smaller.
    for idx in 1..=n {
        let (head, tail) = ends.split_at_mut(idx);
        for node in tail[0].iter_mut() {
            for (pos, prev) in head[node.start].iter().enumerate() {
                let total = prev.total + node.score;
                if total > node.total {
                    node.total = total;
                    node.prev = Some(pos);
                }
            }
        }
    }

    // Best reachable node covering the full input.
    let (mut pos, best_total) = ends[n]
        .iter()
        .enumerate()
        .filter(|(_, node)| node.total.is_finite())
        .max_by(|a, b| {
            a.1.total
                .partial_cmp(&b.1.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(pos, node)| (pos, node.total))?;

    let mut words = Vec::new();
    let mut level = n;
    while level > 0 {
        let node = &ends[level][pos];
        words.push(node.word.as_str());
        pos = node.prev?;
        level = node.start;
    }
    words.reverse();
    let sentence = words.concat();
    trace!(%sentence, score = best_total, "decoded full-coverage path");
    Some(sentence)
}
