//! Proximity-based initial-path correction.
//!
//! Recovers from single-key typos by substituting keys physically adjacent
//! to the first syllable's initial glyph. Only the first syllable is
//! corrected: it is the highest-value position, since later syllables are
//! already separated in trie space by the earlier path steps. A substitution
//! is kept only when it still forms a valid syllable together with the first
//! syllable's vowel remainder, which keeps the variant fan-out small.

use crate::syllables::{PROXIMITY, VALID_SYLLABLES};
use crate::tokenizer::Unit;

/// The exact initial path: one initial glyph per unit.
pub fn initial_path(units: &[Unit]) -> String {
    units.iter().filter_map(|u| u.initial()).collect()
}

/// Candidate initial paths for a dictionary query, the unmodified path
/// first. With `allow_fuzzy` set, adjacent-key substitutions of the first
/// initial that still form valid syllables are appended.
pub fn variants(units: &[Unit], allow_fuzzy: bool) -> Vec<String> {
    let original = initial_path(units);
    let mut paths = vec![original.clone()];

    if allow_fuzzy && !units.is_empty() {
        let first = &units[0];
        let Some(first_glyph) = first.initial() else {
            return paths;
        };
        let vowel_rest: String = first.pure().chars().skip(1).collect();
        let path_rest: String = original.chars().skip(1).collect();

        if let Some(neighbors) = PROXIMITY.get(&first_glyph) {
            for neighbor in neighbors.chars() {
                let substituted = format!("{neighbor}{vowel_rest}");
                if VALID_SYLLABLES.contains(substituted.as_str()) {
                    paths.push(format!("{neighbor}{path_rest}"));
                }
            }
        }
    }
    paths
}
