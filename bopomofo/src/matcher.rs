//! Phonetic acceptance rules between typed units and dictionary syllables.
//!
//! A dictionary entry is accepted position by position:
//! - the proximity-corrected first position compares tone-stripped and only
//!   requires the entry syllable to contain the input's vowel remainder
//!   (the initial was substituted, so the body is what identifies it);
//! - a toned position must match the stored syllable exactly, tone included;
//! - an untoned position is a prefix of the entry's tone-stripped syllable,
//!   which lets matches appear while a syllable is still being typed.

use crate::syllables::{is_tone_digit, strip_tones};
use crate::tokenizer::Unit;

/// Whether the typed units accept a stored syllable sequence. Lengths must
/// agree; `fuzzy_first` marks entries reached through a corrected initial
/// path.
pub fn phonetic_match(units: &[Unit], entry_syllables: &[String], fuzzy_first: bool) -> bool {
    if units.len() != entry_syllables.len() {
        return false;
    }
    for (k, (unit, entry)) in units.iter().zip(entry_syllables.iter()).enumerate() {
        if k == 0 && fuzzy_first {
            let input_pure = unit.pure();
            let entry_pure = strip_tones(entry);
            let remainder: String = input_pure.chars().skip(1).collect();
            if input_pure.chars().count() > 1 && !entry_pure.contains(&remainder) {
                return false;
            }
        } else if unit.has_tone() {
            if unit.text != *entry {
                return false;
            }
        } else {
            let entry_pure = strip_tones(entry);
            if !entry_pure.starts_with(&unit.text) {
                return false;
            }
        }
    }
    true
}
