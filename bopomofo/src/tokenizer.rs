//! Phonetic syllable tokenizer.
//!
//! Splits a raw composing buffer into syllable units by longest-match
//! against the static syllable table. A tone mark closes the chunk it
//! follows and its digit attaches to the last unit of that chunk. Glyph
//! runs that match nothing degrade to one-glyph units, so tokenizing never
//! fails; empty input yields an empty sequence.

use crate::syllables::{self, SYLLABLE_TRIE};

/// One tokenized syllable unit.
///
/// `text` is the normalized unit (phonetic glyphs plus an optional trailing
/// tone digit). `raw_len` is how many chars of the raw buffer the unit
/// consumed, counting the tone-mark glyph, so a caller can split off the
/// unconsumed remainder when only a prefix of the buffer is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub text: String,
    pub raw_len: usize,
}

impl Unit {
    pub fn new<T: Into<String>>(text: T, raw_len: usize) -> Self {
        Self {
            text: text.into(),
            raw_len,
        }
    }

    /// The unit's glyphs without any tone digit.
    pub fn pure(&self) -> String {
        syllables::strip_tones(&self.text)
    }

    /// First phonetic glyph, used for initial-path construction.
    pub fn initial(&self) -> Option<char> {
        self.text.chars().find(|c| !syllables::is_tone_digit(*c))
    }

    /// Whether the unit carries an explicit tone digit.
    pub fn has_tone(&self) -> bool {
        self.text.chars().any(syllables::is_tone_digit)
    }
}

/// Tokenize a canonicalized raw buffer (tone marks still as typed).
pub fn tokenize(raw: &str) -> Vec<Unit> {
    let normalized = syllables::digits_form(raw);
    let segments = split_phonetic_units(&normalized);

    let raw_chars: Vec<char> = raw.chars().collect();
    let mut units = Vec::with_capacity(segments.len());
    let mut pos = 0usize;
    for seg in segments {
        let glyphs = syllables::strip_tones(&seg).chars().count();
        let mut raw_len = glyphs;
        // The tone mark sits right after the glyphs it annotates.
        if let Some(&next) = raw_chars.get(pos + raw_len) {
            if syllables::is_tone_mark(next) {
                raw_len += 1;
            }
        }
        units.push(Unit::new(seg, raw_len));
        pos += raw_len;
    }
    units
}

/// Split a digit-normalized buffer into syllable strings. Tone digits close
/// a chunk; each chunk is sub-split by greedy longest-match.
pub fn split_phonetic_units(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = Vec::new();
    let mut start = 0usize;
    for (i, &c) in chars.iter().enumerate() {
        if syllables::is_tone_digit(c) {
            let chunk: String = chars[start..=i].iter().collect();
            result.extend(sub_split_syllables(&chunk));
            start = i + 1;
        }
    }
    if start < chars.len() {
        let chunk: String = chars[start..].iter().collect();
        result.extend(sub_split_syllables(&chunk));
    }
    result
}

/// Greedy longest-match within one chunk; the chunk's tone digit (if any)
/// attaches to the last matched unit.
fn sub_split_syllables(chunk: &str) -> Vec<String> {
    let tone = chunk.chars().find(|c| syllables::is_tone_digit(*c));
    let content: Vec<char> = chunk
        .chars()
        .filter(|c| !syllables::is_tone_digit(*c))
        .collect();
    if content.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut i = 0usize;
    while i < content.len() {
        match SYLLABLE_TRIE.longest_prefix(&content, i) {
            Some((end, word)) => {
                result.push(word);
                i = end;
            }
            None => {
                // Unrecognized glyph: degrade to a one-glyph unit.
                result.push(content[i].to_string());
                i += 1;
            }
        }
    }
    if let Some(tone) = tone {
        if let Some(last) = result.last_mut() {
            last.push(tone);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllables::VALID_SYLLABLES;

    #[test]
    fn empty_input_yields_no_units() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn every_table_syllable_roundtrips() {
        for syllable in VALID_SYLLABLES.iter() {
            let units = tokenize(syllable);
            assert_eq!(units.len(), 1, "split {syllable} into {units:?}");
            assert_eq!(units[0].text, *syllable);
            assert!(!units[0].has_tone());
        }
    }

    #[test]
    fn toned_pair_splits_on_tone_marks() {
        let units = tokenize("ㄋㄧˇㄏㄠˇ");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["ㄋㄧ3", "ㄏㄠ3"]);
        assert_eq!(units[0].raw_len, 3);
        assert_eq!(units[1].raw_len, 3);
    }

    #[test]
    fn untoned_run_splits_greedily() {
        let units = tokenize("ㄋㄧㄏㄠ");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["ㄋㄧ", "ㄏㄠ"]);
        assert_eq!(units[0].raw_len, 2);
    }

    #[test]
    fn tone_attaches_to_last_unit_of_chunk() {
        // Two syllables typed before the first tone mark: the tone belongs
        // to the second one.
        let units = tokenize("ㄓㄨㄥㄍㄨㄛˊ");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["ㄓㄨㄥ", "ㄍㄨㄛ2"]);
        assert_eq!(units[0].raw_len, 3);
        assert_eq!(units[1].raw_len, 4);
    }

    #[test]
    fn space_is_the_tone_one_mark() {
        let units = tokenize("ㄇㄚ ");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "ㄇㄚ1");
        assert_eq!(units[0].raw_len, 3);
    }

    #[test]
    fn unknown_glyph_degrades_to_single_unit() {
        let units = tokenize("ㄋㄧx");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["ㄋㄧ", "x"]);
    }

    #[test]
    fn raw_lens_cover_the_buffer() {
        let raw = "ㄋㄧˇㄏㄠˇㄇㄚ˙";
        let consumed: usize = tokenize(raw).iter().map(|u| u.raw_len).sum();
        assert_eq!(consumed, raw.chars().count());
    }

    #[test]
    fn unit_accessors() {
        let unit = Unit::new("ㄋㄧ3", 3);
        assert_eq!(unit.pure(), "ㄋㄧ");
        assert_eq!(unit.initial(), Some('ㄋ'));
        assert!(unit.has_tone());
        assert!(!Unit::new("ㄋㄧ", 2).has_tone());
    }
}
