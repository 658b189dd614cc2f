//! Static phonetic tables: the valid-syllable set, tone marks, and the
//! key-proximity table.
//!
//! All three are immutable process-wide configuration. The syllable set
//! and proximity table are compile-time `phf` structures; the syllable
//! trie derived from the set is built once on first use and read-only
//! afterwards, so concurrent suggestion requests share it freely.

use libsuggest_core::TrieNode;
use once_cell::sync::Lazy;
use phf::{phf_map, phf_set};

/// Every valid bopomofo syllable, tone-less. Longest entries are four
/// glyphs, which bounds the tokenizer scan.
pub static VALID_SYLLABLES: phf::Set<&'static str> = phf_set! {
    "ㄓ", "ㄔ", "ㄕ", "ㄖ", "ㄗ", "ㄘ", "ㄙ", "ㄚ",
    "ㄅㄚ", "ㄆㄚ", "ㄇㄚ", "ㄈㄚ", "ㄉㄚ", "ㄊㄚ", "ㄋㄚ", "ㄌㄚ",
    "ㄍㄚ", "ㄎㄚ", "ㄏㄚ", "ㄓㄚ", "ㄔㄚ", "ㄕㄚ", "ㄗㄚ", "ㄘㄚ",
    "ㄙㄚ", "ㄛ", "ㄅㄛ", "ㄆㄛ", "ㄇㄛ", "ㄈㄛ", "ㄜ", "ㄇㄜ",
    "ㄉㄜ", "ㄊㄜ", "ㄋㄜ", "ㄌㄜ", "ㄍㄜ", "ㄎㄜ", "ㄏㄜ", "ㄓㄜ",
    "ㄔㄜ", "ㄕㄜ", "ㄖㄜ", "ㄗㄜ", "ㄘㄜ", "ㄙㄜ", "ㄝ", "ㄞ",
    "ㄅㄞ", "ㄆㄞ", "ㄇㄞ", "ㄉㄞ", "ㄊㄞ", "ㄋㄞ", "ㄌㄞ", "ㄍㄞ",
    "ㄎㄞ", "ㄏㄞ", "ㄓㄞ", "ㄔㄞ", "ㄕㄞ", "ㄗㄞ", "ㄘㄞ", "ㄙㄞ",
    "ㄟ", "ㄅㄟ", "ㄆㄟ", "ㄇㄟ", "ㄈㄟ", "ㄉㄟ", "ㄋㄟ", "ㄌㄟ",
    "ㄍㄟ", "ㄏㄟ", "ㄓㄟ", "ㄕㄟ", "ㄗㄟ", "ㄠ", "ㄅㄠ", "ㄆㄠ",
    "ㄇㄠ", "ㄉㄠ", "ㄊㄠ", "ㄋㄠ", "ㄌㄠ", "ㄍㄠ", "ㄎㄠ", "ㄏㄠ",
    "ㄓㄠ", "ㄔㄠ", "ㄕㄠ", "ㄖㄠ", "ㄗㄠ", "ㄘㄠ", "ㄙㄠ", "ㄡ",
    "ㄆㄡ", "ㄇㄡ", "ㄈㄡ", "ㄉㄡ", "ㄊㄡ", "ㄋㄡ", "ㄌㄡ", "ㄍㄡ",
    "ㄎㄡ", "ㄏㄡ", "ㄓㄡ", "ㄔㄡ", "ㄕㄡ", "ㄖㄡ", "ㄗㄡ", "ㄘㄡ",
    "ㄙㄡ", "ㄢ", "ㄅㄢ", "ㄆㄢ", "ㄇㄢ", "ㄈㄢ", "ㄉㄢ", "ㄊㄢ",
    "ㄋㄢ", "ㄌㄢ", "ㄍㄢ", "ㄎㄢ", "ㄏㄢ", "ㄓㄢ", "ㄔㄢ", "ㄕㄢ",
    "ㄖㄢ", "ㄗㄢ", "ㄘㄢ", "ㄙㄢ", "ㄣ", "ㄅㄣ", "ㄆㄣ", "ㄇㄣ",
    "ㄈㄣ", "ㄋㄣ", "ㄍㄣ", "ㄎㄣ", "ㄏㄣ", "ㄓㄣ", "ㄔㄣ", "ㄕㄣ",
    "ㄖㄣ", "ㄗㄣ", "ㄘㄣ", "ㄙㄣ", "ㄤ", "ㄅㄤ", "ㄆㄤ", "ㄇㄤ",
    "ㄈㄤ", "ㄉㄤ", "ㄊㄤ", "ㄋㄤ", "ㄌㄤ", "ㄍㄤ", "ㄎㄤ", "ㄏㄤ",
    "ㄓㄤ", "ㄔㄤ", "ㄕㄤ", "ㄖㄤ", "ㄗㄤ", "ㄘㄤ", "ㄙㄤ", "ㄥ",
    "ㄅㄥ", "ㄆㄥ", "ㄇㄥ", "ㄈㄥ", "ㄉㄥ", "ㄊㄥ", "ㄋㄥ", "ㄌㄥ",
    "ㄍㄥ", "ㄎㄥ", "ㄏㄥ", "ㄓㄥ", "ㄔㄥ", "ㄕㄥ", "ㄖㄥ", "ㄗㄥ",
    "ㄘㄥ", "ㄙㄥ", "ㄦ", "ㄧ", "ㄅㄧ", "ㄆㄧ", "ㄇㄧ", "ㄉㄧ",
    "ㄊㄧ", "ㄋㄧ", "ㄌㄧ", "ㄐㄧ", "ㄑㄧ", "ㄒㄧ", "ㄧㄚ", "ㄌㄧㄚ",
    "ㄐㄧㄚ", "ㄑㄧㄚ", "ㄒㄧㄚ", "ㄧㄛ", "ㄧㄝ", "ㄅㄧㄝ", "ㄆㄧㄝ", "ㄇㄧㄝ",
    "ㄉㄧㄝ", "ㄊㄧㄝ", "ㄋㄧㄝ", "ㄌㄧㄝ", "ㄐㄧㄝ", "ㄑㄧㄝ", "ㄒㄧㄝ", "ㄧㄞ",
    "ㄧㄠ", "ㄅㄧㄠ", "ㄆㄧㄠ", "ㄇㄧㄠ", "ㄉㄧㄠ", "ㄊㄧㄠ", "ㄋㄧㄠ", "ㄌㄧㄠ",
    "ㄐㄧㄠ", "ㄑㄧㄠ", "ㄒㄧㄠ", "ㄧㄡ", "ㄇㄧㄡ", "ㄉㄧㄡ", "ㄋㄧㄡ", "ㄌㄧㄡ",
    "ㄐㄧㄡ", "ㄑㄧㄡ", "ㄒㄧㄡ", "ㄧㄢ", "ㄅㄧㄢ", "ㄆㄧㄢ", "ㄇㄧㄢ", "ㄉㄧㄢ",
    "ㄊㄧㄢ", "ㄋㄧㄢ", "ㄌㄧㄢ", "ㄐㄧㄢ", "ㄑㄧㄢ", "ㄒㄧㄢ", "ㄧㄣ", "ㄅㄧㄣ",
    "ㄆㄧㄣ", "ㄇㄧㄣ", "ㄋㄧㄣ", "ㄌㄧㄣ", "ㄐㄧㄣ", "ㄑㄧㄣ", "ㄒㄧㄣ", "ㄧㄤ",
    "ㄋㄧㄤ", "ㄌㄧㄤ", "ㄐㄧㄤ", "ㄑㄧㄤ", "ㄒㄧㄤ", "ㄧㄥ", "ㄅㄧㄥ", "ㄆㄧㄥ",
    "ㄇㄧㄥ", "ㄉㄧㄥ", "ㄊㄧㄥ", "ㄋㄧㄥ", "ㄌㄧㄥ", "ㄐㄧㄥ", "ㄑㄧㄥ", "ㄒㄧㄥ",
    "ㄨ", "ㄅㄨ", "ㄆㄨ", "ㄇㄨ", "ㄈㄨ", "ㄉㄨ", "ㄊㄨ", "ㄋㄨ",
    "ㄌㄨ", "ㄍㄨ", "ㄎㄨ", "ㄏㄨ", "ㄓㄨ", "ㄔㄨ", "ㄕㄨ", "ㄖㄨ",
    "ㄗㄨ", "ㄘㄨ", "ㄙㄨ", "ㄨㄚ", "ㄍㄨㄚ", "ㄎㄨㄚ", "ㄏㄨㄚ", "ㄓㄨㄚ",
    "ㄔㄨㄚ", "ㄕㄨㄚ", "ㄨㄛ", "ㄉㄨㄛ", "ㄊㄨㄛ", "ㄋㄨㄛ", "ㄌㄨㄛ", "ㄍㄨㄛ",
    "ㄎㄨㄛ", "ㄏㄨㄛ", "ㄓㄨㄛ", "ㄔㄨㄛ", "ㄕㄨㄛ", "ㄖㄨㄛ", "ㄗㄨㄛ", "ㄘㄨㄛ",
    "ㄙㄨㄛ", "ㄨㄞ", "ㄍㄨㄞ", "ㄎㄨㄞ", "ㄏㄨㄞ", "ㄓㄨㄞ", "ㄕㄨㄞ", "ㄨㄟ",
    "ㄉㄨㄟ", "ㄊㄨㄟ", "ㄍㄨㄟ", "ㄎㄨㄟ", "ㄏㄨㄟ", "ㄓㄨㄟ", "ㄔㄨㄟ", "ㄕㄨㄟ",
    "ㄖㄨㄟ", "ㄗㄨㄟ", "ㄘㄨㄟ", "ㄙㄨㄟ", "ㄨㄢ", "ㄉㄨㄢ", "ㄊㄨㄢ", "ㄋㄨㄢ",
    "ㄌㄨㄢ", "ㄍㄨㄢ", "ㄎㄨㄢ", "ㄏㄨㄢ", "ㄓㄨㄢ", "ㄔㄨㄢ", "ㄕㄨㄢ", "ㄖㄨㄢ",
    "ㄗㄨㄢ", "ㄘㄨㄢ", "ㄙㄨㄢ", "ㄨㄣ", "ㄉㄨㄣ", "ㄊㄨㄣ", "ㄌㄨㄣ", "ㄍㄨㄣ",
    "ㄎㄨㄣ", "ㄏㄨㄣ", "ㄓㄨㄣ", "ㄔㄨㄣ", "ㄕㄨㄣ", "ㄖㄨㄣ", "ㄗㄨㄣ", "ㄘㄨㄣ",
    "ㄙㄨㄣ", "ㄨㄤ", "ㄍㄨㄤ", "ㄎㄨㄤ", "ㄏㄨㄤ", "ㄓㄨㄤ", "ㄔㄨㄤ", "ㄕㄨㄤ",
    "ㄨㄥ", "ㄉㄨㄥ", "ㄊㄨㄥ", "ㄋㄨㄥ", "ㄌㄨㄥ", "ㄍㄨㄥ", "ㄎㄨㄥ", "ㄏㄨㄥ",
    "ㄓㄨㄥ", "ㄔㄨㄥ", "ㄖㄨㄥ", "ㄗㄨㄥ", "ㄘㄨㄥ", "ㄙㄨㄥ", "ㄩ", "ㄋㄩ",
    "ㄌㄩ", "ㄐㄩ", "ㄑㄩ", "ㄒㄩ", "ㄩㄝ", "ㄋㄩㄝ", "ㄌㄩㄝ", "ㄐㄩㄝ",
    "ㄑㄩㄝ", "ㄒㄩㄝ", "ㄩㄢ", "ㄐㄩㄢ", "ㄑㄩㄢ", "ㄒㄩㄢ", "ㄩㄣ", "ㄐㄩㄣ",
    "ㄑㄩㄣ", "ㄒㄩㄣ", "ㄩㄥ", "ㄐㄩㄥ", "ㄑㄩㄥ",
};

/// Physically adjacent keys on the standard bopomofo layout, used by the
/// proximity corrector to recover from single-key typos.
pub static PROXIMITY: phf::Map<char, &'static str> = phf_map! {
    'ㄅ' => "ㄉㄆ", 'ㄆ' => "ㄅㄉㄊㄇ", 'ㄇ' => "ㄆㄋㄈㄌ", 'ㄈ' => "ㄇㄌ",
    'ㄉ' => "ㄅㄆㄊ", 'ㄊ' => "ㄉㄆㄍㄋ", 'ㄋ' => "ㄊㄇㄎㄌㄏ", 'ㄌ' => "ㄈㄇㄋㄏ",
    'ㄍ' => "ㄊㄐㄎ", 'ㄎ' => "ㄍㄋㄑㄏㄒ", 'ㄏ' => "ㄌㄋㄎㄒ", 'ㄐ' => "ㄍㄑㄔ",
    'ㄑ' => "ㄐㄎㄕㄖ", 'ㄒ' => "ㄏㄎㄑㄖ", 'ㄓ' => "ㄐㄔ", 'ㄔ' => "ㄓㄐㄕㄗ",
    'ㄕ' => "ㄔㄑㄘㄙ", 'ㄖ' => "ㄒㄑㄕㄙ", 'ㄗ' => "ㄔㄘ", 'ㄘ' => "ㄗㄕ",
    'ㄙ' => "ㄕㄖ", 'ㄧ' => "ㄨ", 'ㄨ' => "ㄧㄩ", 'ㄩ' => "ㄨ",
    'ㄚ' => "ㄞㄛ", 'ㄛ' => "ㄚㄟㄜ", 'ㄜ' => "ㄛㄠㄡ", 'ㄝ' => "ㄜㄡ",
    'ㄞ' => "ㄚㄛㄟ", 'ㄟ' => "ㄞㄛㄠ", 'ㄠ' => "ㄟㄜㄤㄥ", 'ㄡ' => "ㄝㄜㄥ",
    'ㄢ' => "ㄞㄟㄣ", 'ㄣ' => "ㄢㄟㄤ", 'ㄤ' => "ㄣㄠ", 'ㄥ' => "ㄠㄡ",
    'ㄦ' => "ㄢㄣ",
};

/// Syllable trie derived from [`VALID_SYLLABLES`], built on first use.
pub static SYLLABLE_TRIE: Lazy<TrieNode> = Lazy::new(|| {
    let mut trie = TrieNode::new();
    for syllable in VALID_SYLLABLES.iter() {
        trie.insert(syllable);
    }
    trie
});

/// Map a tone-mark glyph to its tone digit. The ASCII space marks tone 1.
pub fn tone_digit(mark: char) -> Option<char> {
    match mark {
        ' ' => Some('1'),
        'ˊ' => Some('2'),
        'ˇ' => Some('3'),
        'ˋ' => Some('4'),
        '˙' => Some('0'),
        _ => None,
    }
}

/// Whether `c` is a tone-mark glyph as typed on the keyboard.
pub fn is_tone_mark(c: char) -> bool {
    tone_digit(c).is_some()
}

/// Whether `c` is a normalized tone digit (0-4).
pub fn is_tone_digit(c: char) -> bool {
    matches!(c, '0'..='4')
}

/// Remove tone digits, keeping only the phonetic glyphs.
pub fn strip_tones(s: &str) -> String {
    s.chars().filter(|c| !is_tone_digit(*c)).collect()
}

/// Canonical composing form: NFC, with the CJK ideograph 一 (often produced
/// by input sources in place of the medial) folded to bopomofo ㄧ. Tone
/// marks are kept as typed so raw positions stay aligned for
/// remainder-splitting.
pub fn canonicalize(s: &str) -> String {
    libsuggest_core::utils::normalize(s)
        .chars()
        .map(|c| if c == '一' { 'ㄧ' } else { c })
        .collect()
}

/// Replace tone-mark glyphs with tone digits, one char for one char.
pub fn digits_form(s: &str) -> String {
    s.chars()
        .map(|c| tone_digit(c).unwrap_or(c))
        .collect()
}
