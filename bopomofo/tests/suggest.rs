//! End-to-end suggestion pipeline tests: full-span preference, segmented
//! selection remainders, proximity-corrected ranking, decoder fallback and
//! base-before-ngram ordering.

use std::sync::Arc;

use libbopomofo::{Dictionary, Engine};
use libsuggest_core::Config;

fn engine_with(rows: &[(&str, &str, &str, &str, usize, f32, bool)]) -> Engine {
    let mut dict = Dictionary::new();
    for (word, syl, tones, initials, count, weight, is_ngram) in rows {
        dict.insert(word, syl, tones, initials, *count, *weight, *is_ngram)
            .unwrap();
    }
    Engine::new(Arc::new(dict), Config::default())
}

fn standard_engine() -> Engine {
    engine_with(&[
        ("你好", "ㄋㄧ,ㄏㄠ", "3,3", "ㄋ,ㄏ", 2, 100.0, false),
        ("你", "ㄋㄧ", "3", "ㄋ", 1, 60.0, false),
        ("好", "ㄏㄠ", "3", "ㄏ", 1, 55.0, false),
        ("嗎", "ㄇㄚ", "0", "ㄇ", 1, 40.0, false),
        ("搭拉", "ㄉㄚ,ㄌㄚ", "1,1", "ㄉ,ㄌ", 2, 80.0, false),
        ("巴拉", "ㄅㄚ,ㄌㄚ", "1,1", "ㄅ,ㄌ", 2, 80.0, false),
    ])
}

#[test]
fn empty_input_yields_no_suggestions() {
    let engine = standard_engine();
    assert!(engine.suggest("").is_empty());
}

#[test]
fn suggestions_are_idempotent() {
    let engine = standard_engine();
    let first = engine.suggest("ㄋㄧˇㄏㄠˇ");
    let second = engine.suggest("ㄋㄧˇㄏㄠˇ");
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn full_span_entry_ranks_first() {
    let engine = standard_engine();
    let suggestions = engine.suggest("ㄋㄧˇㄏㄠˇ");
    assert_eq!(suggestions[0].text, "你好");
    assert_eq!(suggestions[0].remainder, "");
}

#[test]
fn segmented_selection_remainder_is_exact() {
    let engine = standard_engine();
    let suggestions = engine.suggest("ㄋㄧˇㄏㄠˇ");
    let single = suggestions
        .iter()
        .find(|s| s.text == "你")
        .expect("first-syllable supplement present");
    // Committing 你 must leave exactly the untouched raw suffix.
    assert_eq!(single.remainder, "ㄏㄠˇ");
}

#[test]
fn proximity_corrected_match_ranks_below_exact() {
    let engine = standard_engine();
    // ㄉ is adjacent to ㄅ: typing ㄉㄚㄌㄚ must surface both 搭拉 (exact)
    // and 巴拉 (corrected), in that order. Base weights are equal, but the
    // corrected path carries the penalty.
    let suggestions = engine.suggest("ㄉㄚㄌㄚ");
    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    let exact = texts.iter().position(|t| *t == "搭拉").expect("exact match");
    let fuzzy = texts.iter().position(|t| *t == "巴拉").expect("corrected match");
    assert!(exact < fuzzy);
}

#[test]
fn decoder_assembles_sentence_when_nothing_spans() {
    let engine = engine_with(&[
        ("你", "ㄋㄧ", "3", "ㄋ", 1, 60.0, false),
        ("好", "ㄏㄠ", "3", "ㄏ", 1, 55.0, false),
    ]);
    let suggestions = engine.suggest("ㄋㄧˇㄏㄠˇ");
    assert_eq!(suggestions[0].text, "你好");
    assert_eq!(suggestions[0].remainder, "");
    // The single-word supplement still trails for segmented commit.
    assert!(suggestions.iter().any(|s| s.text == "你" && s.remainder == "ㄏㄠˇ"));
}

#[test]
fn full_span_dictionary_hit_bypasses_decoder() {
    // 你好 exists as a direct full-span hit; even with the single words
    // present, it must lead and no second copy may appear.
    let engine = standard_engine();
    let suggestions = engine.suggest("ㄋㄧˇㄏㄠˇ");
    let copies = suggestions.iter().filter(|s| s.text == "你好").count();
    assert_eq!(copies, 1);
    assert_eq!(suggestions[0].text, "你好");
}

#[test]
fn base_words_order_before_ngram_completions() {
    let engine = engine_with(&[
        ("你好", "ㄋㄧ,ㄏㄠ", "3,3", "ㄋ,ㄏ", 2, 100.0, false),
        ("妳好", "ㄋㄧ,ㄏㄠ", "3,3", "ㄋ,ㄏ", 2, 500.0, true),
        ("你", "ㄋㄧ", "3", "ㄋ", 1, 60.0, false),
    ]);
    let suggestions = engine.suggest("ㄋㄧㄏㄠ");
    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    let base = texts.iter().position(|t| *t == "你好").unwrap();
    let ngram = texts.iter().position(|t| *t == "妳好").unwrap();
    // Same span, but the n-gram completion trails the base word despite its
    // higher weight.
    assert!(base < ngram);
}

#[test]
fn untoned_prefix_typing_matches_progressively() {
    let engine = standard_engine();
    // Second syllable not yet complete: ㄋㄧㄏ still reaches 你好.
    let suggestions = engine.suggest("ㄋㄧㄏ");
    assert!(suggestions.iter().any(|s| s.text == "你好"));
}

#[test]
fn unknown_glyphs_degrade_without_error() {
    let engine = standard_engine();
    // An unrecognized ASCII glyph becomes a one-glyph unit; no match spans
    // the buffer, but the call must not fail and the first syllable is
    // still selectable.
    let suggestions = engine.suggest("ㄋㄧˇx");
    assert!(suggestions.iter().any(|s| s.text == "你" && s.remainder == "x"));
}

#[test]
fn wrong_tone_excludes_entry() {
    let engine = standard_engine();
    // ㄋㄧˋ (tone 4) must not match the tone-3 entries.
    let suggestions = engine.suggest("ㄋㄧˋ");
    assert!(suggestions.iter().all(|s| s.text != "你"));
}
