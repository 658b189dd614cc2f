//! Trie-indexed dictionary.
//!
//! Words are keyed by their initial path: the first glyph of each syllable,
//! one trie step per syllable. Entries live at the node their full path
//! reaches, so walking a candidate path answers the composite query
//! (syllable count, first-syllable prefix) in one descent; the n-gram flag
//! is filtered on the collected bucket.
//!
//! The index is built once by bulk insert and read-only afterwards;
//! concurrent suggestion requests query it through `&self`. Provisioning is
//! either a tab-separated word list or a bincode snapshot of the raw rows
//! (the snapshot round-trips through `DictRow`, and the trie is rebuilt on
//! load).

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One dictionary word, immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Displayed characters.
    pub word: String,
    /// Toned syllables, e.g. `["ㄋㄧ3", "ㄏㄠ3"]`.
    pub syllables: Vec<String>,
    /// One initial glyph per syllable; the trie key.
    pub initials: String,
    /// Frequency weight, higher is more common.
    pub weight: f32,
    /// Phrase continuation rather than a base word.
    pub is_ngram: bool,
}

/// Raw provisioning row as it appears in word lists and snapshots:
/// comma-delimited parallel lists, the way dictionary build pipelines
/// emit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictRow {
    pub word: String,
    pub syllables: String,
    pub tones: String,
    pub initials: String,
    pub count: usize,
    pub weight: f32,
    pub is_ngram: bool,
}

#[derive(Debug, Default)]
struct Node {
    children: AHashMap<char, Box<Node>>,
    entries: Vec<Arc<DictEntry>>,
}

/// The trie dictionary index.
#[derive(Debug, Default)]
pub struct Dictionary {
    root: Node,
    rows: Vec<DictRow>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bulk-insert one entry from its provisioning fields.
    ///
    /// `syllables`, `tones` and `initials` are comma-delimited parallel
    /// lists. A missing or mismatched initials list is tolerated by deriving
    /// initials from the first glyph of each syllable; a syllable count that
    /// disagrees with the actual list length is a structural error and is
    /// rejected here rather than surfacing at query time.
    pub fn insert(
        &mut self,
        word: &str,
        syllables: &str,
        tones: &str,
        initials: &str,
        count: usize,
        weight: f32,
        is_ngram: bool,
    ) -> Result<()> {
        let syllable_list: Vec<&str> = syllables.split(',').collect();
        if syllable_list.len() != count {
            bail!(
                "entry '{}': syllable count {} disagrees with list length {}",
                word,
                count,
                syllable_list.len()
            );
        }

        let tone_list: Vec<&str> = tones.split(',').collect();
        let toned: Vec<String> = syllable_list
            .iter()
            .enumerate()
            .map(|(i, syl)| {
                let tone = tone_list.get(i).copied().unwrap_or("");
                format!("{}{}", syl.trim(), tone.trim())
            })
            .collect();

        let initial_list: Vec<&str> = initials.split(',').filter(|s| !s.is_empty()).collect();
        let path: String = if initial_list.len() == count {
            initial_list
                .iter()
                .filter_map(|s| s.trim().chars().next())
                .collect()
        } else {
            // Derive from the syllables themselves.
            syllable_list
                .iter()
                .filter_map(|s| s.trim().chars().next())
                .collect()
        };

        let entry = Arc::new(DictEntry {
            word: word.to_string(),
            syllables: toned,
            initials: path.clone(),
            weight,
            is_ngram,
        });

        let mut node = &mut self.root;
        for glyph in path.chars() {
            node = node.children.entry(glyph).or_default();
        }
        node.entries.push(entry);

        self.rows.push(DictRow {
            word: word.to_string(),
            syllables: syllables.to_string(),
            tones: tones.to_string(),
            initials: initials.to_string(),
            count,
            weight,
            is_ngram,
        });
        Ok(())
    }

    fn entries_at(&self, path: &str) -> Option<&[Arc<DictEntry>]> {
        let mut node = &self.root;
        for glyph in path.chars() {
            node = node.children.get(&glyph)?;
        }
        Some(&node.entries)
    }

    /// Query entries along the candidate initial paths (the exact path
    /// first). Rows are flagged fuzzy when reached through a non-exact
    /// path, ordered by descending weight across all paths, and truncated
    /// to `limit` before phonetic matching happens upstream.
    pub fn lookup(
        &self,
        paths: &[String],
        is_ngram: bool,
        limit: usize,
    ) -> Vec<(Arc<DictEntry>, bool)> {
        let mut rows = Vec::new();
        for (i, path) in paths.iter().enumerate() {
            let fuzzy = i != 0;
            if let Some(entries) = self.entries_at(path) {
                for entry in entries {
                    if entry.is_ngram == is_ngram {
                        rows.push((Arc::clone(entry), fuzzy));
                    }
                }
            }
        }
        rows.sort_by(|a, b| {
            b.0.weight
                .partial_cmp(&a.0.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(limit);
        rows
    }

    /// Decoder query: entries at the candidate paths regardless of the
    /// n-gram flag, capped but not reordered.
    pub fn lookup_any(&self, paths: &[String], cap: usize) -> Vec<(Arc<DictEntry>, bool)> {
        let mut rows = Vec::new();
        for (i, path) in paths.iter().enumerate() {
            let fuzzy = i != 0;
            if let Some(entries) = self.entries_at(path) {
                for entry in entries {
                    if rows.len() >= cap {
                        return rows;
                    }
                    rows.push((Arc::clone(entry), fuzzy));
                }
            }
        }
        rows
    }

    /// Load a tab-separated word list:
    /// `word \t syllables \t tones \t initials \t count \t weight \t is_ngram`.
    /// Lines starting with `#` and blank lines are skipped.
    pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open word list {}", path.display()))?;
        let mut dict = Self::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("read {}:{}", path.display(), lineno + 1))?;
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 7 {
                bail!(
                    "{}:{}: expected 7 fields, found {}",
                    path.display(),
                    lineno + 1,
                    fields.len()
                );
            }
            let count: usize = fields[4]
                .parse()
                .with_context(|| format!("{}:{}: bad count", path.display(), lineno + 1))?;
            let weight: f32 = fields[5]
                .parse()
                .with_context(|| format!("{}:{}: bad weight", path.display(), lineno + 1))?;
            let is_ngram = fields[6].trim() != "0";
            dict.insert(fields[0], fields[1], fields[2], fields[3], count, weight, is_ngram)
                .with_context(|| format!("{}:{}", path.display(), lineno + 1))?;
        }
        debug!(entries = dict.len(), path = %path.display(), "loaded word list");
        Ok(dict)
    }

    /// Save the raw rows as a bincode snapshot.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("create snapshot {}", path.as_ref().display()))?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, &self.rows).context("serialize snapshot")?;
        Ok(())
    }

    /// Load a bincode snapshot produced by `save_bincode`, rebuilding the
    /// trie from the raw rows.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("open snapshot {}", path.as_ref().display()))?;
        let rows: Vec<DictRow> =
            bincode::deserialize_from(BufReader::new(file)).context("deserialize snapshot")?;
        let mut dict = Self::new();
        for row in rows {
            dict.insert(
                &row.word,
                &row.syllables,
                &row.tones,
                &row.initials,
                row.count,
                row.weight,
                row.is_ngram,
            )?;
        }
        debug!(entries = dict.len(), "loaded snapshot");
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_dict() -> Dictionary {
        let mut d = Dictionary::new();
        d.insert("你好", "ㄋㄧ,ㄏㄠ", "3,3", "ㄋ,ㄏ", 2, 100.0, false)
            .unwrap();
        d.insert("你", "ㄋㄧ", "3", "ㄋ", 1, 60.0, false).unwrap();
        d.insert("好", "ㄏㄠ", "3", "ㄏ", 1, 55.0, false).unwrap();
        d.insert("你好嗎", "ㄋㄧ,ㄏㄠ,ㄇㄚ", "3,3,0", "ㄋ,ㄏ,ㄇ", 3, 20.0, true)
            .unwrap();
        d
    }

    #[test]
    fn insert_builds_toned_syllables_and_path() {
        let d = demo_dict();
        let rows = d.lookup(&["ㄋㄏ".to_string()], false, 10);
        assert_eq!(rows.len(), 1);
        let entry = &rows[0].0;
        assert_eq!(entry.word, "你好");
        assert_eq!(entry.syllables, vec!["ㄋㄧ3", "ㄏㄠ3"]);
        assert_eq!(entry.initials, "ㄋㄏ");
        assert!(!rows[0].1);
    }

    #[test]
    fn count_mismatch_is_a_load_error() {
        let mut d = Dictionary::new();
        let err = d.insert("壞", "ㄏㄨㄞ", "4", "ㄏ", 2, 10.0, false);
        assert!(err.is_err());
    }

    #[test]
    fn missing_initials_are_derived() {
        let mut d = Dictionary::new();
        d.insert("中國", "ㄓㄨㄥ,ㄍㄨㄛ", "1,2", "", 2, 80.0, false)
            .unwrap();
        let rows = d.lookup(&["ㄓㄍ".to_string()], false, 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.initials, "ㄓㄍ");
    }

    #[test]
    fn lookup_orders_by_weight_and_respects_limit() {
        let mut d = Dictionary::new();
        d.insert("甲", "ㄐㄧㄚ", "3", "ㄐ", 1, 10.0, false).unwrap();
        d.insert("家", "ㄐㄧㄚ", "1", "ㄐ", 1, 90.0, false).unwrap();
        d.insert("加", "ㄐㄧㄚ", "1", "ㄐ", 1, 50.0, false).unwrap();

        let rows = d.lookup(&["ㄐ".to_string()], false, 2);
        let words: Vec<&str> = rows.iter().map(|(e, _)| e.word.as_str()).collect();
        assert_eq!(words, vec!["家", "加"]);
    }

    #[test]
    fn lookup_filters_ngram_flag() {
        let d = demo_dict();
        assert!(d.lookup(&["ㄋㄏㄇ".to_string()], false, 10).is_empty());
        let rows = d.lookup(&["ㄋㄏㄇ".to_string()], true, 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.word, "你好嗎");
    }

    #[test]
    fn fuzzy_flag_set_for_non_exact_paths() {
        let d = demo_dict();
        let rows = d.lookup(&["ㄆㄏ".to_string(), "ㄋㄏ".to_string()], false, 10);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].1, "entry reached via the second path is fuzzy");
    }

    #[test]
    fn missing_path_yields_no_rows() {
        let d = demo_dict();
        assert!(d.lookup(&["ㄒㄩ".to_string()], false, 10).is_empty());
    }

    #[test]
    fn bincode_snapshot_roundtrip() {
        let d = demo_dict();
        let tmp = std::env::temp_dir().join(format!(
            "libbopomofo_dict_snapshot_{}.bin",
            std::process::id()
        ));
        d.save_bincode(&tmp).unwrap();
        let loaded = Dictionary::load_bincode(&tmp).unwrap();
        assert_eq!(loaded.len(), d.len());
        let rows = loaded.lookup(&["ㄋㄏ".to_string()], false, 10);
        assert_eq!(rows[0].0.word, "你好");
        let _ = std::fs::remove_file(tmp);
    }

    #[test]
    fn tsv_roundtrip() {
        let tmp = std::env::temp_dir().join(format!(
            "libbopomofo_dict_words_{}.tsv",
            std::process::id()
        ));
        std::fs::write(
            &tmp,
            "# demo word list\n你好\tㄋㄧ,ㄏㄠ\t3,3\tㄋ,ㄏ\t2\t100\t0\n你\tㄋㄧ\t3\tㄋ\t1\t60\t0\n",
        )
        .unwrap();
        let d = Dictionary::load_tsv(&tmp).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.lookup(&["ㄋㄏ".to_string()], false, 10).len(), 1);
        let _ = std::fs::remove_file(tmp);
    }
}
