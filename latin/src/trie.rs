//! Latin word trie with per-node candidate caches and bounded fuzzy lookup.
//!
//! Each node caches up to a fixed number of whole words passing through it,
//! first-come, so a prefix query is answered in O(prefix length) with no
//! subtree walk. Fuzzy lookup runs a Wagner-Fischer row per trie edge during
//! a depth-first descent, pruning any subtree whose row minimum already
//! exceeds the distance limit; node caches double as the result set wherever
//! the final cell stays within bounds.

use ahash::AHashMap;

#[derive(Debug, Default)]
struct Node {
    children: AHashMap<char, Box<Node>>,
    /// Whole words passing through this node, first-come, capped.
    top_candidates: Vec<String>,
    /// Whether this node terminates a complete word.
    is_word: bool,
}

/// Trie over lowercase Latin words.
#[derive(Debug)]
pub struct LatinTrie {
    root: Node,
    node_cap: usize,
}

impl LatinTrie {
    /// Trie with the default per-node candidate cache of 10 words.
    pub fn new() -> Self {
        Self::with_node_cap(10)
    }

    /// Trie caching up to `node_cap` words per node.
    pub fn with_node_cap(node_cap: usize) -> Self {
        Self {
            root: Node::default(),
            node_cap: node_cap.max(1),
        }
    }

    /// Insert a word, lowercased. Every node along the path caches the word
    /// until its list is full; insertion order is the retained priority.
    pub fn insert(&mut self, word: &str) {
        let lower = word.trim().to_lowercase();
        if lower.is_empty() {
            return;
        }
        let cap = self.node_cap;
        let mut node = &mut self.root;
        for ch in lower.chars() {
            node = node.children.entry(ch).or_default();
            if !node.top_candidates.iter().any(|w| w == &lower) && node.top_candidates.len() < cap {
                node.top_candidates.push(lower.clone());
            }
        }
        node.is_word = true;
    }

    /// Whether the trie holds the exact word.
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        let mut node = &self.root;
        for ch in lower.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word
    }

    /// Cached top words under `prefix`, case-insensitive. O(prefix length).
    pub fn prefix_lookup(&self, prefix: &str) -> Vec<String> {
        let lower = prefix.to_lowercase();
        let mut node = &self.root;
        for ch in lower.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        node.top_candidates.clone()
    }

    /// Words within `max_distance` edits of `input`, sorted by (distance,
    /// word length, word). The effective distance is shortened for short
    /// inputs (0 up to two chars, 1 up to four) to bound the walk.
    pub fn fuzzy_lookup(&self, input: &str, max_distance: usize) -> Vec<(String, usize)> {
        let target: Vec<char> = input.to_lowercase().chars().collect();
        if target.is_empty() {
            return Vec::new();
        }
        let limit = match target.len() {
            0..=2 => 0,
            3..=4 => 1.min(max_distance),
            _ => max_distance,
        };

        let mut results: AHashMap<String, usize> = AHashMap::new();
        let first_row: Vec<usize> = (0..=target.len()).collect();
        for (&ch, node) in self.root.children.iter() {
            search_recursive(node, ch, &target, &first_row, limit, &mut results);
        }

        let mut out: Vec<(String, usize)> = results.into_iter().collect();
        out.sort_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| a.0.chars().count().cmp(&b.0.chars().count()))
                .then_with(|| a.0.cmp(&b.0))
        });
        out
    }
}

impl Default for LatinTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// One Wagner-Fischer row for the edge labeled `ch`, computed from the
/// parent row. Word length is small, so call-stack recursion is fine here.
fn search_recursive(
    node: &Node,
    ch: char,
    target: &[char],
    prev_row: &[usize],
    max_distance: usize,
    results: &mut AHashMap<String, usize>,
) {
    let size = target.len();
    let mut current_row = vec![0usize; size + 1];
    current_row[0] = prev_row[0] + 1;
    let mut min_in_row = current_row[0];

    for i in 1..=size {
        let insert_cost = current_row[i - 1] + 1;
        let delete_cost = prev_row[i] + 1;
        let replace_cost = if target[i - 1] == ch {
            prev_row[i - 1]
        } else {
            prev_row[i - 1] + 1
        };
        current_row[i] = insert_cost.min(delete_cost).min(replace_cost);
        min_in_row = min_in_row.min(current_row[i]);
    }

    // The whole subtree is already out of range.
    if min_in_row > max_distance {
        return;
    }

    if current_row[size] <= max_distance {
        for word in &node.top_candidates {
            let distance = current_row[size];
            results
                .entry(word.clone())
                .and_modify(|d| *d = (*d).min(distance))
                .or_insert(distance);
        }
    }

    for (&next_ch, next_node) in node.children.iter() {
        search_recursive(next_node, next_ch, target, &current_row, max_distance, results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> LatinTrie {
        let mut trie = LatinTrie::new();
        for w in words {
            trie.insert(w);
        }
        trie
    }

    #[test]
    fn prefix_lookup_returns_insertion_order() {
        let trie = trie_of(&["cat", "car", "cart"]);
        assert_eq!(trie.prefix_lookup("ca"), vec!["cat", "car", "cart"]);
    }

    #[test]
    fn prefix_lookup_each_word_once() {
        let mut trie = trie_of(&["cat", "car", "cart"]);
        trie.insert("cat");
        let hits = trie.prefix_lookup("ca");
        assert_eq!(hits.iter().filter(|w| *w == "cat").count(), 1);
    }

    #[test]
    fn prefix_lookup_is_case_insensitive() {
        let trie = trie_of(&["Hello"]);
        assert_eq!(trie.prefix_lookup("HE"), vec!["hello"]);
        assert!(trie.contains("hello"));
        assert!(trie.contains("HELLO"));
    }

    #[test]
    fn missing_prefix_yields_nothing() {
        let trie = trie_of(&["cat"]);
        assert!(trie.prefix_lookup("dog").is_empty());
    }

    #[test]
    fn node_cache_is_capped_first_come() {
        let mut trie = LatinTrie::with_node_cap(2);
        trie.insert("aa");
        trie.insert("ab");
        trie.insert("ac");
        let hits = trie.prefix_lookup("a");
        assert_eq!(hits, vec!["aa", "ab"]);
    }

    #[test]
    fn fuzzy_finds_single_substitution() {
        let trie = trie_of(&["hello", "help", "world"]);
        let hits = trie.fuzzy_lookup("hwllo", 1);
        assert!(hits.contains(&("hello".to_string(), 1)));
    }

    #[test]
    fn fuzzy_distance_zero_rejects_substitution() {
        let trie = trie_of(&["hello"]);
        let hits = trie.fuzzy_lookup("hwllo", 0);
        assert!(hits.iter().all(|(w, _)| w != "hello"));
    }

    #[test]
    fn short_input_forces_exactness() {
        // Two chars caps the distance at 0 regardless of the caller value.
        let trie = trie_of(&["at"]);
        assert!(trie.fuzzy_lookup("ax", 2).is_empty());
        // Four chars caps it at 1.
        let trie = trie_of(&["word"]);
        let hits = trie.fuzzy_lookup("wrd", 2);
        assert_eq!(hits.first().map(|(w, d)| (w.as_str(), *d)), Some(("word", 1)));
    }

    #[test]
    fn fuzzy_handles_transposition_as_two_edits() {
        let trie = trie_of(&["the"]);
        // "hte" needs two plain edits; distance 1 must not reach it.
        assert!(trie.fuzzy_lookup("hte", 1).is_empty());
    }

    #[test]
    fn fuzzy_sorts_by_distance_then_length() {
        let trie = trie_of(&["cart", "cat", "carts"]);
        let hits = trie.fuzzy_lookup("carte", 2);
        let words: Vec<&str> = hits.iter().map(|(w, _)| w.as_str()).collect();
        // "cart" (distance 1) before "carts" (distance 1, longer) before
        // "cat" (distance 2).
        assert_eq!(words, vec!["cart", "carts", "cat"]);
    }

    #[test]
    fn fuzzy_keeps_smallest_distance_per_word() {
        // "cat" is cached along more than one matching node path; only the
        // best distance may be reported.
        let trie = trie_of(&["cat"]);
        let hits = trie.fuzzy_lookup("cat", 2);
        assert_eq!(hits.first().map(|(w, d)| (w.as_str(), *d)), Some(("cat", 0)));
    }
}
