/// Prefix trie for syllable validation and longest-match segmentation.
use ahash::AHashMap;

/// A simple Trie (prefix tree) for storing valid syllables.
///
/// Used by the bopomofo tokenizer for longest-match segmentation and by the
/// proximity corrector for syllable validation. The trie is built once at
/// startup from the static syllable table and is read-only afterwards.
///
/// # Example
/// ```
/// use libsuggest_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("ㄋㄧ");
/// trie.insert("ㄏㄠ");
///
/// assert!(trie.contains_word("ㄋㄧ"));
/// assert!(!trie.contains_word("ㄋ"));
///
/// let input: Vec<char> = "ㄋㄧㄏㄠ".chars().collect();
/// assert_eq!(trie.longest_prefix(&input, 0), Some((2, "ㄋㄧ".to_string())));
/// ```
#[derive(Debug, Default)]
pub struct TrieNode {
    children: AHashMap<char, Box<TrieNode>>,
    is_end: bool,
    /// When `is_end` is true, `word` contains the syllable string.
    word: Option<String>,
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: AHashMap::new(),
            is_end: false,
            word: None,
        }
    }

    /// Insert a syllable into the trie.
    pub fn insert(&mut self, syllable: &str) {
        let mut node = self;
        for ch in syllable.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.is_end = true;
        node.word = Some(syllable.to_string());
    }

    /// Check whether the trie contains exactly the given word.
    ///
    /// Returns `true` only if `word` exists as a complete syllable, not just
    /// as a prefix of one.
    pub fn contains_word(&self, word: &str) -> bool {
        let mut node = self;
        for ch in word.chars() {
            if let Some(child) = node.children.get(&ch) {
                node = child;
            } else {
                return false;
            }
        }
        node.is_end
    }

    /// Walk the trie starting at a position in `input` and return all
    /// matched prefixes as `(end_index, matched_string)`, shortest first.
    pub fn walk_prefixes(&self, input: &[char], start: usize) -> Vec<(usize, String)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            let ch = input[idx];
            if let Some(child) = node.children.get(&ch) {
                node = child;
                idx += 1;
                if node.is_end {
                    if let Some(w) = &node.word {
                        res.push((idx, w.clone()));
                    }
                }
            } else {
                break;
            }
        }
        res
    }

    /// Longest valid syllable starting at `start`, or `None` when not even a
    /// single-glyph syllable matches there.
    ///
    /// This is the greedy step of the tokenizer: always consume the longest
    /// table entry before moving on.
    pub fn longest_prefix(&self, input: &[char], start: usize) -> Option<(usize, String)> {
        self.walk_prefixes(input, start).into_iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_insert_and_contains() {
        let mut trie = TrieNode::new();
        trie.insert("ㄋㄧ");
        trie.insert("ㄏㄠ");
        trie.insert("ㄋㄧㄠ");

        assert!(trie.contains_word("ㄋㄧ"));
        assert!(trie.contains_word("ㄏㄠ"));
        assert!(trie.contains_word("ㄋㄧㄠ"));
        assert!(!trie.contains_word("ㄋ"));
        assert!(!trie.contains_word("ㄏ"));
        assert!(!trie.contains_word("ㄋㄧㄏ"));
    }

    #[test]
    fn walk_prefixes_returns_all_matches() {
        let mut trie = TrieNode::new();
        trie.insert("ㄋ");
        trie.insert("ㄋㄧ");
        trie.insert("ㄋㄧㄠ");

        let input: Vec<char> = "ㄋㄧㄠㄏ".chars().collect();
        let prefixes = trie.walk_prefixes(&input, 0);
        assert_eq!(prefixes.len(), 3);
        assert_eq!(prefixes[0], (1, "ㄋ".to_string()));
        assert_eq!(prefixes[1], (2, "ㄋㄧ".to_string()));
        assert_eq!(prefixes[2], (3, "ㄋㄧㄠ".to_string()));
    }

    #[test]
    fn longest_prefix_is_greedy() {
        let mut trie = TrieNode::new();
        trie.insert("ㄋ");
        trie.insert("ㄋㄧ");
        trie.insert("ㄋㄧㄠ");

        let input: Vec<char> = "ㄋㄧㄠ".chars().collect();
        assert_eq!(trie.longest_prefix(&input, 0), Some((3, "ㄋㄧㄠ".to_string())));
    }

    #[test]
    fn longest_prefix_no_match() {
        let mut trie = TrieNode::new();
        trie.insert("ㄋㄧ");

        let input: Vec<char> = "ㄒㄧ".chars().collect();
        assert_eq!(trie.longest_prefix(&input, 0), None);
    }

    #[test]
    fn walk_from_middle_position() {
        let mut trie = TrieNode::new();
        trie.insert("ㄋㄧ");
        trie.insert("ㄏㄠ");

        let input: Vec<char> = "ㄋㄧㄏㄠ".chars().collect();
        let prefixes = trie.walk_prefixes(&input, 2);
        assert_eq!(prefixes.len(), 1);
        assert_eq!(prefixes[0], (4, "ㄏㄠ".to_string()));
    }
}
