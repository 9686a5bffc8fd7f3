use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());

pub type WordCount = HashMap<String, usize>;

/// Count lowercase ASCII-letter runs across all blocks, skipping `exclude`.
///
/// Anything that is not `[A-Za-z]` separates words, accented letters included.
/// `exclude` must already be trimmed and lowercased.
pub fn count_words<S: AsRef<str>>(blocks: &[S], exclude: &HashSet<String>) -> WordCount {
    let mut counts = WordCount::new();
    for block in blocks {
        for m in WORD_RE.find_iter(block.as_ref()) {
            let word = m.as_str().to_ascii_lowercase();
            if exclude.contains(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    counts
}

// ── Tests ──
