use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::parser::words::WordCount;

const WORD_WIDTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    pub word: String,
    pub count: usize,
}

/// The `n` most frequent words, by count descending then word ascending.
pub fn top_words(counts: &WordCount, n: usize) -> Vec<WordRow> {
    let mut rows: Vec<WordRow> = counts
        .iter()
        .map(|(word, &count)| WordRow {
            word: word.clone(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    rows.truncate(n);
    rows
}

pub fn render_table(rows: &[WordRow]) -> String {
    let mut out = String::from("Word\t\t# of Occurrences\n\n");
    for r in rows {
        let _ = writeln!(out, "{:<width$}\t{}", r.word, r.count, width = WORD_WIDTH);
    }
    out
}

pub fn render_json(rows: &[WordRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn print_table(rows: &[WordRow]) {
    print!("{}", render_table(rows));
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> WordCount {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    fn words(rows: &[WordRow]) -> Vec<&str> {
        rows.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn sorted_by_count_then_word() {
        let rows = top_words(&counts(&[("zeta", 2), ("alpha", 2), ("mid", 5), ("low", 1)]), 10);
        assert_eq!(words(&rows), vec!["mid", "alpha", "zeta", "low"]);
        assert_eq!(rows[0].count, 5);
    }

    #[test]
    fn truncates_to_n() {
        let c = counts(&[("a", 4), ("b", 3), ("c", 2), ("d", 1)]);
        let rows = top_words(&c, 2);
        assert_eq!(words(&rows), vec!["a", "b"]);
        assert!(top_words(&c, 0).is_empty());
        assert_eq!(top_words(&c, 99).len(), 4);
    }

    #[test]
    fn table_layout() {
        let rows = top_words(&counts(&[("founded", 2)]), 1);
        assert_eq!(
            render_table(&rows),
            "Word\t\t# of Occurrences\n\nfounded        \t2\n"
        );
    }

    #[test]
    fn long_words_are_not_cut() {
        let rows = vec![WordRow {
            word: "internationalization".into(),
            count: 7,
        }];
        assert_eq!(
            render_table(&rows),
            "Word\t\t# of Occurrences\n\ninternationalization\t7\n"
        );
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(render_table(&[]), "Word\t\t# of Occurrences\n\n");
    }

    #[test]
    fn json_rows() {
        let rows = top_words(&counts(&[("cat", 3), ("sat", 1)]), 10);
        let value: serde_json::Value = serde_json::from_str(&render_json(&rows).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "word": "cat", "count": 3 }, { "word": "sat", "count": 1 }])
        );
    }
}
