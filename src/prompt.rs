use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

pub const DEFAULT_TOP_N: usize = 10;

/// Print `message` without a newline and read one line from stdin (EOF reads as blank).
pub fn prompt_line(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}

/// Blank → default; anything else must be an integer. Negative counts select nothing.
pub fn parse_top_n(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_TOP_N);
    }
    let n: i64 = trimmed
        .parse()
        .with_context(|| format!("Not a number of words: {:?}", trimmed))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

/// Comma-separated stoplist, trimmed and lowercased. Blank input gives `{""}`.
pub fn parse_exclusions(input: &str) -> HashSet<String> {
    input
        .split(',')
        .map(|w| w.trim().to_lowercase())
        .collect()
}

// ── Tests ──
