pub mod sections;
pub mod words;

use std::collections::HashSet;

use sections::{Marker, Section};
use words::WordCount;

/// Two-pass pipeline: markup → section between the markers → word counts.
pub fn process_page(
    html: &str,
    start: &Marker,
    end: &Marker,
    exclude: &HashSet<String>,
) -> (Section, WordCount) {
    let section = sections::extract_from_html(html, start, end);
    let counts = words::count_words(&section.blocks, exclude);
    (section, counts)
}

// ── Tests ──
