use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Heading predicate: element with tag `tag` whose rendered text contains `text`.
#[derive(Debug, Clone)]
pub struct Marker {
    pub text: String,
    selector: Selector,
}

impl Marker {
    pub fn new(tag: &str, text: &str) -> Result<Self> {
        let selector = Selector::parse(tag)
            .map_err(|e| anyhow!("Invalid heading tag {:?}: {:?}", tag, e))?;
        Ok(Self {
            text: text.to_string(),
            selector,
        })
    }

    /// First matching element in document order.
    pub fn find<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .select(&self.selector)
            .find(|el| el.text().collect::<String>().contains(&self.text))
    }
}

/// Text blocks found between two headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub blocks: Vec<String>,
    /// True only when the sibling walk stopped on the end heading itself.
    pub end_reached: bool,
}

pub fn extract_from_html(html: &str, start: &Marker, end: &Marker) -> Section {
    let document = Html::parse_document(html);
    extract_section(&document, start, end)
}

/// Walk the siblings that follow the start heading until the end heading is hit.
///
/// Both headings must share a parent for the walk to stop on the end heading.
/// Otherwise it runs until the siblings are exhausted and returns whatever it
/// collected, with `end_reached` left false.
pub fn extract_section(document: &Html, start: &Marker, end: &Marker) -> Section {
    let Some(start_el) = start.find(document) else {
        debug!("Start heading {:?} not found", start.text);
        return Section::default();
    };
    let Some(end_el) = end.find(document) else {
        debug!("End heading {:?} not found", end.text);
        return Section::default();
    };

    let end_id = end_el.id();
    let mut section = Section::default();
    let mut current = start_el.next_sibling();

    while let Some(node) = current {
        if node.id() == end_id {
            section.end_reached = true;
            break;
        }

        let text: String = node
            .descendants()
            .filter_map(|n| n.value().as_text())
            .map(|t| &**t)
            .collect();
        if !text.trim().is_empty() {
            section.blocks.push(text);
        }

        current = node.next_sibling();
    }

    if !section.end_reached {
        warn!(
            "Heading {:?} is not a later sibling of {:?}; kept {} blocks up to the last sibling",
            end.text,
            start.text,
            section.blocks.len()
        );
    }

    section
}

// ── Tests ──
