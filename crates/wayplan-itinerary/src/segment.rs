//! Splitting a raw itinerary into its flights block and labeled sections.
//!
//! Section detection is line-oriented. A section starts at a heading line
//! naming a known title and runs until the next *heading-shaped* line (see
//! [`is_heading_line`]), whether or not that line names a known title.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use wayplan_core::{default_sections, SectionSpec};

use crate::error::SegmentError;
use crate::flights::parse_flight_offers;
use crate::view::{ExtractedSection, ItineraryView};

/// Literal marker introducing the flights block.
pub const FLIGHTS_MARKER: &str = "## Available Flights";

/// A line that may start a new section: optional markdown `#` marks, an
/// optional ordinal (`"4. "`), an uppercase letter, and no colon other than
/// an optional trailing one.
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#{1,6}[ \t]*)?(?:\d+\.[ \t]*)?[A-Z][^:]*:?$").expect("valid heading regex")
});

/// Splits `raw` at the first [`FLIGHTS_MARKER`].
///
/// Without a marker the whole text is returned as the main part. With one,
/// the main part is everything before it and the flights part everything
/// after it, including any later markers.
#[must_use]
pub fn split_flights_section(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(FLIGHTS_MARKER) {
        Some((main, flights)) => (main, Some(flights)),
        None => (raw, None),
    }
}

/// Returns `true` when `line` looks like a section heading and therefore
/// ends the section currently being captured.
///
/// This is the single place the boundary rule lives. It under-captures on
/// capitalised body lines without an inner colon (`"Breakfast at the hotel"`)
/// and over-captures bodies whose next heading is decorated (`"**Costs**"`).
#[must_use]
pub fn is_heading_line(line: &str) -> bool {
    HEADING_LINE.is_match(line.trim())
}

/// Byte offset in `body` where the next heading-shaped line begins.
///
/// `body` starts on the heading's own line, so its first line is the inline
/// text after `Title:` and is never a boundary. Every following line is.
fn section_end(body: &str) -> usize {
    let mut offset = 0usize;
    for line in body.split_inclusive('\n') {
        if offset > 0 && is_heading_line(line) {
            return offset;
        }
        offset += line.len();
    }
    body.len()
}

/// Compiled heading matcher for one section title.
#[derive(Debug, Clone)]
pub struct SectionPattern {
    title: String,
    heading: Regex,
}

impl SectionPattern {
    /// Compiles the heading matcher for `title`.
    ///
    /// Matching is case-insensitive, and each whitespace run in the title
    /// matches any (possibly empty) whitespace run in the text. The heading
    /// may carry `#` marks, `**` emphasis, and an ordinal. After the title
    /// comes an optional qualifier that starts with punctuation (`.`, `-`,
    /// `(per person)`), then a colon or the end of the line. A word
    /// character right after the title means a different heading.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::EmptyTitle`] for a blank title and
    /// [`SegmentError::Pattern`] if the pattern cannot be compiled.
    pub fn new(title: &str) -> Result<Self, SegmentError> {
        let words: Vec<String> = title.split_whitespace().map(regex::escape).collect();
        if words.is_empty() {
            return Err(SegmentError::EmptyTitle);
        }

        let pattern = format!(
            r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*)?(?:\*\*)?(?:\d+\.[ \t]*)?(?:\*\*)?{}[ \t]*(?:\*\*)?[ \t]*(?:[^\w\s:][^:\r\n]*)?(?::|\r?$)[ \t:*]*",
            words.join(r"\s*")
        );
        let heading = Regex::new(&pattern).map_err(|source| SegmentError::Pattern {
            title: title.to_string(),
            source,
        })?;

        Ok(Self {
            title: title.to_string(),
            heading,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed body under the first matching heading, or an
    /// empty string when the heading does not occur.
    #[must_use]
    pub fn extract(&self, text: &str) -> String {
        let Some(found) = self.heading.find(text) else {
            return String::new();
        };
        let body = &text[found.end()..];
        body[..section_end(body)].trim().to_string()
    }
}

/// One-off form of [`SectionPattern::extract`].
///
/// A blank title yields an empty string.
#[must_use]
pub fn extract_section(text: &str, title: &str) -> String {
    SectionPattern::new(title)
        .map(|pattern| pattern.extract(text))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
struct SectionRule {
    spec: SectionSpec,
    pattern: SectionPattern,
}

/// Segments raw itineraries against an ordered list of section titles.
///
/// Patterns are compiled once; [`Segmenter::segment`] is then a pure
/// function of its input.
#[derive(Debug, Clone)]
pub struct Segmenter {
    rules: Vec<SectionRule>,
}

impl Segmenter {
    /// Builds a segmenter for `sections`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError`] if a title is blank, appears twice
    /// (ignoring case and spacing), or cannot be compiled.
    pub fn new(sections: Vec<SectionSpec>) -> Result<Self, SegmentError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(sections.len());

        for spec in sections {
            let pattern = SectionPattern::new(&spec.title)?;
            if !seen.insert(spec.normalized_title()) {
                return Err(SegmentError::DuplicateTitle(spec.title));
            }
            rules.push(SectionRule { spec, pattern });
        }

        Ok(Self { rules })
    }

    /// Section titles in matching order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.pattern.title())
    }

    /// Splits off the flights block, extracts every configured section from
    /// the remaining text, and parses the flight offers.
    #[must_use]
    pub fn segment(&self, raw: &str) -> ItineraryView {
        let (main_text, flights_text) = split_flights_section(raw);

        let sections: Vec<ExtractedSection> = self
            .rules
            .iter()
            .map(|rule| ExtractedSection {
                title: rule.spec.title.clone(),
                label: rule.spec.display_label().to_string(),
                body: rule.pattern.extract(main_text),
            })
            .collect();

        let offers = flights_text.map(parse_flight_offers).unwrap_or_default();

        let view = ItineraryView {
            main_text: main_text.to_string(),
            flights_text: flights_text.map(str::to_string),
            sections,
            offers,
        };

        tracing::debug!(
            sections_found = view.found_sections().count(),
            sections_configured = self.rules.len(),
            offers = view.offers.len(),
            has_flights = view.flights_text.is_some(),
            "segmented itinerary"
        );
        if !view.has_sections() {
            tracing::warn!(
                main_len = view.main_text.len(),
                "no known section headings found; falling back to full text"
            );
        }

        view
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(default_sections()).expect("built-in sections are valid")
    }
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod tests;
