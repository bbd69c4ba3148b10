use serde::Serialize;

use crate::flights::FlightOffer;

/// A configured section and the body captured for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedSection {
    pub title: String,
    pub label: String,
    /// Trimmed body text; empty when the heading was not found.
    pub body: String,
}

impl ExtractedSection {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Title and subtitle taken from the first two lines of the main text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Headline<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
}

/// Structured view over one raw itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryView {
    /// Everything before the flights marker, untrimmed.
    pub main_text: String,
    /// Everything after the flights marker, when present.
    pub flights_text: Option<String>,
    /// One entry per configured section, in configuration order.
    pub sections: Vec<ExtractedSection>,
    pub offers: Vec<FlightOffer>,
}

impl ItineraryView {
    /// Body of the section titled `title` (case- and spacing-insensitive),
    /// or `None` when it is not configured or was not found.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&str> {
        let wanted = normalize(title);
        self.sections
            .iter()
            .find(|s| normalize(&s.title) == wanted)
            .filter(|s| s.is_found())
            .map(|s| s.body.as_str())
    }

    pub fn found_sections(&self) -> impl Iterator<Item = &ExtractedSection> {
        self.sections.iter().filter(|s| s.is_found())
    }

    #[must_use]
    pub fn has_sections(&self) -> bool {
        self.sections.iter().any(ExtractedSection::is_found)
    }

    /// The whole main text when no section was recognised.
    ///
    /// Consumers render this verbatim instead of an empty page.
    #[must_use]
    pub fn fallback_text(&self) -> Option<&str> {
        if self.has_sections() {
            None
        } else {
            Some(&self.main_text)
        }
    }

    #[must_use]
    pub fn headline(&self) -> Headline<'_> {
        let mut lines = self.main_text.lines().map(str::trim);
        let title = lines.next().filter(|l| !l.is_empty());
        let subtitle = lines.next().filter(|l| !l.is_empty());
        Headline { title, subtitle }
    }
}

fn normalize(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
