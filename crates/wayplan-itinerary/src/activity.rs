//! Keyword classification of itinerary activities.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Meal,
    Travel,
    Hotel,
    Shopping,
    Sightseeing,
    Relax,
    Generic,
}

/// Keyword sets checked in order; the first set with a substring match wins.
///
/// Keywords are lowercase and matched anywhere in the lowercased description.
const KEYWORDS: &[(ActivityKind, &[&str])] = &[
    (
        ActivityKind::Meal,
        &[
            "breakfast",
            "lunch",
            "dinner",
            "snack",
            "restaurant",
            "cuisine",
            "food",
        ],
    ),
    (
        ActivityKind::Travel,
        &[
            "depart",
            "arrive",
            "bus",
            "train",
            "flight",
            "airport",
            "transport",
            "rickshaw",
            "taxi",
            "travel",
        ],
    ),
    (
        ActivityKind::Hotel,
        &["hotel", "check in", "check out", "accommodation"],
    ),
    (ActivityKind::Shopping, &["market", "shopping", "bazaar"]),
    (
        ActivityKind::Sightseeing,
        &[
            "sightseeing",
            "explore",
            "visit",
            "tour",
            "museum",
            "temple",
            "river",
            "vineyard",
            "winery",
        ],
    ),
    (
        ActivityKind::Relax,
        &["relax", "freshen up", "stroll", "rest"],
    ),
];

impl ActivityKind {
    /// Classifies a short activity description. Total: anything unmatched
    /// is [`ActivityKind::Generic`].
    #[must_use]
    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map_or(ActivityKind::Generic, |(kind, _)| *kind)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Meal => "Meal",
            ActivityKind::Travel => "Travel",
            ActivityKind::Hotel => "Hotel",
            ActivityKind::Shopping => "Shopping",
            ActivityKind::Sightseeing => "Sightseeing",
            ActivityKind::Relax => "Relax",
            ActivityKind::Generic => "Activity",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Meal => "🍽️",
            ActivityKind::Travel => "🚌",
            ActivityKind::Hotel => "🏨",
            ActivityKind::Shopping => "🛍️",
            ActivityKind::Sightseeing => "📸",
            ActivityKind::Relax => "🛌",
            ActivityKind::Generic => "🗺️",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
