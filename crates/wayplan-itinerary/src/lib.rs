//! Structured views over free-form, AI-generated travel itineraries.
//!
//! The generator is asked for a loose outline ("Daily Itinerary with
//! Timings", "Estimated Costs", ...) and optionally an `## Available Flights`
//! block, but nothing guarantees it complies. Everything here is a
//! best-effort heuristic: a miss yields an empty section or a `None` field,
//! never an error, and [`ItineraryView::fallback_text`] hands back the whole
//! text when no section was recognised.

pub mod activity;
pub mod error;
pub mod flights;
pub mod highlight;
pub mod render;
pub mod segment;
pub mod view;

pub use activity::ActivityKind;
pub use error::SegmentError;
pub use flights::{parse_flight_offers, FlightOffer, OfferField};
pub use highlight::{auto_link, highlight_info};
pub use segment::{extract_section, split_flights_section, SectionPattern, Segmenter};
pub use view::{ExtractedSection, Headline, ItineraryView};
