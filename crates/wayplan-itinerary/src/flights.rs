//! Flight offers parsed from the `## Available Flights` block.
//!
//! The block is a loose list of `Option N` chunks, each carrying labeled
//! lines (`Price: $450`, `Airline: Delta`, ...). Fields are pulled out by a
//! table of label rules applied uniformly to every chunk, so adding a field
//! means adding a row to [`FIELD_RULES`].

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use serde::Serialize;

/// Booking page opened by the "Book" action; the token is appended.
pub const BOOKING_URL_BASE: &str = "https://www.google.com/flights/booking?token=";

/// Literal that ends an offer chunk.
const OPTION_WORD: &str = "Option";

static OPTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Option \d+").expect("valid option header regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferField {
    Price,
    Duration,
    Airline,
    FlightNumber,
    BookingToken,
}

impl OfferField {
    pub const ALL: [OfferField; 5] = [
        OfferField::Price,
        OfferField::Duration,
        OfferField::Airline,
        OfferField::FlightNumber,
        OfferField::BookingToken,
    ];

    /// Shown in place of a value whose label was missing from the chunk.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            OfferField::BookingToken => "",
            _ => "-",
        }
    }
}

impl std::fmt::Display for OfferField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferField::Price => write!(f, "Price"),
            OfferField::Duration => write!(f, "Duration"),
            OfferField::Airline => write!(f, "Airline"),
            OfferField::FlightNumber => write!(f, "Flight No."),
            OfferField::BookingToken => write!(f, "Booking"),
        }
    }
}

/// `(field, pattern)` rows; capture group 1 is the value. First match wins.
const FIELD_RULES: &[(OfferField, &str)] = &[
    (OfferField::Price, r"Price: \$(\d+)"),
    (OfferField::Duration, r"Duration: (\d+)"),
    (OfferField::Airline, r"Airline: ([^\r\n]+)"),
    (OfferField::FlightNumber, r"Flight Number: ([^\r\n]+)"),
    (OfferField::BookingToken, r"booking_token: ([^\r\n]+)"),
];

static COMPILED_RULES: LazyLock<Vec<(OfferField, Regex)>> = LazyLock::new(|| {
    FIELD_RULES
        .iter()
        .map(|&(field, pattern)| (field, Regex::new(pattern).expect("valid offer field regex")))
        .collect()
});

/// One flight alternative. Absent labels stay `None`; nothing is inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlightOffer {
    /// 1-based position in the flights block.
    pub index: usize,
    /// Digits following `Price: $`.
    pub price: Option<String>,
    /// Digits following `Duration:`, minutes by convention.
    pub duration_minutes: Option<String>,
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub booking_token: Option<String>,
}

impl FlightOffer {
    #[must_use]
    pub fn get(&self, field: OfferField) -> Option<&str> {
        match field {
            OfferField::Price => self.price.as_deref(),
            OfferField::Duration => self.duration_minutes.as_deref(),
            OfferField::Airline => self.airline.as_deref(),
            OfferField::FlightNumber => self.flight_number.as_deref(),
            OfferField::BookingToken => self.booking_token.as_deref(),
        }
    }

    /// The value of `field`, or its placeholder when absent.
    #[must_use]
    pub fn field(&self, field: OfferField) -> &str {
        self.get(field).unwrap_or(field.placeholder())
    }

    fn slot_mut(&mut self, field: OfferField) -> &mut Option<String> {
        match field {
            OfferField::Price => &mut self.price,
            OfferField::Duration => &mut self.duration_minutes,
            OfferField::Airline => &mut self.airline,
            OfferField::FlightNumber => &mut self.flight_number,
            OfferField::BookingToken => &mut self.booking_token,
        }
    }

    #[must_use]
    pub fn duration_minutes_value(&self) -> Option<u32> {
        self.duration_minutes.as_deref()?.parse().ok()
    }

    /// Booking link for this offer, or `None` without a token.
    #[must_use]
    pub fn booking_url(&self) -> Option<String> {
        let token = self.booking_token.as_deref()?;
        let encoded = utf8_percent_encode(token, NON_ALPHANUMERIC);
        Some(format!("{BOOKING_URL_BASE}{encoded}"))
    }

    /// Applies every field rule to one chunk.
    fn from_chunk(index: usize, chunk: &str) -> Self {
        let mut offer = FlightOffer {
            index,
            ..FlightOffer::default()
        };
        for (field, re) in COMPILED_RULES.iter() {
            *offer.slot_mut(*field) = re
                .captures(chunk)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str().trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string);
        }
        offer
    }
}

/// Splits a flights block into offer chunks.
///
/// Each chunk starts at an `Option <digits>` header and runs up to the next
/// literal `Option` after that header, or to the end of the text. Text before
/// the first header is ignored.
#[must_use]
pub fn offer_chunks(flights: &str) -> Vec<&str> {
    OPTION_HEADER
        .find_iter(flights)
        .map(|header| {
            let rest = &flights[header.end()..];
            let end = rest
                .find(OPTION_WORD)
                .map_or(flights.len(), |pos| header.end() + pos);
            &flights[header.start()..end]
        })
        .collect()
}

/// Parses every offer in a flights block, in input order.
///
/// Offers are indexed by position, never sorted.
#[must_use]
pub fn parse_flight_offers(flights: &str) -> Vec<FlightOffer> {
    offer_chunks(flights)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| FlightOffer::from_chunk(i + 1, chunk))
        .collect()
}
