//! Plain-text and HTML renderings of an [`ItineraryView`].
//!
//! Both renderings show the same blocks: the headline when sections were
//! found, the sections (or the fallback text), and a flights block whenever
//! the itinerary had one. The text rendering keeps bodies as written; the
//! HTML rendering formats them as markdown.

use pulldown_cmark::{html, Event, Parser, Tag};

use crate::flights::{FlightOffer, OfferField};
use crate::highlight::{decorate_html, escape_html, link_open};
use crate::view::{Headline, ItineraryView};

const FLIGHTS_HEADING: &str = "Available Flights";
const BOOK_LABEL: &str = "Book Now";
const NO_OFFERS: &str = "No flight offers found.";

fn price_cell(offer: &FlightOffer) -> String {
    offer
        .price
        .as_deref()
        .map_or_else(|| OfferField::Price.placeholder().to_string(), |p| format!("${p}"))
}

fn duration_cell(offer: &FlightOffer) -> String {
    offer.duration_minutes.as_deref().map_or_else(
        || OfferField::Duration.placeholder().to_string(),
        |d| format!("{d} mins"),
    )
}

fn offer_row(offer: &FlightOffer) -> [String; 6] {
    [
        offer.index.to_string(),
        price_cell(offer),
        duration_cell(offer),
        offer.field(OfferField::Airline).to_string(),
        offer.field(OfferField::FlightNumber).to_string(),
        offer.booking_url().unwrap_or_else(|| "-".to_string()),
    ]
}

fn offer_header() -> [String; 6] {
    [
        "#".to_string(),
        OfferField::Price.to_string(),
        OfferField::Duration.to_string(),
        OfferField::Airline.to_string(),
        OfferField::FlightNumber.to_string(),
        OfferField::BookingToken.to_string(),
    ]
}

/// Left-aligned fixed-width table; the last column is not padded.
#[must_use]
pub fn offers_table(offers: &[FlightOffer]) -> String {
    let rows: Vec<[String; 6]> = std::iter::once(offer_header())
        .chain(offers.iter().map(offer_row))
        .collect();

    let mut widths = [0usize; 6];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    if i + 1 == row.len() {
                        cell.clone()
                    } else {
                        format!("{cell:<width$}")
                    }
                })
                .collect();
            cells.join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The headline is left out in fallback mode, where the full text already
/// starts with it.
fn shown_headline(view: &ItineraryView) -> Option<Headline<'_>> {
    let headline = view.headline();
    let present = headline.title.is_some() || headline.subtitle.is_some();
    (present && view.has_sections()).then_some(headline)
}

/// Terminal-friendly rendering: headline, found sections (or the fallback
/// text), then the flights table when the itinerary has a flights block.
#[must_use]
pub fn render_text(view: &ItineraryView) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if let Some(headline) = shown_headline(view) {
        let head: Vec<&str> = [headline.title, headline.subtitle]
            .into_iter()
            .flatten()
            .collect();
        blocks.push(head.join("\n"));
    }

    match view.fallback_text() {
        Some(text) => blocks.push(text.trim().to_string()),
        None => {
            for section in view.found_sections() {
                blocks.push(format!("== {} ==\n{}", section.label, section.body));
            }
        }
    }

    if view.flights_text.is_some() {
        let table = if view.offers.is_empty() {
            NO_OFFERS.to_string()
        } else {
            offers_table(&view.offers)
        };
        blocks.push(format!("== {FLIGHTS_HEADING} ==\n{table}"));
    }

    blocks.join("\n\n")
}

fn flush_text(pending: &mut String, events: &mut Vec<Event<'_>>) {
    if !pending.is_empty() {
        let text = std::mem::take(pending);
        events.push(Event::Html(decorate_html(&text).into()));
    }
}

/// Formats a markdown body as HTML, then links and highlights its text.
///
/// Raw HTML in the body is shown as text. Markdown links open in a new tab;
/// link, image, and code text is not decorated.
#[must_use]
pub fn markdown_html(text: &str) -> String {
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut pending = String::new();
    // Nesting depth of links, images and code blocks.
    let mut verbatim = 0usize;

    for event in Parser::new(text) {
        match event {
            Event::Text(t) | Event::Html(t) if verbatim == 0 => pending.push_str(&t),
            Event::Html(t) => events.push(Event::Text(t)),
            other => {
                flush_text(&mut pending, &mut events);
                match other {
                    Event::Start(Tag::Link(_, dest, _)) => {
                        verbatim += 1;
                        events.push(Event::Html(link_open(&escape_html(&dest)).into()));
                    }
                    Event::End(Tag::Link(..)) => {
                        verbatim = verbatim.saturating_sub(1);
                        events.push(Event::Html("</a>".into()));
                    }
                    Event::Start(Tag::Image(..) | Tag::CodeBlock(_)) => {
                        verbatim += 1;
                        events.push(other);
                    }
                    Event::End(Tag::Image(..) | Tag::CodeBlock(_)) => {
                        verbatim = verbatim.saturating_sub(1);
                        events.push(other);
                    }
                    _ => events.push(other),
                }
            }
        }
    }
    flush_text(&mut pending, &mut events);

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out.trim_end().to_string()
}

fn html_offers(offers: &[FlightOffer]) -> String {
    if offers.is_empty() {
        return format!("<p>{NO_OFFERS}</p>");
    }

    let header: Vec<String> = offer_header()
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();

    let rows: Vec<String> = offers
        .iter()
        .map(|offer| {
            let booking = offer.booking_url().map_or_else(
                || "-".to_string(),
                |url| format!("{}{BOOK_LABEL}</a>", link_open(&escape_html(&url))),
            );
            let [index, price, duration, airline, flight_number, _] = offer_row(offer);
            let cells: Vec<String> = [index, price, duration, airline, flight_number]
                .iter()
                .map(|c| format!("<td>{}</td>", escape_html(c)))
                .chain(std::iter::once(format!("<td>{booking}</td>")))
                .collect();
            format!("<tr>{}</tr>", cells.join(""))
        })
        .collect();

    format!(
        "<table class=\"flight-offers\">\n<thead><tr>{}</tr></thead>\n<tbody>\n{}\n</tbody>\n</table>",
        header.join(""),
        rows.join("\n")
    )
}

/// HTML fragment with one `<section>` per found section (or a single
/// fallback section) and a flights table.
#[must_use]
pub fn render_html(view: &ItineraryView) -> String {
    let mut parts: Vec<String> = vec!["<article class=\"itinerary\">".to_string()];

    if let Some(headline) = shown_headline(view) {
        let mut header = vec!["<header>".to_string()];
        if let Some(title) = headline.title {
            header.push(format!("<h2>{}</h2>", escape_html(title)));
        }
        if let Some(subtitle) = headline.subtitle {
            header.push(format!("<p>{}</p>", escape_html(subtitle)));
        }
        header.push("</header>".to_string());
        parts.push(header.join("\n"));
    }

    match view.fallback_text() {
        Some(text) => parts.push(format!(
            "<section class=\"itinerary-fallback\">\n<div class=\"section-body\">{}</div>\n</section>",
            markdown_html(text.trim())
        )),
        None => {
            for section in view.found_sections() {
                parts.push(format!(
                    "<section>\n<h3>{}</h3>\n<div class=\"section-body\">{}</div>\n</section>",
                    escape_html(&section.label),
                    markdown_html(&section.body)
                ));
            }
        }
    }

    if view.flights_text.is_some() {
        parts.push(format!(
            "<section>\n<h3>{FLIGHTS_HEADING}</h3>\n{}\n</section>",
            html_offers(&view.offers)
        ));
    }

    parts.push("</article>".to_string());
    parts.join("\n")
}
