//! Itinerary command handlers: `segment`, `section`, `flights`, `classify`.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use wayplan_core::{load_sections, OutputFormat};
use wayplan_itinerary::render::{offers_table, render_html, render_text};
use wayplan_itinerary::{
    extract_section, parse_flight_offers, split_flights_section, ActivityKind, Segmenter,
};

/// Reads the itinerary from `input`, or stdin when `input` is `None` or `-`.
pub(crate) fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read itinerary from {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read itinerary from stdin")?;
            Ok(buf)
        }
    }
}

/// Builds the segmenter from a section catalog, or the built-in sections.
pub(crate) fn build_segmenter(sections_path: Option<&Path>) -> anyhow::Result<Segmenter> {
    let Some(path) = sections_path else {
        return Ok(Segmenter::default());
    };
    let catalog = load_sections(path)?;
    tracing::debug!(
        path = %path.display(),
        sections = catalog.sections.len(),
        "loaded section catalog"
    );
    Ok(Segmenter::new(catalog.sections)?)
}

pub(crate) fn run_segment(
    input: Option<&Path>,
    format: OutputFormat,
    sections_path: Option<&Path>,
) -> anyhow::Result<()> {
    let segmenter = build_segmenter(sections_path)?;
    let raw = read_input(input)?;
    let view = segmenter.segment(&raw);

    let rendered = match format {
        OutputFormat::Text => render_text(&view),
        OutputFormat::Html => render_html(&view),
        OutputFormat::Json => serde_json::to_string_pretty(&view)?,
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_section(title: &str, input: Option<&Path>) -> anyhow::Result<()> {
    if title.trim().is_empty() {
        anyhow::bail!("section title must be non-empty");
    }
    let raw = read_input(input)?;
    let (main, _) = split_flights_section(&raw);
    let body = extract_section(main, title);
    if body.is_empty() {
        tracing::warn!(title, "section not found");
    } else {
        println!("{body}");
    }
    Ok(())
}

pub(crate) fn run_flights(input: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let raw = read_input(input)?;
    let Some(flights) = split_flights_section(&raw).1 else {
        tracing::warn!("itinerary has no flights block");
        return Ok(());
    };
    let offers = parse_flight_offers(flights);

    if json {
        println!("{}", serde_json::to_string_pretty(&offers)?);
    } else if offers.is_empty() {
        println!("no flight offers found");
    } else {
        println!("{}", offers_table(&offers));
    }
    Ok(())
}

/// One line per description: icon, label, then the description itself.
pub(crate) fn classify_lines(descriptions: &[String]) -> Vec<String> {
    descriptions
        .iter()
        .map(|d| {
            let kind = ActivityKind::classify(d);
            format!("{} {:<11} {d}", kind.icon(), kind.label())
        })
        .collect()
}

pub(crate) fn run_classify(descriptions: &[String]) {
    for line in classify_lines(descriptions) {
        println!("{line}");
    }
}
