use super::*;

const SAMPLE: &str = "\
Nashik Wine Weekend
A three-day escape for two

1. Daily Itinerary with Timings
Day 1: Arrival
- 10:00 AM: Check in at Hotel Panchavati
- 1:00 PM: lunch at a local thali place
Day 2: Vineyards
- 11:00 AM: wine tasting at Sula Vineyards

2. Estimated Costs
- Hotel: ₹4,500 per night
- Meals: ₹1,200-1,800 per day

3. Recommended Accommodations
- Hotel Panchavati Yatri
- The Source at Sula

4. Travel Tips and Recommendations
- Carry light cotton clothing

5. Must-Visit Places
- Trimbakeshwar Temple
- Pandavleni Caves

6. Transportation Options and Recommendations
- Book trains on the IRCTC website
";

// -----------------------------------------------------------------------
// split_flights_section
// -----------------------------------------------------------------------

#[test]
fn split_without_marker_returns_whole_text() {
    let (main, flights) = split_flights_section("Day 1\nExplore");
    assert_eq!(main, "Day 1\nExplore");
    assert!(flights.is_none());
}

#[test]
fn split_with_marker_excludes_marker_from_main() {
    let raw = "Intro\n## Available Flights\nOption 1\nPrice: $450";
    let (main, flights) = split_flights_section(raw);
    assert_eq!(main, "Intro\n");
    assert_eq!(flights, Some("\nOption 1\nPrice: $450"));
    assert!(!main.contains("Available Flights"));
}

#[test]
fn split_keeps_second_marker_inside_flights() {
    let raw = "A\n## Available Flights\nX\n## Available Flights\nY";
    let (main, flights) = split_flights_section(raw);
    assert_eq!(main, "A\n");
    assert_eq!(flights, Some("\nX\n## Available Flights\nY"));
}

// -----------------------------------------------------------------------
// is_heading_line
// -----------------------------------------------------------------------

#[test]
fn heading_line_accepts_numbered_and_plain_titles() {
    assert!(is_heading_line("4. Recommended Accommodations"));
    assert!(is_heading_line("Recommended Accommodations"));
    assert!(is_heading_line("Recommended Accommodations:"));
    assert!(is_heading_line("## Packing List\n"));
}

#[test]
fn heading_line_rejects_inner_colon_and_bullets() {
    assert!(!is_heading_line("Day 1: Arrival"));
    assert!(!is_heading_line("- Hotel: ₹4,500"));
    assert!(!is_heading_line("**Day 1**"));
    assert!(!is_heading_line(""));
    assert!(!is_heading_line("lowercase line"));
}

// -----------------------------------------------------------------------
// extract_section
// -----------------------------------------------------------------------

#[test]
fn extracts_lines_between_numbered_heading_and_next_heading() {
    let text = "Intro\n3. Estimated Costs\n- Flights: $400\n- Hotels: $300\n4. Recommended Accommodations\n- Hotel Taj";
    assert_eq!(
        extract_section(text, "Estimated Costs"),
        "- Flights: $400\n- Hotels: $300"
    );
}

#[test]
fn stops_at_unknown_capitalised_heading() {
    let text = "Intro\nEstimated Costs\n- Food: $50\nPacking List\n- Sunscreen";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");
}

#[test]
fn missing_heading_returns_empty() {
    assert_eq!(extract_section(SAMPLE, "Nightlife"), "");
    assert_eq!(extract_section("", "Estimated Costs"), "");
}

#[test]
fn blank_title_returns_empty() {
    assert_eq!(extract_section(SAMPLE, "   "), "");
}

#[test]
fn title_match_is_case_and_whitespace_insensitive() {
    let text = "Intro\nestimated   COSTS:\n- Food: $50\n";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");

    let squashed = "Intro\nMust-VisitPlaces\n- Caves\n";
    assert_eq!(extract_section(squashed, "Must-Visit Places"), "- Caves");
}

#[test]
fn heading_may_carry_markdown_decoration() {
    let text = "## 2. **Estimated Costs:**\n- Food: $50\n### Recommended Accommodations\n- Inn";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");
    assert_eq!(extract_section(text, "Recommended Accommodations"), "- Inn");
}

#[test]
fn heading_on_first_line_is_found() {
    let text = "Estimated Costs\n- Food: $50";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");
}

#[test]
fn inline_body_after_colon_is_captured() {
    let text = "Estimated Costs: about $500 in total\nPacking List\n- Hat";
    assert_eq!(
        extract_section(text, "Estimated Costs"),
        "about $500 in total"
    );
}

#[test]
fn title_prefix_of_longer_heading_does_not_match() {
    let text = "Estimated Costs Breakdown\n- Food: $50";
    assert_eq!(extract_section(text, "Estimated Costs"), "");
}

#[test]
fn heading_may_end_with_punctuation() {
    let text = "Intro\n3. Estimated Costs.\n- Food: $50\n4. Recommended Accommodations\n- Inn";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");

    let dashed = "Intro\nEstimated Costs -\n- Food: $50\n";
    assert_eq!(extract_section(dashed, "Estimated Costs"), "- Food: $50");
}

#[test]
fn heading_may_carry_parenthesised_qualifier() {
    let text = "Intro\nEstimated Costs (per person):\n- Food: $50\nPacking List\n- Hat";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");

    let inline = "Estimated Costs (approx.): $500 in total\nPacking List";
    assert_eq!(extract_section(inline, "Estimated Costs"), "$500 in total");
}

#[test]
fn inline_text_after_heading_is_never_a_boundary() {
    let text = "Estimated Costs: Breakfast is included\n- Food: $50";
    assert_eq!(
        extract_section(text, "Estimated Costs"),
        "Breakfast is included\n- Food: $50"
    );
}

#[test]
fn empty_section_does_not_swallow_next_heading() {
    let text = "2. Estimated Costs\n3. Recommended Accommodations\n- Hotel Taj\n4. Travel Tips and Recommendations\n- Pack light";
    assert_eq!(extract_section(text, "Estimated Costs"), "");
    assert_eq!(
        extract_section(text, "Recommended Accommodations"),
        "- Hotel Taj"
    );
}

#[test]
fn capitalised_line_right_after_heading_ends_section() {
    let text = "Estimated Costs\n\nBreakfast is included\n- Food: $50";
    assert_eq!(extract_section(text, "Estimated Costs"), "");
}

#[test]
fn capitalised_body_line_ends_section_early() {
    let text = "Estimated Costs\n- Food: $50\nTaxis are extra\n- Taxi: $20";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let text = "Intro\r\nEstimated Costs\r\n- Food: $50\r\nPacking List\r\n- Hat";
    assert_eq!(extract_section(text, "Estimated Costs"), "- Food: $50");
}

#[test]
fn extraction_is_idempotent() {
    let first = extract_section(SAMPLE, "Estimated Costs");
    let second = extract_section(SAMPLE, "Estimated Costs");
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn daily_itinerary_keeps_day_lines() {
    let body = extract_section(SAMPLE, "Daily Itinerary with Timings");
    assert!(body.starts_with("Day 1: Arrival"));
    assert!(body.ends_with("wine tasting at Sula Vineyards"));
    assert!(!body.contains("Estimated Costs"));
}

// -----------------------------------------------------------------------
// Segmenter
// -----------------------------------------------------------------------

#[test]
fn default_segmenter_finds_all_sample_sections() {
    let view = Segmenter::default().segment(SAMPLE);
    assert_eq!(view.sections.len(), 6);
    assert!(view.sections.iter().all(|s| !s.body.is_empty()));
    assert!(view.fallback_text().is_none());
    assert_eq!(
        view.section("Must-Visit Places"),
        Some("- Trimbakeshwar Temple\n- Pandavleni Caves")
    );
    assert_eq!(
        view.section("transportation options and recommendations"),
        Some("- Book trains on the IRCTC website")
    );
}

#[test]
fn segmenter_reports_display_labels() {
    let view = Segmenter::default().segment(SAMPLE);
    let labels: Vec<&str> = view.sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels[0], "Daily Itinerary");
    assert_eq!(labels[5], "Transportation Options");
}

#[test]
fn segmenter_falls_back_when_nothing_matches() {
    let raw = "here is your trip\nenjoy paris\n- eiffel tower";
    let view = Segmenter::default().segment(raw);
    assert!(!view.has_sections());
    assert_eq!(view.fallback_text(), Some(raw));
}

#[test]
fn segmenter_parses_flights_block() {
    let raw = format!(
        "{SAMPLE}\n## Available Flights\nOption 1\nPrice: $450\nAirline: Delta\nOption 2\nPrice: $510\n"
    );
    let view = Segmenter::default().segment(&raw);
    assert_eq!(view.offers.len(), 2);
    assert_eq!(view.offers[1].price.as_deref(), Some("510"));
    assert!(!view.main_text.contains("Option 1"));
    assert_eq!(
        view.section("Transportation Options and Recommendations"),
        Some("- Book trains on the IRCTC website")
    );
}

#[test]
fn segmenter_without_flights_has_no_offers() {
    let view = Segmenter::default().segment(SAMPLE);
    assert!(view.flights_text.is_none());
    assert!(view.offers.is_empty());
}

#[test]
fn custom_sections_are_applied_in_order() {
    let segmenter = Segmenter::new(vec![
        SectionSpec::new("Packing List"),
        SectionSpec::new("Estimated Costs"),
    ])
    .unwrap();
    let titles: Vec<&str> = segmenter.titles().collect();
    assert_eq!(titles, vec!["Packing List", "Estimated Costs"]);

    let view = segmenter.segment("Intro\nPacking List\n- Hat\nEstimated Costs\n- Food: $5");
    assert_eq!(view.sections[0].body, "- Hat");
    assert_eq!(view.sections[1].body, "- Food: $5");
}

#[test]
fn segmenter_sections_never_share_a_body() {
    let view = Segmenter::default()
        .segment("Trip\n2. Estimated Costs\n3. Recommended Accommodations\n- Hotel Taj\n");
    assert_eq!(view.section("Estimated Costs"), None);
    assert_eq!(
        view.section("Recommended Accommodations"),
        Some("- Hotel Taj")
    );
    assert_eq!(view.found_sections().count(), 1);
}

#[test]
fn segmenter_rejects_blank_title() {
    let err = Segmenter::new(vec![SectionSpec::new(" ")]).unwrap_err();
    assert!(matches!(err, SegmentError::EmptyTitle));
}

#[test]
fn segmenter_rejects_duplicate_title() {
    let err = Segmenter::new(vec![
        SectionSpec::new("Estimated Costs"),
        SectionSpec::new("ESTIMATED  costs"),
    ])
    .unwrap_err();
    assert!(matches!(err, SegmentError::DuplicateTitle(ref t) if t == "ESTIMATED  costs"));
}

#[test]
fn segment_is_deterministic() {
    let segmenter = Segmenter::default();
    assert_eq!(segmenter.segment(SAMPLE), segmenter.segment(SAMPLE));
}
