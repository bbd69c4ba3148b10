use std::path::Path;

use wayplan_core::{load_preferences, TravelPreferences};

pub(crate) fn summarize(prefs: &TravelPreferences) -> String {
    let transport = if prefs.include_transportation {
        "with transportation"
    } else {
        "without transportation"
    };
    format!(
        "{} -> {}, {} to {} ({} days), {} traveler(s), budget {}, {transport}\ninterests: {}",
        prefs.source,
        prefs.destination,
        prefs.start_date,
        prefs.end_date,
        prefs.trip_days(),
        prefs.travelers,
        prefs.budget,
        prefs.interests,
    )
}

pub(crate) fn run_preferences(path: &Path) -> anyhow::Result<()> {
    let prefs = load_preferences(path)?;
    tracing::info!(path = %path.display(), "preferences are valid");
    println!("{}", summarize(&prefs));
    Ok(())
}
