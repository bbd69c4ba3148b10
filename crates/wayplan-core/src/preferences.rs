//! The trip-preferences record collected before an itinerary is generated.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    pub source: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free text as entered, e.g. `"$5000"`.
    pub budget: String,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    pub interests: String,
    #[serde(default)]
    pub include_transportation: bool,
}

fn default_travelers() -> u32 {
    1
}

impl TravelPreferences {
    /// Inclusive number of calendar days covered by the trip.
    #[must_use]
    pub fn trip_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks the same constraints the intake form enforces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first field that fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("source", &self.source),
            ("destination", &self.destination),
            ("budget", &self.budget),
            ("interests", &self.interests),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{field} must be non-empty"
                )));
            }
        }

        if self.travelers < 1 {
            return Err(ConfigError::Validation(
                "travelers must be at least 1".to_string(),
            ));
        }

        if self.end_date < self.start_date {
            return Err(ConfigError::Validation(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }

        Ok(())
    }
}

/// Load and validate travel preferences from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_preferences(path: &Path) -> Result<TravelPreferences, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    // YAML is a superset of JSON, so one parser covers both file shapes.
    let preferences: TravelPreferences =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;

    preferences.validate()?;
    Ok(preferences)
}
