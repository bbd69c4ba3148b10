use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Headings the itinerary generator is asked to produce, paired with the
/// shorter label shown above each rendered section.
const DEFAULT_SECTIONS: &[(&str, &str)] = &[
    ("Daily Itinerary with Timings", "Daily Itinerary"),
    ("Estimated Costs", "Estimated Costs"),
    ("Recommended Accommodations", "Recommended Accommodations"),
    (
        "Travel Tips and Recommendations",
        "Travel Tips & Recommendations",
    ),
    ("Must-Visit Places", "Must-Visit Places"),
    (
        "Transportation Options and Recommendations",
        "Transportation Options",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub title: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl SectionSpec {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            label: None,
        }
    }

    /// The label to render, falling back to the title.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// Lowercased title with whitespace runs collapsed, used for duplicate detection.
    #[must_use]
    pub fn normalized_title(&self) -> String {
        self.title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionsFile {
    pub sections: Vec<SectionSpec>,
}

/// The built-in section catalog, in matching order.
#[must_use]
pub fn default_sections() -> Vec<SectionSpec> {
    DEFAULT_SECTIONS
        .iter()
        .map(|(title, label)| SectionSpec {
            title: (*title).to_string(),
            label: Some((*label).to_string()),
        })
        .collect()
}

/// Load and validate a section catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_sections(path: &Path) -> Result<SectionsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sections_file: SectionsFile =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_sections(&sections_file)?;

    Ok(sections_file)
}

fn validate_sections(sections_file: &SectionsFile) -> Result<(), ConfigError> {
    if sections_file.sections.is_empty() {
        return Err(ConfigError::Validation(
            "section catalog must list at least one section".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for section in &sections_file.sections {
        if section.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "section title must be non-empty".to_string(),
            ));
        }

        if !seen.insert(section.normalized_title()) {
            return Err(ConfigError::Validation(format!(
                "duplicate section title: '{}'",
                section.title
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(titles: &[&str]) -> SectionsFile {
        SectionsFile {
            sections: titles.iter().map(|t| SectionSpec::new(*t)).collect(),
        }
    }

    #[test]
    fn default_sections_keep_generator_order() {
        let titles: Vec<String> = default_sections().into_iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Daily Itinerary with Timings",
                "Estimated Costs",
                "Recommended Accommodations",
                "Travel Tips and Recommendations",
                "Must-Visit Places",
                "Transportation Options and Recommendations",
            ]
        );
    }

    #[test]
    fn default_sections_pass_validation() {
        let sections_file = SectionsFile {
            sections: default_sections(),
        };
        assert!(validate_sections(&sections_file).is_ok());
    }

    #[test]
    fn display_label_falls_back_to_title() {
        let spec = SectionSpec::new("Estimated Costs");
        assert_eq!(spec.display_label(), "Estimated Costs");

        let blank = SectionSpec {
            title: "Estimated Costs".to_string(),
            label: Some("  ".to_string()),
        };
        assert_eq!(blank.display_label(), "Estimated Costs");
    }

    #[test]
    fn normalized_title_collapses_whitespace_and_case() {
        let spec = SectionSpec::new("  Must-Visit   PLACES ");
        assert_eq!(spec.normalized_title(), "must-visit places");
    }

    #[test]
    fn validate_rejects_empty_catalog() {
        let err = validate_sections(&file(&[])).unwrap_err();
        assert!(err.to_string().contains("at least one section"));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let err = validate_sections(&file(&["Estimated Costs", "   "])).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_title_ignoring_case_and_spacing() {
        let err =
            validate_sections(&file(&["Estimated Costs", "estimated  costs"])).unwrap_err();
        assert!(err.to_string().contains("duplicate section title"));
    }

    #[test]
    fn sections_file_parses_optional_label() {
        let yaml = "sections:\n  - title: Estimated Costs\n    label: Costs\n  - title: Must-Visit Places\n";
        let parsed: SectionsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.sections[0].display_label(), "Costs");
        assert_eq!(parsed.sections[1].label, None);
    }

    #[test]
    fn load_sections_missing_file_is_io_error() {
        let err = load_sections(Path::new("/nonexistent/wayplan/sections.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileIo { .. }));
    }

    #[test]
    fn load_sections_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("sections.yaml");
        assert!(path.exists(), "sections.yaml missing at {path:?}");
        let result = load_sections(&path);
        assert!(result.is_ok(), "failed to load sections.yaml: {result:?}");
        assert_eq!(result.unwrap().sections, default_sections());
    }
}
