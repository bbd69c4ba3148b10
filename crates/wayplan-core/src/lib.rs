//! Shared configuration and domain records for wayplan.

pub mod app_config;
pub mod config;
pub mod error;
pub mod preferences;
pub mod sections;

pub use app_config::{AppConfig, Environment, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use preferences::{load_preferences, TravelPreferences};
pub use sections::{default_sections, load_sections, SectionSpec, SectionsFile};
