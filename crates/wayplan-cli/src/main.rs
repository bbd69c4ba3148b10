mod itinerary;
mod preferences;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayplan_core::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "wayplan")]
#[command(about = "Structured views over AI-generated travel itineraries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split an itinerary into labeled sections and flight offers
    Segment {
        /// Itinerary text file; `-` or omitted reads stdin
        input: Option<PathBuf>,

        /// Output format: text, html, or json (defaults to `WAYPLAN_OUTPUT_FORMAT`)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// YAML section catalog (defaults to `WAYPLAN_SECTIONS_PATH`, then built-ins)
        #[arg(long)]
        sections: Option<PathBuf>,
    },
    /// Print the body of a single section
    Section {
        /// Section title, matched case-insensitively
        title: String,

        /// Itinerary text file; `-` or omitted reads stdin
        input: Option<PathBuf>,
    },
    /// List the flight offers in an itinerary
    Flights {
        /// Itinerary text file; `-` or omitted reads stdin
        input: Option<PathBuf>,

        /// Print offers as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Classify activity descriptions (meal, travel, hotel, ...)
    Classify {
        /// One or more activity descriptions
        #[arg(required = true)]
        descriptions: Vec<String>,
    },
    /// Validate a travel-preferences file (YAML or JSON)
    Preferences {
        /// Preferences file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = wayplan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.env.ansi_logs())
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Segment {
            input,
            format,
            sections,
        }) => {
            let format = format.unwrap_or(config.output_format);
            let sections = sections.or_else(|| config.sections_path.clone());
            itinerary::run_segment(input.as_deref(), format, sections.as_deref())?;
        }
        Some(Commands::Section { title, input }) => {
            itinerary::run_section(&title, input.as_deref())?;
        }
        Some(Commands::Flights { input, json }) => {
            itinerary::run_flights(input.as_deref(), json)?;
        }
        Some(Commands::Classify { descriptions }) => {
            itinerary::run_classify(&descriptions);
        }
        Some(Commands::Preferences { path }) => {
            preferences::run_preferences(&path)?;
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}
