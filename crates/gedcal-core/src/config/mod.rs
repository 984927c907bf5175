use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Append the Gregorian conversion when printing parsed dates.
    pub to_gregorian: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Checks that the configured level is one `tracing` understands.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` naming the rejected level.
    pub fn validate(&self) -> CoreResult<()> {
        if LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.level))
        {
            Ok(())
        } else {
            Err(CoreError::InvalidConfiguration(format!(
                "unknown logging level: {}",
                self.level
            )))
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `gedcal.{toml,json,yaml}`
    /// file, and `GEDCAL_`-prefixed environment variables, in increasing
    /// order of precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(None)
    }

    /// ## Summary
    /// Same as [`Settings::load`], reading `path` instead of the default
    /// `gedcal` file when given. An explicit path must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load_from(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("gedcal").required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("output.format", "text")?
            .set_default("output.to_gregorian", false)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("GEDCAL")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.logging.validate()?;
        tracing::debug!(?settings, "Configuration loaded");
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                to_gregorian: false,
            },
        }
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load_from(path)
}
