//! Configuration file.
//!
//! ```toml
//! [calculation]
//! include_end_date = false
//!
//! [output]
//! format = "text"          # or "json"
//! thousands_separator = ","
//! decimal_separator = "."
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fmt::Style;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub calculation: CalculationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculationConfig {
    /// Count both the start and the end day.
    pub include_end_date: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let style = Style::default();
        OutputConfig {
            format: OutputFormat::default(),
            thousands_separator: style.thousands_separator,
            decimal_separator: style.decimal_separator,
        }
    }
}

impl OutputConfig {
    pub fn style(&self) -> Style {
        Style {
            thousands_separator: self.thousands_separator,
            decimal_separator: self.decimal_separator,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Reads and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::config::{Config, OutputFormat};
    ///
    /// let config = Config::from_toml_str("[output]\nformat = \"json\"").unwrap();
    /// assert_eq!(OutputFormat::Json, config.output.format);
    /// assert!(!config.calculation.include_end_date);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.output.validate()
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<()> {
        for (field, c) in [
            ("output.thousands_separator", self.thousands_separator),
            ("output.decimal_separator", self.decimal_separator),
        ] {
            if c.is_ascii_digit() {
                return Err(Error::InvalidConfig {
                    field: field.to_owned(),
                    reason: format!("separator {c:?} is a digit"),
                });
            }
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(Error::InvalidConfig {
                field: "output.decimal_separator".to_owned(),
                reason: "must differ from the thousands separator".to_owned(),
            });
        }
        Ok(())
    }
}
