//! Persistent CLI settings.
//!
//! Settings live in a flat JSON object at `<config dir>/fincalc/config.json`,
//! or wherever `FINCALC_CONFIG` points. Unset keys fall back to defaults.

use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

use fincalc_core::display::{Grouping, RUPEE};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FINCALC_CONFIG";

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Decimal places for amounts and percentages
    DecimalPrecision,
    /// Digit grouping for amounts
    Grouping,
    /// Symbol printed before amounts
    CurrencySymbol,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    pub fn parse(s: &str) -> Result<Self, CliError> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "decimal_precision" | "precision" => Ok(Self::DecimalPrecision),
            "grouping" => Ok(Self::Grouping),
            "currency_symbol" | "currency" | "symbol" => Ok(Self::CurrencySymbol),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(CliError::UnknownConfigKey(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::Grouping => "grouping",
            Self::CurrencySymbol => "currency_symbol",
            Self::UseColors => "use_colors",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for output (0-10)",
            Self::Grouping => "Digit grouping for amounts (indian, international)",
            Self::CurrencySymbol => "Symbol printed before amounts",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DecimalPrecision => "2",
            Self::Grouping => "indian",
            Self::CurrencySymbol => RUPEE,
            Self::UseColors => "true",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DecimalPrecision,
            Self::Grouping,
            Self::CurrencySymbol,
            Self::UseColors,
        ]
    }

    /// Checks a value before it is stored.
    pub fn validate(&self, value: &str) -> Result<(), CliError> {
        let invalid = |expected: &str| CliError::InvalidConfigValue {
            key: self.as_str().to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        };

        match self {
            Self::DefaultFormat => {
                parse_format(value).ok_or_else(|| invalid("table, json, csv, or minimal"))?;
            }
            Self::DecimalPrecision => {
                let places: u32 = value.parse().map_err(|_| invalid("a number from 0 to 10"))?;
                if places > MAX_PRECISION {
                    return Err(invalid("a number from 0 to 10"));
                }
            }
            Self::Grouping => {
                value
                    .parse::<Grouping>()
                    .map_err(|_| invalid("indian or international"))?;
            }
            Self::CurrencySymbol => {
                if value.chars().count() > MAX_SYMBOL_CHARS || value.chars().any(char::is_control) {
                    return Err(invalid("a short printable symbol such as ₹ or Rs."));
                }
            }
            Self::UseColors => {
                parse_bool(value).ok_or_else(|| invalid("true or false"))?;
            }
        }
        Ok(())
    }
}

const MAX_PRECISION: u32 = 10;
const MAX_SYMBOL_CHARS: usize = 4;

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Some(OutputFormat::Table),
        "json" => Some(OutputFormat::Json),
        "csv" => Some(OutputFormat::Csv),
        "minimal" => Some(OutputFormat::Minimal),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Raw key/value storage backing the settings.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ConfigStore {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl ConfigStore {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| CliError::Config(format!("{}: {e}", path.display())).into())
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::debug!("wrote settings to {}", path.display());
        Ok(())
    }

    /// Stored value, or the key's default.
    pub fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    pub fn is_set(&self, key: ConfigKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    pub fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("could not determine config directory".to_string()))?;
    Ok(home.join("fincalc").join("config.json"))
}

/// Resolved display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_format: OutputFormat,
    pub precision: u32,
    pub grouping: Grouping,
    pub currency_symbol: String,
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Table,
            precision: 2,
            grouping: Grouping::Indian,
            currency_symbol: RUPEE.to_string(),
            use_colors: true,
        }
    }
}

impl Settings {
    /// Reads the settings file. Values that no longer validate are ignored.
    pub fn load() -> Result<Self> {
        Ok(Self::from_store(&ConfigStore::load()?))
    }

    pub fn from_store(store: &ConfigStore) -> Self {
        let defaults = Self::default();
        let checked = |key: ConfigKey| {
            let value = store.value(key);
            match key.validate(value) {
                Ok(()) => Some(value),
                Err(e) => {
                    tracing::warn!("ignoring setting: {e}");
                    None
                }
            }
        };

        Self {
            default_format: checked(ConfigKey::DefaultFormat)
                .and_then(parse_format)
                .unwrap_or(defaults.default_format),
            precision: checked(ConfigKey::DecimalPrecision)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.precision),
            grouping: checked(ConfigKey::Grouping)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.grouping),
            currency_symbol: checked(ConfigKey::CurrencySymbol)
                .map_or(defaults.currency_symbol, str::to_string),
            use_colors: checked(ConfigKey::UseColors)
                .and_then(parse_bool)
                .unwrap_or(defaults.use_colors),
        }
    }
}
