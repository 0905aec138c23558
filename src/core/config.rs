use crate::core::currency::CurrencyCode;
use crate::core::screen::ConverterState;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_TRANSFERGO_URL: &str = "https://my.transfergo.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransferGoProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub transfergo: Option<TransferGoProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            transfergo: Some(TransferGoProviderConfig {
                base_url: DEFAULT_TRANSFERGO_URL.to_string(),
            }),
        }
    }
}

fn default_from_currency() -> CurrencyCode {
    CurrencyCode::Pln
}

fn default_to_currency() -> CurrencyCode {
    CurrencyCode::Uah
}

fn default_amount() -> String {
    "300.0".to_string()
}

fn default_initial_rate() -> f64 {
    11.50899
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_from_currency")]
    pub from_currency: CurrencyCode,
    #[serde(default = "default_to_currency")]
    pub to_currency: CurrencyCode,
    /// Amount shown on the sending card when a session starts.
    #[serde(default = "default_amount")]
    pub amount: String,
    /// Rate used until the first live rate arrives.
    #[serde(default = "default_initial_rate")]
    pub initial_rate: f64,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            from_currency: default_from_currency(),
            to_currency: default_to_currency(),
            amount: default_amount(),
            initial_rate: default_initial_rate(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or built-in defaults if
    /// no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn transfergo_base_url(&self) -> &str {
        self.providers
            .transfergo
            .as_ref()
            .map_or(DEFAULT_TRANSFERGO_URL, |p| &p.base_url)
    }

    pub fn initial_state(&self) -> ConverterState {
        ConverterState::new(
            self.from_currency.clone(),
            self.to_currency.clone(),
            &self.amount,
            self.initial_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
from_currency: "EUR"
to_currency: "gbp"
amount: "125.50"
initial_rate: 0.86
providers:
  transfergo:
    base_url: "http://example.com/fx"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.from_currency, CurrencyCode::Eur);
        assert_eq!(config.to_currency, CurrencyCode::Gbp);
        assert_eq!(config.amount, "125.50");
        assert_eq!(config.initial_rate, 0.86);
        assert_eq!(config.transfergo_base_url(), "http://example.com/fx");

        let state = config.initial_state();
        assert_eq!(state.from_currency, CurrencyCode::Eur);
        assert_eq!(state.from_amount, "125.50");
        assert_eq!(state.rate, 0.86);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.from_currency, CurrencyCode::Pln);
        assert_eq!(config.to_currency, CurrencyCode::Uah);
        assert_eq!(config.amount, "300.0");
        assert_eq!(config.initial_rate, 11.50899);
        assert_eq!(config.transfergo_base_url(), DEFAULT_TRANSFERGO_URL);
    }

    #[test]
    fn test_provider_section_without_transfergo() {
        let config: AppConfig =
            serde_yaml::from_str("providers: {}\n").expect("Failed to deserialize");
        assert!(config.providers.transfergo.is_none());
        assert_eq!(config.transfergo_base_url(), DEFAULT_TRANSFERGO_URL);
    }

    #[test]
    fn test_load_from_path_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "initial_rate: [not a number").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
