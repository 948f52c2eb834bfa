use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "PHISHGUARD_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default minimum length for a qualifying secret token
const DEFAULT_MIN_SECRET_LENGTH: usize = 8;

/// Default symbol set a qualifying secret token must draw from
const DEFAULT_SECRET_SYMBOLS: &str = "@$!%*?&";

/// Default number of non-disclosing turns a trainee must survive
const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// Disclosure detection thresholds
///
/// Pattern thresholds live in configuration rather than in the scan
/// logic so they can be tuned without touching the detector.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Minimum length of a contiguous token to count as a secret
    #[serde(default = "default_min_secret_length")]
    pub min_secret_length: usize,
    /// Symbols a secret token may contain (one of which is required)
    #[serde(default = "default_secret_symbols")]
    pub secret_symbols: String,
}

fn default_min_secret_length() -> usize {
    DEFAULT_MIN_SECRET_LENGTH
}

fn default_secret_symbols() -> String {
    DEFAULT_SECRET_SYMBOLS.to_string()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_secret_length: DEFAULT_MIN_SECRET_LENGTH,
            secret_symbols: DEFAULT_SECRET_SYMBOLS.to_string(),
        }
    }
}

/// Training session limits
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    /// Number of non-disclosing attempts after which the session counts as survived
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub training: TrainingConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub detection: DetectionConfig,
    pub training: TrainingConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            training: TrainingConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self {
            detection: file.detection,
            training: file.training,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.min_secret_length, 8);
        assert_eq!(config.secret_symbols, "@$!%*?&");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let file: ConfigFile =
            serde_yaml::from_str("detection:\n  min_secret_length: 12\n").unwrap();
        assert_eq!(file.detection.min_secret_length, 12);
        assert_eq!(file.detection.secret_symbols, "@$!%*?&");
        assert_eq!(file.training.max_attempts, 4);
    }
}
