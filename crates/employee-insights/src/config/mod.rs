use crate::dataset::{DEFAULT_ROWS, DEFAULT_SEED};
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "employee_data.csv";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for a generation run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let seed = match env::var("APP_SEED") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed { value: raw })?,
            Err(_) => DEFAULT_SEED,
        };

        let rows = match env::var("APP_ROWS") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidRows { value: raw })?,
            Err(_) => DEFAULT_ROWS,
        };

        let output = env::var("APP_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT));

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig { seed, rows, output },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Inputs for the generator and the CSV export.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub seed: u64,
    /// Kept signed so a negative request reaches the generator and is rejected there.
    pub rows: i64,
    pub output: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed { value: String },
    InvalidRows { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed { value } => {
                write!(f, "APP_SEED must be an unsigned 64-bit integer, got '{value}'")
            }
            ConfigError::InvalidRows { value } => {
                write!(f, "APP_ROWS must be an integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_SEED");
        env::remove_var("APP_ROWS");
        env::remove_var("APP_OUTPUT");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(config.dataset.rows, 100);
        assert_eq!(config.dataset.output, PathBuf::from("employee_data.csv"));
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn load_reads_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_SEED", " 7 ");
        env::set_var("APP_ROWS", "12");
        env::set_var("APP_OUTPUT", "out/staff.csv");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.dataset.seed, 7);
        assert_eq!(config.dataset.rows, 12);
        assert_eq!(config.dataset.output, PathBuf::from("out/staff.csv"));
    }

    #[test]
    fn rejects_unparseable_seed() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEED", "forty-two");
        let error = AppConfig::load().expect_err("seed must be numeric");
        reset_env();

        match error {
            ConfigError::InvalidSeed { value } => assert_eq!(value, "forty-two"),
            other => panic!("expected seed error, got {other:?}"),
        }
    }
}
