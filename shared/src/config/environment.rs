//! Environment detection and logging configuration

use serde::{Deserialize, Serialize};

/// Deployment stage the process runs in, selected by `ENVIRONMENT` or `RUST_ENV`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Reads the stage from the process environment, defaulting to development
    pub fn from_env() -> Self {
        ["ENVIRONMENT", "RUST_ENV"]
            .iter()
            .find_map(|name| std::env::var(name).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Token file consulted by `TokenConfig::load` for this stage
    pub fn config_file(&self) -> &'static str {
        match self {
            Self::Development => "token.development",
            Self::Staging => "token.staging",
            Self::Production => "token.production",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let stage = value.trim().to_ascii_lowercase();
        match stage.as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" | "stage" | "test" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!("unknown environment '{}'", value)),
        }
    }
}

/// Subscriber settings consumed by `init_tracing`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// ANSI colors in terminal output
    #[serde(default = "colored_by_default")]
    pub colored: bool,

    /// File and line of each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            colored: colored_by_default(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose human-readable output in development, JSON lines elsewhere
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Json),
            Environment::Production => ("warn", LogFormat::Json),
        };
        let interactive = env == Environment::Development;

        Self {
            level: level.to_string(),
            format,
            colored: interactive,
            source_location: interactive,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

fn colored_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(" Staging ".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_config_file_per_environment() {
        assert_eq!(Environment::Development.config_file(), "token.development");
        assert_eq!(Environment::Staging.config_file(), "token.staging");
        assert_eq!(Environment::Production.config_file(), "token.production");
    }

    #[test]
    fn test_logging_config_for_environment() {
        let dev_log = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev_log.level, "debug");
        assert_eq!(dev_log.format, LogFormat::Pretty);
        assert!(dev_log.colored && dev_log.source_location);

        let staging_log = LoggingConfig::for_environment(Environment::Staging);
        assert_eq!(staging_log.level, "info");
        assert_eq!(staging_log.format, LogFormat::Json);

        let prod_log = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod_log.level, "warn");
        assert_eq!(prod_log.format, LogFormat::Json);
        assert!(!prod_log.colored && !prod_log.source_location);
    }

    #[test]
    fn test_logging_config_deserialize_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level":"trace"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.colored);
        assert!(!config.source_location);
    }
}
