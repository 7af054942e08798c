use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_PORT: u16 = 9999;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variables: {}", .0.join(" | "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl AppEnv {
    pub fn is_production(self) -> bool {
        self == AppEnv::Production
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            other => Err(format!(
                "expected one of development, production, test, got '{other}'"
            )),
        }
    }
}

/// Pino-style level names, mapped onto tracing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Silent,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Fatal | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Silent => LevelFilter::OFF,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            "silent" => Ok(LogLevel::Silent),
            other => Err(format!(
                "expected one of fatal, error, warn, info, debug, trace, silent, got '{other}'"
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Silent => "silent",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_env: AppEnv,
    pub port: u16,
    pub log_level: LogLevel,
    pub database_url: String,
}

impl Config {
    /// Loads `.env` (or `.env.test` when `APP_ENV=test`) and validates the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_file = match std::env::var("APP_ENV").as_deref() {
            Ok("test") => ".env.test",
            _ => ".env",
        };
        // a missing file is fine, the variables may come from the real environment
        let _ = dotenvy::from_filename(env_file);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validates every variable and reports all failures at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        let app_env = match lookup("APP_ENV") {
            None => Some(AppEnv::default()),
            Some(raw) => raw
                .parse::<AppEnv>()
                .map_err(|e| errors.push(format!("APP_ENV: {e}")))
                .ok(),
        };

        let port = match lookup("PORT") {
            None => Some(DEFAULT_PORT),
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| errors.push(format!("PORT: expected a port number, got '{raw}'")))
                .ok(),
        };

        let log_level = match lookup("LOG_LEVEL") {
            None => {
                errors.push("LOG_LEVEL: Required".to_string());
                None
            }
            Some(raw) => raw
                .parse::<LogLevel>()
                .map_err(|e| errors.push(format!("LOG_LEVEL: {e}")))
                .ok(),
        };

        let database_url = match lookup("DATABASE_URL") {
            None => {
                errors.push("DATABASE_URL: Required".to_string());
                None
            }
            Some(raw) if raw.starts_with("sqlite:") => Some(raw),
            Some(raw) => {
                errors.push(format!("DATABASE_URL: expected a sqlite: url, got '{raw}'"));
                None
            }
        };

        match (app_env, port, log_level, database_url) {
            (Some(app_env), Some(port), Some(log_level), Some(database_url)) => Ok(Self {
                app_env,
                port,
                log_level,
                database_url,
            }),
            _ => Err(ConfigError::Invalid(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_LEVEL", "info"),
            ("DATABASE_URL", "sqlite:tasks.db"),
        ]))
        .unwrap();
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn reports_every_bad_variable() {
        let err = Config::from_lookup(lookup(&[("PORT", "abc"), ("LOG_LEVEL", "loud")]))
            .unwrap_err();
        let ConfigError::Invalid(errors) = &err;
        assert_eq!(errors.len(), 3);
        let message = err.to_string();
        assert!(message.starts_with("Invalid environment variables: "));
        assert!(message.contains("PORT: "));
        assert!(message.contains("LOG_LEVEL: "));
        assert!(message.contains("DATABASE_URL: Required"));
    }

    #[test]
    fn rejects_non_sqlite_urls() {
        let err = Config::from_lookup(lookup(&[
            ("LOG_LEVEL", "info"),
            ("DATABASE_URL", "postgres://localhost/tasks"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn silent_turns_logging_off() {
        assert_eq!(LogLevel::Silent.as_filter(), LevelFilter::OFF);
        assert_eq!(LogLevel::Fatal.as_filter(), LevelFilter::ERROR);
    }
}
