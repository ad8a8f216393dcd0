// ABOUTME: Environment-based server configuration with typed defaults
// ABOUTME: Parses host, port, CORS origins, deployment environment, and expansion depth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook_core::constants::ports;
use cookbook_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::cookbook::ExpansionLimits;

/// Environment type for logging and other deployment-dependent behaviour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Recipe expansion configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExpansionConfig {
    /// Maximum recipe nesting depth; unset means unbounded
    pub max_depth: Option<usize>,
}

impl ExpansionConfig {
    /// Limits handed to the expansion engine
    #[must_use]
    pub const fn limits(&self) -> ExpansionLimits {
        ExpansionLimits {
            max_depth: self.max_depth,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Recipe expansion settings
    pub expansion: ExpansionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig::default(),
            expansion: ExpansionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a numeric variable does not parse
    /// or the expansion depth is zero.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let env_var_or =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let max_depth = lookup("COOKBOOK_MAX_EXPANSION_DEPTH")
            .map(|value| parse_var::<usize>("COOKBOOK_MAX_EXPANSION_DEPTH", &value))
            .transpose()?;
        if max_depth == Some(0) {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "COOKBOOK_MAX_EXPANSION_DEPTH must be greater than zero",
            ));
        }

        Ok(Self {
            host: env_var_or("HOST", "127.0.0.1"),
            http_port: parse_var(
                "HTTP_PORT",
                &env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string()),
            )?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            expansion: ExpansionConfig { max_depth },
        })
    }

    /// Address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Cookbook Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Max Expansion Depth: {}",
            self.bind_address(),
            self.environment,
            self.cors.allowed_origins,
            self.expansion
                .max_depth
                .map_or_else(|| "unlimited".to_owned(), |depth| depth.to_string()),
        )
    }
}

fn parse_var<T>(key: &str, value: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e: T::Err| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("{key} has invalid value '{value}'"),
        )
        .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.expansion.max_depth, None);
        assert_eq!(config.expansion.limits(), ExpansionLimits::unlimited());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("HTTP_PORT", "9000"),
            ("ENVIRONMENT", "prod"),
            ("COOKBOOK_MAX_EXPANSION_DEPTH", "8"),
            ("CORS_ALLOWED_ORIGINS", "https://cook.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert!(config.environment.is_production());
        assert_eq!(config.expansion.limits(), ExpansionLimits::with_max_depth(8));
        assert!(config.summary().contains("Max Expansion Depth: 8"));
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let err = ServerConfig::from_lookup(lookup(&[("HTTP_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("HTTP_PORT"));

        let err = ServerConfig::from_lookup(lookup(&[("COOKBOOK_MAX_EXPANSION_DEPTH", "0")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("production"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("TEST"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }
}
