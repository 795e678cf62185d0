use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

pub const APP_ENV_VAR: &str = "APP_ENV";
pub const API_URL_VAR: &str = "POKEMON_API_URL";
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub pokemon: PokemonConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppConfig {
    pub env: AppEnv,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PokemonConfig {
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout: u32,
}

impl PokemonConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Develop,
    Test,
    Production,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Develop => "develop",
            AppEnv::Test => "test",
            AppEnv::Production => "production",
        }
    }
}

impl std::fmt::Display for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "develop" => Ok(AppEnv::Develop),
            "test" => Ok(AppEnv::Test),
            "production" => Ok(AppEnv::Production),
            other => Err(AppError::ConfigError(format!(
                "{} must be one of develop, test, production (got '{}')",
                APP_ENV_VAR, other
            ))),
        }
    }
}

impl Config {
    /// Defaults embedded from `config/config.toml`.
    pub fn defaults() -> Result<Config, AppError> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| {
            tracing::error!("Failed to parse config.toml: {}", e);
            AppError::from(e)
        })
    }

    /// Reads the process environment once. `default_env` is used when
    /// `APP_ENV` is unset.
    pub fn load(default_env: Option<AppEnv>) -> Result<Config, AppError> {
        Self::load_with(|key| std::env::var(key).ok(), default_env)
    }

    pub fn load_with<F>(lookup: F, default_env: Option<AppEnv>) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults()?;
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(env) = default_env {
            config.app.env = env;
        }
        if let Some(env) = lookup(APP_ENV_VAR) {
            config.app.env = env.parse()?;
        }
        if let Some(api_url) = lookup(API_URL_VAR) {
            config.pokemon.api_url = api_url.trim().to_string();
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            config.pokemon.timeout = timeout.trim().parse().map_err(|e| {
                AppError::ConfigError(format!(
                    "{} must be a whole number of seconds (got '{}'): {}",
                    TIMEOUT_VAR, timeout, e
                ))
            })?;
        }
        if config.pokemon.timeout == 0 {
            return Err(AppError::ConfigError(format!(
                "{} must be at least 1 second (got 0)",
                TIMEOUT_VAR
            )));
        }

        tracing::debug!(
            "Loaded config: env={}, api_url={}, timeout={}s",
            config.app.env,
            config.pokemon.api_url,
            config.pokemon.timeout
        );
        Ok(config)
    }
}
