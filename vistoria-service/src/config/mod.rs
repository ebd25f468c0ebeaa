use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub server: ServerSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

/// Run-mode flags. Both default on in dev and must be set explicitly in
/// prod, so development and production share one code path.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Restart-on-change is delegated to an external watcher; the flag only
    /// controls the startup hint.
    pub enable_hot_reload: bool,
    /// When set, 5xx responses include the underlying error as `details`.
    pub verbose_errors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    /// Start the in-memory store populated with the sample dataset.
    pub enabled: bool,
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        // Loads .env and the common section (port, APP__ overrides)
        let common = core_config::Config::load()?;

        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;
        let is_prod = environment == Environment::Prod;

        Ok(ServiceConfig {
            common,
            environment,
            service_name: get_env("SERVICE_NAME", Some("vistoria-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            server: ServerSettings {
                enable_hot_reload: get_bool_env("ENABLE_HOT_RELOAD", Some(true), is_prod)?,
                verbose_errors: get_bool_env("VERBOSE_ERRORS", Some(true), is_prod)?,
            },
            seed: SeedSettings {
                enabled: get_bool_env("SEED_ENABLED", Some(true), is_prod)?,
            },
        })
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn get_bool_env(key: &str, default: Option<bool>, is_prod: bool) -> Result<bool, AppError> {
    match env::var(key) {
        Ok(val) => val.parse::<bool>().map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!("{} must be `true` or `false`", key))
        }),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def)
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
