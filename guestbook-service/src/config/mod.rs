use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct GuestbookConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string. May embed credentials, so it is never logged.
    pub uri: Secret<String>,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl GuestbookConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GuestbookConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: Secret::new(get_env(
                    "MONGO_URI",
                    Some("mongodb://localhost:27017"),
                    is_prod,
                )?),
                database: get_env("MONGO_DATABASE", Some("guestbook"), is_prod)?,
                collection: get_env("MONGO_COLLECTION", Some("names"), is_prod)?,
            },
            store: StoreConfig {
                backend: get_env("STORE_BACKEND", Some("mongo"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            },
        })
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

/// Production deployments must set every key explicitly; defaults only apply in dev.
fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None => {
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
