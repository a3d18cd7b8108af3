use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub storage: StorageBackend,
    pub db_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub cors_origins: Vec<String>,
    pub rate_limit: u32,
    pub rate_limit_window_secs: u64,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. `from_env` is the
    /// process-environment case.
    pub fn from_vars<F>(var: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let storage = match env_or("CONTACT_INTAKE_STORAGE", "postgres").as_str() {
            "postgres" => StorageBackend::Postgres,
            "memory" => StorageBackend::Memory,
            other => return Err(format!("Invalid CONTACT_INTAKE_STORAGE: {other}")),
        };

        let database_url = var("DB_CONNECTION_STRING").filter(|s| !s.trim().is_empty());
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err("Missing required environment variable: DB_CONNECTION_STRING".to_string());
        }

        let db_max_connections: u32 = env_or("CONTACT_INTAKE_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_INTAKE_DB_MAX_CONNECTIONS: {e}"))?;

        let host: IpAddr = env_or("CONTACT_INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_INTAKE_PORT", "7071")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_INTAKE_PORT: {e}"))?;

        let max_body_size: usize = env_or("CONTACT_INTAKE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_INTAKE_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = split_list(&env_or("CONTACT_INTAKE_TRUSTED_PROXIES", ""))
            .into_iter()
            .map(|s| {
                s.parse()
                    .map_err(|e| format!("Invalid CONTACT_INTAKE_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cors_origins = split_list(&env_or("CONTACT_INTAKE_CORS_ORIGINS", ""))
            .into_iter()
            .map(str::to_string)
            .collect();

        let rate_limit: u32 = env_or("CONTACT_INTAKE_RATE_LIMIT", "0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_INTAKE_RATE_LIMIT: {e}"))?;

        let rate_limit_window_secs: u64 = env_or("CONTACT_INTAKE_RATE_LIMIT_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_INTAKE_RATE_LIMIT_WINDOW_SECS: {e}"))?;
        if rate_limit_window_secs == 0 {
            return Err(
                "Invalid CONTACT_INTAKE_RATE_LIMIT_WINDOW_SECS: must be positive".to_string(),
            );
        }

        let log_level = env_or("CONTACT_INTAKE_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            storage,
            db_max_connections,
            host,
            port,
            max_body_size,
            trusted_proxies,
            cors_origins,
            rate_limit,
            rate_limit_window_secs,
            log_level,
        })
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}
