use crate::server::error::{config::ConfigError, AppError};

const HOSTAWAY_BASE_URL: &str = "https://api.hostaway.com/v1";
const DEFAULT_PORT: u16 = 8080;
/// Top of every hour.
const DEFAULT_LISTING_SYNC_CRON: &str = "0 0 * * * *";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub hostaway_account_id: String,
    pub hostaway_api_key: String,
    pub hostaway_base_url: String,

    /// Cron expression for the periodic listing import. An empty value disables the job.
    pub listing_sync_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            hostaway_account_id: required("HOSTAWAY_ACCOUNT_ID")?,
            hostaway_api_key: required("HOSTAWAY_API_KEY")?,
            hostaway_base_url: lookup("HOSTAWAY_BASE_URL")
                .unwrap_or_else(|| HOSTAWAY_BASE_URL.to_string()),
            listing_sync_cron: lookup("LISTING_SYNC_CRON")
                .unwrap_or_else(|| DEFAULT_LISTING_SYNC_CRON.to_string()),
        })
    }
}
