use std::env;

use crate::shared::errors::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment; `.env` is loaded by the
    /// caller before this runs.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::Internal("DATABASE_URL environment variable not found".to_string())
        })?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::Internal(format!("PORT must be a valid port number, got `{}`", raw))
            })?,
            Err(_) => 8000,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
