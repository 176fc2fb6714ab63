use super::opt_var;
use crate::error::AppError;

/// Listen address and CORS settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed origins; empty means any origin.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = opt_var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match opt_var("BACKEND_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a port number, got '{raw}'"))
            })?,
            None => 5000,
        };
        let cors_origins = match opt_var("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }
}

/// Split the comma list. Every entry must be an `http(s)://` origin; a bad
/// entry is a config error, never silently dropped.
fn parse_origins(raw: &str) -> Result<Vec<String>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            if origin.starts_with("http://") || origin.starts_with("https://") {
                Ok(origin.to_string())
            } else {
                Err(AppError::config(format!(
                    "CORS_ALLOWED_ORIGINS entry '{origin}' is not an http(s) origin"
                )))
            }
        })
        .collect()
}
