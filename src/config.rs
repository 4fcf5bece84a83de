// src/config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the listings API. Always ends with a `/` so endpoints join under it.
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Listing cards per page on the browse pages.
    pub page_size: usize,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse("http://127.0.0.1:8000/api/").expect("static url"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            page_size: 7,
            http_timeout: Duration::from_secs(15),
        }
    }
}

impl AppConfig {
    /// Build config from the process environment, loading `.env` first if one exists.
    pub fn from_env() -> Result<Self, ServerError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(raw) = lookup("VILLA_API_BASE_URL") {
            cfg.api_base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = lookup("VILLA_BIND_ADDR") {
            cfg.bind_addr = raw
                .parse()
                .map_err(|e| ServerError::Config(format!("VILLA_BIND_ADDR '{raw}': {e}")))?;
        }
        if let Some(raw) = lookup("VILLA_WORKERS") {
            cfg.max_workers = parse_positive("VILLA_WORKERS", &raw)?;
        }
        if let Some(raw) = lookup("VILLA_PAGE_SIZE") {
            cfg.page_size = parse_positive("VILLA_PAGE_SIZE", &raw)?;
        }
        if let Some(raw) = lookup("VILLA_HTTP_TIMEOUT_SECS") {
            let secs = parse_positive("VILLA_HTTP_TIMEOUT_SECS", &raw)?;
            cfg.http_timeout = Duration::from_secs(secs as u64);
        }

        Ok(cfg)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ServerError> {
    let trimmed = raw.trim();
    // Url::join drops the last path segment unless the base ends with a slash.
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash)
        .map_err(|e| ServerError::Config(format!("VILLA_API_BASE_URL '{raw}': {e}")))
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ServerError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ServerError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
