use anyhow::{anyhow, Context, Result};

use crate::models::RecordLayout;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_MAX_TEXT_CHARS: usize = 1_000_000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Column set emitted when a request does not ask for one.
    pub record_layout: RecordLayout,
    pub max_upload_bytes: usize,
    pub max_text_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            record_layout: match std::env::var("RECORD_LAYOUT") {
                Ok(raw) => raw
                    .parse::<RecordLayout>()
                    .map_err(|e| anyhow!(e))
                    .context("RECORD_LAYOUT must be 'basic' or 'full'")?,
                Err(_) => RecordLayout::default(),
            },
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_text_chars: parse_or("MAX_TEXT_CHARS", DEFAULT_MAX_TEXT_CHARS)?,
        })
    }
}

fn parse_or(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Environment variable '{key}' must be a positive integer")),
        Err(_) => Ok(default),
    }
}
