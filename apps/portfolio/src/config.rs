use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::contact::emailjs::DEFAULT_ENDPOINT;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Overrides the content document compiled into the binary.
    pub content_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            content_path: std::env::var_os("PORTFOLIO_CONTENT_PATH").map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// EmailJS identities. Only the `send` command needs these, so they are
/// loaded separately and fail only when a message is actually sent.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl EmailJsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(EmailJsConfig {
            service_id: require_env("EMAILJS_SERVICE_ID")?,
            template_id: require_env("EMAILJS_TEMPLATE_ID")?,
            public_key: require_env("EMAILJS_PUBLIC_KEY")?,
            endpoint: std::env::var("EMAILJS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
