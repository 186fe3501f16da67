//! Content Repository: the read-only document every page is rendered from.
//!
//! Loaded once at startup, validated, then shared as an `Arc<ContentSnapshot>`.
//! There is no mutation API; `get()` hands out the same snapshot every time.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::models::content::ContentSnapshot;

pub mod catalog;
pub mod highlight;
pub mod validation;

const EMBEDDED_CONTENT: &str = include_str!("../../data/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("Personal info has no canonical reply email")]
    MissingCanonicalEmail,
}

#[derive(Debug, Clone)]
pub struct ContentRepository {
    snapshot: Arc<ContentSnapshot>,
}

impl ContentRepository {
    /// Parses and validates the document compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        let repo = Self::from_json(&raw)?;
        info!("Loaded content from {}", path.display());
        Ok(repo)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let snapshot: ContentSnapshot = serde_json::from_str(raw)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: ContentSnapshot) -> Result<Self, ContentError> {
        validation::validate_snapshot(&snapshot)?;
        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }

    pub fn get(&self) -> Arc<ContentSnapshot> {
        Arc::clone(&self.snapshot)
    }
}
