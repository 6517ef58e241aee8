//! Command implementations for the depth chart CLI
//!
//! Every command runs against a [`Backend`]: the remote API by default, or a
//! local SQLite chart when a database path is configured.

pub mod backend;
pub mod handlers;


use std::path::PathBuf;

use crate::{client::DEFAULT_API_BASE_URL, API_URL_ENV_VAR, DB_PATH_ENV_VAR};

pub use backend::{Backend, LocalChart};

/// Resolve the API base URL from option, then environment, then the public default
pub fn resolve_api_url(api_url: Option<String>) -> String {
    api_url
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Resolve a local database path from option or environment variable
pub fn resolve_db_path(db: Option<PathBuf>) -> Option<PathBuf> {
    db.or_else(|| {
        std::env::var(DB_PATH_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
}
