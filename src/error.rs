//! Error types for indexing and lookup.
//!
//! Startup failures (`IndexError`) abort the process before the MCP server
//! starts. Request failures (`LookupError`) are turned into tool error
//! results and never take the server down.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the document index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid match_pattern regex: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("failed to walk docs directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A recognized front-matter block whose metadata does not parse.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON front matter: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of a single `lookupProviderDocs` request.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid or missing 'provider_name' parameter")]
    InvalidArgument,

    #[error("no docs found for '{0}'")]
    NotFound(String),

    #[error("error reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error stripping front matter from '{}': {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("lookup for '{0}' was cancelled")]
    Cancelled(String),
}
