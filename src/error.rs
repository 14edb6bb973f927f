//! Error types for ivycc operations.
//!
//! This module defines [`IvyccError`], the error type for every fatal
//! condition of a check run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions (project manifest, toolchain version, unreadable
//!   `node_modules`) are `IvyccError` variants and abort the run
//! - Problems with a single installed package are never errors; they are
//!   reported as [`Inspection::Unreadable`](crate::check::Inspection) and skipped
//! - All errors should name the condition that triggered them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ivycc operations.
#[derive(Debug, Error)]
pub enum IvyccError {
    /// Project `package.json` is absent or not valid JSON.
    #[error("Unable to find package.json at {path}: {message}")]
    MissingManifest { path: PathBuf, message: String },

    /// The toolchain is declared in neither dependency mapping.
    #[error("Unable to find {name} in your package.json file")]
    MissingDependency { name: String },

    /// The declared toolchain version is outside the supported range.
    #[error(
        "Found unsupported angular version: {found}\nThis tool is tested only with Angular versions {required}"
    )]
    UnsupportedVersion { found: String, required: String },

    /// The dependency-tree root itself could not be listed.
    #[error("Unable to read dependency tree at {path}: {source}")]
    DependencyTreeUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ivycc operations.
pub type Result<T> = std::result::Result<T, IvyccError>;
