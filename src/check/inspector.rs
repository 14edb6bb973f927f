//! Single-package inspection.
//!
//! An installed package that still carries an `__ivy_ngcc__` directory was
//! processed by the ngcc compatibility compiler at install time, which means
//! it is not published in the Ivy format.

use serde::Serialize;
use std::path::Path;

use super::manifest::PackageManifest;

/// Directory left behind by the ngcc compatibility compiler.
pub const MARKER_DIR: &str = "__ivy_ngcc__";

/// Placeholder for metadata a package does not declare.
pub const UNKNOWN: &str = "NA";

/// An installed package that still relies on the compatibility shim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FlaggedPackage {
    /// Declared package name.
    pub name: String,
    /// Repository URL, or [`UNKNOWN`].
    pub repository_url: String,
    /// Installed version, or [`UNKNOWN`].
    pub version: String,
}

/// Outcome of inspecting one candidate package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// A package without the marker directory.
    Compliant,
    /// A package with the marker directory.
    Flagged(FlaggedPackage),
    /// No readable `package.json`; not a package as far as the scan is concerned.
    Unreadable,
}

impl Inspection {
    /// The flagged package, if any.
    pub fn flagged(self) -> Option<FlaggedPackage> {
        match self {
            Self::Flagged(pkg) => Some(pkg),
            _ => None,
        }
    }
}

/// Inspect the package rooted at `path`.
///
/// Never fails: an unreadable or malformed manifest yields
/// [`Inspection::Unreadable`] regardless of whether a marker directory exists.
pub fn inspect_package(path: &Path) -> Inspection {
    let manifest = match PackageManifest::load_from_dir(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::debug!("Skipping {}: {:#}", path.display(), e);
            return Inspection::Unreadable;
        }
    };

    if !path.join(MARKER_DIR).is_dir() {
        return Inspection::Compliant;
    }

    let name = manifest.name.clone().unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });

    tracing::debug!("{} carries {}", name, MARKER_DIR);

    Inspection::Flagged(FlaggedPackage {
        repository_url: manifest.repository_url().unwrap_or(UNKNOWN).to_string(),
        version: manifest.version.unwrap_or_else(|| UNKNOWN.to_string()),
        name,
    })
}
