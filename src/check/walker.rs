//! `node_modules` traversal.
//!
//! Entries of `node_modules` come in two shapes: a package (`node_modules/rxjs`)
//! or a scope container holding packages (`node_modules/@angular/core`).
//! The walk is capped at those two levels.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IvyccError, Result};

use super::inspector::{inspect_package, FlaggedPackage, Inspection};
use super::manifest::MANIFEST_FILE;

/// Directory holding executable shims, never a package.
pub const BIN_DIR: &str = ".bin";

/// Directory name of the dependency tree inside a project.
pub const NODE_MODULES: &str = "node_modules";

/// A first-level entry of the dependency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Directory with its own `package.json`.
    Package(PathBuf),
    /// Directory without one; its children are the packages.
    ScopeContainer(PathBuf),
}

impl Candidate {
    /// Classify a first-level directory.
    pub fn classify(path: PathBuf) -> Self {
        if path.join(MANIFEST_FILE).exists() {
            Self::Package(path)
        } else {
            Self::ScopeContainer(path)
        }
    }

    /// Package directories this candidate yields.
    ///
    /// An unreadable scope container yields nothing.
    pub fn packages(self) -> Vec<PathBuf> {
        match self {
            Self::Package(path) => vec![path],
            Self::ScopeContainer(path) => match child_dirs(&path) {
                Ok(children) => children,
                Err(e) => {
                    tracing::debug!("Skipping scope {}: {}", path.display(), e);
                    Vec::new()
                }
            },
        }
    }
}

/// Result of walking a dependency tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeScan {
    /// Flagged packages in discovery order.
    pub flagged: Vec<FlaggedPackage>,
    /// Packages with a readable manifest.
    pub inspected: usize,
    /// Candidate directories without a readable manifest.
    pub unreadable: usize,
}

impl TreeScan {
    fn record(&mut self, inspection: Inspection) {
        match inspection {
            Inspection::Compliant => self.inspected += 1,
            Inspection::Flagged(pkg) => {
                self.inspected += 1;
                self.flagged.push(pkg);
            }
            Inspection::Unreadable => self.unreadable += 1,
        }
    }
}

/// Walk `node_modules` and inspect every package found at either level.
///
/// Fails only when `node_modules` itself cannot be listed. Anything that goes
/// wrong below that level is skipped.
pub fn walk(node_modules: &Path) -> Result<TreeScan> {
    let entries = child_dirs(node_modules).map_err(|source| {
        IvyccError::DependencyTreeUnreadable {
            path: node_modules.to_path_buf(),
            source,
        }
    })?;

    let mut scan = TreeScan::default();
    for entry in entries {
        if entry.file_name().is_some_and(|name| name == BIN_DIR) {
            continue;
        }

        for package in Candidate::classify(entry).packages() {
            scan.record(inspect_package(&package));
        }
    }

    tracing::debug!(
        "Inspected {} packages under {} ({} flagged, {} unreadable)",
        scan.inspected,
        node_modules.display(),
        scan.flagged.len(),
        scan.unreadable
    );

    Ok(scan)
}

/// Immediate child directories of `dir`, in listing order.
///
/// Symlinks are followed. Entries that vanish or cannot be stat'ed are skipped.
fn child_dirs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::debug!("Skipping entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}
