//! `package.json` parsing.
//!
//! A [`PackageManifest`] is read fresh for every inspection and dropped
//! afterwards. Every field is optional so that a sparse but valid manifest
//! still parses.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File name of a package or project manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Parsed `package.json` of a project root or an installed package.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Declared package name.
    #[serde(default)]
    pub name: Option<String>,

    /// Declared (for installed packages: installed) version.
    #[serde(default)]
    pub version: Option<String>,

    /// Runtime dependencies, name to version range.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Development dependencies, name to version range.
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,

    /// Source repository reference.
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// The `repository` field, which npm accepts in two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    /// Shorthand form: `"repository": "github:user/repo"`.
    Url(String),

    /// Structured form: `"repository": { "type": "git", "url": "..." }`.
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl Repository {
    /// The repository URL, if this reference carries one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url.as_str()),
            Self::Detailed { url, .. } => url.as_deref(),
        }
    }
}

impl PackageManifest {
    /// Read and parse the `package.json` inside `dir`.
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        Self::load(&dir.join(MANIFEST_FILE))
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse manifest JSON.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Declared version range of `name`, looking in `dependencies` first and
    /// `devDependencies` second.
    pub fn dependency_version(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
            .map(String::as_str)
    }

    /// Repository URL from either shape of the `repository` field.
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref().and_then(Repository::url)
    }
}
