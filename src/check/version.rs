//! Toolchain version gate.
//!
//! Declared versions in `package.json` are ranges (`^15.2.0`, `~14.1`),
//! partial versions (`16`) or exact versions. They are coerced to a full
//! semantic version before being tested against the supported range.

use regex::Regex;
use semver::{Version, VersionReq};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{IvyccError, Result};

use super::manifest::{PackageManifest, MANIFEST_FILE};

/// The toolchain whose declared version is gated.
pub const TOOLCHAIN_PACKAGE: &str = "@angular/cli";

/// Angular releases that ship the ngcc compatibility compiler.
///
/// ngcc arrived with Ivy in Angular 9, so older projects have no ngcc output
/// to find. Releases from 17 on are outside the tested range.
pub const SUPPORT_RANGE: &str = ">=9.0.0, <17.0.0";

/// First `MAJOR[.MINOR[.PATCH]]` run in a declared version.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// Coerce a declared version string to a semantic version.
///
/// Takes the first `MAJOR[.MINOR[.PATCH]]` run of digits and fills the
/// missing components with zero. Prerelease and build suffixes are dropped.
/// Returns `None` when the string has no numeric run (`latest`, `*`).
pub fn coerce(declared: &str) -> Option<Version> {
    let caps = VERSION_REGEX.captures(declared)?;
    let component = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Validates that a project declares a supported toolchain version.
#[derive(Debug, Clone)]
pub struct VersionGate {
    package: String,
    range: VersionReq,
}

impl VersionGate {
    /// Create a gate for `package` with a `semver` range expression.
    pub fn new(package: &str, range: &str) -> Result<Self> {
        let range = VersionReq::parse(range)
            .map_err(|e| anyhow::anyhow!("Invalid version range '{}': {}", range, e))?;
        Ok(Self {
            package: package.to_string(),
            range,
        })
    }

    /// The built-in gate for `@angular/cli`.
    pub fn angular_cli() -> Result<Self> {
        Self::new(TOOLCHAIN_PACKAGE, SUPPORT_RANGE)
    }

    /// Name of the gated package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The supported range.
    pub fn range(&self) -> &VersionReq {
        &self.range
    }

    /// Load `<project_root>/package.json` and check it.
    ///
    /// Returns the declared version string on success.
    pub fn check_project(&self, project_root: &Path) -> Result<String> {
        let path = project_root.join(MANIFEST_FILE);
        let manifest =
            PackageManifest::load(&path).map_err(|e| IvyccError::MissingManifest {
                path: path.clone(),
                message: format!("{:#}", e),
            })?;
        self.check(&manifest)
    }

    /// Check an already parsed project manifest.
    ///
    /// Returns the declared version string on success.
    pub fn check(&self, manifest: &PackageManifest) -> Result<String> {
        let declared = manifest.dependency_version(&self.package).ok_or_else(|| {
            IvyccError::MissingDependency {
                name: self.package.clone(),
            }
        })?;

        match coerce(declared) {
            Some(version) if self.range.matches(&version) => {
                tracing::debug!(
                    "{} {} (coerced to {}) satisfies {}",
                    self.package,
                    declared,
                    version,
                    self.range
                );
                Ok(declared.to_string())
            }
            coerced => {
                tracing::debug!(
                    "{} {} (coerced to {:?}) does not satisfy {}",
                    self.package,
                    declared,
                    coerced.map(|v| v.to_string()),
                    self.range
                );
                Err(IvyccError::UnsupportedVersion {
                    found: declared.to_string(),
                    required: self.range.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manifest_with(section: &str, version: &str) -> PackageManifest {
        PackageManifest::parse(&format!(
            r#"{{ "{}": {{ "@angular/cli": "{}" }} }}"#,
            section, version
        ))
        .unwrap()
    }

    #[test]
    fn coerce_exact_version() {
        assert_eq!(coerce("15.2.4"), Some(Version::new(15, 2, 4)));
    }

    #[test]
    fn coerce_range_operators() {
        assert_eq!(coerce("^16.1.0"), Some(Version::new(16, 1, 0)));
        assert_eq!(coerce("~14.2"), Some(Version::new(14, 2, 0)));
        assert_eq!(coerce(">=12.0.0 <13"), Some(Version::new(12, 0, 0)));
    }

    #[test]
    fn coerce_partial_versions() {
        assert_eq!(coerce("16"), Some(Version::new(16, 0, 0)));
        assert_eq!(coerce("v13.1"), Some(Version::new(13, 1, 0)));
        assert_eq!(coerce("15.x.x"), Some(Version::new(15, 0, 0)));
    }

    #[test]
    fn coerce_drops_prerelease() {
        assert_eq!(coerce("16.0.0-rc.1"), Some(Version::new(16, 0, 0)));
    }

    #[test]
    fn coerce_without_digits() {
        assert_eq!(coerce("latest"), None);
        assert_eq!(coerce("*"), None);
        assert_eq!(coerce(""), None);
    }

    #[test]
    fn supported_version_in_dependencies() {
        let gate = VersionGate::angular_cli().unwrap();
        let found = gate.check(&manifest_with("dependencies", "^15.2.0")).unwrap();
        assert_eq!(found, "^15.2.0");
    }

    #[test]
    fn supported_version_in_dev_dependencies() {
        let gate = VersionGate::angular_cli().unwrap();
        let found = gate
            .check(&manifest_with("devDependencies", "~16.2.1"))
            .unwrap();
        assert_eq!(found, "~16.2.1");
    }

    #[test]
    fn range_boundaries() {
        let gate = VersionGate::angular_cli().unwrap();
        for ok in ["9.0.0", "12.2.18", "16.2.12"] {
            assert!(gate.check(&manifest_with("dependencies", ok)).is_ok(), "{ok}");
        }
        for bad in ["8.3.29", "17.0.0", "^18.1.0"] {
            assert!(
                gate.check(&manifest_with("dependencies", bad)).is_err(),
                "{bad}"
            );
        }
    }

    #[test]
    fn missing_dependency() {
        let gate = VersionGate::angular_cli().unwrap();
        let manifest =
            PackageManifest::parse(r#"{ "dependencies": { "@angular/core": "^15.0.0" } }"#)
                .unwrap();

        let err = gate.check(&manifest).unwrap_err();
        match err {
            IvyccError::MissingDependency { name } => assert_eq!(name, TOOLCHAIN_PACKAGE),
            other => panic!("Expected MissingDependency, got {:?}", other),
        }
    }

    #[test]
    fn unsupported_version_carries_found_and_required() {
        let gate = VersionGate::angular_cli().unwrap();
        let err = gate
            .check(&manifest_with("dependencies", "^17.3.0"))
            .unwrap_err();
        match err {
            IvyccError::UnsupportedVersion { found, required } => {
                assert_eq!(found, "^17.3.0");
                assert_eq!(required, gate.range().to_string());
            }
            other => panic!("Expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn uncoercible_version_is_unsupported() {
        let gate = VersionGate::angular_cli().unwrap();
        let err = gate
            .check(&manifest_with("dependencies", "latest"))
            .unwrap_err();
        assert!(matches!(err, IvyccError::UnsupportedVersion { .. }));
    }

    #[test]
    fn custom_range() {
        let gate = VersionGate::new("@angular/cli", "^15").unwrap();
        assert_eq!(gate.package(), "@angular/cli");
        assert!(gate.check(&manifest_with("dependencies", "15.1.0")).is_ok());
        assert!(gate.check(&manifest_with("dependencies", "16.0.0")).is_err());
    }

    #[test]
    fn invalid_range_is_rejected() {
        assert!(VersionGate::new("@angular/cli", "not a range").is_err());
    }

    #[test]
    fn check_project_without_manifest() {
        let temp = TempDir::new().unwrap();
        let gate = VersionGate::angular_cli().unwrap();

        let err = gate.check_project(temp.path()).unwrap_err();
        assert!(matches!(err, IvyccError::MissingManifest { .. }));
    }

    #[test]
    fn check_project_with_unparseable_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "{ broken").unwrap();
        let gate = VersionGate::angular_cli().unwrap();

        let err = gate.check_project(temp.path()).unwrap_err();
        assert!(matches!(err, IvyccError::MissingManifest { .. }));
    }

    #[test]
    fn check_project_reads_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{ "name": "app", "devDependencies": { "@angular/cli": "^14.2.10" } }"#,
        )
        .unwrap();
        let gate = VersionGate::angular_cli().unwrap();

        assert_eq!(gate.check_project(temp.path()).unwrap(), "^14.2.10");
    }
}
