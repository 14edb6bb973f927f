//! Ivy compatibility checking.
//!
//! Angular libraries published in the legacy View Engine format are
//! recompiled at install time by the ngcc compatibility compiler, which
//! leaves an `__ivy_ngcc__` directory inside each processed package.
//! This module finds those packages.
//!
//! - [`version`] - Validates the project's `@angular/cli` version
//! - [`inspector`] - Classifies a single installed package
//! - [`walker`] - Walks `node_modules`, including scoped packages
//! - [`report`] - Renders the flagged packages
//! - [`checker`] - Sequences the steps above
//!
//! # Example
//!
//! ```no_run
//! use ivycc::check::IvyCheck;
//! use ivycc::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Normal);
//! let check = IvyCheck::new(std::path::Path::new("."))?;
//! let report = check.run(ui.as_mut())?;
//! println!("{} flagged", report.flagged.len());
//! # Ok::<(), ivycc::IvyccError>(())
//! ```

pub mod checker;
pub mod inspector;
pub mod manifest;
pub mod report;
pub mod version;
pub mod walker;

pub use checker::IvyCheck;
pub use inspector::{inspect_package, FlaggedPackage, Inspection, MARKER_DIR, UNKNOWN};
pub use manifest::{PackageManifest, Repository, MANIFEST_FILE};
pub use report::Report;
pub use version::{coerce, VersionGate, SUPPORT_RANGE, TOOLCHAIN_PACKAGE};
pub use walker::{walk, Candidate, TreeScan, BIN_DIR, NODE_MODULES};
