//! Check orchestration.
//!
//! A run is strictly sequential: version gate, then the `node_modules` walk,
//! then the report. A failing gate aborts before the tree is touched, and an
//! unreadable `node_modules` aborts before anything is reported.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::UserInterface;

use super::report::Report;
use super::version::VersionGate;
use super::walker::{walk, TreeScan, NODE_MODULES};

/// Ivy compatibility check for one project.
#[derive(Debug, Clone)]
pub struct IvyCheck {
    project_root: PathBuf,
    gate: VersionGate,
}

impl IvyCheck {
    /// Create a check with the built-in `@angular/cli` gate.
    pub fn new(project_root: &Path) -> Result<Self> {
        Ok(Self::with_gate(project_root, VersionGate::angular_cli()?))
    }

    /// Create a check with a custom gate.
    pub fn with_gate(project_root: &Path, gate: VersionGate) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            gate,
        }
    }

    /// The project root being checked.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The dependency tree being scanned.
    pub fn node_modules(&self) -> PathBuf {
        self.project_root.join(NODE_MODULES)
    }

    /// Run the gate and the walk without printing anything.
    pub fn scan(&self) -> Result<(Report, TreeScan)> {
        self.scan_with(|_| {})
    }

    /// Run the full check and print the report.
    ///
    /// Quiet mode prints only the report itself.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<Report> {
        let status = ui.output_mode().shows_status();
        ui.show_header("Running ivy compatibility check");

        let (report, tree) = self.scan_with(|declared| {
            if status {
                ui.success(&format!(
                    "Found supported angular version: {} {}",
                    self.gate.package(),
                    declared
                ));
                ui.message(
                    "Make sure that your last 'npm install' and 'ng serve' ran without any errors.",
                );
            }
        })?;

        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "Inspected {} packages ({} without a readable package.json)",
                tree.inspected, tree.unreadable
            ));
        }

        report.render(ui);
        Ok(report)
    }

    /// Gate, then walk. `on_gate_passed` runs between the two steps.
    fn scan_with(&self, on_gate_passed: impl FnOnce(&str)) -> Result<(Report, TreeScan)> {
        let declared = self.gate.check_project(&self.project_root)?;
        on_gate_passed(declared.as_str());

        tracing::info!("Scanning {}", self.node_modules().display());
        let tree = walk(&self.node_modules())?;
        let report = Report::new(declared, tree.flagged.clone());
        Ok((report, tree))
    }
}
