//! Check command implementation.
//!
//! The `ivycc check` command validates the project's `@angular/cli` version
//! and lists installed libraries that still carry ngcc output.

use std::path::{Path, PathBuf};

use crate::check::IvyCheck;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for `--strict` runs that flagged at least one library.
pub const FLAGGED_EXIT_CODE: u8 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let check = IvyCheck::new(&self.project_root)?;

        let report = if self.args.json {
            let (report, _) = check.scan()?;
            let output = serde_json::to_string_pretty(&report)?;
            ui.message(&output);
            report
        } else {
            check.run(ui)?
        };

        if self.args.strict && !report.is_clean() {
            tracing::debug!("{} flagged libraries in strict mode", report.flagged.len());
            return Ok(CommandResult::failure(FLAGGED_EXIT_CODE));
        }
        Ok(CommandResult::success())
    }
}
