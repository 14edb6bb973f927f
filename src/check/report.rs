//! Check report rendering.

use serde::Serialize;

use crate::ui::{Table, UserInterface};

use super::inspector::FlaggedPackage;

/// Column headers of the flagged-package table.
pub const TABLE_HEADERS: [&str; 3] = [
    "Non ivy libraries",
    "Repository URL",
    "Current installed version",
];

const FOUND_MESSAGE: &str = "Found some libraries which are not ivy compatible";
const CLEAN_MESSAGE: &str =
    "Looks like you are not using any library which is not compatible with ivy";
const UPGRADE_GUIDANCE: &str = "Now you can visit the npm/GitHub page of the libraries listed above and upgrade them to an ivy supported version";
const AUTHOR_GUIDANCE: &str = "If no ivy supported version exists, check with the library's authors whether the library is expected to be compatible with Ivy.";

/// Outcome of a complete check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Declared toolchain version that passed the version gate.
    pub toolchain_version: String,
    /// Flagged packages in discovery order.
    pub flagged: Vec<FlaggedPackage>,
}

impl Report {
    /// Create a report.
    pub fn new(toolchain_version: impl Into<String>, flagged: Vec<FlaggedPackage>) -> Self {
        Self {
            toolchain_version: toolchain_version.into(),
            flagged,
        }
    }

    /// Whether no package was flagged.
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Flagged packages as a table, one row per package in discovery order.
    pub fn table(&self) -> Table {
        let mut table = Table::new(TABLE_HEADERS.to_vec());
        for pkg in &self.flagged {
            table.add_row(vec![
                pkg.name.as_str(),
                pkg.repository_url.as_str(),
                pkg.version.as_str(),
            ]);
        }
        table
    }

    /// Print the report.
    ///
    /// Upgrade guidance is left out in quiet mode.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        if self.is_clean() {
            ui.success(CLEAN_MESSAGE);
            return;
        }

        ui.warning(FOUND_MESSAGE);
        ui.message(&self.table().render());
        if ui.output_mode().shows_status() {
            ui.message(UPGRADE_GUIDANCE);
            ui.message(AUTHOR_GUIDANCE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::inspector::UNKNOWN;
    use crate::ui::{MockUI, OutputMode};

    fn flagged(name: &str, url: &str, version: &str) -> FlaggedPackage {
        FlaggedPackage {
            name: name.to_string(),
            repository_url: url.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn clean_report_prints_single_message() {
        let report = Report::new("^15.2.0", vec![]);
        let mut ui = MockUI::new();

        report.render(&mut ui);

        assert!(report.is_clean());
        assert!(ui.has_success("not using any library"));
        assert!(ui.messages().is_empty());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn flagged_report_prints_table_and_guidance() {
        let report = Report::new(
            "^15.2.0",
            vec![
                flagged("ngx-legacy", "https://github.com/acme/ngx-legacy", "3.0.0"),
                flagged("@acme/widgets", UNKNOWN, "1.4.0"),
            ],
        );
        let mut ui = MockUI::new();

        report.render(&mut ui);

        assert!(ui.has_warning("not ivy compatible"));
        assert!(ui.has_message("Non ivy libraries"));
        assert!(ui.has_message("ngx-legacy"));
        assert!(ui.has_message("https://github.com/acme/ngx-legacy"));
        assert!(ui.has_message("@acme/widgets"));
        assert!(ui.has_message("upgrade them"));
        assert!(ui.has_message("library's authors"));
    }

    #[test]
    fn quiet_report_omits_guidance() {
        let report = Report::new("^15.2.0", vec![flagged("ngx-legacy", UNKNOWN, "3.0.0")]);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        report.render(&mut ui);

        assert!(ui.has_warning("not ivy compatible"));
        assert!(ui.has_message("ngx-legacy"));
        assert!(!ui.has_message("upgrade them"));
        assert!(!ui.has_message("library's authors"));
    }

    #[test]
    fn table_keeps_discovery_order_and_unknown_rows() {
        let report = Report::new(
            "16.0.0",
            vec![
                flagged("zeta", UNKNOWN, UNKNOWN),
                flagged("alpha", "https://example.com/alpha", "0.1.0"),
            ],
        );

        let table = report.table();
        assert_eq!(table.row_count(), 2);

        let output = table.render();
        let zeta = output.find("zeta").unwrap();
        let alpha = output.find("alpha").unwrap();
        assert!(zeta < alpha);
        assert!(output.contains(UNKNOWN));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = Report::new(
            "^14.2.0",
            vec![flagged("ngx-legacy", UNKNOWN, "3.0.0")],
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["toolchain_version"], "^14.2.0");
        assert_eq!(value["flagged"][0]["name"], "ngx-legacy");
        assert_eq!(value["flagged"][0]["repository_url"], UNKNOWN);
        assert_eq!(value["flagged"][0]["version"], "3.0.0");
    }
}
