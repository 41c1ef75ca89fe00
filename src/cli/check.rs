//! Check command implementation

use std::process::ExitCode;

use crate::integrity::{check_integrity, Severity};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the check command
pub fn run_check(json: bool) -> ExitCode {
    let report = check_integrity();
    let error_count = report.error_count();
    let warning_count = report.warning_count();

    if json {
        let issues: Vec<_> = report
            .issues
            .iter()
            .map(|i| {
                serde_json::json!({
                    "severity": match i.severity {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                    },
                    "type": i.issue_type.to_string(),
                    "table": i.table,
                    "subject": i.subject,
                    "message": i.message,
                })
            })
            .collect();
        let output = serde_json::json!({
            "valid": report.is_ok(),
            "errors": error_count,
            "warnings": warning_count,
            "issues": issues,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: Failed to serialize report: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        for issue in &report.issues {
            println!("{}", issue);
        }
        if report.issues.is_empty() {
            println!("All preset tables are consistent.");
        } else {
            println!();
            println!("Found {} error(s), {} warning(s)", error_count, warning_count);
        }
    }

    if report.is_ok() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
