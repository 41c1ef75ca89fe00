//! Data-integrity checks for the preset tables
//!
//! The tables are plain data, so the only way they can go wrong is drift:
//! a key landing in both directional tables, a table naming an animation
//! that has no keyframes, or the speed table losing its shape. None of this
//! is checked at runtime by the transforms; these checks back the test suite
//! and the `check` command.

use std::collections::HashSet;

use crate::keyframes::{KeyframesTable, KEYFRAMES};
use crate::presets::{
    PresetTable, ANIMATION_PRESETS, ANIMATION_SPEEDS, ATTENTION_ANIMATIONS, ENTRANCE_ANIMATIONS,
    EXIT_ANIMATIONS,
};

/// Speed labels the speed table must define, in order.
pub const SPEED_LABELS: [&str; 5] = ["slower", "slow", "normal", "fast", "faster"];

/// Severity of an integrity issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Type of integrity issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Key present in both the entrance and exit tables
    DirectionalOverlap,
    /// Table value with no keyframes definition
    MissingKeyframes,
    /// Speed table differs from the five expected labels
    SpeedTableShape,
    /// Attention key also present in a directional table
    AttentionOverlap,
    /// Group key absent from the full preset table
    MissingFromFull,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::DirectionalOverlap => write!(f, "directional_overlap"),
            IssueType::MissingKeyframes => write!(f, "missing_keyframes"),
            IssueType::SpeedTableShape => write!(f, "speed_table_shape"),
            IssueType::AttentionOverlap => write!(f, "attention_overlap"),
            IssueType::MissingFromFull => write!(f, "missing_from_full"),
        }
    }
}

/// A single integrity finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    /// Severity of the issue
    pub severity: Severity,
    /// Type of issue
    pub issue_type: IssueType,
    /// Table the issue was found in
    pub table: &'static str,
    /// Offending key or value
    pub subject: String,
    /// Human-readable message
    pub message: String,
}

impl IntegrityIssue {
    fn error(
        issue_type: IssueType,
        table: &'static str,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            issue_type,
            table,
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn warning(
        issue_type: IssueType,
        table: &'static str,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            issue_type,
            table,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}: {}", self.severity, self.issue_type, self.table, self.message)
    }
}

/// The set of tables checked together.
#[derive(Debug, Clone, Copy)]
pub struct TableSet {
    pub full: &'static PresetTable,
    pub entrance: &'static PresetTable,
    pub exit: &'static PresetTable,
    pub attention: &'static PresetTable,
    pub speeds: &'static PresetTable,
}

impl Default for TableSet {
    /// The built-in tables.
    fn default() -> Self {
        Self {
            full: &ANIMATION_PRESETS,
            entrance: &ENTRANCE_ANIMATIONS,
            exit: &EXIT_ANIMATIONS,
            attention: &ATTENTION_ANIMATIONS,
            speeds: &ANIMATION_SPEEDS,
        }
    }
}

/// Result of an integrity run
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == Severity::Error).count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == Severity::Warning).count()
    }

    /// True when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Issues of one type.
    pub fn of_type(&self, issue_type: IssueType) -> impl Iterator<Item = &IntegrityIssue> {
        self.issues.iter().filter(move |i| i.issue_type == issue_type)
    }
}

/// Check the built-in tables against the built-in keyframes.
pub fn check_integrity() -> IntegrityReport {
    check_tables(&TableSet::default(), &KEYFRAMES)
}

/// Check an arbitrary set of tables against a keyframes table.
pub fn check_tables(tables: &TableSet, keyframes: &KeyframesTable) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    check_directional_disjoint(tables, &mut report);
    check_keyframes_complete(tables, keyframes, &mut report);
    check_speed_table(tables.speeds, &mut report);
    check_attention_disjoint(tables, &mut report);
    check_groups_in_full(tables, &mut report);
    report
}

fn check_directional_disjoint(tables: &TableSet, report: &mut IntegrityReport) {
    for key in tables.entrance.keys().filter(|k| tables.exit.contains_key(k)) {
        report.issues.push(IntegrityIssue::error(
            IssueType::DirectionalOverlap,
            tables.entrance.name(),
            key,
            format!("'{}' is in both {} and {}", key, tables.entrance.name(), tables.exit.name()),
        ));
    }
}

fn check_keyframes_complete(
    tables: &TableSet,
    keyframes: &KeyframesTable,
    report: &mut IntegrityReport,
) {
    for table in [tables.full, tables.entrance, tables.exit, tables.attention] {
        let mut seen = HashSet::new();
        for value in table.values() {
            if seen.insert(value) && !keyframes.contains(value) {
                report.issues.push(IntegrityIssue::error(
                    IssueType::MissingKeyframes,
                    table.name(),
                    value,
                    format!("animation '{}' has no @keyframes definition", value),
                ));
            }
        }
    }
}

fn check_speed_table(speeds: &PresetTable, report: &mut IntegrityReport) {
    let labels: Vec<&str> = speeds.keys().collect();
    if labels != SPEED_LABELS {
        report.issues.push(IntegrityIssue::error(
            IssueType::SpeedTableShape,
            speeds.name(),
            labels.join(", "),
            format!("expected labels [{}], found [{}]", SPEED_LABELS.join(", "), labels.join(", ")),
        ));
    }
}

fn check_attention_disjoint(tables: &TableSet, report: &mut IntegrityReport) {
    for key in tables.attention.keys() {
        for other in [tables.entrance, tables.exit] {
            if other.contains_key(key) {
                report.issues.push(IntegrityIssue::warning(
                    IssueType::AttentionOverlap,
                    tables.attention.name(),
                    key,
                    format!("'{}' is also in {}", key, other.name()),
                ));
            }
        }
    }
}

fn check_groups_in_full(tables: &TableSet, report: &mut IntegrityReport) {
    for group in [tables.entrance, tables.exit, tables.attention] {
        for key in group.keys().filter(|k| !tables.full.contains_key(k)) {
            report.issues.push(IntegrityIssue::warning(
                IssueType::MissingFromFull,
                group.name(),
                key,
                format!("'{}' is not in {}", key, tables.full.name()),
            ));
        }
    }
}
