//! JSON serialization of the reconciliation report.

use crate::engine::ReconcileReport;

pub fn serialize_report(report: &ReconcileReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn serialize_report_pretty(report: &ReconcileReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
