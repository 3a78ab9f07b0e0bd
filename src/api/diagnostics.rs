use crate::db::diagnostics::ViewReport;
use crate::repository::LotsRepository;
use crate::responses::json::json_with_status;
use crate::responses::{json_response, ResultResp};
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

/// Listing probed when no `id` is given.
pub const DEFAULT_PROBE_ID: &str = "188827418";

fn report_body(attom_id: &str, report: &ViewReport) -> serde_json::Value {
    let found = report.probe.is_some();
    json!({
        "totalPropertiesInView": report.total,
        "propertyInView": found,
        "viewData": report.probe,
        "sampleProperties": report.sample,
        "message": format!(
            "Total properties in view: {}, Property {} found: {}",
            report.total, attom_id, found
        ),
    })
}

/// `GET /api/test-property[?id]`
///
/// Troubleshooting aid. Unlike the other endpoints it returns the raw
/// database error text.
pub fn check_property(repo: &dyn LotsRepository, query: &HashMap<String, String>) -> ResultResp {
    let attom_id = query
        .get("id")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PROBE_ID);

    match repo.inspect_view(attom_id) {
        Ok(report) => json_response(&report_body(attom_id, &report)),
        Err(err) => {
            error!(error = %err, attom_id, "property check failed");
            let body = json!({
                "error": "Failed to check property",
                "details": err.to_string(),
            });
            Ok(json_with_status(500, body.to_string()))
        }
    }
}
