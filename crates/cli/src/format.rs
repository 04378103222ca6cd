//! Result → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one result per line, `<dir>/<file> <line> "<content>"`
//! - **JSON** (`--json`): `serde_json::to_string_pretty` of the result array

use linedex_core::SearchResult;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a result list in evaluator order.
///
/// Returns an empty string for an empty human-mode result set so callers can
/// suppress the print entirely.
pub fn format_results(results: &[SearchResult], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(results)
            .unwrap_or_else(|err| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => results
            .iter()
            .map(|result| result.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
