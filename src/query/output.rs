//! Query output formatting
//!
//! Renders a list of resolved targets in the formats evaluator frontends
//! expect.

use crate::target::Target;
use serde::{Deserialize, Serialize};

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Text,
    /// JSON output.
    Json,
    /// List of labels only.
    Label,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "label" => Ok(OutputFormat::Label),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// One target row in serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRow {
    pub label: String,
    pub kind: String,
    pub package: String,
}

/// Query metadata attached to serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMetadata {
    pub query: String,
    pub target_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QueryOutput {
    targets: Vec<TargetRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<QueryMetadata>,
}

/// Format query results.
pub fn format_targets(
    targets: &[&Target],
    format: OutputFormat,
    metadata: Option<QueryMetadata>,
) -> Result<String, String> {
    match format {
        OutputFormat::Text => format_text(targets, metadata),
        OutputFormat::Json => format_json(targets, metadata),
        OutputFormat::Label => format_label(targets),
    }
}

fn format_text(targets: &[&Target], metadata: Option<QueryMetadata>) -> Result<String, String> {
    let mut output = String::new();

    if let Some(meta) = metadata {
        output.push_str(&format!("# Query: {}\n", meta.query));
        output.push_str(&format!("# Targets: {}\n", meta.target_count));
        output.push('\n');
    }

    for target in targets {
        output.push_str(&format!("{} ({})\n", target.label, target.kind()));
    }

    Ok(output)
}

fn format_json(targets: &[&Target], metadata: Option<QueryMetadata>) -> Result<String, String> {
    let result = QueryOutput {
        targets: targets
            .iter()
            .map(|t| TargetRow {
                label: t.label.to_string(),
                kind: t.kind().to_string(),
                package: t.package().to_string(),
            })
            .collect(),
        metadata,
    };

    serde_json::to_string_pretty(&result).map_err(|e| format!("JSON serialization error: {e}"))
}

fn format_label(targets: &[&Target]) -> Result<String, String> {
    let mut output = String::new();

    for target in targets {
        output.push_str(&format!("{}\n", target.label));
    }

    Ok(output)
}
