//! Render command.
//!
//! Loads the export, flattens it and writes the three-table report.

use anyhow::Context;
use policy_render_core::{write_report, PolicyDocument, PolicyTables};
use std::io::{self, Write};
use std::path::Path;

/// Render the policy export at `path` to stdout.
pub fn run(path: &Path) -> anyhow::Result<()> {
    let stdout = io::stdout();
    render_to(path, stdout.lock())
}

/// Render the policy export at `path` into `out`.
pub fn render_to<W: Write>(path: &Path, out: W) -> anyhow::Result<()> {
    let document = PolicyDocument::from_file(path)
        .with_context(|| format!("Failed to load policy export: {}", path.display()))?;

    let tables = PolicyTables::from_document(&document);
    tracing::info!(
        access = tables.access.len(),
        row_filter = tables.row_filter.len(),
        data_mask = tables.data_mask.len(),
        "Rendering policy tables"
    );

    write_report(&tables, out).context("Failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_to_buffer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("policies.json");
        fs::write(
            &path,
            r#"{ "policies": [{
                "id": 5, "name": "hr",
                "resources": { "database": { "values": ["hr"] } },
                "policyItems": [{ "users": ["alice"], "accesses": [{ "type": "select" }] }],
                "dataMaskPolicyItems": [{
                    "users": ["bob"], "accesses": [{ "type": "select" }],
                    "dataMaskInfo": { "dataMaskType": "MASK_NULL" }
                }]
            }] }"#,
        )
        .unwrap();

        let mut out = Vec::new();
        render_to(&path, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.starts_with("Access Policies:\n"));
        assert!(report.contains("| alice | select   |"));
        assert!(report.contains("| MASK_NULL            |"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let mut out = Vec::new();
        let err = render_to(&path, &mut out).unwrap_err();

        assert!(err.to_string().contains("nope.json"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_malformed_json_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let mut out = Vec::new();
        assert!(render_to(&path, &mut out).is_err());
        assert!(out.is_empty());
    }
}
