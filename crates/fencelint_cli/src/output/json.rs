//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use fencelint_core::Report;

pub fn output_json(report: &Report) -> Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}

fn render_json(report: &Report) -> Result<String> {
    let output = serde_json::json!({
        "passed": !report.has_findings(),
        "total_blocks": report.total_blocks,
        "finding_count": report.finding_count(),
        "files": report.files,
        "entries": report.entries,
    });
    serde_json::to_string_pretty(&output).into_diagnostic()
}
