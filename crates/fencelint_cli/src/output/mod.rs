//! Output formatting module

mod json;
mod text;

use miette::Result;

use fencelint_core::Report;

pub use text::ReportStyle;

use crate::cli::OutputFormat;

/// Prints the report and returns whether the run failed.
pub fn output_report(report: &Report, format: OutputFormat, style: &ReportStyle) -> Result<bool> {
    match format {
        OutputFormat::Json => json::output_json(report)?,
        OutputFormat::Text => text::output_text(report, style),
    }

    Ok(report.has_findings())
}
