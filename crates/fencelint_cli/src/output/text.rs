//! Text output formatter

use colored::Colorize;

use fencelint_core::{BlockReport, MappedFinding, Report};

/// Terminal styling, passed explicitly to every renderer.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    color: bool,
}

impl ReportStyle {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, f: impl FnOnce(&str) -> colored::ColoredString) -> String {
        if self.color {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn bold_red(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }
}

pub fn output_text(report: &Report, style: &ReportStyle) {
    println!("{}", render_text(report, style));
}

/// Renders everything after the start banner.
pub fn render_text(report: &Report, style: &ReportStyle) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Found {} Markdown file(s) to scan", report.files.len()));
    lines.push(String::new());

    for file in report.files_with_blocks() {
        lines.push(format!(
            "{}: Found {} nested Markdown block(s)",
            style.cyan(&file.path.display().to_string()),
            file.block_count
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total nested Markdown blocks found: {}",
        report.total_blocks
    ));
    lines.push(String::new());

    if report.has_findings() {
        lines.push(style.bold_red("Nested Markdown Linting Issues:"));
        lines.push(String::new());
        for entry in &report.entries {
            render_entry(entry, style, &mut lines);
            lines.push(String::new());
        }
        lines.push(format!(
            "{} {}",
            style.bold_red("✗"),
            style.red("Nested Markdown linting failed")
        ));
    } else {
        lines.push(format!(
            "{} No issues found in nested Markdown code fences",
            style.green("✓")
        ));
        lines.push(format!(
            "{} {}",
            style.green("✓"),
            style.green("Nested Markdown linting passed")
        ));
    }

    lines.join("\n")
}

fn render_entry(entry: &BlockReport, style: &ReportStyle, lines: &mut Vec<String>) {
    let block = &entry.block;

    lines.push(format!("{} {}", style.cyan("File:"), entry.file.display()));

    let depth = if block.depth > 0 {
        format!(" {}", style.yellow(&format!("[depth {}]", block.depth)))
    } else {
        String::new()
    };
    lines.push(format!(
        "  {}{}{}",
        style.yellow(&format!("Code fence at line {}", block.absolute_line)),
        depth,
        style.yellow(&format!(
            " ({} block #{}) ({}):",
            block.info, entry.block_index, block.ancestry_path
        ))
    ));

    for mapped in &entry.findings {
        render_finding(mapped, block.depth, style, lines);
    }
}

fn render_finding(
    mapped: &MappedFinding,
    depth: usize,
    style: &ReportStyle,
    lines: &mut Vec<String>,
) {
    let finding = &mapped.finding;
    let nested = if depth > 0 {
        format!(" (nested line {})", finding.line_number)
    } else {
        String::new()
    };

    lines.push(format!(
        "    {}:{}{} {} {}",
        mapped.line_in_file,
        mapped.column,
        nested,
        style.red(&finding.rule_names.join("/")),
        finding.rule_description
    ));

    if let Some(detail) = &finding.error_detail {
        lines.push(format!("      {}", style.yellow(detail)));
    }
}
