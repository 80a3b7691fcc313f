//! Output formatters for skill gap reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{category_breakdown, ScoreBand};
use crate::processing::analyzer::SkillGapReport;
use crate::processing::recommendations::Priority;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting skill gap reports
pub trait OutputFormatter {
    fn format_report(&self, report: &SkillGapReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the configured formatter
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::Yellow,
            ScoreBand::Fair => Color::BrightYellow,
            ScoreBand::Poor => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::High => "[!]",
            Priority::Medium => "[*]",
            Priority::Low => "[-]",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &SkillGapReport) -> Result<String> {
        let mut output = String::new();
        let band = ScoreBand::from_score(report.match_score);

        output.push_str(&self.format_header(
            &format!("SKILL GAP ANALYSIS: {}", report.role_label),
            1,
        ));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Match Score: {:.1}% {}\n",
            report.match_score,
            self.format_score_badge(band)
        ));
        output.push_str(&format!(
            "Matched {} of {} required skills\n",
            report.total_matched, report.total_required
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(band.verdict(), Color::Cyan)));

        if !report.matched_skills.is_empty() {
            output.push_str(&self.format_header("Matched Skills", 3));
            for skill in &report.matched_skills {
                output.push_str(&format!("  ✓ {}\n", self.colorize(&skill.name, Color::Green)));
            }
        }

        if !report.gap_skills.is_empty() {
            output.push_str(&self.format_header("Skill Gaps", 3));
            for skill in &report.gap_skills {
                output.push_str(&format!("  ✗ {}\n", self.colorize(&skill.name, Color::Red)));
            }
        }

        if !report.recommendations.is_empty() {
            output.push_str(&self.format_header("Recommendations", 2));
            for (i, rec) in report.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {} {} ({})\n   {}\n",
                    i + 1,
                    self.format_priority_icon(rec.priority),
                    self.colorize(&rec.skill, Color::White),
                    rec.priority,
                    rec.reason
                ));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Detected Skills", 2));
            for skill in &report.extracted_skills {
                output.push_str(&format!(
                    "  • {} [{}] level: {}, confidence: {:.2}\n",
                    skill.name, skill.category, skill.level, skill.confidence
                ));
            }

            output.push_str(&self.format_header("Category Coverage", 3));
            for coverage in category_breakdown(report) {
                output.push_str(&format!(
                    "  • {}: {}/{} ({:.0}%)\n",
                    coverage.category,
                    coverage.matched,
                    coverage.required,
                    coverage.percentage()
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &SkillGapReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &SkillGapReport) -> Result<String> {
        let mut output = String::new();
        let band = ScoreBand::from_score(report.match_score);

        output.push_str(&format!("# Skill Gap Analysis: {}\n\n", report.role_label));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Role id:** `{}`\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.role_id
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {:.1}% ({})\n\n",
            report.match_score,
            band.label()
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", band.verdict()));

        output.push_str("| Category | Matched | Required |\n");
        output.push_str("|----------|---------|----------|\n");
        for coverage in category_breakdown(report) {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                coverage.category, coverage.matched, coverage.required
            ));
        }
        output.push('\n');

        if !report.matched_skills.is_empty() {
            output.push_str("## Matched Skills\n\n");
            for skill in &report.matched_skills {
                output.push_str(&format!("- {}\n", skill.name));
            }
            output.push('\n');
        }

        if !report.gap_skills.is_empty() {
            output.push_str("## Skill Gaps\n\n");
            for skill in &report.gap_skills {
                output.push_str(&format!("- {}\n", skill.name));
            }
            output.push('\n');
        }

        if !report.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for rec in &report.recommendations {
                output.push_str(&format!(
                    "- **{}** ({}): {}\n",
                    rec.skill, rec.priority, rec.reason
                ));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &SkillGapReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_skills{}.{}", base_name, timestamp_suffix, extension)
}
