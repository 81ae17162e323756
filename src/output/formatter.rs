//! Output formatters for console, JSON and Markdown reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::predictor::ReadinessLabel;
use crate::output::report::PlacementReport;
use crate::processing::explanation::{ReadinessBand, SkillProfileChart};
use crate::processing::skills::SkillSet;
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::Path;

const BAR_WIDTH: usize = 20;

pub trait OutputFormatter {
    fn format_report(&self, report: &PlacementReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Limits applied to long keyword and skill lists outside detailed mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    pub keywords: usize,
    pub skills: usize,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            keywords: 10,
            skills: 6,
        }
    }
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    limits: ListLimits,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
    limits: ListLimits,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn skill_list(skills: &SkillSet, limit: usize) -> String {
    if skills.is_empty() {
        return "none".to_string();
    }
    let mut names: Vec<String> = skills.iter().take(limit).map(|s| s.title()).collect();
    if skills.len() > limit {
        names.push("...".to_string());
    }
    names.join(", ")
}

fn keyword_list(keywords: &BTreeSet<String>, limit: usize) -> String {
    if keywords.is_empty() {
        return "none".to_string();
    }
    let mut shown: Vec<&str> = keywords.iter().take(limit).map(String::as_str).collect();
    if keywords.len() > limit {
        shown.push("...");
    }
    shown.join(", ")
}

fn bar(value: f64) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn chart_rows(chart: &SkillProfileChart) -> [(&'static str, f64); 4] {
    [
        ("Academic", chart.academic),
        ("Projects", chart.projects),
        ("Skill Match", chart.skill_match),
        ("Communication", chart.communication),
    ]
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, limits: ListLimits) -> Self {
        Self {
            use_colors,
            detailed,
            limits,
        }
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

    fn band_color(band: ReadinessBand) -> Color {
        match band {
            ReadinessBand::High => Color::Green,
            ReadinessBand::Moderate => Color::Yellow,
            ReadinessBand::Low => Color::Red,
        }
    }

    fn label_color(label: ReadinessLabel) -> Color {
        match label {
            ReadinessLabel::Ready => Color::Green,
            ReadinessLabel::AlmostReady => Color::Yellow,
            ReadinessLabel::NeedsImprovement => Color::Red,
        }
    }

    fn push_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &PlacementReport) -> Result<String> {
        let summary = &report.summary;
        let result = &report.result;
        let explanation = &result.explanation;
        let mut output = String::new();

        output.push_str(&self.format_header("PLACEMENT READINESS REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Role: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            result.role
        ));

        output.push_str(&self.format_header("Summary", 2));
        let band_color = Self::band_color(summary.readiness);
        output.push_str(&format!(
            "Placement Probability: {}\n",
            self.colorize(&format!("{:.2}%", summary.placement_probability), band_color)
        ));
        output.push_str(&format!("{}\n", self.colorize(&summary.headline, band_color)));
        output.push_str(&format!("Skill Match: {:.2}%\n", summary.match_percentage));
        output.push_str(&format!("ATS Score: {:.2}%\n", summary.ats_score));
        output.push_str(&format!(
            "Resume Quality: {:.2}/10 ({})\n",
            summary.resume_quality, explanation.resume_strength
        ));
        output.push_str(&format!(
            "Recruiter Verdict: {}\n",
            self.colorize(&summary.verdict, Color::Cyan)
        ));
        if let Some(notice) = &explanation.skill_notice {
            output.push_str(&format!("{}\n", self.colorize(notice, Color::Yellow)));
        }

        output.push_str(&self.format_header("Skill Profile", 2));
        for (label, value) in chart_rows(&explanation.chart) {
            output.push_str(&format!("  {:<14} {} {:>5.1}\n", label, bar(value), value));
        }

        output.push_str(&self.format_header("Skills", 2));
        let limit = if self.detailed { usize::MAX } else { self.limits.skills };
        output.push_str(&format!("Resume skills:  {}\n", skill_list(&result.resume_skills, limit)));
        output.push_str(&format!("Job skills:     {}\n", skill_list(&result.job_skills, limit)));
        output.push_str(&format!(
            "Missing skills: {}\n",
            self.colorize(&skill_list(result.missing_skills(), limit), Color::Red)
        ));

        output.push_str(&self.format_header("Company Readiness", 2));
        for company in &result.company_readiness {
            output.push_str(&format!(
                "  {:<26} {:>5.1}%  {}\n",
                company.company,
                company.score,
                self.colorize(company.label.as_str(), Self::label_color(company.label))
            ));
        }

        output.push_str(&self.format_header("Why This Score", 2));
        for factor in &explanation.factors {
            output.push_str(&format!("  • {}\n", factor));
        }

        self.push_list(&mut output, "Strengths", &explanation.strengths, Color::Green);
        self.push_list(&mut output, "Weaknesses", &explanation.weaknesses, Color::Yellow);
        self.push_list(&mut output, "Next Steps", &explanation.next_steps, Color::White);
        self.push_list(&mut output, "Learning Roadmap", &explanation.roadmap, Color::Cyan);

        if self.detailed {
            output.push_str(&self.format_header("Keyword Analysis", 2));
            output.push_str(&format!(
                "Matched keywords: {}\n",
                keyword_list(&result.ats.matched_keywords, usize::MAX)
            ));
            output.push_str(&format!(
                "Missing keywords: {}\n",
                keyword_list(&result.ats.missing_keywords, usize::MAX)
            ));
        } else {
            output.push_str(&format!(
                "\nMissing keywords: {}\n",
                keyword_list(&result.ats.missing_keywords, self.limits.keywords)
            ));
        }

        output.push_str(&format!(
            "\n{} Placement Readiness v{} | Classifier: {}\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.analyzer_version,
            report.metadata.classifier
        ));

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
    fn format_report(&self, report: &PlacementReport) -> Result<String> {
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
    pub fn new(include_metadata: bool, limits: ListLimits) -> Self {
        Self {
            include_metadata,
            limits,
        }
    }

    fn bullet_section(output: &mut String, title: &str, items: &[String]) {
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &PlacementReport) -> Result<String> {
        let summary = &report.summary;
        let result = &report.result;
        let explanation = &result.explanation;
        let mut output = String::new();

        output.push_str("# Placement Readiness Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Role:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                result.role
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Placement Probability:** {:.2}% ({})\n\n",
            summary.placement_probability, summary.headline
        ));
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Skill Match | {:.2}% |\n", summary.match_percentage));
        output.push_str(&format!("| ATS Score | {:.2}% |\n", summary.ats_score));
        output.push_str(&format!("| Resume Quality | {:.2}/10 |\n\n", summary.resume_quality));
        output.push_str(&format!("**Verdict:** {}\n\n", summary.verdict));
        output.push_str(&format!("**Resume:** {}\n\n", explanation.resume_strength));
        if let Some(notice) = &explanation.skill_notice {
            output.push_str(&format!("> {}\n\n", notice));
        }

        output.push_str("## Skill Profile\n\n");
        output.push_str("| Dimension | Score |\n");
        output.push_str("|-----------|-------|\n");
        for (label, value) in chart_rows(&explanation.chart) {
            output.push_str(&format!("| {} | {:.1} |\n", label, value));
        }
        output.push('\n');

        output.push_str("## Skills\n\n");
        output.push_str(&format!(
            "- **Resume:** {}\n",
            skill_list(&result.resume_skills, self.limits.skills)
        ));
        output.push_str(&format!(
            "- **Job:** {}\n",
            skill_list(&result.job_skills, self.limits.skills)
        ));
        output.push_str(&format!(
            "- **Missing:** {}\n",
            skill_list(result.missing_skills(), self.limits.skills)
        ));
        output.push_str(&format!(
            "- **Missing keywords:** {}\n\n",
            keyword_list(&result.ats.missing_keywords, self.limits.keywords)
        ));

        output.push_str("## Company Readiness\n\n");
        output.push_str("| Company | Score | Status |\n");
        output.push_str("|---------|-------|--------|\n");
        for company in &result.company_readiness {
            output.push_str(&format!(
                "| {} | {:.1}% | {} |\n",
                company.company,
                company.score,
                company.label.as_str()
            ));
        }
        output.push('\n');

        output.push_str("## Explanation\n\n");
        Self::bullet_section(&mut output, "Why This Score", &explanation.factors);
        Self::bullet_section(&mut output, "Strengths", &explanation.strengths);
        Self::bullet_section(&mut output, "Weaknesses", &explanation.weaknesses);
        Self::bullet_section(&mut output, "Next Steps", &explanation.next_steps);
        Self::bullet_section(&mut output, "Learning Roadmap", &explanation.roadmap);

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Placement Readiness v{} using {}*\n",
                report.metadata.analyzer_version, report.metadata.classifier
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, ListLimits::default())
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        limits: ListLimits,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, limits),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, limits),
        }
    }

    pub fn generate_report(&self, report: &PlacementReport, format: &OutputFormat) -> Result<String> {
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
        .map(|stem| {
            stem.to_string_lossy()
                .chars()
                .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
                .collect::<String>()
        })
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "resume".to_string());

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
    format!("{}_readiness{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::Role;
    use crate::model::classifier::LogisticClassifier;
    use crate::output::report::ReportMetadata;
    use crate::processing::analyzer::{AnalysisEngine, AnalysisRequest};
    use crate::processing::profile::Profile;
    use crate::processing::skills::Skill;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn report() -> PlacementReport {
        let engine = AnalysisEngine::new(Arc::new(LogisticClassifier::new([0.9, 1.1, 0.25, 0.02], -9.0)));
        let request = AnalysisRequest {
            profile: Profile {
                academic_score: 7.0,
                has_internship: false,
                project_count: 2,
                communication: 6,
                coding_score: 5,
                hackathon_count: 1,
                role: Role::BackendDeveloper,
            },
            resume_text: "Backend student with Python and SQL projects, 2 internships applied".to_string(),
            job_text: None,
        };
        let result = engine.analyze(&request).unwrap();
        PlacementReport::new(result, ReportMetadata::new("pasted text", "Backend Developer description", "test model"))
    }

    #[test]
    fn test_console_without_colors() {
        let formatter = ConsoleFormatter::new(false, false, ListLimits::default());
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("PLACEMENT READINESS REPORT"));
        assert!(output.contains("Company Readiness"));
        assert!(output.contains("Amazon SDE"));
        assert!(output.contains("Do mock interviews weekly"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_is_parseable() {
        let output = JsonFormatter::new(false).format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["summary"]["placement_probability"].is_number());
        assert_eq!(value["result"]["company_readiness"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new(true, ListLimits::default())
            .format_report(&report())
            .unwrap();
        assert!(output.starts_with("# Placement Readiness Report"));
        assert!(output.contains("## Company Readiness"));
        assert!(output.contains("| Infosys Graduate Engineer |"));
        assert!(output.contains("### Learning Roadmap"));
    }

    #[test]
    fn test_list_truncation() {
        let keywords: BTreeSet<String> = ["alpha", "beta", "gamma"].iter().map(|s| s.to_string()).collect();
        assert_eq!(keyword_list(&keywords, 2), "alpha, beta, ...");
        assert_eq!(keyword_list(&BTreeSet::new(), 2), "none");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(100.0), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(150.0), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "docs/cv.pdf", false),
            "cv_readiness.json"
        );
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "", false), "resume_readiness.md");
        assert_eq!(
            suggest_filename(&OutputFormat::Console, "demo strong resume", false),
            "demo_strong_resume_readiness.txt"
        );
    }

    #[test]
    fn test_skill_lists_use_titles() {
        let skills = SkillSet::from([Skill::MachineLearning, Skill::Sql, Skill::DataAnalysis]);
        assert_eq!(skill_list(&skills, 6), "Sql, Machine Learning, Data Analysis");
        assert_eq!(skill_list(&skills, 1), "Sql, ...");
        assert_eq!(skill_list(&SkillSet::new(), 6), "none");
    }

    #[test]
    fn test_save_report_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# report");
    }
}
