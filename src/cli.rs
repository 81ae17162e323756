//! CLI interface for the placement readiness analyzer

use crate::catalog::demo::DemoCandidate;
use crate::catalog::roles::Role;
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "placement-readiness")]
#[command(about = "Placement readiness scoring for students")]
#[command(long_about = "Estimate placement probability from a student profile, resume and job description, with company readiness and an explained improvement plan")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Classifier artifact to load instead of the configured one
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile against a resume and job description
    Analyze(AnalyzeArgs),

    /// Score one of the bundled demo candidates
    Demo {
        /// strong, average or weak
        #[arg(value_parser = parse_demo_candidate)]
        candidate: DemoCandidate,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List target roles and their difficulty multipliers
    Roles,

    /// Classifier artifact management
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Academic score on a 10-point scale (5.0 - 10.0)
    #[arg(long, value_parser = parse_academic_score)]
    pub academic: f64,

    /// Completed at least one internship
    #[arg(long)]
    pub internship: bool,

    /// Number of projects (0 - 5)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub projects: u8,

    /// Communication rating (1 - 10)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub communication: u8,

    /// Coding practice / DSA score (1 - 10)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub coding: u8,

    /// Hackathons or certifications (0 - 5)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub hackathons: u8,

    /// Target role, by name or slug (e.g. "ml-engineer")
    #[arg(long, default_value = "Custom", value_parser = parse_role)]
    pub role: Role,

    /// Path to resume file (PDF, TXT, MD)
    #[arg(short, long, conflicts_with = "resume_text")]
    pub resume: Option<PathBuf>,

    /// Resume text pasted directly
    #[arg(long)]
    pub resume_text: Option<String>,

    /// Path to job description file (TXT, MD)
    #[arg(short, long, conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description text pasted directly
    #[arg(long)]
    pub job_text: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to a file, or into a directory under a generated name
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Output detailed analysis
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the classifier that would be loaded
    Info,

    /// Install a classifier artifact into the models directory
    Install {
        /// Path to a classifier artifact (JSON)
        path: PathBuf,

        /// Overwrite an installed artifact
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

fn parse_academic_score(value: &str) -> Result<f64, String> {
    let score: f64 = value
        .parse()
        .map_err(|_| format!("Invalid academic score: {}", value))?;
    if !score.is_finite() || !(5.0..=10.0).contains(&score) {
        return Err(format!("Academic score must be between 5.0 and 10.0, got {}", value));
    }
    Ok(score)
}

fn parse_role(value: &str) -> Result<Role, String> {
    value.parse()
}

fn parse_demo_candidate(value: &str) -> Result<DemoCandidate, String> {
    value.parse()
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
