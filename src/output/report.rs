//! Report structures wrapping a scoring result with presentation data

use crate::processing::analyzer::ScoringResult;
use crate::processing::explanation::ReadinessBand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete placement readiness report, ready for any formatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementReport {
    pub summary: ReportSummary,
    pub result: ScoringResult,
    pub metadata: ReportMetadata,
}

/// Headline numbers shown at the top of every format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub placement_probability: f64,
    pub readiness: ReadinessBand,
    pub headline: String,
    pub match_percentage: f64,
    pub ats_score: f64,
    pub resume_quality: f64,
    pub verdict: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    /// File path or "pasted text"
    pub resume_source: String,
    /// File path, "pasted text" or "<role> description"
    pub job_source: String,
    pub classifier: String,
}

impl PlacementReport {
    pub fn new(result: ScoringResult, metadata: ReportMetadata) -> Self {
        let summary = ReportSummary {
            placement_probability: result.placement_probability,
            readiness: result.explanation.readiness,
            headline: result.explanation.readiness.headline().to_string(),
            match_percentage: result.match_percentage(),
            ats_score: result.ats.score,
            resume_quality: result.resume_quality,
            verdict: result.explanation.recruiter_recommendation.clone(),
        };

        Self {
            summary,
            result,
            metadata,
        }
    }
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>, classifier: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            classifier: classifier.into(),
        }
    }
}
