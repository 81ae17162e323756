//! ATS-style keyword extraction and overlap scoring

use crate::processing::round_to;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "with", "for", "a", "an", "to", "of", "in",
        "role", "candidate", "should", "experience", "looking",
        "we", "are", "required", "skills", "job", "work",
    ]
    .into_iter()
    .collect()
});

const MIN_KEYWORD_CHARS: usize = 3;

/// Keyword overlap between a job description and a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsOverlap {
    /// Percentage of job keywords present in the resume (0-100)
    pub score: f64,
    pub matched_keywords: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
}

/// Lowercased content words of `text`, commas treated as whitespace.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(*word))
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

pub fn ats_overlap(job_text: &str, resume_text: &str) -> AtsOverlap {
    let job_keywords = extract_keywords(job_text);
    let resume_keywords = extract_keywords(resume_text);

    let matched_keywords: BTreeSet<String> = job_keywords
        .intersection(&resume_keywords)
        .cloned()
        .collect();
    let missing_keywords: BTreeSet<String> = job_keywords
        .difference(&resume_keywords)
        .cloned()
        .collect();

    let score = if job_keywords.is_empty() {
        0.0
    } else {
        round_to(matched_keywords.len() as f64 / job_keywords.len() as f64 * 100.0, 2)
    };

    AtsOverlap {
        score,
        matched_keywords,
        missing_keywords,
    }
}
