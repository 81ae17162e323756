//! Analysis engine tying validation, extraction, scoring and explanation together

use crate::catalog::roles::{Role, RoleDifficultyTable};
use crate::error::{PlacementError, Result};
use crate::model::classifier::PlacementClassifier;
use crate::model::predictor::{self, CompanyReadiness};
use crate::processing::explanation::{self, Explanation, ExplanationInput};
use crate::processing::keywords::{self, AtsOverlap};
use crate::processing::matching::{self, SkillMatch};
use crate::processing::profile::Profile;
use crate::processing::quality;
use crate::processing::skills::{self, SkillSet};
use crate::processing::validation;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Main analysis engine; one instance serves any number of requests.
#[derive(Clone)]
pub struct AnalysisEngine {
    classifier: Arc<dyn PlacementClassifier>,
    difficulty: RoleDifficultyTable,
}

/// One scoring request. `job_text` of `None` (or blank) falls back to the
/// role's canned description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub profile: Profile,
    pub resume_text: String,
    pub job_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub role: Role,
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub skill_match: SkillMatch,
    pub resume_quality: f64,
    pub ats: AtsOverlap,
    pub placement_probability: f64,
    pub company_readiness: Vec<CompanyReadiness>,
    pub explanation: Explanation,
}

impl ScoringResult {
    pub fn match_percentage(&self) -> f64 {
        self.skill_match.match_percentage
    }

    pub fn missing_skills(&self) -> &SkillSet {
        &self.skill_match.missing_skills
    }
}

impl AnalysisEngine {
    pub fn new(classifier: Arc<dyn PlacementClassifier>) -> Self {
        Self::with_difficulty(classifier, RoleDifficultyTable::default())
    }

    pub fn with_difficulty(
        classifier: Arc<dyn PlacementClassifier>,
        difficulty: RoleDifficultyTable,
    ) -> Self {
        Self {
            classifier,
            difficulty,
        }
    }

    pub fn classifier_description(&self) -> String {
        self.classifier.describe()
    }

    /// Job text actually scored against: the caller's text when present,
    /// otherwise the role's canned description.
    pub fn resolve_job_text(role: Role, job_text: Option<&str>) -> Result<String> {
        match job_text.map(str::trim).filter(|text| !text.is_empty()) {
            Some(text) => Ok(text.to_string()),
            None => role.description().map(str::to_string).ok_or_else(|| {
                PlacementError::MissingInput(format!(
                    "A job description is required for role '{}'",
                    role
                ))
            }),
        }
    }

    /// Score one request. Every validation error is raised before the
    /// classifier is consulted.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<ScoringResult> {
        let profile = &request.profile;
        profile.validate()?;
        let job_text = Self::resolve_job_text(profile.role, request.job_text.as_deref())?;
        validation::validate_resume_text(&request.resume_text)?;

        let (resume_skills, job_skills) = skills::extract_skills(&request.resume_text, &job_text);
        let ats = keywords::ats_overlap(&job_text, &request.resume_text);
        let resume_quality = quality::resume_quality(&request.resume_text, &resume_skills);
        let skill_match = matching::compare_skills(&resume_skills, &job_skills);
        debug!(
            "match {}%, ats {}%, quality {}",
            skill_match.match_percentage, ats.score, resume_quality
        );

        let placement_probability = predictor::estimate(
            self.classifier.as_ref(),
            profile,
            skill_match.match_percentage,
            resume_quality,
            &self.difficulty,
        )?;
        let company_readiness = predictor::company_readiness(placement_probability);
        debug!("placement probability {}% for {}", placement_probability, profile.role);

        let explanation_input = ExplanationInput::new(
            profile,
            resume_skills.len(),
            skill_match.match_percentage,
            resume_quality,
            placement_probability,
        );
        let explanation = explanation::explain(&explanation_input, &skill_match.missing_skills);

        Ok(ScoringResult {
            role: profile.role,
            resume_skills,
            job_skills,
            skill_match,
            resume_quality,
            ats,
            placement_probability,
            company_readiness,
            explanation,
        })
    }
}
