//! Placement probability estimation
//!
//! The classifier's probability is scaled, topped up with profile bonuses,
//! then scaled down by the role multiplier and the penalties. The order of
//! the multiplicative steps is part of the scoring contract.

use crate::catalog::companies::{CompanyTarget, COMPANY_TARGETS};
use crate::catalog::roles::RoleDifficultyTable;
use crate::error::{PlacementError, Result};
use crate::model::classifier::{FeatureVector, PlacementClassifier};
use crate::processing::profile::Profile;
use crate::processing::round_to;
use log::debug;
use serde::{Deserialize, Serialize};

pub const PROBABILITY_FLOOR: f64 = 5.0;
pub const PROBABILITY_CEILING: f64 = 95.0;

const CLASSIFIER_SCALE: f64 = 60.0;
const PROJECT_BONUS: f64 = 1.2;
const CODING_BONUS: f64 = 0.8;
const QUALITY_BONUS: f64 = 0.7;
const HACKATHON_BONUS: f64 = 0.6;
const NO_INTERNSHIP_PENALTY: f64 = 0.9;
const LOW_ACADEMIC_THRESHOLD: f64 = 6.5;
const LOW_ACADEMIC_PENALTY: f64 = 0.85;
const LOW_MATCH_THRESHOLD: f64 = 40.0;
const LOW_MATCH_PENALTY: f64 = 0.8;

/// Classifier input for a profile and its skill match.
pub fn feature_vector(profile: &Profile, match_percentage: f64) -> FeatureVector {
    FeatureVector::new(
        profile.academic_score,
        profile.internship_flag(),
        f64::from(profile.communication),
        match_percentage,
    )
}

/// Blend a raw classifier probability with the profile adjustments, before
/// clamping and rounding.
pub fn blend_probability(
    raw_probability: f64,
    profile: &Profile,
    match_percentage: f64,
    resume_quality: f64,
    role_multiplier: f64,
) -> f64 {
    let mut probability = raw_probability * CLASSIFIER_SCALE;
    probability += f64::from(profile.project_count) * PROJECT_BONUS;
    probability += f64::from(profile.coding_score) * CODING_BONUS;
    probability += resume_quality * QUALITY_BONUS;
    probability += f64::from(profile.hackathon_count) * HACKATHON_BONUS;

    probability *= role_multiplier;

    if !profile.has_internship {
        probability *= NO_INTERNSHIP_PENALTY;
    }
    if profile.academic_score < LOW_ACADEMIC_THRESHOLD {
        probability *= LOW_ACADEMIC_PENALTY;
    }
    if match_percentage < LOW_MATCH_THRESHOLD {
        probability *= LOW_MATCH_PENALTY;
    }

    probability
}

/// Final placement probability in [5, 95], rounded to two decimals.
pub fn estimate(
    classifier: &dyn PlacementClassifier,
    profile: &Profile,
    match_percentage: f64,
    resume_quality: f64,
    difficulty: &RoleDifficultyTable,
) -> Result<f64> {
    let features = feature_vector(profile, match_percentage);
    features.ensure_finite()?;

    let raw_probability = classifier.predict_proba(&features)?;
    if !raw_probability.is_finite() || !(0.0..=1.0).contains(&raw_probability) {
        return Err(PlacementError::Estimation(format!(
            "Classifier returned an invalid probability: {}",
            raw_probability
        )));
    }

    let role_multiplier = difficulty.get(profile.role);
    let blended = blend_probability(
        raw_probability,
        profile,
        match_percentage,
        resume_quality,
        role_multiplier,
    );
    debug!(
        "raw probability {:.4}, role multiplier {}, blended {:.4}",
        raw_probability, role_multiplier, blended
    );

    Ok(round_to(blended.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING), 2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLabel {
    Ready,
    AlmostReady,
    NeedsImprovement,
}

impl ReadinessLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ReadinessLabel::Ready
        } else if score >= 65.0 {
            ReadinessLabel::AlmostReady
        } else {
            ReadinessLabel::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLabel::Ready => "Ready",
            ReadinessLabel::AlmostReady => "Almost Ready",
            ReadinessLabel::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReadiness {
    pub company: String,
    pub score: f64,
    pub label: ReadinessLabel,
}

pub fn company_score(probability: f64, target: &CompanyTarget) -> f64 {
    round_to(
        (probability / target.divisor).clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING),
        1,
    )
}

/// Readiness for every company target, independent of the selected role.
pub fn company_readiness(probability: f64) -> Vec<CompanyReadiness> {
    COMPANY_TARGETS
        .iter()
        .map(|target| {
            let score = company_score(probability, target);
            CompanyReadiness {
                company: target.name.to_string(),
                score,
                label: ReadinessLabel::from_score(score),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::{Role, ROLE_DIFFICULTY};

    struct FixedClassifier(f64);

    impl PlacementClassifier for FixedClassifier {
        fn predict_proba(&self, _features: &FeatureVector) -> Result<f64> {
            Ok(self.0)
        }

        fn describe(&self) -> String {
            format!("fixed {}", self.0)
        }
    }

    struct FailingClassifier;

    impl PlacementClassifier for FailingClassifier {
        fn predict_proba(&self, _features: &FeatureVector) -> Result<f64> {
            Err(PlacementError::Estimation("model unavailable".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn profile() -> Profile {
        Profile {
            academic_score: 8.0,
            has_internship: true,
            project_count: 3,
            communication: 7,
            coding_score: 6,
            hackathon_count: 2,
            role: Role::Custom,
        }
    }

    #[test]
    fn test_blend_without_penalties() {
        // 0.5*60 + 3*1.2 + 6*0.8 + 5*0.7 + 2*0.6 = 43.1
        let p = blend_probability(0.5, &profile(), 75.0, 5.0, 1.0);
        assert!((p - 43.1).abs() < 1e-9);
    }

    #[test]
    fn test_blend_applies_all_penalties_in_order() {
        let mut weak = profile();
        weak.has_internship = false;
        weak.academic_score = 6.0;
        let p = blend_probability(0.5, &weak, 30.0, 5.0, 1.1);
        let expected = 43.1 * 1.1 * 0.9 * 0.85 * 0.8;
        assert!((p - expected).abs() < 1e-9);
    }

    #[test]
    fn test_penalty_thresholds_are_strict() {
        let mut edge = profile();
        edge.academic_score = 6.5;
        let at_threshold = blend_probability(0.5, &edge, 40.0, 5.0, 1.0);
        assert!((at_threshold - 43.1).abs() < 1e-9);
    }

    #[test]
    fn test_more_projects_increase_blend() {
        let mut previous = f64::MIN;
        for projects in 0..=5 {
            let mut p = profile();
            p.project_count = projects;
            let blended = blend_probability(0.4, &p, 50.0, 6.0, 1.0);
            assert!(blended > previous);
            previous = blended;
        }
    }

    #[test]
    fn test_estimate_clamps_high() {
        let mut strong = profile();
        strong.project_count = 5;
        strong.coding_score = 10;
        strong.hackathon_count = 5;
        strong.role = Role::GoogleSwe;
        let p = estimate(&FixedClassifier(1.0), &strong, 100.0, 10.0, &ROLE_DIFFICULTY).unwrap();
        assert_eq!(p, 95.0);
    }

    #[test]
    fn test_estimate_clamps_low() {
        let weak = Profile {
            academic_score: 5.0,
            has_internship: false,
            project_count: 0,
            communication: 1,
            coding_score: 1,
            hackathon_count: 0,
            role: Role::StartupIntern,
        };
        let p = estimate(&FixedClassifier(0.0), &weak, 0.0, 0.0, &ROLE_DIFFICULTY).unwrap();
        assert_eq!(p, 5.0);
    }

    #[test]
    fn test_estimate_uses_role_multiplier() {
        let mut p = profile();
        p.role = Role::DataScientist;
        let estimate = estimate(&FixedClassifier(0.5), &p, 75.0, 5.0, &ROLE_DIFFICULTY).unwrap();
        assert_eq!(estimate, round_to(43.1 * 1.2, 2));
    }

    #[test]
    fn test_estimate_propagates_classifier_failure() {
        let err = estimate(&FailingClassifier, &profile(), 75.0, 5.0, &ROLE_DIFFICULTY).unwrap_err();
        assert!(matches!(err, PlacementError::Estimation(_)));
    }

    #[test]
    fn test_estimate_rejects_out_of_range_probability() {
        let err = estimate(&FixedClassifier(1.5), &profile(), 75.0, 5.0, &ROLE_DIFFICULTY).unwrap_err();
        assert!(err.to_string().contains("invalid probability"));
    }

    #[test]
    fn test_company_readiness() {
        let companies = company_readiness(60.0);
        let names: Vec<&str> = companies.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(names, ["Amazon SDE", "Google SWE", "Infosys Graduate Engineer", "Startup Intern"]);
        assert_eq!(companies[0].score, 50.0);
        assert_eq!(companies[1].score, 48.0);
        assert_eq!(companies[2].score, 66.7);
        assert_eq!(companies[2].label, ReadinessLabel::AlmostReady);
        assert_eq!(companies[3].score, 75.0);
    }

    #[test]
    fn test_company_readiness_clamped() {
        let companies = company_readiness(95.0);
        assert_eq!(companies[3].score, 95.0);
        assert_eq!(companies[3].label, ReadinessLabel::Ready);

        let scores: Vec<f64> = company_readiness(5.0).iter().map(|c| c.score).collect();
        assert_eq!(scores, [5.0, 5.0, 5.6, 6.2]);
    }
}
