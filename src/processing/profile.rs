//! Student profile attributes consumed by the scoring pipeline

use crate::catalog::roles::Role;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const ACADEMIC_SCORE_RANGE: (f64, f64) = (5.0, 10.0);
pub const PROJECT_COUNT_MAX: u8 = 5;
pub const RATING_RANGE: (u8, u8) = (1, 10);
pub const HACKATHON_COUNT_MAX: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Academic score on a 10-point scale (5.0 - 10.0)
    pub academic_score: f64,
    pub has_internship: bool,
    /// Completed projects (0 - 5)
    pub project_count: u8,
    /// Self-rated communication (1 - 10)
    pub communication: u8,
    /// Coding practice / DSA score (1 - 10)
    pub coding_score: u8,
    /// Hackathons or certifications (0 - 5)
    pub hackathon_count: u8,
    pub role: Role,
}

impl Profile {
    /// Check every attribute against its documented range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = ACADEMIC_SCORE_RANGE;
        if !self.academic_score.is_finite() || self.academic_score < min || self.academic_score > max {
            return Err(ValidationError::OutOfRange {
                field: "academic score",
                min: min.to_string(),
                max: max.to_string(),
                value: self.academic_score.to_string(),
            });
        }

        check_count("project count", self.project_count, 0, PROJECT_COUNT_MAX)?;
        check_count("communication rating", self.communication, RATING_RANGE.0, RATING_RANGE.1)?;
        check_count("coding score", self.coding_score, RATING_RANGE.0, RATING_RANGE.1)?;
        check_count("hackathon count", self.hackathon_count, 0, HACKATHON_COUNT_MAX)?;

        Ok(())
    }

    pub fn internship_flag(&self) -> f64 {
        if self.has_internship {
            1.0
        } else {
            0.0
        }
    }
}

fn check_count(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min: min.to_string(),
            max: max.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
