//! Skill-match percentage between resume and job description

use crate::processing::round_to;
use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Share of job skills found in the resume (0-100)
    pub match_percentage: f64,
    pub matched_skills: SkillSet,
    /// Complete set of job skills absent from the resume
    pub missing_skills: SkillSet,
}

pub fn match_percentage(resume_skills: &SkillSet, job_skills: &SkillSet) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }
    let matched = resume_skills.intersection(job_skills).count();
    round_to(matched as f64 / job_skills.len() as f64 * 100.0, 2)
}

pub fn missing_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillSet {
    job_skills.difference(resume_skills).copied().collect()
}

pub fn compare_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillMatch {
    SkillMatch {
        match_percentage: match_percentage(resume_skills, job_skills),
        matched_skills: job_skills.intersection(resume_skills).copied().collect(),
        missing_skills: missing_skills(resume_skills, job_skills),
    }
}
