//! Human-readable explanation of a score
//!
//! Every statement comes from a row in [`RULES`]. Rows are evaluated
//! independently; their order only affects display grouping.

use crate::processing::profile::Profile;
use crate::processing::skills::{Skill, SkillSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Why the score came out the way it did
    Factor,
    Strength,
    Weakness,
    NextStep,
}

/// Everything the rules are allowed to look at.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationInput {
    pub academic_score: f64,
    pub has_internship: bool,
    pub project_count: u8,
    pub communication: u8,
    pub coding_score: u8,
    pub hackathon_count: u8,
    pub resume_skill_count: usize,
    pub match_percentage: f64,
    pub resume_quality: f64,
    pub probability: f64,
}

impl ExplanationInput {
    pub fn new(
        profile: &Profile,
        resume_skill_count: usize,
        match_percentage: f64,
        resume_quality: f64,
        probability: f64,
    ) -> Self {
        Self {
            academic_score: profile.academic_score,
            has_internship: profile.has_internship,
            project_count: profile.project_count,
            communication: profile.communication,
            coding_score: profile.coding_score,
            hackathon_count: profile.hackathon_count,
            resume_skill_count,
            match_percentage,
            resume_quality,
            probability,
        }
    }
}

pub struct ExplanationRule {
    pub category: Category,
    pub applies: fn(&ExplanationInput) -> bool,
    pub message: &'static str,
}

pub static RULES: &[ExplanationRule] = &[
    // Factors
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.academic_score >= 8.0,
        message: "Strong academic performance boosted your score.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.academic_score < 6.5,
        message: "Low academic score reduced your placement chances.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.has_internship,
        message: "Internship experience increased industry readiness.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| !i.has_internship,
        message: "No internship experience lowered real-world exposure.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.match_percentage >= 70.0,
        message: "Your skills match the job requirements well.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.match_percentage < 40.0,
        message: "Low skill match with job description reduced score.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.communication >= 7,
        message: "Good communication skills support your profile.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.communication <= 4,
        message: "Weak communication skills held your score back.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.coding_score >= 7,
        message: "Strong DSA/problem solving is a big advantage.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.coding_score <= 3,
        message: "Weak DSA/problem solving held your score back.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.hackathon_count >= 2,
        message: "Hackathons/certifications improved profile strength.",
    },
    ExplanationRule {
        category: Category::Factor,
        applies: |i| i.resume_quality >= 7.0,
        message: "Well-structured resume improved recruiter impression.",
    },
    // Strengths
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.academic_score >= 8.0,
        message: "Strong academic performance",
    },
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.has_internship,
        message: "Internship experience adds real-world exposure",
    },
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.resume_skill_count >= 4,
        message: "Good skill coverage for the role",
    },
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.match_percentage >= 70.0,
        message: "Good skill match with job role",
    },
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.coding_score >= 7,
        message: "Strong problem-solving ability",
    },
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.hackathon_count >= 2,
        message: "Active in hackathons / certifications",
    },
    ExplanationRule {
        category: Category::Strength,
        applies: |i| i.resume_quality >= 7.0,
        message: "Strong resume quality",
    },
    // Weaknesses
    ExplanationRule {
        category: Category::Weakness,
        applies: |i| i.academic_score < 7.0,
        message: "Low academic score may affect shortlist chances",
    },
    ExplanationRule {
        category: Category::Weakness,
        applies: |i| !i.has_internship,
        message: "No internship experience",
    },
    ExplanationRule {
        category: Category::Weakness,
        applies: |i| i.resume_skill_count <= 2,
        message: "Limited technical skills detected",
    },
    ExplanationRule {
        category: Category::Weakness,
        applies: |i| i.match_percentage < 50.0,
        message: "Resume not aligned with job role",
    },
    ExplanationRule {
        category: Category::Weakness,
        applies: |i| i.coding_score <= 5,
        message: "Improve coding/problem-solving skills",
    },
    // Next steps
    ExplanationRule {
        category: Category::NextStep,
        applies: |i| i.match_percentage < 60.0,
        message: "Add missing skills from job description",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |i| !i.has_internship,
        message: "Try 1-2 internships or open-source projects",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |i| i.coding_score < 7,
        message: "Solve 150+ DSA problems on LeetCode",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |i| i.resume_quality < 6.0,
        message: "Add quantified achievements (numbers, impact)",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |i| i.hackathon_count < 2,
        message: "Participate in hackathons or certifications",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |i| i.academic_score < 7.5,
        message: "Focus on academics next semester",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |_| true,
        message: "Do mock interviews weekly",
    },
    ExplanationRule {
        category: Category::NextStep,
        applies: |_| true,
        message: "Build 1 real-world project",
    },
];

const NO_STRENGTHS: &str = "Keep hustling hard!";
const NO_WEAKNESSES: &str = "No major weak areas, keep growing";
const NO_SKILL_GAPS: &str = "No major skill gaps. Focus on advanced projects.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessBand {
    High,
    Moderate,
    Low,
}

impl ReadinessBand {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 80.0 {
            ReadinessBand::High
        } else if probability >= 50.0 {
            ReadinessBand::Moderate
        } else {
            ReadinessBand::Low
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ReadinessBand::High => "High Placement Readiness",
            ReadinessBand::Moderate => "Moderate Placement Readiness",
            ReadinessBand::Low => "Low Placement Readiness - Improvement Required",
        }
    }
}

pub fn recruiter_recommendation(probability: f64) -> &'static str {
    if probability >= 85.0 {
        "Ready to apply to top product companies."
    } else if probability >= 65.0 {
        "Ready for mid-tier companies. Improve 1-2 skills for top companies."
    } else {
        "Focus on internships, DSA, and skill matching before applying."
    }
}

pub fn resume_strength(resume_quality: f64) -> &'static str {
    if resume_quality < 4.0 {
        "Resume needs major improvement."
    } else if resume_quality < 7.0 {
        "Resume is decent but can be improved."
    } else {
        "Strong resume structure."
    }
}

/// Advisory notice about thin skill coverage; never blocks scoring.
pub fn skill_coverage_notice(resume_skill_count: usize) -> Option<&'static str> {
    match resume_skill_count {
        0 => Some("No recognizable technical skills found."),
        1 | 2 => Some("Few skills detected. Consider adding more skills."),
        _ => None,
    }
}

pub fn roadmap_step(skill: Skill) -> &'static str {
    match skill {
        Skill::Python => "Complete Python OOP and build 2 mini projects.",
        Skill::Sql => "Practice SQL joins and queries.",
        Skill::MachineLearning => "Build one ML project.",
        Skill::DataAnalysis => "Learn Pandas + visualization.",
        Skill::Git => "Learn Git branching and maintain repo.",
        Skill::Communication => "Practice mock interviews.",
    }
}

pub fn learning_roadmap(missing_skills: &SkillSet) -> Vec<String> {
    if missing_skills.is_empty() {
        return vec![NO_SKILL_GAPS.to_string()];
    }
    missing_skills
        .iter()
        .map(|skill| roadmap_step(*skill).to_string())
        .collect()
}

/// Bar values for the skill profile chart, each on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProfileChart {
    pub academic: f64,
    pub projects: f64,
    pub skill_match: f64,
    pub communication: f64,
}

impl SkillProfileChart {
    pub fn new(input: &ExplanationInput) -> Self {
        Self {
            academic: input.academic_score * 10.0,
            projects: f64::from(input.project_count) * 20.0,
            skill_match: input.match_percentage,
            communication: f64::from(input.communication) * 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub factors: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub next_steps: Vec<String>,
    pub readiness: ReadinessBand,
    pub recruiter_recommendation: String,
    pub resume_strength: String,
    pub skill_notice: Option<String>,
    pub roadmap: Vec<String>,
    pub chart: SkillProfileChart,
}

/// Messages of every rule in `category` that fires for `input`.
pub fn messages_for(category: Category, input: &ExplanationInput) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| rule.category == category && (rule.applies)(input))
        .map(|rule| rule.message.to_string())
        .collect()
}

pub fn explain(input: &ExplanationInput, missing_skills: &SkillSet) -> Explanation {
    let mut strengths = messages_for(Category::Strength, input);
    if strengths.is_empty() {
        strengths.push(NO_STRENGTHS.to_string());
    }

    let mut weaknesses = messages_for(Category::Weakness, input);
    if weaknesses.is_empty() {
        weaknesses.push(NO_WEAKNESSES.to_string());
    }

    Explanation {
        factors: messages_for(Category::Factor, input),
        strengths,
        weaknesses,
        next_steps: messages_for(Category::NextStep, input),
        readiness: ReadinessBand::from_probability(input.probability),
        recruiter_recommendation: recruiter_recommendation(input.probability).to_string(),
        resume_strength: resume_strength(input.resume_quality).to_string(),
        skill_notice: skill_coverage_notice(input.resume_skill_count).map(str::to_string),
        roadmap: learning_roadmap(missing_skills),
        chart: SkillProfileChart::new(input),
    }
}
