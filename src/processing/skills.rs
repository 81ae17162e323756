//! Skill taxonomy and substring-based skill extraction

use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Canonical skills the analyzer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Python,
    Sql,
    #[serde(rename = "machine learning")]
    MachineLearning,
    #[serde(rename = "data analysis")]
    DataAnalysis,
    Git,
    Communication,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Python,
        Skill::Sql,
        Skill::MachineLearning,
        Skill::DataAnalysis,
        Skill::Git,
        Skill::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Python => "python",
            Skill::Sql => "sql",
            Skill::MachineLearning => "machine learning",
            Skill::DataAnalysis => "data analysis",
            Skill::Git => "git",
            Skill::Communication => "communication",
        }
    }

    /// Surface forms that signal this skill in free text.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Skill::Python => &["python"],
            Skill::Sql => &["sql"],
            Skill::MachineLearning => &["machine learning", "ml"],
            Skill::DataAnalysis => &["data analysis", "analysis"],
            Skill::Git => &["git", "github"],
            Skill::Communication => &["communication", "presentation", "teamwork"],
        }
    }

    /// Title-cased name for display, e.g. "Machine Learning".
    pub fn title(&self) -> String {
        self.as_str()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type SkillSet = BTreeSet<Skill>;

/// Automaton over every keyword variant of every skill.
pub struct SkillTaxonomy {
    matcher: AhoCorasick,
    pattern_skills: Vec<Skill>,
}

impl SkillTaxonomy {
    fn build() -> Self {
        let mut patterns = Vec::new();
        let mut pattern_skills = Vec::new();
        for skill in Skill::ALL {
            for keyword in skill.keywords() {
                patterns.push(*keyword);
                pattern_skills.push(skill);
            }
        }

        // Standard match kind is required for overlapping search; every
        // variant is reported even when it sits inside a longer one.
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .expect("Invalid skill taxonomy patterns");

        Self {
            matcher,
            pattern_skills,
        }
    }

    /// Skills whose keywords occur as substrings of the lowercased text.
    pub fn detect(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        self.matcher
            .find_overlapping_iter(&lowered)
            .map(|mat| self.pattern_skills[mat.pattern().as_usize()])
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        Skill::ALL.len()
    }
}

pub static SKILL_TAXONOMY: Lazy<SkillTaxonomy> = Lazy::new(SkillTaxonomy::build);

/// Detect taxonomy skills in the resume and the job description independently.
pub fn extract_skills(resume_text: &str, job_text: &str) -> (SkillSet, SkillSet) {
    let resume_skills = SKILL_TAXONOMY.detect(resume_text);
    let job_skills = SKILL_TAXONOMY.detect(job_text);
    debug!(
        "Detected {} resume skills and {} job skills",
        resume_skills.len(),
        job_skills.len()
    );
    (resume_skills, job_skills)
}
