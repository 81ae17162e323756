//! Resume quality heuristic (0-10)

use crate::processing::round_to;
use crate::processing::skills::{Skill, SkillSet};

const WORD_PLATEAU: f64 = 200.0;
const DIGIT_PLATEAU: f64 = 10.0;
const WORD_WEIGHT: f64 = 4.0;
const SKILL_WEIGHT: f64 = 4.0;
const DIGIT_WEIGHT: f64 = 2.0;

/// Rewards length, taxonomy coverage and quantified claims, each capped on
/// its own plateau.
pub fn resume_quality(resume_text: &str, resume_skills: &SkillSet) -> f64 {
    let word_count = resume_text.split_whitespace().count() as f64;
    let digit_count = resume_text.chars().filter(char::is_ascii_digit).count() as f64;
    let skill_coverage = resume_skills.len() as f64 / Skill::ALL.len() as f64;

    let score = (word_count / WORD_PLATEAU).min(1.0) * WORD_WEIGHT
        + skill_coverage.min(1.0) * SKILL_WEIGHT
        + (digit_count / DIGIT_PLATEAU).min(1.0) * DIGIT_WEIGHT;

    round_to(score, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(resume_quality("", &SkillSet::new()), 0.0);
    }

    #[test]
    fn test_all_terms_saturate() {
        let mut words: Vec<String> = vec![
            "python".into(),
            "sql".into(),
            "machine".into(),
            "learning".into(),
            "data".into(),
            "analysis".into(),
            "git".into(),
            "communication".into(),
            "1234567890".into(),
        ];
        while words.len() < 200 {
            words.push("word".into());
        }
        let text = words.join(" ");
        assert_eq!(text.split_whitespace().count(), 200);

        let skills: SkillSet = Skill::ALL.into_iter().collect();
        assert_eq!(resume_quality(&text, &skills), 10.0);
    }

    #[test]
    fn test_partial_terms() {
        // 100 words -> 2.0, 3 skills -> 2.0, 5 digits -> 1.0
        let mut words = vec!["12345".to_string()];
        words.extend(std::iter::repeat("word".to_string()).take(99));
        let skills = SkillSet::from([Skill::Python, Skill::Sql, Skill::Git]);
        assert_eq!(resume_quality(&words.join(" "), &skills), 5.0);
    }

    #[test]
    fn test_never_exceeds_ten() {
        let text = "9".repeat(50) + &" word".repeat(1000);
        let skills: SkillSet = Skill::ALL.into_iter().collect();
        assert_eq!(resume_quality(&text, &skills), 10.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 1 word -> 0.02, 1 skill -> 0.666..., no digits
        let skills = SkillSet::from([Skill::Python]);
        assert_eq!(resume_quality("python", &skills), 0.69);
    }
}
