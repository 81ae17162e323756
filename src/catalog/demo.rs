//! Bundled demo candidates for trying the analyzer without real data

use crate::catalog::roles::Role;
use crate::processing::profile::Profile;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCandidate {
    Strong,
    Average,
    Weak,
}

#[derive(Debug, Clone)]
pub struct DemoProfile {
    pub profile: Profile,
    pub resume: &'static str,
    pub job_description: &'static str,
}

impl DemoCandidate {
    pub fn load(&self) -> DemoProfile {
        match self {
            DemoCandidate::Strong => DemoProfile {
                profile: Profile {
                    academic_score: 8.8,
                    has_internship: true,
                    project_count: 4,
                    communication: 8,
                    coding_score: 8,
                    hackathon_count: 3,
                    role: Role::Custom,
                },
                resume: STRONG_RESUME,
                job_description: STRONG_JD,
            },
            DemoCandidate::Average => DemoProfile {
                profile: Profile {
                    academic_score: 7.2,
                    has_internship: false,
                    project_count: 2,
                    communication: 6,
                    coding_score: 5,
                    hackathon_count: 1,
                    role: Role::Custom,
                },
                resume: AVERAGE_RESUME,
                job_description: AVERAGE_JD,
            },
            DemoCandidate::Weak => DemoProfile {
                profile: Profile {
                    academic_score: 6.0,
                    has_internship: false,
                    project_count: 0,
                    communication: 4,
                    coding_score: 2,
                    hackathon_count: 0,
                    role: Role::Custom,
                },
                resume: WEAK_RESUME,
                job_description: WEAK_JD,
            },
        }
    }
}

impl fmt::Display for DemoCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemoCandidate::Strong => "strong",
            DemoCandidate::Average => "average",
            DemoCandidate::Weak => "weak",
        };
        f.write_str(name)
    }
}

impl FromStr for DemoCandidate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strong" => Ok(DemoCandidate::Strong),
            "average" => Ok(DemoCandidate::Average),
            "weak" => Ok(DemoCandidate::Weak),
            _ => Err(format!("Unknown demo candidate: {}. Supported: strong, average, weak", s)),
        }
    }
}

const STRONG_RESUME: &str = "\
Computer Science student with strong Python, SQL, Machine Learning and Git skills.
Built 4 projects including ML prediction system and full stack web app.
Solved 350+ LeetCode DSA problems.
Completed internship at fintech startup improving API performance by 35%.
Participated in 3 hackathons and won 1st prize.
Strong communication and teamwork experience.
";

const AVERAGE_RESUME: &str = "\
Computer Science student with basic Python and SQL knowledge.
Built 2 academic projects including simple website and data analysis.
Solved 80 DSA problems.
Good communication skills and teamwork experience.
";

const WEAK_RESUME: &str = "\
Student learning programming.
Made one small project.
Looking for opportunities.
";

const STRONG_JD: &str = "\
Software Engineer role requiring Python, SQL, Git, Machine Learning,
Data Structures and communication skills.
Candidate should build scalable systems and analyze data.
";

const AVERAGE_JD: &str = "\
Backend Developer with Python, SQL and Git skills.
Good communication required.
";

const WEAK_JD: &str = "\
Any job.
";
