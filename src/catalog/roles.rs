//! Target roles, their difficulty multipliers and canned job descriptions

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Python Developer")]
    PythonDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Cybersecurity Analyst")]
    CybersecurityAnalyst,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Cloud Engineer")]
    CloudEngineer,
    #[serde(rename = "Database Engineer")]
    DatabaseEngineer,
    #[serde(rename = "QA Engineer")]
    QaEngineer,
    #[serde(rename = "Business Analyst")]
    BusinessAnalyst,
    #[serde(rename = "Mobile App Developer")]
    MobileAppDeveloper,
    #[serde(rename = "Product Engineer")]
    ProductEngineer,
    #[serde(rename = "Mechanical Engineer")]
    MechanicalEngineer,
    #[serde(rename = "Robotics Engineer")]
    RoboticsEngineer,
    #[serde(rename = "AI Research Intern")]
    AiResearchIntern,
    #[serde(rename = "Amazon SDE")]
    AmazonSde,
    #[serde(rename = "Google SWE")]
    GoogleSwe,
    #[serde(rename = "Infosys Graduate Engineer")]
    InfosysGraduateEngineer,
    #[serde(rename = "Startup Intern")]
    StartupIntern,
    Custom,
}

impl Role {
    /// Every role, in the order they are listed to users.
    pub const ALL: [Role; 24] = [
        Role::Custom,
        Role::PythonDeveloper,
        Role::DataAnalyst,
        Role::MlEngineer,
        Role::BackendDeveloper,
        Role::FrontendDeveloper,
        Role::FullStackDeveloper,
        Role::SoftwareEngineer,
        Role::MechanicalEngineer,
        Role::CybersecurityAnalyst,
        Role::DevOpsEngineer,
        Role::CloudEngineer,
        Role::BusinessAnalyst,
        Role::QaEngineer,
        Role::AiResearchIntern,
        Role::MobileAppDeveloper,
        Role::DatabaseEngineer,
        Role::ProductEngineer,
        Role::RoboticsEngineer,
        Role::DataScientist,
        Role::AmazonSde,
        Role::GoogleSwe,
        Role::InfosysGraduateEngineer,
        Role::StartupIntern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PythonDeveloper => "Python Developer",
            Role::BackendDeveloper => "Backend Developer",
            Role::FrontendDeveloper => "Frontend Developer",
            Role::FullStackDeveloper => "Full Stack Developer",
            Role::SoftwareEngineer => "Software Engineer",
            Role::DataAnalyst => "Data Analyst",
            Role::MlEngineer => "ML Engineer",
            Role::DataScientist => "Data Scientist",
            Role::CybersecurityAnalyst => "Cybersecurity Analyst",
            Role::DevOpsEngineer => "DevOps Engineer",
            Role::CloudEngineer => "Cloud Engineer",
            Role::DatabaseEngineer => "Database Engineer",
            Role::QaEngineer => "QA Engineer",
            Role::BusinessAnalyst => "Business Analyst",
            Role::MobileAppDeveloper => "Mobile App Developer",
            Role::ProductEngineer => "Product Engineer",
            Role::MechanicalEngineer => "Mechanical Engineer",
            Role::RoboticsEngineer => "Robotics Engineer",
            Role::AiResearchIntern => "AI Research Intern",
            Role::AmazonSde => "Amazon SDE",
            Role::GoogleSwe => "Google SWE",
            Role::InfosysGraduateEngineer => "Infosys Graduate Engineer",
            Role::StartupIntern => "Startup Intern",
            Role::Custom => "Custom",
        }
    }

    /// Kebab-case name accepted on the command line, e.g. `ml-engineer`.
    pub fn slug(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "-")
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Role::Custom)
    }

    /// Canned job description, absent for `Custom`.
    pub fn description(&self) -> Option<&'static str> {
        ROLE_DESCRIPTIONS.get(self).copied()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Role::ALL
            .iter()
            .find(|role| role.as_str().to_lowercase() == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown role: {}. Run `placement-readiness roles` to list roles", s))
    }
}

/// Read-only mapping from role to difficulty multiplier.
#[derive(Debug, Clone)]
pub struct RoleDifficultyTable {
    multipliers: HashMap<Role, f64>,
}

impl RoleDifficultyTable {
    pub fn new(entries: &[(Role, f64)]) -> Self {
        Self {
            multipliers: entries.iter().copied().collect(),
        }
    }

    /// Multiplier for `role`, 1.0 when the table has no entry.
    pub fn get(&self, role: Role) -> f64 {
        self.multipliers.get(&role).copied().unwrap_or(1.0)
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for RoleDifficultyTable {
    fn default() -> Self {
        ROLE_DIFFICULTY.clone()
    }
}

pub static ROLE_DIFFICULTY: Lazy<RoleDifficultyTable> = Lazy::new(|| {
    RoleDifficultyTable::new(&[
        (Role::PythonDeveloper, 0.95),
        (Role::BackendDeveloper, 1.0),
        (Role::FrontendDeveloper, 0.95),
        (Role::FullStackDeveloper, 1.05),
        (Role::SoftwareEngineer, 1.05),
        (Role::DataAnalyst, 1.0),
        (Role::MlEngineer, 1.15),
        (Role::DataScientist, 1.2),
        (Role::CybersecurityAnalyst, 1.1),
        (Role::DevOpsEngineer, 1.15),
        (Role::CloudEngineer, 1.1),
        (Role::DatabaseEngineer, 1.05),
        (Role::QaEngineer, 0.9),
        (Role::BusinessAnalyst, 0.95),
        (Role::MobileAppDeveloper, 1.0),
        (Role::ProductEngineer, 1.05),
        (Role::MechanicalEngineer, 1.0),
        (Role::RoboticsEngineer, 1.2),
        (Role::AiResearchIntern, 1.25),
        (Role::AmazonSde, 1.35),
        (Role::GoogleSwe, 1.4),
        (Role::InfosysGraduateEngineer, 0.9),
        (Role::StartupIntern, 0.85),
        (Role::Custom, 1.0),
    ])
});

static ROLE_DESCRIPTIONS: Lazy<HashMap<Role, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            Role::PythonDeveloper,
            "We are hiring a Python Developer to build backend services and APIs.\n\
             Required skills include Python, SQL, Git, data structures and communication.\n\
             Experience with Flask/Django and debugging production issues preferred.",
        ),
        (
            Role::DataAnalyst,
            "Looking for Data Analyst with Python, SQL, data analysis,\n\
             data visualization and communication skills.\n\
             Candidate must prepare dashboards, analyze trends,\n\
             and present business insights.",
        ),
        (
            Role::MlEngineer,
            "Hiring ML Engineer experienced in Python, SQL,\n\
             machine learning, data analysis, Git and communication.\n\
             Candidate should build regression/classification models,\n\
             evaluate performance and deploy models.",
        ),
        (
            Role::BackendDeveloper,
            "Backend Developer needed with Python or Java,\n\
             SQL databases, Git, APIs, data structures and communication.\n\
             Experience building scalable services and debugging systems required.",
        ),
        (
            Role::FrontendDeveloper,
            "Frontend Developer with HTML, CSS, JavaScript,\n\
             Git and communication skills.\n\
             Experience building responsive UI and integrating APIs preferred.",
        ),
        (
            Role::FullStackDeveloper,
            "Full Stack Developer with Python/Java, HTML, CSS, SQL,\n\
             Git and communication skills.\n\
             Candidate must build end-to-end web applications and APIs.",
        ),
        (
            Role::SoftwareEngineer,
            "Software Engineer role requiring data structures,\n\
             Python or Java, Git, SQL and communication.\n\
             Candidate must design algorithms and write optimized code.",
        ),
        (
            Role::MechanicalEngineer,
            "Mechanical Engineer with CAD, problem solving,\n\
             project documentation and communication skills.\n\
             Experience in design analysis and teamwork required.",
        ),
        (
            Role::CybersecurityAnalyst,
            "Cybersecurity Analyst with networking basics,\n\
             Python scripting, Git and communication.\n\
             Candidate must analyze vulnerabilities and monitor systems.",
        ),
        (
            Role::DevOpsEngineer,
            "DevOps Engineer with Python scripting, Git,\n\
             SQL and communication skills.\n\
             Candidate should understand CI/CD pipelines,\n\
             automation, cloud deployment and debugging systems.",
        ),
        (
            Role::CloudEngineer,
            "Cloud Engineer required with Python, Git,\n\
             SQL and communication skills.\n\
             Candidate must manage cloud deployments,\n\
             monitor systems and automate workflows.",
        ),
        (
            Role::BusinessAnalyst,
            "Business Analyst with communication,\n\
             data analysis, SQL and reporting skills.\n\
             Candidate should prepare dashboards,\n\
             interpret data and present insights.",
        ),
        (
            Role::QaEngineer,
            "QA Engineer with Python scripting, Git,\n\
             debugging and communication.\n\
             Candidate must design test cases,\n\
             perform automation testing and analyze defects.",
        ),
        (
            Role::AiResearchIntern,
            "AI Research Intern with Python,\n\
             machine learning, data analysis and communication.\n\
             Candidate should implement algorithms,\n\
             run experiments and document findings.",
        ),
        (
            Role::MobileAppDeveloper,
            "Mobile Developer with Java/Python backend,\n\
             Git, APIs and communication skills.\n\
             Candidate must build mobile apps and debug issues.",
        ),
        (
            Role::DatabaseEngineer,
            "Database Engineer with strong SQL,\n\
             data analysis, Python scripting,\n\
             Git and communication skills.\n\
             Candidate should design schemas and optimize queries.",
        ),
        (
            Role::ProductEngineer,
            "Product Engineer with Python or Java,\n\
             Git, SQL and communication skills.\n\
             Candidate must build scalable features\n\
             and collaborate across teams.",
        ),
        (
            Role::RoboticsEngineer,
            "Robotics Engineer with Python,\n\
             data analysis, problem solving and communication.\n\
             Experience with sensor data and testing preferred.",
        ),
        (
            Role::DataScientist,
            "Data Scientist with Python, SQL,\n\
             machine learning, data analysis,\n\
             Git and communication.\n\
             Candidate must clean datasets,\n\
             build predictive models and present insights.",
        ),
        (
            Role::AmazonSde,
            "Amazon Software Development Engineer role requiring\n\
             data structures, algorithms,\n\
             Python or Java,\n\
             SQL, Git and communication skills.\n\
             Candidate must build scalable systems,\n\
             write optimized code and participate in design reviews.",
        ),
        (
            Role::GoogleSwe,
            "Google Software Engineer role requiring strong\n\
             problem solving, data structures,\n\
             Python or Java,\n\
             system design,\n\
             Git and communication.\n\
             Candidate must design efficient algorithms\n\
             and collaborate in large codebases.",
        ),
        (
            Role::InfosysGraduateEngineer,
            "Graduate Engineer Trainee with Python or Java,\n\
             SQL, Git and communication skills.\n\
             Candidate must learn enterprise systems,\n\
             debug issues and work in Agile teams.",
        ),
        (
            Role::StartupIntern,
            "Startup Intern with Python,\n\
             data analysis,\n\
             Git and communication skills.\n\
             Candidate should build quick prototypes,\n\
             debug features and collaborate in small teams.",
        ),
    ])
});
