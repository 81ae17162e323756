//! Integration tests for the placement readiness analyzer

use placement_readiness::catalog::roles::Role;
use placement_readiness::error::PlacementError;
use placement_readiness::input::{DocumentKind, InputManager, TextSource};
use placement_readiness::model::classifier::LogisticClassifier;
use placement_readiness::processing::analyzer::{AnalysisEngine, AnalysisRequest};
use placement_readiness::processing::profile::Profile;
use placement_readiness::processing::quality::resume_quality;
use placement_readiness::processing::skills::{extract_skills, Skill, SkillSet};
use placement_readiness::processing::validation::validate;
use std::path::Path;
use std::sync::Arc;

fn bundled_engine() -> AnalysisEngine {
    let classifier = LogisticClassifier::bundled().unwrap();
    AnalysisEngine::new(Arc::new(classifier))
}

fn profile(role: Role) -> Profile {
    Profile {
        academic_score: 8.2,
        has_internship: true,
        project_count: 3,
        communication: 7,
        coding_score: 6,
        hackathon_count: 1,
        role,
    }
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path, DocumentKind::Resume).await.unwrap();
    assert!(text.contains("Priya Sharma"));
    assert!(text.contains("Python, SQL, Git"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path, DocumentKind::Resume).await.unwrap();
    assert!(text.contains("Priya Sharma"));
    assert!(text.contains("Data analysis with Pandas"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path, DocumentKind::Resume).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path, DocumentKind::Resume).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path, DocumentKind::Resume).await;
    assert!(matches!(result, Err(PlacementError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path, DocumentKind::Resume).await;
    assert!(matches!(result, Err(PlacementError::InvalidInput(_))));
}

#[tokio::test]
async fn test_pipeline_from_fixture_files() {
    let mut manager = InputManager::new();
    let resume = manager
        .read(&TextSource::File("tests/fixtures/sample_resume.txt".into()), DocumentKind::Resume)
        .await
        .unwrap();
    let job = manager
        .read(&TextSource::File("tests/fixtures/sample_job.txt".into()), DocumentKind::JobDescription)
        .await
        .unwrap();

    let request = AnalysisRequest {
        profile: profile(Role::DataAnalyst),
        resume_text: resume,
        job_text: Some(job),
    };
    let result = bundled_engine().analyze(&request).unwrap();

    assert_eq!(result.match_percentage(), 80.0);
    assert_eq!(result.missing_skills(), &SkillSet::from([Skill::Communication]));
    assert!((5.0..=95.0).contains(&result.placement_probability));
    assert!((0.0..=10.0).contains(&result.resume_quality));
    assert!((0.0..=100.0).contains(&result.ats.score));
    assert_eq!(result.company_readiness.len(), 4);
    assert_eq!(result.explanation.roadmap, vec!["Practice mock interviews.".to_string()]);
}

#[test]
fn test_skill_extraction_example() {
    let (resume_skills, job_skills) = extract_skills(
        "Strong Python and SQL skills, used Git daily",
        "Looking for Python, SQL, Git, communication",
    );
    assert_eq!(resume_skills, SkillSet::from([Skill::Python, Skill::Sql, Skill::Git]));
    assert_eq!(
        job_skills,
        SkillSet::from([Skill::Python, Skill::Sql, Skill::Git, Skill::Communication])
    );

    let request = AnalysisRequest {
        profile: profile(Role::Custom),
        resume_text: "Strong Python and SQL skills, used Git daily".to_string(),
        job_text: Some("Looking for Python, SQL, Git, communication".to_string()),
    };
    let result = bundled_engine().analyze(&request).unwrap();
    assert_eq!(result.match_percentage(), 75.0);
    assert_eq!(result.missing_skills(), &SkillSet::from([Skill::Communication]));
}

#[test]
fn test_validator_examples() {
    assert_eq!(validate("").message, "please paste your resume.");
    assert_eq!(validate("a").message, "resume text seems invalid.");
    assert_eq!(
        validate("python python python python python python python").message,
        "resume text looks like repeated spam."
    );
    assert!(validate("Python developer with SQL and Git").valid);
}

#[test]
fn test_spam_resume_is_rejected() {
    let request = AnalysisRequest {
        profile: profile(Role::Custom),
        resume_text: "python python python python python python python".to_string(),
        job_text: Some("Looking for Python developers".to_string()),
    };
    let err = bundled_engine().analyze(&request).unwrap_err();
    assert!(matches!(err, PlacementError::InputValidation(_)));
    assert!(err.to_string().ends_with("resume text looks like repeated spam."));
}

#[test]
fn test_pipeline_is_idempotent() {
    let engine = bundled_engine();
    let request = AnalysisRequest {
        profile: profile(Role::GoogleSwe),
        resume_text: "Python and SQL developer, built 3 ML projects, 2 internships".to_string(),
        job_text: None,
    };
    let first = serde_json::to_string(&engine.analyze(&request).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.analyze(&request).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_probability_bounds_across_extremes() {
    let engine = bundled_engine();
    let mut long_resume = String::from("Python SQL machine learning data analysis Git communication");
    for i in 0..250 {
        long_resume.push_str(&format!(" project{}", i));
    }
    let texts = ["short note about nothing in particular", long_resume.as_str()];
    for role in Role::ALL {
        for (academic, internship, projects, score) in [(5.0, false, 0, 1), (10.0, true, 5, 10)] {
            for text in &texts {
                let request = AnalysisRequest {
                    profile: Profile {
                        academic_score: academic,
                        has_internship: internship,
                        project_count: projects,
                        communication: score,
                        coding_score: score,
                        hackathon_count: projects,
                        role,
                    },
                    resume_text: (*text).to_string(),
                    job_text: Some("python sql git communication".to_string()),
                };
                let result = engine.analyze(&request).unwrap();
                assert!((5.0..=95.0).contains(&result.placement_probability));
                for company in &result.company_readiness {
                    assert!((5.0..=95.0).contains(&company.score));
                }
            }
        }
    }
}

#[test]
fn test_quality_bounds() {
    let long_text = "word 42 ".repeat(500);
    for text in ["", "one", long_text.as_str()] {
        let (skills, _) = extract_skills(text, "");
        let q = resume_quality(text, &skills);
        assert!((0.0..=10.0).contains(&q), "{} out of range", q);
    }
}

#[test]
fn test_bundled_classifier_ignores_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = placement_readiness::Config::default();
    config.models.models_dir = dir.path().join("models");

    let path = config.classifier_path(None);
    assert!(path.is_none());
    let classifier = LogisticClassifier::load_or_bundled(path.as_deref()).unwrap();
    assert_eq!(classifier.intercept(), -9.0);
}

#[test]
fn test_broken_artifact_fails_to_load() {
    let err = LogisticClassifier::load(Path::new("tests/fixtures/broken_model.json")).unwrap_err();
    assert!(matches!(err, PlacementError::ModelLoading(_)));
}

#[tokio::test]
async fn test_markdown_job_description() {
    let mut manager = InputManager::new();
    let job = manager
        .read(&TextSource::File("tests/fixtures/sample_job.md".into()), DocumentKind::JobDescription)
        .await
        .unwrap();
    assert!(!job.contains("##"));

    let (_, job_skills) = extract_skills("", &job);
    assert_eq!(
        job_skills,
        SkillSet::from([Skill::Python, Skill::Sql, Skill::Git, Skill::Communication])
    );
}
