//! Pre-trained placement classifier and its on-disk artifact

use crate::error::{PlacementError, Result};
use log::info;
use ndarray::{arr1, Array1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Feature order the classifier was trained on.
pub const FEATURE_NAMES: [&str; 4] = [
    "academic_score",
    "internship",
    "communication",
    "match_percentage",
];

/// Classifier input: academic score, internship flag, communication rating
/// and skill-match percentage, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    pub fn new(academic_score: f64, internship: f64, communication: f64, match_percentage: f64) -> Self {
        Self(arr1(&[academic_score, internship, communication, match_percentage]))
    }

    /// Build from raw values; used when features come from an external source.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.len() != FEATURE_NAMES.len() {
            return Err(PlacementError::Estimation(format!(
                "Expected {} features ({}), got {}",
                FEATURE_NAMES.len(),
                FEATURE_NAMES.join(", "),
                values.len()
            )));
        }
        Ok(Self(Array1::from(values)))
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject NaN or infinite features before they reach the model.
    pub fn ensure_finite(&self) -> Result<()> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.0.iter()) {
            if !value.is_finite() {
                return Err(PlacementError::Estimation(format!(
                    "Feature '{}' is not a finite number: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// A trained binary classifier predicting placement.
pub trait PlacementClassifier: Send + Sync {
    /// Probability of the positive class, in [0, 1].
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64>;

    /// Short human-readable description of the model.
    fn describe(&self) -> String;
}

/// Serialized form of a logistic regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub model_type: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub description: Option<String>,
}

pub const LOGISTIC_MODEL_TYPE: &str = "logistic_regression";

/// Artifact compiled into the binary, used when nothing is installed.
pub const BUNDLED_ARTIFACT: &str = include_str!("../../models/placement_model.json");

#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    coefficients: Array1<f64>,
    intercept: f64,
    description: String,
}

impl LogisticClassifier {
    pub fn new(coefficients: [f64; 4], intercept: f64) -> Self {
        Self {
            coefficients: arr1(&coefficients),
            intercept,
            description: "Logistic regression".to_string(),
        }
    }

    /// Load and validate an artifact file. Any failure here means the
    /// analyzer cannot serve requests.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlacementError::ModelLoading(format!(
                "Classifier artifact not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PlacementError::ModelLoading(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let classifier = Self::from_json(&content, &path.display().to_string())?;
        info!("Loaded classifier from {}: {}", path.display(), classifier.describe());
        Ok(classifier)
    }

    /// The artifact shipped inside the binary.
    pub fn bundled() -> Result<Self> {
        let classifier = Self::from_json(BUNDLED_ARTIFACT, "bundled artifact")?;
        info!("Loaded bundled classifier: {}", classifier.describe());
        Ok(classifier)
    }

    /// Load from `path` when given, otherwise fall back to the bundled artifact.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    fn from_json(content: &str, origin: &str) -> Result<Self> {
        let artifact: ClassifierArtifact = serde_json::from_str(content).map_err(|e| {
            PlacementError::ModelLoading(format!("Failed to parse '{}': {}", origin, e))
        })?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        if artifact.model_type != LOGISTIC_MODEL_TYPE {
            return Err(PlacementError::ModelLoading(format!(
                "Unsupported model type '{}', expected '{}'",
                artifact.model_type, LOGISTIC_MODEL_TYPE
            )));
        }

        if artifact.feature_names != FEATURE_NAMES {
            return Err(PlacementError::ModelLoading(format!(
                "Feature order mismatch: artifact has [{}], expected [{}]",
                artifact.feature_names.join(", "),
                FEATURE_NAMES.join(", ")
            )));
        }

        if artifact.coefficients.len() != FEATURE_NAMES.len() {
            return Err(PlacementError::ModelLoading(format!(
                "Expected {} coefficients, found {}",
                FEATURE_NAMES.len(),
                artifact.coefficients.len()
            )));
        }

        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PlacementError::ModelLoading(
                "Artifact contains non-finite weights".to_string(),
            ));
        }

        Ok(Self {
            coefficients: Array1::from(artifact.coefficients),
            intercept: artifact.intercept,
            description: artifact
                .description
                .unwrap_or_else(|| "Logistic regression".to_string()),
        })
    }

    pub fn to_artifact(&self) -> ClassifierArtifact {
        ClassifierArtifact {
            model_type: LOGISTIC_MODEL_TYPE.to_string(),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: self.coefficients.to_vec(),
            intercept: self.intercept,
            description: Some(self.description.clone()),
        }
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl PlacementClassifier for LogisticClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(PlacementError::Estimation(format!(
                "Feature vector has {} values, model expects {}",
                features.len(),
                self.coefficients.len()
            )));
        }
        features.ensure_finite()?;

        let logit = self.coefficients.dot(features.values()) + self.intercept;
        Ok(sigmoid(logit))
    }

    fn describe(&self) -> String {
        format!(
            "{} ({} features, intercept {:.3})",
            self.description,
            self.coefficients.len(),
            self.intercept
        )
    }
}

impl fmt::Display for LogisticClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn artifact() -> ClassifierArtifact {
        ClassifierArtifact {
            model_type: LOGISTIC_MODEL_TYPE.to_string(),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: vec![0.9, 1.1, 0.25, 0.02],
            intercept: -9.0,
            description: None,
        }
    }

    #[test]
    fn test_zero_logit_is_half() {
        let classifier = LogisticClassifier::new([0.0; 4], 0.0);
        let p = classifier
            .predict_proba(&FeatureVector::new(8.0, 1.0, 7.0, 75.0))
            .unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probability_in_unit_interval() {
        let classifier = LogisticClassifier::from_artifact(artifact()).unwrap();
        for features in [
            FeatureVector::new(10.0, 1.0, 10.0, 100.0),
            FeatureVector::new(5.0, 0.0, 1.0, 0.0),
        ] {
            let p = classifier.predict_proba(&features).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_non_finite_feature_fails() {
        let classifier = LogisticClassifier::from_artifact(artifact()).unwrap();
        let err = classifier
            .predict_proba(&FeatureVector::new(f64::NAN, 1.0, 7.0, 50.0))
            .unwrap_err();
        assert!(matches!(err, PlacementError::Estimation(_)));
    }

    #[test]
    fn test_feature_vector_shape() {
        assert!(FeatureVector::from_values(vec![1.0, 2.0, 3.0]).is_err());
        assert_eq!(FeatureVector::from_values(vec![1.0, 0.0, 3.0, 4.0]).unwrap().len(), 4);
    }

    #[test]
    fn test_rejects_wrong_coefficient_count() {
        let mut bad = artifact();
        bad.coefficients.pop();
        assert!(matches!(
            LogisticClassifier::from_artifact(bad),
            Err(PlacementError::ModelLoading(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_feature_order() {
        let mut bad = artifact();
        bad.feature_names.swap(0, 1);
        assert!(matches!(
            LogisticClassifier::from_artifact(bad),
            Err(PlacementError::ModelLoading(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_model_type() {
        let mut bad = artifact();
        bad.model_type = "random_forest".to_string();
        assert!(LogisticClassifier::from_artifact(bad).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&artifact()).unwrap()).unwrap();

        let classifier = LogisticClassifier::load(file.path()).unwrap();
        assert_eq!(classifier.intercept(), -9.0);
        assert_eq!(classifier.to_artifact().coefficients, artifact().coefficients);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LogisticClassifier::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, PlacementError::ModelLoading(_)));
    }

    #[test]
    fn test_bundled_artifact_loads_without_files() {
        let classifier = LogisticClassifier::bundled().unwrap();
        assert_eq!(classifier.intercept(), -9.0);
        assert_eq!(classifier.coefficients().to_vec(), vec![0.9, 1.1, 0.25, 0.02]);
        assert!(classifier.describe().starts_with("Placement logistic regression v1"));
    }

    #[test]
    fn test_load_or_bundled() {
        assert!(LogisticClassifier::load_or_bundled(None).is_ok());
        assert!(LogisticClassifier::load_or_bundled(Some(Path::new("/nonexistent/model.json"))).is_err());
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            LogisticClassifier::load(file.path()),
            Err(PlacementError::ModelLoading(_))
        ));
    }
}
