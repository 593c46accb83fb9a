//! Model record and prediction file types

use serde::{Deserialize, Serialize};

use super::ModelDirectoryName;

/// Filename substring marking a test-split prediction file
pub const TEST_MARKER: &str = "test";

/// Filename substring marking a validation-split prediction file
pub const VALIDATION_MARKER: &str = "validation";

/// Prediction filenames of one model, grouped by data split
///
/// Classification is plain, case-sensitive substring containment, so a file
/// can land in both groups or in neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionFileSet {
    pub test: Vec<String>,
    pub validation: Vec<String>,
}

impl PredictionFileSet {
    /// Classify filenames, preserving their input order
    pub fn classify<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for filename in filenames {
            let filename = filename.as_ref();

            if filename.contains(TEST_MARKER) {
                set.test.push(filename.to_string());
            }

            if filename.contains(VALIDATION_MARKER) {
                set.validation.push(filename.to_string());
            }
        }

        set
    }

    pub fn has_test_predictions(&self) -> bool {
        !self.test.is_empty()
    }
}

/// A discovered model with its decoded hyper-parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Raw directory name, used as the lookup key for prediction retrieval
    pub model_directory: String,
    pub model_name: String,
    pub input_size: u32,
    pub learning_rate: f64,
    pub batch_size: u32,
    pub predictions: PredictionFileSet,
}

impl ModelRecord {
    pub fn new(name: ModelDirectoryName, predictions: PredictionFileSet) -> Self {
        Self {
            model_directory: name.raw().to_string(),
            model_name: name.model_name().to_string(),
            input_size: name.input_size(),
            learning_rate: name.learning_rate(),
            batch_size: name.batch_size(),
            predictions,
        }
    }
}
