//! Filesystem-backed model repository
//!
//! Every call rescans the model root; nothing is cached between calls.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::ModelsConfig;
use crate::domain::{
    DomainError, ModelDirectoryName, ModelRecord, ModelRepository, PredictionFileSet,
};

/// Name of the per-model folder holding prediction files
pub const PREDICTIONS_DIR: &str = "predictions";

const DEFAULT_LISTING_TIMEOUT: Duration = Duration::from_secs(5);

/// Discovers models laid out as `<root>/<model_directory>/predictions/<files>`
#[derive(Debug, Clone)]
pub struct FilesystemModelRepository {
    root: PathBuf,
    listing_timeout: Duration,
}

impl FilesystemModelRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            listing_timeout: DEFAULT_LISTING_TIMEOUT,
        }
    }

    pub fn from_config(config: &ModelsConfig) -> Self {
        Self::new(config.directory.clone()).with_listing_timeout(config.listing_timeout())
    }

    /// Bound the time spent listing a single model's predictions folder
    pub fn with_listing_timeout(mut self, timeout: Duration) -> Self {
        self.listing_timeout = timeout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn prediction_path(&self, model_directory: &str, filename: &str) -> PathBuf {
        self.root
            .join(model_directory)
            .join(PREDICTIONS_DIR)
            .join(filename)
    }

    fn root_error(&self, error: std::io::Error) -> DomainError {
        DomainError::storage(format!(
            "Failed to list model directory '{}': {}",
            self.root.display(),
            error
        ))
    }

    /// Inspect one model directory; `None` means the model is skipped
    async fn inspect_model(&self, model_directory: String) -> Option<ModelRecord> {
        let predictions_dir = self.root.join(&model_directory).join(PREDICTIONS_DIR);

        let filenames =
            match tokio::time::timeout(self.listing_timeout, list_file_names(&predictions_dir))
                .await
            {
                Ok(Ok(filenames)) if !filenames.is_empty() => filenames,
                Ok(Ok(_)) => {
                    debug!(model_directory = %model_directory, "Predictions folder is empty, skipping model");
                    return None;
                }
                Ok(Err(e)) => {
                    debug!(
                        model_directory = %model_directory,
                        error = %e,
                        "No readable predictions folder, skipping model"
                    );
                    return None;
                }
                Err(_) => {
                    warn!(
                        model_directory = %model_directory,
                        timeout_ms = self.listing_timeout.as_millis() as u64,
                        "Timed out listing predictions, skipping model"
                    );
                    return None;
                }
            };

        let predictions = PredictionFileSet::classify(&filenames);

        let name = match ModelDirectoryName::parse(model_directory.as_str()) {
            Ok(name) => name,
            Err(e) => {
                warn!(
                    model_directory = %model_directory,
                    error = %e,
                    "Malformed model directory name, skipping model"
                );
                return None;
            }
        };

        Some(ModelRecord::new(name, predictions))
    }
}

#[async_trait]
impl ModelRepository for FilesystemModelRepository {
    async fn discover(&self) -> Result<Vec<ModelRecord>, DomainError> {
        let model_directories = list_file_names(&self.root)
            .await
            .map_err(|e| self.root_error(e))?;

        let scanned = model_directories.len();

        // join_all keeps input order regardless of completion order
        let candidates = join_all(
            model_directories
                .into_iter()
                .map(|model_directory| self.inspect_model(model_directory)),
        )
        .await;

        let models: Vec<ModelRecord> = candidates
            .into_iter()
            .flatten()
            .filter(|model| model.predictions.has_test_predictions())
            .collect();

        info!(
            root = %self.root.display(),
            scanned,
            discovered = models.len(),
            "Model discovery complete"
        );

        Ok(models)
    }

    async fn check_root(&self) -> Result<(), DomainError> {
        tokio::fs::read_dir(&self.root)
            .await
            .map(|_| ())
            .map_err(|e| self.root_error(e))
    }

    async fn read_prediction(
        &self,
        model_directory: &str,
        filename: &str,
    ) -> Result<String, DomainError> {
        let path = self.prediction_path(model_directory, filename);

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DomainError::not_found(format!(
                    "Prediction '{}' of model '{}' not found",
                    filename, model_directory
                )),
                _ => DomainError::storage(format!(
                    "Failed to read prediction '{}': {}",
                    path.display(),
                    e
                )),
            })
    }
}

/// List entry names of a directory in byte-wise order
async fn list_file_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                debug!(dir = %dir.display(), name = ?raw, "Skipping non UTF-8 entry");
            }
        }
    }

    names.sort();
    Ok(names)
}
