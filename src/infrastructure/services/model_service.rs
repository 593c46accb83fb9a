//! Model service - discovery and prediction retrieval for callers

use std::path::{Component, Path};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, ModelRecord, ModelRepository};

/// Model service wrapping a model repository
#[derive(Debug)]
pub struct ModelService<R: ModelRepository> {
    repository: Arc<R>,
}

impl<R: ModelRepository> ModelService<R> {
    /// Create a new ModelService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every discovered model
    pub async fn list(&self) -> Result<Vec<ModelRecord>, DomainError> {
        self.repository.discover().await
    }

    /// Get a model by its directory name
    pub async fn get(&self, model_directory: &str) -> Result<Option<ModelRecord>, DomainError> {
        let models = self.repository.discover().await?;

        Ok(models
            .into_iter()
            .find(|m| m.model_directory == model_directory))
    }

    /// Get a model by its directory name, returning an error if not found
    pub async fn get_required(&self, model_directory: &str) -> Result<ModelRecord, DomainError> {
        self.get(model_directory).await?.ok_or_else(|| {
            DomainError::not_found(format!("Model '{}' not found", model_directory))
        })
    }

    /// Check that the model root is readable
    pub async fn check_ready(&self) -> Result<(), DomainError> {
        self.repository.check_root().await
    }

    /// Read one prediction file of a model
    pub async fn get_predictions(
        &self,
        model_directory: &str,
        filename: &str,
    ) -> Result<String, DomainError> {
        validate_path_component("model directory", model_directory)?;
        validate_path_component("filename", filename)?;

        debug!(model_directory, filename, "Reading prediction file");
        self.repository
            .read_prediction(model_directory, filename)
            .await
    }
}

/// Reject anything that is not a single plain path component
fn validate_path_component(kind: &str, value: &str) -> Result<(), DomainError> {
    let mut components = Path::new(value).components();

    let is_plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !value.contains(['/', '\\', '\0']);

    if !is_plain {
        return Err(DomainError::validation(format!(
            "Invalid {} '{}'",
            kind, value
        )));
    }

    Ok(())
}
