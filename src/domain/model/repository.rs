//! Model repository trait

use async_trait::async_trait;

use super::ModelRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Source of discovered models and their prediction files
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Scan for every model that has at least one test prediction file
    async fn discover(&self) -> Result<Vec<ModelRecord>, DomainError>;

    /// Check that the model root can be listed, without inspecting models
    async fn check_root(&self) -> Result<(), DomainError>;

    /// Read a prediction file of a model as text
    async fn read_prediction(
        &self,
        model_directory: &str,
        filename: &str,
    ) -> Result<String, DomainError>;
}
