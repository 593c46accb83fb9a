//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, ModelRecord, ModelRepository};
use crate::infrastructure::services::ModelService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub model_service: Arc<dyn ModelServiceTrait>,
}

/// Trait for model service operations
#[async_trait::async_trait]
pub trait ModelServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<ModelRecord>, DomainError>;
    async fn get_required(&self, model_directory: &str) -> Result<ModelRecord, DomainError>;
    async fn check_ready(&self) -> Result<(), DomainError>;
    async fn get_predictions(
        &self,
        model_directory: &str,
        filename: &str,
    ) -> Result<String, DomainError>;
}

#[async_trait::async_trait]
impl<R: ModelRepository + 'static> ModelServiceTrait for ModelService<R> {
    async fn list(&self) -> Result<Vec<ModelRecord>, DomainError> {
        ModelService::list(self).await
    }

    async fn get_required(&self, model_directory: &str) -> Result<ModelRecord, DomainError> {
        ModelService::get_required(self, model_directory).await
    }

    async fn check_ready(&self) -> Result<(), DomainError> {
        ModelService::check_ready(self).await
    }

    async fn get_predictions(
        &self,
        model_directory: &str,
        filename: &str,
    ) -> Result<String, DomainError> {
        ModelService::get_predictions(self, model_directory, filename).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(model_service: Arc<dyn ModelServiceTrait>) -> Self {
        Self { model_service }
    }

    /// Build state around a model repository
    pub fn from_repository<R: ModelRepository + 'static>(repository: R) -> Self {
        Self::new(Arc::new(ModelService::new(Arc::new(repository))))
    }
}
