//! Prediction Catalog
//!
//! Discovers trained models stored on disk and serves their prediction files:
//! - Decodes hyper-parameters from model directory names
//! - Groups prediction files into test and validation splits
//! - Exposes discovery and retrieval over HTTP and the command line

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::model::FilesystemModelRepository;
use infrastructure::services::ModelService;

/// Create the model service for the configured model root
pub fn create_model_service(config: &AppConfig) -> ModelService<FilesystemModelRepository> {
    let repository = FilesystemModelRepository::from_config(&config.models);
    ModelService::new(Arc::new(repository))
}

/// Create application state for the HTTP API
pub fn create_app_state(config: &AppConfig) -> AppState {
    AppState::new(Arc::new(create_model_service(config)))
}
