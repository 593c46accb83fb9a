//! Model listing types

use serde::{Deserialize, Serialize};

use crate::domain::ModelRecord;

/// List models response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelRecord>,
}

impl ModelsResponse {
    /// Create a new models response
    pub fn new(models: Vec<ModelRecord>) -> Self {
        Self {
            object: "list".to_string(),
            data: models,
        }
    }
}
