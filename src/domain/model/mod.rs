//! Model domain - Trained model directories and their prediction files

mod directory_name;
mod entity;
mod repository;

pub use directory_name::{DecodeError, ModelDirectoryName, NAME_SEGMENT_SEPARATOR};
pub use entity::{ModelRecord, PredictionFileSet, TEST_MARKER, VALIDATION_MARKER};
pub use repository::ModelRepository;

#[cfg(test)]
pub use repository::MockModelRepository;
