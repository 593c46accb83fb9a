//! Domain layer - Model records, naming scheme and repository contracts

pub mod error;
pub mod model;

pub use error::DomainError;
pub use model::{
    DecodeError, ModelDirectoryName, ModelRecord, ModelRepository, PredictionFileSet,
};
